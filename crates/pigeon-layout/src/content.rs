//! Text lines of a details box.

use crate::config::{BoxField, LayoutConfiguration};
use crate::model::{BoxLine, EdgeStyle, LineRole};
use pigeon_core::{Pigeon, Sex};

/// Band first, then the four corner fields, then the extra fields, cut off at `allowed` lines.
///
/// Blank values and `Empty` selectors do not use up a line.
pub(crate) fn box_lines(
    pigeon: &Pigeon,
    config: &LayoutConfiguration,
    allowed: u32,
) -> Vec<BoxLine> {
    let allowed = allowed.max(1) as usize;
    let mut lines = vec![BoxLine {
        role: LineRole::Band,
        text: pigeon.band.to_string(),
    }];

    let content = &config.content;
    let corners = [
        (LineRole::TopRight, content.top_right),
        (LineRole::MiddleLeft, content.middle_left),
        (LineRole::MiddleRight, content.middle_right),
        (LineRole::BottomLeft, content.bottom_left),
    ];
    let fields = corners.into_iter().filter_map(|(role, field)| match field {
        BoxField::Empty => None,
        BoxField::Pigeon(field) => Some((role, pigeon.field(field).into_owned())),
    });

    let extras = pigeon
        .extras()
        .enumerate()
        .filter(|_| config.show_comments)
        .map(|(i, text)| (LineRole::Extra(i), text.to_string()));

    lines.extend(
        fields
            .chain(extras)
            .filter(|(_, text)| !text.trim().is_empty())
            .take(allowed - 1)
            .map(|(role, text)| BoxLine { role, text }),
    );
    lines
}

pub(crate) fn sex_sign(pigeon: &Pigeon, config: &LayoutConfiguration) -> Option<char> {
    if config.show_sex_sign {
        pigeon.sex.sign()
    } else {
        None
    }
}

pub(crate) fn edge_style(pigeon: &Pigeon, config: &LayoutConfiguration) -> EdgeStyle {
    if !config.color_edges {
        return EdgeStyle::Plain;
    }
    match pigeon.sex {
        Sex::Cock => EdgeStyle::Cock,
        Sex::Hen => EdgeStyle::Hen,
        Sex::Young => EdgeStyle::Plain,
    }
}
