use crate::Result;
use crate::config::{LayoutConfiguration, SubjectMode};
use crate::content::{box_lines, edge_style, sex_sign};
use crate::geometry::Geometry;
use crate::model::{
    Bounds, EdgeStyle, GenerationBand, PedigreeLayout, Segment, SlotLayout, SlotRender,
};
use pigeon_core::geom::point;
use pigeon_core::pedigree::{dam_index, generation_of, sire_index};
use pigeon_core::{Ancestor, PedigreeTree};

/// Lays out every slot of `tree` inside a `usable_width` x `usable_height` area whose top edge
/// sits at `start_y`.
///
/// Unknown ancestors keep their box geometry with no text, so the result always has exactly
/// `tree.len()` slots. Slot 0 follows [`LayoutConfiguration::subject`].
pub fn compute_layout(
    tree: &PedigreeTree<'_>,
    config: &LayoutConfiguration,
    usable_width: f64,
    usable_height: f64,
    start_y: f64,
) -> Result<PedigreeLayout> {
    config.validate()?;
    let depth = tree.depth();
    let geometry = Geometry::new(depth, config, usable_width, usable_height, start_y)?;

    let mut slots = Vec::with_capacity(tree.len());
    for (index, ancestor) in tree.iter() {
        slots.push(layout_slot(&geometry, config, tree.len(), index, ancestor));
    }

    let bounds = Bounds::from_points(
        slots
            .iter()
            .filter(|s| !s.rect.is_empty())
            .flat_map(|s| [(s.rect.x, s.rect.y), (s.rect.right(), s.rect.bottom())]),
    );

    tracing::debug!(
        depth,
        slots = slots.len(),
        columns = geometry.columns(),
        usable_width,
        usable_height,
        "computed pedigree layout"
    );

    Ok(PedigreeLayout {
        depth,
        usable_width,
        usable_height,
        start_y,
        columns: geometry.columns(),
        column_width: geometry.column_width(),
        box_width: geometry.box_width(),
        bands: geometry.band_summaries(),
        slots,
        bounds,
    })
}

fn layout_slot(
    geometry: &Geometry,
    config: &LayoutConfiguration,
    len: usize,
    index: usize,
    ancestor: Ancestor<'_>,
) -> SlotLayout {
    let generation = generation_of(index);
    let lines_allowed = config.lines.allowed(generation);
    let pigeon = ancestor.pigeon();

    let render = if index == 0 {
        match config.subject {
            SubjectMode::Details => SlotRender::Details,
            SubjectMode::Image => SlotRender::Image {
                path: pigeon.and_then(|p| p.image.clone()),
            },
            SubjectMode::Hidden => SlotRender::Hidden,
        }
    } else {
        SlotRender::Details
    };

    let Some(column) = geometry.column_of(generation) else {
        // Hidden subject: no column, no connectors.
        return SlotLayout {
            index,
            generation,
            band: GenerationBand::of(generation),
            pigeon: pigeon.map(|p| p.id.clone()),
            render,
            rect: geometry.hidden_rect(),
            inner_side: geometry.inner_side(),
            first_column: true,
            last_column: geometry.is_last_generation(generation),
            lines_allowed,
            line_height: 0.0,
            lines: Vec::new(),
            sex_sign: None,
            edge: EdgeStyle::Plain,
            inner_stub: None,
            outer_stub: None,
            trunk: None,
        };
    };

    let rect = geometry.box_rect(index, generation, column);
    let mid_y = rect.mid_y();

    let parent_column = generation
        .checked_sub(1)
        .and_then(|g| geometry.column_of(g));
    let inner_stub = parent_column.map(|parent| {
        Segment::new(
            point(geometry.inner_x(column), mid_y),
            point(geometry.gap_mid_x(parent), mid_y),
        )
    });

    let (outer_stub, trunk) = if dam_index(index) < len {
        let gap_x = geometry.gap_mid_x(column);
        let sire_y = geometry.mid_y(sire_index(index), generation + 1);
        let dam_y = geometry.mid_y(dam_index(index), generation + 1);
        (
            Some(Segment::new(
                point(geometry.outer_x(column), mid_y),
                point(gap_x, mid_y),
            )),
            Some(Segment::new(point(gap_x, sire_y), point(gap_x, dam_y))),
        )
    } else {
        (None, None)
    };

    let (lines, sign, edge) = match (pigeon, &render) {
        (Some(p), SlotRender::Details) => (
            box_lines(p, config, lines_allowed),
            sex_sign(p, config),
            edge_style(p, config),
        ),
        (Some(p), _) => (Vec::new(), None, edge_style(p, config)),
        (None, _) => (Vec::new(), None, EdgeStyle::Plain),
    };

    SlotLayout {
        index,
        generation,
        band: GenerationBand::of(generation),
        pigeon: pigeon.map(|p| p.id.clone()),
        render,
        rect,
        inner_side: geometry.inner_side(),
        first_column: parent_column.is_none(),
        last_column: geometry.is_last_generation(generation),
        lines_allowed,
        line_height: rect.height / lines_allowed as f64,
        lines,
        sex_sign: sign,
        edge,
        inner_stub,
        outer_stub,
        trunk,
    }
}
