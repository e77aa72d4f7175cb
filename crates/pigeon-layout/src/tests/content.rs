use crate::config::*;
use crate::content::{box_lines, edge_style, sex_sign};
use crate::model::{EdgeStyle, LineRole};
use pigeon_core::{Band, Pigeon, PigeonField, Sex};

fn pigeon() -> Pigeon {
    let mut p = Pigeon::new("p", Band::new("123").with_country("NL").with_year("19"), Sex::Hen);
    p.name = "Ruby".to_string();
    p.colour = "red".to_string();
    p.strain = "Janssen".to_string();
    p.extra = [
        "1st Bourges".to_string(),
        String::new(),
        "3rd Tours".to_string(),
        String::new(),
        String::new(),
        "dam of champions".to_string(),
    ];
    p
}

fn roles(lines: &[crate::model::BoxLine]) -> Vec<LineRole> {
    lines.iter().map(|l| l.role).collect()
}

#[test]
fn single_line_shows_only_the_band() {
    let config = LayoutConfiguration::default();
    let lines = box_lines(&pigeon(), &config, 1);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].role, LineRole::Band);
    assert_eq!(lines[0].text, "NL-123-19");

    assert_eq!(box_lines(&pigeon(), &config, 0).len(), 1);
}

#[test]
fn corners_come_before_extras_and_blanks_are_skipped() {
    let config = LayoutConfiguration::default();
    let lines = box_lines(&pigeon(), &config, 12);
    assert_eq!(
        roles(&lines),
        [
            LineRole::Band,
            LineRole::TopRight,
            LineRole::MiddleLeft,
            LineRole::MiddleRight,
            LineRole::BottomLeft,
            LineRole::Extra(0),
            LineRole::Extra(2),
            LineRole::Extra(5),
        ]
    );
    assert_eq!(lines[1].text, "Ruby");
    assert_eq!(lines[3].text, "hen");
    assert_eq!(lines[7].text, "dam of champions");
}

#[test]
fn allowance_cuts_off_extras_first() {
    let config = LayoutConfiguration::default();
    let lines = box_lines(&pigeon(), &config, 6);
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[5].role, LineRole::Extra(0));
}

#[test]
fn empty_selectors_and_hidden_comments() {
    let config = LayoutConfiguration {
        content: BoxContent {
            middle_left: BoxField::Pigeon(PigeonField::Loft),
            ..BoxContent::empty()
        },
        show_comments: false,
        ..LayoutConfiguration::default()
    };
    // Loft is blank, so only the band remains.
    let lines = box_lines(&pigeon(), &config, 6);
    assert_eq!(roles(&lines), [LineRole::Band]);
}

#[test]
fn sex_sign_and_edges_follow_toggles() {
    let p = pigeon();
    let mut config = LayoutConfiguration::default();
    assert_eq!(sex_sign(&p, &config), Some('♀'));
    assert_eq!(edge_style(&p, &config), EdgeStyle::Hen);

    config.show_sex_sign = false;
    config.color_edges = false;
    assert_eq!(sex_sign(&p, &config), None);
    assert_eq!(edge_style(&p, &config), EdgeStyle::Plain);
}
