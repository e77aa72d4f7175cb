use pigeon_core::{MemoryStore, PedigreeTree, build_pedigree_tree};
use pigeon_layout::svg::{SvgRenderOptions, render_pedigree_debug_svg};
use pigeon_layout::{LayoutConfiguration, compute_layout};
use std::path::PathBuf;

fn fixture_store() -> MemoryStore {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("fixtures")
        .join("pedigree")
        .join("basic.json");
    let text = std::fs::read_to_string(&path).expect("fixture");
    MemoryStore::from_json_str(&text).expect("store")
}

#[test]
fn svg_contains_boxes_text_and_connectors() {
    let store = fixture_store();
    let tree = build_pedigree_tree(&store, store.ancestor(&"kid".into()), 5).unwrap();
    let layout = compute_layout(&tree, &LayoutConfiguration::default(), 277.0, 170.0, 0.0).unwrap();
    let svg = render_pedigree_debug_svg(&layout, &SvgRenderOptions::default());

    assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert_eq!(svg.matches("<rect class=\"box\"").count(), 31);
    assert!(svg.contains(">BE-6012345-23</text>"));
    assert!(svg.contains(">Blue Thunder</text>"));
    assert!(svg.contains("stroke=\"#c2185b\""));
    assert!(svg.contains("<line class=\"connector\""));
    assert!(svg.contains('♀'));
}

#[test]
fn svg_can_skip_unknown_ancestors_and_connectors() {
    let store = fixture_store();
    let tree = build_pedigree_tree(&store, store.ancestor(&"kid".into()), 5).unwrap();
    let layout = compute_layout(&tree, &LayoutConfiguration::default(), 277.0, 170.0, 0.0).unwrap();
    let options = SvgRenderOptions {
        include_empty_boxes: false,
        include_connectors: false,
        ..SvgRenderOptions::default()
    };
    let svg = render_pedigree_debug_svg(&layout, &options);
    assert_eq!(svg.matches("<rect class=\"box\"").count(), tree.known_count());
    assert!(!svg.contains("<line"));
}

#[test]
fn svg_escapes_text() {
    let store = MemoryStore::from_json_str(
        r#"{ "pigeons": [ { "id": "x", "band": { "number": "1" }, "name": "Tom & <Jerry>" } ] }"#,
    )
    .unwrap();
    let tree = build_pedigree_tree(&store, store.ancestor(&"x".into()), 2).unwrap();
    let layout = compute_layout(&tree, &LayoutConfiguration::default(), 100.0, 100.0, 0.0).unwrap();
    let svg = render_pedigree_debug_svg(&layout, &SvgRenderOptions::default());
    assert!(svg.contains("Tom &amp; &lt;Jerry&gt;"));
}

#[test]
fn blank_template_renders_only_boxes() {
    let tree = PedigreeTree::blank(4).unwrap();
    let layout = compute_layout(&tree, &LayoutConfiguration::default(), 200.0, 120.0, 10.0).unwrap();
    let svg = render_pedigree_debug_svg(&layout, &SvgRenderOptions::default());
    assert_eq!(svg.matches("<rect class=\"box\"").count(), 15);
    assert!(!svg.contains("<text class=\"band\""));
}
