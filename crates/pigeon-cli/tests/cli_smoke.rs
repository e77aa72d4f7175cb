use assert_cmd::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

fn repo_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .expect("expected crates/<name> layout")
        .to_path_buf()
}

fn fixture(name: &str) -> PathBuf {
    let path = repo_root().join("fixtures").join("pedigree").join(name);
    assert!(path.exists(), "fixture missing: {}", path.display());
    path
}

fn run_json(args: &[&str]) -> serde_json::Value {
    let exe = assert_cmd::cargo_bin!("pigeon-cli");
    let output = Command::new(exe)
        .args(args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    serde_json::from_slice(&output).expect("json output")
}

#[test]
fn cli_prints_pedigree_tree() {
    let store = fixture("basic.json");
    let value = run_json(&[
        "tree",
        "--pigeon",
        "kid",
        store.to_string_lossy().as_ref(),
    ]);
    assert_eq!(value["depth"], 5);
    assert_eq!(value["known"], 7);
    let slots = value["slots"].as_array().unwrap();
    assert_eq!(slots.len(), 31);
    assert_eq!(slots[0]["pigeon"]["id"], "kid");
    assert_eq!(slots[2]["pigeon"]["id"], "dam");
    assert!(slots[6]["pigeon"].is_null());
    assert_eq!(slots[11]["generation"], 3);
}

#[test]
fn cli_lays_out_with_yaml_config() {
    let store = fixture("basic.json");
    let config = fixture("report.yaml");
    let value = run_json(&[
        "layout",
        "--pigeon",
        "kid",
        "--depth",
        "4",
        "--config",
        config.to_string_lossy().as_ref(),
        store.to_string_lossy().as_ref(),
    ]);
    let slots = value["slots"].as_array().unwrap();
    assert_eq!(slots.len(), 15);
    assert_eq!(value["columns"], 4);
    // middle_right is empty in report.yaml, so the sex line is gone.
    let texts: Vec<&str> = slots[1]["lines"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["text"].as_str().unwrap())
        .collect();
    assert_eq!(
        texts,
        ["BE-6100200-20", "Old Storm", "dark checker", "Janssen", "Super breeder"]
    );
}

#[test]
fn cli_renders_svg_to_file() {
    let store = fixture("basic.json");
    let tmp = tempfile::tempdir().expect("tempdir");
    let out = tmp.path().join("pedigree.svg");

    let exe = assert_cmd::cargo_bin!("pigeon-cli");
    Command::new(exe)
        .args([
            "render",
            "--pigeon",
            "kid",
            "--slot-labels",
            "--out",
            out.to_string_lossy().as_ref(),
            store.to_string_lossy().as_ref(),
        ])
        .assert()
        .success();

    let svg = fs::read_to_string(&out).expect("read svg");
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("Blue Thunder"));
    assert_eq!(svg.matches("<rect class=\"box\"").count(), 31);
}

#[test]
fn cli_blank_template_without_pigeon() {
    let store = fixture("basic.json");
    let value = run_json(&["tree", "--depth", "3", store.to_string_lossy().as_ref()]);
    assert_eq!(value["known"], 0);
    assert_eq!(value["slots"].as_array().unwrap().len(), 7);
}

#[test]
fn cli_reads_store_from_stdin() {
    let exe = assert_cmd::cargo_bin!("pigeon-cli");
    let output = assert_cmd::Command::new(exe)
        .args(["tree", "--pigeon", "a", "--depth", "2", "-"])
        .write_stdin(r#"{ "pigeons": [ { "id": "a", "band": { "number": "1" } } ] }"#)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["known"], 1);
}

#[test]
fn cli_rejects_unknown_pigeon_and_bad_depth() {
    let store = fixture("basic.json");
    let exe = assert_cmd::cargo_bin!("pigeon-cli");
    Command::new(&exe)
        .args(["tree", "--pigeon", "nobody", store.to_string_lossy().as_ref()])
        .assert()
        .code(3);

    Command::new(&exe)
        .args(["tree", "--pigeon", "kid", "--depth", "0", store.to_string_lossy().as_ref()])
        .assert()
        .code(1);

    Command::new(&exe).args(["--bogus"]).assert().code(2);
}

#[test]
fn cli_accepts_store_flag() {
    let store = fixture("basic.json");
    let value = run_json(&[
        "tree",
        "--store",
        store.to_string_lossy().as_ref(),
        "--pigeon",
        "kid",
        "--depth",
        "3",
    ]);
    // dam.dam is missing, so six of the seven slots are known.
    assert_eq!(value["known"], 6);
    assert_eq!(value["slots"][1]["pigeon"]["id"], "sire");

    // A second store source is a usage error.
    let exe = assert_cmd::cargo_bin!("pigeon-cli");
    Command::new(&exe)
        .args([
            "tree",
            "--store",
            store.to_string_lossy().as_ref(),
            store.to_string_lossy().as_ref(),
        ])
        .assert()
        .code(2);
    Command::new(&exe).args(["tree", "--store"]).assert().code(2);
}
