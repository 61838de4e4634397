use serde_json::Value;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;
use treesnap::{SnapshotBuilder, generate};
fn run_generate(root: &Path) -> Value {
    let options = SnapshotBuilder::new(root).build();
    let written = generate(&options).unwrap();
    assert_eq!(written, root.join("estrutura.yaml"));
    let text = fs::read_to_string(written).unwrap();
    serde_json::from_str(&text).unwrap()
}
fn contains_key(value: &Value, key: &str) -> bool {
    match value {
        Value::Object(map) => map.iter().any(|(k, v)| k == key || contains_key(v, key)),
        _ => false,
    }
}
#[test]
fn scenario_ignored_file_is_absent() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "hello").unwrap();
    fs::write(dir.path().join("b.txt"), "secret").unwrap();
    fs::write(dir.path().join(".gitignore"), "b.txt\n").unwrap();
    let tree = run_generate(dir.path());
    assert_eq!(tree["a.txt"], "hello");
    assert!(tree.get("b.txt").is_none());
    assert!(!tree.to_string().contains("secret"));
}
#[test]
fn scenario_ignored_directory_is_pruned() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("node_modules/left-pad/lib")).unwrap();
    fs::write(dir.path().join("node_modules/left-pad/index.js"), "module.exports = 1").unwrap();
    fs::write(dir.path().join("node_modules/left-pad/lib/pad.js"), "pad").unwrap();
    fs::create_dir(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("src/app.js"), "app").unwrap();
    fs::write(dir.path().join(".gitignore"), "# deps\nnode_modules/\n").unwrap();
    let tree = run_generate(dir.path());
    assert!(!contains_key(&tree, "node_modules"));
    assert!(!contains_key(&tree, "index.js"));
    assert!(!contains_key(&tree, "pad.js"));
    assert_eq!(tree["src"]["app.js"], "app");
}
#[test]
fn scenario_undecodable_file_gets_placeholder() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("good.txt"), "fine").unwrap();
    fs::write(dir.path().join("latin1.txt"), [b'c', b'a', b'f', 0xe9]).unwrap();
    let tree = run_generate(dir.path());
    assert_eq!(tree["good.txt"], "fine");
    let placeholder = tree["latin1.txt"].as_str().unwrap();
    assert!(placeholder.starts_with("<error reading file: "));
    assert!(placeholder.len() > "<error reading file: >".len());
}
#[test]
fn scenario_no_ignore_file_keeps_everything() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("a/b/c")).unwrap();
    fs::create_dir(dir.path().join("empty")).unwrap();
    fs::write(dir.path().join("root.txt"), "r").unwrap();
    fs::write(dir.path().join("a/one.txt"), "1").unwrap();
    fs::write(dir.path().join("a/b/two.txt"), "2").unwrap();
    fs::write(dir.path().join("a/b/c/three.txt"), "3").unwrap();
    let tree = run_generate(dir.path());
    assert_eq!(tree["root.txt"], "r");
    assert_eq!(tree["a"]["one.txt"], "1");
    assert_eq!(tree["a"]["b"]["two.txt"], "2");
    assert_eq!(tree["a"]["b"]["c"]["three.txt"], "3");
    assert_eq!(tree["empty"], serde_json::json!({}));
    assert_eq!(tree.as_object().unwrap().len(), 3);
}
#[test]
fn test_runs_are_idempotent() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("src/main.rs"), "fn main() {}\n").unwrap();
    fs::write(dir.path().join("README.md"), "# Título\n").unwrap();
    let options = SnapshotBuilder::new(dir.path()).build();
    let path = generate(&options).unwrap();
    let first = fs::read(&path).unwrap();
    generate(&options).unwrap();
    let second = fs::read(&path).unwrap();
    assert_eq!(first, second);
    let tree: Value = serde_json::from_slice(&second).unwrap();
    assert!(tree.get("estrutura.yaml").is_none());
}
#[test]
fn test_custom_output_and_ignore_file() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("keep.rs"), "keep").unwrap();
    fs::write(dir.path().join("drop.tmp"), "drop").unwrap();
    fs::write(dir.path().join(".snapignore"), "*.tmp").unwrap();
    let options = SnapshotBuilder::new(dir.path())
        .ignore_file(".snapignore")
        .output_file("snapshot.json")
        .indent(2)
        .build();
    let path = generate(&options).unwrap();
    assert!(path.ends_with("snapshot.json"));
    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("\n  \"keep.rs\": \"keep\""));
    assert!(!text.contains("drop.tmp"));
}
#[test]
fn test_binary_snapshots_current_directory() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "hello").unwrap();
    fs::write(dir.path().join("broken.txt"), [0xff, 0x00, 0xfe]).unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_treesnap"))
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.contains("Snapshot written to"));
    assert!(stdout.contains("estrutura.yaml"));
    let text = fs::read_to_string(dir.path().join("estrutura.yaml")).unwrap();
    let tree: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(tree["a.txt"], "hello");
    assert!(tree["broken.txt"].as_str().unwrap().starts_with("<error reading file: "));
}
#[test]
fn test_binary_fails_on_unreadable_root() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("does-not-exist");
    let output = Command::new(env!("CARGO_BIN_EXE_treesnap"))
        .arg(&missing)
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Error:"));
}
