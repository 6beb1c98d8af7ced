//! Integration tests for `--json` output.

use std::fs;
use std::path::Path;
use std::process::Command;

fn write_presets(dir: &Path) {
    let config_dir = dir.join(".termdeck");
    fs::create_dir_all(&config_dir).expect("Failed to create .termdeck dir");
    fs::write(
        config_dir.join("presets.toml"),
        r#"
[[presets]]
name = "Dev Stack"

[[presets.terminals]]
name = "api"
shellPath = "/bin/bash"
shellArgs = ["-l"]
location = "Editor"
icon = "server"
env = { PORT = "8080" }
command = "cargo run"

[[presets.terminals]]
name = "docs"
shellPath = "/bin/sh"
location = "split:abc"
message = ""

[[presets]]
name = "???"
"#,
    )
    .expect("Failed to write presets");
}

fn run_json(dir: &Path, args: &[&str]) -> serde_json::Value {
    let output = Command::new(env!("CARGO_BIN_EXE_termdeck"))
        .current_dir(dir)
        .env("HOME", dir)
        .env_remove("TERMDECK_CONFIG")
        .args(args)
        .output()
        .expect("Failed to execute termdeck");

    assert!(
        output.status.success(),
        "termdeck {:?} failed. stderr: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );

    serde_json::from_slice(&output.stdout).expect("stdout should be valid JSON")
}

#[test]
fn test_list_json_shape() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_presets(temp_dir.path());

    let value = run_json(temp_dir.path(), &["list", "--json"]);
    let entries = value.as_array().expect("list --json should be an array");

    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0]["id"], "termdeck.run");
    assert_eq!(entries[0]["kind"], "interactive");
    assert!(entries[0].get("preset").is_none());

    assert_eq!(entries[1]["id"], "termdeck.preset.dev-stack");
    assert_eq!(entries[1]["slug"], "dev-stack");
    assert_eq!(entries[1]["preset"], "Dev Stack");
    assert_eq!(entries[1]["terminals"], 2);

    assert_eq!(entries[2]["id"], "termdeck.preset.preset-2");
    assert_eq!(entries[2]["terminals"], 0);
}

#[test]
fn test_show_json_maps_options() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_presets(temp_dir.path());

    let value = run_json(temp_dir.path(), &["show", "dev-stack", "--json"]);

    assert_eq!(value["id"], "termdeck.preset.dev-stack");
    assert_eq!(value["preset"], "Dev Stack");

    let api = &value["terminals"][0];
    assert_eq!(api["status"], "ready");
    assert_eq!(api["command"], "cargo run");
    assert_eq!(api["options"]["location"]["kind"], "editor");
    assert_eq!(api["options"]["icon"], "server");
    assert_eq!(api["options"]["shellArgs"][0], "-l");
    assert_eq!(api["options"]["env"]["PORT"], "8080");

    let docs = &value["terminals"][1];
    assert_eq!(docs["options"]["location"]["kind"], "panel");
    assert_eq!(docs["options"]["icon"], "terminal");
    assert!(docs["options"].get("message").is_none());
    assert!(docs.get("command").is_none());
}

#[test]
fn test_show_unknown_fails() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_presets(temp_dir.path());

    let output = Command::new(env!("CARGO_BIN_EXE_termdeck"))
        .current_dir(temp_dir.path())
        .env("HOME", temp_dir.path())
        .env_remove("TERMDECK_CONFIG")
        .args(["show", "missing", "--json"])
        .output()
        .expect("Failed to execute termdeck");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown command 'missing'"));
}
