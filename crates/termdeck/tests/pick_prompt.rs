//! Integration tests for the interactive `pick` command, answering the
//! prompt through stdin.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

fn write_presets(dir: &Path) {
    let config_dir = dir.join(".termdeck");
    fs::create_dir_all(&config_dir).expect("Failed to create .termdeck dir");
    fs::write(
        config_dir.join("presets.toml"),
        r#"
[[presets]]
name = "Dev"

[[presets.terminals]]
name = "server"
shellPath = "/bin/sh"
command = "make run"

[[presets]]
name = "Logs"

[[presets.terminals]]
name = "tail"
shellPath = "/bin/sh"
"#,
    )
    .expect("Failed to write presets");
}

fn pick_with_answer(dir: &Path, answer: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_termdeck"))
        .current_dir(dir)
        .env("HOME", dir)
        .env_remove("TERMDECK_CONFIG")
        .args(["--dry-run", "pick"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn termdeck");

    // The process may exit before reading, e.g. when no config exists
    let mut stdin = child.stdin.take().expect("stdin is piped");
    let _ = stdin.write_all(answer.as_bytes());
    drop(stdin);

    child.wait_with_output().expect("Failed to wait for termdeck")
}

#[test]
fn test_pick_by_number() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_presets(temp_dir.path());

    let output = pick_with_answer(temp_dir.path(), "2\n");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(output.status.success(), "stderr: {}", stderr);
    assert!(stderr.contains("Select a terminal preset:"));
    assert!(stderr.contains("  1) Dev\n  2) Logs"));
    assert!(stdout.contains(r#""name":"tail""#), "got: {}", stdout);
    assert!(stdout.contains(r#"Launched 1 of 1 terminal(s) from preset "Logs""#));
}

#[test]
fn test_pick_by_name_sends_command() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_presets(temp_dir.path());

    let output = pick_with_answer(temp_dir.path(), "Dev\n");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains(r#"send dry-run-1 "make run" enter"#), "got: {}", stdout);
}

#[test]
fn test_pick_cancel_reports_invalid_preset() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_presets(temp_dir.path());

    let output = pick_with_answer(temp_dir.path(), "\n");
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(output.status.success());
    assert!(stderr.contains("Error: Invalid preset"), "got: {}", stderr);
    assert!(!String::from_utf8_lossy(&output.stdout).contains("create"));
}

#[test]
fn test_pick_unknown_name_fails() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_presets(temp_dir.path());

    let output = pick_with_answer(temp_dir.path(), "Nope\n");
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("Error: Invalid preset"), "got: {}", stderr);
}

#[test]
fn test_pick_without_config_fails_before_prompt() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");

    let output = pick_with_answer(temp_dir.path(), "1\n");
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("Error: No config file found"), "got: {}", stderr);
    assert!(!stderr.contains("Select a terminal preset"));
}
