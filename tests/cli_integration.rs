//! Integration tests for the `optic-desk` command line
//!
//! Runs the built binary from a scratch directory so no project config is
//! picked up.

use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

fn optic_desk(args: &[&str]) -> Output {
    let dir = TempDir::new().unwrap();
    optic_desk_in(&dir, args)
}

fn optic_desk_in(dir: &TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_optic-desk"))
        .args(args)
        .current_dir(dir.path())
        .env("RUST_LOG", "error")
        .output()
        .unwrap()
}

#[test]
fn test_replay_prints_snapshot() {
    let output = optic_desk(&["replay", "order", "goto 3", "product 4", "prev"]);
    assert!(output.status.success());

    let snapshot: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(snapshot["workflow"], "order");
    assert_eq!(snapshot["cursor"]["step"], 2);
    assert_eq!(snapshot["cursor"]["sub_step"], 1);
    assert_eq!(snapshot["selection"]["label"], "Accessories");
}

#[test]
fn test_replay_reports_rejected_commands_and_continues() {
    let output = optic_desk(&["replay", "sales-return", "product 99", "jump", "next"]);
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("rejected 'product 99'"));
    assert!(stderr.contains("rejected 'jump'"));

    let snapshot: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(snapshot["cursor"]["step"], 2);
}

#[test]
fn test_replay_unknown_workflow_fails() {
    let output = optic_desk(&["replay", "invoice", "next"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown workflow"));
}

#[test]
fn test_workflows_json_lists_all() {
    let output = optic_desk(&["workflows", "--json"]);
    assert!(output.status.success());

    let list: Value = serde_json::from_slice(&output.stdout).unwrap();
    let kinds: Vec<&str> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w["kind"].as_str().unwrap())
        .collect();
    assert_eq!(
        kinds,
        [
            "order",
            "sales-return",
            "stock-transfer-out",
            "stock-transfer-in",
            "offer",
            "grn"
        ]
    );
}

#[test]
fn test_workflows_text_marks_product_step() {
    let output = optic_desk(&["workflows"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Goods Receipt Note (grn)"));
    assert!(stdout.contains("3. Products *"));
}

#[test]
fn test_init_writes_project_config_once() {
    let dir = TempDir::new().unwrap();

    let output = optic_desk_in(&dir, &["--workflow", "offer", "init"]);
    assert!(output.status.success());
    let written =
        std::fs::read_to_string(dir.path().join(".optic-desk/config.toml")).unwrap();
    assert!(written.contains("default_workflow = \"offer\""));

    let again = optic_desk_in(&dir, &["init"]);
    assert!(!again.status.success());
    assert!(String::from_utf8_lossy(&again.stderr).contains("already exists"));

    // --force overwrites, and the existing file is loaded first
    let output = optic_desk_in(&dir, &["init", "--force"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("default workflow: offer"));
}
