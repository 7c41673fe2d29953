//! Integration tests for the `ndfc` CLI binary.
//!
//! Controller-bound commands run against recorded responses (`--replay`),
//! so none of these need a live controller.
#![allow(clippy::unwrap_used)]

use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::{Value, json};
use tempfile::TempDir;

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a command for the `ndfc` binary with env isolation.
///
/// Clears all `ND_*` / `NDFC_*` env vars and points config directories at a
/// nonexistent path so tests never touch the user's real configuration.
fn ndfc_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("ndfc");
    cmd.env("HOME", "/tmp/ndfc-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/ndfc-cli-test-nonexistent")
        .env("NO_COLOR", "1")
        .env_remove("ND_PROFILE")
        .env_remove("ND_CONTROLLER")
        .env_remove("ND_USERNAME")
        .env_remove("ND_API_KEY")
        .env_remove("ND_OUTPUT")
        .env_remove("ND_INSECURE")
        .env_remove("ND_TIMEOUT")
        .env_remove("NDFC_DEFAULT_PROFILE")
        .env_remove("RUST_LOG");
    cmd
}

fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

/// Write a replay file holding `replies` in order.
fn replay_file(dir: &Path, replies: &[Value]) -> PathBuf {
    write_file(dir, "replay.json", &Value::Array(replies.to_vec()).to_string())
}

fn inventory_reply() -> Value {
    json!({
        "RETURN_CODE": 200,
        "METHOD": "GET",
        "REQUEST_PATH": "/api/v1/manage/switches?fabricName=SITE1",
        "MESSAGE": "OK",
        "DATA": {
            "switches": [
                {"hostname": "LE1", "serialNumber": "FDO111", "fabricManagementIp": "10.1.1.1", "vpcConfigured": true},
                {"hostname": "LE2", "serialNumber": "FDO222", "fabricManagementIp": "10.1.1.2", "vpcConfigured": true},
                {"hostname": "SP1", "serialNumber": "FDO333", "fabricManagementIp": "10.1.1.3", "vpcConfigured": false}
            ],
            "meta": {"counts": {"total": 3}}
        }
    })
}

fn ok_reply() -> Value {
    json!({"RETURN_CODE": 200, "MESSAGE": "OK", "DATA": {}})
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = ndfc_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    ndfc_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("credentials")
            .and(predicate::str::contains("fabric"))
            .and(predicate::str::contains("switches")),
    );
}

#[test]
fn test_version_flag() {
    ndfc_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("ndfc"));
}

#[test]
fn test_nested_subcommand_help() {
    ndfc_cmd()
        .args(["credentials", "default", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("get")
                .and(predicate::str::contains("save"))
                .and(predicate::str::contains("delete")),
        );
}

#[test]
fn test_completions_bash() {
    ndfc_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("_ndfc()"));
}

#[test]
fn test_completions_zsh() {
    ndfc_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

#[test]
fn test_inventory_requires_a_source() {
    let output = ndfc_cmd().args(["switches", "inventory"]).output().unwrap();
    assert_eq!(output.status.code(), Some(2));
}

// ── Configuration errors ────────────────────────────────────────────

#[test]
fn test_details_without_controller() {
    let output = ndfc_cmd()
        .args(["credentials", "details"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let text = combined_output(&output);
    assert!(
        text.contains("No controller configured"),
        "Expected missing controller error:\n{text}"
    );
}

#[test]
fn test_config_path_prints_location() {
    ndfc_cmd()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

// ── Replayed controller responses ───────────────────────────────────

#[test]
fn test_inventory_json_output() {
    let dir = TempDir::new().unwrap();
    let replay = replay_file(dir.path(), &[inventory_reply()]);

    let output = ndfc_cmd()
        .args(["switches", "inventory", "--fabric", "SITE1", "-o", "json"])
        .arg("--replay")
        .arg(&replay)
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", combined_output(&output));

    let rows: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(rows.as_array().map(Vec::len), Some(3));
    assert_eq!(rows[0]["fabricName"], "SITE1");
    assert_eq!(rows[0]["serialNumber"], "FDO111");
}

#[test]
fn test_inventory_plain_lists_serials() {
    let dir = TempDir::new().unwrap();
    let replay = replay_file(dir.path(), &[inventory_reply()]);

    ndfc_cmd()
        .args(["switches", "inventory", "--fabric", "SITE1", "-o", "plain"])
        .arg("--replay")
        .arg(&replay)
        .assert()
        .success()
        .stdout("FDO111\nFDO222\nFDO333\n");
}

#[test]
fn test_vpc_peer_plain() {
    let dir = TempDir::new().unwrap();
    let replay = replay_file(dir.path(), &[inventory_reply()]);

    ndfc_cmd()
        .args(["switches", "vpc-peer", "--fabric", "SITE1", "LE1", "LE2", "-o", "plain"])
        .arg("--replay")
        .arg(&replay)
        .assert()
        .success()
        .stdout("true\n");
}

#[test]
fn test_user_delete_with_yes() {
    let dir = TempDir::new().unwrap();
    let replay = replay_file(dir.path(), &[inventory_reply(), ok_reply()]);
    let config = write_file(
        dir.path(),
        "delete.yaml",
        "config:\n  - fabric_name: SITE1\n    switch_name: LE2\n",
    );

    ndfc_cmd()
        .args(["credentials", "user", "delete", "--yes", "-o", "plain"])
        .arg("--config")
        .arg(&config)
        .arg("--replay")
        .arg(&replay)
        .assert()
        .success()
        .stdout("FDO222\n")
        .stderr(predicate::str::contains("changed"));
}

#[test]
fn test_user_delete_check_mode_skips_prompt_and_request() {
    let dir = TempDir::new().unwrap();
    // Only the inventory lookup is sent; the removal is simulated.
    let replay = replay_file(dir.path(), &[inventory_reply()]);
    let config = write_file(
        dir.path(),
        "delete.yaml",
        "config:\n  - fabric_name: SITE1\n    switch_name: LE1\n",
    );

    ndfc_cmd()
        .args(["credentials", "user", "delete", "--check-mode", "-o", "plain"])
        .arg("--config")
        .arg(&config)
        .arg("--replay")
        .arg(&replay)
        .assert()
        .success()
        .stdout("FDO111\n")
        .stderr(predicate::str::contains("(check mode)"));
}

#[test]
fn test_user_save_unknown_switch() {
    let dir = TempDir::new().unwrap();
    let replay = replay_file(dir.path(), &[inventory_reply()]);
    let config = write_file(
        dir.path(),
        "save.yaml",
        "config:\n  - fabric_name: SITE1\n    switch_name: LE9\n    switch_username: admin\n    switch_password: secret\n",
    );

    let output = ndfc_cmd()
        .args(["credentials", "user", "save"])
        .arg("--config")
        .arg(&config)
        .arg("--replay")
        .arg(&replay)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(4));
    let text = combined_output(&output);
    assert!(
        text.contains("switch_name LE9 not found in fabric SITE1"),
        "Expected unknown switch error:\n{text}"
    );
}

#[test]
fn test_invalid_input_file() {
    let dir = TempDir::new().unwrap();
    let replay = replay_file(dir.path(), &[]);
    let config = write_file(dir.path(), "save.yaml", "switch_username: admin\n");

    let output = ndfc_cmd()
        .args(["credentials", "default", "save"])
        .arg("--config")
        .arg(&config)
        .arg("--replay")
        .arg(&replay)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(combined_output(&output).contains("save.yaml"));
}

#[test]
fn test_replay_exhausted() {
    let dir = TempDir::new().unwrap();
    let replay = replay_file(dir.path(), &[]);

    let output = ndfc_cmd()
        .args(["credentials", "details"])
        .arg("--replay")
        .arg(&replay)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let text = combined_output(&output);
    assert!(
        text.contains("No more scripted responses"),
        "Expected exhausted replay error:\n{text}"
    );
}
