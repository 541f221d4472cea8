//! Integration tests for CLI

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

fn splat_args() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("splat-args"))
}

fn stdout_json(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("json on stdout")
}

#[test]
fn test_cli_version() {
    let mut cmd = splat_args();
    cmd.arg("--version");
    cmd.assert().success().stdout(predicate::str::contains("splat-args"));
}

#[test]
fn test_cli_help() {
    let mut cmd = splat_args();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("defaults"))
        .stdout(predicate::str::contains("save"))
        .stdout(predicate::str::contains("combine"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_save_help_lists_groups() {
    let mut cmd = splat_args();
    cmd.args(["save", "--help"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Loading Parameters"))
        .stdout(predicate::str::contains("Pipeline Parameters"))
        .stdout(predicate::str::contains("Optimization Parameters"))
        .stdout(predicate::str::contains("--source_path"))
        .stdout(predicate::str::contains("-s"));
}

#[test]
fn test_defaults_prints_every_group() {
    let output = splat_args().arg("defaults").output().expect("run");
    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["sh_degree"], 3);
    assert_eq!(json["convert_SHs_python"], true);
    assert_eq!(json["iterations"], 30000);
    assert_eq!(json["densify_from_iter"], serde_json::json!([500.0]));
}

#[test]
fn test_defaults_single_group() {
    let output = splat_args().args(["defaults", "--group", "pipeline"]).output().expect("run");
    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json.as_object().expect("object").len(), 3);
}

#[test]
fn test_defaults_rejects_unknown_group() {
    let mut cmd = splat_args();
    cmd.args(["defaults", "--group", "render"]);
    cmd.assert().failure().stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_save_requires_model_path() {
    let mut cmd = splat_args();
    cmd.args(["save", "-s", "/data/garden"]);
    cmd.assert().failure().stderr(predicate::str::contains("--model_path"));
}

#[test]
fn test_save_then_combine_with_overrides() {
    let tmp = TempDir::new().expect("tmp");
    let model_dir = tmp.path().join("garden");
    let model_path = model_dir.to_str().expect("utf8 path");

    splat_args()
        .args(["save", "-s", "/data/garden", "-m", model_path, "--iterations", "7000", "--eval"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Saved config to"));
    assert!(model_dir.join("cfg_args").is_file());

    let output = splat_args()
        .args(["combine", "-m", model_path, "-r", "8", "--debug"])
        .output()
        .expect("run");
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let json = stdout_json(&output);
    assert_eq!(json["source_path"], "/data/garden");
    assert_eq!(json["resolution"], 8);
    assert_eq!(json["iterations"], 7000);
    assert_eq!(json["eval"], true);
    assert_eq!(json["debug"], true);
}

#[test]
fn test_combine_only_extracts_one_group() {
    let tmp = TempDir::new().expect("tmp");
    let model_path = tmp.path().to_str().expect("utf8 path");
    fs::write(tmp.path().join("cfg_args"), r#"{"source_path": "/data/fern", "iterations": 100}"#)
        .expect("write");

    let output = splat_args()
        .args(["combine", "-m", model_path, "--only", "model"])
        .output()
        .expect("run");
    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["source_path"], "/data/fern");
    assert!(json.get("iterations").is_none());
    assert!(json.get("debug").is_none());
}

#[test]
fn test_combine_without_saved_config() {
    let tmp = TempDir::new().expect("tmp");
    let model_path = tmp.path().to_str().expect("utf8 path");

    let output = splat_args()
        .args(["combine", "-m", model_path, "--sh_degree", "1"])
        .output()
        .expect("run");
    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["sh_degree"], 1);
    assert_eq!(json["model_path"], model_path);
    assert!(json["source_path"].is_null());
    assert_eq!(json["convert_SHs_python"], true);
}

#[test]
fn test_combine_reads_legacy_namespace() {
    let tmp = TempDir::new().expect("tmp");
    let model_path = tmp.path().to_str().expect("utf8 path");
    fs::write(
        tmp.path().join("cfg_args"),
        "Namespace(sh_degree=3, source_path='/data/room', white_background=True, resolution=2)",
    )
    .expect("write");

    let output = splat_args().args(["combine", "-m", model_path]).output().expect("run");
    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["source_path"], "/data/room");
    assert_eq!(json["white_background"], true);
    assert_eq!(json["resolution"], 2);
}

#[test]
fn test_combine_fails_on_malformed_config() {
    let tmp = TempDir::new().expect("tmp");
    let model_path = tmp.path().to_str().expect("utf8 path");
    fs::write(tmp.path().join("cfg_args"), "{ not json").expect("write");

    let mut cmd = splat_args();
    cmd.args(["combine", "-m", model_path]);
    cmd.assert().failure().stderr(predicate::str::contains("malformed config file"));
}

#[test]
fn test_completions_bash() {
    let mut cmd = splat_args();
    cmd.args(["completions", "bash"]);
    cmd.assert().success().stdout(predicate::str::contains("splat-args"));
}
