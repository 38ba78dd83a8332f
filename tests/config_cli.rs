use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::prelude::*;
use predicates::str::contains;
use std::path::Path;
use tempfile::tempdir;

fn valprof(config: &Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("valprof");
    cmd.env("VALPROF_CONFIG_DIR", config);
    cmd
}

#[test]
fn get_returns_the_default_policy() {
    let tmp = tempdir().unwrap();
    valprof(tmp.path())
        .args(["config", "get", "filename_policy"])
        .assert()
        .success()
        .stdout(contains("error"));
}

#[test]
fn set_then_get_round_trips() {
    let tmp = tempdir().unwrap();
    valprof(tmp.path())
        .args(["config", "set", "filename_policy", "warn"])
        .assert()
        .success()
        .stdout(contains("ok"));
    valprof(tmp.path())
        .args(["config", "get", "filename_policy"])
        .assert()
        .success()
        .stdout(contains("warn"));
}

#[test]
fn unknown_key_and_bad_value_fail() {
    let tmp = tempdir().unwrap();
    valprof(tmp.path())
        .args(["config", "get", "color"])
        .assert()
        .failure()
        .stderr(contains("Unknown key"));
    valprof(tmp.path())
        .args(["config", "set", "filename_policy", "strict"])
        .assert()
        .failure()
        .stderr(contains("invalid filename_policy"));
}
