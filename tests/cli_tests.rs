use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use std::fs;

/// Isolated HOME so no real ~/.stagehand/rc is picked up
fn setup_test_env() -> TempDir {
    TempDir::new().unwrap()
}

fn get_stagehand_cmd(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("stagehand").unwrap();
    cmd.env("HOME", temp_dir.path());
    cmd.env_remove("STAGEHAND_WEBHOOK");
    cmd
}

#[test]
fn test_no_args_prints_banner() {
    let temp_dir = setup_test_env();

    get_stagehand_cmd(&temp_dir)
        .assert()
        .success()
        .code(0)
        .stdout(predicate::str::contains("Current stages:"))
        .stdout(predicate::str::contains("20. Under Review"))
        .stdout(predicate::str::contains("50. Reject"));
}

#[test]
fn test_version_command() {
    let temp_dir = setup_test_env();

    get_stagehand_cmd(&temp_dir)
        .args(["--version"])
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_preview_status_id() {
    let temp_dir = setup_test_env();

    get_stagehand_cmd(&temp_dir)
        .args(["preview", "Phone Screen"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PHONE_SCRE"))
        .stdout(predicate::str::contains("DT1054_18:UC_PHONE_SCRE"));
}

#[test]
fn test_preview_fields_use_default_color() {
    let temp_dir = setup_test_env();

    get_stagehand_cmd(&temp_dir)
        .args(["preview", "Offer 2", "45"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DT1054_18:UC_OFFER_2"))
        .stdout(predicate::str::contains("#47A447"))
        .stdout(predicate::str::contains("DYNAMIC_1054_STAGE_18"));
}

#[test]
fn test_add_empty_name_is_user_error() {
    let temp_dir = setup_test_env();

    get_stagehand_cmd(&temp_dir)
        .args(["add", "  ", "25"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("Error:"))
        .stderr(predicate::str::contains("Stage name cannot be empty"));
}

#[test]
fn test_add_invalid_color_is_user_error() {
    let temp_dir = setup_test_env();

    get_stagehand_cmd(&temp_dir)
        .args(["add", "Phone Screen", "25", "--color", "blue"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid color"));
}

#[test]
fn test_add_invalid_webhook_is_user_error() {
    let temp_dir = setup_test_env();

    get_stagehand_cmd(&temp_dir)
        .args(["--webhook", "not a url", "add", "Phone Screen", "25"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid webhook URL"));
}

#[test]
fn test_add_invalid_webhook_from_rc_file() {
    let temp_dir = setup_test_env();
    let config_dir = temp_dir.path().join(".stagehand");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("rc"), "webhook.url=ftp://example.com/rest/1/x\n").unwrap();

    get_stagehand_cmd(&temp_dir)
        .args(["add", "Phone Screen", "25"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("ftp://example.com/rest/1/x"));
}

#[test]
fn test_add_unreachable_webhook_is_internal_error() {
    let temp_dir = setup_test_env();

    // Nothing listens on port 9 (discard) on localhost
    get_stagehand_cmd(&temp_dir)
        .args(["--webhook", "http://127.0.0.1:9/rest/1/token", "add", "Phone Screen", "25"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::starts_with("Internal error:"))
        .stderr(predicate::str::contains("Failed to reach webhook"));
}

#[test]
fn test_add_requires_sort() {
    let temp_dir = setup_test_env();

    get_stagehand_cmd(&temp_dir)
        .args(["add", "Phone Screen"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("SORT"));
}
