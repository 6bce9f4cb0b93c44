//! CLI integration tests against real directory trees

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn setupcheck() -> Command {
    Command::cargo_bin("setupcheck").unwrap()
}

/// Create all four required directories under the base
fn full_tree() -> TempDir {
    let dir = TempDir::new().unwrap();
    for sub in ["app/etc", "var", "pub/media", "pub/static"] {
        fs::create_dir_all(dir.path().join(sub)).unwrap();
    }
    dir
}

#[test]
fn test_install_succeeds_on_complete_tree() {
    let base = full_tree();

    setupcheck()
        .args(["install", "--base"])
        .arg(base.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "All required directories are writable",
        ));
}

#[test]
fn test_install_fails_when_var_is_missing() {
    let base = full_tree();
    fs::remove_dir_all(base.path().join("var")).unwrap();

    setupcheck()
        .args(["install", "--base"])
        .arg(base.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Missing write permissions"))
        .stdout(predicate::str::contains(
            base.path().join("var").display().to_string(),
        ));
}

#[test]
fn test_install_fails_when_media_is_a_file() {
    let base = full_tree();
    let media = base.path().join("pub/media");
    fs::remove_dir_all(&media).unwrap();
    fs::write(&media, "not a directory").unwrap();

    setupcheck()
        .args(["install", "--base"])
        .arg(base.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("not a directory"))
        .stdout(predicate::str::contains(media.display().to_string()));
}

#[test]
fn test_install_json_output_lists_the_sets() {
    let base = full_tree();
    fs::remove_dir_all(base.path().join("var")).unwrap();

    let output = setupcheck()
        .args(["install", "--json", "--base"])
        .arg(base.path())
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(report["directories"].as_array().unwrap().len(), 4);
    assert_eq!(report["writable"].as_array().unwrap().len(), 3);
    let missing: Vec<&str> = report["missing"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert_eq!(
        missing,
        vec![base.path().join("var").to_str().unwrap()]
    );
    assert!(report["checked_at"].is_string());
}

#[test]
fn test_app_reports_missing_config_as_unnecessary_writable() {
    let base = TempDir::new().unwrap();

    setupcheck()
        .args(["app", "--base"])
        .arg(base.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Writable permission not needed"))
        .stdout(predicate::str::contains(
            base.path().join("app/etc").display().to_string(),
        ));
}

#[test]
fn test_app_is_quiet_for_healthy_config() {
    let base = full_tree();

    setupcheck()
        .args(["app", "--base"])
        .arg(base.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to report"));
}

#[test]
fn test_install_with_file_base_reports_all_missing() {
    // A base that is a file still resolves; every directory is simply
    // missing, so install reports all four
    let base = TempDir::new().unwrap();
    let file = base.path().join("base-is-a-file");
    fs::write(&file, "x").unwrap();

    setupcheck()
        .args(["install", "--base"])
        .arg(&file)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("missing"));
}

#[test]
fn test_verbose_prints_the_base() {
    let base = full_tree();

    setupcheck()
        .args(["install", "--verbose", "--base"])
        .arg(base.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Checking installation base"));
}
