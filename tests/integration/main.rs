//! Integration tests for the ci-component-lint CLI
//!
//! These tests run the binary against temporary component directories and
//! check stdout, stderr and the exit code.


use std::fs;
use std::path::Path;

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a ci-component-lint command
fn lint() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("ci-component-lint"))
}

/// Helper to lay out a well-formed component
fn valid_component(path: &Path) {
    fs::write(path.join("README.md"), "# My component\n").unwrap();
    fs::create_dir_all(path.join("templates")).unwrap();
    fs::write(path.join("templates/build.yml"), "spec:\n  inputs: {}\n").unwrap();
}

// =============================================================================
// BASICS
// =============================================================================

#[test]
fn test_version() {
    lint()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("ci-component-lint"));
}

#[test]
fn test_help() {
    lint()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--only-failures"))
        .stdout(predicate::str::contains("--soft-fail"));
}

// =============================================================================
// EXIT CODES
// =============================================================================

/// Empty directory: README and templates missing, templates is an error
#[test]
fn test_empty_directory_fails() {
    let temp = TempDir::new().unwrap();

    lint()
        .arg(temp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("missing-root-readme"))
        .stdout(predicate::str::contains("missing-root-templates-dir"))
        .stdout(predicate::str::contains("wrong-yaml-file-extension"));
}

#[test]
fn test_valid_component_passes() {
    let temp = TempDir::new().unwrap();
    valid_component(temp.path());

    lint().arg(temp.path()).assert().code(0);
}

/// A failing warning alone never fails the run
#[test]
fn test_warning_only_passes() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("templates")).unwrap();

    lint()
        .arg(temp.path())
        .assert()
        .code(0)
        .stdout(predicate::str::contains("No README.md file found in root directory"));
}

#[test]
fn test_yaml_file_fails() {
    let temp = TempDir::new().unwrap();
    valid_component(temp.path());
    fs::write(temp.path().join("templates/deploy.yaml"), "").unwrap();

    lint().arg(temp.path()).assert().code(1);
}

#[test]
fn test_soft_fail() {
    let temp = TempDir::new().unwrap();

    lint()
        .args(["--soft-fail"])
        .arg(temp.path())
        .assert()
        .code(0)
        .stdout(predicate::str::contains("missing-root-templates-dir"));

    lint().arg("-s").arg(temp.path()).assert().code(0);
}

#[test]
fn test_default_workdir_is_current_directory() {
    let temp = TempDir::new().unwrap();
    valid_component(temp.path());

    lint().current_dir(temp.path()).assert().code(0);
}

#[test]
fn test_relative_workdir() {
    let temp = TempDir::new().unwrap();
    let component = temp.path().join("component");
    fs::create_dir(&component).unwrap();
    valid_component(&component);

    lint().arg("component").current_dir(temp.path()).assert().code(0);
}

// =============================================================================
// SETUP ERRORS
// =============================================================================

#[test]
fn test_missing_workdir() {
    let temp = TempDir::new().unwrap();

    lint()
        .arg(temp.path().join("nope"))
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Workdir does not exist"));
}

#[test]
fn test_workdir_is_a_file() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("README.md");
    fs::write(&file, "# hi").unwrap();

    lint().arg(&file).assert().code(1).stderr(predicate::str::contains("Workdir does not exist"));
}

#[test]
fn test_unknown_format() {
    let temp = TempDir::new().unwrap();

    lint()
        .args(["-o", "xml"])
        .arg(temp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("unsupported output format: xml"));
}

/// Unknown format is rejected even when soft-fail is set
#[test]
fn test_unknown_format_with_soft_fail() {
    let temp = TempDir::new().unwrap();
    valid_component(temp.path());

    lint()
        .args(["-o", "xml", "--soft-fail"])
        .arg(temp.path())
        .assert()
        .code(1);
}

#[cfg(unix)]
#[test]
fn test_walk_error_reports_nothing() {
    let temp = TempDir::new().unwrap();
    valid_component(temp.path());
    std::os::unix::fs::symlink(temp.path().join("void"), temp.path().join("dangling")).unwrap();

    lint()
        .args(["-o", "json"])
        .arg(temp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("failed to walk"));
}

// =============================================================================
// CATALOG
// =============================================================================

#[test]
fn test_catalog_override() {
    let temp = TempDir::new().unwrap();
    let catalog = temp.path().join("rules.toml");
    fs::write(
        &catalog,
        "[rules.missing-root-templates-dir]\nmessage = \"Put jobs in templates/\"\nseverity = \"warning\"\n",
    )
    .unwrap();
    let component = temp.path().join("component");
    fs::create_dir(&component).unwrap();

    lint()
        .arg("--catalog")
        .arg(&catalog)
        .arg(&component)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Put jobs in templates/"));
}

#[test]
fn test_catalog_missing_file() {
    let temp = TempDir::new().unwrap();

    lint()
        .arg("--catalog")
        .arg(temp.path().join("absent.toml"))
        .arg(temp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read rule catalog"));
}
