//! Configuration discovery and errors through the binary.

use assert_cmd::Command;
use packages_excluder::constants::CONFIG_ENV_VAR;
use packages_excluder::test_utils::TestProject;
use predicates::prelude::*;

fn pkgex(project: &TestProject) -> Command {
    let mut cmd = Command::cargo_bin("pkgex").unwrap();
    cmd.current_dir(project.path()).env_remove(CONFIG_ENV_VAR);
    cmd
}

#[test]
fn test_explicit_config_flag() {
    let project = TestProject::new().unwrap();
    let elsewhere = TestProject::with_config("packages = [\"react\"]\n").unwrap();

    pkgex(&project)
        .args(["--config"])
        .arg(elsewhere.config_path())
        .args(["check", "node_modules/react/index.js"])
        .assert()
        .success()
        .stdout(predicate::str::contains("excluded"));
}

#[test]
fn test_config_from_environment() {
    let project = TestProject::new().unwrap();
    let elsewhere = TestProject::with_config("packages = [\"react\"]\n").unwrap();

    pkgex(&project)
        .env(CONFIG_ENV_VAR, elsewhere.config_path())
        .args(["check", "node_modules/react/index.js"])
        .assert()
        .success()
        .stdout(predicate::str::contains("excluded"));
}

#[test]
fn test_missing_explicit_config() {
    let project = TestProject::new().unwrap();

    pkgex(&project)
        .args(["--config", "does-not-exist.toml", "generate"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Configuration file not found"))
        .stderr(predicate::str::contains("PKGEX_CONFIG"));
}

#[test]
fn test_malformed_config() {
    let project = TestProject::with_config("packages = \"react\"\n").unwrap();

    pkgex(&project).arg("generate").assert().failure().code(1).stdout("");
}

#[test]
fn test_unknown_config_field() {
    let project = TestProject::with_config("pakages = [\"react\"]\n").unwrap();

    pkgex(&project)
        .arg("generate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration in "))
        .stderr(predicate::str::contains("excluder.toml: line 1: unknown field `pakages`"))
        .stderr(predicate::str::contains("Failed to parse").not());
}

#[test]
fn test_empty_package_in_config() {
    let project = TestProject::with_config("packages = [\"react\", \"\"]\n").unwrap();

    pkgex(&project)
        .arg("generate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid package name"));
}

#[test]
fn test_invalid_layout_in_config() {
    let project = TestProject::with_config("[layout]\nmodules_dir = \"a/b\"\n").unwrap();

    pkgex(&project)
        .arg("generate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid layout marker"));
}
