//! `pkgex check` end to end.

use assert_cmd::Command;
use packages_excluder::constants::CONFIG_ENV_VAR;
use packages_excluder::test_utils::{StorePaths, TestProject};
use predicates::prelude::*;

fn pkgex(project: &TestProject) -> Command {
    let mut cmd = Command::cargo_bin("pkgex").unwrap();
    cmd.current_dir(project.path()).env_remove(CONFIG_ENV_VAR).env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_check_text_output() {
    let project = TestProject::with_config("packages = [\"react\"]\n").unwrap();

    pkgex(&project)
        .args(["check", "node_modules/react/index.js", "node_modules/vue/index.js"])
        .assert()
        .success()
        .stdout(predicate::str::contains("excluded  node_modules/react/index.js"))
        .stdout(predicate::str::contains("included  node_modules/vue/index.js"));
}

#[test]
fn test_check_json_output() {
    let project = TestProject::with_config("").unwrap();
    let react = StorePaths::new("react").versioned_store("18.2.0");
    let vue = StorePaths::new("vue").versioned_store("3.4.0");

    let output = pkgex(&project)
        .args(["check", "--format", "json", "-p", "react", &react, &vue])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            { "path": react, "excluded": true },
            { "path": vue, "excluded": false },
        ])
    );
}

#[test]
fn test_check_components_flag() {
    let project = TestProject::with_config("").unwrap();
    let component = StorePaths::new("@myorg/ui.button").flattened_store_with_host("registry.npmjs.org");

    pkgex(&project)
        .args(["check", &component])
        .assert()
        .success()
        .stdout(predicate::str::contains("included"));

    pkgex(&project)
        .args(["check", "--exclude-components", &component])
        .assert()
        .success()
        .stdout(predicate::str::contains("excluded"));
}

#[test]
fn test_check_paths_outside_dependency_storage() {
    let project = TestProject::with_config("").unwrap();

    // Nothing to ignore, so the pattern does not match and the path is let through
    pkgex(&project)
        .args(["check", "-p", "react", "src/app.ts"])
        .assert()
        .success()
        .stdout(predicate::str::contains("excluded  src/app.ts"));
}

#[test]
fn test_check_requires_paths() {
    let project = TestProject::with_config("").unwrap();

    pkgex(&project).arg("check").assert().failure();
}
