//! End-to-end runs of the `jetkit` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn jetkit(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("jetkit").unwrap();
    cmd.env("JETKIT_CONFIG", home.join("config"))
        .env_remove("RUST_LOG");
    cmd
}

#[cfg(unix)]
fn fake_program(dir: &Path, name: &str, exit_code: i32) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\necho {name} \"$@\"\nexit {exit_code}\n")).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

#[test]
fn test_version() {
    let home = TempDir::new().unwrap();

    jetkit(home.path())
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[cfg(unix)]
#[test]
fn test_restore_fresh_project() {
    let home = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();
    let npm = fake_program(home.path(), "fake-npm", 0);

    jetkit(home.path())
        .env("JETKIT_PACKAGE_MANAGER", &npm)
        .args(["restore", "--project-root"])
        .arg(project.path())
        .assert()
        .success();

    let written = std::fs::read_to_string(project.path().join("oraclejetconfig.json")).unwrap();
    assert_eq!(written, format!("\"{}\"", env!("CARGO_PKG_VERSION")));
}

#[cfg(unix)]
#[test]
fn test_restore_relative_project_root_runs_hook() {
    let home = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();
    let project = workspace.path().join("app");
    let npm = fake_program(home.path(), "fake-npm", 0);

    std::fs::create_dir_all(project.join("scripts/hooks")).unwrap();
    std::fs::write(
        project.join("scripts/hooks/hooks.json"),
        r#"{"hooks":{"after_app_restore":"scripts/hooks/after.sh"}}"#,
    )
    .unwrap();
    std::fs::write(
        project.join("scripts/hooks/after.sh"),
        "touch \"$JETKIT_PROJECT_ROOT/hook-ran\"\n",
    )
    .unwrap();

    jetkit(home.path())
        .current_dir(workspace.path())
        .env("JETKIT_PACKAGE_MANAGER", &npm)
        .args(["restore", "--project-root", "app"])
        .assert()
        .success();

    assert!(project.join("hook-ran").exists());
    assert!(project.join("oraclejetconfig.json").exists());
}

#[cfg(unix)]
#[test]
fn test_restore_install_failure_exits_nonzero() {
    let home = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();
    let npm = fake_program(home.path(), "broken-npm", 3);

    jetkit(home.path())
        .env("JETKIT_PACKAGE_MANAGER", &npm)
        .args(["restore", "--project-root"])
        .arg(project.path())
        .assert()
        .code(1);

    assert!(!project.path().join("oraclejetconfig.json").exists());
}

#[test]
fn test_tooling_rejects_platform_option() {
    let home = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();
    std::fs::write(project.path().join("oraclejetconfig.json"), "{}").unwrap();

    jetkit(home.path())
        .args(["tooling", "build", "app", "-o", "platform=ios", "--project-root"])
        .arg(project.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("platform"));
}

#[test]
fn test_tooling_outside_project() {
    let home = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();

    jetkit(home.path())
        .args(["tooling", "serve", "app", "--project-root"])
        .arg(project.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not a project root"));
}

#[test]
fn test_invalid_option_is_usage_error() {
    let home = TempDir::new().unwrap();

    jetkit(home.path())
        .args(["create", "demo", "-o", "=value"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("has no key"));
}
