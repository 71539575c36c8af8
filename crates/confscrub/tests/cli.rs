//! Runs the `confscrub` binary against temporary projects.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

/// Run the binary inside `project`, isolated from the user's own config.
fn confscrub(project: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_confscrub"))
        .args(args)
        .current_dir(project)
        .env("HOME", project)
        .env("XDG_CONFIG_HOME", project.join(".config"))
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_config_validate_fails_on_invalid_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("confscrub.toml"), "keys = [\"a..b\"]\n").unwrap();

    let output = confscrub(dir.path(), &["config", "validate"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("empty segment"), "{stderr}");
}

#[test]
fn test_config_validate_accepts_valid_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("confscrub.toml"), "keys = [\"a.b\"]\n").unwrap();

    let output = confscrub(dir.path(), &["config", "validate"]);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Configuration is valid."));
}

#[test]
fn test_run_key_flag_replaces_invalid_configured_keys() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("confscrub.toml"), "keys = [\"a..b\"]\nroot = \"out\"\n").unwrap();
    fs::create_dir_all(dir.path().join("out")).unwrap();
    fs::write(dir.path().join("out/app.yml"), "db:\n  password: hunter2\n").unwrap();

    let output = confscrub(dir.path(), &["run", "-k", "db.password", "--json"]);

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["keys_redacted"], 1);
    let written = fs::read_to_string(dir.path().join("out/app.yml")).unwrap();
    assert!(!written.contains("hunter2"));
}

#[test]
fn test_run_rejects_invalid_key_flag() {
    let dir = tempfile::tempdir().unwrap();

    let output = confscrub(dir.path(), &["run", "-k", "a."]);

    assert!(!output.status.success());
}

#[test]
fn test_parse_error_exits_non_zero() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("out")).unwrap();
    fs::write(dir.path().join("out/broken.json"), "{ nope").unwrap();

    let output = confscrub(dir.path(), &["run", "--root", "out", "-k", "a"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("broken.json"));
}
