#![allow(clippy::unwrap_used, clippy::expect_used)]

//! CLI smoke tests for the frontend-settings-server binary

use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn run_server(args: &[&str], envs: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_frontend-settings-server"));
    cmd.args(args).stdout(Stdio::piped()).stderr(Stdio::piped());
    for (key, value) in envs {
        cmd.env(key, value);
    }
    cmd.output()
        .expect("Failed to execute frontend-settings-server")
}

fn effective_config(stdout: &[u8]) -> String {
    let text = String::from_utf8_lossy(stdout);
    text.lines().skip(1).collect::<Vec<_>>().join("\n")
}

#[test]
fn test_cli_help_command() {
    let output = run_server(&["--help"], &[]);

    assert!(output.status.success(), "Help command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("run"));
    assert!(stdout.contains("check"));
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("--print-config"));
}

#[test]
fn test_cli_version_command() {
    let output = run_server(&["--version"], &[]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("frontend-settings-server"));
}

#[test]
fn test_missing_config_file_fails() {
    let output = run_server(&["--config", "/nonexistent/config.yaml", "check"], &[]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("config file does not exist"));
}

#[test]
fn test_check_accepts_valid_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(
        &path,
        "server:\n  port: 8088\nfrontend:\n  app_sub_url: /grafana\n",
    )
    .unwrap();

    let output = run_server(&["--config", path.to_str().unwrap(), "check"], &[]);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Configuration is valid"));
    assert!(stdout.contains("/grafana"));
}

#[test]
fn test_check_rejects_invalid_bind_addr() {
    let output = run_server(&["check"], &[("APP__SERVER__BIND_ADDR", "localhost-ish")]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("bind_addr"));
}

#[test]
fn test_print_config_applies_env_and_cli_overrides() {
    let output = run_server(
        &["--print-config", "--port", "7070"],
        &[("APP__FRONTEND__LDAP_ENABLED", "true")],
    );

    assert!(output.status.success());
    let parsed: std::collections::HashMap<String, serde_json::Value> =
        serde_saphyr::from_str(&effective_config(&output.stdout))
            .expect("print-config output should be YAML");

    assert_eq!(parsed["server"]["port"], 7070);
    assert_eq!(parsed["frontend"]["ldap_enabled"], true);
    assert_eq!(parsed["frontend"]["build"]["env"], "production");
}

#[test]
fn test_shipped_config_is_valid() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config/frontend-settings.yaml");
    let output = run_server(&["--config", path, "check"], &[]);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("env: development"));
}
