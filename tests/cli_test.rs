//! Integration tests for the ios-doctor binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const ALL_CHECKS: &str = "xcode,xcode-cli-tools,dev-tools-security,authorization-db,carthage";

/// A command isolated from the user's real settings.
fn doctor(home: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("ios-doctor"));
    cmd.env("HOME", home.path())
        .env_remove("IOS_DOCTOR_PROMPT_FIX_IT")
        .current_dir(home.path());
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    doctor(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("iOS automation"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    doctor(&temp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn run_with_every_check_skipped_is_healthy() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    doctor(&temp)
        .args(["run", "--non-interactive", "--skip", ALL_CHECKS])
        .assert()
        .success()
        .stdout(predicate::str::contains("### Diagnostic starting ###"))
        .stdout(predicate::str::contains(
            "### Diagnostic completed, 0 fixes needed. ###",
        ))
        .stdout(predicate::str::contains("Everything looks good, bye!"));
    Ok(())
}

#[test]
fn run_honors_skip_from_project_settings() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let dir = temp.path().join(".ios-doctor");
    fs::create_dir_all(&dir)?;
    fs::write(
        dir.join("config.yml"),
        format!("skip: [{}]\n", ALL_CHECKS.replace(',', ", ")),
    )?;

    doctor(&temp)
        .args(["run", "--non-interactive"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Everything looks good, bye!"));
    Ok(())
}

#[test]
fn run_json_prints_report() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let output = doctor(&temp)
        .args(["run", "--json", "--non-interactive", "--skip", ALL_CHECKS])
        .output()?;
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert!(report["timestamp"].is_string());
    assert_eq!(report["diagnosis"]["checks"], serde_json::json!([]));
    assert_eq!(report["fix_attempted"], false);
    Ok(())
}

#[cfg(not(target_os = "macos"))]
#[test]
fn run_json_keeps_fix_notices_off_stdout() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let output = doctor(&temp)
        .args([
            "run",
            "--json",
            "--skip",
            "xcode,xcode-cli-tools,authorization-db,carthage",
        ])
        .output()?;
    assert_eq!(output.status.code(), Some(1));

    let report: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(report["fixes"][0]["id"], "dev-tools-security");
    assert_eq!(report["fixes"][0]["status"], "skipped");

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("The authorize iOS script need to be run."));
    assert!(stderr.contains("Skipping you will need to run the authorize iOS manually."));
    Ok(())
}

#[cfg(not(target_os = "macos"))]
#[test]
fn run_without_xcode_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    doctor(&temp)
        .args(["run", "--no-fix", "--non-interactive", "--skip", "carthage"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Xcode is NOT installed!"))
        .stdout(predicate::str::contains("DevToolsSecurity is NOT enabled!"));
    Ok(())
}

#[test]
fn missing_explicit_config_is_an_error() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    doctor(&temp)
        .args(["--config", "nope.yml", "list"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration not found"));
    Ok(())
}

#[test]
fn invalid_settings_are_reported() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let path = temp.path().join("bad.yml");
    fs::write(&path, "carthage_path: /usr/bin/carthage\n")?;

    doctor(&temp)
        .arg("list")
        .arg("--config")
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse config"));
    Ok(())
}

#[test]
fn list_shows_checks() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    doctor(&temp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("xcode-cli-tools"))
        .stdout(predicate::str::contains("authorization-db"));
    Ok(())
}

#[test]
fn list_json_reports_autofix() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let output = doctor(&temp).args(["list", "--json"]).output()?;
    assert!(output.status.success());

    let entries: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    let autofix: Vec<(String, bool)> = entries
        .as_array()
        .ok_or("expected array")?
        .iter()
        .map(|e| {
            (
                e["id"].as_str().unwrap_or_default().to_string(),
                e["autofix"].as_bool().unwrap_or_default(),
            )
        })
        .collect();
    assert_eq!(
        autofix,
        vec![
            ("xcode".to_string(), false),
            ("xcode-cli-tools".to_string(), true),
            ("dev-tools-security".to_string(), true),
            ("authorization-db".to_string(), true),
            ("carthage".to_string(), false),
        ]
    );
    Ok(())
}

#[test]
fn completions_generate_script() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    doctor(&temp)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ios-doctor"));
    Ok(())
}

#[test]
fn unknown_subcommand_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    doctor(&temp).arg("frobnicate").assert().failure();
    Ok(())
}
