//! Integration tests for the otpgate CLI surface
//!
//! Exercises the compiled binary: help output, subcommand wiring, and the
//! hidden code command against an isolated config directory.

use std::process::Command;

const OTPGATE_BINARY: &str = "target/debug/otpgate";

#[test]
fn test_top_level_help() {
    let output = Command::new(OTPGATE_BINARY)
        .arg("--help")
        .output()
        .expect("Failed to run otpgate --help");

    assert!(output.status.success(), "help command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("register"), "help should list register");
    assert!(stdout.contains("login"), "help should list login");
}

#[test]
fn test_subcommand_help() {
    for subcommand in ["register", "login"] {
        let output = Command::new(OTPGATE_BINARY)
            .args([subcommand, "--help"])
            .output()
            .expect("Failed to run subcommand help");

        assert!(
            output.status.success(),
            "{} --help should succeed",
            subcommand
        );
    }
}

#[test]
fn test_unknown_subcommand_fails() {
    let output = Command::new(OTPGATE_BINARY)
        .arg("frobnicate")
        .output()
        .expect("Failed to run otpgate");

    assert!(!output.status.success());
}

#[test]
fn test_code_command_with_empty_store() {
    let dir = tempfile::tempdir().unwrap();

    let output = Command::new(OTPGATE_BINARY)
        .env("OTPGATE_CONFIG_DIR", dir.path())
        .args(["code", "nobody@example.com"])
        .output()
        .expect("Failed to run otpgate code");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("User not found"));
}

#[test]
fn test_code_command_prints_valid_code() {
    let dir = tempfile::tempdir().unwrap();

    // Seed a users file the way the register command would
    let users = serde_json::json!([{
        "email": "alice@example.com",
        "password_hash": "irrelevant",
        "totp_secret": "GEZDGNBVGY3TQOJQGEZDGNBVGY3TQOJQ",
        "mfa_enabled": true
    }]);
    std::fs::write(
        dir.path().join("users.json"),
        serde_json::to_string_pretty(&users).unwrap(),
    )
    .unwrap();

    let output = Command::new(OTPGATE_BINARY)
        .env("OTPGATE_CONFIG_DIR", dir.path())
        .args(["code", "alice@example.com"])
        .output()
        .expect("Failed to run otpgate code");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let code = stdout.trim();
    assert_eq!(code.len(), 6, "expected a 6-digit code, got {:?}", code);
    assert!(code.bytes().all(|b| b.is_ascii_digit()));
}
