//! Command line behavior of the `limo` binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

const LEAD: &str = "Name: John Smith
Phone: 555-123-4567
Email: john@example.com
Pickup: 10 Ocean Ave, Swansea, MA
Date: 06/14/2025";

fn limo() -> Command {
    Command::cargo_bin("limo").unwrap()
}

#[test]
fn extract_from_stdin() {
    limo()
        .arg("extract")
        .write_stdin(LEAD)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"firstName\": \"John\""))
        .stdout(predicate::str::contains("(555) 123-4567"));
}

#[test]
fn extract_empty_input_fails() {
    limo()
        .arg("extract")
        .write_stdin("   \n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no text provided"));
}

#[test]
fn extract_text_format_from_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("lead.txt");
    fs::write(&input, LEAD).unwrap();

    limo()
        .args(["extract", "-f", "text"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("city:"))
        .stdout(predicate::str::contains("Swansea"))
        .stdout(predicate::str::contains("(2025-06-14)"));
}

#[test]
fn extract_missing_file_fails() {
    limo()
        .args(["extract", "/nonexistent/lead.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn threshold_from_config_file() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("config.json");
    fs::write(&config, r#"{"extraction": {"confidence_threshold": 0.92}}"#).unwrap();

    limo()
        .arg("--config")
        .arg(&config)
        .arg("extract")
        .write_stdin(LEAD)
        .assert()
        .success()
        .stdout(predicate::str::contains("firstName").not())
        .stdout(predicate::str::contains("john@example.com"));
}

#[test]
fn macro_for_account_creation() {
    limo()
        .args(["macro", "--form", "account-creation"])
        .write_stdin(LEAD)
        .assert()
        .success()
        .stdout(predicate::str::contains("LimoAnywhere_accountCreation_AutoFill"))
        .stdout(predicate::str::contains("\"Command\": \"open\""))
        .stdout(predicate::str::contains("linkText=Financial Data"));
}

#[test]
fn macro_variables() {
    limo()
        .args(["macro", "--variables"])
        .write_stdin(LEAD)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"email\": \"john@example.com\""));
}

#[test]
fn batch_writes_outputs_and_summary() {
    let dir = tempdir().unwrap();
    let inbox = dir.path().join("inbox");
    let out = dir.path().join("out");
    fs::create_dir_all(&inbox).unwrap();
    fs::write(inbox.join("a.txt"), LEAD).unwrap();
    fs::write(inbox.join("b.eml"), "Hi Jane Doe, pickup at 7pm").unwrap();
    fs::write(inbox.join("empty.md"), "").unwrap();
    fs::write(inbox.join("skip.pdf"), "not a message").unwrap();

    let pattern = format!("{}/*", inbox.display());
    limo()
        .args(["batch", &pattern, "--summary", "--continue-on-error", "-o"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 3 files"))
        .stdout(predicate::str::contains("empty.md"));

    assert!(out.join("a.json").exists());
    assert!(out.join("b.json").exists());

    let summary = fs::read_to_string(out.join("summary.csv")).unwrap();
    assert!(summary.starts_with("filename,status"));
    assert!(summary.contains("a.txt,success,John,Smith"));
    assert!(summary.contains("empty.md,error"));
}

#[test]
fn config_init_set_get() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("limo").join("config.json");

    limo()
        .arg("--config")
        .arg(&config)
        .args(["config", "init"])
        .assert()
        .success();
    assert!(config.exists());

    limo()
        .arg("--config")
        .arg(&config)
        .args(["config", "set", "extraction.confidence_threshold", "0.5"])
        .assert()
        .success();

    limo()
        .arg("--config")
        .arg(&config)
        .args(["config", "get", "extraction.confidence_threshold"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0.5"));

    limo()
        .arg("--config")
        .arg(&config)
        .args(["config", "set", "extraction.confidence_threshold", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("confidence_threshold must be within"));
}

#[test]
fn config_keys_are_typed() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("config.json");

    limo()
        .arg("--config")
        .arg(&config)
        .args(["config", "keys"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mapping.payment_method"));

    limo()
        .arg("--config")
        .arg(&config)
        .args(["config", "set", "extraction.unknown", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration key not found"));

    limo()
        .arg("--config")
        .arg(&config)
        .args(["config", "set", "mapping.form_type", "reservation"])
        .assert()
        .success();

    limo()
        .arg("--config")
        .arg(&config)
        .args(["config", "get", "mapping.form_type"])
        .assert()
        .success()
        .stdout(predicate::str::contains("reservation"));
}
