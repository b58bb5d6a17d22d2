//! CLI Integration Tests
//!
//! These tests verify the CLI commands work correctly end-to-end.
//! They test the "wiring" between the CLI and the core library.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

fn cli_cmd() -> Command {
    Command::cargo_bin("promptgallery").expect("Failed to find promptgallery binary")
}

/// Write the Cat/Car collection into a temp dir and return its path
fn write_collection(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("prompts.json");
    std::fs::write(
        &path,
        r#"[
            {"id": 1, "title": "Cat", "prompt": "a fluffy cat", "image": "", "categories": ["animal"]},
            {"id": 2, "title": "Car", "prompt": "a red car", "image": "", "categories": ["vehicle"]}
        ]"#,
    )
    .unwrap();
    path
}

const MARKDOWN: &str = "<a id=\"prompt-7\"></a>\n## 案例 7：霓虹海报\n\n\
<img src=\"./images/7.png\">\n\n```\nneon poster prompt\n```\n";

// ============================================================================
// Search Command Tests
// ============================================================================

#[test]
fn test_search_by_text() {
    let dir = TempDir::new().unwrap();
    let data = write_collection(&dir);

    cli_cmd()
        .args(["search", "--data"])
        .arg(&data)
        .args(["--query", "cat"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[1] Cat"))
        .stdout(predicate::str::contains("Car").not())
        .stdout(predicate::str::contains("1 of 2 prompts"));
}

#[test]
fn test_search_by_category() {
    let dir = TempDir::new().unwrap();
    let data = write_collection(&dir);

    cli_cmd()
        .args(["search", "--data"])
        .arg(&data)
        .args(["--category", "vehicle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[2] Car"))
        .stdout(predicate::str::contains("🚗 vehicle"));
}

#[test]
fn test_search_no_results() {
    let dir = TempDir::new().unwrap();
    let data = write_collection(&dir);

    cli_cmd()
        .args(["search", "--data"])
        .arg(&data)
        .args(["--query", "z"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No prompts match"));
}

#[test]
fn test_search_json_output() {
    let dir = TempDir::new().unwrap();
    let data = write_collection(&dir);

    let output = cli_cmd()
        .args(["search", "--json", "--data"])
        .arg(&data)
        .output()
        .unwrap();
    assert!(output.status.success());

    let records: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(records.as_array().map(|a| a.len()), Some(2));
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let dir = TempDir::new().unwrap();
    let data = write_collection(&dir);

    let output = cli_cmd()
        .env_remove("RUST_LOG")
        .args(["-v", "search", "--json", "--data"])
        .arg(&data)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Searching prompts"));
    // Log lines never mix into the JSON on stdout
    let records: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(records.is_array());
}

#[test]
fn test_search_missing_file_fails() {
    let dir = TempDir::new().unwrap();

    cli_cmd()
        .args(["search", "--data"])
        .arg(dir.path().join("missing.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load prompts"));
}

// ============================================================================
// Import Command Tests
// ============================================================================

#[test]
fn test_import_from_stdin() {
    cli_cmd()
        .arg("import")
        .write_stdin(MARKDOWN)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"id\": 7"))
        .stdout(predicate::str::contains("neon poster prompt"))
        .stdout(predicate::str::contains("images/7.png"));
}

#[test]
fn test_import_to_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("README.md");
    let output = dir.path().join("prompts.json");
    std::fs::write(&input, MARKDOWN).unwrap();

    cli_cmd()
        .arg("import")
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 1 prompts"));

    let written = std::fs::read_to_string(&output).unwrap();
    assert!(written.contains("\"neon\""));
}

// ============================================================================
// Categories Command Tests
// ============================================================================

#[test]
fn test_categories_lists_catalog() {
    cli_cmd()
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("photography"))
        .stdout(predicate::str::contains("vehicle"));
}
