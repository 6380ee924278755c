//! CLI integration tests
//!
//! These exercise the argument surface and the failure paths that do not
//! need a generation backend.
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("restyle").unwrap();
    // Keep the test hermetic: never pick up a real key from the machine.
    cmd.env_remove("OPENAI_API_KEY");
    cmd
}

fn write_fixture(dir: &TempDir, name: &str, contents: &str) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn test_cli_help() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--style"))
        .stdout(predicate::str::contains("--max-tokens"));
}

#[test]
fn test_cli_requires_style() {
    let tmp = TempDir::new().unwrap();
    let input = write_fixture(&tmp, "article.txt", "Some text");

    cmd().arg(&input).assert().failure().stderr(predicate::str::contains("--style"));
}

#[test]
fn test_cli_requires_api_key() {
    let tmp = TempDir::new().unwrap();
    let input = write_fixture(&tmp, "article.txt", "Some text");

    cmd()
        .args([&input, "--style", "formal tone"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("API key"));
}

#[test]
fn test_cli_rejects_missing_file() {
    cmd()
        .args(["/nonexistent/input.txt", "--style", "formal tone", "--api-key", "test"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn test_cli_rejects_unknown_extension() {
    let tmp = TempDir::new().unwrap();
    let input = write_fixture(&tmp, "article.exe", "Some text");

    cmd()
        .args([&input, "--style", "formal tone", "--api-key", "test"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported input format"));
}

#[test]
fn test_cli_rejects_blank_style() {
    let tmp = TempDir::new().unwrap();
    let input = write_fixture(&tmp, "article.txt", "Some text");

    cmd()
        .args([&input, "--style", "   ", "--api-key", "test"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("style"));
}

#[test]
fn test_cli_rejects_unknown_model() {
    let tmp = TempDir::new().unwrap();
    let input = write_fixture(&tmp, "article.txt", "Some text");

    cmd()
        .args([&input, "--style", "formal", "--api-key", "test", "--model", "gpt-9"])
        .assert()
        .failure();
}

#[test]
fn test_cli_rejects_out_of_range_max_tokens() {
    let tmp = TempDir::new().unwrap();
    let input = write_fixture(&tmp, "article.txt", "Some text");

    cmd()
        .args([&input, "--style", "formal", "--api-key", "test", "--max-tokens", "50"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("max_output_tokens"));
}
