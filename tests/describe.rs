//! Integration tests for one-shot mode (-d/--describe flag)

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

fn run_command(output_dir: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .arg("run")
        .arg("-q")
        .arg("--")
        .arg("--no-config")
        .arg("--output-dir")
        .arg(output_dir)
        .args(args)
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

#[test]
fn test_describe_writes_one_file() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_command(dir.path(), &["-d", "Logout clears the session"]);
    assert_eq!(code, 0);

    let path = PathBuf::from(stdout.trim());
    assert!(path.starts_with(dir.path()));
    let name = path.file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("generated_test_1_"));

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("class TestLogout:"));
    assert!(content.contains("Logout clears the session"));
}

#[test]
fn test_describe_fallback_template() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_command(dir.path(), &["--describe", "profile avatar upload"]);
    assert_eq!(code, 0);
    let content = fs::read_to_string(stdout.trim()).unwrap();
    assert!(content.contains("class TestCustomScenario:"));
    assert_eq!(content.matches("profile avatar upload").count(), 3);
}

#[test]
fn test_describe_empty_fails() {
    let dir = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_command(dir.path(), &["-d", "  "]);
    assert_eq!(code, 1);
    assert!(stderr.contains("Description cannot be empty"));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_describe_custom_extension_and_escape() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_command(
        dir.path(),
        &["-d", "cart shows \"3\"", "--ext", ".txt", "--escape", "python"],
    );
    assert_eq!(code, 0);
    let path = stdout.trim();
    assert!(path.ends_with(".txt"));
    let content = fs::read_to_string(path).unwrap();
    assert!(content.contains(r#"Generated from: "cart shows \"3\"""#));
}

#[test]
fn test_unknown_option() {
    let dir = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_command(dir.path(), &["--frobnicate"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("Unknown option: --frobnicate"));
}

#[test]
fn test_bad_escape_policy() {
    let dir = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_command(dir.path(), &["--escape", "html", "-d", "x"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("unknown escape policy 'html'"));
}
