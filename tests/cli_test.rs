//! Tests for the `unstyle` binary.

use std::fs;
use std::path::Path;
use std::process::Command;

use unstyle::inline_styles;

const LOGO: &str = include_str!("fixtures/logo.svg");

const DONE_MESSAGE: &str =
    "SVG converted: <style> block removed and classes converted to inline styles\n";

fn unstyle(dir: &Path, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_unstyle"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn write_default_logo(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("aasha_medix/assets/images/logo.svg");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, LOGO).unwrap();
    path
}

#[test]
fn test_default_path_rewritten_in_place() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_default_logo(dir.path());

    let output = unstyle(dir.path(), &[]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), DONE_MESSAGE);
    assert_eq!(fs::read_to_string(&path).unwrap(), inline_styles(LOGO));
}

#[test]
fn test_stdout_output_keeps_document_clean() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_default_logo(dir.path());

    let output = unstyle(dir.path(), &["-o", "-"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), inline_styles(LOGO));
    assert!(String::from_utf8(output.stderr).unwrap().contains(DONE_MESSAGE));
    // input untouched when writing elsewhere
    assert_eq!(fs::read_to_string(&path).unwrap(), LOGO);
}

#[test]
fn test_missing_default_file_fails() {
    let dir = tempfile::tempdir().unwrap();

    let output = unstyle(dir.path(), &[]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8(output.stderr).unwrap().contains("logo.svg"));
}
