//! Binary execution tests
//!
//! Runs the built `gobjectgen` binary inside a scratch directory and checks
//! exit status, produced files and console output.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_gobjectgen"))
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to execute gobjectgen")
}

fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../gobjectgen-generation/tests/fixtures")
        .join(name);
    fs::read_to_string(path).expect("Failed to read fixture")
}

fn entries(dir: &Path) -> usize {
    fs::read_dir(dir).unwrap().count()
}

#[test]
fn test_final_type_matches_fixtures() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_in(temp_dir.path(), &["--module", "Gtk", "--object", "Button"]);

    assert!(output.status.success());
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("gtk-button.h")).unwrap(),
        fixture("gtk-button.h")
    );
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("gtk-button.c")).unwrap(),
        fixture("gtk-button.c")
    );
    assert_eq!(entries(temp_dir.path()), 2);
}

#[test]
fn test_derivable_type_matches_fixtures() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_in(
        temp_dir.path(),
        &["-m", "Gio", "-o", "Stream", "-p", "G", "Object", "-t", "derivable"],
    );

    assert!(output.status.success());
    let header = fs::read_to_string(temp_dir.path().join("gio-stream.h")).unwrap();
    let source = fs::read_to_string(temp_dir.path().join("gio-stream.c")).unwrap();
    assert_eq!(header, fixture("gio-stream.h"));
    assert_eq!(source, fixture("gio-stream.c"));
    assert!(source.contains("GioStreamPrivate"));
    assert!(source.contains("gio_stream_get_instance_private"));
}

#[test]
fn test_success_reports_created_files() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_in(temp_dir.path(), &["-m", "Gtk", "-o", "Button"]);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Created gtk-button.h"));
    assert!(stdout.contains("Created gtk-button.c"));
}

#[test]
fn test_quiet_prints_nothing() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_in(temp_dir.path(), &["-m", "Gtk", "-o", "Button", "--quiet"]);

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(temp_dir.path().join("gtk-button.h").exists());
}

#[test]
fn test_verbose_prints_derived_names() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_in(temp_dir.path(), &["-m", "Gtk", "-o", "Button", "-v"]);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("GTK_TYPE_BUTTON"));
    assert!(stdout.contains("G_TYPE_OBJECT"));
}

#[test]
fn test_unknown_type_is_rejected_before_writing() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_in(
        temp_dir.path(),
        &["-m", "Gtk", "-o", "Button", "--type", "abstract"],
    );

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(2));
    assert_eq!(entries(temp_dir.path()), 0);
}

#[test]
fn test_missing_module_is_rejected() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_in(temp_dir.path(), &["--object", "Button"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("--module"));
    assert_eq!(entries(temp_dir.path()), 0);
}

#[test]
fn test_empty_object_exits_with_failure() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_in(temp_dir.path(), &["-m", "Gtk", "-o", ""]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid argument"));
    assert_eq!(entries(temp_dir.path()), 0);
}

#[test]
fn test_dry_run_is_rejected_without_writing() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_in(temp_dir.path(), &["-m", "Gtk", "-o", "Button", "--dry-run"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("--dry-run"));
    assert_eq!(entries(temp_dir.path()), 0);
}

#[test]
fn test_verbose_reports_written_sizes() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_in(temp_dir.path(), &["-m", "Gtk", "-o", "Button", "--verbose"]);

    let stdout = String::from_utf8_lossy(&output.stdout);
    let header_len = fixture("gtk-button.h").len();
    assert!(output.status.success());
    assert!(stdout.contains(&format!("{} bytes", header_len)));
}

#[test]
fn test_unwritable_target_exits_with_failure() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("gtk-button.h")).unwrap();

    let output = run_in(temp_dir.path(), &["-m", "Gtk", "-o", "Button"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("gtk-button.h"));
    assert!(!temp_dir.path().join("gtk-button.c").exists());
}

#[test]
fn test_rerun_overwrites_with_identical_content() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("gtk-button.c"), "stale").unwrap();

    assert!(run_in(temp_dir.path(), &["-m", "Gtk", "-o", "Button"]).status.success());
    let first = fs::read_to_string(temp_dir.path().join("gtk-button.c")).unwrap();
    assert!(run_in(temp_dir.path(), &["-m", "Gtk", "-o", "Button"]).status.success());
    let second = fs::read_to_string(temp_dir.path().join("gtk-button.c")).unwrap();

    assert_eq!(first, second);
    assert_eq!(first, fixture("gtk-button.c"));
}

#[test]
fn test_help_and_version() {
    let temp_dir = TempDir::new().unwrap();

    let help = run_in(temp_dir.path(), &["--help"]);
    assert!(help.status.success());
    assert!(String::from_utf8_lossy(&help.stdout).contains("--parent"));

    let version = run_in(temp_dir.path(), &["--version"]);
    assert!(version.status.success());
    assert!(String::from_utf8_lossy(&version.stdout).contains("gobjectgen"));
}
