//! Behavioral specs for the build command.
//!
//! Reference: docs/specs/02-build.md

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

// =============================================================================
// Tree Creation
// =============================================================================

/// Spec: docs/specs/02-build.md#root-selection
///
/// > A sketch with a single root directory nests everything under
/// > `<base>/<root-name>`
#[test]
fn build_creates_tree_from_document() {
    let dir = tempfile::tempdir().unwrap();
    let doc = write_doc(dir.path(), sample_doc());

    treeframe_cmd()
        .arg("build")
        .arg(&doc)
        .assert()
        .success()
        .stdout(predicates::str::contains("built"))
        .stdout(predicates::str::contains(
            "2 directories, 3 files created, 0 skipped, 1 code blocks",
        ));

    assert!(dir.path().join("app/src").is_dir());
    assert!(dir.path().join("app/src/util.py").is_file());
    assert!(dir.path().join("app/README.md").is_file());
}

/// Spec: docs/specs/02-build.md#document-handling
///
/// > Comments become the created file's first line, fence content is
/// > appended after the seed
#[test]
fn build_seeds_comment_and_fills_fence() {
    let dir = tempfile::tempdir().unwrap();
    let doc = write_doc(dir.path(), sample_doc());

    treeframe_cmd().arg("build").arg(&doc).assert().success();

    let main = std::fs::read_to_string(dir.path().join("app/src/main.py")).unwrap();
    assert!(main.contains("# entry point"));
    assert!(main.contains("print(\"hello\")"));

    let util = std::fs::read_to_string(dir.path().join("app/src/util.py")).unwrap();
    assert!(util.is_empty());
}

/// Spec: docs/specs/02-build.md#conflicts
///
/// > Existing paths are never overwritten; a diverged fence target gets a
/// > ` (N)` suffixed duplicate
#[test]
fn rebuild_skips_existing_and_duplicates_fence_target() {
    let dir = tempfile::tempdir().unwrap();
    let doc = write_doc(dir.path(), sample_doc());

    treeframe_cmd().arg("build").arg(&doc).assert().success();
    treeframe_cmd()
        .arg("build")
        .arg(&doc)
        .assert()
        .success()
        .stdout(predicates::str::contains(
            "0 directories, 1 files created, 5 skipped, 1 code blocks",
        ));

    // First run's main.py holds seed + fence content, so the second fence
    // pass diverts to a duplicate.
    assert!(dir.path().join("app/src/main (1).py").is_file());
    let original = std::fs::read_to_string(dir.path().join("app/src/main.py")).unwrap();
    assert_eq!(original.matches("print").count(), 1);
}

/// Spec: docs/specs/02-build.md#root-selection
///
/// > --root wins over the document's directory
#[test]
fn build_respects_root_flag() {
    let dir = tempfile::tempdir().unwrap();
    let doc = write_doc(dir.path(), sample_doc());
    let out = dir.path().join("out");

    treeframe_cmd()
        .arg("build")
        .arg(&doc)
        .arg("--root")
        .arg(&out)
        .assert()
        .success();

    assert!(out.join("app/README.md").is_file());
    assert!(!dir.path().join("app").exists());
}

// =============================================================================
// Stdin
// =============================================================================

/// Spec: docs/specs/02-build.md#root-selection
///
/// > Reading from stdin requires --root
#[test]
fn stdin_without_root_fails() {
    treeframe_cmd()
        .arg("build")
        .arg("-")
        .write_stdin(sample_doc())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("--root"));
}

#[test]
fn stdin_with_root_builds() {
    let dir = tempfile::tempdir().unwrap();

    treeframe_cmd()
        .arg("build")
        .arg("-")
        .arg("--root")
        .arg(dir.path())
        .write_stdin(sample_doc())
        .assert()
        .success();

    assert!(dir.path().join("app/src/main.py").is_file());
}

// =============================================================================
// Failure Modes
// =============================================================================

/// Spec: docs/specs/01-cli.md#exit-codes
///
/// > Exit code 1 when no usable structure was found
#[test]
fn no_structure_fails_with_retained_log() {
    let dir = tempfile::tempdir().unwrap();
    let doc = write_doc(dir.path(), "\u{2500}\u{2500}\u{2500}\n");

    treeframe_cmd()
        .arg("build")
        .arg(&doc)
        .assert()
        .code(1)
        .stdout(predicates::str::contains("failed"));

    // The log is always retained on failure.
    assert!(dir.path().join("treeframe.log").is_file());
}

// =============================================================================
// Logging
// =============================================================================

/// Spec: docs/specs/02-build.md#logging
///
/// > The log is deleted after a clean build
#[test]
fn clean_build_leaves_no_log() {
    let dir = tempfile::tempdir().unwrap();
    let doc = write_doc(dir.path(), sample_doc());

    treeframe_cmd().arg("build").arg(&doc).assert().success();

    assert!(!dir.path().join("treeframe.log").exists());
}

/// Spec: docs/specs/02-build.md#logging
///
/// > --keep-log retains the log after a clean build
#[test]
fn keep_log_flag_retains_log() {
    let dir = tempfile::tempdir().unwrap();
    let doc = write_doc(dir.path(), sample_doc());

    treeframe_cmd()
        .arg("build")
        .arg(&doc)
        .arg("--keep-log")
        .assert()
        .success()
        .stdout(predicates::str::contains("log:"));

    let log = std::fs::read_to_string(dir.path().join("treeframe.log")).unwrap();
    assert!(log.contains("Building File Structure"));
}

// =============================================================================
// Output Formats
// =============================================================================

/// Spec: docs/specs/02-build.md#output
///
/// > --output json prints the summary as a JSON object
#[test]
fn json_output_reports_stats() {
    let dir = tempfile::tempdir().unwrap();
    let doc = write_doc(dir.path(), sample_doc());

    let output = treeframe_cmd()
        .arg("build")
        .arg(&doc)
        .args(["--output", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["ok"], true);
    assert_eq!(summary["dirs_created"], 2);
    assert_eq!(summary["files_created"], 3);
    assert_eq!(summary["fences_processed"], 1);
}
