//! Behavioral specs for the scan command.
//!
//! Reference: docs/specs/03-scan.md

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

/// Spec: docs/specs/03-scan.md
///
/// > Text output lists the detected region, each inferred path, and each
/// > code fence
#[test]
fn scan_lists_tree_and_fences() {
    let dir = tempfile::tempdir().unwrap();
    let doc = write_doc(dir.path(), sample_doc());

    treeframe_cmd()
        .arg("scan")
        .arg(&doc)
        .assert()
        .success()
        .stdout(predicates::str::contains("tree region:"))
        .stdout(predicates::str::contains("tree (5 entries):"))
        .stdout(predicates::str::contains("app/src/main.py  # entry point"))
        .stdout(predicates::str::contains("fences (1):"))
        .stdout(predicates::str::contains("main.py (line"));
}

/// Spec: docs/specs/03-scan.md
///
/// > Nothing is written to disk and no log file is produced
#[test]
fn scan_does_not_touch_the_filesystem() {
    let dir = tempfile::tempdir().unwrap();
    let doc = write_doc(dir.path(), sample_doc());

    treeframe_cmd().arg("scan").arg(&doc).assert().success();

    assert!(!dir.path().join("app").exists());
    assert!(!dir.path().join("treeframe.log").exists());
}

/// Spec: docs/specs/03-scan.md
///
/// > --output json prints the report with nodes and fences arrays
#[test]
fn scan_json_output() {
    let dir = tempfile::tempdir().unwrap();
    let doc = write_doc(dir.path(), sample_doc());

    let output = treeframe_cmd()
        .arg("scan")
        .arg(&doc)
        .args(["--output", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["tree"].as_array().unwrap().len(), 5);
    assert_eq!(report["tree"][0]["path"], "app");
    assert_eq!(report["tree"][0]["kind"], "directory");
    assert_eq!(report["fences"][0]["filename"], "main.py");
}

/// Spec: docs/specs/03-scan.md
///
/// > A document yielding neither tree nodes nor fences is an error
#[test]
fn scan_without_structure_fails() {
    let dir = tempfile::tempdir().unwrap();
    let doc = write_doc(dir.path(), "\u{2500}\u{2500}\u{2500}\n");

    treeframe_cmd().arg("scan").arg(&doc).assert().code(1);
}
