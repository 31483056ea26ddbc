//! Behavioral specs for configuration handling.
//!
//! Reference: docs/specs/02-build.md

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

/// Spec: docs/specs/02-build.md#logging
///
/// > [build].keep_logs retains the log after a clean build
#[test]
fn keep_logs_from_config() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("treeframe.toml"),
        "version = 1\n\n[build]\nkeep_logs = true\n",
    )
    .unwrap();
    let doc = write_doc(dir.path(), sample_doc());

    treeframe_cmd().arg("build").arg(&doc).assert().success();

    assert!(dir.path().join("treeframe.log").is_file());
}

/// Spec: docs/specs/02-build.md#root-selection
///
/// > [build].root is resolved relative to the config file
#[test]
fn root_from_config_is_relative_to_config_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("treeframe.toml"),
        "version = 1\n\n[build]\nroot = \"out\"\n",
    )
    .unwrap();
    let doc = write_doc(dir.path(), sample_doc());

    treeframe_cmd().arg("build").arg(&doc).assert().success();

    assert!(dir.path().join("out/app/README.md").is_file());
    assert!(!dir.path().join("app").exists());
}

/// Spec: docs/specs/01-cli.md#global-flags
///
/// > -C uses an explicit config file instead of discovery
#[test]
fn explicit_config_flag() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("custom.toml");
    std::fs::write(&config, "version = 1\n\n[build]\nkeep_logs = true\n").unwrap();
    let doc = write_doc(dir.path(), sample_doc());

    treeframe_cmd()
        .arg("-C")
        .arg(&config)
        .arg("build")
        .arg(&doc)
        .assert()
        .success();

    assert!(dir.path().join("treeframe.log").is_file());
}

/// Spec: docs/specs/01-cli.md#exit-codes
///
/// > Exit code 2 for configuration errors
#[test]
fn unsupported_config_version_fails() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("treeframe.toml"), "version = 99\n").unwrap();
    let doc = write_doc(dir.path(), sample_doc());

    treeframe_cmd().arg("build").arg(&doc).assert().code(2);
}

/// Spec: docs/specs/01-cli.md#exit-codes
///
/// > Unknown config keys are rejected
#[test]
fn unknown_config_key_fails() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("treeframe.toml"),
        "version = 1\nnonsense = true\n",
    )
    .unwrap();
    let doc = write_doc(dir.path(), sample_doc());

    treeframe_cmd().arg("build").arg(&doc).assert().code(2);
}
