#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::path::PathBuf;

use super::*;
use tempfile::TempDir;

fn write_config(dir: &std::path::Path, contents: &str) -> PathBuf {
    let path = dir.join(CONFIG_FILE_NAME);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn defaults_apply_for_minimal_config() {
    let tmp = TempDir::new().unwrap();
    let path = write_config(tmp.path(), "version = 1\n");

    let config = load(&path).unwrap();
    assert_eq!(config.version, 1);
    assert!(!config.build.keep_logs);
    assert_eq!(config.build.root, None);
}

#[test]
fn build_section_is_parsed() {
    let tmp = TempDir::new().unwrap();
    let path = write_config(
        tmp.path(),
        "version = 1\n[build]\nkeep_logs = true\nroot = \"out\"\n",
    );

    let config = load(&path).unwrap();
    assert!(config.build.keep_logs);
    assert_eq!(config.build.root, Some(PathBuf::from("out")));
}

#[test]
fn unsupported_version_is_rejected() {
    let tmp = TempDir::new().unwrap();
    let path = write_config(tmp.path(), "version = 2\n");

    let err = load(&path).unwrap_err();
    assert!(err.to_string().contains("unsupported config version"));
}

#[test]
fn unknown_keys_are_rejected() {
    let tmp = TempDir::new().unwrap();
    let path = write_config(tmp.path(), "version = 1\nbogus = true\n");
    assert!(load(&path).is_err());
}

#[test]
fn discover_walks_up_from_nested_directory() {
    let tmp = TempDir::new().unwrap();
    write_config(tmp.path(), "version = 1\n");
    let nested = tmp.path().join("a/b");
    std::fs::create_dir_all(&nested).unwrap();

    let found = discover(&nested).unwrap();
    assert_eq!(found, tmp.path().join(CONFIG_FILE_NAME));
}

#[test]
fn resolve_prefers_explicit_path() {
    let tmp = TempDir::new().unwrap();
    write_config(tmp.path(), "version = 1\n[build]\nkeep_logs = false\n");
    let other = tmp.path().join("custom.toml");
    std::fs::write(&other, "version = 1\n[build]\nkeep_logs = true\n").unwrap();

    let (config, path) = resolve(Some(&other), tmp.path()).unwrap();
    assert!(config.build.keep_logs);
    assert_eq!(path, Some(other));
}

#[test]
fn resolve_defaults_when_nothing_found() {
    let tmp = TempDir::new().unwrap();
    let (config, path) = resolve(None, tmp.path()).unwrap();
    assert_eq!(path, None);
    assert!(!config.build.keep_logs);
}
