#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use tempfile::TempDir;

#[test]
fn write_overwrite_replaces_content() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("a.txt");
    let mut fs = RealFileSystem;

    fs.write(&path, "one", WriteMode::Overwrite).unwrap();
    fs.write(&path, "two", WriteMode::Overwrite).unwrap();
    assert_eq!(fs.read_to_string(&path).unwrap(), "two");
}

#[test]
fn write_append_accumulates() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("a.txt");
    let mut fs = RealFileSystem;

    fs.write(&path, "one\n", WriteMode::Append).unwrap();
    fs.write(&path, "two\n", WriteMode::Append).unwrap();
    assert_eq!(fs.read_to_string(&path).unwrap(), "one\ntwo\n");
}

#[test]
fn create_dir_all_and_predicates() {
    let tmp = TempDir::new().unwrap();
    let nested = tmp.path().join("a/b/c");
    let mut fs = RealFileSystem;

    assert!(!fs.exists(&nested));
    fs.create_dir_all(&nested).unwrap();
    assert!(fs.exists(&nested));
    assert!(fs.is_dir(&nested));

    let file = nested.join("f.txt");
    fs.write(&file, "", WriteMode::Overwrite).unwrap();
    assert!(fs.exists(&file));
    assert!(!fs.is_dir(&file));
}

#[test]
fn read_missing_file_reports_path() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("nope.txt");
    let fs = RealFileSystem;

    let err = fs.read_to_string(&missing).unwrap_err();
    assert!(err.to_string().contains("nope.txt"));
}
