//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::Command;
pub use predicates;
use std::path::{Path, PathBuf};

/// Returns a Command configured to run the treeframe binary
pub fn treeframe_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("treeframe"));
    // Keep the host environment from leaking into specs.
    cmd.env_remove("TREEFRAME_CONFIG");
    cmd.env_remove("NO_COLOR");
    cmd.env_remove("COLOR");
    cmd
}

/// Write a document into `dir` and return its path.
pub fn write_doc(dir: &Path, text: &str) -> PathBuf {
    let path = dir.join("doc.md");
    std::fs::write(&path, text).unwrap();
    path
}

/// A document with a keyword heading, a mixed-notation sketch, and one
/// labeled code fence. The blank run after the sketch terminates the tree
/// region, so the fence label never parses as a tree node.
pub fn sample_doc() -> &'static str {
    "## Project structure:\n\
     \n\
     app/\n\
     \u{251c}\u{2500}\u{2500} src/\n\
     \u{2502}   \u{251c}\u{2500}\u{2500} main.py  # entry point\n\
     \u{2502}   \u{2514}\u{2500}\u{2500} util.py\n\
     \u{2514}\u{2500}\u{2500} README.md\n\
     \n\
     \n\
     \n\
     `main.py`\n\
     ```python\n\
     print(\"hello\")\n\
     ```\n"
}
