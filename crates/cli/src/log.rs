// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-build append-only log.
//!
//! Every build accumulates a structured, timestamped record of what was
//! detected, parsed, and written, flushed to `<root>/treeframe.log` when the
//! build finishes. On success the file is deleted unless log retention is
//! configured; on failure it is always kept so the user can see what went
//! wrong. Writing the log must never abort a build: sink failures are
//! reported on stderr and swallowed.

use std::path::{Path, PathBuf};

use chrono::Local;

/// Name of the log file written under the build root.
pub const LOG_FILE_NAME: &str = "treeframe.log";

const RULE_HEAVY: &str =
    "======================================================================";
const RULE_LIGHT: &str =
    "----------------------------------------------------------------------";

/// Append-only build log with a deferred sink.
#[derive(Debug)]
pub struct BuildLog {
    entries: Vec<String>,
    has_errors: bool,
    started: chrono::DateTime<Local>,
    sink: Option<PathBuf>,
    keep_on_success: bool,
}

impl BuildLog {
    /// Create a log that will flush to `root/treeframe.log`.
    pub fn new(root: &Path, keep_on_success: bool) -> BuildLog {
        let mut log = BuildLog {
            entries: Vec::new(),
            has_errors: false,
            started: Local::now(),
            sink: Some(root.join(LOG_FILE_NAME)),
            keep_on_success,
        };
        log.write_header(root);
        log
    }

    /// Create a log with no sink, for parse-only previews.
    pub fn unsinked() -> BuildLog {
        BuildLog {
            entries: Vec::new(),
            has_errors: false,
            started: Local::now(),
            sink: None,
            keep_on_success: false,
        }
    }

    fn write_header(&mut self, root: &Path) {
        self.entries.push(RULE_HEAVY.to_string());
        self.entries.push("treeframe build log".to_string());
        self.entries.push(RULE_HEAVY.to_string());
        self.entries
            .push(format!("Started: {}", self.started.format("%Y-%m-%d %H:%M:%S")));
        self.entries.push(format!("Root: {}", root.display()));
        self.entries.push(RULE_HEAVY.to_string());
        self.entries.push(String::new());
    }

    /// Whether any error entry has been recorded.
    pub fn has_errors(&self) -> bool {
        self.has_errors
    }

    /// Start a new titled section.
    pub fn section(&mut self, title: &str) {
        self.entries.push(String::new());
        self.entries.push(RULE_LIGHT.to_string());
        self.entries.push(format!("  {title}"));
        self.entries.push(RULE_LIGHT.to_string());
    }

    pub fn info(&mut self, message: &str, context: Option<&str>) {
        tracing::debug!(target: "treeframe::build", "{message}");
        self.push_entry("INFO", message, context);
    }

    pub fn warning(&mut self, message: &str, context: Option<&str>) {
        tracing::warn!(target: "treeframe::build", "{message}");
        self.push_entry("WARNING", message, context);
    }

    pub fn error(&mut self, message: &str, context: Option<&str>) {
        tracing::error!(target: "treeframe::build", "{message}");
        self.has_errors = true;
        self.push_entry("ERROR", message, context);
    }

    fn push_entry(&mut self, level: &str, message: &str, context: Option<&str>) {
        let timestamp = Local::now().format("%H:%M:%S%.3f");
        self.entries.push(format!("[{timestamp}] {level}: {message}"));
        if let Some(context) = context {
            self.entries.push(format!("  Context: {context}"));
        }
    }

    /// Flush the log and apply the retention policy.
    ///
    /// Returns the path of the retained log file, or `None` when the log
    /// was deleted (clean build, retention off) or had no sink.
    pub fn finalize(mut self) -> Option<PathBuf> {
        let ended = Local::now();
        let duration = ended.signed_duration_since(self.started);
        let status = if self.has_errors { "FAILED" } else { "SUCCESS" };

        self.entries.push(String::new());
        self.entries.push(RULE_HEAVY.to_string());
        self.entries
            .push(format!("Completed: {}", ended.format("%Y-%m-%d %H:%M:%S")));
        self.entries.push(format!(
            "Duration: {:.2} seconds",
            duration.num_milliseconds() as f64 / 1000.0
        ));
        self.entries.push(format!("Status: {status}"));
        self.entries.push(RULE_HEAVY.to_string());

        let path = self.sink?;
        let retain = self.has_errors || self.keep_on_success;

        let mut contents = self.entries.join("\n");
        contents.push('\n');
        if let Err(e) = std::fs::write(&path, contents) {
            eprintln!("treeframe: failed to write log file: {e}");
            return None;
        }

        if retain {
            Some(path)
        } else {
            // Cleanup failures are not worth surfacing.
            let _ = std::fs::remove_file(&path);
            None
        }
    }
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
