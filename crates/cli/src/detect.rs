// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tree-region detection.
//!
//! A document mixes prose, headings, code fences, and (somewhere) the tree
//! sketch. This module finds the line range most likely to hold the sketch:
//! a heading containing a structure keyword is the strongest hint, with the
//! first non-blank line as the fallback. The end of the region is found by
//! walking forward until a fence, a blank run, or a later heading.

/// Keywords whose presence in a line marks the start of a structure section.
///
/// Matched as substrings of the lowercased, trimmed line, so `## Project
/// Structure:` and `file tree` both hit.
const STRUCTURE_KEYWORDS: &[&str] = &[
    "structure",
    "file structure",
    "tree",
    "file tree",
    "directory structure",
    "folder structure",
    "project structure",
];

/// Line range holding the tree sketch.
///
/// `end` is exclusive; `None` means the region runs to the end of the
/// document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeRegion {
    pub start: usize,
    pub end: Option<usize>,
}

/// Locate the tree region within the document.
///
/// Keyword lines win: the region starts at the first non-blank line after
/// the earliest keyword line that has one. Without a usable keyword line the
/// region starts at the first non-blank line of the document.
pub fn find_region(text: &str) -> TreeRegion {
    let lines: Vec<&str> = text.lines().collect();

    for (i, line) in lines.iter().enumerate() {
        let lowered = line.trim().to_lowercase();
        if STRUCTURE_KEYWORDS.iter().any(|k| lowered.contains(k)) {
            if let Some(start) = next_non_blank(&lines, i + 1) {
                tracing::debug!(line = i, start, "tree region from structure keyword");
                return TreeRegion {
                    start,
                    end: find_end(&lines, start),
                };
            }
        }
    }

    let start = next_non_blank(&lines, 0).unwrap_or(0);
    tracing::debug!(start, "tree region from first non-blank line");
    TreeRegion {
        start,
        end: find_end(&lines, start),
    }
}

/// Index of the first non-blank line at or after `from`.
fn next_non_blank(lines: &[&str], from: usize) -> Option<usize> {
    (from..lines.len()).find(|&i| !lines[i].trim().is_empty())
}

/// Walk forward from `start` to find where the tree likely ends.
///
/// Stops at a root-level fence delimiter once at least one tree line has
/// been counted, at three consecutive blank lines, or at a markdown heading
/// after more than three tree lines. Returns `None` when the tree plausibly
/// runs to the end of the document.
fn find_end(lines: &[&str], start: usize) -> Option<usize> {
    let mut tree_lines = 0usize;
    let mut blank_run = 0usize;

    for (i, raw) in lines.iter().enumerate().skip(start) {
        let line = raw.trim();

        // Root-level fence: the sketch is over, code blocks begin.
        if !raw.starts_with(char::is_whitespace) && line.starts_with("```") && tree_lines > 0 {
            return Some(i);
        }

        if line.is_empty() {
            blank_run += 1;
            if blank_run >= 3 {
                return Some(i);
            }
            continue;
        }
        blank_run = 0;
        tree_lines += 1;

        if tree_lines > 3 && line.starts_with('#') {
            return Some(i);
        }
    }

    None
}

#[cfg(test)]
#[path = "detect_tests.rs"]
mod tests;
