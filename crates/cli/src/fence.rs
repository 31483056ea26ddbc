// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Code-fence scanning and filename inference.
//!
//! Finds root-level fenced code blocks in the document and works out which
//! file each one belongs to. Only fences whose delimiters carry no leading
//! indentation are candidates; fences nested inside them (indented, or
//! opened with a language tag) are preserved verbatim in the body.
//!
//! Filename inference tries three heuristics in order, first success wins:
//!
//! 1. pre-fence: the line immediately above the opener (`**`main.rs`**`)
//! 2. on-fence: text after the backticks, unless it is a bare language tag
//! 3. post-fence: a comment-only first content line (`// src/main.rs`),
//!    which is then excluded from the stored content
//!
//! A fence that names no file is dropped; bare language tags never
//! produce one.

use crate::comment::{split_comment, starts_with_marker};
use crate::log::BuildLog;

/// Filenames accepted without an extension.
const COMMON_FILENAMES: &[&str] = &[
    "Makefile",
    "Dockerfile",
    "LICENSE",
    "README",
    "CHANGELOG",
    "CONTRIBUTING",
    "AUTHORS",
    "INSTALL",
    "Gemfile",
    "Rakefile",
];

/// Longest filename the inference will accept.
const MAX_FILENAME_LEN: usize = 200;

/// One scanned fence: inferred target name, raw body, opener line (1-based).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fence {
    pub filename: String,
    pub content: String,
    pub line: usize,
}

/// Scan the whole document for root-level fences with inferable filenames.
///
/// A pure function of the text: scanning twice yields identical results.
pub fn scan_fences(text: &str, log: &mut BuildLog) -> Vec<Fence> {
    log.section("Code Fence Detection");

    let lines: Vec<&str> = text.lines().collect();
    let mut fences = Vec::new();
    let mut i = 0usize;

    while i < lines.len() {
        let line = lines[i];
        if leading_indent(line) != 0 || !line.trim().starts_with("```") {
            i += 1;
            continue;
        }

        let opener_line = i;
        let mut filename = pre_fence_name(&lines, i).or_else(|| on_fence_name(line.trim()));

        let (mut body, next) = collect_body(&lines, i + 1);

        if filename.is_none() {
            if let Some(name) = post_fence_name(&body) {
                body.remove(0);
                filename = Some(name);
            }
        }

        match filename {
            Some(name) => {
                let content = body.join("\n");
                log.info(
                    &format!("fence at line {} -> {}", opener_line + 1, name),
                    Some(&format!("{} chars", content.len())),
                );
                fences.push(Fence {
                    filename: name,
                    content,
                    line: opener_line + 1,
                });
            }
            None => {
                log.warning(
                    &format!("fence at line {} has no filename", opener_line + 1),
                    Some("skipping"),
                );
            }
        }

        i = next;
    }

    log.info(&format!("fences detected: {}", fences.len()), None);
    fences
}

/// Width of the leading whitespace run, in characters.
fn leading_indent(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// Heuristic 1: the line immediately above the opener.
fn pre_fence_name(lines: &[&str], opener: usize) -> Option<String> {
    if opener == 0 {
        return None;
    }
    let prev = lines[opener - 1].trim();
    if prev.is_empty() || prev.starts_with("```") {
        return None;
    }
    extract_filename(prev)
}

/// Heuristic 2: the opener's own text after the backticks.
///
/// A purely alphabetic tag is a language name (`python`, `json`), never a
/// file.
fn on_fence_name(trimmed_opener: &str) -> Option<String> {
    let after = &trimmed_opener[3..];
    if after.is_empty() || after.chars().all(char::is_alphabetic) {
        return None;
    }
    extract_filename(after)
}

/// Heuristic 3: a comment-only first content line naming the file.
fn post_fence_name(body: &[&str]) -> Option<String> {
    let first = body.first()?.trim();
    let marker = starts_with_marker(first)?;
    let remainder = first[marker.len()..].trim();
    let (name_part, _) = split_comment(remainder);
    extract_filename(name_part.trim())
}

/// Accumulate body lines until the fence's own closing delimiter.
///
/// A trimmed-backtick line opens a nested fence when it carries a non-empty
/// tag or is indented; those are kept in the body and tracked with a
/// nesting counter. An unindented, untagged backtick line closes the outer
/// fence only when the counter is zero; otherwise it closes an inner fence
/// and is kept. An unclosed fence runs to the end of the document.
///
/// Returns the body and the index of the line after the close.
fn collect_body<'a>(lines: &[&'a str], from: usize) -> (Vec<&'a str>, usize) {
    let mut body = Vec::new();
    let mut nesting = 0usize;
    let mut i = from;

    while i < lines.len() {
        let line = lines[i];
        let trimmed = line.trim();

        if trimmed.starts_with("```") {
            let tag = trimmed[3..].trim();
            let indented = leading_indent(line) > 0;

            if !tag.is_empty() || indented {
                nesting += 1;
                body.push(line);
            } else if nesting > 0 {
                nesting -= 1;
                body.push(line);
            } else {
                return (body, i + 1);
            }
        } else {
            body.push(line);
        }
        i += 1;
    }

    (body, i)
}

/// Validate and clean a filename candidate.
///
/// Strips markdown backtick/bold decoration (`**`name`**` and trailing
/// remarks outside the backticks), then accepts the result when it is in
/// the extensionless common-name list, or has an extension / is a dotfile
/// and is either path-like or a single token, under the length cap.
pub fn extract_filename(text: &str) -> Option<String> {
    let mut candidate = text.trim().to_string();

    if let (Some(first), Some(last)) = (candidate.find('`'), candidate.rfind('`')) {
        if first < last {
            candidate = candidate[first + 1..last].to_string();
        }
    }
    let candidate = candidate.trim_matches('*').trim();

    if COMMON_FILENAMES.contains(&candidate) {
        return Some(candidate.to_string());
    }

    if !candidate.contains('.') && !candidate.starts_with('.') {
        return None;
    }
    let path_like = candidate.contains(['/', '\\']);
    let single_token = candidate.split_whitespace().count() == 1;
    if (path_like || single_token) && !candidate.is_empty() && candidate.len() < MAX_FILENAME_LEN {
        return Some(candidate.to_string());
    }

    None
}

#[cfg(test)]
#[path = "fence_tests.rs"]
mod tests;
