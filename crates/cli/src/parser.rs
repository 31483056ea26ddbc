// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Multi-notation tree parser.
//!
//! Consumes the detected region line by line and builds a [`Forest`]. Three
//! notations may be freely mixed:
//!
//! - indentation-based: one segment per line, nesting by leading whitespace
//! - box-drawing diagrams: `├── name`, connectors count toward the indent
//! - shorthand paths: `src/app/main.py`, one whole chain per line
//!
//! Parent resolution uses an explicit stack of `(indent, node)` pairs:
//! entries are popped while their indent is `>=` the current line's, leaving
//! the nearest valid ancestor on top. A shorthand line pushes only its first
//! segment (when it has no stacked parent), so later indented lines address
//! the chain through the top segment's subtree.

use crate::comment::split_comment;
use crate::detect::TreeRegion;
use crate::sanitize::sanitize_name;
use crate::tree::{Forest, NodeId};

/// Connector glyphs stripped (along with whitespace) from line starts.
const CONNECTORS: &[char] = &['│', '├', '└', '─'];

/// Parse the tree region of `text` into a forest of nodes.
pub fn parse(text: &str, region: TreeRegion) -> Forest {
    let lines: Vec<&str> = text.lines().collect();
    let end = region.end.unwrap_or(lines.len()).min(lines.len());
    let start = region.start.min(end);

    let mut forest = Forest::new();
    let mut stack: Vec<(usize, NodeId)> = Vec::new();

    for line in &lines[start..end] {
        if line.trim().is_empty() {
            continue;
        }

        let (content, indent) = strip_connectors(line);
        let content = content.trim();
        if content.is_empty() {
            continue;
        }

        let (name_part, comment) = split_comment(content);
        if name_part.is_empty() {
            continue;
        }
        let comment = comment.map(str::to_string);

        if is_shorthand(name_part) {
            parse_shorthand(&mut forest, &mut stack, name_part, indent, comment);
        } else {
            parse_indented(&mut forest, &mut stack, name_part, indent, comment);
        }
    }

    forest
}

/// Strip the leading run of whitespace and connector glyphs.
///
/// Returns the remaining content and the run's width in characters, which
/// serves as the line's logical indent.
fn strip_connectors(line: &str) -> (&str, usize) {
    let mut indent = 0usize;
    let mut byte_offset = 0usize;

    for c in line.chars() {
        if c.is_whitespace() || CONNECTORS.contains(&c) {
            indent += 1;
            byte_offset += c.len_utf8();
        } else {
            break;
        }
    }

    (&line[byte_offset..], indent)
}

/// A line is shorthand when splitting on separators yields more than one
/// non-empty segment. A lone trailing separator (`src/`) stays indented.
fn is_shorthand(name_part: &str) -> bool {
    if !name_part.contains(['/', '\\']) {
        return false;
    }
    name_part
        .split(['/', '\\'])
        .filter(|s| !s.is_empty())
        .count()
        > 1
}

/// One-segment-per-line branch.
fn parse_indented(
    forest: &mut Forest,
    stack: &mut Vec<(usize, NodeId)>,
    name_part: &str,
    indent: usize,
    comment: Option<String>,
) {
    let explicit_dir = name_part.ends_with(['/', '\\']);
    let bare = name_part.trim_end_matches(['/', '\\']);
    // A single-segment name has no path semantics left to preserve; drop
    // any stray separators before sanitizing.
    let name = sanitize_name(&bare.replace(['/', '\\'], ""));
    if name.is_empty() {
        return;
    }

    pop_to_parent(stack, indent);

    let id = match stack.last() {
        Some(&(_, parent)) => forest.attach_child(parent, name, !explicit_dir, comment),
        None => match forest.find_root(&name) {
            Some(existing) => {
                if forest.node(existing).comment.is_none() {
                    forest.node_mut(existing).comment = comment;
                }
                existing
            }
            None => forest.push_root(name, !explicit_dir, comment),
        },
    };

    stack.push((indent, id));
}

/// Whole-path-per-line branch.
///
/// Segments are sanitized individually; empties are dropped. Only the last
/// segment is a leaf and carries the comment (backfilled onto an existing
/// node that lacks one). Intermediate segments are directories.
fn parse_shorthand(
    forest: &mut Forest,
    stack: &mut Vec<(usize, NodeId)>,
    name_part: &str,
    indent: usize,
    comment: Option<String>,
) {
    let segments: Vec<String> = name_part
        .split(['/', '\\'])
        .map(sanitize_name)
        .filter(|s| !s.is_empty())
        .collect();
    let Some((first, rest)) = segments.split_first() else {
        return;
    };

    pop_to_parent(stack, indent);
    let parent = stack.last().map(|&(_, id)| id);
    let single = rest.is_empty();
    let first_comment = single.then(|| comment.clone()).flatten();

    let head = match parent {
        Some(p) => forest.attach_child(p, first.clone(), single, first_comment),
        None => match forest.find_root(first) {
            Some(existing) => {
                if single && forest.node(existing).comment.is_none() {
                    forest.node_mut(existing).comment = comment.clone();
                }
                existing
            }
            None => forest.push_root(first.clone(), single, first_comment),
        },
    };

    let mut current = head;
    for (i, segment) in rest.iter().enumerate() {
        let last = i + 1 == rest.len();
        let node_comment = last.then(|| comment.clone()).flatten();
        current = forest.attach_child(current, segment.clone(), last, node_comment);
    }

    // Only the top segment becomes addressable for later indented lines.
    if parent.is_none() {
        stack.push((indent, head));
    }
}

/// Pop stack entries whose indent is `>=` the current line's.
fn pop_to_parent(stack: &mut Vec<(usize, NodeId)>, indent: usize) {
    while stack.last().is_some_and(|&(width, _)| width >= indent) {
        stack.pop();
    }
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
