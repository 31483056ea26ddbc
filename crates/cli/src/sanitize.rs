// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Path-segment sanitization.
//!
//! Tree sketches are decorated freely: emoji folder icons, box-drawing
//! connectors, characters no filesystem accepts. This module reduces a raw
//! segment to something safe to create on disk. Parentheses and square
//! brackets are deliberately preserved (Next.js route groups like
//! `(dashboard)/` and dynamic routes like `[id]/` are legitimate directory
//! names).

/// Box-drawing glyphs that appear in tree diagrams.
const BOX_DRAWING: &[char] = &[
    '│', '├', '└', '─', '┌', '┐', '┘', '┤', '┬', '┴', '┼', '═', '║', '╔', '╗', '╚', '╝', '╠', '╣',
    '╦', '╩', '╬',
];

/// Characters rejected by at least one mainstream filesystem.
///
/// Separators (`/`, `\`) are not listed here; the parser handles them before
/// sanitization because they carry path semantics.
const FS_INVALID: &[char] = &['<', '>', ':', '"', '|', '?', '*'];

/// Check whether a character falls in one of the common emoji blocks.
fn is_emoji(c: char) -> bool {
    matches!(c,
        '\u{1F600}'..='\u{1F64F}'   // emoticons
        | '\u{1F300}'..='\u{1F5FF}' // symbols & pictographs
        | '\u{1F680}'..='\u{1F6FF}' // transport & map symbols
        | '\u{1F1E0}'..='\u{1F1FF}' // regional indicators (flags)
        | '\u{1F900}'..='\u{1F9FF}' // supplemental symbols
        | '\u{1FA00}'..='\u{1FAFF}' // extended-a symbols
        | '\u{2600}'..='\u{26FF}'   // miscellaneous symbols
        | '\u{2700}'..='\u{27BF}'   // dingbats
        | '\u{24C2}'..='\u{24FF}'   // enclosed alphanumerics (partial)
        | '\u{FE0F}'                // variation selector-16
    )
}

/// Check for C0 control characters plus DEL.
fn is_control(c: char) -> bool {
    (c as u32) < 0x20 || c as u32 == 0x7F
}

/// Reduce a raw path segment to an OS-compatible name.
///
/// Strips emoji, box-drawing glyphs, filesystem-invalid characters, and
/// control characters, then collapses whitespace runs to a single space and
/// trims both ends. Never fails; an input with nothing usable yields the
/// empty string, which callers must treat as "no name". Idempotent.
pub fn sanitize_name(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_space = false;

    for c in raw.chars() {
        if is_emoji(c) || BOX_DRAWING.contains(&c) || FS_INVALID.contains(&c) || is_control(c) {
            continue;
        }
        if c.is_whitespace() {
            pending_space = true;
            continue;
        }
        if pending_space && !out.is_empty() {
            out.push(' ');
        }
        pending_space = false;
        out.push(c);
    }

    out
}

#[cfg(test)]
#[path = "sanitize_tests.rs"]
mod tests;
