// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Inline comment handling.
//!
//! Tree sketches annotate entries in whatever comment style the author is
//! used to (`src/ # sources`, `main.cpp // entry point`). The extractor
//! splits a line into its name portion and the trailing annotation. The
//! style table maps file extensions to the comment syntax used when seeding
//! a created file with its annotation.

use std::path::Path;

/// Comment-start markers, checked by earliest occurrence in the line.
///
/// List order only breaks ties at the same offset (`<!--` before `<--`,
/// `//` before `/*`), which is the correct longest-marker preference.
const COMMENT_MARKERS: &[&str] = &["<!--", "<--", "//", "/*", "#"];

/// Split a line into its name portion and an optional trailing comment.
///
/// The marker at the smallest character offset wins regardless of its
/// position in the marker list, so `a.txt # one // two` splits at `#` and
/// keeps `one // two` intact. Closer tokens (`-->`, `*/`) are not treated
/// specially and remain part of the comment text.
pub fn split_comment(line: &str) -> (&str, Option<&str>) {
    let mut earliest: Option<(usize, &str)> = None;

    for marker in COMMENT_MARKERS {
        if let Some(pos) = line.find(marker) {
            let better = match earliest {
                Some((best, _)) => pos < best,
                None => true,
            };
            if better {
                earliest = Some((pos, marker));
            }
        }
    }

    match earliest {
        Some((pos, marker)) => {
            let name = line[..pos].trim_end();
            let comment = line[pos + marker.len()..].trim();
            (name, (!comment.is_empty()).then_some(comment))
        }
        None => (line.trim(), None),
    }
}

/// Check whether a line opens with a known comment marker.
///
/// Used by the fence scanner to decide if a fence's first content line is a
/// filename annotation rather than code.
pub fn starts_with_marker(line: &str) -> Option<&'static str> {
    // `///` first so doc-comment lines are stripped whole.
    const LINE_MARKERS: &[&str] = &["///", "//", "#", "<!--", "<--"];
    LINE_MARKERS.iter().find(|m| line.starts_with(**m)).copied()
}

/// Comment syntax for a target file, keyed by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentStyle {
    /// `# text`: script/config languages; also the default.
    Hash,
    /// `// text`: C-family languages.
    Slash,
    /// `<!-- text -->`: markup.
    Markup,
    /// `/* text */`: stylesheet languages.
    Block,
    /// `-- text`: SQL.
    Dash,
}

/// Static extension → comment-style table.
const STYLE_TABLE: &[(&str, CommentStyle)] = &[
    ("py", CommentStyle::Hash),
    ("rb", CommentStyle::Hash),
    ("sh", CommentStyle::Hash),
    ("bash", CommentStyle::Hash),
    ("yml", CommentStyle::Hash),
    ("yaml", CommentStyle::Hash),
    ("toml", CommentStyle::Hash),
    ("conf", CommentStyle::Hash),
    ("c", CommentStyle::Slash),
    ("cpp", CommentStyle::Slash),
    ("h", CommentStyle::Slash),
    ("hpp", CommentStyle::Slash),
    ("java", CommentStyle::Slash),
    ("js", CommentStyle::Slash),
    ("ts", CommentStyle::Slash),
    ("jsx", CommentStyle::Slash),
    ("tsx", CommentStyle::Slash),
    ("cs", CommentStyle::Slash),
    ("go", CommentStyle::Slash),
    ("rs", CommentStyle::Slash),
    ("swift", CommentStyle::Slash),
    ("kt", CommentStyle::Slash),
    ("scala", CommentStyle::Slash),
    ("php", CommentStyle::Slash),
    ("html", CommentStyle::Markup),
    ("xml", CommentStyle::Markup),
    ("svg", CommentStyle::Markup),
    ("css", CommentStyle::Block),
    ("scss", CommentStyle::Block),
    ("sass", CommentStyle::Block),
    ("less", CommentStyle::Block),
    ("sql", CommentStyle::Dash),
];

impl CommentStyle {
    /// Look up the style for a path by its (lowercased) extension.
    pub fn for_path(path: &Path) -> CommentStyle {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext {
            Some(ext) => STYLE_TABLE
                .iter()
                .find(|(e, _)| *e == ext)
                .map(|(_, style)| *style)
                .unwrap_or(CommentStyle::Hash),
            None => CommentStyle::Hash,
        }
    }

    /// Render `text` as a single comment line in this style (no newline).
    pub fn format(self, text: &str) -> String {
        match self {
            CommentStyle::Hash => format!("# {text}"),
            CommentStyle::Slash => format!("// {text}"),
            CommentStyle::Markup => format!("<!-- {text} -->"),
            CommentStyle::Block => format!("/* {text} */"),
            CommentStyle::Dash => format!("-- {text}"),
        }
    }
}

/// Render the seed comment line for a file at `path`.
pub fn comment_line(path: &Path, text: &str) -> String {
    CommentStyle::for_path(path).format(text)
}

#[cfg(test)]
#[path = "comment_tests.rs"]
mod tests;
