// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for build summaries and scan previews.

use std::io::Write;
use std::path::PathBuf;

use serde::Serialize;
use termcolor::{ColorChoice, StandardStream, WriteColor};

use crate::builder::BuildStats;
use crate::color::scheme;
use crate::fence::Fence;
use crate::tree::Forest;

/// Everything the user sees after a build.
#[derive(Debug, Serialize)]
pub struct BuildSummary {
    pub ok: bool,
    pub root: PathBuf,
    #[serde(flatten)]
    pub stats: BuildStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Write the human-readable summary to stdout.
pub fn write_text_summary(summary: &BuildSummary, choice: ColorChoice) -> std::io::Result<()> {
    let mut out = StandardStream::stdout(choice);

    if summary.ok {
        out.set_color(&scheme::success())?;
        write!(out, "built")?;
    } else {
        out.set_color(&scheme::failure())?;
        write!(out, "failed")?;
    }
    out.reset()?;
    writeln!(out, " {}", summary.root.display())?;

    if let Some(error) = &summary.error {
        writeln!(out, "  error: {error}")?;
    }

    writeln!(
        out,
        "  {} directories, {} files created, {} skipped, {} code blocks",
        summary.stats.dirs_created,
        summary.stats.files_created,
        summary.stats.skipped,
        summary.stats.fences_processed,
    )?;

    if let Some(log_path) = &summary.log_path {
        out.set_color(&scheme::detail())?;
        writeln!(out, "  log: {}", log_path.display())?;
        out.reset()?;
    }
    Ok(())
}

/// Write the JSON summary to stdout.
pub fn write_json_summary(summary: &BuildSummary) -> anyhow::Result<()> {
    let mut out = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, summary)?;
    writeln!(out)?;
    Ok(())
}

/// Parse-only preview of a document.
#[derive(Debug, Serialize)]
pub struct ScanReport {
    pub region_start: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_end: Option<usize>,
    pub tree: Vec<ScanNode>,
    pub fences: Vec<ScanFence>,
}

/// One tree entry in a scan report.
#[derive(Debug, Serialize)]
pub struct ScanNode {
    pub path: PathBuf,
    pub kind: NodeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    File,
    Directory,
}

/// One fence entry in a scan report.
#[derive(Debug, Serialize)]
pub struct ScanFence {
    pub filename: String,
    pub line: usize,
    pub bytes: usize,
}

impl ScanReport {
    pub fn new(region: crate::detect::TreeRegion, forest: &Forest, fences: &[Fence]) -> ScanReport {
        let tree = forest
            .iter()
            .map(|id| {
                let node = forest.node(id);
                ScanNode {
                    path: forest.path(id),
                    kind: if node.is_leaf {
                        NodeKind::File
                    } else {
                        NodeKind::Directory
                    },
                    comment: node.comment.clone(),
                }
            })
            .collect();

        let fences = fences
            .iter()
            .map(|f| ScanFence {
                filename: f.filename.clone(),
                line: f.line,
                bytes: f.content.len(),
            })
            .collect();

        ScanReport {
            region_start: region.start,
            region_end: region.end,
            tree,
            fences,
        }
    }
}

/// Write the human-readable scan report to stdout.
pub fn write_text_scan(report: &ScanReport) -> std::io::Result<()> {
    let mut out = std::io::stdout().lock();

    match report.region_end {
        Some(end) => writeln!(out, "tree region: lines {}..{}", report.region_start + 1, end)?,
        None => writeln!(
            out,
            "tree region: line {} to end of document",
            report.region_start + 1
        )?,
    }

    writeln!(out, "tree ({} entries):", report.tree.len())?;
    for node in &report.tree {
        let suffix = match node.kind {
            NodeKind::Directory => "/",
            NodeKind::File => "",
        };
        match &node.comment {
            Some(comment) => {
                writeln!(out, "  {}{suffix}  # {comment}", node.path.display())?;
            }
            None => writeln!(out, "  {}{suffix}", node.path.display())?,
        }
    }

    writeln!(out, "fences ({}):", report.fences.len())?;
    for fence in &report.fences {
        writeln!(
            out,
            "  {} (line {}, {} bytes)",
            fence.filename, fence.line, fence.bytes
        )?;
    }
    Ok(())
}

/// Write the JSON scan report to stdout.
pub fn write_json_scan(report: &ScanReport) -> anyhow::Result<()> {
    let mut out = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, report)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
