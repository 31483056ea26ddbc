// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tree reconciliation and building.
//!
//! Two passes over the parsed forest. The structural pass creates every
//! directory and file the sketch describes, seeding annotated files with a
//! comment line in the syntax matching their extension. The content pass
//! maps each scanned fence onto a target path (exact path, bare-filename
//! search over known paths in sorted order, or shorthand creation under the
//! effective root) and applies the conflict policy:
//!
//! - target missing: create it, comment line first
//! - target empty or holding only its own seed comment: append
//! - target has real content: write to the first free ` (N)` sibling
//!
//! Structural I/O failures abort the whole build; fence failures are
//! isolated per fence so one bad block cannot spoil the rest.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::comment::comment_line;
use crate::error::{Error, Result};
use crate::fence::Fence;
use crate::fs::{FileSystem, WriteMode};
use crate::log::BuildLog;
use crate::tree::{Forest, NodeId};

/// Counters reported after a build.
#[derive(Debug, Default, Clone, Serialize, PartialEq, Eq)]
pub struct BuildStats {
    pub dirs_created: usize,
    pub files_created: usize,
    pub skipped: usize,
    pub fences_processed: usize,
}

/// Pick the effective root and the set of nodes to build under it.
///
/// A forest with a single root names the project folder itself: that name
/// is appended to the base directory and its children become the build set
/// (empty if the root was a leaf). Multiple roots build directly under the
/// base directory.
pub fn select_root(forest: &Forest, base: &Path) -> (PathBuf, Vec<NodeId>) {
    let roots = forest.roots();
    if let [single] = roots {
        let node = forest.node(*single);
        let children = if node.is_leaf {
            Vec::new()
        } else {
            node.children.clone()
        };
        (base.join(&node.name), children)
    } else {
        (base.to_path_buf(), roots.to_vec())
    }
}

/// Builds the described tree through a [`FileSystem`].
pub struct Builder<'a, F: FileSystem> {
    root: PathBuf,
    fs: &'a mut F,
    /// Full path -> node comment, for fence matching and the comment-only
    /// content check. Sorted, so bare-filename search is deterministic.
    known: BTreeMap<PathBuf, Option<String>>,
    stats: BuildStats,
}

impl<'a, F: FileSystem> Builder<'a, F> {
    pub fn new(root: PathBuf, fs: &'a mut F) -> Builder<'a, F> {
        Builder {
            root,
            fs,
            known: BTreeMap::new(),
            stats: BuildStats::default(),
        }
    }

    pub fn stats(&self) -> &BuildStats {
        &self.stats
    }

    /// Run both passes. On error the statistics gathered so far remain
    /// readable through [`Builder::stats`].
    pub fn build(
        &mut self,
        forest: &Forest,
        build_set: &[NodeId],
        fences: &[Fence],
        log: &mut BuildLog,
    ) -> Result<()> {
        log.section("Building File Structure");
        log.info(&format!("processing {} node(s)", build_set.len()), None);

        self.ensure_root(log)?;
        for &id in build_set {
            let root = self.root.clone();
            self.build_node(forest, id, &root, log)?;
        }

        log.info(
            &format!(
                "created {} directories, {} files, skipped {}",
                self.stats.dirs_created, self.stats.files_created, self.stats.skipped
            ),
            None,
        );

        if !fences.is_empty() {
            log.section("Filling Content from Code Fences");
            log.info(&format!("processing {} code fence(s)", fences.len()), None);
            for fence in fences {
                self.stats.fences_processed += 1;
                if let Err(e) = self.fill_fence(fence, log) {
                    log.error(
                        &format!("failed to process fence: {}", fence.filename),
                        Some(&format!("line {}: {e}", fence.line)),
                    );
                }
            }
        }

        Ok(())
    }

    /// Create or account for the effective root directory itself.
    fn ensure_root(&mut self, log: &mut BuildLog) -> Result<()> {
        if self.fs.exists(&self.root) {
            if !self.fs.is_dir(&self.root) {
                return Err(Error::Argument(format!(
                    "root path exists and is not a directory: {}",
                    self.root.display()
                )));
            }
            self.stats.skipped += 1;
            log.info(
                &format!("root already exists: {}", self.root.display()),
                None,
            );
        } else {
            let root = self.root.clone();
            self.fs.create_dir_all(&root)?;
            self.stats.dirs_created += 1;
            log.info(&format!("created root: {}", self.root.display()), None);
        }
        Ok(())
    }

    /// Structural pass over one node and its subtree.
    fn build_node(
        &mut self,
        forest: &Forest,
        id: NodeId,
        parent_path: &Path,
        log: &mut BuildLog,
    ) -> Result<()> {
        let node = forest.node(id);
        let path = parent_path.join(&node.name);
        self.known.insert(path.clone(), node.comment.clone());

        if node.is_leaf {
            if self.fs.exists(&path) {
                self.stats.skipped += 1;
                log.info(&format!("skipped existing file: {}", path.display()), None);
            } else {
                self.create_file(&path, node.comment.as_deref(), log)?;
            }
            return Ok(());
        }

        if self.fs.exists(&path) {
            if !self.fs.is_dir(&path) {
                self.stats.skipped += 1;
                log.warning(
                    &format!("path exists but is not a directory: {}", path.display()),
                    Some("subtree not built"),
                );
                return Ok(());
            }
            self.stats.skipped += 1;
            log.info(
                &format!("skipped existing directory: {}", path.display()),
                None,
            );
        } else {
            match self.fs.create_dir_all(&path) {
                Ok(()) => {
                    self.stats.dirs_created += 1;
                    log.info(&format!("created directory: {}", path.display()), None);
                }
                Err(e) => {
                    log.error(
                        &format!("failed to create directory: {}", path.display()),
                        Some(&e.to_string()),
                    );
                    return Err(e);
                }
            }
        }

        for &child in &node.children {
            self.build_node(forest, child, &path, log)?;
        }
        Ok(())
    }

    /// Create a file, seeded with its comment line when it has one.
    fn create_file(&mut self, path: &Path, comment: Option<&str>, log: &mut BuildLog) -> Result<()> {
        if let Some(parent) = path.parent() {
            self.fs.create_dir_all(parent)?;
        }
        let content = match comment {
            Some(text) => format!("{}\n", comment_line(path, text)),
            None => String::new(),
        };
        match self.fs.write(path, &content, WriteMode::Overwrite) {
            Ok(()) => {
                self.stats.files_created += 1;
                log.info(&format!("created file: {}", path.display()), None);
                Ok(())
            }
            Err(e) => {
                log.error(
                    &format!("failed to create file: {}", path.display()),
                    Some(&e.to_string()),
                );
                Err(e)
            }
        }
    }

    /// Content pass for one fence.
    fn fill_fence(&mut self, fence: &Fence, log: &mut BuildLog) -> Result<()> {
        let normalized = fence.filename.replace('\\', "/");

        let (target, node_comment) = match self.resolve_target(&normalized) {
            Some((path, comment)) => {
                log.info(&format!("matched to tree path: {}", path.display()), None);
                (path, comment)
            }
            None => {
                let path = join_relative(&self.root, &normalized);
                log.info(
                    &format!("not in tree, creating as shorthand: {normalized}"),
                    None,
                );
                (path, None)
            }
        };

        if !self.fs.exists(&target) {
            if let Some(parent) = target.parent() {
                self.fs.create_dir_all(parent)?;
            }
            let mut content = String::new();
            if let Some(text) = &node_comment {
                content.push_str(&comment_line(&target, text));
                content.push('\n');
            }
            content.push_str(&fence.content);
            self.fs.write(&target, &content, WriteMode::Overwrite)?;
            self.stats.files_created += 1;
            log.info(
                &format!("created file with content: {}", target.display()),
                None,
            );
            return Ok(());
        }

        let existing = self.fs.read_to_string(&target)?;
        let seed_only = node_comment
            .as_deref()
            .is_some_and(|text| existing.trim() == comment_line(&target, text).trim());

        if existing.trim().is_empty() || seed_only {
            let mut chunk = String::new();
            if !existing.is_empty() && !existing.ends_with('\n') {
                chunk.push('\n');
            }
            chunk.push_str(&fence.content);
            self.fs.write(&target, &chunk, WriteMode::Append)?;
            log.info(&format!("appended content to: {}", target.display()), None);
        } else {
            let duplicate = self.duplicate_path(&target);
            self.fs
                .write(&duplicate, &fence.content, WriteMode::Overwrite)?;
            self.stats.files_created += 1;
            log.warning(
                &format!("file had content, created duplicate: {}", duplicate.display()),
                None,
            );
        }
        Ok(())
    }

    /// Resolve a fence name against the known node paths.
    ///
    /// Names carrying a separator must match an exact joined path; bare
    /// names match the first known path (in sorted order) with that final
    /// segment.
    fn resolve_target(&self, normalized: &str) -> Option<(PathBuf, Option<String>)> {
        if normalized.contains('/') {
            let candidate = join_relative(&self.root, normalized);
            return self
                .known
                .get(&candidate)
                .map(|comment| (candidate, comment.clone()));
        }

        self.known
            .iter()
            .find(|(path, _)| {
                path.file_name()
                    .is_some_and(|name| name.to_string_lossy() == normalized)
            })
            .map(|(path, comment)| (path.clone(), comment.clone()))
    }

    /// First unused ` (N)` sibling of `path`, with N inserted before the
    /// extension.
    fn duplicate_path(&self, path: &Path) -> PathBuf {
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let ext = path.extension().map(|e| e.to_string_lossy().into_owned());
        let dir = path.parent().unwrap_or_else(|| Path::new(""));

        let mut counter = 1usize;
        loop {
            let name = match &ext {
                Some(ext) => format!("{stem} ({counter}).{ext}"),
                None => format!("{stem} ({counter})"),
            };
            let candidate = dir.join(name);
            if !self.fs.exists(&candidate) {
                return candidate;
            }
            counter += 1;
        }
    }
}

/// Join a normalized (`/`-separated) relative name onto a base directory.
fn join_relative(base: &Path, normalized: &str) -> PathBuf {
    let mut out = base.to_path_buf();
    for segment in normalized.split('/').filter(|s| !s.is_empty()) {
        out.push(segment);
    }
    out
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
