// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Filesystem capability.
//!
//! The builder performs all of its side effects through this trait; nothing
//! in the core touches `std::fs` directly. Keeping the seam here makes the
//! reconciliation logic testable against any backend and keeps error
//! context (the offending path) attached at the boundary.

use std::path::Path;

use crate::error::{Error, Result};

/// Write disposition for [`FileSystem::write`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    Overwrite,
    Append,
}

/// Abstract filesystem the builder writes through.
pub trait FileSystem {
    fn exists(&self, path: &Path) -> bool;
    fn is_dir(&self, path: &Path) -> bool;
    fn create_dir_all(&mut self, path: &Path) -> Result<()>;
    fn read_to_string(&self, path: &Path) -> Result<String>;
    fn write(&mut self, path: &Path, content: &str, mode: WriteMode) -> Result<()>;
}

/// `std::fs`-backed implementation.
#[derive(Debug, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn create_dir_all(&mut self, path: &Path) -> Result<()> {
        std::fs::create_dir_all(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    fn write(&mut self, path: &Path, content: &str, mode: WriteMode) -> Result<()> {
        use std::io::Write;

        let io_err = |source| Error::Io {
            path: path.to_path_buf(),
            source,
        };

        match mode {
            WriteMode::Overwrite => std::fs::write(path, content).map_err(io_err),
            WriteMode::Append => {
                let mut file = std::fs::OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(io_err)?;
                file.write_all(content.as_bytes()).map_err(io_err)
            }
        }
    }
}

#[cfg(test)]
#[path = "fs_tests.rs"]
mod tests;
