// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and discovery.
//!
//! An optional `treeframe.toml` tunes build behavior. Discovery walks up
//! from the document's directory so a config at a project root covers
//! documents anywhere beneath it. CLI flags always win over config values.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

/// Name of the config file searched for during discovery.
pub const CONFIG_FILE_NAME: &str = "treeframe.toml";

/// Full configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Config file version (must be 1).
    #[serde(default = "default_version")]
    pub version: i64,

    /// Build behavior.
    #[serde(default)]
    pub build: BuildConfig,
}

fn default_version() -> i64 {
    1
}

/// `[build]` section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildConfig {
    /// Retain the build log even when the build succeeds.
    #[serde(default)]
    pub keep_logs: bool,

    /// Default root directory, relative to the config file's directory.
    #[serde(default)]
    pub root: Option<PathBuf>,
}

/// Load and validate a config file.
pub fn load(path: &Path) -> Result<Config> {
    let contents = std::fs::read_to_string(path).map_err(|e| Error::Config {
        message: format!("cannot read config: {e}"),
        path: Some(path.to_path_buf()),
    })?;

    let config: Config = toml::from_str(&contents).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })?;

    if config.version != 1 {
        return Err(Error::Config {
            message: format!("unsupported config version: {}", config.version),
            path: Some(path.to_path_buf()),
        });
    }

    Ok(config)
}

/// Find the nearest `treeframe.toml` at or above `start`.
pub fn discover(start: &Path) -> Option<PathBuf> {
    let mut dir = Some(start);
    while let Some(d) = dir {
        let candidate = d.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        dir = d.parent();
    }
    None
}

/// Resolve the active config: an explicit path wins, then discovery from
/// `start`, then built-in defaults.
pub fn resolve(explicit: Option<&Path>, start: &Path) -> Result<(Config, Option<PathBuf>)> {
    match explicit {
        Some(path) => {
            let config = load(path)?;
            Ok((config, Some(path.to_path_buf())))
        }
        None => match discover(start) {
            Some(path) => {
                tracing::debug!("loading config from {}", path.display());
                let config = load(&path)?;
                Ok((config, Some(path)))
            }
            None => {
                tracing::debug!("no config found, using defaults");
                Ok((Config::default(), None))
            }
        },
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
