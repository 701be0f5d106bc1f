//! Optional user configuration
//!
//! Looked up in order: an explicit path, `$BRANCHPICK_CONFIG`, then
//! `<config dir>/branchpick/config.toml`. A missing file means defaults;
//! an unreadable or malformed one is an error.
//!
//! ```toml
//! [delete]
//! force = false
//!
//! [ui]
//! color = true
//! page_size = 10
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;
use tracing::debug;

use crate::error::{BranchError, Result};

pub const CONFIG_ENV: &str = "BRANCHPICK_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub delete: DeleteConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeleteConfig {
    /// Delete branches even when they hold unmerged commits
    pub force: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UiConfig {
    pub color: bool,
    /// Rows shown at once in branch lists
    pub page_size: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            color: true,
            page_size: 10,
        }
    }
}

impl Config {
    /// Load from the first location that applies
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match Self::locate(explicit) {
            Some((path, required)) => Self::load_from(&path, required),
            None => Ok(Self::default()),
        }
    }

    /// Where to read config from, and whether the file must exist
    fn locate(explicit: Option<&Path>) -> Option<(PathBuf, bool)> {
        if let Some(path) = explicit {
            return Some((path.to_path_buf(), true));
        }
        if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|v| !v.is_empty()) {
            return Some((PathBuf::from(path), true));
        }
        dirs::config_dir().map(|dir| (dir.join("branchpick").join("config.toml"), false))
    }

    fn load_from(path: &Path, required: bool) -> Result<Self> {
        if !required && !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .context("Failed to read config file")
            .map_err(|reason| BranchError::Config {
                path: path.to_path_buf(),
                reason,
            })?;

        let config: Config = toml::from_str(&content)
            .context("Failed to parse config file")
            .map_err(|reason| BranchError::Config {
                path: path.to_path_buf(),
                reason,
            })?;

        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }
}
