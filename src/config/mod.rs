//! Configuration management for branchyard.
//!
//! A single JSON document at `~/.branchyardrc` holding the default editor,
//! the workspace template and optional extra editors. A file that does not
//! parse against the schema is fatal; there is no fallback to defaults.

pub mod editors;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::BranchyardError;
pub use editors::{EditorRegistry, BUILTIN_EDITORS, FALLBACK_EDITOR};

/// File name under the home directory
pub const CONFIG_FILE_NAME: &str = ".branchyardrc";

/// Environment variable overriding the config path
pub const CONFIG_PATH_ENV: &str = "BRANCHYARD_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_editor: Option<String>,

    /// Arbitrary object shallow-merged into the generated workspace file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_template: Option<Map<String, Value>>,

    /// Extra editor ids and their launch commands
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editors: Option<BTreeMap<String, String>>,
}

impl Config {
    pub fn editor_registry(&self) -> EditorRegistry {
        match &self.editors {
            Some(extra) => EditorRegistry::with_extra(extra),
            None => EditorRegistry::default(),
        }
    }
}

/// Reads and writes the config file at a fixed path
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `$BRANCHYARD_CONFIG` or `~/.branchyardrc`
    pub fn open_default() -> Result<Self> {
        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
            return Ok(Self::at(path));
        }
        let home = dirs::home_dir().ok_or(BranchyardError::NoHomeDirectory)?;
        Ok(Self::at(home.join(CONFIG_FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the config, or an empty one if the file does not exist
    pub fn load(&self) -> Result<Config> {
        if !self.path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read config file: {}", self.path.display()))?;

        let config = serde_json::from_str(&contents).map_err(|e| BranchyardError::InvalidConfig {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;

        Ok(config)
    }

    /// Overwrite the file with the full config
    pub fn save(&self, config: &Config) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create config directory: {}", parent.display())
                })?;
            }
        }

        let contents = serde_json::to_string_pretty(config).context("Failed to serialize config")?;

        fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write config file: {}", self.path.display()))?;

        tracing::debug!(path = %self.path.display(), "config saved");
        Ok(())
    }
}
