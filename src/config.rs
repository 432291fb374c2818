//! Configuration handling for the TUI

use crate::state::{default_entries, Entry};
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TuiConfig {
    /// Names the home screen starts with (replaces the built-in list)
    pub initial_names: Option<Vec<String>>,
    /// Show key hints in the status bar
    pub show_hints: Option<bool>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "namelist", "namelist-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the platform config directory
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`, or defaults if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: TuiConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration, logging and ignoring any failure
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|err| {
            tracing::warn!("ignoring unreadable config: {err:#}");
            Self::default()
        })
    }

    /// Entries the home screen starts with. Blank names are dropped.
    pub fn initial_entries(&self) -> Vec<Entry> {
        match &self.initial_names {
            Some(names) => names
                .iter()
                .map(|name| name.trim())
                .filter(|name| !name.is_empty())
                .map(Entry::new)
                .collect(),
            None => default_entries(),
        }
    }

    pub fn show_hints(&self) -> bool {
        self.show_hints.unwrap_or(true)
    }
}
