//! Configuration handling for the TUI

use crate::state::{Locale, RevalidateMode};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// User configuration for the registration form
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RegistrationConfig {
    /// Interface language
    pub locale: Option<Locale>,
    /// When errors are recomputed once shown
    pub revalidate_mode: Option<RevalidateMode>,
    /// Hide password characters
    pub mask_passwords: Option<bool>,
}

impl RegistrationConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("io", "registration", "registration-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Directory the log file is written to
    pub fn log_dir() -> PathBuf {
        Self::project_dirs()
            .map(|dirs| dirs.data_local_dir().to_path_buf())
            .unwrap_or_else(std::env::temp_dir)
    }

    /// Load configuration from file, falling back to defaults when absent
    pub fn load() -> Result<Self> {
        Self::load_from(Self::config_path())
    }

    fn load_from(path: Option<PathBuf>) -> Result<Self> {
        match path {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn locale(&self) -> Locale {
        self.locale.unwrap_or_default()
    }

    pub fn revalidate_mode(&self) -> RevalidateMode {
        self.revalidate_mode.unwrap_or_default()
    }

    pub fn mask_passwords(&self) -> bool {
        self.mask_passwords.unwrap_or(false)
    }
}
