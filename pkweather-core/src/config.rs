use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::directory;

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// default_city = "lahore"
/// base_url = "https://api.open-meteo.com/v1"
/// timeout_secs = 10
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Directory key used when no city is given on the command line.
    pub default_city: Option<String>,

    /// Overrides the Open-Meteo base URL.
    pub base_url: Option<String>,

    /// Optional HTTP timeout; when absent the client default applies.
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "pkweather", "pkweather-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Store the default city after normalizing and checking it against the directory.
    pub fn set_default_city(&mut self, name: &str) -> Result<()> {
        let key = directory::normalize(name);
        let city = directory::lookup(&key).ok_or_else(|| {
            anyhow!(
                "Unknown city '{name}'. Supported cities: {}.",
                directory::city_names().collect::<Vec<_>>().join(", ")
            )
        })?;

        self.default_city = Some(city.name.to_string());
        Ok(())
    }

    /// Configured default city, if set.
    pub fn default_city(&self) -> Option<&str> {
        self.default_city.as_deref()
    }
}
