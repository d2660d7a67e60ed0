//! Configuration management for vehicle-showcase
//!
//! Config stored at: ~/.config/vehicle-showcase/config.json

use serde::{Deserialize, Serialize};
use showcase_advisor::AdvisorConfig;
use showcase_types::{ConfigError, OutputFormat, Result};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "vehicle-showcase";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Command line used to reach the recommendation model (e.g. "gemini -p")
    #[serde(default)]
    pub advisor_command: Option<String>,

    /// Model name override (optional)
    #[serde(default)]
    pub model: Option<String>,

    /// Directory for the persisted comparison list
    #[serde(default)]
    pub storage_dir: Option<PathBuf>,

    /// Catalog file (.toml or .csv) replacing the built-in catalog
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    /// Default output format (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Seconds a notice stays visible
    #[serde(default = "default_toast_dismiss_secs")]
    pub toast_dismiss_secs: u64,
}

fn default_toast_dismiss_secs() -> u64 {
    5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            advisor_command: None,
            model: None,
            storage_dir: None,
            catalog_path: None,
            output_format: OutputFormat::default(),
            toast_dismiss_secs: default_toast_dismiss_secs(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NotFound)?.join(APP_DIR);
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Directory holding the comparison list
    pub fn storage_dir(&self) -> Result<PathBuf> {
        if let Some(ref dir) = self.storage_dir {
            return Ok(dir.clone());
        }

        let data_dir = dirs::data_dir().ok_or(ConfigError::NotFound)?.join(APP_DIR);
        Ok(data_dir)
    }

    pub fn advisor(&self) -> AdvisorConfig {
        AdvisorConfig::default()
            .with_command(self.advisor_command.clone())
            .with_model(self.model.clone())
    }

    pub fn toast_dismiss_after(&self) -> chrono::Duration {
        // capped at a day
        chrono::Duration::seconds(self.toast_dismiss_secs.min(86_400) as i64)
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config =
                serde_json::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Vehicle Showcase Configuration")?;
        writeln!(f, "==============================")?;
        writeln!(f)?;
        writeln!(
            f,
            "Advisor command: {}",
            self.advisor_command.as_deref().unwrap_or("(not set)")
        )?;
        writeln!(
            f,
            "Model:           {}",
            self.model.as_deref().unwrap_or("(default)")
        )?;
        writeln!(
            f,
            "Catalog:         {}",
            self.catalog_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(built-in)".to_string())
        )?;
        writeln!(
            f,
            "Storage dir:     {}",
            self.storage_dir()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| "(error)".to_string())
        )?;
        writeln!(f, "Output format:   {}", self.output_format)?;
        writeln!(f, "Toast dismiss:   {}s", self.toast_dismiss_secs)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:     {}", path.display())?;
        }

        Ok(())
    }
}
