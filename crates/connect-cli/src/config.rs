//! Configuration management for the CLI
//!
//! This module handles loading configuration from:
//! - Default values
//! - Configuration files (TOML/YAML/JSON)
//! - Command-line arguments

use crate::error::{Error, Result};
use connect_schemas::ValidationConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Which top-level keys are validated as service groups
    pub validation: ValidationConfig,

    /// Output settings
    pub output: OutputConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format (human, json, json-pretty, yaml)
    pub format: String,

    /// Use colored output by default
    pub color: bool,

    /// Show progress indicators
    pub progress: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,

    /// Log format (compact, full, json)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "human".to_string(),
            color: true,
            progress: true,
        }
    }
}

/// Serialization format of a config file, chosen by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileFormat {
    Toml,
    Yaml,
    Json,
}

impl FileFormat {
    fn of(path: &Path) -> Self {
        match path.extension().and_then(|s| s.to_str()) {
            Some("toml") => Self::Toml,
            Some("yaml") | Some("yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path)?;

        let parse_error = |e: &dyn std::fmt::Display| {
            Error::config(format!("Failed to parse {}: {}", path.display(), e))
        };

        let config = match FileFormat::of(path) {
            FileFormat::Toml => toml::from_str(&content).map_err(|e| parse_error(&e))?,
            FileFormat::Yaml => serde_yaml::from_str(&content).map_err(|e| parse_error(&e))?,
            FileFormat::Json => serde_json::from_str(&content).map_err(|e| parse_error(&e))?,
        };

        Ok(config)
    }

    /// Load configuration from the first default location that exists
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => {
                tracing::debug!(path = %path.display(), "Loading configuration file");
                Self::from_file(&path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file or default locations
    pub fn load_with_file(file: Option<&Path>) -> Result<Self> {
        if let Some(path) = file {
            Self::from_file(path)
        } else {
            Self::load()
        }
    }

    /// First existing file among the default locations
    pub fn find_config_file() -> Option<PathBuf> {
        Self::default_config_paths().into_iter().find(|p| p.exists())
    }

    /// Get default configuration file paths to check
    fn default_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            // Current directory
            PathBuf::from(".wc-connect.toml"),
            PathBuf::from(".wc-connect.yaml"),
            PathBuf::from(".wc-connect.json"),
        ];

        // User config directory
        if let Some(config_dir) = dirs::config_dir() {
            let app_dir = config_dir.join("wc-connect");
            paths.push(app_dir.join("config.toml"));
            paths.push(app_dir.join("config.yaml"));
            paths.push(app_dir.join("config.json"));
        }

        paths
    }

    /// Reject values that would only fail later, at use
    pub fn validate(&self) -> Result<()> {
        if crate::cli::OutputFormat::from_config_name(&self.output.format).is_none() {
            return Err(Error::config(format!(
                "Unknown output format '{}'",
                self.output.format
            )));
        }

        if !self.validation.all_groups && self.validation.groups.is_empty() {
            return Err(Error::config(
                "validation.groups is empty; list at least one group or set all_groups",
            ));
        }

        Ok(())
    }

    /// Render the configuration in the given file format
    pub fn render(&self, format: crate::cli::ConfigFormat) -> Result<String> {
        use crate::cli::ConfigFormat;

        match format {
            ConfigFormat::Toml => toml::to_string_pretty(self)
                .map_err(|e| Error::config(format!("Failed to serialize as TOML: {}", e))),
            ConfigFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            ConfigFormat::Yaml => Ok(serde_yaml::to_string(self)?),
        }
    }

    /// Look up a single value by dotted key
    pub fn get_value(&self, key: &str) -> Result<String> {
        match key {
            "validation.groups" => Ok(self.validation.groups.join(",")),
            "validation.all_groups" => Ok(self.validation.all_groups.to_string()),
            "output.format" => Ok(self.output.format.clone()),
            "output.color" => Ok(self.output.color.to_string()),
            "output.progress" => Ok(self.output.progress.to_string()),
            "logging.level" => Ok(self.logging.level.clone().unwrap_or_default()),
            "logging.format" => Ok(self.logging.format.clone().unwrap_or_default()),
            _ => Err(Error::config(format!("Unknown configuration key: {}", key))),
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = match FileFormat::of(path) {
            FileFormat::Toml => self.render(crate::cli::ConfigFormat::Toml)?,
            FileFormat::Yaml => self.render(crate::cli::ConfigFormat::Yaml)?,
            FileFormat::Json => self.render(crate::cli::ConfigFormat::Json)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}
