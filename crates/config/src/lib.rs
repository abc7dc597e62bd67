#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Configuration management for unsymlink
//!
//! This crate handles loading and merging configuration from:
//! - Default values (hard-coded)
//! - Configuration file (~/.config/unsymlink/config.toml)
//! - Environment variables
//! - CLI flags

pub mod constants;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use unsymlink_errors::{ConfigError, Result};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub classify: ClassifyConfig,

    #[serde(default)]
    pub paths: PathConfig,
}

/// Inputs to the lib64 classification rules
///
/// Rule order is fixed: extension, then versioned marker, then exact name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClassifyConfig {
    #[serde(default = "default_lib64_extensions")]
    pub lib64_extensions: Vec<String>,
    #[serde(default = "default_versioned_marker")]
    pub versioned_marker: String,
    #[serde(default = "default_lib64_names")]
    pub lib64_names: Vec<String>,
}

/// Path configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PathConfig {
    pub logs_dir: Option<PathBuf>,
}

impl Default for ClassifyConfig {
    fn default() -> Self {
        Self {
            lib64_extensions: default_lib64_extensions(),
            versioned_marker: default_versioned_marker(),
            lib64_names: default_lib64_names(),
        }
    }
}

// Default value functions for serde
fn default_lib64_extensions() -> Vec<String> {
    constants::LIB64_EXTENSIONS
        .iter()
        .map(ToString::to_string)
        .collect()
}

fn default_versioned_marker() -> String {
    constants::VERSIONED_MARKER.to_string()
}

fn default_lib64_names() -> Vec<String> {
    constants::LIB64_NAMES.iter().map(ToString::to_string).collect()
}

impl Config {
    /// Get the default config file path
    ///
    /// # Errors
    ///
    /// Returns an error if the system config directory cannot be determined.
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| ConfigError::NotFound {
            path: "config directory".to_string(),
        })?;
        Ok(config_dir.join("unsymlink").join("config.toml"))
    }

    /// Load configuration from file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML,
    /// or holds values rejected by [`Config::validate`].
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|_| ConfigError::NotFound {
            path: path.display().to_string(),
        })?;

        let config: Self = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with fallback to defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file exists but cannot be read
    /// or contains invalid TOML syntax.
    pub fn load() -> Result<Self> {
        // No config directory on this system means no user config to load
        let Ok(config_path) = Self::default_path() else {
            return Ok(Self::default());
        };

        if config_path.exists() {
            Self::load_from_file(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from an optional path or use default
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or parsed
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(config_path) => Self::load_from_file(config_path),
            None => Self::load(),
        }
    }

    /// Merge with environment variables
    ///
    /// List variables are comma-separated and replace the configured list.
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values.
    pub fn merge_env(&mut self) -> Result<()> {
        if let Ok(names) = std::env::var(constants::ENV_LIB64_NAMES) {
            let names = split_list(&names);
            for name in &names {
                check_name(constants::ENV_LIB64_NAMES, name)?;
            }
            self.classify.lib64_names = names;
        }

        if let Ok(extensions) = std::env::var(constants::ENV_LIB64_EXTENSIONS) {
            let extensions = split_list(&extensions);
            for ext in &extensions {
                check_extension(constants::ENV_LIB64_EXTENSIONS, ext)?;
            }
            self.classify.lib64_extensions = extensions;
        }

        Ok(())
    }

    /// Append names to the exact-name rule, skipping ones already present
    ///
    /// # Errors
    ///
    /// Returns an error if a name is empty or contains `/`.
    pub fn add_lib64_names<I, S>(&mut self, names: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            let name = name.into();
            check_name("lib64_name", &name)?;
            if !self.classify.lib64_names.contains(&name) {
                self.classify.lib64_names.push(name);
            }
        }
        Ok(())
    }

    /// Check every rule input
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        for ext in &self.classify.lib64_extensions {
            check_extension("classify.lib64_extensions", ext)?;
        }

        let marker = &self.classify.versioned_marker;
        if marker.is_empty() || marker.contains('/') {
            return Err(ConfigError::InvalidValue {
                field: "classify.versioned_marker".to_string(),
                value: marker.clone(),
            }
            .into());
        }

        for name in &self.classify.lib64_names {
            check_name("classify.lib64_names", name)?;
        }

        Ok(())
    }

    /// Get the logs directory (with default)
    #[must_use]
    pub fn logs_dir(&self) -> PathBuf {
        self.paths
            .logs_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(constants::LOGS_DIR))
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(ToString::to_string)
        .collect()
}

fn check_extension(field: &str, ext: &str) -> Result<()> {
    if ext.len() < 2 || !ext.starts_with('.') || ext.contains('/') {
        return Err(ConfigError::InvalidValue {
            field: field.to_string(),
            value: ext.to_string(),
        }
        .into());
    }
    Ok(())
}

fn check_name(field: &str, name: &str) -> Result<()> {
    if name.is_empty() || name.contains('/') {
        return Err(ConfigError::InvalidValue {
            field: field.to_string(),
            value: name.to_string(),
        }
        .into());
    }
    Ok(())
}
