//! Optional per-package configuration.
//!
//! A package directory may carry a `.godoc-readme.toml` holding defaults
//! for the README generation of that directory:
//!
//! ```toml
//! title = "My Project"
//! template = "~/templates/readme.md"
//!
//! [defs]
//! maintainer = "ops@example.com"
//! ```
//!
//! Command-line flags always take precedence over config values.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name looked up in each package directory.
pub const CONFIG_FILE: &str = ".godoc-readme.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Template file; relative paths resolve against the package directory.
    pub template: Option<PathBuf>,
    /// README title, overriding the package name.
    pub title: Option<String>,
    /// Extra template variables.
    #[serde(default)]
    pub defs: BTreeMap<String, String>,
}

impl Config {
    /// Loads `.godoc-readme.toml` from the given package directory.
    /// A missing file is not an error; it yields `None`.
    pub fn load_from_dir(dir: &Path) -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(dir.join(CONFIG_FILE))
    }

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the template path
        if let Some(template) = &config.template {
            config.template = Some(Self::expand_path(template).unwrap_or_else(|| template.clone()));
        }

        Ok(Some(config))
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
