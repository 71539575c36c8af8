//! Configuration management for confscrub.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::redact::{Placeholder, TargetKeys};
use crate::select::Selector;

/// Default project configuration file name.
const PROJECT_CONFIG_FILE_NAME: &str = "confscrub.toml";

/// Default user configuration file name.
const USER_CONFIG_FILE_NAME: &str = "config.toml";

/// Configuration directory name under the user config dir.
const CONFIG_DIR_NAME: &str = "confscrub";

/// Environment variable prefix.
const ENV_PREFIX: &str = "CONFSCRUB_";

/// Default directory of build output to scan.
const DEFAULT_ROOT: &str = "target/classes";

/// Include patterns used when none are configured.
pub const DEFAULT_INCLUDES: [&str; 5] = [
    "**/*.properties",
    "**/*.yml",
    "**/*.yaml",
    "**/*.json",
    "**/*.xml",
];

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `CONFSCRUB_`)
/// 2. Project TOML file, `./confscrub.toml` unless another path is given
/// 3. User TOML file at `~/.config/confscrub/config.toml`
/// 4. Default values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory tree to redact.
    pub root: PathBuf,
    /// Dotted key paths whose values are replaced.
    pub keys: Vec<String>,
    /// Glob patterns of files to consider. Empty means the default set.
    pub includes: Vec<String>,
    /// Glob patterns of files to leave alone.
    pub excludes: Vec<String>,
    /// Text written before the placeholder marker.
    pub prefix: String,
    /// Text written after the placeholder marker.
    pub suffix: String,
}

impl Default for Config {
    fn default() -> Self {
        let placeholder = Placeholder::default();
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            keys: Vec::new(),
            includes: Vec::new(),
            excludes: Vec::new(),
            prefix: placeholder.prefix,
            suffix: placeholder.suffix,
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom project config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading, parsing or validation fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config = Self::extract_from(config_path)?;
        config.validate()?;
        Ok(config)
    }

    /// Merge all sources without validating.
    ///
    /// Callers that layer more settings on top (command-line flags) validate
    /// the final result themselves.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or parsed.
    pub fn extract_from(config_path: Option<PathBuf>) -> Result<Self> {
        let project_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(Self::user_config_path()))
            .merge(Toml::file(&project_file))
            .merge(Env::prefixed(ENV_PREFIX));

        Ok(figment.extract()?)
    }

    /// Get the default project configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        PathBuf::from(PROJECT_CONFIG_FILE_NAME)
    }

    /// Get the user-wide configuration file path.
    #[must_use]
    pub fn user_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(USER_CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a key path is malformed or a glob pattern does not
    /// compile.
    pub fn validate(&self) -> Result<()> {
        for key in &self.keys {
            if key.trim().is_empty() {
                return Err(Error::config_validation("key paths must not be empty"));
            }
            if key.split('.').any(str::is_empty) {
                return Err(Error::config_validation(format!(
                    "key path '{key}' has an empty segment"
                )));
            }
        }

        self.selector()
            .map_err(|e| Error::config_validation(e.to_string()))?;

        Ok(())
    }

    /// Include patterns, falling back to [`DEFAULT_INCLUDES`] when none are set.
    #[must_use]
    pub fn effective_includes(&self) -> Vec<String> {
        if self.includes.is_empty() {
            DEFAULT_INCLUDES.iter().map(ToString::to_string).collect()
        } else {
            self.includes.clone()
        }
    }

    /// Compile the file selector.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`] if a pattern does not compile.
    pub fn selector(&self) -> Result<Selector> {
        Selector::new(self.effective_includes(), &self.excludes)
    }

    /// The set of key paths to redact.
    #[must_use]
    pub fn target_keys(&self) -> TargetKeys {
        TargetKeys::new(self.keys.iter().cloned())
    }

    /// The replacement placeholder.
    #[must_use]
    pub fn placeholder(&self) -> Placeholder {
        Placeholder::new(self.prefix.clone(), self.suffix.clone())
    }
}
