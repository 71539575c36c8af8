//! Error types for confscrub.
//!
//! This module defines all error types used throughout the confscrub crate.
//! Every per-file error carries the path of the file it happened on, so a
//! failed run always says which artifact was left unredacted.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for confscrub operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Selection Errors ===
    /// A glob pattern could not be compiled.
    #[error("invalid glob pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The offending pattern, as configured.
        pattern: String,
        /// The underlying error.
        #[source]
        source: globset::Error,
    },

    /// Walking the selection root failed.
    #[error("failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),

    // === Per-file Errors ===
    /// A candidate file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// Path of the candidate file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A candidate file could not be parsed as its nominal format.
    #[error("failed to parse {path}: {source}")]
    Parse {
        /// Path of the candidate file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: FormatError,
    },

    /// A redacted document could not be serialized.
    #[error("failed to serialize {path}: {source}")]
    Serialize {
        /// Path of the candidate file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: FormatError,
    },

    /// A redacted document could not be written back.
    #[error("failed to write {path}: {source}")]
    Write {
        /// Path of the candidate file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },
}

/// Errors raised by the document format libraries.
#[derive(Error, Debug)]
pub enum FormatError {
    /// Properties file could not be read or written.
    #[error("properties: {0}")]
    Properties(#[from] java_properties::PropertiesError),

    /// YAML could not be parsed or emitted.
    #[error("yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON could not be parsed or emitted.
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    /// XML could not be parsed.
    #[error("xml: {0}")]
    XmlParse(#[from] xmltree::ParseError),

    /// XML could not be emitted.
    #[error("xml: {0}")]
    XmlWrite(#[from] xmltree::Error),
}

/// A specialized Result type for confscrub operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a configuration validation error.
    #[must_use]
    pub fn config_validation(message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            message: message.into(),
        }
    }

    /// The file this error happened on, if it is a per-file error.
    #[must_use]
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::Read { path, .. }
            | Self::Parse { path, .. }
            | Self::Serialize { path, .. }
            | Self::Write { path, .. } => Some(path),
            _ => None,
        }
    }

    /// Check if this error came from an invalid selection pattern.
    #[must_use]
    pub fn is_selection_error(&self) -> bool {
        matches!(self, Self::InvalidPattern { .. })
    }
}
