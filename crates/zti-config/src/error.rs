//! Configuration error types.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment extraction or merge error.
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// A required configuration section is not configured.
    #[error("Configuration section '{section}' is not configured (missing: {missing})")]
    NotConfigured { section: String, missing: String },

    /// A configuration field has an invalid value.
    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },

    /// An explicitly requested configuration file does not exist.
    #[error("Configuration file not found: {}", path.display())]
    MissingFile { path: PathBuf },

    /// A file was offered as an inventory source but is not one.
    #[error("Not a ZeroTier inventory source: {} ({reason})", path.display())]
    UnsupportedSource { path: PathBuf, reason: String },
}
