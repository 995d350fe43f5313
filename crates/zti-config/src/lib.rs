//! # zti-config
//!
//! Layered configuration loading for zti using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`ZTI_*` prefix, `__` as separator)
//! 2. An Ansible-style inventory source file (`zerotier_inventory.yml`)
//! 3. An explicit TOML file passed with `--config`
//! 4. Project-level `.zti/config.toml`
//! 5. User-level `~/.config/zti/config.toml`
//! 6. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `ZTI_CONTROLLER__API_KEY` -> `controller.api_key`,
//! `ZTI_INVENTORY__UNGROUPED_GROUP` -> `inventory.ungrouped_group`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use zti_config::{ConfigSources, ZtiConfig};
//!
//! let config = ZtiConfig::load_from(&ConfigSources::default()).expect("config");
//! if config.controller.is_configured() {
//!     println!("network: {}", config.controller.network_id);
//! }
//! ```

mod controller;
mod error;
mod inventory;
mod scalar;
mod source;

pub use controller::ControllerConfig;
pub use error::ConfigError;
pub use inventory::InventoryConfig;
pub use source::{InventorySource, SOURCE_SUFFIXES, SourceSettings};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable prefix for overrides.
pub const ENV_PREFIX: &str = "ZTI_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ZtiConfig {
    #[serde(default)]
    pub controller: ControllerConfig,
    #[serde(default)]
    pub inventory: InventoryConfig,
}

/// Optional files layered on top of the discovered config files.
#[derive(Debug, Clone, Default)]
pub struct ConfigSources {
    /// TOML file given explicitly; must exist.
    pub config_file: Option<PathBuf>,
    /// Ansible-style inventory source; must pass [`InventorySource::verify`].
    pub inventory_source: Option<PathBuf>,
}

impl ZtiConfig {
    /// Load configuration from discovered TOML files and the environment.
    ///
    /// Does NOT read `.env` files; the binary does that before loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&ConfigSources::default())
    }

    /// Load configuration with extra explicit sources.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if an explicit file is missing or invalid, or
    /// a source cannot be parsed.
    pub fn load_from(sources: &ConfigSources) -> Result<Self, ConfigError> {
        Self::figment(sources)?
            .extract()
            .map_err(ConfigError::from)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or add providers on top.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingFile`] or
    /// [`ConfigError::UnsupportedSource`] for bad explicit files.
    pub fn figment(sources: &ConfigSources) -> Result<Figment, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".zti/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Explicit config file
        if let Some(path) = &sources.config_file {
            if !path.is_file() {
                return Err(ConfigError::MissingFile { path: path.clone() });
            }
            figment = figment.merge(Toml::file(path));
        }

        // Layer 4: Inventory source file
        if let Some(path) = &sources.inventory_source {
            let source = InventorySource::verify(path)?;
            figment = figment.merge(Serialized::default("controller", source.controller_patch()?));
        }

        // Layer 5: Environment variables (highest priority)
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        Ok(figment)
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("zti").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = ZtiConfig::default();
        assert!(!config.controller.is_configured());
        assert_eq!(config.controller.timeout_secs, 10);
        assert!(config.inventory.catch_all_group().is_none());
    }

    #[test]
    fn missing_explicit_config_file_is_an_error() {
        let sources = ConfigSources {
            config_file: Some(PathBuf::from("/definitely/not/here/zti.toml")),
            ..ConfigSources::default()
        };
        assert!(matches!(
            ZtiConfig::figment(&sources),
            Err(ConfigError::MissingFile { .. })
        ));
    }
}
