//! Ansible-style inventory source files.
//!
//! Inventory source files are YAML documents named `*zerotier_inventory.yaml`
//! or `*zerotier_inventory.yml`:
//!
//! ```yaml
//! plugin: zerotier
//! zt_api_url: https://api.zerotier.com
//! zt_api_key: <token>
//! zt_network_id: 8056c2e21c000001
//! ```

use std::fs::File;
use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Format, Yaml},
};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::scalar;

/// File name suffixes accepted as inventory sources.
pub const SOURCE_SUFFIXES: [&str; 2] = ["zerotier_inventory.yaml", "zerotier_inventory.yml"];

/// A verified inventory source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventorySource {
    path: PathBuf,
}

/// Controller fields as spelled in an inventory source file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SourceSettings {
    pub zt_api_url: Option<String>,
    #[serde(default, deserialize_with = "scalar::optional_text")]
    pub zt_api_key: Option<String>,
    #[serde(default, deserialize_with = "scalar::optional_network_id")]
    pub zt_network_id: Option<String>,
}

/// The subset of `controller` a source file may set.
#[derive(Debug, Serialize)]
pub(crate) struct ControllerPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    api_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    network_id: Option<String>,
}

impl InventorySource {
    /// Accept `path` only if it is a readable file with a recognized name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnsupportedSource`] if the name does not end in
    /// one of [`SOURCE_SUFFIXES`] or the file cannot be opened.
    pub fn verify(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let unsupported = |reason: String| ConfigError::UnsupportedSource {
            path: path.to_path_buf(),
            reason,
        };

        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| unsupported("path has no file name".into()))?;
        if !SOURCE_SUFFIXES.iter().any(|suffix| name.ends_with(suffix)) {
            return Err(unsupported(format!(
                "file name must end with {}",
                SOURCE_SUFFIXES.join(" or ")
            )));
        }

        if !path.is_file() {
            return Err(unsupported("not a regular file".into()));
        }
        File::open(path).map_err(|e| unsupported(format!("unreadable: {e}")))?;

        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the controller settings from the file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if the YAML cannot be parsed.
    pub fn settings(&self) -> Result<SourceSettings, ConfigError> {
        Figment::from(Yaml::file(&self.path))
            .extract()
            .map_err(ConfigError::from)
    }

    pub(crate) fn controller_patch(&self) -> Result<ControllerPatch, ConfigError> {
        let settings = self.settings()?;
        Ok(ControllerPatch {
            api_url: settings.zt_api_url,
            api_key: settings.zt_api_key,
            network_id: settings.zt_network_id,
        })
    }
}
