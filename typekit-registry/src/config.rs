//! Registry capacity configuration.
//!
//! ```yaml
//! # typekit.yaml: every field is optional and defaults to 64
//! adapters: 16
//! attributes: 128
//! converters: 64
//! introspection: 32
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::registry::DEFAULT_CAPACITY;

/// Per-kind registry capacities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistryConfig {
    pub adapters: usize,
    pub attributes: usize,
    pub converters: usize,
    pub introspection: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self::uniform(DEFAULT_CAPACITY)
    }
}

impl RegistryConfig {
    /// The same capacity for every kind.
    pub fn uniform(capacity: usize) -> Self {
        Self {
            adapters: capacity,
            attributes: capacity,
            converters: capacity,
            introspection: capacity,
        }
    }

    /// Parse a YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a YAML config file.
    ///
    /// Returns `ConfigError::NotFound` if absent,
    /// `ConfigError::Parse` (with path + line context) if malformed YAML.
    pub fn load_at(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound { path: path.to_path_buf() });
        }
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
