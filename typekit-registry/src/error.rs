//! Error types for typekit-registry.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Which of the four registries an error or log event concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegistryKind {
    Adapter,
    Attribute,
    Converter,
    Introspection,
}

impl fmt::Display for RegistryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryKind::Adapter => write!(f, "adapter"),
            RegistryKind::Attribute => write!(f, "attribute table"),
            RegistryKind::Converter => write!(f, "converter"),
            RegistryKind::Introspection => write!(f, "introspection"),
        }
    }
}

/// All errors that can arise from registration.
///
/// Lookups never fail; absence is reported as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Malformed entry (empty key, empty converter endpoint, ...).
    #[error("invalid {kind} entry: {reason}")]
    InvalidEntry { kind: RegistryKind, reason: &'static str },

    /// A new key was offered to a registry already holding `capacity` entries.
    #[error("{kind} registry is full (capacity {capacity}); cannot register `{key}`")]
    RegistryFull {
        kind: RegistryKind,
        capacity: usize,
        key: String,
    },

    /// `global::init` was called after the process-wide registries were created.
    #[error("process-wide registries are already initialized")]
    AlreadyInitialized,
}

/// Errors from loading a [`RegistryConfig`](crate::config::RegistryConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Underlying I/O failure.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML parse error; includes file path and line context from serde_yaml.
    #[error("failed to parse registry config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// YAML parse error on an in-memory document.
    #[error("failed to parse registry config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The config file did not exist at the expected path.
    #[error("registry config not found at {path}")]
    NotFound { path: PathBuf },
}

/// Errors returned by converter payloads.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// The input value's kind is not one the converter accepts.
    #[error("converter {from} -> {to} cannot accept a `{found}` value")]
    UnsupportedInput {
        from: String,
        to: String,
        found: &'static str,
    },

    /// The input does not fit the target type's range.
    #[error("value {value} is out of range for `{target}`")]
    OutOfRange { value: i128, target: String },

    /// Any other payload-defined failure.
    #[error("conversion failed: {0}")]
    Failed(String),
}
