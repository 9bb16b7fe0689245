//! Error types for typekit-core.

use thiserror::Error;

/// Errors raised by the primitive vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The name is not one of the canonical primitive type names.
    #[error("unknown primitive type `{name}`")]
    UnknownType { name: String },
}
