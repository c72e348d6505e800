//! Error types for the generator
//!
//! Malformed declarations are not errors: they become
//! [`Diagnostic`](crate::Diagnostic)s. These errors cover the generator's own
//! setup.

use thiserror::Error;

/// Result type alias for generator setup
pub type GeneratorResult<T> = Result<T, GeneratorError>;

/// Error type for generator setup
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    /// Runtime namespace is not a dotted identifier path
    #[error("invalid runtime namespace: '{0}'")]
    InvalidRuntimeNamespace(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    ConfigError(String),
}
