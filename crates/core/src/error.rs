//! Error model.

use thiserror::Error;

/// Result type used across the pantry crates.
pub type PantryResult<T> = Result<T, PantryError>;

/// Pantry-level error.
///
/// The documented store operations never fail; these only surface at the edges
/// (parsing keys and config values, serializing templates).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PantryError {
    /// A value failed validation (e.g. malformed key text).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A value could not be serialized.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl PantryError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }
}
