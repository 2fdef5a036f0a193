//! Cross-cutting error types for the zoo manager.
//!
//! This module defines errors that can originate from the engine or any crate
//! that resolves entities by id. Storage and configuration errors are defined
//! in their respective crates and converge into `anyhow` in `zoo-cli`.

use thiserror::Error;

/// Errors that can be raised by any zoo crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Data failed validation (duplicate ids, malformed values).
    #[error("Validation error: {0}")]
    Validation(String),
}

impl CoreError {
    /// Build a [`CoreError::NotFound`] from any displayable id.
    #[must_use]
    pub fn not_found(entity_type: &str, id: impl std::fmt::Display) -> Self {
        Self::NotFound {
            entity_type: entity_type.to_string(),
            id: id.to_string(),
        }
    }
}
