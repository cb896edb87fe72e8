//! Error handling for the chain processing core
//!
//! Classification of bad input is part of the normal result shapes in this
//! crate; errors here are reserved for registry construction misuse.

use thiserror::Error;

/// Chain core error type
#[derive(Error, Debug, Clone)]
pub enum ChainError {
    #[error("Registry error: {0}")]
    Registry(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ChainError {
    /// Create a registry error
    pub fn registry(message: impl Into<String>) -> Self {
        Self::Registry(message.into())
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}
