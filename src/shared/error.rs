//! Error handling for the registry generator
//!
//! This module defines the error type surfaced when a table entry fails
//! validation before rendering.

use thiserror::Error;

/// Registry generator error type
#[derive(Error, Debug, Clone)]
pub enum RegistryError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid token '{symbol}': {reason}")]
    InvalidToken { symbol: String, reason: String },
}

impl RegistryError {
    /// Create a field-level validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a token-level error naming the offending entry
    pub fn invalid_token(symbol: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidToken {
            symbol: symbol.into(),
            reason: reason.into(),
        }
    }

    /// Wrap a field-level error with the symbol of the entry it came from.
    pub fn for_token(self, symbol: &str) -> Self {
        match self {
            Self::Validation(reason) => Self::invalid_token(symbol, reason),
            other => other,
        }
    }
}
