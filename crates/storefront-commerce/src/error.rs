//! Commerce error types.
//!
//! The query engine and the total calculator never fail; these errors cover
//! the edges where untrusted input enters the core.

use thiserror::Error;

/// Errors that can occur while building storefront inputs.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product failed validation.
    #[error("Invalid product {id}: {reason}")]
    InvalidProduct { id: String, reason: String },

    /// Two products share one identifier.
    #[error("Duplicate product id: {0}")]
    DuplicateProduct(String),

    /// Price bounds are crossed or negative.
    #[error("Invalid price range: min {min} is greater than max {max} or negative")]
    InvalidPriceRange { min: String, max: String },

    /// Unknown sort key string.
    #[error("Unknown sort key: {0}")]
    UnknownSortKey(String),

    /// Unknown currency code.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
