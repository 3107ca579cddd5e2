//! Commerce error types.

use thiserror::Error;

use crate::ids::VariantId;

/// Errors that can occur in catalog, cart and review operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// Variant not found.
    #[error("Variant not found: {0}")]
    VariantNotFound(VariantId),

    /// Two variants share an identifier.
    #[error("Duplicate variant id: {0}")]
    DuplicateVariant(VariantId),

    /// Rating outside the 1-5 scale.
    #[error("Invalid rating: {0} (expected 1-5)")]
    InvalidRating(u8),

    /// Unsupported currency code.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(String),
}
