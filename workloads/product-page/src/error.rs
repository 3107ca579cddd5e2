//! Page error types.

use pdp_commerce::CommerceError;
use pdp_events::BusError;
use thiserror::Error;

/// Errors raised by page components.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PageError {
    /// Variant index past the end of the product's variants.
    #[error("Variant index {index} out of range (product has {len} variants)")]
    VariantOutOfRange { index: usize, len: usize },

    /// Catalog or review data was rejected.
    #[error(transparent)]
    Commerce(#[from] CommerceError),

    /// Event delivery failed.
    #[error(transparent)]
    Bus(#[from] BusError),
}
