//! Commerce domain types for the product display page.
//!
//! - **Catalog**: Products, color variants, stock status
//! - **Cart**: Set of variant lines toggled from the product card
//! - **Checkout**: Shipping policy (premium members ship free)
//! - **Reviews**: Customer reviews and the 1-5 rating scale
//!
//! # Example
//!
//! ```rust
//! use pdp_commerce::prelude::*;
//!
//! let variant = ProductVariant::new(2234, "green", "assets/green-socks.png", 5);
//! assert_eq!(variant.stock_status().label(), "Almost sold out!");
//!
//! let mut cart = Cart::new();
//! cart.toggle(variant.id);
//! assert!(cart.contains(variant.id));
//!
//! let shipping = ShippingPolicy::default().quote(false);
//! assert_eq!(shipping.to_string(), "$2.99");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod reviews;

pub use error::CommerceError;
pub use ids::VariantId;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::VariantId;
    pub use crate::money::{Currency, Money};

    pub use crate::cart::{Cart, CartChange};
    pub use crate::catalog::{Product, ProductVariant, StockStatus};
    pub use crate::checkout::{ShippingPolicy, ShippingQuote};
    pub use crate::reviews::{Rating, Review};
}
