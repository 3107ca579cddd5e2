//! Checkout-side pricing shown on the product card.

mod shipping;

pub use shipping::*;
