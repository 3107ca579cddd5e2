//! Customer reviews.

mod review;

pub use review::*;
