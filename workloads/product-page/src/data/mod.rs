//! Catalog data for the page.

mod catalog;

pub use catalog::*;
