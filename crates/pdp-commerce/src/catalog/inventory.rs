//! Stock status derived from a variant's on-hand quantity.

use serde::{Deserialize, Serialize};

/// Quantities above this are plainly "In Stock".
pub const LOW_STOCK_THRESHOLD: u32 = 10;

/// Availability bucket shown on the product card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    /// More than [`LOW_STOCK_THRESHOLD`] units.
    InStock,
    /// Between 1 and [`LOW_STOCK_THRESHOLD`] units.
    AlmostSoldOut,
    /// Nothing left.
    OutOfStock,
}

impl StockStatus {
    /// Classify an on-hand quantity.
    pub fn from_quantity(quantity: u32) -> Self {
        if quantity > LOW_STOCK_THRESHOLD {
            StockStatus::InStock
        } else if quantity > 0 {
            StockStatus::AlmostSoldOut
        } else {
            StockStatus::OutOfStock
        }
    }

    /// Customer-facing label.
    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::InStock => "In Stock",
            StockStatus::AlmostSoldOut => "Almost sold out!",
            StockStatus::OutOfStock => "Out of Stock",
        }
    }

    /// CSS class for the stock line.
    pub fn css_class(&self) -> &'static str {
        match self {
            StockStatus::InStock => "stock-available",
            StockStatus::AlmostSoldOut => "stock-low",
            StockStatus::OutOfStock => "stock-out line-through",
        }
    }

    /// Whether the variant can be bought at all.
    pub fn is_available(&self) -> bool {
        !matches!(self, StockStatus::OutOfStock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_labels() {
        assert_eq!(StockStatus::from_quantity(15).label(), "In Stock");
        assert_eq!(StockStatus::from_quantity(5).label(), "Almost sold out!");
        assert_eq!(StockStatus::from_quantity(0).label(), "Out of Stock");
    }

    #[test]
    fn test_threshold_boundaries() {
        assert_eq!(StockStatus::from_quantity(11), StockStatus::InStock);
        assert_eq!(StockStatus::from_quantity(10), StockStatus::AlmostSoldOut);
        assert_eq!(StockStatus::from_quantity(1), StockStatus::AlmostSoldOut);
        assert_eq!(StockStatus::from_quantity(0), StockStatus::OutOfStock);
    }

    #[test]
    fn test_availability() {
        assert!(StockStatus::InStock.is_available());
        assert!(StockStatus::AlmostSoldOut.is_available());
        assert!(!StockStatus::OutOfStock.is_available());
        assert!(StockStatus::OutOfStock.css_class().contains("line-through"));
    }
}
