//! Shipping cost rules.

use std::fmt;

use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Flat rate charged to non-premium customers, in cents.
pub const STANDARD_RATE_CENTS: i64 = 299;

/// Shipping cost for one customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShippingQuote {
    /// Premium members ship for free.
    Free,
    /// Flat rate.
    Flat(Money),
}

impl ShippingQuote {
    pub fn is_free(&self) -> bool {
        matches!(self, ShippingQuote::Free)
    }

    /// Label shown after "Shipping:".
    pub fn label(&self) -> String {
        match self {
            ShippingQuote::Free => "Free".to_string(),
            ShippingQuote::Flat(price) => price.display(),
        }
    }
}

impl fmt::Display for ShippingQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Shipping pricing: free for premium members, a flat rate otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingPolicy {
    /// Rate charged when the customer is not premium.
    pub standard_rate: Money,
}

impl ShippingPolicy {
    pub fn new(standard_rate: Money) -> Self {
        Self { standard_rate }
    }

    /// Quote shipping for a premium or standard customer.
    pub fn quote(&self, premium: bool) -> ShippingQuote {
        if premium || self.standard_rate.is_zero() {
            ShippingQuote::Free
        } else {
            ShippingQuote::Flat(self.standard_rate)
        }
    }
}

impl Default for ShippingPolicy {
    fn default() -> Self {
        Self::new(Money::new(STANDARD_RATE_CENTS, Currency::USD))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_premium_ships_free() {
        let quote = ShippingPolicy::default().quote(true);
        assert!(quote.is_free());
        assert_eq!(quote.to_string(), "Free");
    }

    #[test]
    fn test_standard_rate() {
        let quote = ShippingPolicy::default().quote(false);
        assert_eq!(quote, ShippingQuote::Flat(Money::new(299, Currency::USD)));
        assert_eq!(quote.to_string(), "$2.99");
    }

    #[test]
    fn test_custom_rate() {
        let policy = ShippingPolicy::new(Money::new(450, Currency::GBP));
        assert_eq!(policy.quote(false).label(), "\u{00a3}4.50");
    }

    #[test]
    fn test_zero_rate_is_free() {
        let policy = ShippingPolicy::new(Money::zero(Currency::USD));
        assert!(policy.quote(false).is_free());
    }
}
