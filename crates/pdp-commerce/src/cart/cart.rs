//! Cart of variant lines.

use std::collections::BTreeSet;

use crate::ids::VariantId;
use serde::{Deserialize, Serialize};

/// What a toggle did to the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CartChange {
    Added(VariantId),
    Removed(VariantId),
}

/// A shopping cart holding each variant at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: BTreeSet<VariantId>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove `id` if present, insert it otherwise.
    pub fn toggle(&mut self, id: VariantId) -> CartChange {
        if self.lines.remove(&id) {
            CartChange::Removed(id)
        } else {
            self.lines.insert(id);
            CartChange::Added(id)
        }
    }

    /// Whether the variant is in the cart.
    pub fn contains(&self, id: VariantId) -> bool {
        self.lines.contains(&id)
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines in ascending id order.
    pub fn lines(&self) -> impl Iterator<Item = VariantId> + '_ {
        self.lines.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut cart = Cart::new();
        let id = VariantId::new(2234);

        assert_eq!(cart.toggle(id), CartChange::Added(id));
        assert!(cart.contains(id));
        assert_eq!(cart.len(), 1);

        assert_eq!(cart.toggle(id), CartChange::Removed(id));
        assert!(!cart.contains(id));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_double_toggle_restores_original() {
        let mut cart = Cart::new();
        cart.toggle(VariantId::new(1));
        cart.toggle(VariantId::new(2));
        let before = cart.clone();

        cart.toggle(VariantId::new(3));
        cart.toggle(VariantId::new(3));
        assert_eq!(cart, before);

        cart.toggle(VariantId::new(1));
        cart.toggle(VariantId::new(1));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_lines_never_duplicate() {
        let mut cart = Cart::new();
        cart.toggle(VariantId::new(5));
        cart.toggle(VariantId::new(4));
        let lines: Vec<u32> = cart.lines().map(VariantId::get).collect();
        assert_eq!(lines, vec![4, 5]);
    }
}
