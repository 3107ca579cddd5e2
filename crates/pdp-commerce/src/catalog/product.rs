//! Product and variant types.

use std::collections::HashSet;

use crate::catalog::StockStatus;
use crate::error::CommerceError;
use crate::ids::VariantId;
use serde::{Deserialize, Serialize};

/// A purchasable color configuration of a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductVariant {
    /// Unique variant identifier.
    pub id: VariantId,
    /// Color name, also used as the swatch background.
    pub color: String,
    /// Path of the variant's product image.
    pub image: String,
    /// Units on hand.
    pub quantity: u32,
    /// Whether the variant is currently discounted.
    #[serde(default)]
    pub on_sale: bool,
}

impl ProductVariant {
    /// Create a variant that is not on sale.
    pub fn new(id: u32, color: impl Into<String>, image: impl Into<String>, quantity: u32) -> Self {
        Self {
            id: VariantId::new(id),
            color: color.into(),
            image: image.into(),
            quantity,
            on_sale: false,
        }
    }

    /// Mark the variant as on sale.
    pub fn on_sale(mut self, on_sale: bool) -> Self {
        self.on_sale = on_sale;
        self
    }

    /// Stock bucket for this variant's quantity.
    pub fn stock_status(&self) -> StockStatus {
        StockStatus::from_quantity(self.quantity)
    }
}

/// A product with its color variants.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    /// Brand name.
    pub brand: String,
    /// Product name.
    pub name: String,
    /// Material and fit notes shown as a bullet list.
    #[serde(default)]
    pub details: Vec<String>,
    /// Available sizes.
    #[serde(default)]
    pub sizes: Vec<String>,
    /// Color variants; the first is selected initially.
    pub variants: Vec<ProductVariant>,
}

impl Product {
    /// Create a product with no details, sizes or variants.
    pub fn new(brand: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            brand: brand.into(),
            name: name.into(),
            details: Vec::new(),
            sizes: Vec::new(),
            variants: Vec::new(),
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.details.push(detail.into());
        self
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.sizes.push(size.into());
        self
    }

    pub fn with_variant(mut self, variant: ProductVariant) -> Self {
        self.variants.push(variant);
        self
    }

    /// Display title: brand followed by product name.
    pub fn title(&self) -> String {
        format!("{} {}", self.brand, self.name)
    }

    /// Variant at `index`, if any.
    pub fn variant(&self, index: usize) -> Option<&ProductVariant> {
        self.variants.get(index)
    }

    /// Look up a variant by id.
    pub fn find_variant(&self, id: VariantId) -> Result<&ProductVariant, CommerceError> {
        self.variants
            .iter()
            .find(|v| v.id == id)
            .ok_or(CommerceError::VariantNotFound(id))
    }

    /// Check the product can back a product card.
    ///
    /// A product needs at least one variant and unique variant ids.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.name.trim().is_empty() {
            return Err(CommerceError::Validation("product name is required".to_string()));
        }
        if self.variants.is_empty() {
            return Err(CommerceError::Validation(format!(
                "product '{}' has no variants",
                self.name
            )));
        }

        let mut seen = HashSet::new();
        for variant in &self.variants {
            if !seen.insert(variant.id) {
                return Err(CommerceError::DuplicateVariant(variant.id));
            }
        }

        Ok(())
    }
}
