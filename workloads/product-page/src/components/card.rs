//! Product card: the selected variant and everything derived from it.

use pdp_commerce::catalog::{Product, ProductVariant, StockStatus};
use pdp_commerce::checkout::{ShippingPolicy, ShippingQuote};
use pdp_commerce::VariantId;
use pdp_observability::StructuredLogger;

use crate::error::PageError;
use crate::sections::render_product_card;

/// Cart request emitted by the card to its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardEvent {
    AddToCart(VariantId),
    RemoveFromCart(VariantId),
}

impl CardEvent {
    pub fn variant_id(&self) -> VariantId {
        match self {
            CardEvent::AddToCart(id) | CardEvent::RemoveFromCart(id) => *id,
        }
    }
}

/// Product card state.
///
/// `selected` always indexes `product.variants`, which is never empty.
#[derive(Debug, Clone)]
pub struct ProductCard {
    product: Product,
    selected: usize,
    premium: bool,
    shipping: ShippingPolicy,
    logger: StructuredLogger,
}

impl ProductCard {
    /// Create a card showing the first variant of `product`.
    pub fn new(
        product: Product,
        shipping: ShippingPolicy,
        premium: bool,
        logger: StructuredLogger,
    ) -> Result<Self, PageError> {
        product.validate()?;
        Ok(Self {
            product,
            selected: 0,
            premium,
            shipping,
            logger,
        })
    }

    /// Make the variant at `index` the active one.
    pub fn select_variant(&mut self, index: usize) -> Result<(), PageError> {
        let len = self.product.variants.len();
        let variant = self
            .product
            .variant(index)
            .ok_or(PageError::VariantOutOfRange { index, len })?;

        self.logger
            .debug_builder("Variant selected")
            .field_i64("index", index as i64)
            .field("color", variant.color.clone())
            .emit();
        self.selected = index;
        Ok(())
    }

    /// Push the parent's premium flag down to the card.
    pub fn set_premium(&mut self, premium: bool) {
        self.premium = premium;
    }

    pub fn premium(&self) -> bool {
        self.premium
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_variant(&self) -> &ProductVariant {
        &self.product.variants[self.selected]
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn title(&self) -> String {
        self.product.title()
    }

    pub fn image(&self) -> &str {
        &self.selected_variant().image
    }

    pub fn on_sale(&self) -> bool {
        self.selected_variant().on_sale
    }

    pub fn quantity(&self) -> u32 {
        self.selected_variant().quantity
    }

    pub fn stock_status(&self) -> StockStatus {
        self.selected_variant().stock_status()
    }

    pub fn shipping(&self) -> ShippingQuote {
        self.shipping.quote(self.premium)
    }

    /// Ask the parent to add the active variant.
    pub fn add_to_cart(&self) -> CardEvent {
        CardEvent::AddToCart(self.selected_variant().id)
    }

    /// Ask the parent to remove the active variant.
    pub fn remove_from_cart(&self) -> CardEvent {
        CardEvent::RemoveFromCart(self.selected_variant().id)
    }

    pub fn render(&self) -> String {
        render_product_card(self)
    }
}
