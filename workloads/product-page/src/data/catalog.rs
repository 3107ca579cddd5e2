//! Built-in product used when no catalog is configured.

use pdp_commerce::catalog::{Product, ProductVariant};

/// The demo boots product with a green and a blue variant.
pub fn default_product() -> Product {
    Product::new("Vue Mastery", "Boots")
        .with_detail("80% Cotton")
        .with_detail("20% Polyester")
        .with_detail("Gender-neutral")
        .with_size("XS")
        .with_size("SM")
        .with_size("MD")
        .with_size("LG")
        .with_size("XL")
        .with_variant(
            ProductVariant::new(2234, "green", "assets/images/green-socks.png", 5).on_sale(true),
        )
        .with_variant(ProductVariant::new(2235, "blue", "assets/images/blue-socks.png", 10))
}
