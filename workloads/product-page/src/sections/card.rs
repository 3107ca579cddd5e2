//! Product card renderer.

use crate::components::ProductCard;
use crate::sections::escape_html;

/// Render the product card for the selected variant.
pub fn render_product_card(card: &ProductCard) -> String {
    let product = card.product();
    let stock = card.stock_status();

    let sale_badge = if card.on_sale() {
        r#"<span class="sale-badge">On Sale</span>"#
    } else {
        ""
    };

    let details: String = product
        .details
        .iter()
        .map(|detail| format!("<li>{}</li>", escape_html(detail)))
        .collect();

    let swatches: String = product
        .variants
        .iter()
        .enumerate()
        .map(|(index, variant)| {
            let active = if index == card.selected_index() {
                " color-box--active"
            } else {
                ""
            };
            format!(
                r#"<div class="color-box{active}" data-variant-index="{index}" data-variant-id="{id}" style="background-color: {color};"></div>"#,
                active = active,
                index = index,
                id = variant.id,
                color = escape_html(&variant.color)
            )
        })
        .collect();

    let sizes: String = product
        .sizes
        .iter()
        .map(|size| format!(r#"<div class="size">{}</div>"#, escape_html(size)))
        .collect();

    let add_disabled = if stock.is_available() { "" } else { " disabled" };

    format!(
        r#"<section class="product" data-section="product-card">
    <div class="product-image">
        <img src="{image}" alt="{title}">
    </div>
    <div class="product-info">
        <div class="product-title">
            <h1>{title}</h1>
            {sale_badge}
        </div>
        <p class="stock {stock_class}">{stock_label}</p>
        <p class="shipping">Shipping: {shipping}</p>
        <ul class="product-details">{details}</ul>
        <div class="color-boxes">{swatches}</div>
        <div class="sizes-wrapper">{sizes}</div>
        <div class="cart-actions">
            <button class="btn-add-to-cart" data-action="add-to-cart"{add_disabled}>Add to Cart</button>
            <button class="btn-remove-from-cart" data-action="remove-from-cart">Remove from Cart</button>
        </div>
    </div>
</section>"#,
        image = escape_html(card.image()),
        title = escape_html(&card.title()),
        sale_badge = sale_badge,
        stock_class = stock.css_class(),
        stock_label = stock.label(),
        shipping = escape_html(&card.shipping().label()),
        details = details,
        swatches = swatches,
        sizes = sizes,
        add_disabled = add_disabled
    )
}
