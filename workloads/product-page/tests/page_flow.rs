//! End-to-end flows through the mounted page.

use pdp_commerce::cart::CartChange;
use pdp_commerce::catalog::{Product, ProductVariant};
use pdp_commerce::reviews::{Rating, Review};
use pdp_commerce::VariantId;
use pdp_observability::{SessionId, StructuredLogger};
use product_page::data::default_product;
use product_page::{Action, Effect, PageSettings, ProductPage, SubmitOutcome, Tab};

fn mount(product: Product, premium: bool) -> ProductPage {
    let (logger, _capture) = StructuredLogger::captured(SessionId::from_string("flow"));
    let settings = PageSettings {
        premium,
        ..PageSettings::default()
    };
    ProductPage::new(product, settings, logger).unwrap()
}

fn stocked(quantities: &[u32]) -> Product {
    quantities
        .iter()
        .enumerate()
        .fold(Product::new("Vue Mastery", "Socks"), |product, (i, quantity)| {
            product.with_variant(ProductVariant::new(
                i as u32 + 1,
                format!("c{}", i),
                format!("c{}.png", i),
                *quantity,
            ))
        })
}

#[test]
fn test_every_variant_shows_its_own_fields() {
    let quantities = [5, 15, 0, 10, 11];
    let mut page = mount(stocked(&quantities), false);
    let expected = ["Almost sold out!", "In Stock", "Out of Stock", "Almost sold out!", "In Stock"];

    for (index, label) in expected.iter().enumerate() {
        page.dispatch(Action::SelectVariant(index)).unwrap();
        let snapshot = page.snapshot();
        assert_eq!(snapshot.stock_label, *label);
        assert_eq!(snapshot.quantity, quantities[index]);
        assert_eq!(snapshot.image, format!("c{}.png", index));
        assert_eq!(snapshot.title, "Vue Mastery Socks");
        assert_eq!(snapshot.shipping, "$2.99");
    }
}

#[test]
fn test_submitted_review_appears_under_reviews_tab() {
    let mut page = mount(default_product(), true);
    page.dispatch(Action::SelectTab(Tab::MakeAReview)).unwrap();
    page.dispatch(Action::EditName("A".into())).unwrap();
    page.dispatch(Action::EditReview("Great".into())).unwrap();
    page.dispatch(Action::SelectRating(Some(Rating::try_from(5).unwrap())))
        .unwrap();

    let effect = page.dispatch(Action::SubmitReview).unwrap();
    let expected = Review::new("A", "Great", Rating::try_from(5).unwrap());
    assert_eq!(effect, Effect::Review(SubmitOutcome::Published(expected.clone())));

    let snapshot = page.snapshot();
    assert_eq!(snapshot.reviews, vec![expected]);
    assert_eq!(snapshot.form.name, "");
    assert_eq!(snapshot.form.review, "");
    assert_eq!(snapshot.form.rating, None);

    page.dispatch(Action::SelectTab(Tab::Reviews)).unwrap();
    let html = page.render();
    assert!(html.contains("<b>A</b>"));
    assert!(html.contains("Rating: 5"));
    assert!(!html.contains("There are no reviews yet!"));
}

#[test]
fn test_rejected_reviews_never_reach_the_list() {
    let mut page = mount(default_product(), true);
    page.dispatch(Action::EditReview("Nice".into())).unwrap();

    for _ in 0..3 {
        let effect = page.dispatch(Action::SubmitReview).unwrap();
        assert_eq!(
            effect,
            Effect::Review(SubmitOutcome::Rejected(vec![
                "Name is required!".to_string(),
                "Rating is required!".to_string(),
            ]))
        );
    }

    let snapshot = page.snapshot();
    assert!(snapshot.reviews.is_empty());
    assert_eq!(snapshot.form.errors.len(), 2);
    assert_eq!(snapshot.form.review, "Nice");
}

#[test]
fn test_double_toggle_restores_cart() {
    let mut page = mount(default_product(), true);
    page.dispatch(Action::AddToCart).unwrap();
    page.dispatch(Action::SelectVariant(1)).unwrap();
    let before: Vec<VariantId> = page.cart().lines().collect();

    let first = page.dispatch(Action::AddToCart).unwrap();
    let second = page.dispatch(Action::AddToCart).unwrap();

    assert_eq!(first, Effect::Cart(CartChange::Added(VariantId::new(2235))));
    assert_eq!(second, Effect::Cart(CartChange::Removed(VariantId::new(2235))));
    assert_eq!(page.cart().lines().collect::<Vec<_>>(), before);
}

#[test]
fn test_premium_shipping_examples() {
    assert_eq!(mount(default_product(), false).snapshot().shipping, "$2.99");
    assert_eq!(mount(default_product(), true).snapshot().shipping, "Free");
}
