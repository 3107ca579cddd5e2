//! Shop command: browse the page interactively.

use std::fs;

use anyhow::{Context as _, Result};
use dialoguer::{Confirm, Input, Select};
use pdp_commerce::cart::CartChange;
use pdp_commerce::reviews::Rating;
use pdp_commerce::VariantId;
use product_page::{Action, Effect, ProductPage, SubmitOutcome, Tab};

use super::ShopArgs;
use crate::context::Context;
use crate::output::stock_badge;

/// One entry of the main menu.
#[derive(Debug, Clone, PartialEq, Eq)]
enum MenuChoice {
    SelectColor(usize),
    AddToCart,
    RemoveFromCart,
    SetPremium(bool),
    ShowReviews,
    WriteReview,
    Quit,
}

impl MenuChoice {
    fn label(&self, page: &ProductPage) -> String {
        match self {
            MenuChoice::SelectColor(index) => {
                let color = page
                    .card()
                    .product()
                    .variant(*index)
                    .map(|v| v.color.as_str())
                    .unwrap_or("?");
                format!("Show {}", color)
            }
            MenuChoice::AddToCart => "Add to cart".to_string(),
            MenuChoice::RemoveFromCart => "Remove from cart".to_string(),
            MenuChoice::SetPremium(true) => "Switch to premium".to_string(),
            MenuChoice::SetPremium(false) => "Switch to standard".to_string(),
            MenuChoice::ShowReviews => format!("Reviews ({})", page.tabs().review_count()),
            MenuChoice::WriteReview => "Make a Review".to_string(),
            MenuChoice::Quit => "Quit".to_string(),
        }
    }
}

/// Menu entries for the current page state.
///
/// The selected color is left out, and "Add to cart" only appears while the
/// selected variant has stock.
fn menu(page: &ProductPage) -> Vec<MenuChoice> {
    let card = page.card();
    let mut items: Vec<MenuChoice> = (0..card.product().variants.len())
        .filter(|&index| index != card.selected_index())
        .map(MenuChoice::SelectColor)
        .collect();

    if card.stock_status().is_available() {
        items.push(MenuChoice::AddToCart);
    }
    items.push(MenuChoice::RemoveFromCart);
    items.push(MenuChoice::SetPremium(!page.premium()));
    items.push(MenuChoice::ShowReviews);
    items.push(MenuChoice::WriteReview);
    items.push(MenuChoice::Quit);
    items
}

/// Run the shop command.
pub fn run(args: ShopArgs, ctx: &Context) -> Result<()> {
    let mut page = ctx.mount(args.membership.premium_override())?;

    loop {
        print_card(&page, ctx);

        let items = menu(&page);
        let labels: Vec<String> = items.iter().map(|item| item.label(&page)).collect();
        let selection = Select::new()
            .with_prompt("What next?")
            .items(&labels)
            .default(0)
            .interact()?;

        match &items[selection] {
            MenuChoice::SelectColor(index) => {
                page.dispatch(Action::SelectVariant(*index))?;
            }
            MenuChoice::AddToCart => {
                let effect = page.dispatch(Action::AddToCart)?;
                report_effect(&page, &effect, ctx)?;
            }
            MenuChoice::RemoveFromCart => {
                let effect = page.dispatch(Action::RemoveFromCart)?;
                report_effect(&page, &effect, ctx)?;
            }
            MenuChoice::SetPremium(premium) => {
                page.dispatch(Action::SetPremium(*premium))?;
            }
            MenuChoice::ShowReviews => {
                page.dispatch(Action::SelectTab(Tab::Reviews))?;
                print_reviews(&page, ctx);
            }
            MenuChoice::WriteReview => {
                page.dispatch(Action::SelectTab(Tab::MakeAReview))?;
                let effect = write_review(&mut page)?;
                report_effect(&page, &effect, ctx)?;
            }
            MenuChoice::Quit => break,
        }
    }

    if let Some(out) = args.save_html {
        let path = ctx.resolve_path(&out);
        fs::write(&path, page.render())
            .with_context(|| format!("Failed to write {}", path.display()))?;
        ctx.output.success(&format!("Saved page to {}", path.display()));
    }

    ctx.output
        .info(&format!("Left with {} item(s) in the cart", page.cart_count()));
    Ok(())
}

fn write_review(page: &mut ProductPage) -> Result<Effect> {
    let name: String = Input::new()
        .with_prompt("Name")
        .with_initial_text(page.form().name())
        .allow_empty(true)
        .interact_text()?;
    page.dispatch(Action::EditName(name))?;

    let review: String = Input::new()
        .with_prompt("Review")
        .with_initial_text(page.form().review())
        .allow_empty(true)
        .interact_text()?;
    page.dispatch(Action::EditReview(review))?;

    let mut ratings: Vec<String> = vec!["(none)".to_string()];
    ratings.extend(Rating::options().map(|r| format!("{} {}", r, r.stars())));
    let picked = Select::new()
        .with_prompt("Rating")
        .items(&ratings)
        .default(0)
        .interact()?;
    page.dispatch(Action::SelectRating(rating_at(picked)))?;

    let recommend = Confirm::new()
        .with_prompt("Would you recommend this product?")
        .default(page.form().recommend())
        .interact()?;
    page.dispatch(Action::SetRecommend(recommend))?;

    Ok(page.dispatch(Action::SubmitReview)?)
}

/// Rating behind a position in the rating menu; position 0 is "(none)".
fn rating_at(position: usize) -> Option<Rating> {
    match position {
        0 => None,
        n => Rating::options().nth(n - 1),
    }
}

fn print_card(page: &ProductPage, ctx: &Context) {
    let card = page.card();
    let variant = card.selected_variant();

    ctx.output.header(&card.title());
    ctx.output.kv("Color", &variant.color);
    ctx.output.kv("Stock", &stock_badge(card.stock_status()));
    if card.on_sale() {
        ctx.output.kv("Sale", "On Sale!");
    }
    ctx.output.kv("Shipping", &card.shipping().label());
    ctx.output.kv("Cart", &page.cart_count().to_string());
}

fn print_reviews(page: &ProductPage, ctx: &Context) {
    let reviews = page.tabs().reviews();
    if reviews.is_empty() {
        ctx.output.info("There are no reviews yet!");
        return;
    }
    for review in &reviews {
        ctx.output.list_item(&format!(
            "{} ({}) - {}{}",
            review.name,
            review.rating.stars(),
            review.review,
            if review.recommend { " [recommended]" } else { "" }
        ));
    }
}

/// Cart line as shown to the shopper, e.g. "green (2234)".
fn cart_line(page: &ProductPage, id: VariantId) -> Result<String> {
    let variant = page.card().product().find_variant(id)?;
    Ok(format!("{} ({})", variant.color, id))
}

fn report_effect(page: &ProductPage, effect: &Effect, ctx: &Context) -> Result<()> {
    match effect {
        Effect::Cart(CartChange::Added(id)) => {
            ctx.output
                .success(&format!("Added {} to the cart", cart_line(page, *id)?));
        }
        Effect::Cart(CartChange::Removed(id)) => {
            ctx.output
                .success(&format!("Removed {} from the cart", cart_line(page, *id)?));
        }
        Effect::Review(SubmitOutcome::Published(review)) => {
            ctx.output.success(&format!("Thanks for your review, {}!", review.name));
        }
        Effect::Review(SubmitOutcome::Rejected(errors)) => {
            ctx.output.warn("Please correct the following error(s):");
            for error in errors {
                ctx.output.list_item(error);
            }
        }
        Effect::None => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pdp_observability::{SessionId, StructuredLogger};
    use product_page::data::default_product;
    use product_page::PageSettings;

    use super::*;

    fn page() -> ProductPage {
        let (logger, _capture) = StructuredLogger::captured(SessionId::from_string("shop-test"));
        ProductPage::new(default_product(), PageSettings::default(), logger).unwrap()
    }

    #[test]
    fn test_menu_hides_selected_color() {
        let mut page = page();
        assert_eq!(menu(&page)[0], MenuChoice::SelectColor(1));

        page.dispatch(Action::SelectVariant(1)).unwrap();
        assert_eq!(menu(&page)[0], MenuChoice::SelectColor(0));
    }

    #[test]
    fn test_menu_offers_opposite_membership() {
        let mut page = page();
        assert!(menu(&page).contains(&MenuChoice::SetPremium(false)));

        page.dispatch(Action::SetPremium(false)).unwrap();
        assert!(menu(&page).contains(&MenuChoice::SetPremium(true)));
    }

    #[test]
    fn test_menu_labels() {
        let page = page();
        assert_eq!(MenuChoice::SelectColor(1).label(&page), "Show blue");
        assert_eq!(MenuChoice::ShowReviews.label(&page), "Reviews (0)");
        assert_eq!(menu(&page).last(), Some(&MenuChoice::Quit));
    }

    #[test]
    fn test_cart_line_names_the_variant() {
        let page = page();
        assert_eq!(cart_line(&page, VariantId::new(2235)).unwrap(), "blue (2235)");

        let err = cart_line(&page, VariantId::new(9)).unwrap_err();
        assert_eq!(err.to_string(), "Variant not found: 9");
    }

    #[test]
    fn test_rating_positions() {
        assert_eq!(rating_at(0), None);
        assert_eq!(rating_at(1).map(Rating::value), Some(5));
        assert_eq!(rating_at(5).map(Rating::value), Some(1));
        assert_eq!(rating_at(6), None);
    }
}
