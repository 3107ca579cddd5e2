//! Page root: owns the cart and routes every user action.

use pdp_commerce::cart::{Cart, CartChange};
use pdp_commerce::catalog::{Product, StockStatus};
use pdp_commerce::checkout::ShippingPolicy;
use pdp_commerce::reviews::{Rating, Review};
use pdp_commerce::VariantId;
use pdp_events::EventBus;
use pdp_observability::StructuredLogger;
use serde::Serialize;

use crate::components::{CardEvent, ProductCard, ReviewForm, ReviewTabs, SubmitOutcome, Tab};
use crate::error::PageError;
use crate::events::PageEvent;
use crate::sections::{HeadContent, Shell, PDP_STYLES};

/// Page-wide settings supplied at mount time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSettings {
    /// Premium customers get free shipping.
    pub premium: bool,
    pub shipping: ShippingPolicy,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            premium: true,
            shipping: ShippingPolicy::default(),
        }
    }
}

/// A user interaction with the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hover/select the color swatch at this index.
    SelectVariant(usize),
    AddToCart,
    RemoveFromCart,
    SetPremium(bool),
    SelectTab(Tab),
    EditName(String),
    EditReview(String),
    SelectRating(Option<Rating>),
    SetRecommend(bool),
    SubmitReview,
}

impl Action {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Action::SelectVariant(_) => "select_variant",
            Action::AddToCart => "add_to_cart",
            Action::RemoveFromCart => "remove_from_cart",
            Action::SetPremium(_) => "set_premium",
            Action::SelectTab(_) => "select_tab",
            Action::EditName(_) => "edit_name",
            Action::EditReview(_) => "edit_review",
            Action::SelectRating(_) => "select_rating",
            Action::SetRecommend(_) => "set_recommend",
            Action::SubmitReview => "submit_review",
        }
    }
}

/// Observable outcome of a dispatched action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// State changed with nothing further to report.
    None,
    Cart(CartChange),
    Review(SubmitOutcome),
}

/// The mounted product page.
///
/// The review bus is shared by the form and the review list and lives as long
/// as they do.
#[derive(Debug)]
pub struct ProductPage {
    card: ProductCard,
    tabs: ReviewTabs,
    cart: Cart,
    premium: bool,
    logger: StructuredLogger,
}

impl ProductPage {
    /// Mount the page for `product`.
    pub fn new(
        product: Product,
        settings: PageSettings,
        logger: StructuredLogger,
    ) -> Result<Self, PageError> {
        let bus: EventBus<PageEvent> = EventBus::new();
        let card = ProductCard::new(
            product,
            settings.shipping,
            settings.premium,
            logger.for_component("product-card"),
        )?;
        let tabs = ReviewTabs::new(&bus, logger.for_component("review-tabs"));
        let logger = logger.for_component("page");

        logger
            .info_builder("Page mounted")
            .field("product", card.title())
            .field_i64("variants", card.product().variants.len() as i64)
            .field_bool("premium", settings.premium)
            .emit();

        Ok(Self {
            card,
            tabs,
            cart: Cart::new(),
            premium: settings.premium,
            logger,
        })
    }

    /// Apply one action.
    pub fn dispatch(&mut self, action: Action) -> Result<Effect, PageError> {
        self.logger
            .debug_builder("Action dispatched")
            .field("action", action.name())
            .emit();

        match action {
            Action::SelectVariant(index) => {
                self.card.select_variant(index)?;
                Ok(Effect::None)
            }
            Action::AddToCart => {
                let event = self.card.add_to_cart();
                Ok(Effect::Cart(self.update_cart(event)))
            }
            Action::RemoveFromCart => {
                let event = self.card.remove_from_cart();
                Ok(Effect::Cart(self.update_cart(event)))
            }
            Action::SetPremium(premium) => {
                self.premium = premium;
                self.card.set_premium(premium);
                Ok(Effect::None)
            }
            Action::SelectTab(tab) => {
                self.tabs.select_tab(tab);
                Ok(Effect::None)
            }
            Action::EditName(name) => {
                self.tabs.form_mut().set_name(name);
                Ok(Effect::None)
            }
            Action::EditReview(review) => {
                self.tabs.form_mut().set_review(review);
                Ok(Effect::None)
            }
            Action::SelectRating(rating) => {
                self.tabs.form_mut().set_rating(rating);
                Ok(Effect::None)
            }
            Action::SetRecommend(recommend) => {
                self.tabs.form_mut().set_recommend(recommend);
                Ok(Effect::None)
            }
            Action::SubmitReview => {
                let outcome = self.tabs.form_mut().submit()?;
                Ok(Effect::Review(outcome))
            }
        }
    }

    /// Both card events toggle the line for the emitted variant.
    fn update_cart(&mut self, event: CardEvent) -> CartChange {
        let change = self.cart.toggle(event.variant_id());
        let change_name = match change {
            CartChange::Added(_) => "added",
            CartChange::Removed(_) => "removed",
        };
        self.logger
            .info_builder("Cart updated")
            .field_i64("variant_id", i64::from(event.variant_id().get()))
            .field("change", change_name)
            .field_i64("cart_count", self.cart.len() as i64)
            .emit();
        change
    }

    pub fn card(&self) -> &ProductCard {
        &self.card
    }

    pub fn tabs(&self) -> &ReviewTabs {
        &self.tabs
    }

    pub fn form(&self) -> &ReviewForm {
        self.tabs.form()
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_count(&self) -> usize {
        self.cart.len()
    }

    pub fn premium(&self) -> bool {
        self.premium
    }

    /// Render the whole page as an HTML document.
    pub fn render(&self) -> String {
        let head = HeadContent::new(self.card.title())
            .with_meta("viewport", "width=device-width, initial-scale=1")
            .with_style(PDP_STYLES);
        Shell::new(head, self.cart_count()).render(&[self.card.render(), self.tabs.render()])
    }

    /// Serializable view of everything the page displays.
    pub fn snapshot(&self) -> PageSnapshot {
        let variant = self.card.selected_variant();
        let stock = self.card.stock_status();
        let form = self.tabs.form();

        PageSnapshot {
            title: self.card.title(),
            image: variant.image.clone(),
            color: variant.color.clone(),
            selected_variant: variant.id,
            selected_index: self.card.selected_index(),
            on_sale: variant.on_sale,
            quantity: variant.quantity,
            stock,
            stock_label: stock.label().to_string(),
            premium: self.premium,
            shipping: self.card.shipping().label(),
            details: self.card.product().details.clone(),
            sizes: self.card.product().sizes.clone(),
            cart: self.cart.lines().collect(),
            cart_count: self.cart_count(),
            selected_tab: self.tabs.selected_tab(),
            reviews: self.tabs.reviews(),
            form: FormSnapshot {
                name: form.name().to_string(),
                review: form.review().to_string(),
                rating: form.rating(),
                recommend: form.recommend(),
                errors: form.errors().to_vec(),
            },
        }
    }
}

/// Point-in-time view of the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageSnapshot {
    pub title: String,
    pub image: String,
    pub color: String,
    pub selected_variant: VariantId,
    pub selected_index: usize,
    pub on_sale: bool,
    pub quantity: u32,
    pub stock: StockStatus,
    pub stock_label: String,
    pub premium: bool,
    pub shipping: String,
    pub details: Vec<String>,
    pub sizes: Vec<String>,
    pub cart: Vec<VariantId>,
    pub cart_count: usize,
    pub selected_tab: Tab,
    pub reviews: Vec<Review>,
    pub form: FormSnapshot,
}

/// Current review form inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormSnapshot {
    pub name: String,
    pub review: String,
    pub rating: Option<Rating>,
    pub recommend: bool,
    pub errors: Vec<String>,
}
