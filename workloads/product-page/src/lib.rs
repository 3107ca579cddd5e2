//! Product display page.
//!
//! A headless rendition of a single-product page:
//! - `ProductCard` - variant selection, stock and shipping display, cart buttons
//! - `ReviewTabs` - accumulated reviews and the "Make a Review" tab
//! - `ReviewForm` - controlled review inputs and validation
//! - `ProductPage` - the root: cart, premium flag, and `dispatch(Action)`
//!
//! The form and the review list never reference each other; the form publishes
//! `PageEvent::ReviewSubmitted` on an `EventBus` the page hands to both.

pub mod components;
pub mod data;
mod error;
mod events;
mod page;
pub mod sections;

pub use components::{CardEvent, ProductCard, ReviewForm, ReviewTabs, SubmitOutcome, Tab};
pub use error::PageError;
pub use events::{PageEvent, PageTopic};
pub use page::{Action, Effect, FormSnapshot, PageSettings, PageSnapshot, ProductPage};
