//! Page components.

mod card;
mod review_form;
mod review_tabs;

pub use card::*;
pub use review_form::*;
pub use review_tabs::*;
