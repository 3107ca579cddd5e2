//! HTML renderers for the page components.

mod card;
mod layout;
mod reviews;

pub use card::*;
pub use layout::*;
pub use reviews::*;

pub(crate) fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
