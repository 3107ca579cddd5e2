//! Events exchanged over the page bus.

use std::fmt;

use pdp_commerce::reviews::Review;
use pdp_events::Event;

/// Bus topics used by the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageTopic {
    ReviewSubmitted,
}

impl fmt::Display for PageTopic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageTopic::ReviewSubmitted => write!(f, "review-submitted"),
        }
    }
}

/// Payloads carried by the page bus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    /// A review passed validation in the review form.
    ReviewSubmitted(Review),
}

impl Event for PageEvent {
    type Topic = PageTopic;

    fn topic(&self) -> PageTopic {
        match self {
            PageEvent::ReviewSubmitted(_) => PageTopic::ReviewSubmitted,
        }
    }
}
