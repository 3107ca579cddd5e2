//! Review tabs: the review list and the review form behind a tab strip.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use pdp_commerce::reviews::Review;
use pdp_events::{EventBus, Subscription};
use pdp_observability::StructuredLogger;
use serde::{Deserialize, Serialize};

use crate::components::ReviewForm;
use crate::events::{PageEvent, PageTopic};
use crate::sections::render_review_tabs;

/// The two mutually exclusive views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tab {
    #[default]
    Reviews,
    MakeAReview,
}

impl Tab {
    /// Tabs in display order.
    pub const ALL: [Tab; 2] = [Tab::Reviews, Tab::MakeAReview];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Reviews => "Reviews",
            Tab::MakeAReview => "Make a Review",
        }
    }

    /// Parse a tab from its label, ignoring case.
    pub fn from_label(label: &str) -> Option<Tab> {
        Tab::ALL
            .into_iter()
            .find(|tab| tab.label().eq_ignore_ascii_case(label.trim()))
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accumulated reviews plus the tab selection.
///
/// Reviews arrive only through the bus and are kept in arrival order.
#[derive(Debug)]
pub struct ReviewTabs {
    reviews: Rc<RefCell<Vec<Review>>>,
    selected: Tab,
    form: ReviewForm,
    logger: StructuredLogger,
    _subscription: Subscription,
}

impl ReviewTabs {
    /// Subscribe to submitted reviews and build the embedded form.
    pub fn new(bus: &EventBus<PageEvent>, logger: StructuredLogger) -> Self {
        let reviews = Rc::new(RefCell::new(Vec::new()));

        let list = Rc::clone(&reviews);
        let list_logger = logger.clone();
        let subscription = bus.subscribe(PageTopic::ReviewSubmitted, move |event| {
            let PageEvent::ReviewSubmitted(review) = event;
            let mut list = list.borrow_mut();
            list.push(review.clone());
            list_logger
                .debug_builder("Review added to list")
                .field_i64("total", list.len() as i64)
                .emit();
            Ok(())
        });

        let form = ReviewForm::new(bus.clone(), logger.for_component("review-form"));

        Self {
            reviews,
            selected: Tab::default(),
            form,
            logger,
            _subscription: subscription,
        }
    }

    pub fn selected_tab(&self) -> Tab {
        self.selected
    }

    pub fn select_tab(&mut self, tab: Tab) {
        if self.selected != tab {
            self.logger
                .debug_builder("Tab selected")
                .field("tab", tab.label())
                .emit();
        }
        self.selected = tab;
    }

    /// Whether `tab`'s view is the visible one.
    pub fn is_visible(&self, tab: Tab) -> bool {
        self.selected == tab
    }

    /// Reviews received so far, oldest first.
    pub fn reviews(&self) -> Vec<Review> {
        self.reviews.borrow().clone()
    }

    pub fn review_count(&self) -> usize {
        self.reviews.borrow().len()
    }

    pub fn form(&self) -> &ReviewForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ReviewForm {
        &mut self.form
    }

    pub fn render(&self) -> String {
        render_review_tabs(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdp_commerce::reviews::Rating;
    use pdp_observability::SessionId;

    fn tabs() -> (ReviewTabs, EventBus<PageEvent>) {
        let bus = EventBus::new();
        let (logger, _capture) = StructuredLogger::captured(SessionId::from_string("tabs"));
        (ReviewTabs::new(&bus, logger), bus)
    }

    fn review(name: &str, stars: u8) -> Review {
        Review::new(name, "text", Rating::try_from(stars).unwrap())
    }

    #[test]
    fn test_defaults_to_reviews_tab() {
        let (tabs, _bus) = tabs();
        assert_eq!(tabs.selected_tab(), Tab::Reviews);
        assert!(tabs.is_visible(Tab::Reviews));
        assert!(!tabs.is_visible(Tab::MakeAReview));
    }

    #[test]
    fn test_tabs_are_mutually_exclusive() {
        let (mut tabs, _bus) = tabs();
        tabs.select_tab(Tab::MakeAReview);
        assert!(tabs.is_visible(Tab::MakeAReview));
        assert!(!tabs.is_visible(Tab::Reviews));
    }

    #[test]
    fn test_collects_published_reviews_in_order() {
        let (tabs, bus) = tabs();
        bus.publish(PageEvent::ReviewSubmitted(review("first", 5))).unwrap();
        bus.publish(PageEvent::ReviewSubmitted(review("second", 2))).unwrap();

        let names: Vec<String> = tabs.reviews().into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["first", "second"]);
        assert_eq!(tabs.review_count(), 2);
    }

    #[test]
    fn test_embedded_form_feeds_the_list() {
        let (mut tabs, _bus) = tabs();
        let form = tabs.form_mut();
        form.set_name("A");
        form.set_review("Great");
        form.set_rating(Some(Rating::try_from(5).unwrap()));
        form.submit().unwrap();

        assert_eq!(tabs.reviews(), vec![Review::new("A", "Great", Rating::try_from(5).unwrap())]);
    }

    #[test]
    fn test_dropping_tabs_unsubscribes() {
        let (tabs, bus) = tabs();
        assert_eq!(bus.subscriber_count(PageTopic::ReviewSubmitted), 1);
        drop(tabs);
        assert_eq!(bus.subscriber_count(PageTopic::ReviewSubmitted), 0);
    }

    #[test]
    fn test_tab_labels() {
        assert_eq!(Tab::from_label("Reviews"), Some(Tab::Reviews));
        assert_eq!(Tab::from_label("make a review"), Some(Tab::MakeAReview));
        assert_eq!(Tab::from_label("Specs"), None);
        assert_eq!(Tab::MakeAReview.to_string(), "Make a Review");
    }
}
