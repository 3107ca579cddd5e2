//! Review submission form with controlled inputs.

use pdp_commerce::reviews::{Rating, Review};
use pdp_events::EventBus;
use pdp_observability::StructuredLogger;

use crate::error::PageError;
use crate::events::PageEvent;
use crate::sections::render_review_form;

pub const NAME_REQUIRED: &str = "Name is required!";
pub const REVIEW_REQUIRED: &str = "Review is required!";
pub const RATING_REQUIRED: &str = "Rating is required!";

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The review was published and the inputs cleared.
    Published(Review),
    /// Required fields were missing; one message per field.
    Rejected(Vec<String>),
}

/// Review form state.
///
/// Errors only describe the latest submit attempt.
#[derive(Debug)]
pub struct ReviewForm {
    bus: EventBus<PageEvent>,
    name: String,
    review: String,
    rating: Option<Rating>,
    recommend: bool,
    errors: Vec<String>,
    logger: StructuredLogger,
}

impl ReviewForm {
    pub fn new(bus: EventBus<PageEvent>, logger: StructuredLogger) -> Self {
        Self {
            bus,
            name: String::new(),
            review: String::new(),
            rating: None,
            recommend: true,
            errors: Vec::new(),
            logger,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn review(&self) -> &str {
        &self.review
    }

    pub fn set_review(&mut self, review: impl Into<String>) {
        self.review = review.into();
    }

    pub fn rating(&self) -> Option<Rating> {
        self.rating
    }

    pub fn set_rating(&mut self, rating: Option<Rating>) {
        self.rating = rating;
    }

    pub fn recommend(&self) -> bool {
        self.recommend
    }

    pub fn set_recommend(&mut self, recommend: bool) {
        self.recommend = recommend;
    }

    /// Messages from the latest rejected submit.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Validate and publish the review.
    ///
    /// On success the name, review and rating inputs are cleared; the
    /// recommend checkbox keeps its value. A bus failure leaves every input
    /// untouched.
    pub fn submit(&mut self) -> Result<SubmitOutcome, PageError> {
        self.errors.clear();

        let name = self.name.trim();
        let text = self.review.trim();
        let review = match self.rating {
            Some(rating) if !name.is_empty() && !text.is_empty() => {
                Review::new(name, text, rating).with_recommend(self.recommend)
            }
            _ => {
                if name.is_empty() {
                    self.errors.push(NAME_REQUIRED.to_string());
                }
                if text.is_empty() {
                    self.errors.push(REVIEW_REQUIRED.to_string());
                }
                if self.rating.is_none() {
                    self.errors.push(RATING_REQUIRED.to_string());
                }
                self.logger
                    .warn_builder("Review rejected")
                    .field("errors", self.errors.join(" "))
                    .emit();
                return Ok(SubmitOutcome::Rejected(self.errors.clone()));
            }
        };

        self.bus.publish(PageEvent::ReviewSubmitted(review.clone()))?;

        self.logger
            .info_builder("Review submitted")
            .field("name", review.name.clone())
            .field_i64("rating", i64::from(review.rating.value()))
            .emit();

        self.name.clear();
        self.review.clear();
        self.rating = None;
        Ok(SubmitOutcome::Published(review))
    }

    pub fn render(&self) -> String {
        render_review_form(self)
    }
}
