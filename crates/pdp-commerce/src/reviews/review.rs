//! Review and rating types.

use std::fmt;

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};

/// A star rating from 1 to 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// All ratings, best first, as offered by the review form.
    pub fn options() -> impl Iterator<Item = Rating> {
        (Self::MIN..=Self::MAX).rev().map(Rating)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Filled and empty stars, e.g. "★★★☆☆".
    pub fn stars(self) -> String {
        let filled = self.0 as usize;
        format!(
            "{}{}",
            "★".repeat(filled),
            "☆".repeat(Self::MAX as usize - filled)
        )
    }
}

impl TryFrom<u8> for Rating {
    type Error = CommerceError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Rating(value))
        } else {
            Err(CommerceError::InvalidRating(value))
        }
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A submitted customer review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Reviewer name.
    pub name: String,
    /// Free-text review.
    pub review: String,
    pub rating: Rating,
    /// Whether the reviewer would recommend the product.
    #[serde(default)]
    pub recommend: bool,
}

impl Review {
    pub fn new(name: impl Into<String>, review: impl Into<String>, rating: Rating) -> Self {
        Self {
            name: name.into(),
            review: review.into(),
            rating,
            recommend: true,
        }
    }

    pub fn with_recommend(mut self, recommend: bool) -> Self {
        self.recommend = recommend;
        self
    }
}
