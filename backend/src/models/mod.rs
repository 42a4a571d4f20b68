//! Domain models for scraped reviews.
//!
//! - [`Review`] - A single scraped review, in the wire format the UI consumes
//! - [`ReviewDate`] - Calendar date attached to a review when known
//! - [`ReviewerTitle`] / [`TitleSheet`] - Hand-written titles keyed by reviewer

use serde::{Deserialize, Serialize};

// =============================================================================
// Review
// =============================================================================

/// A scraped review.
///
/// Field names are snake_case on the wire; the frontend reads
/// `review`, `username` and `time_text` directly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    /// Reviewer display name.
    pub username: String,
    /// Review body.
    pub review: String,
    /// Star rating (0.0 - 5.0).
    #[serde(default = "default_rating")]
    pub rating: f64,
    /// Approximate age of the review in months.
    #[serde(default)]
    pub months_ago: u32,
    /// Human-readable age, e.g. "3 years ago".
    #[serde(default)]
    pub time_text: String,
    /// Display title. Empty until assigned.
    #[serde(default)]
    pub title: String,
    /// Calendar date, when the source exposes one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_date: Option<ReviewDate>,
}

fn default_rating() -> f64 {
    5.0
}

impl Review {
    /// Create a review with the mandatory fields; the rest take defaults.
    pub fn new(username: impl Into<String>, review: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            review: review.into(),
            rating: default_rating(),
            months_ago: 0,
            time_text: String::new(),
            title: String::new(),
            review_date: None,
        }
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    pub fn with_age(mut self, months_ago: u32, time_text: impl Into<String>) -> Self {
        self.months_ago = months_ago;
        self.time_text = time_text.into();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// True if the review has no usable body text.
    pub fn is_blank(&self) -> bool {
        self.review.trim().is_empty()
    }
}

// =============================================================================
// Review Date
// =============================================================================

/// Calendar date of a review.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReviewDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl From<chrono::NaiveDate> for ReviewDate {
    fn from(date: chrono::NaiveDate) -> Self {
        use chrono::Datelike;
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

// =============================================================================
// Title Sheets
// =============================================================================

/// A hand-written title for one reviewer's review.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReviewerTitle {
    pub reviewer: String,
    pub title: String,
}

/// File format for hand-written titles: `{ "reviews": [{reviewer, title}] }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TitleSheet {
    #[serde(default)]
    pub reviews: Vec<ReviewerTitle>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_review_wire_format() {
        let review = Review::new("Maria L.", "Dr. Park was wonderful")
            .with_age(36, "3 years ago")
            .with_title("Excellent Experience");

        let value = serde_json::to_value(&review).unwrap();
        assert_eq!(value["username"], "Maria L.");
        assert_eq!(value["review"], "Dr. Park was wonderful");
        assert_eq!(value["time_text"], "3 years ago");
        assert_eq!(value["months_ago"], 36);
        assert_eq!(value["rating"], 5.0);
        assert!(value.get("review_date").is_none());
    }

    #[test]
    fn test_review_defaults_on_minimal_input() {
        let review: Review = serde_json::from_value(json!({
            "username": "Tom",
            "review": "Great care"
        }))
        .unwrap();

        assert_eq!(review.rating, 5.0);
        assert_eq!(review.months_ago, 0);
        assert!(review.title.is_empty());
    }

    #[test]
    fn test_review_date_from_naive() {
        let date = chrono::NaiveDate::from_ymd_opt(2023, 3, 14).unwrap();
        let rd = ReviewDate::from(date);
        assert_eq!(rd, ReviewDate { year: 2023, month: 3, day: 14 });
    }
}
