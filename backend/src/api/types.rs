//! REST API types for the review manager UI.
//!
//! Every response carries a `success` flag; failures add an `error` string
//! the UI shows verbatim.

use serde::{Deserialize, Serialize};

use crate::models::Review;

/// Query for `GET /api/reviews`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReviewsQuery {
    /// Page to scrape; the configured source when absent or blank
    pub url: Option<String>,
}

/// Response for `GET /api/reviews`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewsResponse {
    pub success: bool,
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ReviewsResponse {
    pub fn ok(reviews: Vec<Review>) -> Self {
        Self { success: true, reviews, error: None }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self { success: false, reviews: Vec::new(), error: Some(error.into()) }
    }
}

/// Body of `POST /api/upload`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadRequest {
    #[serde(default)]
    pub reviews: Vec<Review>,
}

/// Response for `POST /api/upload`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploaded: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl UploadResponse {
    pub fn ok(uploaded: usize) -> Self {
        Self { success: true, uploaded: Some(uploaded), error: None }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self { success: false, uploaded: None, error: Some(error.into()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_failed_reviews_response_shape() {
        let value = serde_json::to_value(ReviewsResponse::failed("boom")).unwrap();
        assert_eq!(value, json!({"success": false, "reviews": [], "error": "boom"}));
    }

    #[test]
    fn test_upload_request_ignores_display_fields() {
        // The UI sends its annotated reviews back unchanged
        let request: UploadRequest = serde_json::from_value(json!({
            "reviews": [{
                "username": "Alicia R.",
                "review": "Amazing surgery",
                "time_text": "2 years ago",
                "title": "Amazing Surgery at Park Plaza Plastic Surgery",
                "author": "Alicia R.",
                "date": "2 years ago",
                "content": "Amazing surgery"
            }]
        }))
        .unwrap();

        assert_eq!(request.reviews.len(), 1);
        assert_eq!(request.reviews[0].title, "Amazing Surgery at Park Plaza Plastic Surgery");
    }

    #[test]
    fn test_upload_ok_shape() {
        let value = serde_json::to_value(UploadResponse::ok(4)).unwrap();
        assert_eq!(value, json!({"success": true, "uploaded": 4}));
    }
}
