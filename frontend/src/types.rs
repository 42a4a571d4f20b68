//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Review Types** - Scraped reviews and their display fields
//! - **Log Types** - Real-time log streaming
//! - **API Types** - Backend response structures
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::title::generate_review_title;

// =============================================================================
// Review Types
// =============================================================================

/// A review as received from the backend, plus display fields.
///
/// `title`, `author`, `date` and `content` are filled in by
/// [`Review::annotate`]; everything else is kept as sent so the upload
/// carries the original data back.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Review {
    /// Review body
    pub review: String,
    /// Reviewer name
    pub username: String,
    /// Human-readable age
    #[serde(default)]
    pub time_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub months_ago: Option<u32>,
    /// Display title
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub content: String,
}

impl Review {
    /// Derive the display fields from the source fields.
    pub fn annotate(self) -> Self {
        Self {
            title: generate_review_title(&self.review),
            author: self.username.clone(),
            date: self.time_text.clone(),
            content: self.review.clone(),
            ..self
        }
    }
}

// =============================================================================
// Log Types
// =============================================================================

/// Log severity level.
///
/// Matches the backend's log levels for SSE streaming.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum LogLevel {
    Info,
    Success,
    Error,
    Warning,
}

impl LogLevel {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            LogLevel::Info => "log-info text-gray-600",
            LogLevel::Success => "log-success text-green-600",
            LogLevel::Error => "log-error text-red-500",
            LogLevel::Warning => "log-warning text-amber-600",
        }
    }
}

/// A single log entry from the backend.
///
/// Received via SSE from `/api/logs` endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    /// Timestamp string (HH:MM:SS)
    pub timestamp: String,
}

// =============================================================================
// API Response Types
// =============================================================================

/// Response from `GET /api/reviews`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReviewsResponse {
    pub success: bool,
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Response from `POST /api/upload`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    pub success: bool,
    #[serde(default)]
    pub uploaded: Option<usize>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Body of `POST /api/upload`.
#[derive(Clone, Debug, Serialize)]
pub struct UploadRequest<'a> {
    pub reviews: &'a [Review],
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    /// Request never got a response.
    Network(String),
    /// Backend answered with `success: false`.
    Server(String),
    /// Response body was not the expected JSON.
    Decode(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
            // Backend messages are already user-facing
            AppError::Server(msg) => write!(f, "{}", msg),
            AppError::Decode(msg) => write!(f, "Invalid response: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annotate_copies_source_fields() {
        let review: Review = serde_json::from_str(
            r#"{"review": "Amazing surgery", "username": "Alicia R.", "time_text": "2 years ago"}"#,
        )
        .unwrap();
        let annotated = review.annotate();

        assert_eq!(annotated.author, "Alicia R.");
        assert_eq!(annotated.date, "2 years ago");
        assert_eq!(annotated.content, "Amazing surgery");
        assert_eq!(annotated.title, "Amazing Surgery at Park Plaza Plastic Surgery");
    }

    #[test]
    fn test_annotate_replaces_backend_title() {
        let review: Review = serde_json::from_str(
            r#"{"review": "Botox was quick", "username": "Ben", "time_text": "", "title": "Botox Treatment"}"#,
        )
        .unwrap();
        assert_eq!(review.annotate().title, "Excellent Experience at Park Plaza Plastic Surgery");
    }

    #[test]
    fn test_upload_request_keeps_extra_fields() {
        let reviews = vec![Review {
            review: "Great care".into(),
            username: "Ana".into(),
            time_text: "a month ago".into(),
            rating: Some(5.0),
            months_ago: Some(1),
            title: String::new(),
            author: String::new(),
            date: String::new(),
            content: String::new(),
        }
        .annotate()];

        let json = serde_json::to_value(UploadRequest { reviews: &reviews }).unwrap();
        assert_eq!(json["reviews"][0]["rating"], 5.0);
        assert_eq!(json["reviews"][0]["author"], "Ana");
        assert_eq!(json["reviews"][0]["title"], "Great Care at Park Plaza Plastic Surgery");
    }

    #[test]
    fn test_server_error_display_is_verbatim() {
        assert_eq!(AppError::Server("Boom".into()).to_string(), "Boom");
        assert!(AppError::Network("offline".into()).to_string().starts_with("Network error"));
    }
}
