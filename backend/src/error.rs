//! Error types for the review scraping and publishing service.
//!
//! - [`ScrapeError`] - Fetching and parsing review pages
//! - [`UploadError`] - Publishing reviews to WordPress
//! - [`ArchiveError`] - Scrape snapshot storage
//! - [`MergeError`] - Title merge files
//! - [`ServerError`] - Top-level HTTP server errors
//!
//! Conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use thiserror::Error;

// =============================================================================
// Scrape Errors
// =============================================================================

/// Errors while fetching or parsing a review page.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// HTTP request failed.
    #[error("Failed to fetch {url}: {message}")]
    Http { url: String, message: String },

    /// Source answered with a non-success status.
    #[error("Source returned HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    /// Page could not be interpreted.
    #[error("Failed to parse reviews: {0}")]
    Parse(String),

    /// Another scrape holds the lock.
    #[error("A scrape is already in progress")]
    Busy,
}

// =============================================================================
// Upload Errors
// =============================================================================

/// Errors while publishing reviews.
#[derive(Debug, Error)]
pub enum UploadError {
    /// Missing WordPress settings.
    #[error("Upload target not configured: {0} is not set")]
    NotConfigured(&'static str),

    /// Nothing to publish.
    #[error("No reviews to upload")]
    Empty,

    /// Transport failure.
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// WordPress refused the entry.
    #[error("WordPress rejected the entry (HTTP {status}): {message}")]
    Rejected { status: u16, message: String },

    /// Upload stopped part way through.
    #[error("Upload of review by '{reviewer}' failed after {uploaded} uploaded: {source}")]
    Partial {
        reviewer: String,
        uploaded: usize,
        #[source]
        source: Box<UploadError>,
    },
}

impl UploadError {
    /// Transport failures and server-side (5xx, 429) rejections may succeed
    /// on a later attempt; other rejections are permanent.
    pub fn is_retryable(&self) -> bool {
        match self {
            UploadError::Http(_) => true,
            UploadError::Rejected { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }
}

// =============================================================================
// Archive Errors
// =============================================================================

/// Errors from the scrape archive.
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// Snapshot not found.
    #[error("Snapshot not found: {0}")]
    NotFound(String),

    /// IO error.
    #[error("Archive IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error.
    #[error("Archive JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// =============================================================================
// Merge Errors
// =============================================================================

/// Errors while merging titles into a review file.
#[derive(Debug, Error)]
pub enum MergeError {
    /// Failed to read or write a file.
    #[error("Failed to access file: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid JSON content.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

// =============================================================================
// Server Errors
// =============================================================================

/// HTTP server errors.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Scrape failed.
    #[error("Scrape error: {0}")]
    Scrape(#[from] ScrapeError),

    /// Upload failed.
    #[error("Upload error: {0}")]
    Upload(#[from] UploadError),

    /// Could not bind or serve.
    #[error("Server IO error: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for scrape operations.
pub type ScrapeResult<T> = Result<T, ScrapeError>;

/// Result type for upload operations.
pub type UploadResult<T> = Result<T, UploadError>;

/// Result type for archive operations.
pub type ArchiveResult<T> = Result<T, ArchiveError>;

/// Result type for merge operations.
pub type MergeResult<T> = Result<T, MergeError>;

/// Result type for server operations.
pub type ServerResult<T> = Result<T, ServerError>;
