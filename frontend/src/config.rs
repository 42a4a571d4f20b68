//! Application configuration.
//!
//! Compile-time settings for the review manager frontend.

/// Backend API base URL.
///
/// The local review service that scrapes and uploads.
pub const BACKEND_URL: &str = "http://127.0.0.1:5000";

/// Business name appended to every generated review title.
pub const BUSINESS_NAME: &str = "Park Plaza Plastic Surgery";

/// Maximum logs to keep in memory.
pub const MAX_LOG_ENTRIES: usize = 100;
