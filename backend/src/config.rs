//! Service configuration.
//!
//! Settings come from the environment (optionally via a `.env` file)
//! and can be overridden by CLI flags.

use std::env;
use std::path::PathBuf;

/// Default port; the review manager UI talks to `127.0.0.1:5000`.
pub const DEFAULT_PORT: u16 = 5000;

/// Default review page scraped when no URL is given.
pub const DEFAULT_SOURCE_URL: &str = "https://www.plasticsandderm.com/patient-reviews.htm";

/// Only reviews rated at least this high are kept.
pub const DEFAULT_MIN_RATING: f64 = 5.0;

/// Where scrape snapshots are written.
pub const DEFAULT_ARCHIVE_DIR: &str = ".reviews/archive";

/// WordPress post type reviews are published as.
pub const DEFAULT_POST_TYPE: &str = "reviews";

/// WordPress connection settings.
#[derive(Debug, Clone, PartialEq)]
pub struct WordPressSettings {
    /// Site root, e.g. `https://example.com`
    pub base_url: String,
    pub user: String,
    /// Application password (Users → Profile → Application Passwords)
    pub app_password: String,
    pub post_type: String,
}

/// Complete service settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub port: u16,
    pub source_url: String,
    pub min_rating: f64,
    pub archive_dir: PathBuf,
    /// `None` when any required WordPress variable is missing
    pub wordpress: Option<WordPressSettings>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            source_url: DEFAULT_SOURCE_URL.to_string(),
            min_rating: DEFAULT_MIN_RATING,
            archive_dir: PathBuf::from(DEFAULT_ARCHIVE_DIR),
            wordpress: None,
        }
    }
}

impl Settings {
    /// Load settings from the process environment, reading `.env` first.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup.
    ///
    /// Unparsable numeric values fall back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let wordpress = match (
            non_empty("WORDPRESS_URL"),
            non_empty("WORDPRESS_USER"),
            non_empty("WORDPRESS_APP_PASSWORD"),
        ) {
            (Some(base_url), Some(user), Some(app_password)) => Some(WordPressSettings {
                base_url: base_url.trim_end_matches('/').to_string(),
                user,
                app_password,
                post_type: non_empty("WORDPRESS_POST_TYPE")
                    .unwrap_or_else(|| DEFAULT_POST_TYPE.to_string()),
            }),
            _ => None,
        };

        Self {
            port: non_empty("REVIEWS_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            source_url: non_empty("REVIEWS_SOURCE_URL").unwrap_or(defaults.source_url),
            min_rating: non_empty("REVIEWS_MIN_RATING")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.min_rating),
            archive_dir: non_empty("REVIEWS_ARCHIVE_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.archive_dir),
            wordpress,
        }
    }
}
