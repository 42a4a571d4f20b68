//! # Reviews - scrape business reviews and publish them to WordPress
//!
//! Backend for the review manager UI. It scrapes review pages into a
//! uniform [`Review`] list and publishes that list as WordPress posts.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ Review page │────▶│   Scraper   │────▶│   Archive   │     │  WordPress  │
//! │   (HTML)    │     │ (parse+title│     │ (snapshots) │     │  (REST API) │
//! └─────────────┘     └──────┬──────┘     └─────────────┘     └──────▲──────┘
//!                            │  GET /api/reviews    POST /api/upload │
//!                            └────────────▶  UI  ────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use reviews::{ParseOptions, Scraper};
//!
//! #[tokio::main]
//! async fn main() {
//!     let scraper = Scraper::new(ParseOptions::new(5.0));
//!     let reviews = scraper.scrape("https://www.plasticsandderm.com/patient-reviews.htm").await.unwrap();
//!     println!("Scraped {} reviews", reviews.len());
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`config`] - Environment-driven settings
//! - [`models`] - Review and title sheet models
//! - [`scrape`] - Page fetching, parsing and titling
//! - [`upload`] - WordPress publishing
//! - [`archive`] - Scrape snapshots on disk
//! - [`merge`] - Hand-written title merging
//! - [`api`] - HTTP API server

// Core modules
pub mod config;
pub mod error;
pub mod models;

// Scraping
pub mod scrape;

// Publishing
pub mod upload;

// Storage
pub mod archive;
pub mod merge;

// HTTP API
pub mod api;

// =============================================================================
// Re-exports - Errors
// =============================================================================

pub use error::{
    ArchiveError,
    MergeError,
    ScrapeError,
    ServerError,
    UploadError,
};

// =============================================================================
// Re-exports - Models & Config
// =============================================================================

pub use config::{Settings, WordPressSettings};
pub use models::{Review, ReviewDate, ReviewerTitle, TitleSheet};

// =============================================================================
// Re-exports - Scraping
// =============================================================================

pub use scrape::{
    assign_titles,
    describe_months_ago,
    fetch_page,
    months_ago_from_time_text,
    months_between,
    parse_reviews,
    summary_title,
    ParseOptions,
    Scraper,
};

// =============================================================================
// Re-exports - Publishing & Storage
// =============================================================================

pub use upload::WordPressClient;
pub use archive::{ReviewArchive, Snapshot};
pub use merge::{merge_title_files, merge_titles};

// =============================================================================
// Re-exports - API
// =============================================================================

pub use api::types::{ReviewsResponse, UploadRequest, UploadResponse};

// Server
pub mod server {
    pub use crate::api::server::{build_router, start_server, AppState};
}
