//! Backend services.
//!
//! - [`reviews`] - Scrape and upload calls to the review backend

pub mod reviews;

pub use reviews::*;
