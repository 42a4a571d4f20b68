//! UI Components for the review manager.
//!
//! # Primitives
//! - [`ui`] - `Button`, `Card`, `Input` styling wrappers
//!
//! # Feature Components
//! - [`ReviewManager`] - Scrape, list and upload reviews
//! - [`ReviewCard`] - A single scraped review
//! - [`LogsPanel`] - Real-time backend logs (SSE)

pub mod ui;
mod review_card;
mod review_manager;
mod logs;

pub use review_card::*;
pub use review_manager::*;
pub use logs::*;
