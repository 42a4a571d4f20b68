//! Review Manager - Frontend Rust/Leptos Application
//!
//! A WebAssembly page for scraping a business's reviews through the local
//! backend and publishing them.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ReviewManager                                               │
//! │  ├── Input + Scrape button      GET  /api/reviews            │
//! │  ├── Error / status banner                                   │
//! │  ├── ReviewCard list + Upload   POST /api/upload             │
//! │  └── LogsPanel                  GET  /api/logs (SSE)         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Review, API responses, logs, errors
//! - [`title`] - Display title heuristic
//! - [`state`] - Page state and its transitions
//! - [`components`] - UI components
//! - [`services`] - Backend communication

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod title;
pub mod state;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Reviews
    Review,
    // Logs
    LogEntry, LogLevel,
    // API
    ReviewsResponse, UploadResponse,
    // Errors
    AppError, AppResult,
};

pub use title::generate_review_title;
pub use state::ReviewBoard;

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Review Manager"/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    let (logs, set_logs) = create_signal(Vec::<LogEntry>::new());

    // Initialize SSE connection ONCE at app startup
    init_sse_logs(set_logs);

    view! {
        <ReviewManager logs=logs set_logs=set_logs/>
    }
}
