//! HTTP server for the review manager.
//!
//! # API Endpoints
//!
//! | Method | Path           | Description                          |
//! |--------|----------------|--------------------------------------|
//! | GET    | `/health`      | Health check                         |
//! | GET    | `/api/reviews` | Scrape reviews (optional `?url=`)    |
//! | POST   | `/api/upload`  | Publish reviews to WordPress         |
//! | GET    | `/api/logs`    | SSE stream for real-time logs        |

use axum::{
    extract::{Query, State},
    http::{header, Method, StatusCode},
    response::{sse::Event, Json, Sse},
    routing::{get, post},
    Router,
};
use futures::stream::Stream;
use serde_json::{json, Value};
use std::{convert::Infallible, net::SocketAddr, sync::Arc, time::Duration};
use tokio::sync::Mutex;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt as _;
use tower_http::cors::CorsLayer;

use super::logs::{log_error, log_warning, LOG_BROADCASTER};
use super::types::{ReviewsQuery, ReviewsResponse, UploadRequest, UploadResponse};
use crate::archive::ReviewArchive;
use crate::config::Settings;
use crate::error::{ScrapeError, ServerResult, UploadError};
use crate::scrape::{ParseOptions, Scraper};
use crate::upload::WordPressClient;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub scraper: Scraper,
    pub default_source: String,
    /// Held for the whole scrape, so it doubles as the one-scrape-at-a-time lock
    pub archive: Arc<Mutex<ReviewArchive>>,
    /// `None` when WordPress is not configured
    pub uploader: Option<WordPressClient>,
}

impl AppState {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            scraper: Scraper::new(ParseOptions::new(settings.min_rating)),
            default_source: settings.source_url.clone(),
            archive: Arc::new(Mutex::new(ReviewArchive::with_dir(&settings.archive_dir))),
            uploader: WordPressClient::from_settings(settings).ok(),
        }
    }
}

/// Routes with permissive CORS; the UI is served from another origin.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(health))
        .route("/health", get(health))
        .route("/api/reviews", get(get_reviews))
        .route("/api/upload", post(upload_reviews))
        .route("/api/logs", get(sse_logs))
        .layer(cors)
        .with_state(state)
}

/// Start the HTTP server
pub async fn start_server(settings: Settings) -> ServerResult<()> {
    let state = AppState::from_settings(&settings);
    if state.uploader.is_none() {
        log_warning("WordPress is not configured; /api/upload will answer 503");
    }
    let app = build_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], settings.port));
    println!("🚀 Review server running on http://{}", addr);
    println!("   GET  /api/reviews - Scrape reviews ({})", settings.source_url);
    println!("   POST /api/upload  - Upload reviews to WordPress");
    println!("   GET  /api/logs    - SSE log stream");
    println!("   GET  /health      - Health check");
    println!();

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Health check endpoint
async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "reviews",
        "version": env!("CARGO_PKG_VERSION"),
        "uploadConfigured": state.uploader.is_some(),
        "endpoints": {
            "reviews": "GET /api/reviews",
            "upload": "POST /api/upload",
            "logs": "GET /api/logs (SSE)"
        }
    }))
}

/// SSE endpoint for real-time log streaming
async fn sse_logs() -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let rx = LOG_BROADCASTER.subscribe();

    let stream = BroadcastStream::new(rx).filter_map(|result| {
        let entry = result.ok()?;
        let json = serde_json::to_string(&entry).ok()?;
        Some(Ok(Event::default().data(json)))
    });

    Sse::new(stream).keep_alive(
        axum::response::sse::KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("keep-alive"),
    )
}

/// Scrape endpoint
async fn get_reviews(
    State(state): State<AppState>,
    Query(query): Query<ReviewsQuery>,
) -> (StatusCode, Json<ReviewsResponse>) {
    let Ok(mut archive) = state.archive.try_lock() else {
        log_warning("Rejected scrape request: another scrape is running");
        return (
            StatusCode::CONFLICT,
            Json(ReviewsResponse::failed(ScrapeError::Busy.to_string())),
        );
    };

    let url = query
        .url
        .map(|u| u.trim().to_string())
        .filter(|u| !u.is_empty())
        .unwrap_or_else(|| state.default_source.clone());

    match state.scraper.scrape(&url).await {
        Ok(reviews) => {
            if let Err(e) = archive.save(&url, &reviews) {
                log_warning(format!("Could not archive scrape: {}", e));
            }
            (StatusCode::OK, Json(ReviewsResponse::ok(reviews)))
        }
        Err(e) => {
            log_error(format!("Scrape failed: {}", e));
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ReviewsResponse::failed(e.to_string())),
            )
        }
    }
}

/// Upload endpoint
async fn upload_reviews(
    State(state): State<AppState>,
    Json(request): Json<UploadRequest>,
) -> (StatusCode, Json<UploadResponse>) {
    let Some(uploader) = state.uploader.as_ref() else {
        let err = UploadError::NotConfigured("WORDPRESS_URL/WORDPRESS_USER/WORDPRESS_APP_PASSWORD");
        return (StatusCode::SERVICE_UNAVAILABLE, Json(UploadResponse::failed(err.to_string())));
    };

    match uploader.upload_reviews(&request.reviews).await {
        Ok(uploaded) => (StatusCode::OK, Json(UploadResponse::ok(uploaded))),
        Err(e) => {
            log_error(format!("Upload failed: {}", e));
            let status = match &e {
                UploadError::Empty => StatusCode::BAD_REQUEST,
                UploadError::NotConfigured(_) => StatusCode::SERVICE_UNAVAILABLE,
                _ => StatusCode::BAD_GATEWAY,
            };
            (status, Json(UploadResponse::failed(e.to_string())))
        }
    }
}
