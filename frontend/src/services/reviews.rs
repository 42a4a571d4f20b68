//! HTTP client for the review backend.
//!
//! | Function           | Endpoint            |
//! |--------------------|---------------------|
//! | [`fetch_reviews`]  | `GET /api/reviews`  |
//! | [`upload_reviews`] | `POST /api/upload`  |
//!
//! The backend answers with `{success, ..., error}` on every status code,
//! so the body is decoded first and the status only matters when the body
//! isn't JSON.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::types::{
    AppError, AppResult, Review, ReviewsResponse, UploadRequest, UploadResponse,
};

/// Scrape reviews, optionally from `source_url` instead of the backend default.
///
/// Returned reviews are already annotated with display fields.
pub async fn fetch_reviews(backend_url: &str, source_url: &str) -> AppResult<Vec<Review>> {
    let url = format!("{}/api/reviews", backend_url);
    let source_url = source_url.trim();

    let mut request = Request::get(&url);
    if !source_url.is_empty() {
        request = request.query([("url", source_url)]);
    }

    let response = request
        .send()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;

    reviews_from_response(decode(response).await?)
}

/// Send the current review list for publishing. Returns the uploaded count.
pub async fn upload_reviews(backend_url: &str, reviews: &[Review]) -> AppResult<usize> {
    let url = format!("{}/api/upload", backend_url);

    let request = Request::post(&url)
        .json(&UploadRequest { reviews })
        .map_err(|e| AppError::Decode(format!("Failed to build request: {}", e)))?;

    let response = request
        .send()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;

    upload_count(decode(response).await?, reviews.len())
}

async fn decode<T: DeserializeOwned>(response: Response) -> AppResult<T> {
    let status = response.status();
    let ok = response.ok();

    response.json::<T>().await.map_err(|e| {
        if ok {
            AppError::Decode(e.to_string())
        } else {
            AppError::Server(format!("Server error ({})", status))
        }
    })
}

/// Unwrap a scrape response into annotated reviews.
pub fn reviews_from_response(response: ReviewsResponse) -> AppResult<Vec<Review>> {
    if response.success {
        Ok(response.reviews.into_iter().map(Review::annotate).collect())
    } else {
        Err(AppError::Server(
            response.error.unwrap_or_else(|| "Failed to scrape reviews".into()),
        ))
    }
}

/// Unwrap an upload response; `sent` is used when the count is missing.
pub fn upload_count(response: UploadResponse, sent: usize) -> AppResult<usize> {
    if response.success {
        Ok(response.uploaded.unwrap_or(sent))
    } else {
        Err(AppError::Server(
            response.error.unwrap_or_else(|| "Failed to upload reviews".into()),
        ))
    }
}
