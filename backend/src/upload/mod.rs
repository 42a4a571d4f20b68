//! WordPress publishing.
//!
//! Each review becomes one post of the configured post type, created via
//! the WordPress REST API with an application password.
//!
//! ```rust,ignore
//! use reviews::upload::WordPressClient;
//!
//! let client = WordPressClient::from_env()?;
//! let uploaded = client.upload_reviews(&reviews).await?;
//! ```

use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;

use crate::api::logs::{log_info, log_info_indent, log_success, log_warning};
use crate::config::{Settings, WordPressSettings};
use crate::error::{UploadError, UploadResult};
use crate::models::Review;
use crate::scrape::summary_title;

/// Attempts per review before giving up
const DEFAULT_MAX_RETRIES: u32 = 3;

/// Delay between attempts
const RETRY_DELAY_MS: u64 = 1000;

/// WordPress REST error body
#[derive(Debug, Deserialize)]
struct WordPressError {
    #[serde(default)]
    message: String,
}

/// Client for one WordPress site.
#[derive(Clone)]
pub struct WordPressClient {
    settings: WordPressSettings,
    http: reqwest::Client,
    max_retries: u32,
    retry_delay: Duration,
}

impl WordPressClient {
    pub fn new(settings: WordPressSettings) -> Self {
        Self {
            settings,
            http: reqwest::Client::new(),
            max_retries: DEFAULT_MAX_RETRIES,
            retry_delay: Duration::from_millis(RETRY_DELAY_MS),
        }
    }

    /// Build from `WORDPRESS_*` environment variables.
    pub fn from_env() -> UploadResult<Self> {
        Self::from_settings(&Settings::from_env())
    }

    pub fn from_settings(settings: &Settings) -> UploadResult<Self> {
        settings
            .wordpress
            .clone()
            .map(Self::new)
            .ok_or(UploadError::NotConfigured("WORDPRESS_URL/WORDPRESS_USER/WORDPRESS_APP_PASSWORD"))
    }

    pub fn with_retries(mut self, max_retries: u32, retry_delay: Duration) -> Self {
        self.max_retries = max_retries.max(1);
        self.retry_delay = retry_delay;
        self
    }

    /// Collection endpoint posts are created on.
    pub fn endpoint(&self) -> String {
        format!("{}/wp-json/wp/v2/{}", self.settings.base_url, self.settings.post_type)
    }

    /// Publish all reviews in order. Stops at the first review that
    /// still fails after retries.
    pub async fn upload_reviews(&self, reviews: &[Review]) -> UploadResult<usize> {
        if reviews.is_empty() {
            return Err(UploadError::Empty);
        }

        log_info(format!("📤 Uploading {} reviews to {}", reviews.len(), self.endpoint()));

        for (uploaded, review) in reviews.iter().enumerate() {
            self.upload_with_retries(review).await.map_err(|e| UploadError::Partial {
                reviewer: review.username.clone(),
                uploaded,
                source: Box::new(e),
            })?;
            log_info_indent(format!("{}/{} {}", uploaded + 1, reviews.len(), review.username), 1);
        }

        log_success(format!("Uploaded {} reviews", reviews.len()));
        Ok(reviews.len())
    }

    async fn upload_with_retries(&self, review: &Review) -> UploadResult<()> {
        let mut last_error = None;

        for attempt in 1..=self.max_retries {
            match self.create_post(review).await {
                Ok(()) => return Ok(()),
                Err(e) if !e.is_retryable() => return Err(e),
                Err(e) => {
                    log_warning(format!("Attempt {}/{} failed: {}", attempt, self.max_retries, e));
                    last_error = Some(e);
                    if attempt < self.max_retries {
                        tokio::time::sleep(self.retry_delay).await;
                    }
                }
            }
        }

        Err(last_error.unwrap_or_else(|| UploadError::Http("no attempts made".to_string())))
    }

    async fn create_post(&self, review: &Review) -> UploadResult<()> {
        let response = self
            .http
            .post(self.endpoint())
            .basic_auth(&self.settings.user, Some(&self.settings.app_password))
            .json(&post_body(review))
            .send()
            .await
            .map_err(|e| UploadError::Http(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<WordPressError>(&text)
            .map(|e| e.message)
            .ok()
            .filter(|m| !m.is_empty())
            .unwrap_or(text);
        Err(UploadError::Rejected { status: status.as_u16(), message })
    }
}

/// REST body for one review.
pub fn post_body(review: &Review) -> Value {
    let title = if review.title.trim().is_empty() {
        summary_title(&review.review)
    } else {
        review.title.clone()
    };

    json!({
        "title": title,
        "content": review.review,
        "status": "publish",
        "meta": {
            "reviewer": review.username,
            "rating": review.rating,
            "time_text": review.time_text,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header_exists, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> WordPressClient {
        WordPressClient::new(WordPressSettings {
            base_url: server.uri(),
            user: "editor".into(),
            app_password: "abcd efgh ijkl".into(),
            post_type: "reviews".into(),
        })
        .with_retries(2, Duration::from_millis(1))
    }

    fn sample() -> Vec<Review> {
        vec![
            Review::new("Alicia R.", "Amazing surgery").with_title("Amazing Surgery at Park Plaza Plastic Surgery"),
            Review::new("Ben K.", "Botox was quick"),
        ]
    }

    #[test]
    fn test_post_body_falls_back_to_summary_title() {
        let body = post_body(&Review::new("Ben K.", "Botox was quick").with_age(2, "2 months ago"));
        assert_eq!(body["title"], "Botox Treatment");
        assert_eq!(body["content"], "Botox was quick");
        assert_eq!(body["status"], "publish");
        assert_eq!(body["meta"]["reviewer"], "Ben K.");
        assert_eq!(body["meta"]["time_text"], "2 months ago");
    }

    #[tokio::test]
    async fn test_upload_all_reviews() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/wp-json/wp/v2/reviews"))
            .and(header_exists("authorization"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 1})))
            .expect(2)
            .mount(&server)
            .await;

        let uploaded = client_for(&server).upload_reviews(&sample()).await.unwrap();
        assert_eq!(uploaded, 2);
    }

    #[tokio::test]
    async fn test_upload_reports_rejection() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "code": "rest_cannot_create",
                "message": "Sorry, you are not allowed to create posts as this user."
            })))
            .expect(1)
            .mount(&server)
            .await;

        let err = client_for(&server).upload_reviews(&sample()).await.unwrap_err();
        match err {
            UploadError::Partial { reviewer, uploaded, source } => {
                assert_eq!(reviewer, "Alicia R.");
                assert_eq!(uploaded, 0);
                assert!(source.to_string().contains("not allowed"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_server_error_is_retried() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503))
            .up_to_n_times(1)
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 2})))
            .expect(2)
            .mount(&server)
            .await;

        let uploaded = client_for(&server).upload_reviews(&sample()).await.unwrap();
        assert_eq!(uploaded, 2);
    }

    #[tokio::test]
    async fn test_empty_upload_rejected() {
        let server = MockServer::start().await;
        let err = client_for(&server).upload_reviews(&[]).await.unwrap_err();
        assert!(matches!(err, UploadError::Empty));
    }

    #[test]
    fn test_not_configured() {
        let err = WordPressClient::from_settings(&Settings::default()).err().unwrap();
        assert!(matches!(err, UploadError::NotConfigured(_)));
    }
}
