//! Review scraping.
//!
//! Fetches a review page, extracts reviews and gives each a title.
//!
//! ```rust,ignore
//! use reviews::scrape::{Scraper, ParseOptions};
//!
//! let scraper = Scraper::new(ParseOptions::new(5.0));
//! let reviews = scraper.scrape("https://www.plasticsandderm.com/patient-reviews.htm").await?;
//! ```

pub mod parser;
pub mod time_text;
pub mod title;

use std::time::Duration;

pub use parser::{parse_reviews, ParseOptions};
pub use time_text::{describe_months_ago, months_ago_from_time_text, months_between};
pub use title::summary_title;

use crate::api::logs::{log_info, log_success, log_warning};
use crate::error::{ScrapeError, ScrapeResult};
use crate::models::Review;

/// Sources serve stripped-down pages to unknown agents.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches and parses review pages.
#[derive(Clone)]
pub struct Scraper {
    client: reqwest::Client,
    options: ParseOptions,
}

impl Scraper {
    pub fn new(options: ParseOptions) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(BROWSER_USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|e| {
                log_warning(format!(
                    "HTTP client setup failed ({}); using defaults without browser agent or timeout",
                    e
                ));
                reqwest::Client::new()
            });
        Self { client, options }
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Scrape one page: fetch, parse, assign missing titles.
    pub async fn scrape(&self, url: &str) -> ScrapeResult<Vec<Review>> {
        log_info(format!("🔎 Scraping reviews from {}", url));

        let html = fetch_page(&self.client, url).await?;
        log_info(format!("   Downloaded {} bytes", html.len()));

        let mut reviews = parse_reviews(&html, &self.options)?;
        assign_titles(&mut reviews);

        log_success(format!("Scraped {} reviews", reviews.len()));
        Ok(reviews)
    }
}

/// GET a page body; non-2xx responses are errors.
pub async fn fetch_page(client: &reqwest::Client, url: &str) -> ScrapeResult<String> {
    let response = client.get(url).send().await.map_err(|e| ScrapeError::Http {
        url: url.to_string(),
        message: e.to_string(),
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ScrapeError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(|e| ScrapeError::Http {
        url: url.to_string(),
        message: e.to_string(),
    })
}

/// Give every untitled review a category title.
pub fn assign_titles(reviews: &mut [Review]) {
    for review in reviews.iter_mut().filter(|r| r.title.trim().is_empty()) {
        review.title = summary_title(&review.review);
    }
}
