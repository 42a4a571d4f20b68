//! Review manager page state.
//!
//! [`ReviewBoard`] is plain data with transition methods; the page wraps it
//! in a single `RwSignal` and calls the transitions from event handlers.
//!
//! ```text
//!  idle ──begin_scrape──▶ loading ──finish_scrape(Ok)──▶ idle (reviews replaced)
//!                                 └─finish_scrape(Err)─▶ idle (error, reviews kept)
//!
//!  idle ──begin_upload──▶ uploading ──finish_upload──▶ idle (reviews untouched)
//! ```

use crate::types::{AppResult, Review};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReviewBoard {
    /// Current review list, in server order
    pub reviews: Vec<Review>,
    /// Scrape in flight
    pub loading: bool,
    /// Upload in flight
    pub uploading: bool,
    /// Source URL typed by the user
    pub url: String,
    pub error: Option<String>,
    pub status: Option<String>,
}

impl ReviewBoard {
    pub fn set_url(&mut self, url: String) {
        self.url = url;
    }

    pub fn can_scrape(&self) -> bool {
        !self.loading
    }

    pub fn can_upload(&self) -> bool {
        !self.uploading && !self.reviews.is_empty()
    }

    pub fn begin_scrape(&mut self) {
        self.loading = true;
        self.error = None;
        self.status = Some("Scraping reviews...".into());
    }

    pub fn finish_scrape(&mut self, result: AppResult<Vec<Review>>) {
        match result {
            Ok(reviews) => {
                self.status = Some(format!("Successfully scraped {} reviews", reviews.len()));
                self.reviews = reviews;
            }
            Err(e) => {
                self.error = Some(format!("Error scraping reviews: {}", e));
            }
        }
        self.loading = false;
    }

    pub fn begin_upload(&mut self) {
        self.uploading = true;
        self.error = None;
    }

    pub fn finish_upload(&mut self, result: AppResult<usize>) {
        match result {
            Ok(_) => self.status = Some("Successfully uploaded all reviews!".into()),
            Err(e) => self.error = Some(format!("Error uploading reviews: {}", e)),
        }
        self.uploading = false;
    }

    /// Status banner text; hidden while an error is shown.
    pub fn visible_status(&self) -> Option<&str> {
        if self.error.is_some() {
            None
        } else {
            self.status.as_deref()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AppError;

    fn scraped(username: &str, text: &str, time_text: &str) -> Review {
        let json = serde_json::json!({
            "username": username,
            "review": text,
            "time_text": time_text,
        });
        serde_json::from_value::<Review>(json).unwrap().annotate()
    }

    fn loaded_board() -> ReviewBoard {
        let mut board = ReviewBoard::default();
        board.begin_scrape();
        board.finish_scrape(Ok(vec![
            scraped("Alicia R.", "amazing surgery", "2 years ago"),
            scraped("Marco T.", "Quick visit", "3 months ago"),
        ]));
        board
    }

    #[test]
    fn test_scrape_success_replaces_reviews() {
        let board = loaded_board();

        assert_eq!(board.reviews.len(), 2);
        assert_eq!(board.visible_status(), Some("Successfully scraped 2 reviews"));
        assert!(!board.loading);

        let first = &board.reviews[0];
        assert_eq!(first.author, "Alicia R.");
        assert_eq!(first.date, "2 years ago");
        assert_eq!(first.content, "amazing surgery");
        assert_eq!(first.title, "Amazing Surgery at Park Plaza Plastic Surgery");
    }

    #[test]
    fn test_begin_scrape_disables_scrape() {
        let mut board = ReviewBoard::default();
        assert!(board.can_scrape());

        board.begin_scrape();
        assert!(!board.can_scrape());
        assert_eq!(board.visible_status(), Some("Scraping reviews..."));
    }

    #[test]
    fn test_scrape_failure_keeps_reviews() {
        let mut board = loaded_board();
        let before = board.reviews.clone();

        board.begin_scrape();
        board.finish_scrape(Err(AppError::Server("Failed to scrape reviews".into())));

        assert_eq!(board.reviews, before);
        assert_eq!(
            board.error.as_deref(),
            Some("Error scraping reviews: Failed to scrape reviews")
        );
        assert_eq!(board.visible_status(), None);
        assert!(board.can_scrape());
    }

    #[test]
    fn test_new_scrape_clears_previous_error() {
        let mut board = ReviewBoard::default();
        board.begin_scrape();
        board.finish_scrape(Err(AppError::Network("offline".into())));
        assert!(board.error.is_some());

        board.begin_scrape();
        assert_eq!(board.error, None);
    }

    #[test]
    fn test_upload_success_leaves_reviews() {
        let mut board = loaded_board();
        let before = board.reviews.clone();

        board.begin_upload();
        assert!(!board.can_upload());
        board.finish_upload(Ok(2));

        assert_eq!(board.reviews, before);
        assert_eq!(board.visible_status(), Some("Successfully uploaded all reviews!"));
        assert!(board.can_upload());
    }

    #[test]
    fn test_upload_failure_message() {
        let mut board = loaded_board();
        board.begin_upload();
        board.finish_upload(Err(AppError::Server("Failed to upload reviews".into())));

        assert_eq!(
            board.error.as_deref(),
            Some("Error uploading reviews: Failed to upload reviews")
        );
        assert_eq!(board.reviews.len(), 2);
    }

    #[test]
    fn test_upload_disabled_when_empty() {
        let board = ReviewBoard::default();
        assert!(!board.can_upload());
    }
}
