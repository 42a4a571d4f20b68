//! Merge hand-written titles into scraped reviews.
//!
//! Titles are matched to reviews by reviewer name.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::MergeResult;
use crate::models::{Review, TitleSheet};

/// Apply titles by reviewer name; returns how many reviews changed.
///
/// Reviews without a matching reviewer keep their title. When a reviewer
/// appears more than once in the sheet, the last entry wins.
pub fn merge_titles(reviews: &mut [Review], titles: &TitleSheet) -> usize {
    let by_reviewer: HashMap<&str, &str> = titles
        .reviews
        .iter()
        .map(|t| (t.reviewer.as_str(), t.title.as_str()))
        .collect();

    let mut changed = 0;
    for review in reviews.iter_mut() {
        if let Some(title) = by_reviewer.get(review.username.as_str()) {
            if review.title != *title {
                review.title = title.to_string();
                changed += 1;
            }
        }
    }
    changed
}

/// File-based merge: read reviews and titles, return the merged list.
pub fn merge_title_files(reviews_path: &Path, titles_path: &Path) -> MergeResult<(Vec<Review>, usize)> {
    let mut reviews: Vec<Review> = serde_json::from_str(&fs::read_to_string(reviews_path)?)?;
    let titles: TitleSheet = serde_json::from_str(&fs::read_to_string(titles_path)?)?;
    let changed = merge_titles(&mut reviews, &titles);
    Ok((reviews, changed))
}
