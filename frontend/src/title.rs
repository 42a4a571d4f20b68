//! Display titles for scraped reviews.

use crate::BUSINESS_NAME;

/// Adjectives that can lead a title.
pub const POSITIVE_WORDS: &[&str] = &[
    "amazing",
    "excellent",
    "great",
    "wonderful",
    "outstanding",
    "fantastic",
    "best",
    "perfect",
    "professional",
];

/// Nouns that can follow the adjective.
pub const PROCEDURE_WORDS: &[&str] = &[
    "surgery",
    "treatment",
    "procedure",
    "experience",
    "results",
    "care",
    "service",
];

const DEFAULT_POSITIVE: &str = "excellent";
const DEFAULT_PROCEDURE: &str = "experience";

/// "{Positive} {Procedure} at {business}" from the first vocabulary hits.
///
/// Tokens are whitespace-separated and must match exactly after
/// lower-casing, so trailing punctuation prevents a match.
pub fn generate_review_title(review: &str) -> String {
    let lower = review.to_lowercase();

    let positive = lower
        .split_whitespace()
        .find(|w| POSITIVE_WORDS.contains(w))
        .unwrap_or(DEFAULT_POSITIVE);
    let procedure = lower
        .split_whitespace()
        .find(|w| PROCEDURE_WORDS.contains(w))
        .unwrap_or(DEFAULT_PROCEDURE);

    format!("{} {} at {}", capitalize(positive), capitalize(procedure), BUSINESS_NAME)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_words() {
        assert_eq!(
            generate_review_title("The surgery was amazing and painless"),
            "Amazing Surgery at Park Plaza Plastic Surgery"
        );
    }

    #[test]
    fn test_no_vocabulary_uses_defaults() {
        assert_eq!(
            generate_review_title("Parking was easy to find"),
            "Excellent Experience at Park Plaza Plastic Surgery"
        );
        assert_eq!(generate_review_title(""), "Excellent Experience at Park Plaza Plastic Surgery");
    }

    #[test]
    fn test_first_match_wins_and_case_folds() {
        assert_eq!(
            generate_review_title("GREAT results, best care"),
            "Great Care at Park Plaza Plastic Surgery"
        );
    }

    #[test]
    fn test_punctuation_blocks_match() {
        assert_eq!(
            generate_review_title("Simply amazing! Loved the treatment."),
            "Excellent Experience at Park Plaza Plastic Surgery"
        );
    }
}
