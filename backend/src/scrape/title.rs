//! Category titles for reviews that arrive without one.

/// Procedure keywords, checked in order.
const PROCEDURES: &[(&str, &str)] = &[
    ("breast", "Breast Procedure"),
    ("tummy tuck", "Tummy Tuck"),
    ("lipo", "Liposuction"),
    ("bbl", "BBL"),
    ("botox", "Botox Treatment"),
    ("filler", "Filler Treatment"),
    ("facial", "Facial Treatment"),
    ("laser", "Laser Treatment"),
];

const EXCELLENT_WORDS: &[&str] = &["amazing", "excellent", "fantastic", "wonderful"];
const GREAT_WORDS: &[&str] = &["great", "good", "nice", "happy"];

/// Short category title derived from review text.
///
/// Matching is by substring of the lower-cased text: procedures first,
/// then visit type, then general sentiment.
pub fn summary_title(review_text: &str) -> String {
    let text = review_text.trim().to_lowercase();
    if text.is_empty() {
        return "General Review".to_string();
    }

    if let Some((_, title)) = PROCEDURES.iter().find(|(kw, _)| text.contains(kw)) {
        return title.to_string();
    }

    let title = if text.contains("consult") {
        "Consultation Visit"
    } else if text.contains("follow") && text.contains("up") {
        "Follow-up Visit"
    } else if text.contains("first time") || text.contains("first visit") {
        "First Visit"
    } else if EXCELLENT_WORDS.iter().any(|w| text.contains(w)) {
        "Excellent Experience"
    } else if GREAT_WORDS.iter().any(|w| text.contains(w)) {
        "Great Experience"
    } else if text.contains("staff") {
        "Staff Experience"
    } else if text.contains("professional") {
        "Professional Care"
    } else {
        "Patient Experience"
    };
    title.to_string()
}
