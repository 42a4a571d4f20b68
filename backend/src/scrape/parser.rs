//! HTML review extraction.
//!
//! Two layouts are recognised:
//!
//! - Google local review cards (`div.gws-localreviews__google-review`)
//! - Practice "Patient-Review" lists (`.Patient-Review li`)
//!
//! Cards that lack a required element are skipped with a warning.

use chrono::NaiveDate;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use super::time_text::{describe_months_ago, months_ago_from_time_text, months_between, parse_month_year};
use crate::api::logs::{log_info_indent, log_warning};
use crate::error::{ScrapeError, ScrapeResult};
use crate::models::{Review, ReviewDate};

/// Filters applied while parsing.
#[derive(Debug, Clone, Copy)]
pub struct ParseOptions {
    /// Reviews below this rating are dropped
    pub min_rating: f64,
    /// "Now" for converting absolute dates into review age
    pub reference_date: NaiveDate,
}

impl ParseOptions {
    pub fn new(min_rating: f64) -> Self {
        Self {
            min_rating,
            reference_date: chrono::Local::now().date_naive(),
        }
    }

    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = date;
        self
    }
}

/// Compiled selectors for both layouts.
struct Selectors {
    google_card: Selector,
    google_user: Selector,
    google_rating: Selector,
    google_time: Selector,
    google_text: Selector,
    patient_item: Selector,
    paragraph: Selector,
}

impl Selectors {
    fn compile() -> ScrapeResult<Self> {
        Ok(Self {
            google_card: selector("div.gws-localreviews__google-review")?,
            google_user: selector("div.TSUbDb")?,
            google_rating: selector("span.z3HNkc")?,
            google_time: selector("span.dehysf")?,
            google_text: selector(".Jtu6Td")?,
            patient_item: selector(".Patient-Review li")?,
            paragraph: selector("p")?,
        })
    }
}

fn selector(css: &str) -> ScrapeResult<Selector> {
    Selector::parse(css).map_err(|e| ScrapeError::Parse(format!("bad selector '{}': {}", css, e)))
}

/// Extract all reviews from a page, in document order.
pub fn parse_reviews(html: &str, options: &ParseOptions) -> ScrapeResult<Vec<Review>> {
    let document = Html::parse_document(html);
    let selectors = Selectors::compile()?;

    let google_cards: Vec<ElementRef> = document.select(&selectors.google_card).collect();
    if !google_cards.is_empty() {
        log_info_indent(format!("Found {} Google review cards", google_cards.len()), 1);
        return Ok(google_cards
            .into_iter()
            .enumerate()
            .filter_map(|(i, card)| match parse_google_card(card, &selectors) {
                Some(review) => Some(review),
                None => {
                    log_warning(format!("Skipped review card {}: missing fields", i + 1));
                    None
                }
            })
            .filter(|r| keep(r, options))
            .collect());
    }

    let items: Vec<ElementRef> = document.select(&selectors.patient_item).collect();
    if !items.is_empty() {
        log_info_indent(format!("Found {} patient review items", items.len()), 1);
        let star = star_pattern()?;
        return Ok(items
            .into_iter()
            .filter_map(|item| parse_patient_item(item, &selectors, &star, options))
            .filter(|r| keep(r, options))
            .collect());
    }

    log_warning("Could not find a reviews container on the page");
    Ok(Vec::new())
}

fn keep(review: &Review, options: &ParseOptions) -> bool {
    !review.is_blank() && review.rating >= options.min_rating
}

fn parse_google_card(card: ElementRef, selectors: &Selectors) -> Option<Review> {
    let username = first_text(card, &selectors.google_user)?;
    let rating = card
        .select(&selectors.google_rating)
        .next()?
        .value()
        .attr("aria-label")
        .and_then(rating_from_label)?;
    let time_text = first_text(card, &selectors.google_time)?;
    let body = first_text(card, &selectors.google_text)?;

    let months_ago = months_ago_from_time_text(&time_text);
    Some(Review::new(username, body).with_rating(rating).with_age(months_ago, time_text))
}

/// "Rated 5.0 out of 5," -> 5.0
fn rating_from_label(label: &str) -> Option<f64> {
    label
        .split_whitespace()
        .nth(1)?
        .trim_end_matches(',')
        .parse()
        .ok()
}

fn parse_patient_item(
    item: ElementRef,
    selectors: &Selectors,
    star: &Regex,
    options: &ParseOptions,
) -> Option<Review> {
    let paragraphs: Vec<ElementRef> = item.select(&selectors.paragraph).collect();
    let (meta, rest) = paragraphs.split_first()?;

    let stars = count_full_stars(&meta.html(), star);
    let rating = if stars == 0 { 5.0 } else { stars as f64 };

    let parts: Vec<&str> = meta
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty() && !t.starts_with('★'))
        .collect();
    let username = parts.first().copied().unwrap_or("Anonymous");
    let date_text = parts.get(1).copied().unwrap_or("");

    let body = rest
        .iter()
        .map(|p| normalize_ws(&p.text().collect::<String>()))
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    if body.is_empty() {
        return None;
    }

    let months_ago = months_between(date_text, options.reference_date).unwrap_or(0);
    let mut review = Review::new(username, body)
        .with_rating(rating)
        .with_age(months_ago, describe_months_ago(months_ago));
    review.review_date = parse_month_year(date_text).map(ReviewDate::from);
    Some(review)
}

fn star_pattern() -> ScrapeResult<Regex> {
    Regex::new(r"fa-star(-o)?").map_err(|e| ScrapeError::Parse(e.to_string()))
}

/// Count `fa-star` icons, ignoring empty `fa-star-o` ones.
fn count_full_stars(html: &str, star: &Regex) -> usize {
    star.captures_iter(html)
        .filter(|c| c.get(1).is_none())
        .count()
}

fn first_text(root: ElementRef, selector: &Selector) -> Option<String> {
    let text = normalize_ws(&root.select(selector).next()?.text().collect::<String>());
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

fn normalize_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> ParseOptions {
        ParseOptions::new(5.0).with_reference_date(NaiveDate::from_ymd_opt(2025, 1, 30).unwrap())
    }

    const GOOGLE_PAGE: &str = r#"
        <html><body>
        <div class="WMbnJf gws-localreviews__google-review">
            <div class="TSUbDb">Alicia R.</div>
            <span class="z3HNkc" aria-label="Rated 5.0 out of 5,"></span>
            <span class="dehysf">2 years ago</span>
            <span class="Jtu6Td">Amazing surgery,
                great staff.</span>
        </div>
        <div class="WMbnJf gws-localreviews__google-review">
            <div class="TSUbDb">Ben K.</div>
            <span class="z3HNkc" aria-label="Rated 3.0 out of 5,"></span>
            <span class="dehysf">a month ago</span>
            <span class="Jtu6Td">It was fine.</span>
        </div>
        <div class="WMbnJf gws-localreviews__google-review">
            <div class="TSUbDb">No Text</div>
            <span class="z3HNkc" aria-label="Rated 5.0 out of 5,"></span>
            <span class="dehysf">a week ago</span>
        </div>
        </body></html>
    "#;

    const PATIENT_PAGE: &str = r#"
        <html><body>
        <div class="Patient-Review"><ul>
            <li>
                <p><i class="fa fa-star"></i><i class="fa fa-star"></i><i class="fa fa-star"></i><i class="fa fa-star"></i><i class="fa fa-star"></i><br>Jennifer M.<br>March 2023</p>
                <p>My breast procedure went perfectly.</p>
                <p>Thank you!</p>
            </li>
            <li>
                <p><i class="fa fa-star"></i><i class="fa fa-star"></i><i class="fa fa-star-o"></i><br>Grumpy G.<br>May 2024</p>
                <p>Long wait.</p>
            </li>
            <li>
                <p>Empty Review<br>June 2024</p>
            </li>
        </ul></div>
        </body></html>
    "#;

    #[test]
    fn test_google_cards() {
        let reviews = parse_reviews(GOOGLE_PAGE, &options()).unwrap();

        // Ben is below min rating; the last card has no text
        assert_eq!(reviews.len(), 1);
        let r = &reviews[0];
        assert_eq!(r.username, "Alicia R.");
        assert_eq!(r.review, "Amazing surgery, great staff.");
        assert_eq!(r.rating, 5.0);
        assert_eq!(r.time_text, "2 years ago");
        assert_eq!(r.months_ago, 24);
    }

    #[test]
    fn test_google_cards_lower_threshold() {
        let opts = ParseOptions { min_rating: 1.0, ..options() };
        let reviews = parse_reviews(GOOGLE_PAGE, &opts).unwrap();
        assert_eq!(reviews.len(), 2);
        assert_eq!(reviews[1].username, "Ben K.");
        assert_eq!(reviews[1].months_ago, 1);
    }

    #[test]
    fn test_patient_review_list() {
        let opts = ParseOptions { min_rating: 0.0, ..options() };
        let reviews = parse_reviews(PATIENT_PAGE, &opts).unwrap();

        assert_eq!(reviews.len(), 2);
        let first = &reviews[0];
        assert_eq!(first.username, "Jennifer M.");
        assert_eq!(first.review, "My breast procedure went perfectly. Thank you!");
        assert_eq!(first.rating, 5.0);
        assert_eq!(first.months_ago, 22);
        assert_eq!(first.time_text, "Posted 1 year and 10 months ago");
        assert_eq!(first.review_date, Some(ReviewDate { year: 2023, month: 3, day: 1 }));

        assert_eq!(reviews[1].username, "Grumpy G.");
        assert_eq!(reviews[1].rating, 2.0);
    }

    #[test]
    fn test_patient_min_rating_applies() {
        let reviews = parse_reviews(PATIENT_PAGE, &options()).unwrap();
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].username, "Jennifer M.");
    }

    #[test]
    fn test_patient_item_without_name_or_stars() {
        let page = r#"<div class="Patient-Review"><ul>
            <li><p>★★★★★</p><p>Lovely staff.</p></li>
        </ul></div>"#;

        let reviews = parse_reviews(page, &options()).unwrap();
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].username, "Anonymous");
        assert_eq!(reviews[0].rating, 5.0);
        assert_eq!(reviews[0].review, "Lovely staff.");
    }

    #[test]
    fn test_patient_item_unparsable_date() {
        let page = r#"<div class="Patient-Review"><ul>
            <li><p><i class="fa fa-star"></i><br>Kim<br>nonsense date</p><p>Nice visit.</p></li>
        </ul></div>"#;
        let opts = ParseOptions { min_rating: 0.0, ..options() };

        let reviews = parse_reviews(page, &opts).unwrap();
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].username, "Kim");
        assert_eq!(reviews[0].months_ago, 0);
        assert_eq!(reviews[0].time_text, "Posted this month");
        assert_eq!(reviews[0].review_date, None);
    }

    #[test]
    fn test_unknown_layout_is_empty() {
        let reviews = parse_reviews("<html><body><p>Nothing here</p></body></html>", &options()).unwrap();
        assert!(reviews.is_empty());
    }

    #[test]
    fn test_rating_label() {
        assert_eq!(rating_from_label("Rated 4.0 out of 5,"), Some(4.0));
        assert_eq!(rating_from_label("Rated"), None);
    }

    #[test]
    fn test_star_count_ignores_empty_stars() {
        let star = star_pattern().unwrap();
        let html = r#"<i class="fa-star"></i><i class="fa-star"></i><i class="fa-star-o"></i>"#;
        assert_eq!(count_full_stars(html, &star), 2);
    }
}
