//! Review age helpers.
//!
//! Sources express age either relatively ("3 years ago") or as a
//! month and year ("March 2023"). Both are reduced to whole months.

use chrono::{Datelike, NaiveDate};

/// Whole months represented by a relative time text.
///
/// All digits in the text form the number; the unit decides the multiplier.
/// "a year ago" counts as one. Days, weeks and hours round down to zero.
pub fn months_ago_from_time_text(time_text: &str) -> u32 {
    let text = time_text.trim().to_lowercase();
    if text.is_empty() {
        return 0;
    }

    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    let number = if digits.is_empty() {
        if text.starts_with("a ") || text.starts_with("an ") {
            1
        } else {
            return 0;
        }
    } else {
        match digits.parse::<u32>() {
            Ok(n) => n,
            Err(_) => return 0,
        }
    };

    if text.contains("year") {
        number.saturating_mul(12)
    } else if text.contains("month") {
        number
    } else {
        0
    }
}

/// Months from a "%B %Y" date (e.g. "March 2023") to `reference`.
///
/// Returns `None` if the date cannot be parsed; future dates give zero.
pub fn months_between(date_text: &str, reference: NaiveDate) -> Option<u32> {
    let date = parse_month_year(date_text)?;
    let months = (reference.year() - date.year()) * 12
        + (reference.month() as i32 - date.month() as i32);
    Some(months.max(0) as u32)
}

/// First day of the month named by a "%B %Y" date.
pub fn parse_month_year(date_text: &str) -> Option<NaiveDate> {
    let text = date_text.trim();
    if text.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(&format!("1 {}", text), "%d %B %Y").ok()
}

/// Friendly description of a review's age.
pub fn describe_months_ago(months_ago: u32) -> String {
    match months_ago {
        0 => "Posted this month".to_string(),
        1 => "Posted 1 month ago".to_string(),
        n if n < 12 => format!("Posted {} months ago", n),
        12 => "Posted 1 year ago".to_string(),
        n => {
            let years = match n / 12 {
                1 => "1 year".to_string(),
                y => format!("{} years", y),
            };
            match n % 12 {
                0 => format!("Posted {} ago", years),
                1 => format!("Posted {} and 1 month ago", years),
                m => format!("Posted {} and {} months ago", years, m),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jan_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 30).unwrap()
    }

    #[test]
    fn test_relative_years() {
        assert_eq!(months_ago_from_time_text("3 years ago"), 36);
        assert_eq!(months_ago_from_time_text("a year ago"), 12);
    }

    #[test]
    fn test_relative_months_and_days() {
        assert_eq!(months_ago_from_time_text("5 months ago"), 5);
        assert_eq!(months_ago_from_time_text("2 days ago"), 0);
        assert_eq!(months_ago_from_time_text("a week ago"), 0);
    }

    #[test]
    fn test_unparsable_time_text() {
        assert_eq!(months_ago_from_time_text(""), 0);
        assert_eq!(months_ago_from_time_text("Edited"), 0);
    }

    #[test]
    fn test_months_between() {
        assert_eq!(months_between("March 2023", jan_2025()), Some(22));
        assert_eq!(months_between("January 2025", jan_2025()), Some(0));
        assert_eq!(months_between("June 2026", jan_2025()), Some(0));
        assert_eq!(months_between("sometime", jan_2025()), None);
    }

    #[test]
    fn test_describe_months_ago() {
        assert_eq!(describe_months_ago(0), "Posted this month");
        assert_eq!(describe_months_ago(1), "Posted 1 month ago");
        assert_eq!(describe_months_ago(7), "Posted 7 months ago");
        assert_eq!(describe_months_ago(12), "Posted 1 year ago");
        assert_eq!(describe_months_ago(24), "Posted 2 years ago");
        assert_eq!(describe_months_ago(27), "Posted 2 years and 3 months ago");
        assert_eq!(describe_months_ago(13), "Posted 1 year and 1 month ago");
    }
}
