//! Small formatting helpers shared by the sections.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Renders a backend or catalog date as e.g. "January 15, 2025".
///
/// Accepts RFC 3339 timestamps, naive `YYYY-MM-DDTHH:MM:SS[.f]` timestamps and plain
/// `YYYY-MM-DD` dates. Anything else is returned unchanged.
#[must_use]
pub fn format_date(raw: &str) -> String {
    let raw = raw.trim();
    let date = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date()))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));

    date.map_or_else(|_| raw.to_owned(), |date| date.format("%B %-d, %Y").to_string())
}

/// Badge classes for a blog category label.
#[must_use]
pub fn blog_category_badge(category: &str) -> &'static str {
    match category {
        "Development" => "bg-blue-600/20 text-blue-400 border-blue-500/30",
        "Business Analysis" => "bg-green-600/20 text-green-400 border-green-500/30",
        "Design" => "bg-purple-600/20 text-purple-400 border-purple-500/30",
        _ => "bg-gray-600/20 text-gray-400 border-gray-500/30",
    }
}

/// Splits a technology list into the chips to show and how many were left out.
#[must_use]
pub fn tech_chips(technologies: &[String], limit: usize) -> (&[String], usize) {
    let shown = technologies.len().min(limit);
    (&technologies[..shown], technologies.len() - shown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_plain_date() {
        assert_eq!(format_date("2025-01-15"), "January 15, 2025");
        assert_eq!(format_date("2025-03-05"), "March 5, 2025");
    }

    #[test]
    fn test_format_timestamps() {
        assert_eq!(format_date("2025-01-15T10:30:00Z"), "January 15, 2025");
        assert_eq!(format_date("2024-12-31T23:59:59.123456"), "December 31, 2024");
        assert_eq!(format_date("2025-07-04T08:00:00+02:00"), "July 4, 2025");
    }

    #[test]
    fn test_unparseable_date_is_kept() {
        assert_eq!(format_date("last spring"), "last spring");
        assert_eq!(format_date(""), "");
    }

    #[test]
    fn test_category_badges() {
        assert!(blog_category_badge("Design").contains("purple"));
        assert!(blog_category_badge("Gardening").contains("gray"));
    }

    #[test]
    fn test_tech_chips_overflow() {
        let techs: Vec<String> = ["Rust", "Leptos", "Axum", "Tailwind", "Postgres"]
            .into_iter()
            .map(String::from)
            .collect();

        let (shown, hidden) = tech_chips(&techs, 3);
        assert_eq!(shown, &techs[..3]);
        assert_eq!(hidden, 2);

        let (shown, hidden) = tech_chips(&techs[..2], 3);
        assert_eq!(shown.len(), 2);
        assert_eq!(hidden, 0);
    }
}
