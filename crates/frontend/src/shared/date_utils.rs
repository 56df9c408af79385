/// Utilities for date formatting
///
/// Dates in the data files are ISO (`YYYY-MM-DD`, optionally with a time part).
use chrono::NaiveDate;

/// Placeholder for dates that are not set yet
pub const NO_DATE: &str = "—";

/// Format an ISO date as a short en-PH date
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "Mar 15, 2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}

/// Like [`format_date`] but renders missing or blank dates as [`NO_DATE`]
pub fn format_optional_date(date_str: Option<&str>) -> String {
    match date_str.map(str::trim) {
        Some(s) if !s.is_empty() => format_date(s),
        _ => NO_DATE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "Mar 15, 2024");
        assert_eq!(format_date("2024-12-01T14:02:26.123Z"), "Dec 1, 2024");
    }

    #[test]
    fn test_optional_date() {
        assert_eq!(format_optional_date(None), "—");
        assert_eq!(format_optional_date(Some("  ")), "—");
        assert_eq!(format_optional_date(Some("2023-07-04")), "Jul 4, 2023");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_date("2024-13-40"), "2024-13-40");
    }
}
