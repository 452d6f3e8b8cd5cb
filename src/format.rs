//! Display helpers for money and schedule dates.

use chrono::NaiveDate;
use num_format::{Locale, ToFormattedString};
use std::fmt::Write as _;

/// Render a whole-unit amount with thousands separators and a currency
/// symbol prefix, e.g. `$25,000`.
pub fn format_money(amount: u64, symbol: &str) -> String {
    format!("{}{}", symbol, amount.to_formatted_string(&Locale::en))
}

/// Render a date with a strftime-style format string. Falls back to ISO
/// `%Y-%m-%d` if the format string doesn't parse.
pub fn format_date(date: NaiveDate, fmt: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(fmt)).is_ok() {
        out
    } else {
        date.format("%Y-%m-%d").to_string()
    }
}

/// Check a strftime-style format string without rendering anything.
pub fn is_valid_date_format(fmt: &str) -> bool {
    use chrono::format::{Item, StrftimeItems};
    !StrftimeItems::new(fmt).any(|item| matches!(item, Item::Error))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jan_first() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn test_format_money_groups_thousands() {
        assert_eq!(format_money(25_000, "$"), "$25,000");
        assert_eq!(format_money(1_500_000, "€"), "€1,500,000");
        assert_eq!(format_money(999, "$"), "$999");
        assert_eq!(format_money(0, "$"), "$0");
    }

    #[test]
    fn test_format_date_default_style() {
        assert_eq!(format_date(jan_first(), "%b %-d, %Y"), "Jan 1, 2024");
        assert_eq!(format_date(jan_first(), "%Y-%m-%d"), "2024-01-01");
    }

    #[test]
    fn test_format_date_bad_format_falls_back() {
        assert_eq!(format_date(jan_first(), "%Q"), "2024-01-01");
    }

    #[test]
    fn test_is_valid_date_format() {
        assert!(is_valid_date_format("%b %-d, %Y"));
        assert!(is_valid_date_format("%d/%m/%Y"));
        assert!(!is_valid_date_format("%Q"));
    }
}
