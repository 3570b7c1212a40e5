//! Interpretation of extracted pickup date strings.

use chrono::NaiveDate;
use regex::Captures;

use super::patterns::{ISO_DATE, MONTH_DAY_YEAR, US_DATE_MDY, US_DATE_MDY_DASH};

const MONTHS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// Parse a pickup date as written in a lead.
///
/// Accepts `MM/DD/YYYY`, `YYYY-MM-DD`, `MM-DD-YYYY` (two-digit years
/// allowed) and month-name forms such as `Jan 5th, 2024`. When the text has
/// no year, `default_year` is used.
pub fn parse_date(text: &str, default_year: i32) -> Option<NaiveDate> {
    let text = text.trim();

    if let Some(caps) = US_DATE_MDY.captures(text) {
        return numeric_date(&caps, 3, 1, 2);
    }
    // ISO before the dashed US form, which would otherwise match its tail.
    if let Some(caps) = ISO_DATE.captures(text) {
        return numeric_date(&caps, 1, 2, 3);
    }
    if let Some(caps) = US_DATE_MDY_DASH.captures(text) {
        return numeric_date(&caps, 3, 1, 2);
    }

    let caps = MONTH_DAY_YEAR.captures(text)?;
    let month = month_number(&caps[1])?;
    let day: u32 = caps[2].parse().ok()?;
    let year = match caps.get(3) {
        Some(y) => y.as_str().parse().ok()?,
        None => default_year,
    };

    NaiveDate::from_ymd_opt(year, month, day)
}

/// Build a date from numeric capture groups at the given indices.
fn numeric_date(caps: &Captures, y: usize, m: usize, d: usize) -> Option<NaiveDate> {
    let year = expand_year(caps.get(y)?.as_str())?;
    let month: u32 = caps.get(m)?.as_str().parse().ok()?;
    let day: u32 = caps.get(d)?.as_str().parse().ok()?;

    NaiveDate::from_ymd_opt(year, month, day)
}

/// Two-digit years pivot at 50: `00`-`50` are 20xx, `51`-`99` are 19xx.
fn expand_year(year: &str) -> Option<i32> {
    let value: i32 = year.parse().ok()?;
    if year.len() == 2 {
        Some(if value <= 50 { 2000 + value } else { 1900 + value })
    } else {
        Some(value)
    }
}

fn month_number(name: &str) -> Option<u32> {
    let prefix = name.get(..3)?.to_lowercase();
    MONTHS
        .iter()
        .position(|m| *m == prefix)
        .map(|i| i as u32 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ymd(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn test_numeric_forms() {
        assert_eq!(parse_date("06/14/2025", 2000), ymd(2025, 6, 14));
        assert_eq!(parse_date("2025-06-14", 2000), ymd(2025, 6, 14));
        assert_eq!(parse_date("6-14-2025", 2000), ymd(2025, 6, 14));
    }

    #[test]
    fn test_two_digit_years() {
        assert_eq!(parse_date("6/14/25", 2000), ymd(2025, 6, 14));
        assert_eq!(parse_date("6/14/50", 2000), ymd(2050, 6, 14));
        assert_eq!(parse_date("6/14/99", 2000), ymd(1999, 6, 14));
    }

    #[test]
    fn test_month_names() {
        assert_eq!(parse_date("June 14th, 2025", 2000), ymd(2025, 6, 14));
        assert_eq!(parse_date("Sep 3", 2026), ymd(2026, 9, 3));
        assert_eq!(parse_date("on dec 31st", 2024), ymd(2024, 12, 31));
    }

    #[test]
    fn test_invalid_dates() {
        assert_eq!(parse_date("02/30/2024", 2024), None);
        assert_eq!(parse_date("next Friday", 2024), None);
        assert_eq!(parse_date("", 2024), None);
    }
}
