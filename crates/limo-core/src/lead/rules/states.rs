//! US state name resolution.
//!
//! One table serves both the extraction engine and the form-mapping
//! standardization so the two can never drift apart.

use std::collections::HashMap;

use lazy_static::lazy_static;

use super::patterns::TWO_LETTER_CODE;

/// Full state names (lowercase) and their postal abbreviations.
pub const STATE_NAMES: [(&str, &str); 50] = [
    ("alabama", "AL"),
    ("alaska", "AK"),
    ("arizona", "AZ"),
    ("arkansas", "AR"),
    ("california", "CA"),
    ("colorado", "CO"),
    ("connecticut", "CT"),
    ("delaware", "DE"),
    ("florida", "FL"),
    ("georgia", "GA"),
    ("hawaii", "HI"),
    ("idaho", "ID"),
    ("illinois", "IL"),
    ("indiana", "IN"),
    ("iowa", "IA"),
    ("kansas", "KS"),
    ("kentucky", "KY"),
    ("louisiana", "LA"),
    ("maine", "ME"),
    ("maryland", "MD"),
    ("massachusetts", "MA"),
    ("michigan", "MI"),
    ("minnesota", "MN"),
    ("mississippi", "MS"),
    ("missouri", "MO"),
    ("montana", "MT"),
    ("nebraska", "NE"),
    ("nevada", "NV"),
    ("new hampshire", "NH"),
    ("new jersey", "NJ"),
    ("new mexico", "NM"),
    ("new york", "NY"),
    ("north carolina", "NC"),
    ("north dakota", "ND"),
    ("ohio", "OH"),
    ("oklahoma", "OK"),
    ("oregon", "OR"),
    ("pennsylvania", "PA"),
    ("rhode island", "RI"),
    ("south carolina", "SC"),
    ("south dakota", "SD"),
    ("tennessee", "TN"),
    ("texas", "TX"),
    ("utah", "UT"),
    ("vermont", "VT"),
    ("virginia", "VA"),
    ("washington", "WA"),
    ("west virginia", "WV"),
    ("wisconsin", "WI"),
    ("wyoming", "WY"),
];

/// Localities that stand in for a state in informal location text.
pub const LOCALITY_HINTS: [(&str, &str); 3] = [
    ("swansea", "MA"),
    ("boston", "MA"),
    ("east boston", "MA"),
];

lazy_static! {
    static ref STATE_ABBREVIATIONS: HashMap<&'static str, &'static str> = STATE_NAMES
        .iter()
        .chain(LOCALITY_HINTS.iter())
        .copied()
        .collect();
}

/// Resolve a state name (or locality hint) to its two-letter code.
///
/// A two-letter input is returned uppercased without a lookup. Returns an
/// empty string when nothing matches; callers treat that as "no state".
pub fn get_state_abbreviation(name: &str) -> String {
    let normalized = name.trim().to_lowercase();
    if normalized.is_empty() {
        return String::new();
    }

    if TWO_LETTER_CODE.is_match(&normalized) {
        return normalized.to_uppercase();
    }

    STATE_ABBREVIATIONS
        .get(normalized.as_str())
        .map(|abbr| abbr.to_string())
        .unwrap_or_default()
}
