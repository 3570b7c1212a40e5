//! Value standardization applied before values are typed into a form.
//!
//! Empty input is returned unchanged by every function here.

use crate::lead::rules::get_state_abbreviation;

/// Two-letter codes are uppercased, full names resolved through the shared
/// state table. Unresolvable input is returned as given.
pub fn standardize_state(state: &str) -> String {
    if state.is_empty() {
        return String::new();
    }

    let abbreviation = get_state_abbreviation(state);
    if abbreviation.is_empty() {
        state.to_string()
    } else {
        abbreviation
    }
}

/// Format a 10-digit number (after dropping a leading country code 1) as
/// `(AAA) PPP-LLLL`.
pub fn standardize_phone(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    let digits = match digits.strip_prefix('1') {
        Some(rest) if digits.len() == 11 => rest,
        _ => digits.as_str(),
    };

    if digits.len() == 10 {
        format!("({}) {}-{}", &digits[0..3], &digits[3..6], &digits[6..])
    } else {
        phone.to_string()
    }
}

pub fn standardize_email(email: &str) -> String {
    email.to_lowercase().trim().to_string()
}

/// ZIP+4 for nine digits, the first five for anything longer than five.
pub fn standardize_zip(zip: &str) -> String {
    let digits: String = zip.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() == 9 {
        format!("{}-{}", &digits[..5], &digits[5..])
    } else if digits.len() >= 5 {
        digits[..5].to_string()
    } else {
        zip.to_string()
    }
}
