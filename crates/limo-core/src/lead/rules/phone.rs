//! US phone number extraction and formatting.

use tracing::debug;

use crate::lead::text::LeadText;
use crate::models::lead::ExtractionResult;

use super::patterns::PHONE_PATTERNS;
use super::{ExtractionMatch, ExtractionPass, FieldExtractor};

/// Phone number extractor.
///
/// Every pattern is tried against the whole text before any single line is
/// looked at.
pub struct PhoneExtractor {
    confidence: f32,
}

impl PhoneExtractor {
    pub fn new() -> Self {
        Self { confidence: 0.9 }
    }
}

impl Default for PhoneExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for PhoneExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        for pattern in PHONE_PATTERNS.iter() {
            let Some(caps) = pattern.captures(text) else {
                continue;
            };

            // Split patterns capture area code, prefix and line number.
            let formatted = if caps.len() > 3 {
                format!("({}) {}-{}", &caps[1], &caps[2], &caps[3])
            } else {
                format_phone_number(&caps[1])
            };

            let full = caps.get(0)?;
            return Some(
                ExtractionMatch::new(formatted, self.confidence, full.as_str())
                    .with_position(full.start(), full.end()),
            );
        }
        None
    }
}

/// Format a 10-digit (or 1-prefixed 11-digit) number as `(AAA) PPP-LLLL`.
///
/// Anything else is returned unchanged.
pub fn format_phone_number(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();

    match digits.len() {
        10 => format!("({}) {}-{}", &digits[0..3], &digits[3..6], &digits[6..]),
        11 if digits.starts_with('1') => {
            format!("({}) {}-{}", &digits[1..4], &digits[4..7], &digits[7..])
        }
        _ => phone.to_string(),
    }
}

/// Phone extraction pass.
pub struct PhonePass;

impl ExtractionPass for PhonePass {
    fn name(&self) -> &'static str {
        "phone"
    }

    fn run(&self, input: &LeadText, result: &mut ExtractionResult) {
        if let Some(m) = PhoneExtractor::new().extract_from(input) {
            debug!("Phone {:?} from {:?}", m.value, m.source);
            result.phone.set(m.value, m.confidence);
        }
    }
}
