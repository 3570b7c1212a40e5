//! Rule-based extraction passes for reservation leads.

pub mod address;
pub mod dates;
pub mod email;
pub mod name;
pub mod patterns;
pub mod phone;
pub mod states;
pub mod transport;

use regex::Regex;

use crate::models::lead::ExtractionResult;

use super::text::LeadText;

pub use address::{extract_address_components, AddressPass};
pub use dates::parse_date;
pub use email::{EmailExtractor, EmailPass};
pub use name::NamePass;
pub use phone::{format_phone_number, PhoneExtractor, PhonePass};
pub use states::get_state_abbreviation;
pub use transport::TransportationPass;

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract the field from the whole text first, then from each line.
    fn extract_from(&self, input: &LeadText) -> Option<Self::Output> {
        self.extract(&input.normalized)
            .or_else(|| input.lines.iter().find_map(|line| self.extract(line)))
    }
}

/// One stage of the extraction pipeline.
///
/// Passes run in a fixed order against a shared result; later passes may
/// read what earlier ones found.
pub trait ExtractionPass {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Run the pass, mutating `result` in place.
    fn run(&self, input: &LeadText, result: &mut ExtractionResult);
}

/// Extraction context with confidence scores.
#[derive(Debug, Clone)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Confidence score (0.0 - 1.0).
    pub confidence: f32,
    /// Position in source text.
    pub position: Option<(usize, usize)>,
    /// Source text that was matched.
    pub source: String,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, confidence: f32, source: impl Into<String>) -> Self {
        Self {
            value,
            confidence,
            position: None,
            source: source.into(),
        }
    }

    pub fn with_position(mut self, start: usize, end: usize) -> Self {
        self.position = Some((start, end));
        self
    }
}

/// Try `patterns` in order and return the trimmed first capture group of the
/// first one that matches.
pub fn first_capture(
    patterns: &[Regex],
    text: &str,
    confidence: f32,
) -> Option<ExtractionMatch<String>> {
    patterns.iter().find_map(|pattern| {
        let caps = pattern.captures(text)?;
        let value = caps.get(1)?;
        let full_match = caps.get(0)?;
        Some(
            ExtractionMatch::new(value.as_str().trim().to_string(), confidence, full_match.as_str())
                .with_position(value.start(), value.end()),
        )
    })
}
