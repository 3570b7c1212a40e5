//! Reservation lead entity extraction.

mod extractor;
pub mod rules;
pub mod text;

pub use extractor::{ExtractionReport, RuleBasedExtractor};
pub use text::LeadText;

use crate::error::ExtractionError;
use crate::models::lead::ExtractionResult;

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Trait for lead entity extractors.
pub trait EntityExtractor {
    /// Extract every field from free text, keeping diagnostics.
    fn extract_with_report(&self, text: &str) -> Result<ExtractionReport>;

    /// Extract every field from free text.
    fn extract(&self, text: &str) -> Result<ExtractionResult> {
        self.extract_with_report(text).map(|report| report.fields)
    }
}
