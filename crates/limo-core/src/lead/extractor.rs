//! Rule-based entity extractor running the extraction passes in order.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ExtractionError;
use crate::models::config::{ExtractionConfig, DEFAULT_CONFIDENCE_THRESHOLD};
use crate::models::lead::{ExtractionResult, Field};

use super::rules::{
    AddressPass, EmailPass, ExtractionPass, NamePass, PhonePass, TransportationPass,
};
use super::text::LeadText;
use super::{EntityExtractor, Result};

/// Passes in execution order.
///
/// The address pass reads the pickup location, so transportation must run
/// before it.
const PASSES: [&dyn ExtractionPass; 5] = [
    &NamePass,
    &TransportationPass,
    &AddressPass,
    &PhonePass,
    &EmailPass,
];

/// Result of lead extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionReport {
    /// Extracted fields after threshold filtering.
    pub fields: ExtractionResult,
    /// Input text as given.
    pub raw_text: String,
    /// Line sequence the passes scanned.
    pub lines: Vec<String>,
    /// Fields whose text was cleared by the confidence threshold.
    pub filtered: Vec<Field>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Extractor built from a fixed set of regex heuristics.
#[derive(Debug, Clone)]
pub struct RuleBasedExtractor {
    /// Minimum confidence for keeping a field's text.
    confidence_threshold: f32,
    /// Log the detected line sequence.
    log_lines: bool,
}

impl RuleBasedExtractor {
    /// Create an extractor with the default threshold.
    pub fn new() -> Self {
        Self {
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
            log_lines: false,
        }
    }

    /// Create an extractor from extraction settings.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self::new()
            .with_confidence_threshold(config.confidence_threshold)
            .with_line_logging(config.log_lines)
    }

    /// Set the confidence threshold.
    ///
    /// Values outside `[0, 1]` are clamped; NaN falls back to the default.
    pub fn with_confidence_threshold(mut self, threshold: f32) -> Self {
        self.confidence_threshold = if threshold.is_nan() {
            DEFAULT_CONFIDENCE_THRESHOLD
        } else {
            threshold.clamp(0.0, 1.0)
        };
        self
    }

    /// Set line logging.
    pub fn with_line_logging(mut self, enabled: bool) -> Self {
        self.log_lines = enabled;
        self
    }

    pub fn confidence_threshold(&self) -> f32 {
        self.confidence_threshold
    }
}

impl Default for RuleBasedExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityExtractor for RuleBasedExtractor {
    fn extract_with_report(&self, text: &str) -> Result<ExtractionReport> {
        let start = Utc::now();

        if text.trim().is_empty() {
            return Err(ExtractionError::EmptyInput);
        }

        info!("Extracting entities from {} characters of text", text.len());

        let input = LeadText::new(text);
        if self.log_lines {
            debug!("Detected {} lines: {:?}", input.lines.len(), input.lines);
        }

        let mut fields = ExtractionResult::new();
        for pass in PASSES {
            pass.run(&input, &mut fields);
            debug!("After {} pass: {:?}", pass.name(), fields.populated());
        }

        debug!("Extracted before filtering: {:?}", fields.to_variables());

        let filtered = fields.apply_threshold(self.confidence_threshold);
        if !filtered.is_empty() {
            debug!(
                "Cleared {:?} below threshold {:.2}",
                filtered, self.confidence_threshold
            );
        }

        let elapsed = (Utc::now() - start).num_milliseconds().max(0) as u64;

        Ok(ExtractionReport {
            fields,
            raw_text: text.to_string(),
            lines: input.lines,
            filtered,
            processing_time_ms: elapsed,
        })
    }
}
