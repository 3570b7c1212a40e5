//! Core library for limousine reservation lead processing.
//!
//! This crate provides:
//! - Rule-based entity extraction from free-text booking requests
//!   (names, contact details, addresses, trip logistics)
//! - Per-field confidence scores with threshold filtering
//! - Date interpretation for extracted pickup dates
//! - Field mapping from extraction results to form automation commands

pub mod error;
pub mod lead;
pub mod mapping;
pub mod models;

pub use error::{ExtractionError, LimoError, Result};
pub use lead::rules::{format_phone_number, get_state_abbreviation, parse_date};
pub use lead::{EntityExtractor, ExtractionReport, RuleBasedExtractor};
pub use mapping::{AutomationCommand, FieldMapper, FormType, Macro};
pub use models::config::{ExtractionConfig, LimoConfig, MappingConfig};
pub use models::lead::{ExtractionResult, Field, FieldResult};

/// Extract entities from `text` with the default confidence threshold.
pub fn extract_entities(text: &str) -> std::result::Result<ExtractionResult, ExtractionError> {
    RuleBasedExtractor::new().extract(text)
}
