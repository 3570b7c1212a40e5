//! WASM bindings for reservation lead extraction.
//!
//! This crate exposes the extraction engine and form mapping to the browser
//! extension.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use limo_core::mapping::{
    standardize_email as std_email, standardize_phone as std_phone,
    standardize_state as std_state, standardize_zip as std_zip,
};
use limo_core::{EntityExtractor, FieldMapper, FormType, RuleBasedExtractor};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

fn js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Extract entities from message text with the default threshold.
///
/// Returns an object keyed by field name, each value `{ text, confidence }`.
#[wasm_bindgen]
pub fn extract_entities(text: &str) -> Result<JsValue, JsValue> {
    let result = RuleBasedExtractor::new().extract(text).map_err(js_error)?;
    to_js(&result)
}

/// Extract entities, discarding fields below `threshold`.
#[wasm_bindgen]
pub fn extract_with_threshold(text: &str, threshold: f32) -> Result<JsValue, JsValue> {
    let result = RuleBasedExtractor::new()
        .with_confidence_threshold(threshold)
        .extract(text)
        .map_err(js_error)?;
    to_js(&result)
}

/// Extract entities and flatten them to `{ field: text }` for non-empty
/// fields.
#[wasm_bindgen]
pub fn extract_variables(text: &str) -> Result<JsValue, JsValue> {
    let result = RuleBasedExtractor::new().extract(text).map_err(js_error)?;
    to_js(&result.to_variables())
}

/// Extract entities and build the form-filling commands for `form`
/// (`accountCreation` or `reservation`).
#[wasm_bindgen]
pub fn create_form_commands(text: &str, form: &str) -> Result<JsValue, JsValue> {
    let form: FormType = form.parse().map_err(js_error)?;
    let result = RuleBasedExtractor::new().extract(text).map_err(js_error)?;

    to_js(&FieldMapper::new().create_form_commands(form, &result))
}

/// Extract entities and wrap the form commands in a macro dated today.
#[wasm_bindgen]
pub fn generate_macro(text: &str, form: &str) -> Result<JsValue, JsValue> {
    let form: FormType = form.parse().map_err(js_error)?;
    let result = RuleBasedExtractor::new().extract(text).map_err(js_error)?;
    let today = chrono::Local::now().date_naive();

    to_js(&FieldMapper::new().generate_macro(form, &result, today))
}

#[wasm_bindgen]
pub fn standardize_state(state: &str) -> String {
    std_state(state)
}

#[wasm_bindgen]
pub fn standardize_phone(phone: &str) -> String {
    std_phone(phone)
}

#[wasm_bindgen]
pub fn standardize_email(email: &str) -> String {
    std_email(email)
}

#[wasm_bindgen]
pub fn standardize_zip(zip: &str) -> String {
    std_zip(zip)
}

/// Two-letter code for a state name, or an empty string.
#[wasm_bindgen]
pub fn state_abbreviation(name: &str) -> String {
    limo_core::get_state_abbreviation(name)
}

/// Parse a pickup date into `YYYY-MM-DD`.
#[wasm_bindgen]
pub fn parse_date(text: &str, default_year: i32) -> Option<String> {
    limo_core::parse_date(text, default_year).map(|d| d.format("%Y-%m-%d").to_string())
}

/// Lead extractor class for browser use.
#[wasm_bindgen]
pub struct LeadExtractor {
    extractor: RuleBasedExtractor,
}

#[wasm_bindgen]
impl LeadExtractor {
    /// Create a new lead extractor.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            extractor: RuleBasedExtractor::new(),
        }
    }

    /// Set the minimum confidence for keeping a field, clamped to `[0, 1]`.
    #[wasm_bindgen]
    pub fn set_confidence_threshold(&mut self, threshold: f32) {
        self.extractor = self.extractor.clone().with_confidence_threshold(threshold);
    }

    #[wasm_bindgen(getter)]
    pub fn confidence_threshold(&self) -> f32 {
        self.extractor.confidence_threshold()
    }

    /// Extract entities from text.
    #[wasm_bindgen]
    pub fn extract(&self, text: &str) -> Result<JsValue, JsValue> {
        let result = self.extractor.extract(text).map_err(js_error)?;
        to_js(&result)
    }

    /// Get extraction result with lines, filtered fields and timing.
    #[wasm_bindgen]
    pub fn extract_with_report(&self, text: &str) -> Result<JsValue, JsValue> {
        let report = self.extractor.extract_with_report(text).map_err(js_error)?;
        to_js(&report)
    }
}

impl Default for LeadExtractor {
    fn default() -> Self {
        Self::new()
    }
}
