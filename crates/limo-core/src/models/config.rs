//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};

use crate::error::{LimoError, Result};
use crate::mapping::FormType;

/// Default confidence threshold below which field values are discarded.
pub const DEFAULT_CONFIDENCE_THRESHOLD: f32 = 0.3;

/// Page opened before any form-filling command runs.
pub const DEFAULT_START_URL: &str =
    "https://manage.mylimobiz.com/admin/manageAccounts.asp?stab=accountManagement&action=showAccounts";

/// Main configuration for the limo pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LimoConfig {
    /// Lead extraction configuration.
    pub extraction: ExtractionConfig,

    /// Form mapping configuration.
    pub mapping: MappingConfig,
}

/// Lead extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Minimum confidence to keep an extracted field (0.0 - 1.0).
    pub confidence_threshold: f32,

    /// Log the detected line sequence at debug level.
    pub log_lines: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
            log_lines: false,
        }
    }
}

/// Form mapping configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MappingConfig {
    /// Target form.
    pub form_type: FormType,

    /// URL opened as the first macro command.
    pub start_url: String,

    /// Payment method selected on the financial data tab.
    pub payment_method: String,
}

impl Default for MappingConfig {
    fn default() -> Self {
        Self {
            form_type: FormType::AccountCreation,
            start_url: DEFAULT_START_URL.to_string(),
            payment_method: "Credit Card - Offline".to_string(),
        }
    }
}

impl LimoConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        let threshold = self.extraction.confidence_threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(LimoError::Config(format!(
                "confidence_threshold must be within [0, 1], got {}",
                threshold
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = LimoConfig::default();
        assert_eq!(config.extraction.confidence_threshold, 0.3);
        assert_eq!(config.mapping.form_type, FormType::AccountCreation);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: LimoConfig =
            serde_json::from_str(r#"{"extraction": {"confidence_threshold": 0.5}}"#).unwrap();
        assert_eq!(config.extraction.confidence_threshold, 0.5);
        assert!(!config.extraction.log_lines);
        assert_eq!(config.mapping.payment_method, "Credit Card - Offline");
    }

    #[test]
    fn test_rejects_out_of_range_threshold() {
        let mut config = LimoConfig::default();
        config.extraction.confidence_threshold = 1.5;
        assert!(matches!(config.validate(), Err(LimoError::Config(_))));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = LimoConfig::default();
        config.extraction.confidence_threshold = 0.6;
        config.save(&path).unwrap();

        let loaded = LimoConfig::from_file(&path).unwrap();
        assert_eq!(loaded.extraction.confidence_threshold, 0.6);
    }
}
