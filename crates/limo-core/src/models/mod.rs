//! Data models shared across the crate.

pub mod config;
pub mod lead;

pub use config::{ExtractionConfig, LimoConfig, MappingConfig};
pub use lead::{ExtractionResult, Field, FieldResult};
