//! Subcommand implementations.

pub mod automation;
pub mod batch;
pub mod config;
pub mod extract;

use std::io::Read;
use std::path::{Path, PathBuf};

use limo_core::LimoConfig;
use tracing::debug;

/// Load the configuration from `--config`, else the default location if a
/// file exists there, else built-in defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<LimoConfig> {
    if let Some(path) = config_path {
        return Ok(LimoConfig::from_file(Path::new(path))?);
    }

    let default_path = config::default_config_path();
    if default_path.exists() {
        debug!("Using config file {}", default_path.display());
        Ok(LimoConfig::from_file(&default_path)?)
    } else {
        Ok(LimoConfig::default())
    }
}

/// Read message text from a file, or from stdin when no file is given.
pub fn read_input(input: Option<&PathBuf>) -> anyhow::Result<String> {
    match input {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Input file not found: {}", path.display());
            }
            Ok(std::fs::read_to_string(path)?)
        }
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}
