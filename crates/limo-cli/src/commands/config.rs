//! Config command - manage the limo configuration file.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use clap::{Args, Subcommand};
use console::style;

use limo_core::{FormType, LimoConfig};

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Write a configuration file with default values
    Init {
        /// Overwrite existing file
        #[arg(long)]
        force: bool,
    },

    /// Get a configuration value (e.g., "extraction.confidence_threshold")
    Get { key: ConfigKey },

    /// Set a configuration value
    Set { key: ConfigKey, value: String },

    /// List the settable keys
    Keys,

    /// Show configuration file path
    Path,
}

/// A settable configuration entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    ConfidenceThreshold,
    LogLines,
    FormType,
    StartUrl,
    PaymentMethod,
}

impl ConfigKey {
    const ALL: [ConfigKey; 5] = [
        ConfigKey::ConfidenceThreshold,
        ConfigKey::LogLines,
        ConfigKey::FormType,
        ConfigKey::StartUrl,
        ConfigKey::PaymentMethod,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Self::ConfidenceThreshold => "extraction.confidence_threshold",
            Self::LogLines => "extraction.log_lines",
            Self::FormType => "mapping.form_type",
            Self::StartUrl => "mapping.start_url",
            Self::PaymentMethod => "mapping.payment_method",
        }
    }

    fn get(&self, config: &LimoConfig) -> String {
        match self {
            Self::ConfidenceThreshold => config.extraction.confidence_threshold.to_string(),
            Self::LogLines => config.extraction.log_lines.to_string(),
            Self::FormType => config.mapping.form_type.to_string(),
            Self::StartUrl => config.mapping.start_url.clone(),
            Self::PaymentMethod => config.mapping.payment_method.clone(),
        }
    }

    /// Parse `value` for this key and store it. Range checks are left to
    /// [`LimoConfig::validate`].
    fn set(&self, config: &mut LimoConfig, value: &str) -> anyhow::Result<()> {
        match self {
            Self::ConfidenceThreshold => {
                config.extraction.confidence_threshold = value
                    .parse()
                    .map_err(|_| anyhow::anyhow!("{} expects a number, got {:?}", self, value))?;
            }
            Self::LogLines => {
                config.extraction.log_lines = value
                    .parse()
                    .map_err(|_| anyhow::anyhow!("{} expects true or false, got {:?}", self, value))?;
            }
            Self::FormType => config.mapping.form_type = FormType::from_str(value)?,
            Self::StartUrl => config.mapping.start_url = value.to_string(),
            Self::PaymentMethod => config.mapping.payment_method = value.to_string(),
        }
        Ok(())
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ConfigKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| format!("Configuration key not found: {} (see `limo config keys`)", s))
    }
}

pub async fn run(args: ConfigArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config_path = config_path
        .map(PathBuf::from)
        .unwrap_or_else(default_config_path);

    match args.command {
        ConfigCommand::Show => {
            if !config_path.exists() {
                eprintln!("{} No config file found, showing defaults.", style("ℹ").blue());
            }
            let config = load_or_default(&config_path)?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigCommand::Init { force } => {
            if config_path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    config_path.display()
                );
            }
            save(&LimoConfig::default(), &config_path)?;
            println!(
                "{} Created configuration file at {}",
                style("✓").green(),
                config_path.display()
            );
        }
        ConfigCommand::Get { key } => {
            println!("{}", key.get(&load_or_default(&config_path)?));
        }
        ConfigCommand::Set { key, value } => {
            let mut config = load_or_default(&config_path)?;
            key.set(&mut config, &value)?;
            config.validate()?;
            save(&config, &config_path)?;
            println!("{} Set {} = {}", style("✓").green(), key, key.get(&config));
        }
        ConfigCommand::Keys => {
            let defaults = LimoConfig::default();
            for key in ConfigKey::ALL {
                println!("{:<34} (default: {})", key, key.get(&defaults));
            }
        }
        ConfigCommand::Path => {
            println!("Configuration file: {}", config_path.display());
            if config_path.exists() {
                println!("Status: {}", style("exists").green());
            } else {
                println!("Status: {}", style("not created").yellow());
                println!();
                println!("Run 'limo config init' to create a configuration file.");
            }
        }
    }

    Ok(())
}

/// `<config dir>/limo/config.json`
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("limo")
        .join("config.json")
}

fn load_or_default(config_path: &Path) -> anyhow::Result<LimoConfig> {
    if config_path.exists() {
        Ok(LimoConfig::from_file(config_path)?)
    } else {
        Ok(LimoConfig::default())
    }
}

fn save(config: &LimoConfig, config_path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    config.save(config_path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names_roundtrip() {
        for key in ConfigKey::ALL {
            assert_eq!(key.as_str().parse::<ConfigKey>(), Ok(key));
        }
        assert!("extraction.nope".parse::<ConfigKey>().is_err());
    }

    #[test]
    fn test_set_typed_values() {
        let mut config = LimoConfig::default();

        ConfigKey::ConfidenceThreshold.set(&mut config, "0.5").unwrap();
        ConfigKey::LogLines.set(&mut config, "true").unwrap();
        ConfigKey::FormType.set(&mut config, "reservation").unwrap();
        ConfigKey::PaymentMethod.set(&mut config, "Invoice").unwrap();

        assert_eq!(config.extraction.confidence_threshold, 0.5);
        assert!(config.extraction.log_lines);
        assert_eq!(config.mapping.form_type, FormType::Reservation);
        assert_eq!(ConfigKey::PaymentMethod.get(&config), "Invoice");
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = LimoConfig::default();

        assert!(ConfigKey::ConfidenceThreshold.set(&mut config, "high").is_err());
        assert!(ConfigKey::LogLines.set(&mut config, "yes").is_err());
        assert!(ConfigKey::FormType.set(&mut config, "invoice").is_err());

        ConfigKey::ConfidenceThreshold.set(&mut config, "2").unwrap();
        assert!(config.validate().is_err());
    }
}
