//! Configuration management infrastructure.
//!
//! This module provides configuration file support for the command line tool:
//! how input files are decoded, how results are printed and how much is logged.

use crate::infra::error::{ResolveError, ResolveResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// How signature input files are encoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputEncoding {
    /// Raw DER if the data starts with a SEQUENCE tag, base64 text otherwise
    Auto,
    Der,
    Base64,
}

/// How resolved signers are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

macro_rules! lowercase_enum_str {
    ($ty:ident { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $($ty::$variant => f.write_str($name)),+
                }
            }
        }

        impl FromStr for $ty {
            type Err = ResolveError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_ascii_lowercase().as_str() {
                    $($name => Ok($ty::$variant),)+
                    other => Err(ResolveError::ConfigurationError(format!(
                        "Invalid {}: {other}",
                        stringify!($ty)
                    ))),
                }
            }
        }
    };
}

lowercase_enum_str!(InputEncoding { Auto => "auto", Der => "der", Base64 => "base64" });
lowercase_enum_str!(OutputFormat { Text => "text", Json => "json" });

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Application configuration for signer resolution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfiguration {
    /// Encoding of signature and certificate input files
    pub input_encoding: InputEncoding,

    /// Output format for resolved signers
    pub output_format: OutputFormat,

    /// Default log filter when `RUST_LOG` is not set
    pub log_level: String,

    /// Whether to print subject, issuer and serial besides the Common Name
    pub show_certificate_details: bool,
}

impl Default for ResolverConfiguration {
    fn default() -> Self {
        Self {
            input_encoding: InputEncoding::Auto,
            output_format: OutputFormat::Text,
            log_level: "warn".to_string(),
            show_certificate_details: true,
        }
    }
}

/// Configuration manager for handling config files
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Create a new configuration manager with default path
    pub fn new() -> ResolveResult<Self> {
        let config_path = Self::default_config_path()?;
        Ok(Self { config_path })
    }

    /// Create a configuration manager with custom path
    pub fn with_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            config_path: path.as_ref().to_path_buf(),
        }
    }

    /// Get the default configuration file path
    pub fn default_config_path() -> ResolveResult<PathBuf> {
        if let Some(config_dir) = dirs::config_dir() {
            Ok(config_dir.join("signer-resolver").join("config.toml"))
        } else {
            Ok(PathBuf::from("signer-resolver-config.toml"))
        }
    }

    /// Load configuration from file, falling back to defaults if it doesn't exist
    pub fn load_or_default(&self) -> ResolveResult<ResolverConfiguration> {
        if self.config_path.exists() {
            self.load()
        } else {
            log::debug!(
                "Configuration file not found, using defaults: {}",
                self.config_path.display()
            );
            Ok(ResolverConfiguration::default())
        }
    }

    /// Load configuration from file, creating default if it doesn't exist
    pub fn load_or_create_default(&self) -> ResolveResult<ResolverConfiguration> {
        if self.config_path.exists() {
            self.load()
        } else {
            log::info!(
                "Configuration file not found, creating default: {}",
                self.config_path.display()
            );
            let default_config = ResolverConfiguration::default();
            self.save(&default_config)?;
            Ok(default_config)
        }
    }

    /// Load configuration from file
    pub fn load(&self) -> ResolveResult<ResolverConfiguration> {
        log::debug!("Loading configuration from: {}", self.config_path.display());

        let content = fs::read_to_string(&self.config_path).map_err(|e| {
            ResolveError::ConfigurationError(format!(
                "Failed to read config file {}: {}",
                self.config_path.display(),
                e
            ))
        })?;

        let config: ResolverConfiguration = toml::from_str(&content).map_err(|e| {
            ResolveError::ConfigurationError(format!("Failed to parse config file: {e}"))
        })?;

        validate_config(&config)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, config: &ResolverConfiguration) -> ResolveResult<()> {
        validate_config(config)?;
        log::info!("Saving configuration to: {}", self.config_path.display());

        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ResolveError::ConfigurationError(format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let content = toml::to_string_pretty(config).map_err(|e| {
            ResolveError::ConfigurationError(format!("Failed to serialize config: {e}"))
        })?;

        fs::write(&self.config_path, content).map_err(|e| {
            ResolveError::ConfigurationError(format!(
                "Failed to write config file {}: {}",
                self.config_path.display(),
                e
            ))
        })?;

        Ok(())
    }

    /// Update a specific configuration value
    pub fn update_value(&self, key: &str, value: &str) -> ResolveResult<()> {
        let mut config = self.load_or_default()?;

        match key {
            "input_encoding" => config.input_encoding = value.parse()?,
            "output_format" => config.output_format = value.parse()?,
            "log_level" => config.log_level = value.to_ascii_lowercase(),
            "show_certificate_details" => {
                config.show_certificate_details = value.parse().map_err(|_| {
                    ResolveError::ConfigurationError(format!("Invalid boolean value: {value}"))
                })?;
            }
            _ => {
                return Err(ResolveError::ConfigurationError(format!(
                    "Unknown configuration key: {key}"
                )));
            }
        }

        self.save(&config)
    }

    /// Get the configuration file path
    #[must_use]
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Export configuration as a portable format
    pub fn export_config(&self, format: ExportFormat) -> ResolveResult<String> {
        let config = self.load_or_default()?;

        match format {
            ExportFormat::Toml => toml::to_string_pretty(&config)
                .map_err(|e| ResolveError::ConfigurationError(format!("TOML export failed: {e}"))),
            ExportFormat::Json => serde_json::to_string_pretty(&config)
                .map_err(|e| ResolveError::ConfigurationError(format!("JSON export failed: {e}"))),
        }
    }
}

/// Validate configuration values
fn validate_config(config: &ResolverConfiguration) -> ResolveResult<()> {
    if !LOG_LEVELS.contains(&config.log_level.as_str()) {
        return Err(ResolveError::ConfigurationError(format!(
            "Invalid log level: {} (expected one of {})",
            config.log_level,
            LOG_LEVELS.join(", ")
        )));
    }
    Ok(())
}

/// Configuration export formats
#[derive(Debug, Clone, Copy)]
pub enum ExportFormat {
    Toml,
    Json,
}
