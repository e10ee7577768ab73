//! Configuration for XML generation

use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

use crate::{Error, Result};

/// Encoder configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderConfig {
    /// Prefix output with `<?xml version="1.0" encoding="UTF-8"?>`
    pub xml_declaration: bool,

    /// Pretty print settings
    pub indent: IndentConfig,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            xml_declaration: true,
            indent: IndentConfig::default(),
        }
    }
}

/// Indentation settings; `size = 0` writes the document on a single line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndentConfig {
    pub character: char,
    pub size: usize,
}

impl IndentConfig {
    pub fn compact() -> Self {
        Self {
            character: ' ',
            size: 0,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.size > 0
    }
}

impl Default for IndentConfig {
    fn default() -> Self {
        Self {
            character: ' ',
            size: 2,
        }
    }
}

impl EncoderConfig {
    /// Parse a TOML document; missing keys keep their defaults
    pub fn from_toml_str(input: &str) -> Result<Self> {
        Ok(toml::from_str(input)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        tracing::debug!("Loaded encoder configuration from {}", path.display());
        Ok(config)
    }

    /// Defaults overridden by `CAMT060_XML_DECLARATION` and `CAMT060_INDENT`
    ///
    /// `CAMT060_INDENT=0` disables pretty printing, any other number sets the
    /// indentation width in spaces.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let mut config = Self::default();

        if let Ok(value) = env::var("CAMT060_XML_DECLARATION") {
            config.xml_declaration = value.parse().map_err(|_| {
                Error::Config(format!(
                    "CAMT060_XML_DECLARATION must be true or false, got {}",
                    value
                ))
            })?;
        }

        if let Ok(value) = env::var("CAMT060_INDENT") {
            let size: usize = value.parse().map_err(|_| {
                Error::Config(format!("CAMT060_INDENT must be a number, got {}", value))
            })?;
            config.indent = IndentConfig {
                character: ' ',
                size,
            };
        }

        Ok(config)
    }
}
