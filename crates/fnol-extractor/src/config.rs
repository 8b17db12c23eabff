//! Configuration for the Extractor

use crate::error::ExtractorError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Characters of document text embedded in the prompt
    pub max_prompt_chars: usize,

    /// Upper bound on tokens the model may generate
    pub max_output_tokens: u32,

    /// Characters kept from a pattern-extracted description
    pub max_description_chars: usize,

    /// Maximum time for a single model call (seconds)
    pub extraction_timeout_secs: u64,
}

impl ExtractorConfig {
    /// Get the extraction timeout as a Duration
    pub fn extraction_timeout(&self) -> Duration {
        Duration::from_secs(self.extraction_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ExtractorError> {
        if self.max_prompt_chars == 0 {
            return Err(ExtractorError::Config(
                "max_prompt_chars must be greater than 0".to_string(),
            ));
        }
        if self.max_output_tokens == 0 {
            return Err(ExtractorError::Config(
                "max_output_tokens must be greater than 0".to_string(),
            ));
        }
        if self.max_description_chars == 0 {
            return Err(ExtractorError::Config(
                "max_description_chars must be greater than 0".to_string(),
            ));
        }
        if self.extraction_timeout_secs == 0 {
            return Err(ExtractorError::Config(
                "extraction_timeout_secs must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            max_prompt_chars: 4000,
            max_output_tokens: 512,
            max_description_chars: 500,
            extraction_timeout_secs: 120,
        }
    }
}

impl ExtractorConfig {
    /// Aggressive preset: short prompt and timeout, for slow CPU-only hosts
    pub fn aggressive() -> Self {
        Self {
            max_prompt_chars: 2000,
            max_output_tokens: 384,
            extraction_timeout_secs: 30,
            ..Self::default()
        }
    }

    /// Lenient preset: longer prompt and timeout for large multi-page forms
    pub fn lenient() -> Self {
        Self {
            max_prompt_chars: 8000,
            max_output_tokens: 768,
            extraction_timeout_secs: 300,
            ..Self::default()
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ExtractorError> {
        let config: Self = toml::from_str(toml_str)
            .map_err(|e| ExtractorError::Config(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ExtractorError> {
        toml::to_string_pretty(self)
            .map_err(|e| ExtractorError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}
