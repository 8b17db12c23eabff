//! Error types for the Extractor
//!
//! None of these escape `FieldExtractor::extract`; they describe why the
//! model-backed path was abandoned in favour of the fallback.

use thiserror::Error;

/// Errors that can occur during model-backed extraction
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// LLM provider error (service missing, unreachable, timed out)
    #[error("LLM error: {0}")]
    Llm(String),

    /// No model configured for this extractor
    #[error("No LLM provider configured")]
    NoProvider,

    /// Model response held no usable field object
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for ExtractorError {
    fn from(e: serde_json::Error) -> Self {
        ExtractorError::JsonParse(e.to_string())
    }
}
