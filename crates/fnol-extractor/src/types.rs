//! Result types for extraction

use fnol_domain::ExtractedFields;
use serde::Serialize;
use std::fmt;

/// Which of the two extraction paths produced a set of fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionStrategy {
    /// Fields decoded from the model's JSON response
    ModelBacked,

    /// Fields matched by the label patterns
    DeterministicFallback,
}

impl fmt::Display for ExtractionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractionStrategy::ModelBacked => f.write_str("model-backed"),
            ExtractionStrategy::DeterministicFallback => f.write_str("deterministic fallback"),
        }
    }
}

/// Fields together with how they were obtained
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    /// Extracted fields
    pub fields: ExtractedFields,

    /// Path that produced them
    pub strategy: ExtractionStrategy,

    /// Why the model-backed path was abandoned, when it was
    pub fallback_reason: Option<String>,
}

impl Extraction {
    /// Fields from the model
    pub fn model_backed(fields: ExtractedFields) -> Self {
        Self {
            fields,
            strategy: ExtractionStrategy::ModelBacked,
            fallback_reason: None,
        }
    }

    /// Fields from the fallback patterns
    pub fn fallback(fields: ExtractedFields, reason: impl Into<String>) -> Self {
        Self {
            fields,
            strategy: ExtractionStrategy::DeterministicFallback,
            fallback_reason: Some(reason.into()),
        }
    }
}
