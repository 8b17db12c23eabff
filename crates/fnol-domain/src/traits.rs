//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use crate::ExtractedFields;

/// Sampling parameters passed along with every prompt
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationOptions {
    /// Sampling temperature; 0.0 is greedy decoding
    pub temperature: f32,

    /// Upper bound on generated tokens
    pub max_tokens: u32,
}

impl GenerationOptions {
    /// Greedy decoding with a bounded output length
    pub fn deterministic(max_tokens: u32) -> Self {
        Self {
            temperature: 0.0,
            max_tokens,
        }
    }
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self::deterministic(512)
    }
}

/// Trait for LLM provider operations
///
/// Implemented by the infrastructure layer (fnol-llm). Calls are synchronous;
/// implementations bound their own latency.
pub trait LlmProvider {
    /// Error type for LLM operations
    type Error;

    /// Generate a text completion for `prompt`
    fn generate(&self, prompt: &str, options: &GenerationOptions) -> Result<String, Self::Error>;
}

/// Trait for turning raw document text into extracted fields
///
/// Implemented by the application layer (fnol-extractor). Extraction is
/// total: implementations degrade internally instead of failing.
pub trait FieldExtractor {
    /// Extract the schema fields from `text`
    fn extract(&self, text: &str) -> ExtractedFields;
}
