//! Core Extractor implementation

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::fallback::FallbackExtractor;
use crate::parser::parse_llm_response;
use crate::prompt::PromptBuilder;
use crate::types::{Extraction, ExtractionStrategy};
use fnol_domain::traits::{FieldExtractor, GenerationOptions, LlmProvider};
use fnol_domain::ExtractedFields;
use tracing::{debug, info, warn};

/// Two-stage field extractor: model first, label patterns on any failure
pub struct Extractor<L>
where
    L: LlmProvider,
{
    llm_provider: Option<L>,
    fallback: FallbackExtractor,
    config: ExtractorConfig,
}

impl<L> Extractor<L>
where
    L: LlmProvider,
    L::Error: std::fmt::Display,
{
    /// Create a new Extractor backed by `llm_provider`
    pub fn new(llm_provider: L, config: ExtractorConfig) -> Self {
        Self::from_optional(Some(llm_provider), config)
    }

    /// Create an Extractor that may or may not have a model behind it
    pub fn from_optional(llm_provider: Option<L>, config: ExtractorConfig) -> Self {
        Self {
            llm_provider,
            fallback: FallbackExtractor::new(config.max_description_chars),
            config,
        }
    }

    /// Create an Extractor that always uses the fallback patterns
    pub fn without_model(config: ExtractorConfig) -> Self {
        Self::from_optional(None, config)
    }

    /// Configuration in use
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Whether a model is configured
    pub fn has_model(&self) -> bool {
        self.llm_provider.is_some()
    }

    /// Strategy the next call will attempt first
    pub fn preferred_strategy(&self) -> ExtractionStrategy {
        if self.has_model() {
            ExtractionStrategy::ModelBacked
        } else {
            ExtractionStrategy::DeterministicFallback
        }
    }

    /// Extract fields, reporting which strategy produced them
    pub fn extract_with_strategy(&self, text: &str) -> Extraction {
        info!("Starting extraction, text length {}", text.len());

        match self.extract_with_model(text) {
            Ok(fields) => {
                info!("Extracted {} fields with model", fields.present_count());
                Extraction::model_backed(fields)
            }
            Err(e) => {
                match &e {
                    ExtractorError::NoProvider => debug!("No model configured, using fallback"),
                    _ => warn!("Model extraction failed, using fallback: {}", e),
                }
                Extraction::fallback(self.fallback.extract(text), e.to_string())
            }
        }
    }

    /// Model-backed path; any error here selects the fallback
    fn extract_with_model(&self, text: &str) -> Result<ExtractedFields, ExtractorError> {
        let llm = self
            .llm_provider
            .as_ref()
            .ok_or(ExtractorError::NoProvider)?;

        let prompt = PromptBuilder::new(text)
            .with_max_chars(self.config.max_prompt_chars)
            .build();

        debug!("Prompt length: {} chars", prompt.len());

        let options = GenerationOptions::deterministic(self.config.max_output_tokens);
        let response = llm
            .generate(&prompt, &options)
            .map_err(|e| ExtractorError::Llm(e.to_string()))?;

        debug!("LLM response length: {} chars", response.len());

        parse_llm_response(&response)
    }
}

impl<L> FieldExtractor for Extractor<L>
where
    L: LlmProvider,
    L::Error: std::fmt::Display,
{
    fn extract(&self, text: &str) -> ExtractedFields {
        self.extract_with_strategy(text).fields
    }
}
