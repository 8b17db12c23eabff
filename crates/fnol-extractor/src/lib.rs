//! FNOL Extractor
//!
//! Converts unstructured FNOL text into the seven schema fields.
//!
//! # Overview
//!
//! Extraction has two strategies. The model-backed one sends a fixed prompt
//! (document truncated to a bounded prefix, greedy decoding) to an
//! `LlmProvider` and decodes the first JSON object in the reply. When no
//! model is configured, the call fails, or the reply holds no usable object,
//! the deterministic fallback matches the printed form labels instead.
//! Extraction never fails outward.
//!
//! # Architecture
//!
//! ```text
//! Text → Extractor → LLM → JSON object ─┐
//!             └─(any failure)→ patterns ─┴→ ExtractedFields
//! ```
//!
//! # Example Usage
//!
//! ```
//! use fnol_extractor::{Extractor, ExtractorConfig, ExtractionStrategy};
//! use fnol_llm::MockProvider;
//!
//! let llm = MockProvider::new(r#"{"policyNumber": "PA-1", "claimType": "theft"}"#);
//! let extractor = Extractor::new(llm, ExtractorConfig::default());
//!
//! let extraction = extractor.extract_with_strategy("POLICY NUMBER: PA-1 ...");
//! assert_eq!(extraction.strategy, ExtractionStrategy::ModelBacked);
//! assert_eq!(extraction.fields.policy_number.as_deref(), Some("PA-1"));
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod extractor;
pub mod fallback;
mod parser;
mod prompt;
mod types;


pub use config::ExtractorConfig;
pub use error::ExtractorError;
pub use extractor::Extractor;
pub use fallback::{extract_fields, FallbackExtractor};
pub use parser::parse_llm_response;
pub use prompt::PromptBuilder;
pub use types::{Extraction, ExtractionStrategy};
