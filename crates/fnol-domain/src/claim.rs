//! Claim result - the single output record for one processed document

use crate::{ExtractedFields, MandatoryField, RouteDecision};
use serde::{Deserialize, Serialize};

/// Outcome of processing one FNOL document
///
/// Built once by the result assembler and read-only afterwards; members are
/// private so no consumer can patch the route without re-running the rules.
///
/// Serializes as:
///
/// ```text
/// {
///   "extractedFields": { ... 7 keys ... },
///   "missingFields": ["policyNumber", ...],
///   "recommendedRoute": "Manual review",
///   "reasoning": "Missing mandatory fields: policyNumber"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimResult {
    extracted_fields: ExtractedFields,
    missing_fields: Vec<MandatoryField>,
    recommended_route: RouteDecision,
    reasoning: String,
}

impl ClaimResult {
    /// Create a claim result from its four parts
    pub fn new(
        extracted_fields: ExtractedFields,
        missing_fields: Vec<MandatoryField>,
        recommended_route: RouteDecision,
        reasoning: impl Into<String>,
    ) -> Self {
        Self {
            extracted_fields,
            missing_fields,
            recommended_route,
            reasoning: reasoning.into(),
        }
    }

    /// Fields extracted from the document
    pub fn extracted_fields(&self) -> &ExtractedFields {
        &self.extracted_fields
    }

    /// Mandatory fields that were absent, in schema order
    pub fn missing_fields(&self) -> &[MandatoryField] {
        &self.missing_fields
    }

    /// Route assigned by the rules
    pub fn recommended_route(&self) -> RouteDecision {
        self.recommended_route
    }

    /// Human-readable justification naming the deciding rule
    pub fn reasoning(&self) -> &str {
        &self.reasoning
    }
}
