//! Routing rules

use crate::assembler::assemble;
use crate::RoutingConfig;
use fnol_domain::{
    ClaimResult, ClaimType, ExtractedFields, MandatoryField, RouteDecision, FRAUD_KEYWORDS,
    MANDATORY_FIELDS,
};
use tracing::{debug, info};

/// A route together with the reason the deciding rule gave for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingDecision {
    /// Chosen route
    pub route: RouteDecision,

    /// Human-readable justification
    pub reasoning: String,
}

impl RoutingDecision {
    fn new(route: RouteDecision, reasoning: impl Into<String>) -> Self {
        Self {
            route,
            reasoning: reasoning.into(),
        }
    }
}

/// The routing engine evaluates the business rules for one claim at a time
#[derive(Debug, Clone, Default)]
pub struct RoutingEngine {
    config: RoutingConfig,
}

impl RoutingEngine {
    /// Create a new engine with the given configuration
    pub fn new(config: RoutingConfig) -> Self {
        Self { config }
    }

    /// Create an engine with default thresholds
    pub fn default_config() -> Self {
        Self::new(RoutingConfig::default())
    }

    /// Configuration in use
    pub fn config(&self) -> &RoutingConfig {
        &self.config
    }

    /// Mandatory fields without a usable value, in schema order
    pub fn find_missing_fields(&self, fields: &ExtractedFields) -> Vec<MandatoryField> {
        MANDATORY_FIELDS
            .iter()
            .copied()
            .filter(|field| !fields.is_present(*field))
            .collect()
    }

    /// Apply the rules in priority order; the first one that fires decides
    ///
    /// 1. Fraud keyword in the description: investigation
    /// 2. Any mandatory field missing: manual review
    /// 3. Injury claim: specialist queue
    /// 4. Damage below the fast-track threshold: fast-track
    /// 5. Otherwise: manual review
    pub fn determine_route(
        &self,
        fields: &ExtractedFields,
        missing_fields: &[MandatoryField],
    ) -> RoutingDecision {
        let description = fields
            .description
            .as_deref()
            .unwrap_or_default()
            .to_lowercase();

        // 1. Fraud outranks everything, including incompleteness
        if FRAUD_KEYWORDS.iter().any(|word| description.contains(word)) {
            let excerpt: String = description
                .chars()
                .take(self.config.fraud_excerpt_chars)
                .collect();
            return RoutingDecision::new(
                RouteDecision::InvestigationFlag,
                format!("Suspicious keywords detected in description: {}", excerpt),
            );
        }

        // 2. Completeness
        if !missing_fields.is_empty() {
            let names: Vec<&str> = missing_fields.iter().map(|f| f.as_str()).collect();
            return RoutingDecision::new(
                RouteDecision::ManualReview,
                format!("Missing mandatory fields: {}", names.join(", ")),
            );
        }

        // 3. Injury
        if fields.claim_type == Some(ClaimType::Injury) {
            return RoutingDecision::new(
                RouteDecision::SpecialistQueue,
                "Claim involves injury and requires specialist review",
            );
        }

        // 4. Fast-track
        if let Some(amount) = fields.estimated_damage {
            if amount < self.config.fast_track_threshold {
                return RoutingDecision::new(
                    RouteDecision::FastTrack,
                    format!(
                        "Estimated damage (${}) is below ${} threshold",
                        format_thousands(amount),
                        format_thousands(self.config.fast_track_threshold)
                    ),
                );
            }
        }

        RoutingDecision::new(
            RouteDecision::ManualReview,
            "Claim requires standard manual review process",
        )
    }

    /// Find missing fields, route, and assemble the result
    pub fn process(&self, fields: ExtractedFields) -> ClaimResult {
        let missing_fields = self.find_missing_fields(&fields);
        debug!("Missing fields: {:?}", missing_fields);

        let decision = self.determine_route(&fields, &missing_fields);
        info!("Route: {} ({})", decision.route, decision.reasoning);

        assemble(fields, missing_fields, decision.route, decision.reasoning)
    }
}

/// Missing mandatory fields, in schema order
pub fn find_missing_fields(fields: &ExtractedFields) -> Vec<MandatoryField> {
    RoutingEngine::default_config().find_missing_fields(fields)
}

/// Route a claim with the default thresholds
pub fn determine_route(fields: &ExtractedFields, missing_fields: &[MandatoryField]) -> RoutingDecision {
    RoutingEngine::default_config().determine_route(fields, missing_fields)
}

/// `12000` -> `"12,000"`
fn format_thousands(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
