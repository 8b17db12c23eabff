//! Result assembly

use fnol_domain::{ClaimResult, ExtractedFields, MandatoryField, RouteDecision};

/// Bundle the pipeline outputs into the final, immutable claim result
///
/// Field values are carried through untouched.
pub fn assemble(
    extracted_fields: ExtractedFields,
    missing_fields: Vec<MandatoryField>,
    route: RouteDecision,
    reasoning: impl Into<String>,
) -> ClaimResult {
    ClaimResult::new(extracted_fields, missing_fields, route, reasoning)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fnol_domain::ClaimType;

    #[test]
    fn test_assemble_preserves_inputs() {
        let fields = ExtractedFields {
            policy_number: Some("X-1".to_string()),
            claim_type: Some(ClaimType::Theft),
            ..Default::default()
        };
        let missing = vec![MandatoryField::PolicyholderName, MandatoryField::EstimatedDamage];

        let result = assemble(
            fields.clone(),
            missing.clone(),
            RouteDecision::ManualReview,
            "Missing mandatory fields: policyholderName, estimatedDamage",
        );

        assert_eq!(result.extracted_fields(), &fields);
        assert_eq!(result.missing_fields(), missing.as_slice());
        assert_eq!(result.recommended_route(), RouteDecision::ManualReview);
        assert_eq!(
            result.reasoning(),
            "Missing mandatory fields: policyholderName, estimatedDamage"
        );
    }

    #[test]
    fn test_assembled_result_serializes_with_wire_names() {
        let result = assemble(
            ExtractedFields::default(),
            vec![],
            RouteDecision::FastTrack,
            "ok",
        );
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["recommendedRoute"], "Fast-track");
        assert!(json["extractedFields"].is_object());
        assert!(json["missingFields"].as_array().unwrap().is_empty());
        assert_eq!(json["reasoning"], "ok");
    }
}
