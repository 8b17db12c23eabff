//! Document-to-route scenarios through the fallback extractor

use fnol_domain::{ClaimType, ExtractedFields, MandatoryField, RouteDecision};
use fnol_extractor::extract_fields;
use fnol_routing::{determine_route, find_missing_fields, RoutingEngine};

#[test]
fn staged_collision_is_investigated() {
    let fields = ExtractedFields {
        description: Some("Staged collision reported by claimant".to_string()),
        ..Default::default()
    };
    let missing = find_missing_fields(&fields);
    let decision = determine_route(&fields, &missing);

    assert_eq!(decision.route, RouteDecision::InvestigationFlag);
    assert!(decision
        .reasoning
        .contains("staged collision reported by claimant"));
}

#[test]
fn complete_small_claim_is_fast_tracked() {
    let fields = ExtractedFields {
        policy_number: Some("PA-7781".to_string()),
        policyholder_name: Some("Lena Ortiz".to_string()),
        incident_date: Some("04/02/2024".to_string()),
        incident_location: Some("Denver, CO".to_string()),
        description: Some("Side mirror clipped in parking lot".to_string()),
        estimated_damage: Some(12_000),
        claim_type: Some(ClaimType::NonInjury),
    };
    let result = RoutingEngine::default_config().process(fields);

    assert_eq!(result.recommended_route(), RouteDecision::FastTrack);
    assert!(result.missing_fields().is_empty());
}

#[test]
fn estimate_only_document_lists_five_missing_fields() {
    let fields = extract_fields("Claim notes\nESTIMATE AMOUNT: $45,000\nend of notes");

    assert_eq!(fields.estimated_damage, Some(45_000));
    assert_eq!(fields.claim_type, Some(ClaimType::NonInjury));
    assert!(fields.policy_number.is_none());
    assert!(fields.policyholder_name.is_none());
    assert!(fields.incident_date.is_none());
    assert!(fields.incident_location.is_none());
    assert!(fields.description.is_none());

    let result = RoutingEngine::default_config().process(fields);
    assert_eq!(
        result.missing_fields(),
        &[
            MandatoryField::PolicyNumber,
            MandatoryField::PolicyholderName,
            MandatoryField::IncidentDate,
            MandatoryField::IncidentLocation,
            MandatoryField::Description,
        ]
    );
    assert_eq!(result.recommended_route(), RouteDecision::ManualReview);
    assert_eq!(
        result.reasoning(),
        "Missing mandatory fields: policyNumber, policyholderName, incidentDate, incidentLocation, description"
    );
}

#[test]
fn injury_notice_goes_to_specialist() {
    let text = "\
POLICY NUMBER: HO-20931
NAME OF INSURED: Marcus Bell
DATE OF LOSS: 09/30/2024
CITY, STATE: Tulsa, OK
DESCRIPTION OF ACCIDENT: Driver hit a pole and was taken by ambulance.
INJURED: Driver, neck strain
ESTIMATE AMOUNT: $6,200
";
    let fields = extract_fields(text);
    assert_eq!(fields.claim_type, Some(ClaimType::Injury));

    let result = RoutingEngine::default_config().process(fields);
    assert!(result.missing_fields().is_empty());
    assert_eq!(result.recommended_route(), RouteDecision::SpecialistQueue);
}

#[test]
fn result_serializes_to_four_members() {
    let result = RoutingEngine::default_config().process(extract_fields("ESTIMATE AMOUNT: $900"));
    let json = serde_json::to_value(&result).unwrap();
    let obj = json.as_object().unwrap();

    assert_eq!(obj.len(), 4);
    assert_eq!(obj["extractedFields"]["estimatedDamage"], 900);
    assert_eq!(obj["extractedFields"]["claimType"], "non-injury");
    assert!(obj["extractedFields"]["policyNumber"].is_null());
    assert_eq!(obj["recommendedRoute"], "Manual review");
}
