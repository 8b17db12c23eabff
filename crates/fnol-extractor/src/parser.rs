//! Parse LLM output into extracted fields

use crate::error::ExtractorError;
use fnol_domain::{ClaimType, ExtractedFields, MandatoryField};
use serde_json::{Map, Value};
use tracing::debug;

/// Parse an LLM response into extracted fields
///
/// The response may carry prose or markdown around the object; everything
/// from the first `{` to the last `}` is decoded. Keys outside the schema are
/// ignored and values are coerced to the field types.
pub fn parse_llm_response(response: &str) -> Result<ExtractedFields, ExtractorError> {
    let json_str = extract_json(response)?;

    let json: Value = serde_json::from_str(json_str)?;

    let obj = json
        .as_object()
        .ok_or_else(|| ExtractorError::InvalidFormat("Expected JSON object".to_string()))?;

    let unknown = obj
        .keys()
        .filter(|key| MandatoryField::parse(key).is_none())
        .count();
    if unknown > 0 {
        debug!("Ignoring {} unknown keys in model output", unknown);
    }

    Ok(ExtractedFields {
        policy_number: text_field(obj, MandatoryField::PolicyNumber),
        policyholder_name: text_field(obj, MandatoryField::PolicyholderName),
        incident_date: text_field(obj, MandatoryField::IncidentDate),
        incident_location: text_field(obj, MandatoryField::IncidentLocation),
        description: text_field(obj, MandatoryField::Description),
        estimated_damage: obj
            .get(MandatoryField::EstimatedDamage.as_str())
            .and_then(amount_value),
        claim_type: obj
            .get(MandatoryField::ClaimType.as_str())
            .and_then(Value::as_str)
            .and_then(ClaimType::parse),
    })
}

/// Locate the first brace-delimited substring
fn extract_json(response: &str) -> Result<&str, ExtractorError> {
    let start = response.find('{');
    let end = response.rfind('}');

    match (start, end) {
        (Some(start), Some(end)) if start < end => Ok(&response[start..=end]),
        _ => Err(ExtractorError::InvalidFormat(
            "No JSON object found in response".to_string(),
        )),
    }
}

fn text_field(obj: &Map<String, Value>, field: MandatoryField) -> Option<String> {
    match obj.get(field.as_str())? {
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("null") {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        // Policy numbers occasionally come back as bare numbers
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Whole dollars; amounts beyond `u64::MAX` saturate
fn amount_value(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0)
                .map(|f| f.trunc() as u64)
        }),
        Value::String(s) => {
            let cleaned: String = s
                .trim()
                .trim_start_matches('$')
                .chars()
                .filter(|c| *c != ',' && !c.is_whitespace())
                .collect();
            cleaned.parse::<u64>().ok().or_else(|| {
                cleaned
                    .parse::<f64>()
                    .ok()
                    .filter(|f| f.is_finite() && *f >= 0.0)
                    .map(|f| f.trunc() as u64)
            })
        }
        _ => None,
    }
}
