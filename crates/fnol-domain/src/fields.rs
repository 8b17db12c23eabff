//! Extracted fields - the typed record produced from an FNOL document

use crate::{ClaimType, MandatoryField, MANDATORY_FIELDS};
use serde::{Deserialize, Serialize};

/// Fields extracted from a single FNOL document
///
/// Exactly one member per [`MandatoryField`]. An absent value is `None`,
/// never an empty string, so that "missing" and "present but empty" stay
/// distinguishable downstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedFields {
    /// Policy identifier
    pub policy_number: Option<String>,

    /// Name of the insured
    pub policyholder_name: Option<String>,

    /// Date of loss, MM/DD/YYYY
    pub incident_date: Option<String>,

    /// City/state of the incident
    pub incident_location: Option<String>,

    /// Accident description
    pub description: Option<String>,

    /// Estimated damage in whole dollars
    pub estimated_damage: Option<u64>,

    /// Claim category
    pub claim_type: Option<ClaimType>,
}

impl ExtractedFields {
    /// Whether a field carries a usable value
    ///
    /// `None`, an empty string, and a zero damage estimate all count as absent.
    pub fn is_present(&self, field: MandatoryField) -> bool {
        match field {
            MandatoryField::PolicyNumber => has_text(&self.policy_number),
            MandatoryField::PolicyholderName => has_text(&self.policyholder_name),
            MandatoryField::IncidentDate => has_text(&self.incident_date),
            MandatoryField::IncidentLocation => has_text(&self.incident_location),
            MandatoryField::Description => has_text(&self.description),
            MandatoryField::EstimatedDamage => matches!(self.estimated_damage, Some(amount) if amount > 0),
            MandatoryField::ClaimType => self.claim_type.is_some(),
        }
    }

    /// Number of schema fields carrying a usable value
    pub fn present_count(&self) -> usize {
        MANDATORY_FIELDS
            .iter()
            .filter(|field| self.is_present(**field))
            .count()
    }
}

fn has_text(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|s| !s.is_empty())
}
