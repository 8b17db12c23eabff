//! Schema module - the fixed mandatory field set and fraud vocabulary

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the seven fields every complete claim must carry
///
/// Declaration order is the schema order; missing-field reports are always
/// emitted in this order regardless of how the fields were populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MandatoryField {
    /// Insurer-issued policy identifier
    PolicyNumber,

    /// Name of the insured party
    PolicyholderName,

    /// Date of loss (MM/DD/YYYY)
    IncidentDate,

    /// City and state where the loss occurred
    IncidentLocation,

    /// Free-text account of the incident
    Description,

    /// Estimated damage in whole dollars
    EstimatedDamage,

    /// Claim category
    ClaimType,
}

/// The mandatory schema, in its fixed declared order
pub const MANDATORY_FIELDS: [MandatoryField; 7] = [
    MandatoryField::PolicyNumber,
    MandatoryField::PolicyholderName,
    MandatoryField::IncidentDate,
    MandatoryField::IncidentLocation,
    MandatoryField::Description,
    MandatoryField::EstimatedDamage,
    MandatoryField::ClaimType,
];

/// Lowercase substrings that flag a description for investigation
pub const FRAUD_KEYWORDS: [&str; 3] = ["fraud", "inconsistent", "staged"];

impl MandatoryField {
    /// Get the wire name of the field
    pub fn as_str(&self) -> &'static str {
        match self {
            MandatoryField::PolicyNumber => "policyNumber",
            MandatoryField::PolicyholderName => "policyholderName",
            MandatoryField::IncidentDate => "incidentDate",
            MandatoryField::IncidentLocation => "incidentLocation",
            MandatoryField::Description => "description",
            MandatoryField::EstimatedDamage => "estimatedDamage",
            MandatoryField::ClaimType => "claimType",
        }
    }

    /// Look up a field by its wire name (exact match)
    pub fn parse(name: &str) -> Option<Self> {
        MANDATORY_FIELDS.iter().copied().find(|f| f.as_str() == name)
    }
}

impl fmt::Display for MandatoryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MandatoryField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Unknown field: {}", s))
    }
}
