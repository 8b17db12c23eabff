//! Claim type module - the closed set of claim categories

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a claim
///
/// Injury claims are routed to specialists; the other three only matter
/// through the damage and completeness rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClaimType {
    /// Bodily injury to any party
    #[serde(rename = "injury")]
    Injury,

    /// Theft of the insured property
    #[serde(rename = "theft")]
    Theft,

    /// Fire damage
    #[serde(rename = "fire")]
    Fire,

    /// Anything else (collision, weather, vandalism...)
    #[serde(rename = "non-injury")]
    NonInjury,
}

impl ClaimType {
    /// Get the claim type name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimType::Injury => "injury",
            ClaimType::Theft => "theft",
            ClaimType::Fire => "fire",
            ClaimType::NonInjury => "non-injury",
        }
    }

    /// Parse a claim type leniently (case-insensitive, `_` or missing hyphen accepted)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "injury" => Some(ClaimType::Injury),
            "theft" => Some(ClaimType::Theft),
            "fire" => Some(ClaimType::Fire),
            "non-injury" | "non_injury" | "noninjury" | "non injury" => Some(ClaimType::NonInjury),
            _ => None,
        }
    }
}

impl fmt::Display for ClaimType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ClaimType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid claim type: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_variants() {
        assert_eq!(ClaimType::parse("injury"), Some(ClaimType::Injury));
        assert_eq!(ClaimType::parse("THEFT"), Some(ClaimType::Theft));
        assert_eq!(ClaimType::parse(" Fire "), Some(ClaimType::Fire));
        assert_eq!(ClaimType::parse("non-injury"), Some(ClaimType::NonInjury));
        assert_eq!(ClaimType::parse("non_injury"), Some(ClaimType::NonInjury));
        assert_eq!(ClaimType::parse("flood"), None);
        assert_eq!(ClaimType::parse(""), None);
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&ClaimType::NonInjury).unwrap(), "\"non-injury\"");
        let parsed: ClaimType = serde_json::from_str("\"fire\"").unwrap();
        assert_eq!(parsed, ClaimType::Fire);
    }
}
