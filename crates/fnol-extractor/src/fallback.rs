//! Deterministic pattern-based field extraction
//!
//! Used when the model path is unavailable or its output is unusable, and
//! callable on its own for batch runs over pre-extracted text. Each field has
//! its own independent rule keyed on the printed labels of the standard
//! FNOL/ACORD loss notice.

use crate::prompt::truncate_chars;
use fnol_domain::traits::FieldExtractor;
use fnol_domain::{ClaimType, ExtractedFields};
use regex::Regex;
use std::sync::LazyLock;
use tracing::info;

/// Default characters kept from an extracted description
pub const DEFAULT_MAX_DESCRIPTION_CHARS: usize = 500;

static POLICY_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)POLICY NUMBER\s*[:\-]?\s*([\w\-]+)"));

static POLICYHOLDER_NAME: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)NAME OF INSURED\s*(?:\([^)]+\)\s*)?[:\-]?\s*([A-Za-z][A-Za-z ]+?)(?:\s{2,}|\n|$)")
});

static INCIDENT_DATE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)DATE OF LOSS[^\n]*?([0-9]{2}/[0-9]{2}/[0-9]{4})"));

static INCIDENT_LOCATION: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?i)CITY,\s*STATE(?:,\s*ZIP)?\s*[:\-]?\s*([A-Za-z\s,]+?)(?:\s+[0-9]{5}|\n(?-i:[A-Z])|\n\n|$)",
    )
});

static DESCRIPTION_LABEL: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)DESCRIPTION OF ACCIDENT\s*[:\-]?\s*"));

/// Section labels that follow the description on the form
static DESCRIPTION_END: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)POLICE OR FIRE DEPARTMENT|INSURED VEHICLE|WITNESSES"));

static ESTIMATE_AMOUNT: LazyLock<Regex> =
    LazyLock::new(|| compile(r"ESTIMATE AMOUNT\s*[:\-]?\s*\$?([0-9]+(?:,[0-9]{3})*)"));

// Claim type patterns run against the uppercased document.
static INJURED_WITH_VALUE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"INJURED\s*[:\-]?\s*[A-Z]"));

static INJURY_PHRASES: LazyLock<Regex> =
    LazyLock::new(|| compile(r"EXTENT OF INJURY|INJURY\s+TO|INJURED\s+PARTIES"));

static THEFT: LazyLock<Regex> = LazyLock::new(|| compile(r"\b(?:THEFT|STOLEN)\b"));

static FIRE: LazyLock<Regex> = LazyLock::new(|| compile(r"\bFIRE\b"));

static DEPARTMENT_SUFFIX: LazyLock<Regex> = LazyLock::new(|| compile(r"^\s+DEPARTMENT"));

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| compile(r"\s+"));

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("Invalid fallback regex pattern")
}

/// Pattern-based extractor
///
/// # Examples
///
/// ```
/// use fnol_extractor::FallbackExtractor;
/// use fnol_domain::traits::FieldExtractor;
///
/// let fields = FallbackExtractor::default().extract("ESTIMATE AMOUNT: $45,000");
/// assert_eq!(fields.estimated_damage, Some(45_000));
/// assert!(fields.policy_number.is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackExtractor {
    max_description_chars: usize,
}

impl FallbackExtractor {
    /// Create a fallback extractor keeping at most `max_description_chars` of description
    pub fn new(max_description_chars: usize) -> Self {
        Self {
            max_description_chars,
        }
    }
}

impl Default for FallbackExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DESCRIPTION_CHARS)
    }
}

impl FieldExtractor for FallbackExtractor {
    fn extract(&self, text: &str) -> ExtractedFields {
        let fields = ExtractedFields {
            policy_number: capture(&POLICY_NUMBER, text),
            policyholder_name: capture(&POLICYHOLDER_NAME, text),
            incident_date: capture(&INCIDENT_DATE, text),
            incident_location: capture(&INCIDENT_LOCATION, text),
            description: description(text, self.max_description_chars),
            estimated_damage: estimated_damage(text),
            claim_type: Some(claim_type(text)),
        };

        info!("Extracted {} fields using fallback", fields.present_count());

        fields
    }
}

/// Run the fallback rules with default limits
pub fn extract_fields(text: &str) -> ExtractedFields {
    FallbackExtractor::default().extract(text)
}

/// First capture group, trimmed and whitespace-collapsed; `None` when empty
fn capture(pattern: &Regex, text: &str) -> Option<String> {
    let value = pattern.captures(text)?.get(1)?.as_str();
    non_empty(collapse_whitespace(value.trim()))
}

fn collapse_whitespace(value: &str) -> String {
    WHITESPACE.replace_all(value, " ").into_owned()
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Text after the description label up to the next known section
fn description(text: &str, max_chars: usize) -> Option<String> {
    let label = DESCRIPTION_LABEL.find(text)?;
    let rest = &text[label.end()..];

    let end = DESCRIPTION_END
        .find(rest)
        .map(|m| m.start())
        .unwrap_or(rest.len());

    let collapsed = collapse_whitespace(rest[..end].trim());
    non_empty(truncate_chars(&collapsed, max_chars).to_string())
}

/// Damage estimate in whole dollars, thousands separators removed
///
/// The pattern only admits digits, so the one parse failure left is overflow;
/// such amounts saturate at `u64::MAX` instead of reading as missing.
fn estimated_damage(text: &str) -> Option<u64> {
    let digits = ESTIMATE_AMOUNT.captures(text)?.get(1)?.as_str().replace(',', "");
    Some(digits.parse().unwrap_or(u64::MAX))
}

/// Classify the claim; first match wins, `NonInjury` when nothing matches
fn claim_type(text: &str) -> ClaimType {
    let upper = text.to_uppercase();

    if mentions_injury(&upper) {
        return ClaimType::Injury;
    }

    if THEFT.is_match(&upper) {
        return ClaimType::Theft;
    }

    let fire = FIRE
        .find_iter(&upper)
        .any(|m| !DEPARTMENT_SUFFIX.is_match(&upper[m.end()..]));
    if fire {
        return ClaimType::Fire;
    }

    ClaimType::NonInjury
}

/// An `INJURED` entry filled with something other than `NONE`, or an injury phrase
fn mentions_injury(upper: &str) -> bool {
    let injured_entry = INJURED_WITH_VALUE.find_iter(upper).any(|m| {
        // The match ends on the single ASCII letter that opens the entry
        let value_start = m.end() - 1;
        !upper[value_start..].starts_with("NONE")
    });

    injured_entry || INJURY_PHRASES.is_match(upper)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patterns_compile() {
        for pattern in [
            &POLICY_NUMBER,
            &POLICYHOLDER_NAME,
            &INCIDENT_DATE,
            &INCIDENT_LOCATION,
            &DESCRIPTION_LABEL,
            &DESCRIPTION_END,
            &ESTIMATE_AMOUNT,
            &INJURED_WITH_VALUE,
            &INJURY_PHRASES,
            &THEFT,
            &FIRE,
            &DEPARTMENT_SUFFIX,
            &WHITESPACE,
        ] {
            LazyLock::force(pattern);
        }
    }

    #[test]
    fn test_policy_number() {
        assert_eq!(
            capture(&POLICY_NUMBER, "POLICY NUMBER: PA-2024-00917 LINE OF BUSINESS").as_deref(),
            Some("PA-2024-00917")
        );
        assert_eq!(
            capture(&POLICY_NUMBER, "policy number - 77812").as_deref(),
            Some("77812")
        );
        assert_eq!(capture(&POLICY_NUMBER, "POLICY: 123"), None);
    }

    #[test]
    fn test_policyholder_name_with_hint() {
        let text = "NAME OF INSURED (First, Middle, Last): John  Q Public   PHONE";
        assert_eq!(capture(&POLICYHOLDER_NAME, text).as_deref(), Some("John"));

        let text = "NAME OF INSURED (First, Middle, Last): Maria Elena Lopez\nADDRESS";
        assert_eq!(
            capture(&POLICYHOLDER_NAME, text).as_deref(),
            Some("Maria Elena Lopez")
        );
    }

    #[test]
    fn test_policyholder_name_without_hint() {
        let text = "NAME OF INSURED: Jane Smith";
        assert_eq!(capture(&POLICYHOLDER_NAME, text).as_deref(), Some("Jane Smith"));
    }

    #[test]
    fn test_incident_date() {
        let text = "DATE OF LOSS AND TIME: 03/15/2024 2:30 PM";
        assert_eq!(capture(&INCIDENT_DATE, text).as_deref(), Some("03/15/2024"));

        // Date must be on the label's line
        let text = "DATE OF LOSS\n03/15/2024";
        assert_eq!(capture(&INCIDENT_DATE, text), None);
    }

    #[test]
    fn test_incident_location_stops_at_zip() {
        let text = "CITY, STATE, ZIP: Austin, TX 78701\nCOUNTRY: USA";
        assert_eq!(capture(&INCIDENT_LOCATION, text).as_deref(), Some("Austin, TX"));
    }

    #[test]
    fn test_incident_location_stops_at_uppercase_line() {
        let text = "CITY, STATE: Portland, OR\nREPORTED BY: agent";
        assert_eq!(capture(&INCIDENT_LOCATION, text).as_deref(), Some("Portland, OR"));
    }

    #[test]
    fn test_incident_location_stops_at_blank_line() {
        let text = "CITY, STATE: Salem, OR\n\nmore text";
        assert_eq!(capture(&INCIDENT_LOCATION, text).as_deref(), Some("Salem, OR"));
    }

    #[test]
    fn test_description_bounded_by_next_section() {
        let text = "DESCRIPTION OF ACCIDENT: Vehicle was rear-ended\n   at the light.\nPOLICE OR FIRE DEPARTMENT CONTACTED: yes";
        assert_eq!(
            description(text, 500).as_deref(),
            Some("Vehicle was rear-ended at the light.")
        );
    }

    #[test]
    fn test_description_runs_to_end() {
        let text = "description of accident - hail damage to roof";
        assert_eq!(description(text, 500).as_deref(), Some("hail damage to roof"));
    }

    #[test]
    fn test_description_truncated() {
        let text = format!("DESCRIPTION OF ACCIDENT: {}", "x".repeat(800));
        let desc = description(&text, 500).unwrap();
        assert_eq!(desc.chars().count(), 500);
    }

    #[test]
    fn test_description_empty_is_absent() {
        assert_eq!(description("DESCRIPTION OF ACCIDENT: \nWITNESSES: none", 500), None);
        assert_eq!(description("no label here", 500), None);
    }

    #[test]
    fn test_estimated_damage() {
        assert_eq!(estimated_damage("ESTIMATE AMOUNT: $45,000"), Some(45_000));
        assert_eq!(estimated_damage("ESTIMATE AMOUNT 1,234,567"), Some(1_234_567));
        assert_eq!(estimated_damage("ESTIMATE AMOUNT: 800"), Some(800));
        assert_eq!(estimated_damage("estimate amount: 800"), None);
        assert_eq!(estimated_damage("ESTIMATE AMOUNT: TBD"), None);
    }

    #[test]
    fn test_huge_estimate_saturates() {
        assert_eq!(
            estimated_damage("ESTIMATE AMOUNT: $99,999,999,999,999,999,999,999"),
            Some(u64::MAX)
        );
    }

    #[test]
    fn test_claim_type_injury() {
        assert_eq!(claim_type("INJURED: Driver, whiplash"), ClaimType::Injury);
        assert_eq!(claim_type("Extent of injury: broken arm"), ClaimType::Injury);
        assert_eq!(claim_type("injury to passenger"), ClaimType::Injury);
    }

    #[test]
    fn test_claim_type_injured_none_is_not_injury() {
        assert_eq!(claim_type("INJURED: NONE"), ClaimType::NonInjury);
        assert_eq!(
            claim_type("INJURED: NONE\nINJURED - Passenger"),
            ClaimType::Injury
        );
    }

    #[test]
    fn test_claim_type_priority() {
        // Injury beats theft
        assert_eq!(claim_type("stolen car, injured: driver"), ClaimType::Injury);
        // Theft beats fire
        assert_eq!(claim_type("vehicle stolen and set on fire"), ClaimType::Theft);
    }

    #[test]
    fn test_claim_type_fire_department_excluded() {
        assert_eq!(
            claim_type("POLICE OR FIRE DEPARTMENT CONTACTED: police"),
            ClaimType::NonInjury
        );
        assert_eq!(
            claim_type("FIRE DEPARTMENT came; engine fire destroyed the car"),
            ClaimType::Fire
        );
    }

    #[test]
    fn test_claim_type_word_boundaries() {
        assert_eq!(claim_type("firewood delivery collision"), ClaimType::NonInjury);
        assert_eq!(claim_type("THEFTS"), ClaimType::NonInjury);
    }

    #[test]
    fn test_estimate_only_document() {
        let fields = extract_fields("ESTIMATE AMOUNT: $45,000");
        assert_eq!(
            fields,
            ExtractedFields {
                estimated_damage: Some(45_000),
                claim_type: Some(ClaimType::NonInjury),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_custom_description_limit() {
        let extractor = FallbackExtractor::new(10);
        let fields = extractor.extract("DESCRIPTION OF ACCIDENT: a long description of events");
        assert_eq!(fields.description.as_deref(), Some("a long des"));
    }
}
