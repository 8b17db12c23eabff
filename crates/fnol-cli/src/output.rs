//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use fnol_domain::{ClaimResult, ExtractedFields, MandatoryField, RouteDecision, MANDATORY_FIELDS};
use serde::Serialize;

/// One processed file in a batch run.
#[derive(Debug, Serialize)]
pub struct BatchEntry {
    /// File name the text came from
    pub file: String,

    /// Pipeline output for that file
    pub result: ClaimResult,
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a single claim result.
    pub fn format_result(&self, result: &ClaimResult) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
            OutputFormat::Summary => Ok(self.summary(result)),
        }
    }

    /// Format the results of a batch run.
    pub fn format_batch(&self, entries: &[BatchEntry]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(entries)?),
            OutputFormat::Summary => {
                if entries.is_empty() {
                    return Ok(self.warning("No documents found."));
                }
                let blocks: Vec<String> = entries
                    .iter()
                    .map(|entry| {
                        format!(
                            "{}\n{}",
                            self.colorize(&format!("== {} ==", entry.file), "cyan"),
                            self.summary(&entry.result)
                        )
                    })
                    .collect();
                Ok(blocks.join("\n\n"))
            }
        }
    }

    /// Format extracted fields on their own.
    pub fn format_fields(&self, fields: &ExtractedFields) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(fields)?),
            OutputFormat::Summary => Ok(self.field_lines(fields)),
        }
    }

    fn summary(&self, result: &ClaimResult) -> String {
        let route = result.recommended_route();
        let missing = if result.missing_fields().is_empty() {
            "none".to_string()
        } else {
            result
                .missing_fields()
                .iter()
                .map(|f| f.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        };

        format!(
            "Route:     {}\nReasoning: {}\nMissing:   {}\nFields:\n{}",
            self.colorize(route.as_str(), route_color(route)),
            result.reasoning(),
            missing,
            self.field_lines(result.extracted_fields())
        )
    }

    fn field_lines(&self, fields: &ExtractedFields) -> String {
        MANDATORY_FIELDS
            .iter()
            .map(|field| {
                let value = field_value(fields, *field)
                    .unwrap_or_else(|| self.colorize("(missing)", "yellow"));
                format!("  {:<18} {}", field.as_str(), value)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

fn route_color(route: RouteDecision) -> &'static str {
    match route {
        RouteDecision::InvestigationFlag => "red",
        RouteDecision::ManualReview => "yellow",
        RouteDecision::SpecialistQueue => "blue",
        RouteDecision::FastTrack => "green",
    }
}

/// Display value of one schema field, `None` when absent.
fn field_value(fields: &ExtractedFields, field: MandatoryField) -> Option<String> {
    if !fields.is_present(field) {
        return None;
    }
    match field {
        MandatoryField::PolicyNumber => fields.policy_number.clone(),
        MandatoryField::PolicyholderName => fields.policyholder_name.clone(),
        MandatoryField::IncidentDate => fields.incident_date.clone(),
        MandatoryField::IncidentLocation => fields.incident_location.clone(),
        MandatoryField::Description => fields.description.clone(),
        MandatoryField::EstimatedDamage => fields.estimated_damage.map(|d| format!("${}", d)),
        MandatoryField::ClaimType => fields.claim_type.map(|t| t.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fnol_domain::ClaimType;

    fn create_test_result() -> ClaimResult {
        let fields = ExtractedFields {
            policy_number: Some("PA-2024-001".to_string()),
            estimated_damage: Some(45_000),
            claim_type: Some(ClaimType::NonInjury),
            ..Default::default()
        };
        ClaimResult::new(
            fields,
            vec![MandatoryField::PolicyholderName, MandatoryField::IncidentDate],
            RouteDecision::ManualReview,
            "Missing mandatory fields: policyholderName, incidentDate",
        )
    }

    #[test]
    fn test_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_result(&create_test_result()).unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["recommendedRoute"], "Manual review");
        assert_eq!(value["extractedFields"]["estimatedDamage"], 45_000);
        assert_eq!(value["missingFields"][0], "policyholderName");
    }

    #[test]
    fn test_summary_format() {
        let formatter = Formatter::new(OutputFormat::Summary, false);
        let output = formatter.format_result(&create_test_result()).unwrap();

        assert!(output.contains("Route:     Manual review"));
        assert!(output.contains("Missing:   policyholderName, incidentDate"));
        assert!(output.contains("policyNumber       PA-2024-001"));
        assert!(output.contains("estimatedDamage    $45000"));
        assert!(output.contains("claimType          non-injury"));
        assert!(output.contains("incidentLocation   (missing)"));
    }

    #[test]
    fn test_batch_json_lists_files() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let entries = vec![BatchEntry {
            file: "a.txt".to_string(),
            result: create_test_result(),
        }];
        let output = formatter.format_batch(&entries).unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value[0]["file"], "a.txt");
        assert_eq!(value[0]["result"]["recommendedRoute"], "Manual review");
    }

    #[test]
    fn test_empty_batch_summary() {
        let formatter = Formatter::new(OutputFormat::Summary, false);
        let output = formatter.format_batch(&[]).unwrap();
        assert!(output.contains("No documents found"));
    }

    #[test]
    fn test_fields_json_has_all_keys() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_fields(&ExtractedFields::default()).unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        for field in MANDATORY_FIELDS {
            assert!(value[field.as_str()].is_null());
        }
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Summary, false);
        assert_eq!(formatter.warning("test"), "⚠ test");
    }
}
