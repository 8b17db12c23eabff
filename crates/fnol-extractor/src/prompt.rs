//! LLM prompt engineering for field extraction

/// Builds the extraction prompt for one document
pub struct PromptBuilder {
    text: String,
    max_chars: usize,
}

impl PromptBuilder {
    /// Create a new prompt builder over the full document text
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            max_chars: usize::MAX,
        }
    }

    /// Embed at most `max_chars` characters of the document
    pub fn with_max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = max_chars;
        self
    }

    /// Build the complete extraction prompt
    pub fn build(&self) -> String {
        let document = truncate_chars(&self.text, self.max_chars);

        let mut prompt = String::with_capacity(
            EXTRACTION_INSTRUCTIONS.len() + document.len() + OUTPUT_FORMAT_REMINDER.len() + 64,
        );

        // 1. Role, schema and rules
        prompt.push_str(EXTRACTION_INSTRUCTIONS);
        prompt.push_str("\n\n");

        // 2. The document
        prompt.push_str("FNOL DOCUMENT:\n");
        prompt.push_str("---\n");
        prompt.push_str(document);
        prompt.push_str("\n---\n\n");

        // 3. Output format reminder
        prompt.push_str(OUTPUT_FORMAT_REMINDER);

        prompt
    }
}

/// Longest prefix of `text` holding at most `max_chars` characters
pub(crate) fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

const EXTRACTION_INSTRUCTIONS: &str = r#"You are processing a First Notice of Loss (FNOL) for an insurance claim.
Read the document and fill in exactly these fields:

- policyNumber: policy identifier as written, or null
- policyholderName: full name of the insured, or null
- incidentDate: date of loss as MM/DD/YYYY, or null
- incidentLocation: city and state of the loss, or null
- description: short account of what happened, or null
- estimatedDamage: estimated damage in whole dollars as an integer, or null
- claimType: one of "injury", "theft", "fire", "non-injury"

Rules:
- Use null for anything the document does not state; never invent values
- Do not use empty strings
- claimType is "injury" only when a person was actually hurt"#;

const OUTPUT_FORMAT_REMINDER: &str = r#"Output format (one JSON object only, no additional text):
{
  "policyNumber": "...",
  "policyholderName": "...",
  "incidentDate": "MM/DD/YYYY",
  "incidentLocation": "...",
  "description": "...",
  "estimatedDamage": 0,
  "claimType": "non-injury"
}

JSON OUTPUT:"#;
