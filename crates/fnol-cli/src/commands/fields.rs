//! Fields command implementation.

use super::read_document;
use crate::cli::FieldsArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use fnol_domain::traits::FieldExtractor;
use fnol_extractor::FallbackExtractor;

/// Execute the fields command.
pub fn execute_fields(args: FieldsArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let text = read_document(&args.file)?;
    let fields = FallbackExtractor::new(config.extractor.max_description_chars).extract(&text);
    println!("{}", formatter.format_fields(&fields)?);
    Ok(())
}
