//! Process command implementation.

use super::read_document;
use crate::cli::ProcessArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use fnol_domain::ClaimResult;
use fnol_extractor::Extractor;
use fnol_llm::OllamaProvider;
use fnol_routing::RoutingEngine;
use std::path::Path;
use tracing::info;

/// Execute the process command.
pub fn execute_process(args: ProcessArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let result = process_file(&args.file, config)?;
    println!("{}", formatter.format_result(&result)?);
    Ok(())
}

/// Run the full two-stage pipeline on one file.
pub fn process_file(path: &Path, config: &Config) -> Result<ClaimResult> {
    let text = read_document(path)?;

    let provider = config.llm.enabled.then(|| {
        OllamaProvider::new(&config.llm.endpoint, &config.llm.model)
            .with_timeout(config.extractor.extraction_timeout())
    });
    let extractor = Extractor::from_optional(provider, config.extractor.clone());

    let extraction = extractor.extract_with_strategy(&text);
    info!("{}: {} extraction", path.display(), extraction.strategy);

    Ok(RoutingEngine::new(config.routing.clone()).process(extraction.fields))
}
