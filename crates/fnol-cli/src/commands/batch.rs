//! Batch command implementation.

use super::read_document;
use crate::cli::BatchArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::{BatchEntry, Formatter};
use fnol_domain::traits::FieldExtractor;
use fnol_extractor::FallbackExtractor;
use fnol_routing::RoutingEngine;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Execute the batch command.
pub fn execute_batch(args: BatchArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let entries = process_dir(&args.dir, config)?;
    println!("{}", formatter.format_batch(&entries)?);
    Ok(())
}

/// Route every `.txt` document in `dir` through the fallback extractor.
pub fn process_dir(dir: &Path, config: &Config) -> Result<Vec<BatchEntry>> {
    let extractor = FallbackExtractor::new(config.extractor.max_description_chars);
    let engine = RoutingEngine::new(config.routing.clone());

    let mut entries = Vec::new();
    for path in list_documents(dir)? {
        let text = read_document(&path)?;
        let result = engine.process(extractor.extract(&text));
        let file = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        entries.push(BatchEntry { file, result });
    }

    info!("Processed {} documents from {}", entries.len(), dir.display());
    Ok(entries)
}

/// `.txt` files directly inside `dir`, sorted by name.
pub fn list_documents(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(CliError::InvalidInput(format!(
            "{} is not a directory",
            dir.display()
        )));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "txt") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
