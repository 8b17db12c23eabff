//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// FNOL triage - extract claim fields from intake documents and route them.
#[derive(Debug, Parser)]
#[command(name = "fnol")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Ollama endpoint
    #[arg(long, global = true, env = "FNOL_OLLAMA_URL")]
    pub endpoint: Option<String>,

    /// Model name
    #[arg(short, long, global = true, env = "FNOL_MODEL")]
    pub model: Option<String>,

    /// Skip the model and use the fallback patterns only
    #[arg(long, global = true)]
    pub no_llm: bool,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Pretty-printed JSON
    Json,
    /// Human-readable summary
    Summary,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract and route a single document
    Process(ProcessArgs),

    /// Route every .txt document in a directory using the fallback patterns
    Batch(BatchArgs),

    /// Show the fields the fallback patterns find in a document
    Fields(FieldsArgs),
}

/// Arguments for the process command.
#[derive(Debug, Parser)]
pub struct ProcessArgs {
    /// Text file holding the document
    pub file: PathBuf,
}

/// Arguments for the batch command.
#[derive(Debug, Parser)]
pub struct BatchArgs {
    /// Directory of .txt documents
    pub dir: PathBuf,
}

/// Arguments for the fields command.
#[derive(Debug, Parser)]
pub struct FieldsArgs {
    /// Text file holding the document
    pub file: PathBuf,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Summary => crate::config::OutputFormat::Summary,
        }
    }
}
