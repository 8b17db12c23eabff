//! FNOL CLI library.
//!
//! Command-line harness around the extraction and routing core: reads
//! already-acquired document text from disk, runs the pipeline, and prints
//! the resulting claim records.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
