//! Command implementations.

pub mod batch;
pub mod fields;
pub mod process;

pub use self::batch::execute_batch;
pub use self::fields::execute_fields;
pub use self::process::execute_process;

use crate::error::{CliError, Result};
use std::fs;
use std::path::Path;

/// Read one document as UTF-8 text.
///
/// Failing here aborts the run; the pipeline itself never sees partial text.
pub(crate) fn read_document(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| CliError::InvalidInput(format!("Failed to read {}: {}", path.display(), e)))
}
