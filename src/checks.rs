// src/checks.rs
// =============================================================================
// Loads the list of selectors to check from a JSON file.
//
// The file is a plain JSON array of strings:
//
//   ["h1", "head > title", "div.container"]
//
// The list is sorted after loading so the report always comes out in the
// same order no matter how the file was written. Duplicates are kept.
// Sorting compares UTF-8 bytes, the same order the report's map uses.
// =============================================================================

use crate::error::{GradeError, Result};
use std::path::Path;
use tracing::debug;

/// Selectors to evaluate, sorted ascending.
pub type CheckList = Vec<String>;

pub fn load_check_list(path: &Path) -> Result<CheckList> {
    let raw = std::fs::read(path).map_err(|source| GradeError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut checks: CheckList =
        serde_json::from_slice(&raw).map_err(|source| GradeError::MalformedChecks {
            path: path.to_path_buf(),
            source,
        })?;
    checks.sort();

    debug!(path = %path.display(), count = checks.len(), "loaded checks");

    Ok(checks)
}
