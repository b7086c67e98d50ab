// src/document/file.rs
// =============================================================================
// Loads a Document from a local HTML file.
// =============================================================================

use super::{parse_document, Document};
use crate::error::{GradeError, Result};
use std::path::Path;
use tracing::debug;

// Reads the whole file and parses it
//
// The bytes are decoded as UTF-8, replacing invalid sequences with U+FFFD,
// so a page saved in a legacy encoding still grades instead of failing.
pub fn load_document_from_file(path: &Path) -> Result<Document> {
    let bytes = std::fs::read(path).map_err(|source| GradeError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), bytes = bytes.len(), "read html file");

    Ok(parse_document(&String::from_utf8_lossy(&bytes)))
}
