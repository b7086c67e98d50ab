// src/validate.rs
// =============================================================================
// Input validators for the command-line flags.
//
// These are pure functions: they never print and never exit. They hand back
// the input unchanged on success or a GradeError on failure, and the entry
// point decides what a failure means for the process (message + exit 1).
// That keeps them testable without spawning a subprocess.
// =============================================================================

use crate::error::{GradeError, Result};
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

// Optional http/https scheme, optional "www.", a host of at least three
// characters, then a dot and a three letter TLD at the very end.
// Only the end is anchored: "see http://example.com" is accepted too.
const URL_PATTERN: &str = r"((https?)://)?(www\.)?[a-z0-9.-]{3,}\.[a-z]{3}$";

fn url_regex() -> &'static Regex {
    static URL_REGEX: OnceLock<Regex> = OnceLock::new();
    URL_REGEX.get_or_init(|| Regex::new(URL_PATTERN).expect("URL_PATTERN is a valid regex"))
}

/// Checks that `path` names an existing file or directory.
pub fn validate_file_exists(path: &Path) -> Result<&Path> {
    if path.exists() {
        Ok(path)
    } else {
        Err(GradeError::MissingFile(path.to_path_buf()))
    }
}

/// Checks that `candidate` looks like an http url.
///
/// The pattern is deliberately loose; it only screens out obvious typos
/// before any network access happens.
pub fn validate_url(candidate: &str) -> Result<&str> {
    if url_regex().is_match(candidate) {
        Ok(candidate)
    } else {
        Err(GradeError::InvalidUrl(candidate.to_string()))
    }
}
