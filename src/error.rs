// src/error.rs
// =============================================================================
// The error type shared by every stage of the grading pipeline.
//
// Two families of errors exist:
// - Validation errors (missing file, malformed URL). These are the user's
//   fault, get a plain one-line message and exit code 1.
// - Everything else (unreadable files, bad JSON, bad selectors, network
//   failures). These are fatal and exit with code 2.
//
// Rust concepts:
// - thiserror: derives std::error::Error and Display from attributes
// - #[source]: keeps the underlying error so `{:#}` prints the whole chain
// =============================================================================

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GradeError {
    /// A path given on the command line does not exist
    #[error("{} does not exist. Exiting.", .0.display())]
    MissingFile(PathBuf),

    /// The --url value does not look like an http url
    #[error("'{0}' is not a valid http url")]
    InvalidUrl(String),

    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// checks.json is not a JSON array of strings
    #[error("{} is not a valid checks file", .path.display())]
    MalformedChecks {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("request to {url} timed out after {seconds}s")]
    Timeout { url: String, seconds: u64 },

    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to serialize report")]
    Report(#[from] serde_json::Error),
}

impl GradeError {
    /// Process exit status for this error
    ///
    /// Validation failures exit with 1, every other fatal error with 2.
    pub fn exit_code(&self) -> i32 {
        match self {
            GradeError::MissingFile(_) | GradeError::InvalidUrl(_) => 1,
            _ => 2,
        }
    }
}

pub type Result<T> = std::result::Result<T, GradeError>;
