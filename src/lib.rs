// src/lib.rs
// =============================================================================
// html-grader grades an HTML page against a checklist of CSS selectors.
//
// The binary (src/main.rs) is a thin wrapper around this library:
// - validate: checks the command-line inputs
// - document: loads a page from a file or a URL
// - checks: loads the selector list
// - checker: evaluates the selectors
// - report: prints the result as JSON
// - pipeline: ties the steps together for each input source
// =============================================================================

pub mod checker;
pub mod checks;
pub mod document;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod report;
pub mod validate;

pub use checker::{evaluate, ResultMap};
pub use checks::{load_check_list, CheckList};
pub use document::{Document, PageFetcher};
pub use error::{GradeError, Result};
pub use pipeline::{check_html_file, check_html_url};
