// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// clap only parses here. Checking that files exist and that the URL looks
// right happens in `Cli::into_target`, which uses the pure validators from
// the library so the same rules can be unit tested.
// =============================================================================

use clap::Parser;
use html_grader::error::Result;
use html_grader::validate::{validate_file_exists, validate_url};
use std::path::PathBuf;

pub const HTML_FILE_DEFAULT: &str = "index.html";
pub const CHECKS_FILE_DEFAULT: &str = "checks.json";
pub const TIMEOUT_SECS_DEFAULT: u64 = 30;

#[derive(Parser, Debug)]
#[command(
    name = "html-grader",
    version,
    about = "Grade an HTML page for the presence of CSS selectors",
    long_about = "html-grader loads an HTML page from a file or URL, checks every selector listed \
                  in a JSON checks file and prints a JSON object mapping each selector to true or false."
)]
pub struct Cli {
    /// URL to check (takes precedence over --file)
    #[arg(short, long)]
    pub url: Option<String>,

    /// Path to the HTML file to check
    ///
    /// Defaults to index.html when no --url is given
    #[arg(short, long, value_name = "HTML_FILE")]
    pub file: Option<PathBuf>,

    /// Path to the JSON array of selectors
    #[arg(short, long, value_name = "CHECK_FILE", default_value = CHECKS_FILE_DEFAULT)]
    pub checks: PathBuf,

    /// Seconds to wait for the page when using --url (0 waits forever)
    #[arg(short, long, value_name = "SECONDS", default_value_t = TIMEOUT_SECS_DEFAULT)]
    pub timeout: u64,

    /// Log progress to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Where the page to grade comes from, after validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    File(PathBuf),
    Url(String),
}

/// Validated options for one grading run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeOptions {
    pub target: Target,
    pub checks: PathBuf,
    pub timeout_secs: u64,
}

impl Cli {
    // Validates the parsed flags and picks the pipeline
    //
    // Validation order follows the flags: url, file, checks. An explicit
    // --file is checked even when --url wins, so a typo is never silently
    // ignored; the default index.html is only checked when it will be read.
    //
    // Defaults go through the same checks as explicit flags. A missing
    // default checks.json stops the run here with exit 1, before any fetch,
    // instead of surfacing later as a read error.
    pub fn into_target(self) -> Result<GradeOptions> {
        if let Some(url) = &self.url {
            validate_url(url)?;
        }
        if let Some(file) = &self.file {
            validate_file_exists(file)?;
        }

        let target = match (self.url, self.file) {
            (Some(url), _) => Target::Url(url),
            (None, Some(file)) => Target::File(file),
            (None, None) => {
                let file = PathBuf::from(HTML_FILE_DEFAULT);
                validate_file_exists(&file)?;
                Target::File(file)
            }
        };

        validate_file_exists(&self.checks)?;

        Ok(GradeOptions {
            target,
            checks: self.checks,
            timeout_secs: self.timeout,
        })
    }
}
