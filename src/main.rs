// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Validate them (missing files and bad URLs stop here with exit code 1)
// 3. Run the file or URL pipeline
// 4. Print the JSON report
// 5. Exit with proper code (0 = success, 1 = invalid input, 2 = error)
//
// Rust concepts used:
// - async/await: the URL pipeline waits on the network exactly once
// - Result<T, E>: errors bubble up to main, which picks the exit code
// - match: choosing between the file and URL pipelines
// =============================================================================

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, GradeOptions, Target};
use html_grader::document::parse_target_url;
use html_grader::{
    check_html_file, check_html_url, logging, report, GradeError, PageFetcher, ResultMap,
};
use tracing::info;

// Single-threaded runtime: there is only ever one task, the optional fetch
#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    logging::init_cli_logger(cli.verbose);

    let exit_code = match run(cli).await {
        Ok(()) => 0,
        Err(e) => match e.downcast_ref::<GradeError>() {
            // Invalid input: a one-line message on stdout, like a usage error
            Some(grade_error) if grade_error.exit_code() == 1 => {
                println!("{}", grade_error);
                1
            }
            Some(grade_error) => {
                eprintln!("Error: {:#}", e);
                grade_error.exit_code()
            }
            None => {
                eprintln!("Error: {:#}", e);
                2
            }
        },
    };

    std::process::exit(exit_code);
}

async fn run(cli: Cli) -> Result<()> {
    let options = cli.into_target()?;

    let results = match &options.target {
        Target::File(path) => check_html_file(path, &options.checks)?,
        Target::Url(candidate) => grade_url(candidate, &options).await?,
    };

    let passed = results.iter().filter(|(_, present)| *present).count();
    info!(passed, total = results.len(), "grading finished");

    report::print_report(&results)?;
    Ok(())
}

async fn grade_url(candidate: &str, options: &GradeOptions) -> html_grader::Result<ResultMap> {
    let url = parse_target_url(candidate)?;
    let fetcher = PageFetcher::new(options.timeout_secs)?;
    check_html_url(&fetcher, &url, &options.checks).await
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why does main() call std::process::exit instead of returning Result?
//    - Returning Err from main always exits with code 1
//    - We need three codes: 0 = ok, 1 = bad input, 2 = anything else
//
// 2. What is downcast_ref?
//    - anyhow::Error can hold any error type
//    - downcast_ref::<GradeError>() gives it back if that is what it holds
//    - That is how main finds out which exit code the error asks for
//
// 3. Why is the runtime "current_thread"?
//    - The only async work is one HTTP request
//    - A single thread is all it needs, and the file pipeline never awaits
// -----------------------------------------------------------------------------
