// src/logging.rs
// =============================================================================
// Sets up tracing for the CLI.
//
// Logs go to stderr so stdout only ever carries the JSON report. RUST_LOG
// wins over the --verbose flag when it is set.
// =============================================================================

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init_cli_logger(verbose: bool) {
    let default_filter = if verbose {
        "html_grader=debug"
    } else {
        "html_grader=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}
