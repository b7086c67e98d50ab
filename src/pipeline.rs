// src/pipeline.rs
// =============================================================================
// The two grading pipelines, one per input source.
//
//   file: read html -> load checks -> evaluate
//   url:  fetch html (await) -> load checks -> evaluate
//
// Both return a ResultMap and neither prints; reporting is the caller's job.
// For URLs the checks file is only read once the page has arrived.
// =============================================================================

use crate::checker::{evaluate, ResultMap};
use crate::checks::load_check_list;
use crate::document::{load_document_from_file, PageFetcher};
use crate::error::Result;
use std::path::Path;
use tracing::info;
use url::Url;

/// Grades a local HTML file against the selectors in `checks_path`.
pub fn check_html_file(html_path: &Path, checks_path: &Path) -> Result<ResultMap> {
    info!(file = %html_path.display(), "grading file");

    let document = load_document_from_file(html_path)?;
    let checks = load_check_list(checks_path)?;
    evaluate(&document, &checks)
}

/// Grades a remote page against the selectors in `checks_path`.
pub async fn check_html_url(
    fetcher: &PageFetcher,
    url: &Url,
    checks_path: &Path,
) -> Result<ResultMap> {
    info!(%url, "grading url");

    let document = fetcher.fetch(url).await?;
    let checks = load_check_list(checks_path)?;
    evaluate(&document, &checks)
}
