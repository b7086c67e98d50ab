// src/document/http.rs
// =============================================================================
// This module downloads the page to grade over HTTP.
//
// Key functionality:
// - Builds a reqwest client with an optional request timeout
// - Issues a single GET (no retries, no fallbacks)
// - Parses whatever body comes back, even for 4xx/5xx responses
// - Maps transport failures to GradeError (timeout vs. everything else)
//
// Rust concepts:
// - async/await: the fetch is the one place the program waits on the network
// - Result<T, E>: each failure mode becomes a GradeError variant
// =============================================================================

use super::{parse_document, Document};
use crate::error::{GradeError, Result};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Downloads pages and parses them into Documents.
///
/// Holds the client together with the timeout it was built with, so a
/// timeout error can say how long we waited.
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: Client,
    timeout_secs: u64,
}

impl PageFetcher {
    // Creates the fetcher
    //
    // Parameters:
    //   timeout_secs: request timeout in seconds; 0 means wait forever
    pub fn new(timeout_secs: u64) -> Result<Self> {
        let mut builder = Client::builder().redirect(reqwest::redirect::Policy::limited(5));
        if timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(timeout_secs));
        }

        let client = builder.build().map_err(GradeError::Client)?;
        Ok(Self {
            client,
            timeout_secs,
        })
    }

    // Fetches `url` and parses the response body into a Document
    //
    // Non-success statuses are only logged: an error page is still HTML and
    // gets graded like any other page.
    pub async fn fetch(&self, url: &Url) -> Result<Document> {
        debug!(%url, timeout_secs = self.timeout_secs, "fetching page");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| self.categorize_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "non-success response, grading body anyway");
        }

        let html = response
            .text()
            .await
            .map_err(|e| self.categorize_error(url, e))?;

        debug!(%url, bytes = html.len(), "received page");

        Ok(parse_document(&html))
    }

    // Categorizes errors from reqwest
    //
    // A timeout gets its own variant so the message says what happened; every
    // other failure (DNS, refused connection, TLS, redirect loop) keeps the
    // reqwest error as its source.
    fn categorize_error(&self, url: &Url, error: reqwest::Error) -> GradeError {
        if error.is_timeout() {
            GradeError::Timeout {
                url: url.to_string(),
                seconds: self.timeout_secs,
            }
        } else {
            GradeError::Http {
                url: url.to_string(),
                source: error,
            }
        }
    }
}

// Turns a validated --url value into something reqwest can fetch
//
// The URL pattern allows the scheme to be left out ("www.example.com"),
// so a missing scheme means plain http. Any other scheme is rejected.
//
// Examples:
//   "example.com"           -> http://example.com/
//   "https://example.com"   -> https://example.com/
//   "ftp://www.example.com" -> InvalidUrl
pub fn parse_target_url(candidate: &str) -> Result<Url> {
    let with_scheme = if candidate.contains("://") {
        candidate.to_string()
    } else {
        format!("http://{}", candidate)
    };

    match Url::parse(&with_scheme) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => Ok(url),
        _ => Err(GradeError::InvalidUrl(candidate.to_string())),
    }
}

// Convenience wrapper for one-off fetches
pub async fn load_document_from_url(url: &Url, timeout_secs: u64) -> Result<Document> {
    PageFetcher::new(timeout_secs)?.fetch(url).await
}
