// src/document/mod.rs
// =============================================================================
// This module turns an HTML source into a queryable Document.
//
// Submodules:
// - file: reads a local HTML file (synchronous)
// - http: downloads a page over HTTP (asynchronous)
//
// Both produce the same `Document` type, so everything downstream (checks,
// checker, report) does not care where the HTML came from.
// =============================================================================

mod file;
mod http;

pub use file::load_document_from_file;
pub use http::{load_document_from_url, parse_target_url, PageFetcher};

/// A parsed HTML page that supports CSS selector queries.
///
/// This is scraper's `Html` tree. It is created once per run, passed by
/// reference to the checker and never mutated.
pub type Document = scraper::Html;

// Parses raw HTML text into a Document
//
// html5ever never rejects input; broken markup is repaired the same way a
// browser would, so this cannot fail.
pub fn parse_document(html: &str) -> Document {
    scraper::Html::parse_document(html)
}
