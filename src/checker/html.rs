// src/checker/html.rs
// =============================================================================
// This module evaluates selectors against a parsed HTML document.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// A check passes when its selector matches at least one element. Selector
// syntax is whatever scraper understands; we don't restrict or rewrite it.
//
// Rust concepts:
// - Borrowing: the document is only read (&Document), never modified
// - Iterators: select() is lazy, so next().is_some() stops at the first match
// =============================================================================

use super::ResultMap;
use crate::document::Document;
use crate::error::{GradeError, Result};
use scraper::Selector;
use tracing::debug;

// Evaluates every selector and records whether it is present
//
// Parameters:
//   document: the parsed page (borrowed, read-only)
//   checks: selectors to evaluate, normally already sorted
//
// Returns: ResultMap of selector -> present
//
// Every selector is evaluated even after a miss. An unparsable selector
// aborts the whole evaluation with InvalidSelector.
//
// Example:
//   html = "<h1>Hi</h1>"
//   checks = ["div", "h1"]
//   result = {"div": false, "h1": true}
pub fn evaluate(document: &Document, checks: &[String]) -> Result<ResultMap> {
    let mut results = ResultMap::new();

    for check in checks {
        let present = is_present(document, check)?;
        debug!(selector = %check, present, "evaluated check");
        results.insert(check.clone(), present);
    }

    Ok(results)
}

fn is_present(document: &Document, selector: &str) -> Result<bool> {
    // SelectorErrorKind borrows the input, so keep only its message
    let parsed = Selector::parse(selector).map_err(|e| GradeError::InvalidSelector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })?;

    Ok(document.select(&parsed).next().is_some())
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why parse the selector inside the loop?
//    - Selector::parse borrows the input string in its error type
//    - Each check is parsed once, used once, and dropped
//    - Parsing is cheap next to walking the document
//
// 2. Why next().is_some() instead of count() > 0?
//    - select() returns a lazy iterator over matching elements
//    - next() stops at the first match; count() would walk the whole tree
//
// 3. What does `?` do in evaluate?
//    - If is_present returns Err, evaluate returns that Err right away
//    - A broken selector is a broken checks file, so there is no partial report
// -----------------------------------------------------------------------------
