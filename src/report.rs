// src/report.rs
// =============================================================================
// Prints the grading result as JSON.
//
// The output is one JSON object, indented with four spaces, keys in the
// order of the ResultMap:
//
//   {
//       "div": false,
//       "h1": true
//   }
// =============================================================================

use crate::checker::ResultMap;
use crate::error::Result;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

const INDENT: &[u8] = b"    ";

// Renders the report text (without a trailing newline)
pub fn render(results: &ResultMap) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    results.serialize(&mut serializer)?;

    // serde_json only ever writes valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

// Writes the report to stdout followed by a newline
pub fn print_report(results: &ResultMap) -> Result<()> {
    let text = render(results)?;
    println!("{}", text);
    Ok(())
}
