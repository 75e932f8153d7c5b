//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use csvdoc::csv::{Line, LINE_ENDING};
use csvdoc::Document;

/// Fields of a line as `&str`s for easy comparison
pub fn fields(line: &Line) -> Vec<&str> {
    line.fields().iter().map(String::as_str).collect()
}

/// Every body row of a document as field lists
pub fn rows(doc: &Document) -> Vec<Vec<&str>> {
    doc.body().iter().map(fields).collect()
}

/// Terminate each line the way `Document::export_lines` does
pub fn terminated(lines: &[&str]) -> Vec<String> {
    lines
        .iter()
        .map(|line| format!("{}{}", line, LINE_ENDING))
        .collect()
}
