//! Delimited text document model
//!
//! Reads CSV-like files into comments, an optional header and body rows,
//! allows editing fields by position or header name, and writes them back.
//!
//! # Architecture
//!
//! ```text
//! Document
//! ├── comments: Vec<Line>   lines before the header
//! ├── header: Line          empty when none was found
//! └── body: Vec<Line>       data rows
//! ```
//!
//! Parsing is naive on purpose: split on the literal delimiter, trim,
//! strip one pair of outer quotes. It is not an RFC 4180 parser.

mod delimiter;
mod document;
mod error;
mod file;
mod header;
mod line;

pub use delimiter::{delimiter_for_extension, display_delimiter, DEFAULT_DELIMITER};
pub use document::{Document, DocumentOptions, LINE_ENDING};
pub use error::{CsvError, IndexTarget};
pub use file::{read_lines, split_lines, write_lines};
pub use header::{DetectHeader, HeaderPolicy, PrefixDetector};
pub use line::Line;
