//! Whole-file document model: comments, header, body
//!
//! ```text
//! raw lines ──HeaderPolicy──▶ comments [0, k)
//!                             header    k
//!                             body     (k, end)
//! ```
//!
//! When no header is found every raw line becomes a body row and the
//! comment list stays empty.

use std::path::{Path, PathBuf};

use super::delimiter::{display_delimiter, DEFAULT_DELIMITER};
use super::error::CsvError;
use super::file::{read_lines, split_lines, write_lines};
use super::header::HeaderPolicy;
use super::line::Line;
use crate::util::FileError;

/// Terminator appended to every exported line
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
/// Terminator appended to every exported line
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Construction-time settings for a [`Document`]
#[derive(Debug)]
pub struct DocumentOptions {
    /// Literal split/join token shared by every line
    pub delimiter: String,
    /// How the header row is found
    pub policy: HeaderPolicy,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
            policy: HeaderPolicy::default(),
        }
    }
}

impl DocumentOptions {
    pub fn new(delimiter: impl Into<String>, policy: HeaderPolicy) -> Self {
        Self {
            delimiter: delimiter.into(),
            policy,
        }
    }

    /// Comma-delimited with no header tracking
    pub fn headerless() -> Self {
        Self::new(DEFAULT_DELIMITER, HeaderPolicy::Disabled)
    }
}

/// In-memory model of a delimited text file
#[derive(Debug)]
pub struct Document {
    /// Default target for [`Document::save`]
    path: Option<PathBuf>,
    delimiter: String,
    policy: HeaderPolicy,
    comments: Vec<Line>,
    /// Empty (zero fields) when the document has no header
    header: Line,
    body: Vec<Line>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new(DocumentOptions::default())
    }
}

impl Document {
    /// Create an empty document
    pub fn new(options: DocumentOptions) -> Self {
        let header = Line::empty(&options.delimiter);
        Self {
            path: None,
            delimiter: options.delimiter,
            policy: options.policy,
            comments: Vec::new(),
            header,
            body: Vec::new(),
        }
    }

    /// Create a document and load `raw_lines` into it
    pub fn from_lines<S: AsRef<str>>(options: DocumentOptions, raw_lines: &[S]) -> Self {
        let mut doc = Self::new(options);
        doc.load_lines(raw_lines);
        doc
    }

    /// Create a document from whole-file text
    pub fn from_text(options: DocumentOptions, text: &str) -> Self {
        Self::from_lines(options, &split_lines(text))
    }

    /// Read and load a file, remembering its path for [`Document::save`]
    pub fn open(path: impl AsRef<Path>, options: DocumentOptions) -> Result<Self, FileError> {
        let mut doc = Self::new(options);
        doc.load_file(path)?;
        Ok(doc)
    }

    /// Replace the contents with a file's lines and remember its path
    ///
    /// On a read failure the document is left untouched.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<(), FileError> {
        let path = path.as_ref();
        let lines = read_lines(path)?;
        self.load_lines(&lines);
        self.path = Some(path.to_path_buf());
        Ok(())
    }

    /// Replace comments, header and body by classifying `raw_lines`
    pub fn load_lines<S: AsRef<str>>(&mut self, raw_lines: &[S]) {
        let delimiter = self.delimiter.as_str();
        let parse = |raw: &S| Line::parse(raw.as_ref(), delimiter);

        let header_index = self.policy.find_header(raw_lines);
        let (comments, header, body): (Vec<Line>, Line, Vec<Line>) = match header_index {
            Some(k) => (
                raw_lines[..k].iter().map(parse).collect(),
                parse(&raw_lines[k]),
                raw_lines[k + 1..].iter().map(parse).collect(),
            ),
            None => (
                Vec::new(),
                Line::empty(delimiter),
                raw_lines.iter().map(parse).collect(),
            ),
        };

        tracing::debug!(
            lines = raw_lines.len(),
            header = ?header_index,
            comments = comments.len(),
            body = body.len(),
            delimiter = %display_delimiter(delimiter),
            "Loaded document"
        );

        self.comments = comments;
        self.header = header;
        self.body = body;
    }

    /// Replace the contents with whole-file text
    pub fn load_str(&mut self, text: &str) {
        self.load_lines(&split_lines(text));
    }

    /// Text lines for writing, each ending in [`LINE_ENDING`]
    ///
    /// Order is comments, header (only if it has fields), body.
    pub fn export_lines(&self) -> Vec<String> {
        let header = (!self.header.is_empty()).then_some(&self.header);
        self.comments
            .iter()
            .chain(header)
            .chain(&self.body)
            .map(|line| format!("{}{}", line, LINE_ENDING))
            .collect()
    }

    /// Write to the remembered path
    pub fn save(&self) -> Result<(), FileError> {
        let path = self.path.as_deref().ok_or(FileError::NoPath)?;
        write_lines(path, &self.export_lines())
    }

    /// Write to `path` and remember it as the new default target
    pub fn save_as(&mut self, path: impl AsRef<Path>) -> Result<(), FileError> {
        let path = path.as_ref();
        write_lines(path, &self.export_lines())?;
        self.path = Some(path.to_path_buf());
        Ok(())
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn set_path(&mut self, path: impl Into<PathBuf>) {
        self.path = Some(path.into());
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    pub fn policy(&self) -> &HeaderPolicy {
        &self.policy
    }

    pub fn comments(&self) -> &[Line] {
        &self.comments
    }

    pub fn header(&self) -> &Line {
        &self.header
    }

    pub fn header_mut(&mut self) -> &mut Line {
        &mut self.header
    }

    pub fn set_header(&mut self, header: Line) {
        self.header = header;
    }

    /// True if the header has at least one field
    pub fn has_header(&self) -> bool {
        !self.header.is_empty()
    }

    pub fn body(&self) -> &[Line] {
        &self.body
    }

    /// Number of body rows
    pub fn row_count(&self) -> usize {
        self.body.len()
    }

    pub fn row(&self, row: usize) -> Result<&Line, CsvError> {
        let len = self.body.len();
        self.body
            .get(row)
            .ok_or_else(|| CsvError::row_out_of_range(row, len))
    }

    pub fn row_mut(&mut self, row: usize) -> Result<&mut Line, CsvError> {
        let len = self.body.len();
        self.body
            .get_mut(row)
            .ok_or_else(|| CsvError::row_out_of_range(row, len))
    }

    /// Replace a whole body row
    pub fn set_row(&mut self, row: usize, line: Line) -> Result<(), CsvError> {
        *self.row_mut(row)? = line;
        Ok(())
    }

    /// Append a body row
    pub fn push_row(&mut self, line: Line) {
        self.body.push(line);
    }

    /// Append a body row parsed with the document delimiter
    pub fn push_raw_row(&mut self, raw: &str) {
        let line = Line::parse(raw, &self.delimiter);
        self.body.push(line);
    }

    pub fn get(&self, row: usize, col: usize) -> Result<&str, CsvError> {
        self.row(row)?.get(col)
    }

    pub fn set(&mut self, row: usize, col: usize, value: impl Into<String>) -> Result<(), CsvError> {
        self.row_mut(row)?.set(col, value)
    }

    /// Field in `row` under the header column `name` (case-insensitive)
    pub fn get_by_name(&self, row: usize, name: &str) -> Result<&str, CsvError> {
        let line = self.row(row)?;
        let col = self.header.column(name)?;
        line.get(col)
    }

    pub fn set_by_name(
        &mut self,
        row: usize,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), CsvError> {
        let col = self.header.column(name);
        let line = self.row_mut(row)?;
        line.set(col?, value)
    }

    /// Exact, case-sensitive position of `name` in the header
    pub fn index_of_head(&self, name: &str) -> Option<usize> {
        self.header.index_of_exact(name)
    }
}

impl std::fmt::Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for line in self.export_lines() {
            f.write_str(&line)?;
        }
        Ok(())
    }
}
