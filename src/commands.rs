//! Execution of CLI actions against a document
//!
//! Output goes to a caller-supplied writer so the binary prints to stdout
//! and tests capture into a buffer.

use std::io::Write;

use anyhow::{anyhow, Context, Result};
use serde::Serialize;

use crate::cli::{Action, ColumnRef, RunConfig};
use crate::config::CsvdocConfig;
use crate::csv::{display_delimiter, CsvError, Document, Line};
use crate::util::filename_for_display;

/// JSON form of a document for `show --json`
#[derive(Debug, Serialize)]
pub struct DocumentSummary {
    pub path: Option<String>,
    pub delimiter: String,
    pub comments: Vec<String>,
    pub header: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl DocumentSummary {
    pub fn from_document(doc: &Document) -> Self {
        Self {
            path: doc.path().map(|p| p.display().to_string()),
            delimiter: doc.delimiter().to_string(),
            comments: doc.comments().iter().map(Line::to_string).collect(),
            header: doc.has_header().then(|| doc.header().fields().to_vec()),
            rows: doc.body().iter().map(|line| line.fields().to_vec()).collect(),
        }
    }
}

/// Resolve a column reference against the document header
pub fn resolve_column(
    doc: &Document,
    column: &ColumnRef,
    ignore_case: bool,
) -> Result<usize, CsvError> {
    match column {
        ColumnRef::Index(index) => Ok(*index),
        ColumnRef::Name(name) => doc
            .header()
            .index_of(name, ignore_case)
            .ok_or_else(|| CsvError::not_found(name.as_str())),
    }
}

/// Open the configured file and perform the action
pub fn run(settings: &RunConfig, config: &CsvdocConfig, out: &mut impl Write) -> Result<()> {
    let filename = filename_for_display(&settings.file);
    let mut doc = Document::open(&settings.file, settings.document_options(config))
        .map_err(|e| anyhow!(e.user_message(&filename)))?;
    let ignore_case = settings.resolve_ignore_case(config);

    tracing::debug!(
        "Running {:?} on {} ({} rows)",
        settings.action,
        settings.file.display(),
        doc.row_count()
    );

    match &settings.action {
        Action::Show { json: true } => {
            let summary = DocumentSummary::from_document(&doc);
            let json = serde_json::to_string_pretty(&summary)?;
            writeln!(out, "{}", json)?;
        }
        Action::Show { json: false } => show(&doc, out)?,
        Action::Headers => {
            for (index, name) in doc.header().fields().iter().enumerate() {
                writeln!(out, "{}\t{}", index, name)?;
            }
        }
        Action::Get { row, column } => {
            let col = resolve_column(&doc, column, ignore_case)?;
            let value = doc
                .get(*row, col)
                .with_context(|| format!("Cannot read row {} column {}", row, column))?;
            writeln!(out, "{}", value)?;
        }
        Action::Set {
            row,
            column,
            value,
            output,
        } => {
            let col = resolve_column(&doc, column, ignore_case)?;
            doc.set(*row, col, value.as_str())
                .with_context(|| format!("Cannot write row {} column {}", row, column))?;

            match output {
                Some(path) => doc
                    .save_as(path)
                    .map_err(|e| anyhow!(e.user_message(&filename_for_display(path))))?,
                None => doc.save().map_err(|e| anyhow!(e.user_message(&filename)))?,
            }

            let target = doc.path().unwrap_or(settings.file.as_path());
            writeln!(
                out,
                "Updated row {} column {} in {}",
                row,
                column,
                target.display()
            )?;
        }
    }

    Ok(())
}

fn show(doc: &Document, out: &mut impl Write) -> Result<()> {
    writeln!(out, "delimiter: {}", display_delimiter(doc.delimiter()))?;

    if !doc.comments().is_empty() {
        writeln!(out, "comments: {}", doc.comments().len())?;
        for comment in doc.comments() {
            writeln!(out, "  {}", comment)?;
        }
    }

    if doc.has_header() {
        writeln!(out, "header: {}", doc.header().fields().join(" | "))?;
    } else {
        writeln!(out, "header: (none)")?;
    }

    writeln!(out, "rows: {}", doc.row_count())?;
    for (index, line) in doc.body().iter().enumerate() {
        writeln!(out, "  {}: {}", index, line)?;
    }

    Ok(())
}
