//! csvdoc - delimited text documents with comments and headers
//!
//! This crate provides an in-memory model for CSV-like files that keeps
//! leading comment lines and the header row intact, plus the thin file,
//! configuration and CLI layers of the `csvdoc` binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod csv;
pub mod tracing;
pub mod util;

// Re-export commonly used types
pub use config::CsvdocConfig;
pub use csv::{CsvError, Document, DocumentOptions, HeaderPolicy, Line};
