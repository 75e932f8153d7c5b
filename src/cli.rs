//! Command-line argument parsing
//!
//! Supports:
//! - Showing a document's comments, header and rows
//! - Reading and writing single fields by index or header name
//! - Overriding the delimiter and header detection from the config file

use clap::{Parser, Subcommand};
use std::convert::Infallible;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::config::CsvdocConfig;
use crate::csv::{delimiter_for_extension, DocumentOptions, HeaderPolicy, DEFAULT_DELIMITER};

/// Inspect and edit delimited text files
#[derive(Parser, Debug)]
#[command(name = "csvdoc", version, about = "Inspect and edit delimited text files")]
pub struct CliArgs {
    /// Field delimiter (defaults to the config value, or tab/pipe for .tsv/.psv)
    #[arg(short, long, global = true, value_name = "DELIM")]
    pub delimiter: Option<String>,

    /// Treat every line as a data row
    #[arg(long, global = true)]
    pub no_header: bool,

    /// Header is the first line starting with PREFIX; earlier lines are comments
    #[arg(long, global = true, value_name = "PREFIX", conflicts_with = "no_header")]
    pub header_prefix: Option<String>,

    /// Match column names case-sensitively
    #[arg(long, global = true)]
    pub exact: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum CliCommand {
    /// Print comments, header and rows
    Show {
        file: PathBuf,
        /// Print a JSON summary instead
        #[arg(long)]
        json: bool,
    },
    /// Print one field
    Get {
        file: PathBuf,
        row: usize,
        /// Column index or header name
        column: ColumnRef,
    },
    /// Replace one field and save
    Set {
        file: PathBuf,
        row: usize,
        /// Column index or header name
        column: ColumnRef,
        value: String,
        /// Write to this file instead of overwriting the input
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// List header fields with their indices
    Headers { file: PathBuf },
}

/// A column given either by position or by header name
///
/// Anything that parses as an unsigned integer is a position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnRef {
    Index(usize),
    Name(String),
}

impl FromStr for ColumnRef {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.parse::<usize>() {
            Ok(index) => ColumnRef::Index(index),
            Err(_) => ColumnRef::Name(s.to_string()),
        })
    }
}

impl std::fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnRef::Index(index) => write!(f, "{}", index),
            ColumnRef::Name(name) => write!(f, "\"{}\"", name),
        }
    }
}

/// What the header override flags asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderOverride {
    /// Use the config file
    Config,
    Disabled,
    Prefix(String),
}

/// The operation to perform on the file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Show {
        json: bool,
    },
    Get {
        row: usize,
        column: ColumnRef,
    },
    Set {
        row: usize,
        column: ColumnRef,
        value: String,
        output: Option<PathBuf>,
    },
    Headers,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub file: PathBuf,
    pub action: Action,
    pub delimiter: Option<String>,
    pub header: HeaderOverride,
    /// `Some(false)` when `--exact` was given
    pub ignore_case: Option<bool>,
}

impl CliArgs {
    /// Convert parsed CLI args into a run configuration
    pub fn into_config(self) -> Result<RunConfig, String> {
        if self.delimiter.as_deref() == Some("") {
            return Err("Delimiter cannot be empty".to_string());
        }

        let header = if self.no_header {
            HeaderOverride::Disabled
        } else if let Some(prefix) = self.header_prefix {
            HeaderOverride::Prefix(prefix)
        } else {
            HeaderOverride::Config
        };

        let (file, action) = match self.command {
            CliCommand::Show { file, json } => (file, Action::Show { json }),
            CliCommand::Get { file, row, column } => (file, Action::Get { row, column }),
            CliCommand::Set {
                file,
                row,
                column,
                value,
                output,
            } => (
                file,
                Action::Set {
                    row,
                    column,
                    value,
                    output,
                },
            ),
            CliCommand::Headers { file } => (file, Action::Headers),
        };

        Ok(RunConfig {
            file,
            action,
            delimiter: self.delimiter,
            header,
            ignore_case: self.exact.then_some(false),
        })
    }
}

impl RunConfig {
    /// Delimiter precedence: `--delimiter`, then `.tsv`/`.psv` extension, then config
    pub fn resolve_delimiter(&self, config: &CsvdocConfig) -> String {
        if let Some(delimiter) = &self.delimiter {
            return delimiter.clone();
        }

        let by_extension = extension_of(&self.file)
            .map(delimiter_for_extension)
            .unwrap_or(DEFAULT_DELIMITER);
        if by_extension != DEFAULT_DELIMITER {
            by_extension.to_string()
        } else {
            config.delimiter.clone()
        }
    }

    pub fn resolve_policy(&self, config: &CsvdocConfig) -> HeaderPolicy {
        match &self.header {
            HeaderOverride::Config => config.header_policy(),
            HeaderOverride::Disabled => HeaderPolicy::Disabled,
            HeaderOverride::Prefix(prefix) => HeaderPolicy::prefix(prefix.clone()),
        }
    }

    pub fn resolve_ignore_case(&self, config: &CsvdocConfig) -> bool {
        self.ignore_case.unwrap_or(config.ignore_case)
    }

    pub fn document_options(&self, config: &CsvdocConfig) -> DocumentOptions {
        DocumentOptions::new(self.resolve_delimiter(config), self.resolve_policy(config))
    }
}

fn extension_of(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}
