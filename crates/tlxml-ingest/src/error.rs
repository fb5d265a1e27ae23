//! Error types for row ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading input rows.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Input file could not be opened.
    #[error("failed to open {path}: {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input could not be decoded as CSV.
    #[error("failed to parse CSV {path}{}: {source}", line_suffix(.line))]
    CsvParse {
        path: PathBuf,
        line: Option<u64>,
        #[source]
        source: ::csv::Error,
    },

    /// Delimiter must be a single ASCII character.
    #[error("invalid delimiter {delimiter:?}: must be a single ASCII character")]
    InvalidDelimiter { delimiter: char },
}

fn line_suffix(line: &Option<u64>) -> String {
    line.map(|line| format!(" at line {line}")).unwrap_or_default()
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
