//! CSV decoding into rows.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::{debug, info};

use tlxml_model::Row;

use crate::error::{IngestError, Result};

/// Default field delimiter.
pub const DEFAULT_DELIMITER: u8 = b',';

/// Options for decoding delimited input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowSourceOptions {
    delimiter: u8,
}

impl Default for RowSourceOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

impl RowSourceOptions {
    /// Use `delimiter` instead of a comma.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::InvalidDelimiter`] for non-ASCII characters.
    pub fn with_delimiter(mut self, delimiter: char) -> Result<Self> {
        if !delimiter.is_ascii() {
            return Err(IngestError::InvalidDelimiter { delimiter });
        }
        self.delimiter = delimiter as u8;
        Ok(self)
    }

    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }
}

/// Read every row of a CSV file, header included.
///
/// # Errors
///
/// Returns [`IngestError::FileOpen`] when the file cannot be opened and
/// [`IngestError::CsvParse`] when any record fails to decode.
pub fn read_rows(path: &Path, options: &RowSourceOptions) -> Result<Vec<Row>> {
    let file = File::open(path).map_err(|source| IngestError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    read_rows_from(file, path, options)
}

/// Read every row from `reader`. `origin` names the source in errors.
///
/// # Errors
///
/// Returns [`IngestError::CsvParse`] when any record fails to decode,
/// including invalid UTF-8.
pub fn read_rows_from<R: Read>(
    reader: R,
    origin: &Path,
    options: &RowSourceOptions,
) -> Result<Vec<Row>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(options.delimiter)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::CsvParse {
            path: origin.to_path_buf(),
            line: source.position().map(csv::Position::line),
            source,
        })?;
        rows.push(record.iter().collect::<Row>());
    }
    debug!(path = %origin.display(), rows = rows.len(), "decoded csv");
    info!(rows = rows.len(), "rows read");
    Ok(rows)
}
