//! Error types for XML output.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while rendering or persisting a document.
#[derive(Debug, Error)]
pub enum OutputError {
    /// The XML writer rejected an event.
    #[error("failed to render XML: {message}")]
    Render { message: String },

    /// Output name could not be derived from the input path.
    #[error("cannot derive output file name from {path}")]
    InvalidInputName { path: PathBuf },

    /// Temporary output file could not be created or written.
    #[error("failed to write output in {dir}: {source}")]
    Write {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Finished output could not be moved into place.
    #[error("failed to create output file {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;
