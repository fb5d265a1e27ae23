//! CSV ingestion for tlxml.
//!
//! Decodes delimited text into [`Row`](tlxml_model::Row)s, keeping row order
//! and raw field content (no trimming, no type coercion). Rows may have
//! differing field counts; the mapping layer treats missing fields as empty.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use tlxml_ingest::{RowSourceOptions, read_rows};
//!
//! let rows = read_rows(Path::new("LoginTestcases.csv"), &RowSourceOptions::default())?;
//! ```

mod error;
mod reader;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use reader::{DEFAULT_DELIMITER, RowSourceOptions, read_rows, read_rows_from};
