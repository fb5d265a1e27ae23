//! Row-to-document mapping.
//!
//! The first row is always a header and never becomes an entry. Every other
//! row maps to at most one testcase or requirement, in input order:
//!
//! - **Testcases**: column 0 is the name (rows without one are dropped),
//!   column 1 the summary, column 2 the comments, and columns 3.. hold
//!   alternating actions/expected-results pairs.
//! - **Requirements**: column 0 is the title, column 1 the description and
//!   column 2 the comments; the doc id is derived from the row position.
//!
//! Both builders are pure functions over the row slice.

mod requirement;
mod testcase;

use tracing::info;

use tlxml_model::{ConversionConfig, ConversionMode, Document, Row};

pub use requirement::{DOC_ID_WIDTH, build_requirements, format_doc_id};
pub use testcase::{build_testcases, steps_from_row, testcase_from_row};

/// Build the document selected by `config.mode`.
pub fn build_document(rows: &[Row], config: &ConversionConfig) -> Document {
    let document = match config.mode {
        ConversionMode::Testcase => Document::Testcases(build_testcases(rows)),
        ConversionMode::Requirement => Document::Requirements(build_requirements(rows, config)),
    };
    info!(
        mode = %config.mode,
        rows = rows.len(),
        entries = document.len(),
        "document built"
    );
    document
}

/// Data rows (everything after the header) paired with their line number.
///
/// The header is line 0, so the first data row is line 1.
pub(crate) fn data_rows(rows: &[Row]) -> impl Iterator<Item = (usize, &Row)> {
    rows.iter().enumerate().skip(1)
}
