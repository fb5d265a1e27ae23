use tracing::debug;

use tlxml_model::{ConversionConfig, CustomField, Requirement, RequirementDocument, Row, columns};

use crate::data_rows;

/// Minimum number of digits in a doc id. Longer numbers are never truncated.
pub const DOC_ID_WIDTH: usize = 4;

/// Format a requirement doc id: `[<prefix>-]<line, zero-padded>`.
pub fn format_doc_id(prefix: &str, line: usize) -> String {
    if prefix.is_empty() {
        format!("{line:0width$}", width = DOC_ID_WIDTH)
    } else {
        format!("{prefix}-{line:0width$}", width = DOC_ID_WIDTH)
    }
}

/// Build a requirement document from all rows, header included.
///
/// Rows with an empty title are skipped. Doc ids follow the row's position
/// in the input, so a skipped row leaves a gap in the numbering. Expected
/// coverage, when enabled, is numbered over emitted requirements only.
pub fn build_requirements(rows: &[Row], config: &ConversionConfig) -> RequirementDocument {
    let mut coverage = config.coverage_start.map(u64::from);
    let mut requirements = Vec::new();
    for (line, row) in data_rows(rows) {
        if !row.has_value(columns::NAME) {
            debug!(line, "skipping row without requirement title");
            continue;
        }
        let expected_coverage = coverage.map(|ts| format!("ts-{ts}"));
        coverage = coverage.map(|ts| ts + 1);
        requirements.push(Requirement {
            doc_id: format_doc_id(&config.doc_id_prefix, line),
            title: row.field(columns::NAME).to_string(),
            description: row.field(columns::SUMMARY).to_string(),
            expected_coverage,
            custom_fields: vec![CustomField::comments(row.field(columns::COMMENTS))],
        });
    }
    RequirementDocument { requirements }
}
