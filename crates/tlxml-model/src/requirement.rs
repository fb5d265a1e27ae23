//! Requirement document types.

use crate::testcase::CustomField;

/// Root of a requirement import (`<requirements>`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequirementDocument {
    pub requirements: Vec<Requirement>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Requirement {
    /// Zero-padded, optionally prefixed id such as `REQ-0003`.
    pub doc_id: String,
    pub title: String,
    pub description: String,
    /// Testcase reference (`ts-N`) expected to cover this requirement.
    pub expected_coverage: Option<String>,
    pub custom_fields: Vec<CustomField>,
}
