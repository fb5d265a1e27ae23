//! Testcase document types.

/// Name of the single custom field attached to every entry.
pub const COMMENTS_FIELD: &str = "Comments";

/// Root of a testcase import (`<testcases>`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestcaseDocument {
    pub testcases: Vec<Testcase>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Testcase {
    pub name: String,
    pub summary: String,
    pub steps: Vec<Step>,
    pub custom_fields: Vec<CustomField>,
}

impl Testcase {
    pub fn new(name: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            summary: summary.into(),
            ..Default::default()
        }
    }
}

/// A single numbered step. Numbers are 1-based and dense within a testcase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub number: u32,
    pub actions: String,
    pub expected_results: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomField {
    pub name: String,
    pub value: String,
}

impl CustomField {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// The `Comments` custom field.
    pub fn comments(value: impl Into<String>) -> Self {
        Self::new(COMMENTS_FIELD, value)
    }
}
