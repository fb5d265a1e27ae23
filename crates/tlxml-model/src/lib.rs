//! Document model for TestLink XML imports.
//!
//! Rows come in as flat string records; the types here describe what they
//! become: a [`TestcaseDocument`] (testcases with numbered steps) or a
//! [`RequirementDocument`] (requirements with derived document ids).
//! Everything is plain owned data, built once per conversion and dropped
//! after serialization.

pub mod config;
pub mod document;
pub mod error;
pub mod requirement;
pub mod row;
pub mod testcase;

pub use config::{ConversionConfig, ConversionMode};
pub use document::Document;
pub use error::{ModelError, Result};
pub use requirement::{Requirement, RequirementDocument};
pub use row::{Row, columns};
pub use testcase::{COMMENTS_FIELD, CustomField, Step, Testcase, TestcaseDocument};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_counts_entries() {
        let doc = Document::Testcases(TestcaseDocument {
            testcases: vec![Testcase::new("Login", "User logs in")],
        });
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.mode(), ConversionMode::Testcase);
        assert!(!doc.is_empty());
    }
}
