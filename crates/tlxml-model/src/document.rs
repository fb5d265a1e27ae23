use crate::config::ConversionMode;
use crate::requirement::RequirementDocument;
use crate::testcase::TestcaseDocument;

/// The result of one conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Document {
    Testcases(TestcaseDocument),
    Requirements(RequirementDocument),
}

impl Document {
    /// Number of entries (testcases or requirements).
    pub fn len(&self) -> usize {
        match self {
            Self::Testcases(doc) => doc.testcases.len(),
            Self::Requirements(doc) => doc.requirements.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn mode(&self) -> ConversionMode {
        match self {
            Self::Testcases(_) => ConversionMode::Testcase,
            Self::Requirements(_) => ConversionMode::Requirement,
        }
    }
}
