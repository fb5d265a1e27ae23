//! Conversion configuration.

use std::fmt;

use crate::error::{ModelError, Result};

/// Which document shape to build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ConversionMode {
    #[default]
    Testcase,
    Requirement,
}

impl ConversionMode {
    /// Plural label used in status output.
    pub fn label(self) -> &'static str {
        match self {
            Self::Testcase => "testcases",
            Self::Requirement => "requirements",
        }
    }
}

impl fmt::Display for ConversionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Testcase => f.write_str("testcase"),
            Self::Requirement => f.write_str("requirement"),
        }
    }
}

/// Options passed into the document builder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionConfig {
    pub mode: ConversionMode,
    /// Prepended to requirement doc ids as `<prefix>-`. Empty means none.
    pub doc_id_prefix: String,
    /// First `ts-N` expected-coverage number. `None` omits coverage.
    pub coverage_start: Option<u32>,
}

impl ConversionConfig {
    pub fn testcases() -> Self {
        Self::default()
    }

    pub fn requirements() -> Self {
        Self {
            mode: ConversionMode::Requirement,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_doc_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.doc_id_prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn with_coverage_start(mut self, start: Option<u32>) -> Self {
        self.coverage_start = start;
        self
    }

    /// Reject requirement-only options in testcase mode.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::OptionNotApplicable`] when a prefix or coverage
    /// start is set and the mode is [`ConversionMode::Testcase`].
    pub fn validate(&self) -> Result<()> {
        if self.mode == ConversionMode::Requirement {
            return Ok(());
        }
        let option = if !self.doc_id_prefix.is_empty() {
            Some("prefix")
        } else if self.coverage_start.is_some() {
            Some("ts")
        } else {
            None
        };
        match option {
            Some(option) => Err(ModelError::OptionNotApplicable {
                option,
                expected: ConversionMode::Requirement,
                mode: self.mode,
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requirement_options_are_valid_in_requirement_mode() {
        let config = ConversionConfig::requirements()
            .with_doc_id_prefix("REQ")
            .with_coverage_start(Some(10));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn prefix_is_rejected_in_testcase_mode() {
        let config = ConversionConfig::testcases().with_doc_id_prefix("REQ");
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "option 'prefix' only applies to requirement mode, not testcase"
        );
    }

    #[test]
    fn coverage_is_rejected_in_testcase_mode() {
        let config = ConversionConfig::testcases().with_coverage_start(Some(1));
        assert!(matches!(
            config.validate(),
            Err(ModelError::OptionNotApplicable { option: "ts", .. })
        ));
    }

    #[test]
    fn mode_labels() {
        assert_eq!(ConversionMode::Testcase.label(), "testcases");
        assert_eq!(ConversionMode::Requirement.label(), "requirements");
        assert_eq!(ConversionMode::default(), ConversionMode::Testcase);
    }
}
