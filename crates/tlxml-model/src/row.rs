//! Input rows.

/// Fixed column positions within a row.
pub mod columns {
    /// Testcase name or requirement title.
    pub const NAME: usize = 0;
    /// Testcase summary or requirement description.
    pub const SUMMARY: usize = 1;
    /// Free-text comments, exported as the `Comments` custom field.
    pub const COMMENTS: usize = 2;
    /// First actions column; expected results follow, then pairs repeat.
    pub const FIRST_STEP: usize = 3;
}

/// One record of tabular input: an ordered list of raw string fields.
///
/// Fields past the end of the row read as the empty string, so short rows
/// never cause out-of-bounds access.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    fields: Vec<String>,
}

impl Row {
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    /// Field at `index`, or `""` when the row is shorter.
    pub fn field(&self, index: usize) -> &str {
        self.fields.get(index).map_or("", String::as_str)
    }

    /// True when the field at `index` exists and is non-empty.
    pub fn has_value(&self, index: usize) -> bool {
        !self.field(index).is_empty()
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<Vec<String>> for Row {
    fn from(fields: Vec<String>) -> Self {
        Self::new(fields)
    }
}

impl<S: Into<String>> FromIterator<S> for Row {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}
