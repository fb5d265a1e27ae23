use thiserror::Error;

use crate::config::ConversionMode;

#[derive(Debug, Error)]
pub enum ModelError {
    /// An option was supplied for a mode that does not use it.
    #[error("option '{option}' only applies to {expected} mode, not {mode}")]
    OptionNotApplicable {
        option: &'static str,
        expected: ConversionMode,
        mode: ConversionMode,
    },
}

pub type Result<T> = std::result::Result<T, ModelError>;
