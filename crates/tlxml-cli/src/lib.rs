//! CLI library components for tlxml.

pub mod logging;
pub mod pipeline;
