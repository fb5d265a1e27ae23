//! Shared constants for XML output.

/// XML declaration version.
pub const XML_VERSION: &str = "1.0";

/// XML declaration encoding.
pub const XML_ENCODING: &str = "UTF-8";

/// Spaces per nesting level.
pub const INDENT_WIDTH: usize = 2;

/// Output file extension.
pub const XML_EXTENSION: &str = "xml";

/// Prefix added to requirement output files.
pub const REQUIREMENTS_PREFIX: &str = "Requirements";

/// Marker removed from input stems when naming requirement output.
pub const TESTCASES_MARKER: &str = "Testcases";
