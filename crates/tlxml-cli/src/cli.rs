//! CLI argument definitions for tlxml.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "tlxml",
    version,
    about = "Convert CSV testcases and requirements to TestLink XML",
    long_about = "Convert a CSV sheet into a TestLink XML import file.\n\n\
                  The first row is a header. Columns are: name/title, summary/description,\n\
                  comments, then alternating actions/expected-results pairs (testcases only)."
)]
pub struct Cli {
    /// Import rows as requirements instead of testcases.
    #[arg(short = 'r', long = "requirements")]
    pub requirements: bool,

    /// CSV file to convert.
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Requirement doc id prefix (REQ gives REQ-0001).
    #[arg(long = "prefix", value_name = "PREFIX", default_value = "")]
    pub prefix: String,

    /// First testcase number used for requirement expected coverage (ts-N).
    #[arg(long = "ts", value_name = "N")]
    pub coverage_start: Option<u32>,

    /// CSV field delimiter.
    #[arg(long = "delimiter", value_name = "CHAR", default_value_t = ',')]
    pub delimiter: char,

    /// Directory for the generated XML file.
    #[arg(long = "output-dir", value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Prefix log lines with timestamps.
    #[arg(long = "log-timestamps")]
    pub log_timestamps: bool,

    /// Include the module path in log lines.
    #[arg(long = "log-target")]
    pub log_target: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
