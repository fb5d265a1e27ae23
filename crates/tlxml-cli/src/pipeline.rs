//! Conversion pipeline: read rows, build the document, render, write.
//!
//! Each stage runs inside its own span so `-v` output shows where time and
//! rows went. Any error aborts the run before the output file is created.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use tlxml_ingest::{RowSourceOptions, read_rows};
use tlxml_map::build_document;
use tlxml_model::{ConversionConfig, ConversionMode};
use tlxml_output::{output_file_name, render_document, write_output};

/// Everything needed for one conversion run.
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub config: ConversionConfig,
    pub row_options: RowSourceOptions,
}

impl ConversionRequest {
    pub fn new(input: impl Into<PathBuf>, config: ConversionConfig) -> Self {
        Self {
            input: input.into(),
            output_dir: PathBuf::from("."),
            config,
            row_options: RowSourceOptions::default(),
        }
    }

    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    #[must_use]
    pub fn with_row_options(mut self, options: RowSourceOptions) -> Self {
        self.row_options = options;
        self
    }
}

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionOutcome {
    pub input: PathBuf,
    pub output: PathBuf,
    pub mode: ConversionMode,
    /// Rows after the header.
    pub data_rows: usize,
    /// Testcases or requirements written.
    pub entries: usize,
    pub bytes: usize,
}

impl ConversionOutcome {
    /// Data rows that produced no entry (empty name or title).
    pub fn skipped(&self) -> usize {
        self.data_rows.saturating_sub(self.entries)
    }
}

/// Run one conversion end to end.
///
/// # Errors
///
/// Fails on invalid options, unreadable or undecodable input, or when the
/// output file cannot be written. Nothing is written on failure.
pub fn run_conversion(request: &ConversionRequest) -> Result<ConversionOutcome> {
    let span = info_span!(
        "convert",
        input = %request.input.display(),
        mode = %request.config.mode
    );
    let _guard = span.enter();
    let start = Instant::now();

    request.config.validate().context("invalid options")?;
    let file_name = output_file_name(&request.input, request.config.mode)?;

    let rows = info_span!("ingest").in_scope(|| read_rows(&request.input, &request.row_options))?;
    let document = info_span!("build").in_scope(|| build_document(&rows, &request.config));
    let bytes = info_span!("render").in_scope(|| render_document(&document))?;
    let output = info_span!("write")
        .in_scope(|| write_output(&request.output_dir, &file_name, &bytes))?;

    let outcome = ConversionOutcome {
        input: request.input.clone(),
        output,
        mode: request.config.mode,
        data_rows: rows.len().saturating_sub(1),
        entries: document.len(),
        bytes: bytes.len(),
    };
    info!(
        entries = outcome.entries,
        skipped = outcome.skipped(),
        duration_ms = start.elapsed().as_millis(),
        "conversion complete"
    );
    Ok(outcome)
}
