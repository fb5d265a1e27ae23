use std::path::PathBuf;

use anyhow::{Result, anyhow};

use tlxml_cli::pipeline::{ConversionOutcome, ConversionRequest, run_conversion};

use crate::cli::Cli;
use crate::config::{conversion_config, row_options};

/// The input file named by `-f`.
pub fn require_input(cli: &Cli) -> Result<PathBuf> {
    cli.file
        .clone()
        .ok_or_else(|| anyhow!("no filename! (use -f <FILE>)"))
}

pub fn run_convert(cli: &Cli) -> Result<ConversionOutcome> {
    let input = require_input(cli)?;
    let config = conversion_config(cli);
    println!(
        "Parsing {}... Importing as {}",
        input.display(),
        config.mode.label()
    );
    let request = ConversionRequest::new(input, config)
        .with_output_dir(cli.output_dir.clone())
        .with_row_options(row_options(cli)?);
    run_conversion(&request)
}
