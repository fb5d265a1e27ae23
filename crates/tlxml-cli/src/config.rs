//! Flag-to-config translation.

use anyhow::Result;

use tlxml_ingest::RowSourceOptions;
use tlxml_model::ConversionConfig;

use crate::cli::Cli;

/// Build the conversion config from flags.
pub fn conversion_config(cli: &Cli) -> ConversionConfig {
    let config = if cli.requirements {
        ConversionConfig::requirements()
    } else {
        ConversionConfig::testcases()
    };
    config
        .with_doc_id_prefix(cli.prefix.as_str())
        .with_coverage_start(cli.coverage_start)
}

/// Build CSV decoding options from flags.
pub fn row_options(cli: &Cli) -> Result<RowSourceOptions> {
    Ok(RowSourceOptions::default().with_delimiter(cli.delimiter)?)
}
