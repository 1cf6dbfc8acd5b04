//! Export command: write the finishers of a listing as JSON

use super::shared::{read_listing, write_output};
use crate::app::services::results_parser::ResultsParser;
use crate::cli::args::ExportArgs;
use anyhow::{Context, Result};
use tracing::info;

pub fn run_export(args: ExportArgs) -> Result<()> {
    let text = read_listing(&args.input)?;
    let result = ResultsParser::new()
        .load_with_stats(&text)
        .with_context(|| format!("Failed to parse {}", args.input.display()))?;

    let json = if args.with_stats {
        serde_json::to_string_pretty(&result)
    } else {
        serde_json::to_string_pretty(&result.finishers)
    }
    .context("Failed to serialize finishers")?;

    write_output(args.output.as_deref(), &json)?;
    info!("Exported {} finishers", result.finishers.len());
    Ok(())
}
