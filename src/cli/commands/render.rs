//! Render command: re-print a listing as a HyTek-style report

use super::shared::{read_listing, write_output};
use crate::app::models::{Race, race_label};
use crate::app::services::report_writer::ReportWriter;
use crate::app::services::results_parser::ResultsParser;
use crate::cli::args::RenderArgs;
use anyhow::{Context, Result};
use tracing::{debug, info};

pub fn run_render(args: RenderArgs) -> Result<()> {
    let config = args.report_config().context("Invalid report configuration")?;
    let meet = args.meet()?;
    debug!("Render arguments: {:?}", args);

    let text = read_listing(&args.input)?;
    let finishers = ResultsParser::new()
        .load(&text)
        .with_context(|| format!("Failed to parse {}", args.input.display()))?;

    let writer = ReportWriter::new(config);
    let report = if args.page || meet.is_some() {
        let mut race = Race::new(&finishers);
        race.meet = meet;
        race.gender = args.gender;
        race.distance = args.distance;
        writer.race_page(&race)
    } else {
        let label = race_label(args.distance, args.gender);
        writer
            .sections(&finishers, None, label)
            .collect::<Vec<_>>()
            .join("\n")
    };

    write_output(args.output.as_deref(), &report)?;
    info!("Rendered {} finishers", finishers.len());
    Ok(())
}
