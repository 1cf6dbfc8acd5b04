//! Check command: parse a listing and report how cleanly it converted

use super::shared::read_listing;
use crate::app::services::results_parser::{ParseStats, ResultsParser};
use crate::cli::args::CheckArgs;
use anyhow::{Context, Result};
use colored::*;
use tracing::info;

pub fn run_check(args: CheckArgs) -> Result<()> {
    let text = read_listing(&args.input)?;
    let result = ResultsParser::new()
        .load_with_stats(&text)
        .with_context(|| format!("Failed to parse {}", args.input.display()))?;

    info!("Checked {}", args.input.display());
    print_summary(&result.stats);

    if args.strict && !result.stats.is_clean() {
        anyhow::bail!(
            "{} of {} finishers kept raw text",
            result.stats.fallbacks.len(),
            result.stats.finishers_parsed
        );
    }
    Ok(())
}

fn print_summary(stats: &ParseStats) {
    println!("{}", "Listing parsed".bright_green().bold());
    println!("   • Lines read: {}", stats.total_lines);
    println!("   • Blank lines skipped: {}", stats.blank_lines);
    println!("   • Finishers parsed: {}", stats.finishers_parsed);
    println!("   • Clean rate: {:.1}%", stats.clean_rate());

    if !stats.fallbacks.is_empty() {
        println!(
            "{}",
            format!("Raw fields kept: {}", stats.raw_fields).bright_yellow().bold()
        );
        for note in &stats.fallbacks {
            println!("   • {}", note);
        }
    }
}
