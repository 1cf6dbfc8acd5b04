//! Command implementations for the HyTek CLI
//!
//! Each command is implemented in its own module:
//! - `check`: parse a listing and report parsing statistics
//! - `render`: re-render a listing as a HyTek-style report
//! - `export`: write the finishers of a listing as JSON

pub mod check;
pub mod export;
pub mod render;
pub mod shared;

pub use shared::setup_logging;

use crate::cli::args::{Args, Commands};
use anyhow::Result;

/// Dispatch to the subcommand handler
pub fn run(args: Args) -> Result<()> {
    match args.command {
        Some(Commands::Check(check_args)) => check::run_check(check_args),
        Some(Commands::Render(render_args)) => render::run_render(render_args),
        Some(Commands::Export(export_args)) => export::run_export(export_args),
        None => anyhow::bail!("No command given; run `hytek --help` for usage"),
    }
}
