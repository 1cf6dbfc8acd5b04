//! Command-line argument definitions for the HyTek tool
//!
//! This module defines the CLI interface using the clap derive API.

use crate::app::models::{Gender, Meet};
use crate::config::ReportConfig;
use crate::{Error, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Path argument meaning "read standard input"
pub const STDIN_PATH: &str = "-";

/// CLI arguments for the HyTek listing tool
///
/// Parses result listings printed by HyTek Meet Manager and renders them back
/// as HyTek-style reports or JSON.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "hytek",
    version,
    about = "Parse HyTek cross-country result listings and render HyTek-style reports",
    long_about = "Reads the plaintext result listings printed by HyTek Meet Manager, with or \
                  without bib, class year and point columns, and either checks them, exports the \
                  finishers as JSON, or re-renders them as fixed-width HyTek reports."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        global = true,
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Only show errors
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Parse a listing and print parsing statistics
    Check(CheckArgs),
    /// Re-render a listing as a HyTek-style results report
    Render(RenderArgs),
    /// Export the finishers of a listing as JSON
    Export(ExportArgs),
}

#[derive(Debug, Clone, Parser)]
pub struct CheckArgs {
    /// Listing file, or "-" for standard input
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Fail when any field had to be kept as raw text
    #[arg(long = "strict", help = "Fail when any field could not be converted")]
    pub strict: bool,
}

#[derive(Debug, Clone, Parser)]
pub struct RenderArgs {
    /// Listing file, or "-" for standard input
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Race distance in meters, used for the results label
    #[arg(short = 'd', long = "distance", value_name = "METERS")]
    pub distance: Option<u32>,

    /// Division prefix for the results label
    #[arg(short = 'g', long = "gender", value_name = "men|women")]
    pub gender: Option<Gender>,

    /// Path to configuration file
    ///
    /// JSON report layout settings. If not specified, looks for
    /// <config dir>/hytek/config.json
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (JSON format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Render a full race page with margin and meet header
    #[arg(long = "page")]
    pub page: bool,

    /// Meet name for the page header
    #[arg(long = "meet", value_name = "NAME", requires_all = ["venue", "date"])]
    pub meet: Option<String>,

    #[arg(long = "venue", value_name = "VENUE")]
    pub venue: Option<String>,

    /// Meet date as YYYY-MM-DD
    #[arg(long = "date", value_name = "DATE")]
    pub date: Option<NaiveDate>,

    /// Spaces before each page line, overriding the configuration
    #[arg(long = "margin", value_name = "SPACES")]
    pub margin: Option<usize>,

    /// Output file; the report goes to stdout when omitted
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Parser)]
pub struct ExportArgs {
    /// Listing file, or "-" for standard input
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Include parsing statistics alongside the finishers
    #[arg(long = "with-stats")]
    pub with_stats: bool,

    /// Output file; JSON goes to stdout when omitted
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl Args {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

/// Whether an input argument names standard input
pub fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == STDIN_PATH
}

impl RenderArgs {
    /// Layered configuration: defaults, config file, then command-line overrides
    pub fn report_config(&self) -> Result<ReportConfig> {
        let mut config = ReportConfig::load_layered(self.config_file.as_deref())?;

        if let Some(margin) = self.margin {
            config = config.with_margin(margin);
        }
        if self.meet.is_some() {
            config = config.with_show_meet_header(true);
        }

        config.validate()?;
        Ok(config)
    }

    /// Meet details, when a meet name was given
    pub fn meet(&self) -> Result<Option<Meet>> {
        let Some(name) = &self.meet else {
            return Ok(None);
        };
        match (&self.venue, self.date) {
            (Some(venue), Some(date)) => Ok(Some(Meet::new(name.clone(), venue.clone(), date))),
            _ => Err(Error::configuration("--meet requires --venue and --date")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_log_level() {
        let args = Args::try_parse_from(["hytek", "check", "results.txt"]).unwrap();
        assert_eq!(args.get_log_level(), "warn");

        let args = Args::try_parse_from(["hytek", "-vv", "check", "results.txt"]).unwrap();
        assert_eq!(args.get_log_level(), "debug");

        let args = Args::try_parse_from(["hytek", "check", "results.txt", "-q"]).unwrap();
        assert_eq!(args.get_log_level(), "error");

        assert!(Args::try_parse_from(["hytek", "-q", "-v", "check", "results.txt"]).is_err());
    }

    #[test]
    fn test_render_args() {
        let args = Args::try_parse_from([
            "hytek", "render", "-", "--distance", "8000", "--gender", "women",
        ])
        .unwrap();
        let Some(Commands::Render(render)) = args.command else {
            panic!("expected render command");
        };
        assert!(is_stdin(&render.input));
        assert_eq!(render.distance, Some(8000));
        assert_eq!(render.gender, Some(Gender::Women));
        assert!(render.meet().unwrap().is_none());
    }

    #[test]
    fn test_invalid_gender_is_rejected() {
        assert!(Args::try_parse_from(["hytek", "render", "r.txt", "--gender", "coed"]).is_err());
    }

    #[test]
    fn test_meet_requires_venue_and_date() {
        assert!(Args::try_parse_from(["hytek", "render", "r.txt", "--meet", "NWC"]).is_err());

        let args = Args::try_parse_from([
            "hytek", "render", "r.txt", "--meet", "NWC Championships", "--venue",
            "Lewis & Clark", "--date", "2009-10-31",
        ])
        .unwrap();
        let Some(Commands::Render(render)) = args.command else {
            panic!("expected render command");
        };
        let meet = render.meet().unwrap().unwrap();
        assert_eq!(meet.venue, "Lewis & Clark");
        assert_eq!(meet.date, NaiveDate::from_ymd_opt(2009, 10, 31).unwrap());
    }

    #[test]
    fn test_render_config_overrides_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"margin": 3, "average_indent": 4}}"#).unwrap();
        let path = file.path().to_string_lossy().into_owned();

        let args = Args::try_parse_from([
            "hytek", "render", "r.txt", "--config", path.as_str(), "--margin", "0",
        ])
        .unwrap();
        let Some(Commands::Render(render)) = args.command else {
            panic!("expected render command");
        };
        let config = render.report_config().unwrap();
        assert_eq!(config.margin, 0);
        assert_eq!(config.average_indent, 4);
        assert!(!config.show_meet_header);
    }
}
