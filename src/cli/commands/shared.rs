//! Shared components for CLI commands
//!
//! Logging setup, listing input and output helpers used by every command.

use crate::cli::args::{Args, is_stdin};
use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use tracing::debug;

/// Set up structured logging on stderr
///
/// `RUST_LOG` takes precedence over the verbosity flags.
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("hytek={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Read a whole listing from a file, or from stdin for "-"
pub fn read_listing(path: &Path) -> Result<String> {
    if is_stdin(path) {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read listing from standard input")?;
        return Ok(text);
    }

    fs::read_to_string(path).with_context(|| format!("Failed to read listing {}", path.display()))
}

/// Write output to a file, or to stdout when no file is given
pub fn write_output(output: Option<&Path>, text: &str) -> Result<()> {
    match output {
        Some(path) => fs::write(path, text)
            .with_context(|| format!("Failed to write output file {}", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", text).context("Failed to write to stdout")?;
            stdout.flush().context("Failed to flush stdout")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_listing_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("results.txt");
        fs::write(&path, "1 Reynolds, Francis   Puget Sound   25:00.71   1\n").unwrap();
        assert!(read_listing(&path).unwrap().starts_with("1 Reynolds"));
    }

    #[test]
    fn test_read_missing_listing_names_file() {
        let dir = TempDir::new().unwrap();
        let error = read_listing(&dir.path().join("missing.txt")).unwrap_err();
        assert!(format!("{:#}", error).contains("missing.txt"));
    }

    #[test]
    fn test_write_output_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.txt");
        write_output(Some(&path), "report").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "report");
    }
}
