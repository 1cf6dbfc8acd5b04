//! HyTek Library
//!
//! A Rust library for reading and writing the plaintext result listings produced
//! by the HyTek Meet Manager, the standard program for managing cross-country races.
//!
//! This library provides tools for:
//! - Parsing column-based result listings that may or may not carry bib numbers,
//!   class years, or point totals
//! - A race time type with clock-notation parsing, formatting, and arithmetic
//! - Rendering finishers and team scores back into HyTek-style fixed-width reports
//! - Layered report configuration

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod report_writer;
        pub mod results_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{FieldValue, Finisher, Gender, Meet, Race, RaceTime, TeamScore};
pub use app::services::report_writer::{RaceReport, ReportWriter, dump, render};
pub use app::services::results_parser::{ResultsParser, load};
pub use config::ReportConfig;

/// Result type alias for HyTek operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for parsing and rendering HyTek listings
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Race time text is not a valid non-negative duration
    #[error("Invalid race time '{text}': {reason}")]
    Format { text: String, reason: String },

    /// A non-blank line could not be reconciled with the line grammar
    #[error("Line {line_number}: \"{line}\" does not match /{pattern}/")]
    Load {
        line_number: usize,
        line: String,
        pattern: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON (de)serialization failed
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create a race time format error
    pub fn format(text: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Format {
            text: text.into(),
            reason: reason.into(),
        }
    }

    /// Create a load error for a line that matched nothing
    pub fn load(line_number: usize, line: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self::Load {
            line_number,
            line: line.into(),
            pattern: pattern.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a serialization error with context
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }

    /// Whether this error came from race time parsing
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format { .. })
    }

    /// Whether this error came from line matching
    pub fn is_load(&self) -> bool {
        matches!(self, Self::Load { .. })
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "JSON processing failed".to_string(),
            source: error,
        }
    }
}
