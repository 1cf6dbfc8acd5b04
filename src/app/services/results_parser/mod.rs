//! Result listing parser for HyTek Meet Manager output
//!
//! This module turns the loosely-structured, column-based plaintext listings
//! HyTek prints into `Finisher` records. Listings from different meets carry
//! different columns (bib numbers, class years and point totals come and go),
//! so a single composite line grammar with optional columns is matched against
//! every line instead of branching per layout.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`grammar`] - Builds the composite line pattern from per-column sub-patterns
//! - [`parser`] - Line splitting, matching and failure reporting
//! - [`record_parser`] - Turns one matched line into a `Finisher`
//! - [`field_parsers`] - Lenient per-field conversion helpers
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use hytek::app::services::results_parser::ResultsParser;
//!
//! # fn example() -> hytek::Result<()> {
//! let parser = ResultsParser::new();
//! let finishers = parser.load("1 Reynolds, Francis   Puget Sound   25:00.71   1")?;
//!
//! assert_eq!(finishers[0].name, "Reynolds, Francis");
//! assert_eq!(finishers[0].team.as_deref(), Some("Puget Sound"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod field_parsers;
pub mod grammar;
pub mod parser;
pub mod record_parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use grammar::{FieldPattern, GrammarBuilder, LineGrammar};
pub use parser::{ResultsParser, load};
pub use stats::{ParseResult, ParseStats};
