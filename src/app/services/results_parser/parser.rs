//! Core result listing parser implementation
//!
//! This module provides the main parser orchestration: splitting a listing
//! into lines, matching each against the line grammar and collecting the
//! resulting finishers. A line that matches nothing rejects the whole listing.

use std::sync::Arc;
use tracing::{debug, info};

use super::grammar::LineGrammar;
use super::record_parser::parse_finisher_record;
use super::stats::{ParseResult, ParseStats};
use crate::app::models::Finisher;
use crate::{Error, Result};

/// Parser for HyTek result listings
///
/// Holds a shared, immutable line grammar, so one parser (or many clones of
/// it) can load any number of listings, from any number of threads.
#[derive(Debug, Clone)]
pub struct ResultsParser {
    grammar: Arc<LineGrammar>,
}

impl Default for ResultsParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultsParser {
    /// Create a parser using the standard HyTek grammar
    pub fn new() -> Self {
        Self {
            grammar: LineGrammar::shared(),
        }
    }

    /// Create a parser with a custom grammar
    pub fn with_grammar(grammar: Arc<LineGrammar>) -> Self {
        Self { grammar }
    }

    pub fn grammar(&self) -> &LineGrammar {
        &self.grammar
    }

    /// Parse a listing into finishers, in listing order
    pub fn load(&self, text: &str) -> Result<Vec<Finisher>> {
        Ok(self.load_with_stats(text)?.finishers)
    }

    /// Parse a listing and return finishers with statistics
    pub fn load_with_stats(&self, text: &str) -> Result<ParseResult> {
        let mut stats = ParseStats::new();
        let mut finishers = Vec::new();

        for (index, line) in listing_lines(text).enumerate() {
            let line_number = index + 1;
            stats.total_lines += 1;

            if line.trim().is_empty() {
                stats.blank_lines += 1;
                continue;
            }

            let finisher = self.parse_line(line_number, line)?;

            let raw_fields = finisher.raw_field_count();
            if raw_fields > 0 {
                stats.raw_fields += raw_fields;
                stats.fallbacks.push(format!(
                    "Line {}: kept raw text for {} field(s)",
                    line_number, raw_fields
                ));
            }

            finishers.push(finisher);
            stats.finishers_parsed += 1;
        }

        info!(
            "Parsed {} finishers from {} lines ({} blank, {} raw fields)",
            stats.finishers_parsed, stats.total_lines, stats.blank_lines, stats.raw_fields
        );

        Ok(ParseResult { finishers, stats })
    }

    /// Parse one non-blank line
    ///
    /// `line_number` is 1-based and only used for error reporting.
    pub fn parse_line(&self, line_number: usize, line: &str) -> Result<Finisher> {
        let captures = self.grammar.captures(line).ok_or_else(|| {
            debug!("Line {} matched no layout: {:?}", line_number, line);
            Error::load(line_number, line, self.grammar.pattern())
        })?;

        parse_finisher_record(&captures, line_number)
    }
}

/// Split a listing on `\n`, `\r\n` or a lone `\r`
///
/// Older HyTek exports end lines with a bare carriage return. As with
/// `str::lines`, a final line break does not produce an extra empty line.
fn listing_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(['\n', '\r']) {
            Some(end) => {
                let line = &rest[..end];
                let break_len = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[end + break_len..];
                Some(line)
            }
            None => Some(std::mem::take(&mut rest)),
        }
    })
}

/// Parse a listing with the standard grammar
pub fn load(text: &str) -> Result<Vec<Finisher>> {
    ResultsParser::new().load(text)
}
