//! Parsing statistics and result structures for result listings
//!
//! This module provides types for tracking how a listing was read and for
//! handing parsed finishers to downstream report writers.

use crate::app::models::Finisher;

/// Parsing result with finishers and basic statistics
#[derive(Debug, Clone, serde::Serialize)]
pub struct ParseResult {
    /// Finishers in listing order
    pub finishers: Vec<Finisher>,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

/// Simple parsing statistics
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Total number of lines in the listing
    pub total_lines: usize,

    /// Number of blank or whitespace-only lines skipped
    pub blank_lines: usize,

    /// Number of finishers parsed
    pub finishers_parsed: usize,

    /// Number of fields kept as raw text after a failed conversion
    pub raw_fields: usize,

    /// Notes on lines whose fields kept raw text
    pub fallbacks: Vec<String>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Percentage of parsed finishers whose fields all converted
    pub fn clean_rate(&self) -> f64 {
        if self.finishers_parsed == 0 {
            100.0
        } else {
            let clean = self.finishers_parsed - self.fallbacks.len();
            (clean as f64 / self.finishers_parsed as f64) * 100.0
        }
    }

    /// Check that every field of every finisher converted
    pub fn is_clean(&self) -> bool {
        self.raw_fields == 0
    }
}
