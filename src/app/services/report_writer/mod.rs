//! HyTek-style report writer
//!
//! The inverse of the results parser: finishers and externally computed team
//! scores are rendered back into the fixed-width, bordered tables HyTek
//! prints. The writer never scores a race itself; team places, totals and
//! averages are taken as given.
//!
//! ## Architecture
//!
//! - [`table`] - Fixed-width labeled table shared by both sections
//! - [`results`] - The individual results table
//! - [`scores`] - The team scores table with per-team average lines
//! - [`race`] - A full race page with margin and optional meet header
//!
//! ## Usage
//!
//! ```rust
//! use hytek::{Finisher, RaceTime, dump};
//!
//! let finishers = vec![
//!     Finisher::new("Reynolds, Francis", RaceTime::from_seconds(1500.71))
//!         .with_place(1)
//!         .with_team("Puget Sound")
//!         .with_points(1),
//! ];
//! let report = dump(&finishers, None, Some(8000));
//! assert_eq!(report.lines().next().map(str::trim), Some("8000 m run CC"));
//! ```

pub mod race;
pub mod results;
pub mod scores;
pub mod table;

#[cfg(test)]
pub mod tests;

pub use race::RaceReport;
pub use table::{LabeledTable, Pad, TableStyle};

use crate::app::models::{Finisher, Race, TeamScore, race_label};
use crate::config::ReportConfig;
use results::results_table;
use scores::ScoresTable;
use tracing::debug;

/// Renders results and scores sections with a given configuration
#[derive(Debug, Clone, Default)]
pub struct ReportWriter {
    config: ReportConfig,
}

impl ReportWriter {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Results table, then a blank line and the scores table when scores are given
    pub fn sections(
        &self,
        finishers: &[Finisher],
        scores: Option<&[TeamScore<'_>]>,
        label: Option<String>,
    ) -> impl Iterator<Item = String> + use<> {
        let style = TableStyle::from(&self.config);
        debug!(
            "Rendering {} finishers, {} teams",
            finishers.len(),
            scores.map_or(0, |scores| scores.len())
        );

        let results = results_table(finishers, label, style.clone());
        let scores = scores.map(|scores| ScoresTable::new(scores, style, self.config.average_indent));

        results.into_lines().chain(
            scores
                .into_iter()
                .flat_map(|scores| std::iter::once(String::new()).chain(scores.into_lines())),
        )
    }

    /// Report lines for a race of the given distance in meters
    pub fn render(
        &self,
        finishers: &[Finisher],
        scores: Option<&[TeamScore<'_>]>,
        distance: Option<u32>,
    ) -> impl Iterator<Item = String> + use<> {
        self.sections(finishers, scores, race_label(distance, None))
    }

    pub fn dump(
        &self,
        finishers: &[Finisher],
        scores: Option<&[TeamScore<'_>]>,
        distance: Option<u32>,
    ) -> String {
        self.render(finishers, scores, distance)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Full page for a race, including margin and meet header
    pub fn race_page(&self, race: &Race<'_>) -> String {
        RaceReport::new(race, self.clone()).to_text()
    }
}

/// Report lines with the default table style
pub fn render(
    finishers: &[Finisher],
    scores: Option<&[TeamScore<'_>]>,
    distance: Option<u32>,
) -> impl Iterator<Item = String> + use<> {
    ReportWriter::default().render(finishers, scores, distance)
}

/// The rendered report lines joined with newlines, without a trailing newline
pub fn dump(finishers: &[Finisher], scores: Option<&[TeamScore<'_>]>, distance: Option<u32>) -> String {
    ReportWriter::default().dump(finishers, scores, distance)
}
