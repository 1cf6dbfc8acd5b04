//! Full race page: meet header, results and team scores

use super::ReportWriter;
use super::table::Pad;
use crate::app::models::{Meet, Race, race_label};
use crate::constants::MEET_DATE_FORMAT;
use tracing::debug;

/// A printable page for one race
///
/// Wraps the results and scores sections in a left margin, optionally under
/// a centred meet header, with blank lines above and below the page.
#[derive(Debug, Clone)]
pub struct RaceReport<'a> {
    race: &'a Race<'a>,
    writer: ReportWriter,
}

impl<'a> RaceReport<'a> {
    pub fn new(race: &'a Race<'a>, writer: ReportWriter) -> Self {
        Self { race, writer }
    }

    fn label(&self) -> Option<String> {
        race_label(self.race.distance, self.race.gender)
    }

    /// All lines of the page, in order
    pub fn lines(&self) -> Vec<String> {
        let config = self.writer.config();
        let margin = " ".repeat(config.margin);

        let body: Vec<String> = self
            .writer
            .sections(self.race.results, self.race.scores.as_deref(), self.label())
            .collect();
        let width = body
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0)
            + 2 * config.margin;

        let mut lines = vec![String::new()];
        if let Some(meet) = self.race.meet.as_ref().filter(|_| config.show_meet_header) {
            lines.extend(meet_header(meet, width));
        }
        lines.extend(body.into_iter().map(|line| {
            if line.is_empty() {
                line
            } else {
                format!("{}{}", margin, line)
            }
        }));
        lines.push(String::new());

        debug!("Race page: {} lines, width {}", lines.len(), width);
        lines
    }

    pub fn to_text(&self) -> String {
        self.lines().join("\n")
    }
}

/// Meet name, date and venue centred over the page, then a blank line
fn meet_header(meet: &Meet, width: usize) -> Vec<String> {
    let date = meet.date.format(MEET_DATE_FORMAT).to_string();
    [meet.name.as_str(), date.as_str(), meet.venue.as_str()]
        .into_iter()
        .map(|text| Pad::Center.apply(text, width).trim_end().to_string())
        .chain(std::iter::once(String::new()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_meet_header_is_centred() {
        let meet = Meet::new(
            "NWC Championships",
            "Lewis & Clark",
            NaiveDate::from_ymd_opt(2009, 10, 31).unwrap(),
        );
        let header = meet_header(&meet, 21);
        assert_eq!(
            header,
            ["  NWC Championships", "  October 31, 2009", "    Lewis & Clark", ""]
        );
    }
}
