//! Team scores table
//!
//! Each team row is followed by its average lines, so the body is rendered
//! row by row rather than as a plain table.

use super::table::{LabeledTable, Pad, Row, TableStyle};
use crate::app::models::{RaceTime, TeamScore};
use crate::constants::{
    COUNTING_FINISHERS, MAX_SCORING_FINISHERS, TEAM_COLUMN_SAMPLE, TEAM_SCORES_LABEL,
    TOP_FIVE_LABEL, TOP_SEVEN_LABEL,
};
use tracing::warn;

/// Average times printed under a team row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct TeamAverages {
    top_five: Option<RaceTime>,
    top_seven: Option<RaceTime>,
}

impl TeamAverages {
    /// The Top 5 line always follows a team row, blank when there is no average;
    /// the Top 7 line only when that average exists
    fn lines(&self, indent: &str) -> Vec<String> {
        let top_five = self.top_five.map(|time| time.to_string()).unwrap_or_default();
        std::iter::once(average_line(indent, TOP_FIVE_LABEL, &top_five))
            .chain(
                self.top_seven
                    .map(|time| average_line(indent, TOP_SEVEN_LABEL, &time.to_string())),
            )
            .collect()
    }
}

fn average_line(indent: &str, label: &str, value: &str) -> String {
    format!("{}{}  {}", indent, label, value).trim_end().to_string()
}

fn score_headings() -> Row {
    let team_width = TEAM_COLUMN_SAMPLE.len();
    let mut headings = vec![
        "Rank".to_string(),
        format!("{:<team_width$}", "Team"),
        "Total".to_string(),
    ];
    headings.extend((1..=MAX_SCORING_FINISHERS).map(|position| {
        if position <= COUNTING_FINISHERS {
            format!("{:>4}", position)
        } else {
            format!("{:>4}", format!("*{}", position))
        }
    }));
    headings.into_iter().map(Some).collect()
}

fn score_pads() -> Vec<Pad> {
    let mut pads = vec![Pad::Right; 3 + MAX_SCORING_FINISHERS];
    pads[1] = Pad::Left;
    pads
}

fn team_row(team: &TeamScore<'_>) -> Row {
    if team.finishers.len() > MAX_SCORING_FINISHERS {
        warn!(
            "Team '{}' lists {} scorers, only the first {} are shown",
            team.name,
            team.finishers.len(),
            MAX_SCORING_FINISHERS
        );
    }

    let mut row = vec![
        team.place.map(|place| place.to_string()),
        Some(team.name.clone()),
        team.score.map(|score| score.to_string()),
    ];
    row.extend(
        team.finishers
            .iter()
            .take(MAX_SCORING_FINISHERS)
            .map(|finisher| finisher.points.as_ref().map(ToString::to_string)),
    );
    row.resize(3 + MAX_SCORING_FINISHERS, None);
    row
}

/// The team scores section of a report
#[derive(Debug, Clone)]
pub struct ScoresTable {
    table: LabeledTable,
    averages: Vec<TeamAverages>,
    average_indent: usize,
}

impl ScoresTable {
    pub fn new(scores: &[TeamScore<'_>], style: TableStyle, average_indent: usize) -> Self {
        let rows = scores.iter().map(team_row).collect();
        let averages = scores
            .iter()
            .map(|team| TeamAverages {
                top_five: team.top_five,
                top_seven: team.top_seven,
            })
            .collect();

        let table = LabeledTable::new(rows)
            .with_label(Some(TEAM_SCORES_LABEL.to_string()))
            .with_headings(score_headings())
            .with_pads(score_pads())
            .with_style(style);

        Self {
            table,
            averages,
            average_indent,
        }
    }

    /// Header block, then each team row followed by its average lines
    pub fn into_lines(self) -> impl Iterator<Item = String> {
        let indent = " ".repeat(self.average_indent);
        let averages = self.averages;
        let (header, body) = self.table.into_header_and_body();

        header.into_iter().chain(
            body.zip(averages)
                .flat_map(move |(row, averages)| {
                    std::iter::once(row).chain(averages.lines(&indent))
                }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::Finisher;

    #[test]
    fn test_headings() {
        let headings: Vec<String> = score_headings().into_iter().flatten().collect();
        assert_eq!(headings[0], "Rank");
        assert_eq!(headings[1], format!("Team{}", " ".repeat(19)));
        assert_eq!(headings[2], "Total");
        assert_eq!(&headings[3..], ["   1", "   2", "   3", "   4", "   5", "  *6", "  *7"]);
    }

    #[test]
    fn test_short_team_row_is_padded() {
        let finishers: Vec<Finisher> = (1..=5)
            .map(|p| Finisher::new("Runner, A", RaceTime::ZERO).with_points(p))
            .collect();
        let team = TeamScore::new("Whitman")
            .with_place(2)
            .with_score(15)
            .with_finishers(finishers.iter().collect());
        let row = team_row(&team);
        assert_eq!(row.len(), 10);
        assert_eq!(row[0].as_deref(), Some("2"));
        assert_eq!(row[7].as_deref(), Some("5"));
        assert_eq!(row[8], None);
        assert_eq!(row[9], None);
    }

    #[test]
    fn test_long_team_row_is_truncated() {
        let finishers: Vec<Finisher> = (1..=9)
            .map(|p| Finisher::new("Runner, A", RaceTime::ZERO).with_points(p))
            .collect();
        let team = TeamScore::new("Whitman").with_finishers(finishers.iter().collect());
        let row = team_row(&team);
        assert_eq!(row.len(), 10);
        assert_eq!(row[9].as_deref(), Some("7"));
    }

    #[test]
    fn test_average_lines() {
        let averages = TeamAverages {
            top_five: Some(RaceTime::from_seconds(1532.1)),
            top_seven: None,
        };
        assert_eq!(averages.lines("       "), ["       Top 5 Avg:  25:32.10"]);
    }

    #[test]
    fn test_top_five_line_without_average_is_blank() {
        assert_eq!(TeamAverages::default().lines("  "), ["  Top 5 Avg:"]);

        let averages = TeamAverages {
            top_five: None,
            top_seven: Some(RaceTime::from_seconds(1545.5)),
        };
        assert_eq!(averages.lines(" "), [" Top 5 Avg:", " Top 7 Avg:  25:45.50"]);
    }
}
