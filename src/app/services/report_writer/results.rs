//! Individual results table

use super::table::{LabeledTable, Pad, Row, TableStyle};
use crate::app::models::Finisher;
use crate::constants::{POINTS_MIN_WIDTH, RESULTS_HEADINGS};

/// Column padding: place right-justified, points right-justified within
/// a minimum width, everything else left-justified
fn results_pads() -> Vec<Pad> {
    vec![
        Pad::Right,
        Pad::Left,
        Pad::Left,
        Pad::Left,
        Pad::Left,
        Pad::RightWithin(POINTS_MIN_WIDTH),
    ]
}

fn finisher_row(finisher: &Finisher) -> Row {
    vec![
        finisher.place.as_ref().map(ToString::to_string),
        Some(finisher.name.clone()),
        finisher.year.clone(),
        finisher.team.clone(),
        Some(finisher.time.to_string()),
        finisher.points.as_ref().map(ToString::to_string),
    ]
}

/// Build the results table for finishers in listing order
pub fn results_table(finishers: &[Finisher], label: Option<String>, style: TableStyle) -> LabeledTable {
    let headings = RESULTS_HEADINGS
        .iter()
        .map(|heading| heading.map(str::to_string))
        .collect();

    LabeledTable::new(finishers.iter().map(finisher_row).collect())
        .with_label(label)
        .with_headings(headings)
        .with_pads(results_pads())
        .with_style(style)
}
