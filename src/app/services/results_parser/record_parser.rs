//! Individual result line parsing
//!
//! This module turns the named groups of one matched line into a `Finisher`.
//! Column extraction follows the grammar's column order, so layouts with and
//! without bib, year or points columns all flow through the same code.

use regex::Captures;

use super::field_parsers::{
    parse_optional_count, parse_optional_string, parse_required_string, parse_required_time,
};
use crate::Result;
use crate::app::models::Finisher;

/// Parse a single finisher from a matched line
pub fn parse_finisher_record(captures: &Captures<'_>, line_number: usize) -> Result<Finisher> {
    // Required columns
    let name = parse_required_string(captures, "name", line_number)?;
    let time = parse_required_time(captures, "time", line_number)?;

    // Optional columns, absent when the listing leaves them out
    let place = parse_optional_count(captures, "place");
    let bib = parse_optional_string(captures, "bib");
    let year = parse_optional_string(captures, "year");
    let team = parse_optional_string(captures, "team");
    let points = parse_optional_count(captures, "points");

    Ok(Finisher {
        place,
        bib,
        name,
        year,
        team,
        time,
        points,
    })
}
