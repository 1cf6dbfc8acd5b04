//! Field parsing utilities for result lines
//!
//! This module provides helper functions for pulling named columns out of a
//! matched line and converting them. Conversion failures are lenient: the raw
//! matched text is kept and the failure is logged.

use crate::app::models::{FieldValue, RaceTime};
use crate::{Error, Result};
use regex::Captures;
use tracing::debug;

/// Convert a count column (place, points) to an integer
pub fn parse_optional_count(captures: &Captures<'_>, field_name: &str) -> Option<FieldValue<u32>> {
    get_optional_field(captures, field_name).map(|value_str| match value_str.parse::<u32>() {
        Ok(value) => FieldValue::Typed(value),
        Err(e) => {
            debug!(
                "Keeping raw text for {}: '{}' is not a count ({})",
                field_name, value_str, e
            );
            FieldValue::Raw(value_str.to_string())
        }
    })
}

/// Convert the time column to a race time
pub fn parse_required_time(
    captures: &Captures<'_>,
    field_name: &str,
    line_number: usize,
) -> Result<FieldValue<RaceTime>> {
    let value_str = get_required_field(captures, field_name, line_number)?;

    Ok(match RaceTime::parse(value_str) {
        Ok(time) => FieldValue::Typed(time),
        Err(e) => {
            debug!("Keeping raw text for {} on line {}: {}", field_name, line_number, e);
            FieldValue::Raw(value_str.to_string())
        }
    })
}

/// Take a required text column
pub fn parse_required_string(
    captures: &Captures<'_>,
    field_name: &str,
    line_number: usize,
) -> Result<String> {
    get_required_field(captures, field_name, line_number).map(str::to_string)
}

/// Take an optional text column
pub fn parse_optional_string(captures: &Captures<'_>, field_name: &str) -> Option<String> {
    get_optional_field(captures, field_name).map(str::to_string)
}

/// Get a required column value from a matched line
pub fn get_required_field<'t>(
    captures: &Captures<'t>,
    field_name: &str,
    line_number: usize,
) -> Result<&'t str> {
    get_optional_field(captures, field_name).ok_or_else(|| {
        Error::configuration(format!(
            "Line {}: grammar matched without the required '{}' column",
            line_number, field_name
        ))
    })
}

/// Get an optional column value from a matched line, trimmed and non-empty
pub fn get_optional_field<'t>(captures: &Captures<'t>, field_name: &str) -> Option<&'t str> {
    captures
        .name(field_name)
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty())
}
