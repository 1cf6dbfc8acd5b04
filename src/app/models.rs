//! Data models for HyTek listings
//!
//! This module contains the records a result listing is parsed into and the
//! team and race shapes the report writer consumes.

pub mod race_time;

pub use race_time::RaceTime;

use crate::constants::RACE_LABEL_SUFFIX;
use crate::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Lenient Field Values
// =============================================================================

/// A converted field, or the raw matched text when conversion failed
///
/// Conversion failures inside a matched line are not fatal; the text that the
/// grammar matched is kept so nothing from the listing is lost.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue<T> {
    Typed(T),
    Raw(String),
}

impl<T> FieldValue<T> {
    /// The converted value, if conversion succeeded
    pub fn typed(&self) -> Option<&T> {
        match self {
            FieldValue::Typed(value) => Some(value),
            FieldValue::Raw(_) => None,
        }
    }

    /// The unconverted text, if conversion failed
    pub fn raw(&self) -> Option<&str> {
        match self {
            FieldValue::Typed(_) => None,
            FieldValue::Raw(text) => Some(text),
        }
    }

    pub fn is_raw(&self) -> bool {
        matches!(self, FieldValue::Raw(_))
    }
}

impl<T: Copy> FieldValue<T> {
    pub fn value(&self) -> Option<T> {
        self.typed().copied()
    }
}

impl<T> From<T> for FieldValue<T> {
    fn from(value: T) -> Self {
        FieldValue::Typed(value)
    }
}

impl<T: fmt::Display> fmt::Display for FieldValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Typed(value) => value.fmt(f),
            FieldValue::Raw(text) => f.write_str(text),
        }
    }
}

// =============================================================================
// Finisher Record
// =============================================================================

/// One runner's recorded result in a race
///
/// `name` and `time` are always present; every other column depends on the
/// layout of the listing the finisher came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finisher {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place: Option<FieldValue<u32>>,

    /// Bib number as printed, including any leading `#`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bib: Option<String>,

    /// Either "Last, First" or "First Last"
    pub name: String,

    /// Eligibility class abbreviation (e.g. "SO", "Jr")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,

    pub time: FieldValue<RaceTime>,

    /// Team points; non-scoring runners have none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<FieldValue<u32>>,
}

impl Finisher {
    /// Create a finisher with only the required columns
    pub fn new(name: impl Into<String>, time: RaceTime) -> Self {
        Self {
            place: None,
            bib: None,
            name: name.into(),
            year: None,
            team: None,
            time: FieldValue::Typed(time),
            points: None,
        }
    }

    pub fn with_place(mut self, place: u32) -> Self {
        self.place = Some(FieldValue::Typed(place));
        self
    }

    pub fn with_bib(mut self, bib: impl Into<String>) -> Self {
        self.bib = Some(bib.into());
        self
    }

    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = Some(year.into());
        self
    }

    pub fn with_team(mut self, team: impl Into<String>) -> Self {
        self.team = Some(team.into());
        self
    }

    pub fn with_points(mut self, points: u32) -> Self {
        self.points = Some(FieldValue::Typed(points));
        self
    }

    /// Finishing place, when present and numeric
    pub fn place(&self) -> Option<u32> {
        self.place.as_ref().and_then(FieldValue::value)
    }

    /// Team points, when present and numeric
    pub fn points(&self) -> Option<u32> {
        self.points.as_ref().and_then(FieldValue::value)
    }

    /// Finishing time, when it converted to a valid race time
    pub fn race_time(&self) -> Option<RaceTime> {
        self.time.value()
    }

    /// Number of fields holding raw text instead of a converted value
    pub fn raw_field_count(&self) -> usize {
        [
            self.place.as_ref().is_some_and(FieldValue::is_raw),
            self.time.is_raw(),
            self.points.as_ref().is_some_and(FieldValue::is_raw),
        ]
        .iter()
        .filter(|raw| **raw)
        .count()
    }
}

// =============================================================================
// Team Score Record
// =============================================================================

/// A team's externally computed score, as displayed in the scores table
///
/// The report writer only reads these values; it does not derive or check them.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamScore<'a> {
    /// Display rank; unscored teams have none
    pub place: Option<u32>,

    pub name: String,

    /// Total points; unscored teams have none
    pub score: Option<u32>,

    /// Scoring finishers in finishing order, at most seven are displayed
    pub finishers: Vec<&'a Finisher>,

    /// Average time of the first five scorers
    pub top_five: Option<RaceTime>,

    /// Average time of all seven scorers, only when seven are scored
    pub top_seven: Option<RaceTime>,
}

impl<'a> TeamScore<'a> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            place: None,
            name: name.into(),
            score: None,
            finishers: Vec::new(),
            top_five: None,
            top_seven: None,
        }
    }

    pub fn with_place(mut self, place: u32) -> Self {
        self.place = Some(place);
        self
    }

    pub fn with_score(mut self, score: u32) -> Self {
        self.score = Some(score);
        self
    }

    pub fn with_finishers(mut self, finishers: Vec<&'a Finisher>) -> Self {
        self.finishers = finishers;
        self
    }

    pub fn with_top_five(mut self, average: RaceTime) -> Self {
        self.top_five = Some(average);
        self
    }

    pub fn with_top_seven(mut self, average: RaceTime) -> Self {
        self.top_seven = Some(average);
        self
    }
}

// =============================================================================
// Race and Meet
// =============================================================================

/// Which division a race was run in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Men,
    Women,
}

impl Gender {
    /// Possessive label used in race titles
    pub fn label(self) -> &'static str {
        match self {
            Gender::Men => "Men's",
            Gender::Women => "Women's",
        }
    }
}

impl FromStr for Gender {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "men" | "male" | "m" => Ok(Gender::Men),
            "women" | "female" | "w" | "f" => Ok(Gender::Women),
            _ => Err(Error::configuration(format!(
                "Invalid gender '{}': expected 'men' or 'women'",
                s
            ))),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The meet a race was part of
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meet {
    pub name: String,
    pub venue: String,
    pub date: NaiveDate,
}

impl Meet {
    pub fn new(name: impl Into<String>, venue: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            venue: venue.into(),
            date,
        }
    }
}

/// Everything needed to print one race
#[derive(Debug, Clone, Default)]
pub struct Race<'a> {
    pub meet: Option<Meet>,
    pub gender: Option<Gender>,

    /// Race length in meters
    pub distance: Option<u32>,

    pub results: &'a [Finisher],

    /// Team scores in display order, if the race was scored
    pub scores: Option<Vec<TeamScore<'a>>>,
}

impl<'a> Race<'a> {
    pub fn new(results: &'a [Finisher]) -> Self {
        Self {
            results,
            ..Self::default()
        }
    }

    pub fn with_meet(mut self, meet: Meet) -> Self {
        self.meet = Some(meet);
        self
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    pub fn with_distance(mut self, distance: u32) -> Self {
        self.distance = Some(distance);
        self
    }

    pub fn with_scores(mut self, scores: Vec<TeamScore<'a>>) -> Self {
        self.scores = Some(scores);
        self
    }
}

/// Results table label, e.g. "10000 m run CC" or "Men's 8000 m run CC"
pub fn race_label(distance: Option<u32>, gender: Option<Gender>) -> Option<String> {
    let distance = distance?;
    Some(match gender {
        Some(gender) => format!("{} {} {}", gender.label(), distance, RACE_LABEL_SUFFIX),
        None => format!("{} {}", distance, RACE_LABEL_SUFFIX),
    })
}
