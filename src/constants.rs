//! Application constants for HyTek listings
//!
//! This module contains the column vocabulary, sub-pattern building blocks,
//! report headings and layout values used throughout the library.

// =============================================================================
// Listing Columns
// =============================================================================

/// Columns of a result line, in the order they appear in a listing
pub const FIELD_ORDER: &[&str] = &["place", "bib", "name", "year", "team", "time", "points"];

/// Columns that may be missing from a listing without breaking the match
pub const OPTIONAL_FIELDS: &[&str] = &["bib", "year", "points"];

/// Eligibility class abbreviations recognised in the year column
///
/// Each family lists the case variants HyTek emits, e.g. `FR`/`Fr`.
pub mod class_years {
    pub const FRESHMAN: &str = "F[rR]";
    pub const SOPHOMORE: &str = "S[oOpP]";
    pub const JUNIOR: &str = "J[rR]";
    pub const SENIOR: &str = "S[rR]";

    /// All class-year alternatives, in matching order
    pub const ALL: &[&str] = &[FRESHMAN, SOPHOMORE, JUNIOR, SENIOR];
}

// =============================================================================
// Sub-pattern Building Blocks
// =============================================================================

pub mod patterns {
    /// A capitalized given name
    pub const FIRST_NAME: &str = r"[A-Z]\w*";

    /// A capitalized surname, allowing apostrophes and one hyphen/space joined part
    pub const LAST_NAME: &str = r"[A-Z](?:\w|')*(?:[ -](?:\w|')+)?";

    pub const PLACE: &str = r"\d+";
    pub const BIB: &str = r"#?\d+";
    pub const TEAM: &str = r"[A-Z]\D*";
    pub const TIME: &str = r"\d+:\d\d(?:\.\d{1,2})";
    pub const POINTS: &str = r"\d+";

    /// Separator placed between every pair of columns
    pub const COLUMN_GAP: &str = r"\s*";
}

// =============================================================================
// Race Times
// =============================================================================

pub const MICROS_PER_SECOND: u64 = 1_000_000;
pub const MICROS_PER_CENTISECOND: u64 = 10_000;
pub const SECONDS_PER_MINUTE: u64 = 60;

/// Length of a statute mile in meters
pub const METERS_PER_MILE: f64 = 1609.344;

// =============================================================================
// Report Layout
// =============================================================================

/// Headings of the results table (the place column has none)
pub const RESULTS_HEADINGS: &[Option<&str>] = &[
    None,
    Some("Name"),
    Some("Year"),
    Some("School"),
    Some("Finals"),
    Some("Points"),
];

/// Minimum width the points column is right-justified within
pub const POINTS_MIN_WIDTH: usize = 4;

/// Label of the team scores table
pub const TEAM_SCORES_LABEL: &str = "Team Scores";

/// Number of runners whose points appear in a team score row
pub const MAX_SCORING_FINISHERS: usize = 7;

/// Number of runners that count towards a team score; the rest are displacers
pub const COUNTING_FINISHERS: usize = 5;

/// Sample average line used to size the team column of the scores table
pub const TEAM_COLUMN_SAMPLE: &str = "  Top 5 Avg:  dd:dd.dd ";

pub const TOP_FIVE_LABEL: &str = "Top 5 Avg:";
pub const TOP_SEVEN_LABEL: &str = "Top 7 Avg:";

/// Suffix of the results table label, after the distance
pub const RACE_LABEL_SUFFIX: &str = "m run CC";

// =============================================================================
// Configuration
// =============================================================================

/// Directory under the user config dir holding HyTek settings
pub const CONFIG_DIR_NAME: &str = "hytek";

/// Default configuration file name
pub const CONFIG_FILE_NAME: &str = "config.json";

pub const DEFAULT_BORDER: char = '=';
pub const DEFAULT_COLUMN_SEPARATOR: &str = " ";
pub const DEFAULT_AVERAGE_INDENT: usize = 7;
pub const DEFAULT_MARGIN: usize = 1;

/// Date format of the meet header, e.g. "October 31, 2009"
pub const MEET_DATE_FORMAT: &str = "%B %-d, %Y";
