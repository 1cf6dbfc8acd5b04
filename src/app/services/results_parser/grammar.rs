//! Composite line grammar for result listings
//!
//! Every listing column has a named sub-pattern. The sub-patterns are joined,
//! in a fixed column order, with flexible whitespace into one regular expression
//! whose named groups are the columns. Optional columns are allowed to be absent
//! without consuming text from their neighbours.

use crate::constants::{FIELD_ORDER, OPTIONAL_FIELDS, class_years, patterns};
use crate::{Error, Result};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::sync::Arc;
use tracing::debug;

/// Columns every grammar must capture
const REQUIRED_FIELDS: &[&str] = &["name", "time"];

static STANDARD_GRAMMAR: Lazy<Arc<LineGrammar>> = Lazy::new(|| {
    Arc::new(
        LineGrammar::standard().expect("standard line grammar should compile - this is a bug"),
    )
});

/// A named sub-pattern for one listing column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPattern {
    pub name: String,
    pub pattern: String,
    pub optional: bool,
}

impl FieldPattern {
    pub fn required(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
            optional: false,
        }
    }

    pub fn optional(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
            optional: true,
        }
    }

    /// The sub-pattern wrapped in its named group
    pub fn to_group(&self) -> String {
        let quantifier = if self.optional { "?" } else { "" };
        format!("(?P<{}>{}){}", self.name, self.pattern, quantifier)
    }

    /// The standard sub-pattern for a known column name
    pub fn standard(name: &str) -> Option<Self> {
        let pattern = match name {
            "place" => patterns::PLACE.to_string(),
            "bib" => patterns::BIB.to_string(),
            "name" => name_pattern(),
            "year" => year_pattern(),
            "team" => patterns::TEAM.to_string(),
            "time" => patterns::TIME.to_string(),
            "points" => patterns::POINTS.to_string(),
            _ => return None,
        };
        Some(Self {
            name: name.to_string(),
            pattern,
            optional: OPTIONAL_FIELDS.contains(&name),
        })
    }
}

/// "Last, First" or "First Last"
fn name_pattern() -> String {
    let last_first = format!("{}, {}", patterns::LAST_NAME, patterns::FIRST_NAME);
    let first_last = format!("{} {}", patterns::FIRST_NAME, patterns::LAST_NAME);
    format!("{}|{}", last_first, first_last)
}

/// Class-year abbreviations, matched as a whole word
fn year_pattern() -> String {
    format!(r"\b(?:{})\b", class_years::ALL.join("|"))
}

/// Assembles a `LineGrammar` from column sub-patterns in order
#[derive(Debug, Clone, Default)]
pub struct GrammarBuilder {
    fields: Vec<FieldPattern>,
}

impl GrammarBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder preloaded with the seven standard HyTek columns
    pub fn standard() -> Self {
        let fields = FIELD_ORDER
            .iter()
            .filter_map(|name| FieldPattern::standard(name))
            .collect();
        Self { fields }
    }

    /// Append a column that every line must carry
    pub fn field(mut self, name: impl Into<String>, pattern: impl Into<String>) -> Self {
        self.fields.push(FieldPattern::required(name, pattern));
        self
    }

    /// Append a column that lines may leave out
    pub fn optional_field(mut self, name: impl Into<String>, pattern: impl Into<String>) -> Self {
        self.fields.push(FieldPattern::optional(name, pattern));
        self
    }

    /// Compile the composite pattern
    pub fn build(self) -> Result<LineGrammar> {
        for required in REQUIRED_FIELDS {
            match self.fields.iter().find(|field| field.name == *required) {
                Some(field) if field.optional => {
                    return Err(Error::configuration(format!(
                        "Line grammar column '{}' cannot be optional",
                        required
                    )));
                }
                Some(_) => {}
                None => {
                    return Err(Error::configuration(format!(
                        "Line grammar is missing the '{}' column",
                        required
                    )));
                }
            }
        }

        let pattern = self
            .fields
            .iter()
            .map(FieldPattern::to_group)
            .collect::<Vec<_>>()
            .join(patterns::COLUMN_GAP);

        let regex = Regex::new(&pattern)
            .map_err(|e| Error::configuration(format!("Invalid line grammar: {}", e)))?;

        debug!(
            "Built line grammar with {} columns: /{}/",
            self.fields.len(),
            pattern
        );

        Ok(LineGrammar {
            fields: self.fields,
            pattern,
            regex,
        })
    }
}

/// Compiled composite pattern for one result line
///
/// Immutable once built; share it between parsers and threads freely.
#[derive(Debug, Clone)]
pub struct LineGrammar {
    fields: Vec<FieldPattern>,
    pattern: String,
    regex: Regex,
}

impl LineGrammar {
    /// Compile the standard HyTek grammar
    pub fn standard() -> Result<Self> {
        GrammarBuilder::standard().build()
    }

    /// The process-wide standard grammar, compiled on first use
    pub fn shared() -> Arc<LineGrammar> {
        Arc::clone(&STANDARD_GRAMMAR)
    }

    /// The composite pattern source
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn fields(&self) -> &[FieldPattern] {
        &self.fields
    }

    /// Column names in grammar order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|field| field.name.as_str())
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields.iter().any(|field| field.name == name)
    }

    /// Find the first match anywhere in the line
    pub fn captures<'t>(&self, line: &'t str) -> Option<Captures<'t>> {
        self.regex.captures(line)
    }

    pub fn is_match(&self, line: &str) -> bool {
        self.regex.is_match(line)
    }
}
