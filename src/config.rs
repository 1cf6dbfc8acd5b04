//! Report configuration and validation.
//!
//! Provides the layout settings of rendered reports and the layered loading
//! used by the command line: built-in defaults, then an optional JSON file,
//! then explicit overrides.

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_AVERAGE_INDENT, DEFAULT_BORDER,
    DEFAULT_COLUMN_SEPARATOR, DEFAULT_MARGIN,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Layout settings for rendered reports
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Character of the rule above the headings
    pub top_border: Option<char>,

    /// Character of the rule between headings and body
    pub body_top: Option<char>,

    /// Text placed between columns
    pub column_separator: String,

    /// Spaces before each team average line
    pub average_indent: usize,

    /// Print meet name, date and venue above a race page
    pub show_meet_header: bool,

    /// Spaces before each line of a race page
    pub margin: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_border: Some(DEFAULT_BORDER),
            body_top: Some(DEFAULT_BORDER),
            column_separator: DEFAULT_COLUMN_SEPARATOR.to_string(),
            average_indent: DEFAULT_AVERAGE_INDENT,
            show_meet_header: false,
            margin: DEFAULT_MARGIN,
        }
    }
}

impl ReportConfig {
    pub fn with_top_border(mut self, border: Option<char>) -> Self {
        self.top_border = border;
        self
    }

    pub fn with_body_top(mut self, border: Option<char>) -> Self {
        self.body_top = border;
        self
    }

    pub fn with_column_separator(mut self, separator: impl Into<String>) -> Self {
        self.column_separator = separator.into();
        self
    }

    pub fn with_average_indent(mut self, indent: usize) -> Self {
        self.average_indent = indent;
        self
    }

    pub fn with_show_meet_header(mut self, show: bool) -> Self {
        self.show_meet_header = show;
        self
    }

    pub fn with_margin(mut self, margin: usize) -> Self {
        self.margin = margin;
        self
    }

    /// Check that the settings produce a readable report
    pub fn validate(&self) -> Result<()> {
        if self.column_separator.is_empty() {
            return Err(Error::configuration("column_separator must not be empty"));
        }

        for (name, border) in [("top_border", self.top_border), ("body_top", self.body_top)] {
            if let Some(ch) = border.filter(|ch| ch.is_whitespace() || ch.is_control()) {
                return Err(Error::configuration(format!(
                    "{} must be a visible character, got {:?}",
                    name, ch
                )));
            }
        }

        Ok(())
    }

    /// Parse a configuration from JSON; missing keys take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| Error::serialization("Failed to parse report configuration", e))
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| Error::serialization("Failed to serialize report configuration", e))
    }

    /// Read and validate a configuration file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|e| {
            Error::io(format!("Failed to read config file {}", path.display()), e)
        })?;
        let config = Self::from_json(&json)?;
        config.validate()?;
        debug!("Loaded report configuration from {}", path.display());
        Ok(config)
    }

    /// Write the configuration as pretty JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_json()?).map_err(|e| {
            Error::io(format!("Failed to write config file {}", path.display()), e)
        })
    }

    /// `<user config dir>/hytek/config.json`, when the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Defaults, overlaid by the explicit file or else the default file if present
    ///
    /// An explicit path must exist; the default path is skipped when missing.
    pub fn load_layered(explicit: Option<&Path>) -> Result<Self> {
        let config = match explicit {
            Some(path) => Self::load_from_file(path)?,
            None => match Self::default_path().filter(|path| path.is_file()) {
                Some(path) => Self::load_from_file(&path)?,
                None => Self::default(),
            },
        };

        info!(
            "Report layout: separator {:?}, margin {}, meet header {}",
            config.column_separator, config.margin, config.show_meet_header
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_are_valid() {
        let config = ReportConfig::default();
        assert_eq!(config.top_border, Some('='));
        assert_eq!(config.body_top, Some('='));
        assert_eq!(config.column_separator, " ");
        assert_eq!(config.average_indent, 7);
        assert_eq!(config.margin, 1);
        assert!(!config.show_meet_header);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_bad_layout() {
        let empty_separator = ReportConfig::default().with_column_separator("");
        assert!(empty_separator.validate().is_err());

        let blank_border = ReportConfig::default().with_top_border(Some(' '));
        assert!(blank_border.validate().is_err());

        let control_border = ReportConfig::default().with_body_top(Some('\t'));
        assert!(control_border.validate().is_err());

        let no_borders = ReportConfig::default().with_top_border(None).with_body_top(None);
        assert!(no_borders.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = ReportConfig::from_json(r#"{"margin": 3, "body_top": "-"}"#).unwrap();
        assert_eq!(config.margin, 3);
        assert_eq!(config.body_top, Some('-'));
        assert_eq!(config.top_border, Some('='));
        assert_eq!(config.average_indent, 7);
    }

    #[test]
    fn test_json_null_disables_border() {
        let config = ReportConfig::from_json(r#"{"top_border": null}"#).unwrap();
        assert_eq!(config.top_border, None);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"show_meet_header": true, "column_separator": "  "}}"#).unwrap();

        let config = ReportConfig::load_layered(Some(file.path())).unwrap();
        assert!(config.show_meet_header);
        assert_eq!(config.column_separator, "  ");
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"column_separator": ""}}"#).unwrap();
        assert!(matches!(
            ReportConfig::load_from_file(file.path()),
            Err(Error::Configuration { .. })
        ));

        let mut garbage = NamedTempFile::new().unwrap();
        write!(garbage, "not json").unwrap();
        assert!(matches!(
            ReportConfig::load_from_file(garbage.path()),
            Err(Error::Serialization { .. })
        ));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = ReportConfig::load_layered(Some(&dir.path().join("missing.json")));
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let config = ReportConfig::default().with_margin(4).with_average_indent(2);
        config.save(&path).unwrap();
        assert_eq!(ReportConfig::load_from_file(&path).unwrap(), config);
    }
}
