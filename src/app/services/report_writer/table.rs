//! Fixed-width labeled tables
//!
//! The HyTek report style is a set of plain-text tables: an optional centred
//! label, a rule, a heading line, another rule, then one line per row. Column
//! widths come from the widest heading or cell in each column.

use crate::config::ReportConfig;
use crate::constants::{DEFAULT_BORDER, DEFAULT_COLUMN_SEPARATOR};
use tracing::debug;

/// How a cell is padded out to its column width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pad {
    #[default]
    Left,
    Right,
    Center,
    /// Right-justify within the given width, then left-justify to the column
    RightWithin(usize),
}

impl Pad {
    pub fn apply(self, text: &str, width: usize) -> String {
        match self {
            Pad::Left => format!("{:<width$}", text),
            Pad::Right => format!("{:>width$}", text),
            Pad::Center => format!("{:^width$}", text),
            Pad::RightWithin(inner) => format!("{:<width$}", format!("{:>inner$}", text)),
        }
    }

    /// Width a cell occupies once padded, before column alignment
    fn natural_width(self, text: &str) -> usize {
        let length = text.chars().count();
        match self {
            Pad::RightWithin(inner) => length.max(inner),
            _ => length,
        }
    }
}

/// Border characters and column spacing shared by every table in a report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableStyle {
    pub top_border: Option<char>,
    pub body_top: Option<char>,
    pub column_separator: String,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            top_border: Some(DEFAULT_BORDER),
            body_top: Some(DEFAULT_BORDER),
            column_separator: DEFAULT_COLUMN_SEPARATOR.to_string(),
        }
    }
}

impl From<&ReportConfig> for TableStyle {
    fn from(config: &ReportConfig) -> Self {
        Self {
            top_border: config.top_border,
            body_top: config.body_top,
            column_separator: config.column_separator.clone(),
        }
    }
}

/// Cell contents of one table row; `None` renders as an empty cell
pub type Row = Vec<Option<String>>;

/// Aligns cells of a row to fixed column widths
#[derive(Debug, Clone)]
pub struct RowFormatter {
    widths: Vec<usize>,
    pads: Vec<Pad>,
    separator: String,
}

impl RowFormatter {
    pub fn format(&self, row: &[Option<String>]) -> String {
        let cells: Vec<String> = self
            .widths
            .iter()
            .enumerate()
            .map(|(index, &width)| {
                let text = row.get(index).and_then(|cell| cell.as_deref()).unwrap_or("");
                self.pad(index).apply(text, width)
            })
            .collect();
        cells.join(&self.separator).trim_end().to_string()
    }

    fn pad(&self, index: usize) -> Pad {
        self.pads.get(index).copied().unwrap_or_default()
    }

    /// Total width of a formatted row, before trailing whitespace is trimmed
    pub fn width(&self) -> usize {
        let separators = self.widths.len().saturating_sub(1) * self.separator.chars().count();
        self.widths.iter().sum::<usize>() + separators
    }
}

/// A table with optional label and headings, rendered line by line
#[derive(Debug, Clone, Default)]
pub struct LabeledTable {
    label: Option<String>,
    headings: Row,
    rows: Vec<Row>,
    pads: Vec<Pad>,
    style: TableStyle,
}

impl LabeledTable {
    pub fn new(rows: Vec<Row>) -> Self {
        Self {
            rows,
            ..Self::default()
        }
    }

    pub fn with_label(mut self, label: Option<String>) -> Self {
        self.label = label;
        self
    }

    pub fn with_headings(mut self, headings: Row) -> Self {
        self.headings = headings;
        self
    }

    /// Per-column padding; columns without an entry are left-justified
    pub fn with_pads(mut self, pads: Vec<Pad>) -> Self {
        self.pads = pads;
        self
    }

    pub fn with_style(mut self, style: TableStyle) -> Self {
        self.style = style;
        self
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    fn column_count(&self) -> usize {
        self.rows
            .iter()
            .map(Vec::len)
            .chain([self.headings.len(), self.pads.len()])
            .max()
            .unwrap_or(0)
    }

    /// Width of each column: its widest padded heading or cell
    pub fn column_widths(&self) -> Vec<usize> {
        (0..self.column_count())
            .map(|index| {
                let pad = self.pads.get(index).copied().unwrap_or_default();
                std::iter::once(&self.headings)
                    .chain(self.rows.iter())
                    .filter_map(|row| row.get(index).and_then(|cell| cell.as_deref()))
                    .map(|text| pad.natural_width(text))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    pub fn row_formatter(&self) -> RowFormatter {
        RowFormatter {
            widths: self.column_widths(),
            pads: self.pads.clone(),
            separator: self.style.column_separator.clone(),
        }
    }

    /// Overall width, wide enough for the label as well as the columns
    pub fn width(&self) -> usize {
        let label_width = self
            .label
            .as_deref()
            .map(|label| label.chars().count())
            .unwrap_or(0);
        self.row_formatter().width().max(label_width)
    }

    /// Label, top rule, headings and heading rule
    pub fn header_lines(&self) -> Vec<String> {
        let formatter = self.row_formatter();
        let width = self.width();
        let mut lines = Vec::new();

        if let Some(label) = &self.label {
            lines.push(Pad::Center.apply(label, width).trim_end().to_string());
        }
        if let Some(border) = self.style.top_border {
            lines.push(border.to_string().repeat(width));
        }
        if !self.headings.is_empty() {
            lines.push(formatter.format(&self.headings));
        }
        if let Some(border) = self.style.body_top {
            lines.push(border.to_string().repeat(width));
        }

        debug!(
            "Table header: {} columns, width {}, {} rows",
            self.column_count(),
            width,
            self.rows.len()
        );
        lines
    }

    /// One line per row
    pub fn body_lines(&self) -> impl Iterator<Item = String> + '_ {
        let formatter = self.row_formatter();
        self.rows.iter().map(move |row| formatter.format(row))
    }

    /// Split into the rendered header and a lazy iterator over body lines
    pub fn into_header_and_body(self) -> (Vec<String>, impl Iterator<Item = String>) {
        let header = self.header_lines();
        let formatter = self.row_formatter();
        let body = self.rows.into_iter().map(move |row| formatter.format(&row));
        (header, body)
    }

    /// Header block followed by one line per row
    pub fn into_lines(self) -> impl Iterator<Item = String> {
        let (header, body) = self.into_header_and_body();
        header.into_iter().chain(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(values: &[&str]) -> Row {
        values
            .iter()
            .map(|v| if v.is_empty() { None } else { Some(v.to_string()) })
            .collect()
    }

    #[test]
    fn test_pad_variants() {
        assert_eq!(Pad::Left.apply("ab", 4), "ab  ");
        assert_eq!(Pad::Right.apply("ab", 4), "  ab");
        assert_eq!(Pad::Center.apply("ab", 6), "  ab  ");
        assert_eq!(Pad::RightWithin(4).apply("7", 6), "   7  ");
        assert_eq!(Pad::RightWithin(4).apply("Points", 6), "Points");
    }

    #[test]
    fn test_columns_sized_to_widest_cell() {
        let table = LabeledTable::new(vec![cells(&["1", "Parker, Matt"]), cells(&["10", "Rand, Cory"])])
            .with_headings(cells(&["", "Name"]))
            .with_pads(vec![Pad::Right, Pad::Left]);
        assert_eq!(table.column_widths(), vec![2, 12]);
        assert_eq!(table.width(), 15);
    }

    #[test]
    fn test_rendered_lines() {
        let table = LabeledTable::new(vec![cells(&["1", "Parker, Matt"]), cells(&["10", "Rand, Cory"])])
            .with_label(Some("Results".to_string()))
            .with_headings(cells(&["", "Name"]))
            .with_pads(vec![Pad::Right, Pad::Left]);
        let lines: Vec<String> = table.into_lines().collect();
        assert_eq!(
            lines,
            [
                "    Results",
                "===============",
                "   Name",
                "===============",
                " 1 Parker, Matt",
                "10 Rand, Cory",
            ]
        );
    }

    #[test]
    fn test_label_wider_than_columns() {
        let table = LabeledTable::new(vec![cells(&["1"])]).with_label(Some("Wide label".to_string()));
        let lines: Vec<String> = table.into_lines().collect();
        assert_eq!(lines, ["Wide label", "==========", "==========", "1"]);
    }

    #[test]
    fn test_style_without_borders() {
        let style = TableStyle {
            top_border: None,
            body_top: Some('-'),
            column_separator: " | ".to_string(),
        };
        let table = LabeledTable::new(vec![cells(&["a", "b"])])
            .with_headings(cells(&["x", "y"]))
            .with_style(style);
        let lines: Vec<String> = table.into_lines().collect();
        assert_eq!(lines, ["x | y", "-----", "a | b"]);
    }

    #[test]
    fn test_missing_cells_render_blank() {
        let table = LabeledTable::new(vec![cells(&["1", "", "3"]), cells(&["4"])])
            .with_style(TableStyle {
                top_border: None,
                body_top: None,
                column_separator: " ".to_string(),
            });
        let lines: Vec<String> = table.into_lines().collect();
        assert_eq!(lines, ["1  3", "4"]);
    }
}
