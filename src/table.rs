//! Typed table building and markdown rendering
//!
//! Data assembly is decoupled from text formatting: callers build a [`Table`]
//! out of typed [`Cell`]s and hand it to a [`TableRenderer`]. Column widths
//! are computed from display width, so alignment survives styled (ANSI) and
//! non-ASCII content.

use console::measure_text_width;
use std::borrow::Cow;

/// A single typed table cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    /// Empty cell (used for separator rows)
    Empty,
    /// Plain text content
    Text(String),
    /// A gas value
    Value(u64),
    /// Pre-styled content carrying ANSI escape codes
    Styled(String),
}

impl Cell {
    /// Text content as rendered into the table
    fn rendered(&self) -> Cow<'_, str> {
        match self {
            Cell::Empty => Cow::Borrowed(""),
            Cell::Text(s) | Cell::Styled(s) => Cow::Borrowed(s),
            Cell::Value(v) => Cow::Owned(v.to_string()),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<u64> for Cell {
    fn from(v: u64) -> Self {
        Cell::Value(v)
    }
}

/// A header plus rows of typed cells
#[derive(Debug, Default)]
pub struct Table {
    header: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Create a table with the given column headers
    pub fn new<I, S>(header: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            header: header.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Number of columns, as defined by the header
    pub fn columns(&self) -> usize {
        self.header.len()
    }

    /// Append a data row. Rows shorter than the header are padded with
    /// empty cells at render time.
    pub fn push_row<I>(&mut self, cells: I)
    where
        I: IntoIterator<Item = Cell>,
    {
        self.rows.push(cells.into_iter().collect());
    }

    /// Append an all-empty separator row
    pub fn push_blank_row(&mut self) {
        self.rows.push(vec![Cell::Empty; self.columns()]);
    }
}

/// Renders a [`Table`] to text
pub trait TableRenderer {
    /// Produce the complete textual table, without a trailing newline
    fn render(&self, table: &Table) -> String;
}

/// GitHub-flavoured markdown table renderer with display-width alignment
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    fn column_widths(table: &Table) -> Vec<usize> {
        let mut widths: Vec<usize> = table
            .header
            .iter()
            .map(|h| measure_text_width(h).max(3))
            .collect();
        for row in &table.rows {
            for (i, cell) in row.iter().enumerate().take(widths.len()) {
                widths[i] = widths[i].max(measure_text_width(&cell.rendered()));
            }
        }
        widths
    }

    fn render_line(cells: &[Cow<'_, str>], widths: &[usize]) -> String {
        let mut line = String::from("|");
        for (i, width) in widths.iter().enumerate() {
            let content = cells.get(i).map(|c| c.as_ref()).unwrap_or("");
            let pad = width.saturating_sub(measure_text_width(content));
            line.push(' ');
            line.push_str(content);
            line.push_str(&" ".repeat(pad));
            line.push_str(" |");
        }
        line
    }
}

impl TableRenderer for MarkdownRenderer {
    fn render(&self, table: &Table) -> String {
        let widths = Self::column_widths(table);

        let mut lines = Vec::with_capacity(table.rows.len() + 2);
        let header: Vec<Cow<'_, str>> =
            table.header.iter().map(|h| Cow::Borrowed(h.as_str())).collect();
        lines.push(Self::render_line(&header, &widths));

        let delimiter: Vec<Cow<'_, str>> =
            widths.iter().map(|w| Cow::Owned("-".repeat(*w))).collect();
        lines.push(Self::render_line(&delimiter, &widths));

        for row in &table.rows {
            let cells: Vec<Cow<'_, str>> = row.iter().map(Cell::rendered).collect();
            lines.push(Self::render_line(&cells, &widths));
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_aligns_columns() {
        let mut table = Table::new(["Snapshot", "Gas"]);
        table.push_row([Cell::from("settler_uniswapV3"), Cell::from(123876u64)]);
        table.push_row([Cell::from("a"), Cell::from(5u64)]);

        let rendered = MarkdownRenderer.render(&table);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "| Snapshot          | Gas    |");
        assert_eq!(lines[1], "| ----------------- | ------ |");
        assert_eq!(lines[2], "| settler_uniswapV3 | 123876 |");
        assert_eq!(lines[3], "| a                 | 5      |");
    }

    #[test]
    fn test_render_ignores_ansi_codes_in_width() {
        let styled = console::Style::new()
            .black()
            .on_red()
            .force_styling(true)
            .apply_to("25.00%")
            .to_string();
        let mut table = Table::new(["Diff"]);
        table.push_row([Cell::Styled(styled.clone())]);
        table.push_row([Cell::from("3.00%")]);

        let rendered = MarkdownRenderer.render(&table);
        // Both data cells occupy the same display width despite the escape codes.
        assert!(rendered.contains(&styled));
        for line in rendered.lines() {
            assert_eq!(measure_text_width(line), measure_text_width("| 25.00% |"));
        }
    }

    #[test]
    fn test_blank_row_renders_empty_cells() {
        let mut table = Table::new(["", "DEX", "Pair", "Gas"]);
        table.push_row([
            Cell::from("Settler"),
            Cell::from("Curve"),
            Cell::from("USDC/WETH"),
            Cell::from(173510u64),
        ]);
        table.push_blank_row();

        let rendered = MarkdownRenderer.render(&table);
        let last = rendered.lines().last().unwrap();
        assert!(last.chars().all(|c| c == '|' || c == ' '));
    }

    #[test]
    fn test_short_rows_padded_to_header_width() {
        let mut table = Table::new(["a", "b", "c"]);
        table.push_row([Cell::from("x")]);

        let rendered = MarkdownRenderer.render(&table);
        let last = rendered.lines().last().unwrap();
        assert_eq!(last.matches('|').count(), 4);
    }

    #[test]
    fn test_minimum_delimiter_width() {
        let table = Table::new(["x"]);
        let rendered = MarkdownRenderer.render(&table);
        assert!(rendered.contains("---"));
    }
}
