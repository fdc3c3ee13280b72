// model = "claude-opus-4-5"
// created = "2026-10-16"
// modified = "2026-10-16"
// driver = "Isaac Clayton"

//! Fixed-width text tables.
//!
//! Every column is `width` characters wide followed by one space. Values
//! longer than their column are cut, trailing whitespace is trimmed from
//! every line, and the header plus a `-` rule is emitted in front of the
//! first row only.
//!
//! ```
//! use tableprint::TablePrinter;
//!
//! let mut table = TablePrinter::new(["Name", "Value"]);
//! table.resize_column("Name", 6).unwrap();
//! assert_eq!(table.render_row(&["ab", "1"]), "Name   Value\n------ -----\nab     1\n");
//! assert_eq!(table.render_row(&["cd", "2"]), "cd     2\n");
//! ```

use std::fmt::Display;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("can't find a column: {0}")]
    UnknownColumn(String),
}

#[derive(Debug, Clone, Default)]
pub struct TablePrinter {
    columns: Vec<String>,
    widths: Vec<usize>,
    printed_header: bool,
}

impl TablePrinter {
    /// Table with one column per name, each as wide as its name.
    pub fn new<I, N>(columns: I) -> TablePrinter
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        let mut table = TablePrinter::default();
        for name in columns {
            table.add_column(name, 0);
        }
        return table;
    }

    /// Append a column. A width of 0 means the length of the name.
    pub fn add_column(&mut self, name: impl Into<String>, width: usize) {
        let name = name.into();
        let width = if width == 0 { name.chars().count() } else { width };
        self.columns.push(name);
        self.widths.push(width);
    }

    /// Widen a column. Never shrinks it.
    pub fn resize_column(&mut self, name: &str, width: usize) -> Result<(), TableError> {
        let i = self
            .columns
            .iter()
            .position(|column| column == name)
            .ok_or_else(|| TableError::UnknownColumn(name.to_string()))?;
        self.widths[i] = self.widths[i].max(width);
        return Ok(());
    }

    pub fn columns(&self) -> &[String] {
        return &self.columns;
    }

    pub fn widths(&self) -> &[usize] {
        return &self.widths;
    }

    /// Render one row, preceded by the header on the first call.
    ///
    /// Missing values render as empty cells; extra values are ignored.
    pub fn render_row<V: Display>(&mut self, values: &[V]) -> String {
        let mut out = String::new();
        if !self.printed_header {
            out.push_str(&self.line(|i| self.columns[i].clone()));
            out.push_str(&self.line(|i| "-".repeat(self.widths[i])));
            self.printed_header = true;
        }
        out.push_str(&self.line(|i| values.get(i).map(|v| v.to_string()).unwrap_or_default()));
        return out;
    }

    fn line(&self, cell: impl Fn(usize) -> String) -> String {
        let mut line = String::new();
        for (i, &width) in self.widths.iter().enumerate() {
            line.push_str(&pad(&cell(i), width));
        }
        let mut line = line.trim_end().to_string();
        line.push('\n');
        return line;
    }
}

/// Cut `value` to `width` characters and pad it to `width + 1`.
fn pad(value: &str, width: usize) -> String {
    let mut cell: String = value.chars().take(width).collect();
    let len = cell.chars().count();
    cell.extend(std::iter::repeat_n(' ', width + 1 - len));
    return cell;
}
