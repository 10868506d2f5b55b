//! Fixed-width grid tables for terminal output
//!
//! Produces the bordered layout used by every report table:
//!
//! ```text
//! +-------+--------+
//! | File  | Glides |
//! +=======+========+
//! | a.igc |      3 |
//! +-------+--------+
//! ```
//!
//! Columns whose cells are all numbers are right-aligned, the rest are
//! left-aligned. Indentation is left to the caller; see [`indent`].

use comfy_table::presets::ASCII_FULL;
use comfy_table::{CellAlignment, ContentArrangement, Table, TableComponent};

fn is_numeric(cell: &str) -> bool {
    let cell = cell.trim();
    !cell.is_empty() && cell.parse::<f64>().is_ok() && !cell.chars().any(char::is_alphabetic)
}

/// True when the column has at least one non-empty cell and all of them are numbers
fn is_numeric_column(rows: &[Vec<&str>], column: usize) -> bool {
    let mut cells = rows
        .iter()
        .map(|row| row[column])
        .filter(|cell| !cell.is_empty())
        .peekable();
    cells.peek().is_some() && cells.all(is_numeric)
}

/// Grid table with a `=` rule under the header and a `-` rule after every row
pub fn render_grid<S: AsRef<str>>(headers: &[&str], rows: &[Vec<S>]) -> String {
    let columns = headers.len();
    let rows: Vec<Vec<&str>> = rows
        .iter()
        .map(|row| {
            (0..columns)
                .map(|i| row.get(i).map(|cell| cell.as_ref()).unwrap_or(""))
                .collect()
        })
        .collect();

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Disabled)
        .set_style(TableComponent::MiddleHeaderIntersections, '+')
        .set_style(TableComponent::LeftBorderIntersections, '+')
        .set_style(TableComponent::RightBorderIntersections, '+')
        .set_header(headers.iter().copied());

    for row in &rows {
        table.add_row(row.iter().copied());
    }

    for i in 0..columns {
        if is_numeric_column(&rows, i) {
            if let Some(column) = table.column_mut(i) {
                column.set_cell_alignment(CellAlignment::Right);
            }
        }
    }

    table.to_string()
}

pub fn indent(text: &str, prefix: &str) -> String {
    text.lines()
        .map(|line| format!("{}{}", prefix, line))
        .collect::<Vec<_>>()
        .join("\n")
}
