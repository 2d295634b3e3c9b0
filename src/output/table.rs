use std::fmt::Write;

use colored::Colorize;

use crate::core::models::ResultSet;
use crate::error::Result;

use super::Reporter;

const HEADERS: [&str; 4] = ["Name", "Message", "Success", "Severity"];

const COLUMN_GAP: &str = "  ";

/// Column-aligned table, one row per outcome
///
/// Cells are never wrapped or truncated; each column is as wide as its widest
/// cell. The header row is bold unless styling is disabled (and `colored`
/// decides whether the terminal gets escape codes at all).
#[derive(Debug, Clone, Copy)]
pub struct TableReporter {
    styled: bool,
}

impl TableReporter {
    /// A table with a bold header
    #[must_use]
    pub const fn new() -> Self {
        Self { styled: true }
    }

    /// A table without any escape codes
    #[must_use]
    pub const fn plain() -> Self {
        Self { styled: false }
    }
}

impl Default for TableReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for TableReporter {
    fn render(&self, results: &ResultSet) -> Result<String> {
        let rows: Vec<[String; 4]> = results
            .iter()
            .map(|o| {
                [
                    o.name.clone(),
                    o.message.clone(),
                    o.success.to_string(),
                    o.severity.to_string(),
                ]
            })
            .collect();

        let mut widths = HEADERS.map(str::len);
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut out = String::new();
        let header = format_row(&HEADERS, &widths);
        if self.styled {
            writeln!(out, "{}", header.bold())?;
        } else {
            writeln!(out, "{header}")?;
        }
        for row in &rows {
            writeln!(out, "{}", format_row(row, &widths))?;
        }

        Ok(out)
    }
}

fn format_row<S: AsRef<str>>(cells: &[S; 4], widths: &[usize; 4]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{:<width$}", cell.as_ref()))
        .collect();
    padded.join(COLUMN_GAP).trim_end().to_string()
}
