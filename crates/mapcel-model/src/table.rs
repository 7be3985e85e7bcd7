#![deny(unsafe_code)]

use serde::{Deserialize, Serialize};

/// Parsed tabular input before any semantic interpretation.
///
/// Rows are kept exactly as the parser produced them and may be ragged:
/// a row can be shorter or longer than `headers`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Returns true when every cell of `row` is empty or whitespace.
    pub fn is_blank_row(row: &[String]) -> bool {
        row.iter().all(|cell| cell.trim().is_empty())
    }

    /// Drops data rows whose cells are all blank. The header row is untouched.
    #[must_use]
    pub fn strip_blank_rows(mut self) -> Self {
        self.rows.retain(|row| !Self::is_blank_row(row));
        self
    }

    /// Position of the first header equal to `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .map(String::as_str)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
