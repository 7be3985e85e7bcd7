use serde::{Deserialize, Serialize};

/// Guidance shown when no latitude/longitude header could be detected.
pub const UNDETECTED_COLUMNS_MESSAGE: &str = "Could not auto-detect latitude/longitude columns. \
     Expected column names like: lat, latitude, lng, lon, long, longitude";

/// A content problem found in an uploaded table.
///
/// Validation errors are data attached to a dataset, never raised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// 1-based display row: the header is row 1, the first data row is row 2.
    /// Zero for table-level problems.
    pub row: usize,
    /// Header of the offending column (empty for table-level problems).
    pub column: String,
    /// Raw cell content, exactly as parsed. `None` when the cell is missing.
    pub value: Option<String>,
    pub message: String,
}

impl ValidationError {
    /// Builds an error for the data row at `index` (0-based, header excluded).
    pub fn for_cell(
        index: usize,
        column: impl Into<String>,
        value: Option<&str>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            row: display_row(index),
            column: column.into(),
            value: value.map(str::to_string),
            message: message.into(),
        }
    }

    pub fn undetected_columns() -> Self {
        Self {
            row: 0,
            column: String::new(),
            value: None,
            message: UNDETECTED_COLUMNS_MESSAGE.to_string(),
        }
    }

    pub fn is_table_level(&self) -> bool {
        self.row == 0
    }
}

/// Converts a 0-based data row index to the row number a spreadsheet shows.
pub fn display_row(index: usize) -> usize {
    index + 2
}
