//! Error types for dataset loading and reshaping.
//!
//! Everything here is startup-fatal: the dashboard refuses to serve a dataset
//! it could not load completely. An empty filter result is not an error (see
//! [`crate::dashboard::Frame`]).

use thiserror::Error;

/// Errors produced while loading a workbook or pivoting it to long form.
#[derive(Debug, Error)]
pub enum DataError {
    /// The workbook could not be opened or read.
    #[error("failed to read workbook: {0}")]
    Workbook(#[from] calamine::Error),

    /// The requested worksheet does not exist in the workbook.
    #[error("worksheet `{sheet}` not found")]
    SheetNotFound { sheet: String },

    /// The worksheet has no header row.
    #[error("worksheet `{sheet}` is empty")]
    EmptySheet { sheet: String },

    /// Two header cells carry the same column name.
    #[error("duplicate column `{column}` in header")]
    DuplicateColumn { column: String },

    /// A row does not line up with the header.
    #[error("row {row} has {found} cells, expected {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// One of the required dataset columns is absent.
    #[error("required column `{column}` is missing")]
    MissingColumn { column: String },

    /// No column name starts with the forecast-year prefix.
    #[error("no forecast columns: no header starts with `{prefix}`")]
    NoYearColumns { prefix: String },

    /// A column name matches the year prefix but its suffix is not an integer.
    #[error("year column `{column}` has a non-numeric suffix")]
    MalformedYearColumn { column: String },

    /// A cell does not coerce to the type its column requires.
    #[error("column `{column}` row {row}: expected {expected}, found {found}")]
    CellType {
        column: String,
        row: usize,
        expected: &'static str,
        found: &'static str,
    },
}
