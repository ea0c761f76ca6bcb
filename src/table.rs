//! The wide table: an ordered header plus untyped rows.
//!
//! This is the in-memory form of the source worksheet, one row per entity
//! with one column per forecast year. It stays immutable after loading; all
//! typed access happens in the reshape step.

use crate::error::DataError;
use crate::value::CellValue;

/// Ordered, unique column names of a wide table.
///
/// # Examples
///
/// ```
/// use forecastboard::Schema;
///
/// let schema = Schema::new(vec![
///     "Area".to_string(),
///     "pred_2024".to_string(),
///     "pred_2025".to_string(),
/// ]).unwrap();
///
/// assert_eq!(schema.len(), 3);
/// assert_eq!(schema.get_column_index("pred_2024"), Some(1));
/// ```
#[derive(Debug, Clone)]
pub struct Schema {
    columns: Vec<String>,
}

impl Schema {
    /// Creates a schema from header names, rejecting duplicates.
    pub fn new(columns: Vec<String>) -> Result<Self, DataError> {
        for (i, name) in columns.iter().enumerate() {
            if columns[..i].contains(name) {
                return Err(DataError::DuplicateColumn {
                    column: name.clone(),
                });
            }
        }
        Ok(Schema { columns })
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Column names in header order.
    pub fn get_column_names(&self) -> &[String] {
        &self.columns
    }

    /// Returns the index of a column by name, or None if not found.
    pub fn get_column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|n| n == name)
    }
}

/// A loaded worksheet: schema plus rows of cells.
///
/// Rows are stored in worksheet order and every row has exactly one cell per
/// schema column.
///
/// # Examples
///
/// ```
/// use forecastboard::{CellValue, Schema, WideTable};
///
/// let schema = Schema::new(vec!["Area".to_string(), "pred_2024".to_string()]).unwrap();
/// let mut table = WideTable::new("forecasts".to_string(), schema);
///
/// table.append_row(vec![
///     CellValue::String("China".to_string()),
///     CellValue::Float(5.1),
/// ]).unwrap();
///
/// assert_eq!(table.len(), 1);
/// assert_eq!(table.get_value(0, "Area").and_then(|c| c.as_str()), Some("China"));
/// ```
pub struct WideTable {
    name: String,
    schema: Schema,
    rows: Vec<Vec<CellValue>>,
}

impl WideTable {
    pub fn new(name: String, schema: Schema) -> Self {
        WideTable {
            name,
            schema,
            rows: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Number of data rows (the header is not a row).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All rows in worksheet order.
    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    /// Appends a row, which must line up with the schema.
    pub fn append_row(&mut self, row: Vec<CellValue>) -> Result<(), DataError> {
        if row.len() != self.schema.len() {
            return Err(DataError::RowWidth {
                row: self.rows.len(),
                expected: self.schema.len(),
                found: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Looks up a single cell by row index and column name.
    pub fn get_value(&self, row: usize, column: &str) -> Option<&CellValue> {
        let col_idx = self.schema.get_column_index(column)?;
        self.rows.get(row).map(|r| &r[col_idx])
    }
}

impl std::fmt::Debug for WideTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "WideTable {{ name: '{}', columns: {}, rows: {} }}",
            self.name,
            self.schema.len(),
            self.rows.len()
        )
    }
}
