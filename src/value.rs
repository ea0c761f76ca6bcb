//! Dynamically typed cell values.
//!
//! A loaded worksheet is untyped: every cell is a [`CellValue`] and the
//! reshape step decides what each column must coerce to. The variants mirror
//! what spreadsheet readers actually hand back, so a numeric column may hold
//! a mix of `Int` and `Float` cells.

/// A single cell of the wide table.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Int(i64),
    Float(f64),
    String(String),
    Bool(bool),
    Null,
}

impl CellValue {
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Numeric reading of the cell. Integers widen to `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Int(v) => Some(*v as f64),
            CellValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            CellValue::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CellValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Textual reading of the cell, for label columns.
    ///
    /// Scalar cells render the way a spreadsheet displays them, so a numeric
    /// region code still works as a filter label. `Null` has no text.
    pub fn to_text(&self) -> Option<String> {
        match self {
            CellValue::Int(v) => Some(v.to_string()),
            CellValue::Float(v) => Some(v.to_string()),
            CellValue::String(v) => Some(v.clone()),
            CellValue::Bool(v) => Some(v.to_string()),
            CellValue::Null => None,
        }
    }

    /// Human-readable kind of the cell, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            CellValue::Int(_) => "an integer",
            CellValue::Float(_) => "a number",
            CellValue::String(_) => "text",
            CellValue::Bool(_) => "a boolean",
            CellValue::Null => "null",
        }
    }
}
