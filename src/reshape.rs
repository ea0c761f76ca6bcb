//! Wide-to-long reshape.
//!
//! The source table has one row per entity and one column per forecast year
//! (`pred_2024`, `pred_2025`, ...). [`reshape`] pivots it into one record per
//! entity-year, deriving the numeric year from the column name. A wide row
//! with *k* year columns always yields exactly *k* records; nothing is
//! dropped or interpolated.

use std::collections::HashMap;

use crate::error::DataError;
use crate::table::{Schema, WideTable};
use crate::value::CellValue;

/// Default prefix marking forecast-year columns.
pub const YEAR_PREFIX: &str = "pred_";

/// Columns every dataset must carry, besides the year columns.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "Area",
    "Category",
    "Model",
    "MAE",
    "RMSE",
    "Country_Type",
];

/// One entity-year observation of the long table.
///
/// The six required attributes are typed; any further identifier columns of
/// the source ride along untouched in `extra`.
#[derive(Debug, Clone, PartialEq)]
pub struct LongRecord {
    pub area: String,
    pub category: String,
    pub model: String,
    pub mae: f64,
    pub rmse: f64,
    pub country_type: String,
    pub extra: HashMap<String, CellValue>,
    /// Parsed from the year column name, e.g. `pred_2025` -> 2025.
    pub year: i32,
    /// The forecast value that sat in that year column.
    pub value: f64,
}

/// Indices of the required columns, resolved once per reshape.
struct ColumnPlan {
    area: usize,
    category: usize,
    model: usize,
    mae: usize,
    rmse: usize,
    country_type: usize,
}

impl ColumnPlan {
    fn locate(schema: &Schema) -> Result<Self, DataError> {
        let find = |name: &str| {
            schema
                .get_column_index(name)
                .ok_or_else(|| DataError::MissingColumn {
                    column: name.to_string(),
                })
        };

        Ok(ColumnPlan {
            area: find("Area")?,
            category: find("Category")?,
            model: find("Model")?,
            mae: find("MAE")?,
            rmse: find("RMSE")?,
            country_type: find("Country_Type")?,
        })
    }

    fn covers(&self, idx: usize) -> bool {
        idx == self.area
            || idx == self.category
            || idx == self.model
            || idx == self.mae
            || idx == self.rmse
            || idx == self.country_type
    }
}

/// Pivots a wide table into long records.
///
/// A column belongs to a forecast year iff its name starts with
/// `year_prefix`; every other column is an identifier and is copied into each
/// derived record. Output order is row-major, then year-column header order.
///
/// Any prefix-matching column whose suffix does not parse as an integer is
/// fatal: a silently skipped column would change every aggregation downstream.
///
/// # Examples
///
/// ```
/// use forecastboard::{reshape, CellValue, Schema, WideTable, YEAR_PREFIX};
///
/// let schema = Schema::new(vec![
///     "Area".to_string(), "Category".to_string(), "Model".to_string(),
///     "MAE".to_string(), "RMSE".to_string(), "Country_Type".to_string(),
///     "pred_2024".to_string(), "pred_2025".to_string(),
/// ]).unwrap();
/// let mut table = WideTable::new("forecasts".to_string(), schema);
/// table.append_row(vec![
///     CellValue::String("China".to_string()),
///     CellValue::String("GDP Growth".to_string()),
///     CellValue::String("XGBoost".to_string()),
///     CellValue::Float(0.4),
///     CellValue::Float(0.6),
///     CellValue::String("Emerging".to_string()),
///     CellValue::Float(5.1),
///     CellValue::Float(4.8),
/// ]).unwrap();
///
/// let records = reshape(&table, YEAR_PREFIX).unwrap();
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[0].year, 2024);
/// assert_eq!(records[1].value, 4.8);
/// ```
pub fn reshape(table: &WideTable, year_prefix: &str) -> Result<Vec<LongRecord>, DataError> {
    let schema = table.schema();

    let mut year_cols: Vec<(usize, i32)> = Vec::new();
    for (idx, name) in schema.get_column_names().iter().enumerate() {
        if let Some(suffix) = name.strip_prefix(year_prefix) {
            let year = suffix
                .parse::<i32>()
                .map_err(|_| DataError::MalformedYearColumn {
                    column: name.clone(),
                })?;
            year_cols.push((idx, year));
        }
    }
    if year_cols.is_empty() {
        return Err(DataError::NoYearColumns {
            prefix: year_prefix.to_string(),
        });
    }

    let plan = ColumnPlan::locate(schema)?;

    let extra_cols: Vec<(usize, String)> = schema
        .get_column_names()
        .iter()
        .enumerate()
        .filter(|(idx, name)| !name.starts_with(year_prefix) && !plan.covers(*idx))
        .map(|(idx, name)| (idx, name.clone()))
        .collect();

    let mut records = Vec::with_capacity(table.len() * year_cols.len());
    for (row_idx, row) in table.rows().iter().enumerate() {
        let area = text_cell(&row[plan.area], "Area", row_idx)?;
        let category = text_cell(&row[plan.category], "Category", row_idx)?;
        let model = text_cell(&row[plan.model], "Model", row_idx)?;
        let mae = numeric_cell(&row[plan.mae], "MAE", row_idx)?;
        let rmse = numeric_cell(&row[plan.rmse], "RMSE", row_idx)?;
        let country_type = text_cell(&row[plan.country_type], "Country_Type", row_idx)?;

        let extra: HashMap<String, CellValue> = extra_cols
            .iter()
            .map(|(idx, name)| (name.clone(), row[*idx].clone()))
            .collect();

        for (col_idx, year) in &year_cols {
            let column = &schema.get_column_names()[*col_idx];
            let value = numeric_cell(&row[*col_idx], column, row_idx)?;

            records.push(LongRecord {
                area: area.clone(),
                category: category.clone(),
                model: model.clone(),
                mae,
                rmse,
                country_type: country_type.clone(),
                extra: extra.clone(),
                year: *year,
                value,
            });
        }
    }

    log::debug!(
        "reshaped {} wide rows into {} records across {} years",
        table.len(),
        records.len(),
        year_cols.len()
    );

    Ok(records)
}

/// Column names of the long table, in presentation order: identifiers as they
/// appear in the source header, then the two derived columns.
pub fn long_columns(schema: &Schema, year_prefix: &str) -> Vec<String> {
    let mut columns: Vec<String> = schema
        .get_column_names()
        .iter()
        .filter(|name| !name.starts_with(year_prefix))
        .cloned()
        .collect();
    columns.push("Year".to_string());
    columns.push("Forecast Value".to_string());
    columns
}

fn text_cell(cell: &CellValue, column: &str, row: usize) -> Result<String, DataError> {
    cell.to_text().ok_or_else(|| DataError::CellType {
        column: column.to_string(),
        row,
        expected: "text",
        found: cell.kind(),
    })
}

fn numeric_cell(cell: &CellValue, column: &str, row: usize) -> Result<f64, DataError> {
    cell.as_f64().ok_or_else(|| DataError::CellType {
        column: column.to_string(),
        row,
        expected: "a number",
        found: cell.kind(),
    })
}
