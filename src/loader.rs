//! Spreadsheet loading.
//!
//! Reads one worksheet into a [`WideTable`] using `calamine`'s format
//! auto-detection, so `.xlsx`, `.xls`, and `.ods` sources all work. The first
//! used row is the header; everything below it is data.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};

use crate::error::DataError;
use crate::table::{Schema, WideTable};
use crate::value::CellValue;

/// Loads a worksheet from `path`.
///
/// With `sheet = None` the first worksheet is used, matching how the dataset
/// is usually exported. The table keeps the worksheet's name.
pub fn load_workbook(path: impl AsRef<Path>, sheet: Option<&str>) -> Result<WideTable, DataError> {
    let path = path.as_ref();
    let mut workbook = open_workbook_auto(path)?;

    let sheet_names = workbook.sheet_names().to_owned();
    let sheet_name = match sheet {
        Some(name) => {
            if !sheet_names.iter().any(|s| s == name) {
                return Err(DataError::SheetNotFound {
                    sheet: name.to_string(),
                });
            }
            name.to_string()
        }
        None => sheet_names
            .first()
            .cloned()
            .ok_or(DataError::Workbook(calamine::Error::Msg(
                "workbook has no sheets",
            )))?,
    };

    let range = workbook.worksheet_range(&sheet_name)?;

    let mut rows = range.rows();
    let header = rows.next().ok_or_else(|| DataError::EmptySheet {
        sheet: sheet_name.clone(),
    })?;

    let columns: Vec<String> = header.iter().map(header_label).collect();
    let schema = Schema::new(columns)?;

    let mut table = WideTable::new(sheet_name.clone(), schema);
    for row in rows {
        table.append_row(row.iter().map(convert_cell).collect())?;
    }

    log::info!(
        "loaded worksheet `{}` from {}: {} rows, {} columns",
        sheet_name,
        path.display(),
        table.len(),
        table.schema().len()
    );

    Ok(table)
}

fn header_label(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_string(),
        other => other.to_string().trim().to_string(),
    }
}

fn convert_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Null,
        Data::Bool(v) => CellValue::Bool(*v),
        Data::Int(v) => CellValue::Int(*v),
        Data::Float(v) => CellValue::Float(*v),
        Data::String(v) => CellValue::String(v.clone()),
        // Formula errors import as empty cells.
        Data::Error(_) => CellValue::Null,
        Data::DateTime(v) => CellValue::Float(v.as_f64()),
        Data::DateTimeIso(v) => CellValue::String(v.clone()),
        Data::DurationIso(v) => CellValue::String(v.clone()),
    }
}
