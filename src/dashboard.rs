//! The dashboard core: loaded data plus the per-request frame computation.
//!
//! A [`Dashboard`] is built once from a workbook (or an in-memory table) and
//! then serves any number of [`frame`](Dashboard::frame) calls, each taking a
//! [`FilterSelection`] and returning the chart payload for that selection.

use std::path::PathBuf;

use serde::Serialize;

use crate::error::DataError;
use crate::filter::{FilterCatalog, FilterSelection, FilteredView};
use crate::loader::load_workbook;
use crate::reshape::{long_columns, reshape, LongRecord, YEAR_PREFIX};
use crate::table::WideTable;
use crate::views::{Charts, DEFAULT_TOP_N};

/// Shown in place of charts when the selection matches no records.
pub const NO_DATA_MESSAGE: &str =
    "No data available for the selected filters. Please adjust your selections.";

/// Where and how to load the forecast workbook.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub path: PathBuf,
    /// Worksheet to read; `None` means the first sheet.
    pub sheet: Option<String>,
    pub year_prefix: String,
    pub top_n: usize,
}

impl DashboardConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        DashboardConfig {
            path: path.into(),
            sheet: None,
            year_prefix: YEAR_PREFIX.to_string(),
            top_n: DEFAULT_TOP_N,
        }
    }
}

/// The payload for one render pass.
///
/// `NoData` is returned without computing any chart, so an empty selection
/// costs one filter scan and nothing more.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum Frame {
    NoData,
    Ready {
        row_count: usize,
        column_count: usize,
        charts: Charts,
    },
}

/// Loaded, reshaped forecast data ready to answer filter requests.
///
/// # Examples
///
/// ```
/// use forecastboard::{CellValue, Dashboard, Frame, Schema, WideTable, DEFAULT_TOP_N, YEAR_PREFIX};
///
/// let schema = Schema::new(vec![
///     "Area".to_string(), "Category".to_string(), "Model".to_string(),
///     "MAE".to_string(), "RMSE".to_string(), "Country_Type".to_string(),
///     "pred_2024".to_string(),
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
/// ]).unwrap();
///
/// let dashboard = Dashboard::from_table(&table, YEAR_PREFIX, DEFAULT_TOP_N).unwrap();
/// match dashboard.frame(&dashboard.default_selection()) {
///     Frame::Ready { row_count, .. } => assert_eq!(row_count, 1),
///     Frame::NoData => unreachable!(),
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Dashboard {
    records: Vec<LongRecord>,
    catalog: FilterCatalog,
    columns: Vec<String>,
    top_n: usize,
}

impl Dashboard {
    /// Loads the workbook named by `config` and reshapes it.
    pub fn open(config: &DashboardConfig) -> Result<Dashboard, DataError> {
        let table = load_workbook(&config.path, config.sheet.as_deref())?;
        Dashboard::from_table(&table, &config.year_prefix, config.top_n)
    }

    /// Builds a dashboard from an already loaded wide table.
    pub fn from_table(
        table: &WideTable,
        year_prefix: &str,
        top_n: usize,
    ) -> Result<Dashboard, DataError> {
        let records = reshape(table, year_prefix)?;
        let columns = long_columns(table.schema(), year_prefix);
        let catalog = FilterCatalog::from_records(&records);
        log::info!(
            "dashboard ready: {} records, {} areas, {} categories, {} years",
            records.len(),
            catalog.areas.len(),
            catalog.categories.len(),
            catalog.years.len()
        );

        Ok(Dashboard {
            records,
            catalog,
            columns,
            top_n,
        })
    }

    pub fn records(&self) -> &[LongRecord] {
        &self.records
    }

    pub fn catalog(&self) -> &FilterCatalog {
        &self.catalog
    }

    /// Column names of the long table, for display alongside the row count.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of long records, i.e. entity-years.
    pub fn row_count(&self) -> usize {
        self.records.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn top_n(&self) -> usize {
        self.top_n
    }

    /// The selection a fresh session starts with: everything checked.
    pub fn default_selection(&self) -> FilterSelection {
        self.catalog.full_selection()
    }

    pub fn filter(&self, selection: &FilterSelection) -> FilteredView<'_> {
        FilteredView::compute(&self.records, selection)
    }

    /// Computes the frame for one selection.
    pub fn frame(&self, selection: &FilterSelection) -> Frame {
        let view = self.filter(selection);
        if view.is_empty() {
            return Frame::NoData;
        }

        Frame::Ready {
            row_count: view.len(),
            column_count: self.columns.len(),
            charts: Charts::compute(&view, self.top_n),
        }
    }
}
