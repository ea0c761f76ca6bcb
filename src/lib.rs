//! ForecastBoard - Forecast Results Dashboard Core
//!
//! Loads a forecast spreadsheet, reshapes its per-year columns into long
//! records, filters them along area, category and year, and aggregates the
//! result into chart-ready datasets. An optional HTTP server exposes the
//! same pipeline to frontend clients.

pub mod error;
pub mod value;
pub mod table;
pub mod loader;
pub mod reshape;
pub mod filter;
pub mod views;
pub mod dashboard;

pub use error::DataError;
pub use value::CellValue;
pub use table::{Schema, WideTable};
pub use loader::load_workbook;
pub use reshape::{long_columns, reshape, LongRecord, REQUIRED_COLUMNS, YEAR_PREFIX};
pub use filter::{FilterCatalog, FilterSelection, FilteredView};
pub use views::{
    build_category_means, build_model_scatter, build_share_breakdown, build_time_series,
    build_top_areas, AreaTotal, CategoryMean, Charts, ForecastPoint, ModelPoint, ShareSlice,
    DEFAULT_TOP_N,
};
pub use dashboard::{Dashboard, DashboardConfig, Frame, NO_DATA_MESSAGE};

// HTTP server modules - only when server feature is enabled
#[cfg(feature = "server")]
pub mod messages;
#[cfg(feature = "server")]
pub mod server;
