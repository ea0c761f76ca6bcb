//! Response payloads for the HTTP API.

use serde::Serialize;

use crate::dashboard::{Dashboard, Frame, NO_DATA_MESSAGE};
use crate::views::Charts;

/// Everything a frontend needs to draw its filter widgets.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogResponse {
    pub areas: Vec<String>,
    pub categories: Vec<String>,
    pub years: Vec<i32>,
    pub columns: Vec<String>,
    pub row_count: usize,
}

impl CatalogResponse {
    pub fn new(dashboard: &Dashboard) -> Self {
        let catalog = dashboard.catalog();
        CatalogResponse {
            areas: catalog.areas.clone(),
            categories: catalog.categories.clone(),
            years: catalog.years.clone(),
            columns: dashboard.columns().to_vec(),
            row_count: dashboard.row_count(),
        }
    }
}

/// Display titles for the five charts, rendered server-side so the ranking
/// title reflects the configured limit.
#[derive(Debug, Clone, Serialize)]
pub struct ChartTitles {
    pub time_series: String,
    pub category_means: String,
    pub model_scatter: String,
    pub share_breakdown: String,
    pub top_areas: String,
}

impl ChartTitles {
    pub fn for_top_n(top_n: usize) -> Self {
        ChartTitles {
            time_series: "Forecast Value Over Years by Category".to_string(),
            category_means: "Average Forecast Value per Category".to_string(),
            model_scatter: "Model Performance: MAE vs RMSE".to_string(),
            share_breakdown: "Normalized Forecast Value by Country Type Over Years".to_string(),
            top_areas: format!("Top {top_n} Countries by Total Forecast Value"),
        }
    }
}

/// Reply to a frame request.
#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum FrameReply {
    /// The selection matched nothing; show `message` instead of charts.
    NoData { message: String },

    /// Chart data plus titles for one render pass.
    Ready {
        row_count: usize,
        column_count: usize,
        titles: ChartTitles,
        charts: Charts,
    },
}

impl FrameReply {
    pub fn from_frame(frame: Frame, top_n: usize) -> Self {
        match frame {
            Frame::NoData => FrameReply::NoData {
                message: NO_DATA_MESSAGE.to_string(),
            },
            Frame::Ready {
                row_count,
                column_count,
                charts,
            } => FrameReply::Ready {
                row_count,
                column_count,
                titles: ChartTitles::for_top_n(top_n),
                charts,
            },
        }
    }
}
