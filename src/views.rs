//! Aggregation views over a filtered set of records.
//!
//! Each `build_*` function reduces a [`FilteredView`] to the rows of one
//! chart, already shaped and ordered for a frontend to render as-is.
//! [`Charts::compute`] bundles all five.

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::Serialize;

use crate::filter::FilteredView;

/// How many areas the ranking chart keeps when no limit is configured.
pub const DEFAULT_TOP_N: usize = 10;

/// One dot of the time-series chart: a single record, unaggregated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastPoint {
    pub year: i32,
    pub category: String,
    pub value: f64,
    pub area: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryMean {
    pub category: String,
    pub mean: f64,
}

/// One distinct (model, MAE, RMSE) accuracy triple.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelPoint {
    pub model: String,
    pub mae: f64,
    pub rmse: f64,
}

/// One country type's slice of one year, with its share of that year's sum.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShareSlice {
    pub year: i32,
    pub country_type: String,
    pub total: f64,
    pub share: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaTotal {
    pub area: String,
    pub total: f64,
}

/// Every record as its own point, sorted by year ascending. The sort is
/// stable, so records of the same year keep their filtered order.
pub fn build_time_series(view: &FilteredView<'_>) -> Vec<ForecastPoint> {
    let mut points: Vec<ForecastPoint> = view
        .iter()
        .map(|record| ForecastPoint {
            year: record.year,
            category: record.category.clone(),
            value: record.value,
            area: record.area.clone(),
        })
        .collect();
    points.sort_by_key(|point| point.year);
    points
}

/// Mean forecast value per category, highest first. Categories with equal
/// means stay in the order they were first seen.
pub fn build_category_means(view: &FilteredView<'_>) -> Vec<CategoryMean> {
    let mut order: Vec<String> = Vec::new();
    let mut sums: HashMap<String, (f64, usize)> = HashMap::new();
    for record in view.iter() {
        let entry = sums.entry(record.category.clone()).or_insert_with(|| {
            order.push(record.category.clone());
            (0.0, 0)
        });
        entry.0 += record.value;
        entry.1 += 1;
    }

    let mut means: Vec<CategoryMean> = order
        .into_iter()
        .map(|category| {
            let (sum, count) = sums[&category];
            CategoryMean {
                mean: sum / count as f64,
                category,
            }
        })
        .collect();
    means.sort_by(|a, b| b.mean.partial_cmp(&a.mean).unwrap_or(std::cmp::Ordering::Equal));
    means
}

/// Distinct accuracy triples in first-encounter order. Equality is bit-exact
/// on the metrics, so a model appears once per distinct (MAE, RMSE) pair.
pub fn build_model_scatter(view: &FilteredView<'_>) -> Vec<ModelPoint> {
    let mut seen: HashSet<(String, u64, u64)> = HashSet::new();
    let mut points = Vec::new();
    for record in view.iter() {
        let key = (
            record.model.clone(),
            record.mae.to_bits(),
            record.rmse.to_bits(),
        );
        if seen.insert(key) {
            points.push(ModelPoint {
                model: record.model.clone(),
                mae: record.mae,
                rmse: record.rmse,
            });
        }
    }
    points
}

/// Sum per (year, country type), with each slice's share of its year's sum.
/// Ordered by year ascending, then country type ascending. A year whose sum
/// is zero reports a share of zero for every slice instead of dividing.
pub fn build_share_breakdown(view: &FilteredView<'_>) -> Vec<ShareSlice> {
    let mut totals: BTreeMap<(i32, String), f64> = BTreeMap::new();
    let mut year_totals: BTreeMap<i32, f64> = BTreeMap::new();
    for record in view.iter() {
        *totals
            .entry((record.year, record.country_type.clone()))
            .or_insert(0.0) += record.value;
        *year_totals.entry(record.year).or_insert(0.0) += record.value;
    }

    totals
        .into_iter()
        .map(|((year, country_type), total)| {
            let year_total = year_totals[&year];
            let share = if year_total == 0.0 {
                0.0
            } else {
                total / year_total
            };
            ShareSlice {
                year,
                country_type,
                total,
                share,
            }
        })
        .collect()
}

/// Areas ranked by summed forecast value, highest first, capped at `limit`.
/// Ties keep first-encounter order, so the cut between equal totals is
/// deterministic.
pub fn build_top_areas(view: &FilteredView<'_>, limit: usize) -> Vec<AreaTotal> {
    let mut order: Vec<String> = Vec::new();
    let mut sums: HashMap<String, f64> = HashMap::new();
    for record in view.iter() {
        let entry = sums.entry(record.area.clone()).or_insert_with(|| {
            order.push(record.area.clone());
            0.0
        });
        *entry += record.value;
    }

    let mut totals: Vec<AreaTotal> = order
        .into_iter()
        .map(|area| {
            let total = sums[&area];
            AreaTotal { area, total }
        })
        .collect();
    totals.sort_by(|a, b| b.total.partial_cmp(&a.total).unwrap_or(std::cmp::Ordering::Equal));
    totals.truncate(limit);
    totals
}

/// All five chart datasets for one filtered view.
#[derive(Debug, Clone, Serialize)]
pub struct Charts {
    pub time_series: Vec<ForecastPoint>,
    pub category_means: Vec<CategoryMean>,
    pub model_scatter: Vec<ModelPoint>,
    pub share_breakdown: Vec<ShareSlice>,
    pub top_areas: Vec<AreaTotal>,
}

impl Charts {
    pub fn compute(view: &FilteredView<'_>, top_n: usize) -> Self {
        Charts {
            time_series: build_time_series(view),
            category_means: build_category_means(view),
            model_scatter: build_model_scatter(view),
            share_breakdown: build_share_breakdown(view),
            top_areas: build_top_areas(view, top_n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{FilterCatalog, FilteredView};
    use crate::reshape::LongRecord;
    use std::collections::HashMap;

    fn record(area: &str, category: &str, year: i32, value: f64) -> LongRecord {
        LongRecord {
            area: area.to_string(),
            category: category.to_string(),
            model: "XGBoost".to_string(),
            mae: 0.4,
            rmse: 0.6,
            country_type: "Emerging".to_string(),
            extra: HashMap::new(),
            year,
            value,
        }
    }

    fn view_of(records: &[LongRecord]) -> FilteredView<'_> {
        FilteredView::compute(records, &FilterCatalog::from_records(records).full_selection())
    }

    #[test]
    fn test_time_series_sorts_by_year_stably() {
        let records = vec![
            record("China", "GDP Growth", 2025, 4.8),
            record("India", "GDP Growth", 2024, 6.2),
            record("China", "GDP Growth", 2024, 5.1),
        ];
        let points = build_time_series(&view_of(&records));

        let seen: Vec<(i32, &str)> = points.iter().map(|p| (p.year, p.area.as_str())).collect();
        assert_eq!(
            seen,
            vec![(2024, "India"), (2024, "China"), (2025, "China")]
        );
    }

    #[test]
    fn test_category_means_averages_per_category() {
        let records = vec![
            record("China", "GDP Growth", 2024, 10.0),
            record("India", "GDP Growth", 2024, 20.0),
            record("China", "Inflation", 2024, 3.0),
        ];
        let means = build_category_means(&view_of(&records));

        assert_eq!(means.len(), 2);
        assert_eq!(means[0].category, "GDP Growth");
        assert!((means[0].mean - 15.0).abs() < 1e-9);
        assert!((means[1].mean - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_category_means_ties_keep_encounter_order() {
        let records = vec![
            record("China", "A", 2024, 10.0),
            record("China", "B", 2024, 20.0),
            record("China", "C", 2024, 20.0),
        ];
        let means = build_category_means(&view_of(&records));

        let order: Vec<&str> = means.iter().map(|m| m.category.as_str()).collect();
        assert_eq!(order, vec!["B", "C", "A"]);
    }

    #[test]
    fn test_model_scatter_deduplicates_triples() {
        let base = record("China", "GDP Growth", 2024, 5.1);
        let records = vec![
            base.clone(),
            record("China", "GDP Growth", 2025, 4.8),
            LongRecord {
                model: "ARIMA".to_string(),
                ..base.clone()
            },
            LongRecord {
                mae: 0.9,
                ..base.clone()
            },
        ];
        let points = build_model_scatter(&view_of(&records));

        // Same model across years collapses; a new model or new metric pair
        // each earn a point.
        assert_eq!(points.len(), 3);
        assert_eq!(points[0].model, "XGBoost");
        assert_eq!(points[1].model, "ARIMA");
        assert!((points[2].mae - 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_share_breakdown_orders_and_normalizes() {
        let records = vec![
            LongRecord {
                country_type: "Emerging".to_string(),
                ..record("China", "GDP Growth", 2024, 30.0)
            },
            LongRecord {
                country_type: "Developed".to_string(),
                ..record("Germany", "GDP Growth", 2024, 10.0)
            },
            LongRecord {
                country_type: "Emerging".to_string(),
                ..record("China", "GDP Growth", 2025, 4.0)
            },
        ];
        let slices = build_share_breakdown(&view_of(&records));

        let keys: Vec<(i32, &str)> = slices
            .iter()
            .map(|s| (s.year, s.country_type.as_str()))
            .collect();
        assert_eq!(
            keys,
            vec![(2024, "Developed"), (2024, "Emerging"), (2025, "Emerging")]
        );
        assert!((slices[0].share - 0.25).abs() < 1e-9);
        assert!((slices[1].share - 0.75).abs() < 1e-9);
        assert!((slices[2].share - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_share_breakdown_zero_sum_year() {
        let records = vec![
            LongRecord {
                country_type: "Emerging".to_string(),
                ..record("China", "GDP Growth", 2024, 5.0)
            },
            LongRecord {
                country_type: "Developed".to_string(),
                ..record("Germany", "GDP Growth", 2024, -5.0)
            },
        ];
        let slices = build_share_breakdown(&view_of(&records));

        assert_eq!(slices.len(), 2);
        assert!(slices.iter().all(|s| s.share == 0.0));
        assert!((slices[0].total + 5.0).abs() < 1e-9);
        assert!((slices[1].total - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_top_areas_caps_at_limit_with_deterministic_ties() {
        let mut records = vec![
            record("a01", "GDP Growth", 2024, 5.0),
            record("a02", "GDP Growth", 2024, 3.0),
            record("a03", "GDP Growth", 2024, 3.0),
        ];
        for i in 4..=11 {
            records.push(record(&format!("a{i:02}"), "GDP Growth", 2024, 1.0));
        }
        let totals = build_top_areas(&view_of(&records), 10);

        assert_eq!(totals.len(), 10);
        assert_eq!(totals[0].area, "a01");
        assert_eq!(totals[1].area, "a02");
        assert_eq!(totals[2].area, "a03");
        // The last-encountered of the tied areas is the one cut off.
        assert!(totals.iter().all(|t| t.area != "a11"));
        assert_eq!(totals[9].area, "a10");
    }

    #[test]
    fn test_top_areas_sums_across_records() {
        let records = vec![
            record("China", "GDP Growth", 2024, 5.0),
            record("China", "Inflation", 2025, 2.0),
            record("India", "GDP Growth", 2024, 6.0),
        ];
        let totals = build_top_areas(&view_of(&records), DEFAULT_TOP_N);

        assert_eq!(totals[0].area, "China");
        assert!((totals[0].total - 7.0).abs() < 1e-9);
        assert_eq!(totals[1].area, "India");
    }

    #[test]
    fn test_charts_compute_bundles_all_views() {
        let records = vec![
            record("China", "GDP Growth", 2024, 5.1),
            record("India", "Inflation", 2025, 5.0),
        ];
        let charts = Charts::compute(&view_of(&records), 1);

        assert_eq!(charts.time_series.len(), 2);
        assert_eq!(charts.category_means.len(), 2);
        assert_eq!(charts.model_scatter.len(), 1);
        assert_eq!(charts.share_breakdown.len(), 2);
        assert_eq!(charts.top_areas.len(), 1);
    }
}
