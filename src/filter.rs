//! Filtering of long records along the three dashboard dimensions.
//!
//! A [`FilterSelection`] names the areas, categories and years the caller
//! wants to see; a [`FilteredView`] is the read-only result, holding a
//! mapping from view indices to parent indices instead of copied rows.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::reshape::LongRecord;

/// The chosen values per dimension.
///
/// A record passes only if every dimension contains its value, so an empty
/// set matches nothing: deselecting everything yields an empty view rather
/// than an unfiltered one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    #[serde(default)]
    pub areas: BTreeSet<String>,
    #[serde(default)]
    pub categories: BTreeSet<String>,
    #[serde(default)]
    pub years: BTreeSet<i32>,
}

impl FilterSelection {
    pub fn matches(&self, record: &LongRecord) -> bool {
        self.areas.contains(&record.area)
            && self.categories.contains(&record.category)
            && self.years.contains(&record.year)
    }
}

/// The distinct values each dimension takes in the loaded data, sorted
/// ascending. This is what a frontend renders as its filter widgets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterCatalog {
    pub areas: Vec<String>,
    pub categories: Vec<String>,
    pub years: Vec<i32>,
}

impl FilterCatalog {
    pub fn from_records(records: &[LongRecord]) -> Self {
        let mut areas = BTreeSet::new();
        let mut categories = BTreeSet::new();
        let mut years = BTreeSet::new();
        for record in records {
            areas.insert(record.area.clone());
            categories.insert(record.category.clone());
            years.insert(record.year);
        }

        FilterCatalog {
            areas: areas.into_iter().collect(),
            categories: categories.into_iter().collect(),
            years: years.into_iter().collect(),
        }
    }

    /// The selection that keeps every record, mirroring widgets that start
    /// with all options checked.
    pub fn full_selection(&self) -> FilterSelection {
        FilterSelection {
            areas: self.areas.iter().cloned().collect(),
            categories: self.categories.iter().cloned().collect(),
            years: self.years.iter().copied().collect(),
        }
    }

    /// Drops selection values the catalog does not know, so stale or
    /// hostile input degrades to a smaller selection instead of an error.
    pub fn intersect(&self, selection: &FilterSelection) -> FilterSelection {
        FilterSelection {
            areas: selection
                .areas
                .iter()
                .filter(|area| self.areas.binary_search(area).is_ok())
                .cloned()
                .collect(),
            categories: selection
                .categories
                .iter()
                .filter(|category| self.categories.binary_search(category).is_ok())
                .cloned()
                .collect(),
            years: selection
                .years
                .iter()
                .filter(|year| self.years.binary_search(*year).is_ok())
                .copied()
                .collect(),
        }
    }
}

/// A filtered, read-only window over the long records.
///
/// Maintains a mapping from view indices to parent indices; records are
/// borrowed from the parent slice, never copied. Parent order is preserved.
#[derive(Debug)]
pub struct FilteredView<'a> {
    records: &'a [LongRecord],
    view_to_parent: Vec<usize>,
}

impl<'a> FilteredView<'a> {
    pub fn compute(records: &'a [LongRecord], selection: &FilterSelection) -> Self {
        let view_to_parent = records
            .iter()
            .enumerate()
            .filter(|(_, record)| selection.matches(record))
            .map(|(index, _)| index)
            .collect();

        FilteredView {
            records,
            view_to_parent,
        }
    }

    pub fn len(&self) -> usize {
        self.view_to_parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.view_to_parent.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'a LongRecord> {
        self.view_to_parent
            .get(index)
            .map(|&parent| &self.records[parent])
    }

    /// The index the record at `index` has in the parent slice.
    pub fn parent_index(&self, index: usize) -> Option<usize> {
        self.view_to_parent.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a LongRecord> + '_ {
        self.view_to_parent
            .iter()
            .map(move |&parent| &self.records[parent])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
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

    fn sample_records() -> Vec<LongRecord> {
        vec![
            record("China", "GDP Growth", 2024, 5.1),
            record("China", "GDP Growth", 2025, 4.8),
            record("China", "Inflation", 2024, 2.1),
            record("India", "GDP Growth", 2024, 6.2),
            record("India", "Inflation", 2025, 5.0),
        ]
    }

    fn selection(areas: &[&str], categories: &[&str], years: &[i32]) -> FilterSelection {
        FilterSelection {
            areas: areas.iter().map(|a| a.to_string()).collect(),
            categories: categories.iter().map(|c| c.to_string()).collect(),
            years: years.iter().copied().collect(),
        }
    }

    #[test]
    fn test_selection_is_a_conjunction() {
        let records = sample_records();
        let view = FilteredView::compute(
            &records,
            &selection(&["China"], &["GDP Growth"], &[2024, 2025]),
        );

        assert_eq!(view.len(), 2);
        assert!(view.iter().all(|r| r.area == "China" && r.category == "GDP Growth"));
    }

    #[test]
    fn test_empty_dimension_matches_nothing() {
        let records = sample_records();
        let view = FilteredView::compute(
            &records,
            &selection(&["China", "India"], &["GDP Growth", "Inflation"], &[]),
        );

        assert!(view.is_empty());
        assert_eq!(view.len(), 0);
    }

    #[test]
    fn test_view_preserves_parent_order() {
        let records = sample_records();
        let view = FilteredView::compute(
            &records,
            &selection(&["China", "India"], &["GDP Growth"], &[2024]),
        );

        let areas: Vec<&str> = view.iter().map(|r| r.area.as_str()).collect();
        assert_eq!(areas, vec!["China", "India"]);
        assert_eq!(view.parent_index(0), Some(0));
        assert_eq!(view.parent_index(1), Some(3));
        assert_eq!(view.parent_index(2), None);
    }

    #[test]
    fn test_refilter_is_idempotent() {
        let records = sample_records();
        let sel = selection(&["China"], &["GDP Growth", "Inflation"], &[2024]);

        let once: Vec<LongRecord> = FilteredView::compute(&records, &sel).iter().cloned().collect();
        let twice = FilteredView::compute(&once, &sel);

        assert_eq!(twice.len(), once.len());
    }

    #[test]
    fn test_get_out_of_range() {
        let records = sample_records();
        let view = FilteredView::compute(&records, &selection(&["China"], &["Inflation"], &[2024]));

        assert_eq!(view.len(), 1);
        assert_eq!(view.get(0).map(|r| r.value), Some(2.1));
        assert!(view.get(1).is_none());
    }

    #[test]
    fn test_catalog_is_sorted_and_deduplicated() {
        let records = sample_records();
        let catalog = FilterCatalog::from_records(&records);

        assert_eq!(catalog.areas, vec!["China", "India"]);
        assert_eq!(catalog.categories, vec!["GDP Growth", "Inflation"]);
        assert_eq!(catalog.years, vec![2024, 2025]);
    }

    #[test]
    fn test_full_selection_keeps_everything() {
        let records = sample_records();
        let catalog = FilterCatalog::from_records(&records);
        let view = FilteredView::compute(&records, &catalog.full_selection());

        assert_eq!(view.len(), records.len());
    }

    #[test]
    fn test_intersect_drops_unknown_values() {
        let records = sample_records();
        let catalog = FilterCatalog::from_records(&records);

        let requested = selection(&["China", "Atlantis"], &["GDP Growth"], &[2024, 1999]);
        let effective = catalog.intersect(&requested);

        assert_eq!(effective, selection(&["China"], &["GDP Growth"], &[2024]));
    }

    #[test]
    fn test_selection_deserializes_with_missing_dimensions() {
        let sel: FilterSelection = serde_json::from_str(r#"{"areas": ["China"]}"#).unwrap();
        assert_eq!(sel.areas.len(), 1);
        assert!(sel.categories.is_empty());
        assert!(sel.years.is_empty());
    }
}
