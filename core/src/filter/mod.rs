//! Filtering and free-text search over the ingested records.
//!
//! Everything here is a pure function of its inputs; callers re-run it
//! whenever the criteria, the query or the record set change.

use serde::{Deserialize, Serialize};

use crate::models::PropertyRecord;

/// Active filter constraints, replaced as a whole.
///
/// The default matches everything: any usage, area in `[0, ∞)`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    /// Exact usage category; empty means any.
    #[serde(default)]
    pub usage: String,
    #[serde(default)]
    pub min_area: f64,
    /// `None` is unbounded.
    #[serde(default)]
    pub max_area: Option<f64>,
}

impl FilterCriteria {
    pub fn with_usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = usage.into();
        self
    }

    pub fn with_area(mut self, min_area: f64, max_area: Option<f64>) -> Self {
        self.min_area = min_area;
        self.max_area = max_area;
        self
    }

    /// True when at least one constraint narrows the set.
    pub fn is_active(&self) -> bool {
        !self.usage.is_empty() || self.min_area > 0.0 || self.max_area.is_some()
    }

    /// Usage and area constraints only, no free text.
    pub fn matches(&self, record: &PropertyRecord) -> bool {
        if !self.usage.is_empty() && record.main_usage != self.usage {
            return false;
        }
        if record.main_area < self.min_area {
            return false;
        }
        if let Some(max) = self.max_area {
            if record.main_area > max {
                return false;
            }
        }
        true
    }
}

/// Case-insensitive substring match on address, usage and description.
///
/// `needle` must already be lowercased.
fn matches_query(record: &PropertyRecord, needle: &str) -> bool {
    needle.is_empty()
        || [&record.address, &record.main_usage, &record.request_description]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
}

/// Records passing both the criteria and the query, in original order.
pub fn filter_records<'a>(
    records: &'a [PropertyRecord],
    criteria: &FilterCriteria,
    query: &str,
) -> Vec<&'a PropertyRecord> {
    let needle = query.to_lowercase();

    records
        .iter()
        .filter(|record| criteria.matches(record) && matches_query(record, &needle))
        .collect()
}

/// Distinct non-empty usage categories, first-seen order.
pub fn usage_categories(records: &[PropertyRecord]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();

    for record in records {
        let usage = &record.main_usage;
        if !usage.is_empty() && !categories.iter().any(|c| c == usage) {
            categories.push(usage.clone());
        }
    }

    categories
}

pub fn find_record<'a>(records: &'a [PropertyRecord], id: &str) -> Option<&'a PropertyRecord> {
    records.iter().find(|record| record.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::fallback_records;

    fn record(id: &str, usage: &str, area: f64, address: &str) -> PropertyRecord {
        PropertyRecord {
            id: id.into(),
            main_usage: usage.into(),
            main_area: area,
            address: address.into(),
            latitude: 31.8,
            longitude: 34.7,
            ..Default::default()
        }
    }

    fn ids(records: &[&PropertyRecord]) -> Vec<String> {
        records.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn test_default_criteria_matches_all() {
        let records = fallback_records();
        let visible = filter_records(&records, &FilterCriteria::default(), "");

        assert_eq!(visible.len(), records.len());
        assert!(!FilterCriteria::default().is_active());
    }

    #[test]
    fn test_usage_is_exact_match() {
        let records = vec![
            record("1", "מגורים", 100.0, "a"),
            record("2", "מגורים + מסחרי", 100.0, "b"),
        ];
        let criteria = FilterCriteria::default().with_usage("מגורים");

        assert_eq!(ids(&filter_records(&records, &criteria, "")), vec!["1"]);
    }

    #[test]
    fn test_area_bounds_inclusive() {
        let records = vec![
            record("1", "x", 50.0, "a"),
            record("2", "x", 300.0, "b"),
            record("3", "x", 300.5, "c"),
            record("4", "x", 49.9, "d"),
        ];
        let criteria = FilterCriteria::default().with_area(50.0, Some(300.0));

        assert_eq!(ids(&filter_records(&records, &criteria, "")), vec!["1", "2"]);
    }

    #[test]
    fn test_mock_residential_scenario() {
        let records = fallback_records();
        let criteria = FilterCriteria {
            usage: "מגורים".into(),
            min_area: 50.0,
            max_area: Some(300.0),
        };

        let visible = filter_records(&records, &criteria, "");
        assert_eq!(ids(&visible), vec!["2012212", "2012213"]);
        assert!(visible.iter().all(|r| criteria.matches(r)));
    }

    #[test]
    fn test_query_fields() {
        let mut records = vec![
            record("1", "Offices", 10.0, "Herzl 1"),
            record("2", "Residential", 10.0, "Bialik 3"),
            record("3", "Residential", 10.0, "Jabotinsky 9"),
        ];
        records[2].request_description = "New HERZL wing".into();

        let hits = filter_records(&records, &FilterCriteria::default(), "herzl");
        assert_eq!(ids(&hits), vec!["1", "3"]);

        let hits = filter_records(&records, &FilterCriteria::default(), "OFFICE");
        assert_eq!(ids(&hits), vec!["1"]);
    }

    #[test]
    fn test_query_case_insensitive() {
        let records = vec![
            record("1", "x", 1.0, "Ramat Gan"),
            record("2", "x", 1.0, "רמת גן"),
        ];
        let lower = filter_records(&records, &FilterCriteria::default(), "ramat");
        let upper = filter_records(&records, &FilterCriteria::default(), "RAMAT");
        assert_eq!(ids(&lower), ids(&upper));

        let hebrew = filter_records(&records, &FilterCriteria::default(), "רמת");
        let hebrew_upper = filter_records(&records, &FilterCriteria::default(), &"רמת".to_uppercase());
        assert_eq!(ids(&hebrew), vec!["2"]);
        assert_eq!(ids(&hebrew), ids(&hebrew_upper));
    }

    #[test]
    fn test_query_and_criteria_conjunction() {
        let records = fallback_records();
        let criteria = FilterCriteria::default().with_usage("מגורים");

        let hits = filter_records(&records, &criteria, "הגולן");
        assert_eq!(ids(&hits), vec!["2012212"]);

        let hits = filter_records(&records, &criteria, "החילזון");
        assert!(hits.is_empty());
    }

    #[test]
    fn test_order_preserved() {
        let records = vec![
            record("c", "x", 1.0, "a"),
            record("a", "x", 1.0, "a"),
            record("b", "x", 1.0, "a"),
        ];
        let hits = filter_records(&records, &FilterCriteria::default(), "a");
        assert_eq!(ids(&hits), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_usage_categories_first_seen() {
        let records = vec![
            record("1", "מגורים", 1.0, ""),
            record("2", "", 1.0, ""),
            record("3", "משרדים", 1.0, ""),
            record("4", "מגורים", 1.0, ""),
        ];

        assert_eq!(usage_categories(&records), vec!["מגורים", "משרדים"]);
        assert!(usage_categories(&[]).is_empty());
    }

    #[test]
    fn test_find_record() {
        let records = fallback_records();
        assert_eq!(find_record(&records, "2012213").map(|r| r.main_area), Some(250.0));
        assert!(find_record(&records, "nope").is_none());
    }

    #[test]
    fn test_criteria_deserialize_defaults() {
        let criteria: FilterCriteria = serde_json::from_str(r#"{"usage":"מגורים"}"#).unwrap();
        assert_eq!(criteria.min_area, 0.0);
        assert_eq!(criteria.max_area, None);
    }
}
