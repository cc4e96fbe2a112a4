//! Column layout of the spreadsheet export and row-to-record mapping.
//!
//! The sheet has no versioned schema, so positions are the contract. They
//! all live in [`COLUMN_LAYOUT`]; a moved column is a one-line change there.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::models::PropertyRecord;
use crate::parser::{is_blank_row, parse_rows};

/// Number of columns in the export, including unmapped ones.
pub const COLUMN_COUNT: usize = 36;

/// How the raw cell is coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    /// Copied verbatim.
    Text,
    /// Decimal, zero when unparsable, clamped to >= 0.
    Measure,
    /// Decimal degrees, zero when unparsable.
    Coordinate,
}

/// Record field a column feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Id,
    RequestNumber,
    Address,
    City,
    StreetCode,
    StreetName,
    HouseNumber,
    Entrance,
    Block,
    Parcel,
    Plot,
    Event,
    EventDate,
    MainUsage,
    RequestDescription,
    RequesterDetails,
    MainArea,
    ServiceArea,
    ExistingUnits,
    RequestedUnits,
    OtherArea,
    Height,
    Contractor,
    DaysFromSubmission,
    LastCommittee,
    LastMeeting,
    Handler,
    PermitNumber,
    Holder,
    Notes,
    RelatedRequestNumber,
    Agreement,
    AgreementDescription,
    Latitude,
    Longitude,
}

/// One entry of the layout table.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ColumnSpec {
    pub index: usize,
    pub field: Field,
    pub kind: ColumnKind,
}

const fn col(index: usize, field: Field, kind: ColumnKind) -> ColumnSpec {
    ColumnSpec { index, field, kind }
}

use ColumnKind::{Coordinate, Measure, Text};

/// Position → field → coercion. Column 2 is not mapped.
pub const COLUMN_LAYOUT: [ColumnSpec; 35] = [
    col(0, Field::Id, Text),
    col(1, Field::RequestNumber, Text),
    col(3, Field::Address, Text),
    col(4, Field::City, Text),
    col(5, Field::StreetCode, Text),
    col(6, Field::StreetName, Text),
    col(7, Field::HouseNumber, Text),
    col(8, Field::Entrance, Text),
    col(9, Field::Block, Text),
    col(10, Field::Parcel, Text),
    col(11, Field::Plot, Text),
    col(12, Field::Event, Text),
    col(13, Field::EventDate, Text),
    col(14, Field::MainUsage, Text),
    col(15, Field::RequestDescription, Text),
    col(16, Field::RequesterDetails, Text),
    col(17, Field::MainArea, Measure),
    col(18, Field::ServiceArea, Measure),
    col(19, Field::ExistingUnits, Measure),
    col(20, Field::RequestedUnits, Measure),
    col(21, Field::OtherArea, Measure),
    col(22, Field::Height, Measure),
    col(23, Field::Contractor, Text),
    col(24, Field::DaysFromSubmission, Measure),
    col(25, Field::LastCommittee, Text),
    col(26, Field::LastMeeting, Text),
    col(27, Field::Handler, Text),
    col(28, Field::PermitNumber, Text),
    col(29, Field::Holder, Text),
    col(30, Field::Notes, Text),
    col(31, Field::RelatedRequestNumber, Text),
    col(32, Field::Agreement, Text),
    col(33, Field::AgreementDescription, Text),
    col(34, Field::Latitude, Coordinate),
    col(35, Field::Longitude, Coordinate),
];

impl Field {
    /// Slot for text fields, `None` for numeric ones.
    fn text_slot(self, record: &mut PropertyRecord) -> Option<&mut String> {
        let slot = match self {
            Field::Id => &mut record.id,
            Field::RequestNumber => &mut record.request_number,
            Field::Address => &mut record.address,
            Field::City => &mut record.city,
            Field::StreetCode => &mut record.street_code,
            Field::StreetName => &mut record.street_name,
            Field::HouseNumber => &mut record.house_number,
            Field::Entrance => &mut record.entrance,
            Field::Block => &mut record.block,
            Field::Parcel => &mut record.parcel,
            Field::Plot => &mut record.plot,
            Field::Event => &mut record.event,
            Field::EventDate => &mut record.event_date,
            Field::MainUsage => &mut record.main_usage,
            Field::RequestDescription => &mut record.request_description,
            Field::RequesterDetails => &mut record.requester_details,
            Field::Contractor => &mut record.contractor,
            Field::LastCommittee => &mut record.last_committee,
            Field::LastMeeting => &mut record.last_meeting,
            Field::Handler => &mut record.handler,
            Field::PermitNumber => &mut record.permit_number,
            Field::Holder => &mut record.holder,
            Field::Notes => &mut record.notes,
            Field::RelatedRequestNumber => &mut record.related_request_number,
            Field::Agreement => &mut record.agreement,
            Field::AgreementDescription => &mut record.agreement_description,
            _ => return None,
        };
        Some(slot)
    }

    /// Slot for numeric fields, `None` for text ones.
    fn number_slot(self, record: &mut PropertyRecord) -> Option<&mut f64> {
        let slot = match self {
            Field::MainArea => &mut record.main_area,
            Field::ServiceArea => &mut record.service_area,
            Field::ExistingUnits => &mut record.existing_units,
            Field::RequestedUnits => &mut record.requested_units,
            Field::OtherArea => &mut record.other_area,
            Field::Height => &mut record.height,
            Field::DaysFromSubmission => &mut record.days_from_submission,
            Field::Latitude => &mut record.latitude,
            Field::Longitude => &mut record.longitude,
            _ => return None,
        };
        Some(slot)
    }
}

static LEADING_NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?").expect("valid number regex")
});

/// Parse a cell as a decimal, `0.0` when it holds no number.
///
/// Leading whitespace is skipped and trailing text ignored ("12.5 m" → 12.5),
/// matching how spreadsheet exports are usually read. NaN and infinities
/// never come out of here.
pub fn coerce_number(raw: &str) -> f64 {
    LEADING_NUMBER
        .find(raw.trim_start())
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

fn coerce(kind: ColumnKind, raw: &str) -> f64 {
    match kind {
        ColumnKind::Measure => coerce_number(raw).max(0.0),
        _ => coerce_number(raw),
    }
}

/// Map one row to a record. Missing cells become `""` / `0.0`.
pub fn map_row(row: &[String]) -> PropertyRecord {
    let mut record = PropertyRecord::default();

    for spec in &COLUMN_LAYOUT {
        let raw = row.get(spec.index).map(String::as_str).unwrap_or("");

        match spec.kind {
            ColumnKind::Text => {
                if let Some(slot) = spec.field.text_slot(&mut record) {
                    *slot = raw.to_string();
                }
            }
            ColumnKind::Measure | ColumnKind::Coordinate => {
                if let Some(slot) = spec.field.number_slot(&mut record) {
                    *slot = coerce(spec.kind, raw);
                }
            }
        }
    }

    record
}

/// Parse a whole export into records, skipping the header and blank rows.
///
/// No coordinate check here; that belongs to ingestion.
pub fn records_from_csv(text: &str) -> Vec<PropertyRecord> {
    parse_rows(text)
        .into_iter()
        .skip(1)
        .filter(|row| !is_blank_row(row))
        .map(|row| map_row(&row))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    /// A full 36-column row with distinct markers in each cell.
    fn full_row() -> Vec<String> {
        let mut row: Vec<String> = (0..COLUMN_COUNT).map(|i| format!("c{}", i)).collect();
        for i in [17, 18, 19, 20, 21, 22, 24] {
            row[i] = format!("{}.5", i);
        }
        row[34] = "31.866029".into();
        row[35] = "34.742683".into();
        row
    }

    #[test]
    fn test_layout_indexes_unique_and_in_range() {
        let mut seen = HashSet::new();
        for spec in &COLUMN_LAYOUT {
            assert!(spec.index < COLUMN_COUNT, "{:?} out of range", spec);
            assert!(seen.insert(spec.index), "index {} mapped twice", spec.index);
        }
        assert!(!seen.contains(&2));
    }

    #[test]
    fn test_layout_kinds_match_field_types() {
        let mut fields = HashSet::new();
        for spec in &COLUMN_LAYOUT {
            let mut record = PropertyRecord::default();
            let has_text = spec.field.text_slot(&mut record).is_some();
            let has_number = spec.field.number_slot(&mut record).is_some();
            match spec.kind {
                ColumnKind::Text => assert!(has_text && !has_number, "{:?}", spec),
                _ => assert!(has_number && !has_text, "{:?}", spec),
            }
            assert!(fields.insert(format!("{:?}", spec.field)));
        }
    }

    #[test]
    fn test_map_full_row() {
        let record = map_row(&full_row());

        assert_eq!(record.id, "c0");
        assert_eq!(record.request_number, "c1");
        assert_eq!(record.address, "c3");
        assert_eq!(record.city, "c4");
        assert_eq!(record.plot, "c11");
        assert_eq!(record.main_usage, "c14");
        assert_eq!(record.request_description, "c15");
        assert_eq!(record.main_area, 17.5);
        assert_eq!(record.other_area, 21.5);
        assert_eq!(record.height, 22.5);
        assert_eq!(record.contractor, "c23");
        assert_eq!(record.days_from_submission, 24.5);
        assert_eq!(record.agreement_description, "c33");
        assert_eq!(record.latitude, 31.866029);
        assert_eq!(record.longitude, 34.742683);
    }

    #[test]
    fn test_short_row_defaults() {
        let record = map_row(&["42".to_string(), "r-1".to_string()]);

        assert_eq!(record.id, "42");
        assert_eq!(record.request_number, "r-1");
        assert_eq!(record.address, "");
        assert_eq!(record.main_area, 0.0);
        assert_eq!(record.latitude, 0.0);
    }

    #[test]
    fn test_coerce_number() {
        assert_eq!(coerce_number("84.98"), 84.98);
        assert_eq!(coerce_number("  250"), 250.0);
        assert_eq!(coerce_number("12.5 m"), 12.5);
        assert_eq!(coerce_number(".5"), 0.5);
        assert_eq!(coerce_number("1e3"), 1000.0);
        assert_eq!(coerce_number("-3"), -3.0);
        assert_eq!(coerce_number(""), 0.0);
        assert_eq!(coerce_number("abc"), 0.0);
        assert_eq!(coerce_number("NaN"), 0.0);
        assert_eq!(coerce_number("inf"), 0.0);
        assert_eq!(coerce_number("Infinity"), 0.0);
    }

    #[test]
    fn test_non_numeric_measures_are_zero() {
        let mut row = full_row();
        row[17] = "לא ידוע".into();
        row[18] = String::new();
        row[22] = "-4".into();

        let record = map_row(&row);
        assert_eq!(record.main_area, 0.0);
        assert_eq!(record.service_area, 0.0);
        assert_eq!(record.height, 0.0);
        assert!(!record.main_area.is_nan());
    }

    #[test]
    fn test_negative_coordinates_kept() {
        let mut row = full_row();
        row[34] = "-33.8688".into();
        row[35] = "-70.6693".into();

        let record = map_row(&row);
        assert_eq!(record.latitude, -33.8688);
        assert_eq!(record.longitude, -70.6693);
    }

    #[test]
    fn test_records_from_csv_counts_rows() {
        let header = (0..COLUMN_COUNT).map(|i| format!("h{}", i)).collect::<Vec<_>>().join(",");
        let line = full_row().join(",");
        let text = format!("{}\n{}\n{}\n{}\n", header, line, line, line);

        let records = records_from_csv(&text);
        assert_eq!(records.len(), 3);
        assert!(records.iter().all(|r| r.id == "c0"));
    }

    #[test]
    fn test_records_from_csv_quoted_address() {
        let mut row = full_row();
        row[3] = "\"Herzl 1, Ramat Gan\"".into();
        let text = format!("header\n{}", row.join(","));

        let records = records_from_csv(&text);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].address, "Herzl 1, Ramat Gan");
        assert_eq!(records[0].city, "c4");
        assert_eq!(records[0].longitude, 34.742683);
    }

    #[test]
    fn test_header_only_document() {
        assert!(records_from_csv("id,address").is_empty());
        assert!(records_from_csv("").is_empty());
    }
}
