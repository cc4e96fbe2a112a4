//! Domain models for the listings viewer.
//!
//! - [`PropertyRecord`] - one property/permit event row from the spreadsheet
//! - [`UsageKind`] - coarse classification of the usage category

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// =============================================================================
// Property Record
// =============================================================================

/// One real-estate event entry.
///
/// Built by [`crate::columns::map_row`]; every field is always present,
/// text fields default to the empty string and numeric fields to `0.0`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRecord {
    pub id: String,
    pub request_number: String,

    // Address
    pub address: String,
    pub city: String,
    pub street_code: String,
    pub street_name: String,
    pub house_number: String,
    pub entrance: String,
    pub block: String,
    pub parcel: String,
    pub plot: String,

    // Event
    pub event: String,
    pub event_date: String,
    pub main_usage: String,
    pub request_description: String,
    pub requester_details: String,

    // Measures (non-negative)
    pub main_area: f64,
    pub service_area: f64,
    pub existing_units: f64,
    pub requested_units: f64,
    pub other_area: f64,
    pub height: f64,

    pub contractor: String,
    pub days_from_submission: f64,
    pub last_committee: String,
    pub last_meeting: String,
    pub handler: String,
    pub permit_number: String,
    pub holder: String,
    pub notes: String,
    pub related_request_number: String,
    pub agreement: String,
    pub agreement_description: String,

    // Decimal degrees
    pub latitude: f64,
    pub longitude: f64,
}

impl PropertyRecord {
    /// A record can be placed on the map only when both coordinates are set.
    pub fn has_coordinates(&self) -> bool {
        self.latitude != 0.0
            && self.longitude != 0.0
            && self.latitude.is_finite()
            && self.longitude.is_finite()
    }

    /// Main area plus service area, in m².
    pub fn total_area(&self) -> f64 {
        self.main_area + self.service_area
    }

    /// "8 existing / 1 requested", or `None` when neither count is set.
    pub fn units_summary(&self) -> Option<String> {
        let existing = (self.existing_units > 0.0)
            .then(|| format!("{} existing", format_number(self.existing_units)));
        let requested = (self.requested_units > 0.0)
            .then(|| format!("{} requested", format_number(self.requested_units)));

        match (existing, requested) {
            (Some(e), Some(r)) => Some(format!("{} / {}", e, r)),
            (Some(e), None) => Some(e),
            (None, Some(r)) => Some(r),
            (None, None) => None,
        }
    }

    /// "block/parcel" (gush/helka), either part alone if the other is missing.
    pub fn block_parcel(&self) -> String {
        match (self.block.is_empty(), self.parcel.is_empty()) {
            (false, false) => format!("{}/{}", self.block, self.parcel),
            (false, true) => self.block.clone(),
            (true, false) => self.parcel.clone(),
            (true, true) => String::new(),
        }
    }

    /// Event date parsed as day/month/year.
    pub fn event_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.event_date.trim(), "%d/%m/%Y").ok()
    }

    /// Event date for display ("1.10.2016"); the raw cell when it does not parse.
    pub fn event_date_label(&self) -> String {
        match self.event_date() {
            Some(date) => date.format("%-d.%-m.%Y").to_string(),
            None => self.event_date.trim().to_string(),
        }
    }

    pub fn usage_kind(&self) -> UsageKind {
        UsageKind::classify(&self.main_usage)
    }

    pub fn google_maps_url(&self) -> String {
        format!("https://maps.google.com/?q={},{}", self.latitude, self.longitude)
    }
}

/// Format a measure without a trailing `.0` ("84.98", "250").
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

// =============================================================================
// Usage Kind
// =============================================================================

/// Coarse usage classification, used for marker colors and card badges.
///
/// Matching is by substring on the Hebrew category, checked in declaration
/// order, so "משרדים + מסחרי" is an office.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UsageKind {
    Residential,
    Office,
    Commercial,
    Other,
}

impl UsageKind {
    pub fn classify(usage: &str) -> Self {
        if usage.contains("מגורים") {
            UsageKind::Residential
        } else if usage.contains("משרדים") {
            UsageKind::Office
        } else if usage.contains("מסחרי") {
            UsageKind::Commercial
        } else {
            UsageKind::Other
        }
    }

    /// Marker fill color.
    pub fn color(&self) -> &'static str {
        match self {
            UsageKind::Residential => "#3B82F6",
            UsageKind::Office => "#10B981",
            UsageKind::Commercial => "#F59E0B",
            UsageKind::Other => "#6B7280",
        }
    }

    /// CSS modifier class.
    pub fn css_class(&self) -> &'static str {
        match self {
            UsageKind::Residential => "usage-residential",
            UsageKind::Office => "usage-office",
            UsageKind::Commercial => "usage-commercial",
            UsageKind::Other => "usage-other",
        }
    }
}
