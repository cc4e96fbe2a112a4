//! Application configuration.
//!
//! Compile-time constants for the listings frontend. The sheet location is
//! shared with the CLI through `listings::config`.

use listings::config::{sheet_export_url, SHEET_ID};
use listings::FallbackPolicy;

/// Application title shown in the header.
pub const APP_NAME: &str = "מערכת נכסים";

/// Viewport width (px) below which the mobile layout is used.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

/// What to do when the sheet cannot be loaded.
///
/// `Substitute` shows the sample listings with a banner; `Fail` shows the
/// error screen with a retry button.
pub const FALLBACK_POLICY: FallbackPolicy = FallbackPolicy::Substitute;

/// Map surface size in SVG user units; the SVG scales to its container.
pub const MAP_WIDTH: f64 = 800.0;
pub const MAP_HEIGHT: f64 = 600.0;

/// Space kept free around the fitted markers.
pub const MAP_PADDING: f64 = 40.0;

/// Marker radius, and the radius of the selected marker.
pub const MARKER_RADIUS: f64 = 8.0;
pub const SELECTED_MARKER_RADIUS: f64 = 12.0;

/// CSV export URL of the listings sheet.
pub fn sheet_url() -> String {
    sheet_export_url(SHEET_ID)
}

/// True when `width` falls under the mobile breakpoint.
pub fn is_mobile_width(width: f64) -> bool {
    width < MOBILE_BREAKPOINT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint() {
        assert!(is_mobile_width(767.0));
        assert!(!is_mobile_width(768.0));
        assert!(!is_mobile_width(1280.0));
    }

    #[test]
    fn test_sheet_url() {
        assert!(sheet_url().contains(SHEET_ID));
    }
}
