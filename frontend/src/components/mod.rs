//! UI Components for the listings viewer.
//!
//! # Layout Components
//! - [`Header`] - Title, view toggle (mobile) and sidebar toggle (desktop)
//! - [`Footer`] - Data source and links
//!
//! # Feature Components
//! - [`MapView`] - SVG map of the visible listings with a marker popup
//! - [`PropertyList`] - Search, filters and listing cards
//! - [`FilterPanel`] - Usage and area filters
//! - [`PropertyCard`] - One listing in the list
//! - [`PropertyDetail`] - Detail modal
//!
//! # Status Components
//! - [`LoadingSpinner`], [`DegradedBanner`], [`ErrorScreen`]

mod header;
mod map_view;
mod property_list;
mod filter_panel;
mod property_card;
mod property_detail;
mod status;
mod footer;

pub use header::*;
pub use map_view::*;
pub use property_list::*;
pub use filter_panel::*;
pub use property_card::*;
pub use property_detail::*;
pub use status::*;
pub use footer::*;
