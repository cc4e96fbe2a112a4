//! # Listings - building permit requests on a map
//!
//! Loads the municipal permit-request sheet (a Google Sheets CSV export),
//! maps each row onto a [`PropertyRecord`], and answers filter and search
//! queries over the result. The same crate backs the `listings` CLI and the
//! browser frontend.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ Sheet (CSV) │────▶│   Parser    │────▶│   Columns   │────▶│  Ingested   │
//! │ (HTTP/file) │     │ (decode+csv)│     │ (36 → rec.) │     │ (or sample) │
//! └─────────────┘     └─────────────┘     └─────────────┘     └──────┬──────┘
//!                                                                    │
//!                         ┌─────────────┐     ┌─────────────┐        │
//!                         │   Geo/Map   │◀────│   Filter    │◀───────┘
//!                         │  (markers)  │     │  (+ search) │
//!                         └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use listings::{ingest, Config, FallbackPolicy, FilterCriteria, HttpSource};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = Config::from_env().unwrap();
//!     let source = HttpSource::from_config(&config).unwrap();
//!     let data = ingest(&source, FallbackPolicy::Substitute).await.unwrap();
//!
//!     let criteria = FilterCriteria::default().with_usage("מגורים");
//!     let visible = listings::filter_records(&data.records, &criteria, "");
//!     println!("{} residential listings", visible.len());
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`models`] - The property record and usage categories
//! - [`parser`] - Text decoding and CSV line splitting
//! - [`columns`] - Positional column layout and value coercion
//! - [`ingest`] - Fetch, map and fallback
//! - [`filter`] - Criteria and free-text search
//! - [`geo`] - Markers, bounds, projection and base map tiles
//! - [`state`] - UI state transitions
//! - [`config`] - Runtime configuration
//! - [`logs`] - CLI console logger

// Core modules
pub mod error;
pub mod models;

// Parsing
pub mod columns;
pub mod parser;

// Loading
pub mod config;
pub mod ingest;

// Querying
pub mod filter;
pub mod geo;
pub mod state;

// Console output
pub mod logs;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{
    ConfigError,
    CsvError,
    CsvResult,
    FetchError,
    FetchResult,
    IngestError,
    IngestResult,
};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{format_number, PropertyRecord, UsageKind};

// =============================================================================
// Re-exports - Parsing
// =============================================================================

pub use parser::{decode_content, detect_encoding, parse_line, parse_rows};
pub use columns::{coerce_number, map_row, records_from_csv, COLUMN_COUNT, COLUMN_LAYOUT};

// =============================================================================
// Re-exports - Ingestion
// =============================================================================

pub use ingest::{
    fallback_records,
    ingest,
    ingest_text,
    DataOrigin,
    DocumentSource,
    FallbackPolicy,
    Ingested,
};

#[cfg(not(target_arch = "wasm32"))]
pub use ingest::{FileSource, HttpSource};

pub use config::Config;

// =============================================================================
// Re-exports - Querying
// =============================================================================

pub use filter::{filter_records, find_record, usage_categories, FilterCriteria};
pub use geo::{markers, Bounds, MapMarker, Projection, Tile, Viewport, OSM_TILE_URL};
pub use state::{AppState, ViewMode};
