//! Data services.
//!
//! # Services
//!
//! - [`sheet`] - Loads the listings sheet through `listings::ingest`

pub mod sheet;

pub use sheet::*;
