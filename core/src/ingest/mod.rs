//! Ingestion: fetch the sheet, parse, map, keep what can go on the map.
//!
//! ```text
//! DocumentSource ──▶ decode ──▶ parse_rows ──▶ map_row ──▶ coordinate gate ──▶ Ingested
//!        │                                                                         ▲
//!        └──────────────── any failure (policy = Substitute) ──▶ fallback set ─────┘
//! ```
//!
//! The fallback is never silent towards the caller: [`Ingested::origin`]
//! says whether the records are live or the sample set.

pub mod fallback;
#[cfg(not(target_arch = "wasm32"))]
pub mod sources;

use serde::{Deserialize, Serialize};

use crate::columns::records_from_csv;
use crate::error::{FetchResult, IngestResult};
use crate::models::PropertyRecord;
use crate::parser::decode_content;

pub use fallback::{fallback_records, FALLBACK_VERSION};
#[cfg(not(target_arch = "wasm32"))]
pub use sources::{FileSource, HttpSource};

/// Where the CSV document comes from.
///
/// One call to [`DocumentSource::fetch`] per ingestion cycle.
#[allow(async_fn_in_trait)]
pub trait DocumentSource {
    /// Human-readable location, for logs.
    fn describe(&self) -> String;

    /// Raw document bytes.
    async fn fetch(&self) -> FetchResult<Vec<u8>>;
}

/// What to do when the document cannot be loaded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FallbackPolicy {
    /// Serve the sample records and report a degraded origin.
    #[default]
    Substitute,
    /// Return the error.
    Fail,
}

/// Whether the published records are live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DataOrigin {
    Live,
    /// The sample set, with its [`FALLBACK_VERSION`].
    Fallback { reason: String, version: u32 },
}

/// The published record set. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingested {
    pub records: Vec<PropertyRecord>,
    pub origin: DataOrigin,
    /// Data rows read from the document.
    pub rows_read: usize,
    /// Rows dropped for missing coordinates.
    pub dropped: usize,
}

impl Ingested {
    /// The sample set, labelled with why it is being served.
    pub fn fallback(reason: impl Into<String>) -> Self {
        let records = fallback_records();
        Self {
            rows_read: records.len(),
            dropped: 0,
            records,
            origin: DataOrigin::Fallback {
                reason: reason.into(),
                version: FALLBACK_VERSION,
            },
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self.origin, DataOrigin::Fallback { .. })
    }
}

/// Build the record set from document text.
///
/// A header-only or blank document is a valid, empty live set.
pub fn ingest_text(text: &str) -> IngestResult<Ingested> {
    let mapped = records_from_csv(text);
    let rows_read = mapped.len();
    let records: Vec<PropertyRecord> = mapped
        .into_iter()
        .filter(PropertyRecord::has_coordinates)
        .collect();
    let dropped = rows_read - records.len();

    if dropped > 0 {
        log::debug!("Dropped {} of {} rows without coordinates", dropped, rows_read);
    }

    Ok(Ingested {
        records,
        origin: DataOrigin::Live,
        rows_read,
        dropped,
    })
}

async fn load<S: DocumentSource>(source: &S) -> IngestResult<Ingested> {
    let bytes = source.fetch().await?;
    let text = decode_content(&bytes)?;
    ingest_text(&text)
}

/// Run one ingestion cycle against `source`.
///
/// With [`FallbackPolicy::Substitute`] this never returns `Err`.
pub async fn ingest<S: DocumentSource>(source: &S, policy: FallbackPolicy) -> IngestResult<Ingested> {
    log::info!("Loading listings from {}", source.describe());

    match load(source).await {
        Ok(ingested) => {
            log::info!(
                "Loaded {} listings ({} rows, {} without coordinates)",
                ingested.records.len(),
                ingested.rows_read,
                ingested.dropped
            );
            Ok(ingested)
        }
        Err(err) => match policy {
            FallbackPolicy::Substitute => {
                log::warn!("Falling back to sample listings: {}", err);
                Ok(Ingested::fallback(err.to_string()))
            }
            FallbackPolicy::Fail => {
                log::error!("Failed to load listings: {}", err);
                Err(err)
            }
        },
    }
}
