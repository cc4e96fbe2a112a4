//! Error types for the listings ingestion pipeline.
//!
//! - [`CsvError`] - decoding errors
//! - [`FetchError`] - transport errors from a [`crate::ingest::DocumentSource`]
//! - [`IngestError`] - top-level ingestion errors
//! - [`ConfigError`] - invalid environment configuration
//!
//! Conversion into [`IngestError`] is automatic via `From`,
//! so `?` works across the fetch/parse boundary.

use thiserror::Error;

// =============================================================================
// CSV Errors
// =============================================================================

/// Errors while turning a fetched document into rows.
#[derive(Debug, Error)]
pub enum CsvError {
    /// The bytes could not be decoded with the detected encoding.
    #[error("Failed to decode document as {0}")]
    Encoding(String),
}

// =============================================================================
// Fetch Errors
// =============================================================================

/// Errors while retrieving the remote (or local) document.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network failure, timeout, DNS, TLS...
    #[error("Request failed: {0}")]
    Transport(String),

    /// Non-2xx response.
    #[error("Server returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    /// The server answered with something that is not a CSV export
    /// (typically a sign-in page for a private sheet).
    #[error("Unexpected content type: {0}")]
    UnexpectedContent(String),

    /// Local file could not be read.
    #[error("Failed to read document: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Ingestion Errors (top-level)
// =============================================================================

/// Top-level ingestion errors.
///
/// Only surfaced to callers running with [`crate::ingest::FallbackPolicy::Fail`];
/// the default policy resolves them with the fallback set.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("CSV error: {0}")]
    Csv(#[from] CsvError),
}

// =============================================================================
// Configuration Errors
// =============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: String, value: String },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

pub type CsvResult<T> = Result<T, CsvError>;

pub type FetchResult<T> = Result<T, FetchError>;

pub type IngestResult<T> = Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion_chain() {
        let csv_err = CsvError::Encoding("windows-1255".into());
        let ingest_err: IngestError = csv_err.into();
        assert!(ingest_err.to_string().contains("windows-1255"));

        let fetch_err = FetchError::Status {
            status: 404,
            url: "https://example.org/sheet.csv".into(),
        };
        let ingest_err: IngestError = fetch_err.into();
        assert!(ingest_err.to_string().contains("404"));
        assert!(ingest_err.to_string().contains("sheet.csv"));
    }

    #[test]
    fn test_io_error_wraps() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.csv");
        let err: FetchError = io.into();
        assert!(matches!(err, FetchError::Io(_)));
        assert!(err.to_string().contains("missing.csv"));
    }

    #[test]
    fn test_config_error_format() {
        let err = ConfigError::InvalidValue {
            key: "LISTINGS_TIMEOUT_SECS".into(),
            value: "soon".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("LISTINGS_TIMEOUT_SECS"));
        assert!(msg.contains("soon"));
    }
}
