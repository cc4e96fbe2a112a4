//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Form Types** - Raw filter inputs before they become criteria
//! - **Error Types** - Frontend error handling

use listings::{FilterCriteria, IngestError};
use std::fmt;

// =============================================================================
// Form Types
// =============================================================================

/// Filter panel inputs as typed by the user.
///
/// Number inputs arrive as strings; an empty or non-numeric min area means
/// zero and an empty max area means unbounded.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterDraft {
    pub usage: String,
    pub min_area: String,
    pub max_area: String,
}

impl FilterDraft {
    pub fn from_criteria(criteria: &FilterCriteria) -> Self {
        let min_area = if criteria.min_area > 0.0 {
            listings::format_number(criteria.min_area)
        } else {
            String::new()
        };

        Self {
            usage: criteria.usage.clone(),
            min_area,
            max_area: criteria.max_area.map(listings::format_number).unwrap_or_default(),
        }
    }

    pub fn to_criteria(&self) -> FilterCriteria {
        let parse = |raw: &str| {
            raw.trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite() && *v >= 0.0)
        };

        FilterCriteria::default()
            .with_usage(self.usage.clone())
            .with_area(parse(&self.min_area).unwrap_or(0.0), parse(&self.max_area))
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    /// The sheet could not be fetched.
    Network(String),
    /// The sheet was fetched but held no usable data.
    Data(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
            AppError::Data(msg) => write!(f, "Data error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<IngestError> for AppError {
    fn from(err: IngestError) -> Self {
        match err {
            IngestError::Fetch(e) => AppError::Network(e.to_string()),
            IngestError::Csv(e) => AppError::Data(e.to_string()),
        }
    }
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
