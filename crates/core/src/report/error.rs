//! Report error types.

use chrono::NaiveDate;
use lustre_shared::AppError;
use thiserror::Error;

use crate::ledger::StoreError;

/// Errors surfaced by the reporting facade.
///
/// `Forbidden` and `InvalidRange` are user-visible 4xx-equivalent
/// failures. Store errors indicate a persistence-layer problem and pass
/// through unmasked; nothing else here produces a 5xx-equivalent failure
/// under normal data.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The principal asked for data outside its access boundary.
    #[error("Access denied: {0}")]
    Forbidden(String),

    /// Caller-supplied date range ends before it starts.
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidRange {
        /// Range start.
        start: NaiveDate,
        /// Range end.
        end: NaiveDate,
    },

    /// Store-layer failure, propagated unchanged.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<ReportError> for AppError {
    fn from(error: ReportError) -> Self {
        match error {
            ReportError::Forbidden(message) => Self::Forbidden(message),
            ReportError::InvalidRange { start, end } => {
                Self::Validation(format!("start {start} is after end {end}"))
            }
            ReportError::Store(inner) => Self::Store(inner.to_string()),
        }
    }
}
