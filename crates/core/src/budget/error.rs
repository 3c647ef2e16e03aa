//! Budget error types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// Budget-related errors.
#[derive(Debug, Error)]
pub enum BudgetError {
    /// Budget amount must be positive.
    #[error("Budget amount must be positive, got {0}")]
    NonPositiveAmount(Decimal),

    /// End date precedes the start date.
    #[error("Budget end date {end} precedes start date {start}")]
    EndBeforeStart {
        /// Declared start date.
        start: NaiveDate,
        /// Declared end date.
        end: NaiveDate,
    },
}
