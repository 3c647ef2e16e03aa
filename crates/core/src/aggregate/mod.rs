//! Decimal summation over filtered movements.
//!
//! The one place floating-point drift would silently corrupt financial
//! reports, so everything here is `Decimal`.

use rust_decimal::Decimal;

use crate::ledger::{MoneyMovement, MovementFilter};

/// Sums ledger movements matching a filter.
pub struct Aggregator;

impl Aggregator {
    /// Sums the amounts of the movements matching the filter.
    ///
    /// An empty result set sums to zero, never an error.
    #[must_use]
    pub fn sum(movements: &[MoneyMovement], filter: &MovementFilter) -> Decimal {
        movements
            .iter()
            .filter(|movement| filter.matches(movement))
            .map(|movement| movement.amount)
            .sum()
    }
}
