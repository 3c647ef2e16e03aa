//! Budget tracking and evaluation.

pub mod error;
pub mod evaluate;
pub mod types;

#[cfg(test)]
mod props;

pub use error::BudgetError;
pub use evaluate::BudgetEvaluator;
pub use types::{
    AlertLevel, Budget, BudgetAlert, BudgetEvaluation, BudgetPeriod, BudgetStatus,
    StatusThresholds,
};
