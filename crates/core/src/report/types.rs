//! Report data types.

use lustre_shared::types::CategoryId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::period::DateWindow;

/// Display name for movements with no resolvable category.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Income and expense totals over a date range, for one principal's scope.
///
/// Computed fresh from the store on every call; a pure function of stored
/// state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSummary {
    /// The range the summary covers.
    pub range: DateWindow,
    /// Total income within scope.
    pub total_income: Decimal,
    /// Total expense within scope.
    pub total_expense: Decimal,
    /// `total_income - total_expense`.
    pub net: Decimal,
    /// Per-category breakdown, largest totals first.
    pub by_category: Vec<CategorySummary>,
}

/// Totals for a single category bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    /// Category, or `None` for the uncategorized bucket.
    pub category_id: Option<CategoryId>,
    /// Display name, resolved at this boundary.
    pub name: String,
    /// Income total for the bucket.
    pub income: Decimal,
    /// Expense total for the bucket.
    pub expense: Decimal,
}

impl CategorySummary {
    /// Combined income and expense volume, used for ordering.
    #[must_use]
    pub fn volume(&self) -> Decimal {
        self.income + self.expense
    }
}
