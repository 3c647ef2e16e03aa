//! Budget data types.

use chrono::NaiveDate;
use lustre_shared::config::ReportingConfig;
use lustre_shared::types::{BudgetId, BusinessId, CategoryId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::BudgetError;
use crate::period::DateWindow;

/// Recurring period a budget's amount applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    /// One allowance per week.
    Weekly,
    /// One allowance per calendar month.
    Monthly,
    /// One allowance per calendar quarter.
    Quarterly,
    /// One allowance per calendar year.
    Yearly,
}

/// A planned spending cap for a category over a recurring period.
///
/// Budgets are an owner-only planning artifact; customers and suppliers
/// never see them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Budget {
    /// Budget ID.
    pub id: BudgetId,
    /// Business (tenant) this budget belongs to.
    pub business_id: BusinessId,
    /// Budget name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Category the cap applies to; `None` covers all categories.
    pub category_id: Option<CategoryId>,
    /// Budgeted amount per period, always positive.
    pub amount: Decimal,
    /// The recurring period.
    pub period: BudgetPeriod,
    /// First date the budget applies.
    pub start_date: NaiveDate,
    /// Last date the budget applies; `None` means open-ended.
    pub end_date: Option<NaiveDate>,
}

impl Budget {
    /// Checks the budget invariants: a positive amount and an end date, if
    /// set, no earlier than the start date.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError` naming the violated invariant.
    pub fn validate(&self) -> Result<(), BudgetError> {
        if self.amount <= Decimal::ZERO {
            return Err(BudgetError::NonPositiveAmount(self.amount));
        }
        if let Some(end) = self.end_date
            && end < self.start_date
        {
            return Err(BudgetError::EndBeforeStart {
                start: self.start_date,
                end,
            });
        }
        Ok(())
    }
}

/// Three-way budget status classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    /// Actual spend exceeds the budgeted amount.
    Over,
    /// Spend is at or above the on-track cutoff without exceeding the amount.
    OnTrack,
    /// Spend is below the on-track cutoff.
    Under,
}

/// Utilization cutoffs for status classification and alerts.
///
/// The exact percentages are a product decision with no documented
/// rationale, so they arrive from configuration rather than being
/// hard-coded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusThresholds {
    /// Utilization at or above which a budget is on track (default 90).
    pub on_track_percent: Decimal,
    /// Utilization at or above which an approaching-limit alert fires
    /// (default 80).
    pub alert_percent: Decimal,
}

impl Default for StatusThresholds {
    fn default() -> Self {
        ReportingConfig::default().into()
    }
}

impl From<ReportingConfig> for StatusThresholds {
    fn from(config: ReportingConfig) -> Self {
        Self {
            on_track_percent: config.on_track_percent,
            alert_percent: config.alert_percent,
        }
    }
}

/// A budget measured against actual spend over one resolved window.
///
/// Derived on every read, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetEvaluation {
    /// Budget ID.
    pub budget_id: BudgetId,
    /// Budget name.
    pub budget_name: String,
    /// The budget's recurring period.
    pub period: BudgetPeriod,
    /// The concrete window the evaluation covers.
    pub window: DateWindow,
    /// Budgeted amount for the window.
    pub budget_amount: Decimal,
    /// Actual expense total within the window.
    pub actual_spent: Decimal,
    /// `budget_amount - actual_spent`; negative when over budget.
    pub remaining: Decimal,
    /// `actual_spent / budget_amount * 100`, rounded to 2 decimal places.
    pub percentage_used: Decimal,
    /// Status classification.
    pub status: BudgetStatus,
}

/// Severity of a budget alert. Ordered most severe first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertLevel {
    /// Spend has exceeded the budgeted amount.
    OverBudget,
    /// Utilization is at or above the alert cutoff but under 100%.
    Approaching,
}

/// An alert raised from a budget evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetAlert {
    /// Budget ID.
    pub budget_id: BudgetId,
    /// Budget name.
    pub budget_name: String,
    /// Alert severity.
    pub level: AlertLevel,
    /// Budgeted amount for the window.
    pub budget_amount: Decimal,
    /// Actual expense total within the window.
    pub actual_spent: Decimal,
    /// Amount left before the cap; negative when over.
    pub remaining: Decimal,
    /// Utilization percentage.
    pub percentage_used: Decimal,
}
