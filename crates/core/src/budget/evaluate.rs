//! Budget evaluation against actual spend.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::types::{
    AlertLevel, Budget, BudgetAlert, BudgetEvaluation, BudgetStatus, StatusThresholds,
};
use crate::aggregate::Aggregator;
use crate::ledger::{MoneyMovement, MovementFilter, MovementKind};
use crate::period::{DateWindow, resolve_window};

/// Evaluates budgets against the ledger.
pub struct BudgetEvaluator;

impl BudgetEvaluator {
    /// Evaluates a budget at `as_of` against the given movements.
    ///
    /// Budgets track spend: only `Expense` movements count, restricted to
    /// the budget's category when it has one. Returns `None` when the
    /// budget has no window covering `as_of` — callers skip the budget
    /// rather than reporting zero spend.
    #[must_use]
    pub fn evaluate(
        budget: &Budget,
        as_of: NaiveDate,
        movements: &[MoneyMovement],
        thresholds: &StatusThresholds,
    ) -> Option<BudgetEvaluation> {
        let window = resolve_window(budget, as_of)?;

        let mut filter = MovementFilter::for_business(budget.business_id)
            .with_kind(MovementKind::Expense)
            .within(window);
        if let Some(category) = budget.category_id {
            filter = filter.with_category(category);
        }

        let actual_spent = Aggregator::sum(movements, &filter);
        Some(Self::against_spend(budget, window, actual_spent, thresholds))
    }

    /// Builds the evaluation once the in-window spend is known.
    #[must_use]
    pub fn against_spend(
        budget: &Budget,
        window: DateWindow,
        actual_spent: Decimal,
        thresholds: &StatusThresholds,
    ) -> BudgetEvaluation {
        let remaining = budget.amount - actual_spent;
        let utilization = if budget.amount.is_zero() {
            Decimal::ZERO
        } else {
            actual_spent / budget.amount * Decimal::ONE_HUNDRED
        };

        BudgetEvaluation {
            budget_id: budget.id,
            budget_name: budget.name.clone(),
            period: budget.period,
            window,
            budget_amount: budget.amount,
            actual_spent,
            remaining,
            percentage_used: utilization.round_dp(2),
            status: Self::classify(actual_spent, budget.amount, utilization, thresholds),
        }
    }

    /// Three-way status split. Exceeding the amount wins over the
    /// percentage check.
    fn classify(
        actual_spent: Decimal,
        budget_amount: Decimal,
        utilization: Decimal,
        thresholds: &StatusThresholds,
    ) -> BudgetStatus {
        if actual_spent > budget_amount {
            BudgetStatus::Over
        } else if utilization >= thresholds.on_track_percent {
            BudgetStatus::OnTrack
        } else {
            BudgetStatus::Under
        }
    }

    /// Derives an alert from an evaluation, if one applies.
    ///
    /// Over-budget evaluations always alert. Approaching-limit alerts fire
    /// from the alert cutoff up to (but excluding) full utilization.
    #[must_use]
    pub fn alert_for(
        evaluation: &BudgetEvaluation,
        thresholds: &StatusThresholds,
    ) -> Option<BudgetAlert> {
        let level = match evaluation.status {
            BudgetStatus::Over => AlertLevel::OverBudget,
            BudgetStatus::OnTrack | BudgetStatus::Under
                if evaluation.percentage_used >= thresholds.alert_percent
                    && evaluation.percentage_used < Decimal::ONE_HUNDRED =>
            {
                AlertLevel::Approaching
            }
            BudgetStatus::OnTrack | BudgetStatus::Under => return None,
        };

        Some(BudgetAlert {
            budget_id: evaluation.budget_id,
            budget_name: evaluation.budget_name.clone(),
            level,
            budget_amount: evaluation.budget_amount,
            actual_spent: evaluation.actual_spent,
            remaining: evaluation.remaining,
            percentage_used: evaluation.percentage_used,
        })
    }
}
