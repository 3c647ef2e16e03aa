//! Property-based tests for budget evaluation.

use chrono::NaiveDate;
use lustre_shared::types::{BudgetId, BusinessId};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::evaluate::BudgetEvaluator;
use super::types::{Budget, BudgetPeriod, BudgetStatus, StatusThresholds};
use crate::period::DateWindow;

fn budget_with_amount(amount: Decimal) -> Budget {
    Budget {
        id: BudgetId::new(),
        business_id: BusinessId::new(),
        name: "Property Budget".to_string(),
        description: None,
        category_id: None,
        amount,
        period: BudgetPeriod::Monthly,
        start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        end_date: None,
    }
}

fn march_window() -> DateWindow {
    DateWindow::new(
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
    )
}

proptest! {
    /// remaining is exactly amount - actual_spent, for any amounts.
    #[test]
    fn test_remaining_is_exact(
        amount_cents in 1i64..1_000_000_000,
        spent_cents in 0i64..1_000_000_000,
    ) {
        let amount = Decimal::new(amount_cents, 2);
        let spent = Decimal::new(spent_cents, 2);
        let budget = budget_with_amount(amount);

        let evaluation = BudgetEvaluator::against_spend(
            &budget,
            march_window(),
            spent,
            &StatusThresholds::default(),
        );

        prop_assert_eq!(evaluation.remaining, amount - spent);
    }

    /// Over iff actual_spent > amount, regardless of the percentage check.
    #[test]
    fn test_over_iff_spent_exceeds_amount(
        amount_cents in 1i64..1_000_000_000,
        spent_cents in 0i64..1_000_000_000,
    ) {
        let amount = Decimal::new(amount_cents, 2);
        let spent = Decimal::new(spent_cents, 2);
        let budget = budget_with_amount(amount);

        let evaluation = BudgetEvaluator::against_spend(
            &budget,
            march_window(),
            spent,
            &StatusThresholds::default(),
        );

        prop_assert_eq!(evaluation.status == BudgetStatus::Over, spent > amount);
    }

    /// percentage_used matches spent / amount * 100 within display rounding.
    #[test]
    fn test_percentage_used_calculation(
        amount_cents in 1i64..1_000_000_000,
        spent_cents in 0i64..1_000_000_000,
    ) {
        let amount = Decimal::new(amount_cents, 2);
        let spent = Decimal::new(spent_cents, 2);
        let budget = budget_with_amount(amount);

        let evaluation = BudgetEvaluator::against_spend(
            &budget,
            march_window(),
            spent,
            &StatusThresholds::default(),
        );

        let expected = (spent / amount * dec!(100)).round_dp(2);
        prop_assert_eq!(evaluation.percentage_used, expected);
    }

    /// Spending the whole amount exactly is on track, never over.
    #[test]
    fn test_exact_spend_is_on_track(amount_cents in 1i64..1_000_000_000) {
        let amount = Decimal::new(amount_cents, 2);
        let budget = budget_with_amount(amount);

        let evaluation = BudgetEvaluator::against_spend(
            &budget,
            march_window(),
            amount,
            &StatusThresholds::default(),
        );

        prop_assert_eq!(evaluation.percentage_used, dec!(100.00));
        prop_assert_eq!(evaluation.status, BudgetStatus::OnTrack);
    }
}
