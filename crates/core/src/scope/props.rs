//! Property-based tests for access scoping.
//!
//! The core guarantee: a scoped caller's totals never include any movement
//! that is not theirs, for any generated ledger.

use chrono::NaiveDate;
use lustre_shared::types::{BusinessId, CustomerId, MovementId, SupplierId, UserId};
use proptest::prelude::*;
use rust_decimal::Decimal;
use uuid::Uuid;

use super::{Principal, ScopePredicate};
use crate::aggregate::Aggregator;
use crate::ledger::{Counterpart, MoneyMovement, MovementKind};
use crate::period::DateWindow;

fn business() -> BusinessId {
    BusinessId::from_uuid(Uuid::from_u128(1))
}

fn customer_pool(index: u8) -> CustomerId {
    CustomerId::from_uuid(Uuid::from_u128(100 + u128::from(index)))
}

fn supplier_pool(index: u8) -> SupplierId {
    SupplierId::from_uuid(Uuid::from_u128(200 + u128::from(index)))
}

fn full_year() -> DateWindow {
    DateWindow::new(
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
    )
}

/// Strategy for one generated movement: (cents, is_income, counterpart tag,
/// pool index, day of year).
fn movement_strategy() -> impl Strategy<Value = MoneyMovement> {
    (1i64..1_000_000, any::<bool>(), 0u8..3, 0u8..3, 0u64..365).prop_map(
        |(cents, is_income, tag, index, day)| {
            let counterpart = match tag {
                0 => Counterpart::Customer(customer_pool(index)),
                1 => Counterpart::Supplier(supplier_pool(index)),
                _ => Counterpart::None,
            };
            MoneyMovement {
                id: MovementId::new(),
                business_id: business(),
                amount: Decimal::new(cents, 2),
                kind: if is_income {
                    MovementKind::Income
                } else {
                    MovementKind::Expense
                },
                category_id: None,
                counterpart,
                occurred_on: NaiveDate::from_ymd_opt(2024, 1, 1)
                    .unwrap()
                    .checked_add_days(chrono::Days::new(day))
                    .unwrap(),
                recorded_by: UserId::new(),
                description: None,
            }
        },
    )
}

proptest! {
    /// A customer's scoped sum never exceeds the unscoped sum, and equals
    /// the sum filtered manually by counterpart.
    #[test]
    fn test_customer_scope_never_leaks(
        movements in prop::collection::vec(movement_strategy(), 0..60),
    ) {
        let customer = customer_pool(0);
        let scope =
            ScopePredicate::for_principal(&Principal::customer(business(), customer));
        let filter = scope.filter(full_year());

        let scoped_sum = Aggregator::sum(&movements, &filter);
        let unscoped_sum: Decimal = movements.iter().map(|m| m.amount).sum();
        let manual_sum: Decimal = movements
            .iter()
            .filter(|m| m.kind == MovementKind::Income && m.counterpart.is_customer(customer))
            .map(|m| m.amount)
            .sum();

        prop_assert!(scoped_sum <= unscoped_sum);
        prop_assert_eq!(scoped_sum, manual_sum);
    }

    /// Same guarantee for suppliers, over expenses.
    #[test]
    fn test_supplier_scope_never_leaks(
        movements in prop::collection::vec(movement_strategy(), 0..60),
    ) {
        let supplier = supplier_pool(0);
        let scope =
            ScopePredicate::for_principal(&Principal::supplier(business(), supplier));
        let filter = scope.filter(full_year());

        let scoped_sum = Aggregator::sum(&movements, &filter);
        let manual_sum: Decimal = movements
            .iter()
            .filter(|m| m.kind == MovementKind::Expense && m.counterpart.is_supplier(supplier))
            .map(|m| m.amount)
            .sum();

        prop_assert_eq!(scoped_sum, manual_sum);
    }

    /// The pushed-down filter and the membership predicate agree on every
    /// generated movement.
    #[test]
    fn test_filter_and_allows_agree(
        movements in prop::collection::vec(movement_strategy(), 0..60),
    ) {
        let principals = [
            Principal::admin(business(), UserId::new()),
            Principal::customer(business(), customer_pool(1)),
            Principal::supplier(business(), supplier_pool(2)),
        ];

        for principal in &principals {
            let scope = ScopePredicate::for_principal(principal);
            let filter = scope.filter(full_year());
            for movement in &movements {
                prop_assert_eq!(filter.matches(movement), scope.allows(movement));
            }
        }
    }
}
