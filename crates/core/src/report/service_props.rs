//! Property-based tests for the reporting facade.

use chrono::NaiveDate;
use lustre_shared::types::{BusinessId, CustomerId, MovementId, SupplierId, UserId};
use proptest::prelude::*;
use rust_decimal::Decimal;
use uuid::Uuid;

use super::service::ReportService;
use crate::ledger::{Counterpart, CustomerRecord, MemoryLedger, MoneyMovement, MovementKind};
use crate::period::DateWindow;
use crate::scope::Principal;

fn business() -> BusinessId {
    BusinessId::from_uuid(Uuid::from_u128(1))
}

fn known_customer() -> CustomerId {
    CustomerId::from_uuid(Uuid::from_u128(100))
}

fn full_year() -> DateWindow {
    DateWindow::new(
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
    )
}

fn movement_strategy() -> impl Strategy<Value = MoneyMovement> {
    (1i64..1_000_000, any::<bool>(), 0u8..3, 0u64..365).prop_map(
        |(cents, is_income, tag, day)| {
            let counterpart = match tag {
                0 => Counterpart::Customer(known_customer()),
                1 => Counterpart::Supplier(SupplierId::from_uuid(Uuid::from_u128(200))),
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

fn ledger_from(movements: Vec<MoneyMovement>) -> MemoryLedger {
    movements
        .into_iter()
        .fold(
            MemoryLedger::new().with_customer(CustomerRecord {
                id: known_customer(),
                business_id: business(),
                name: "@regular".to_string(),
            }),
            MemoryLedger::with_movement,
        )
}

proptest! {
    /// A customer's summary reflects exactly their own purchases and never
    /// exceeds the admin view of the same ledger.
    #[test]
    fn test_customer_summary_is_exactly_own_purchases(
        movements in prop::collection::vec(movement_strategy(), 0..60),
    ) {
        let expected: Decimal = movements
            .iter()
            .filter(|m| {
                m.kind == MovementKind::Income && m.counterpart.is_customer(known_customer())
            })
            .map(|m| m.amount)
            .sum();

        let store = ledger_from(movements);
        let service = ReportService::default();

        let customer_view = service
            .ledger_summary(
                &store,
                &Principal::customer(business(), known_customer()),
                full_year(),
            )
            .unwrap();
        let admin_view = service
            .ledger_summary(
                &store,
                &Principal::admin(business(), UserId::new()),
                full_year(),
            )
            .unwrap();

        prop_assert_eq!(customer_view.total_income, expected);
        prop_assert_eq!(customer_view.total_expense, Decimal::ZERO);
        prop_assert!(customer_view.total_income <= admin_view.total_income);
    }

    /// Identical arguments against an unchanged ledger return identical
    /// results.
    #[test]
    fn test_summary_is_a_pure_function_of_stored_state(
        movements in prop::collection::vec(movement_strategy(), 0..60),
    ) {
        let store = ledger_from(movements);
        let service = ReportService::default();
        let principal = Principal::admin(business(), UserId::new());

        let first = service.ledger_summary(&store, &principal, full_year()).unwrap();
        let second = service.ledger_summary(&store, &principal, full_year()).unwrap();

        prop_assert_eq!(first, second);
    }
}
