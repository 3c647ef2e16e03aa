//! Money movement domain types.
//!
//! A [`MoneyMovement`] is a single dated income or expense entry in the
//! ledger. This subsystem is a read-only consumer: movements are created by
//! the transaction-entry endpoints and never mutated here.

use chrono::NaiveDate;
use lustre_shared::types::{BusinessId, CategoryId, CustomerId, MovementId, SupplierId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::period::DateWindow;

/// Direction of a money movement.
///
/// Direction is carried by the kind, never by the sign of the amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementKind {
    /// Money coming into the business (e.g. a customer sale).
    Income,
    /// Money leaving the business (e.g. a supplier purchase).
    Expense,
}

/// The external party on the other side of a movement, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type", content = "id")]
pub enum Counterpart {
    /// A customer of the business.
    Customer(CustomerId),
    /// A supplier of the business.
    Supplier(SupplierId),
    /// No external party (e.g. an internal adjustment).
    None,
}

impl Counterpart {
    /// Returns true if this counterpart is the given customer.
    #[must_use]
    pub fn is_customer(&self, id: CustomerId) -> bool {
        matches!(self, Self::Customer(c) if *c == id)
    }

    /// Returns true if this counterpart is the given supplier.
    #[must_use]
    pub fn is_supplier(&self, id: SupplierId) -> bool {
        matches!(self, Self::Supplier(s) if *s == id)
    }
}

/// A single dated money movement in the ledger.
///
/// Invariant: `amount` is always non-negative; [`MovementKind`] carries the
/// direction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoneyMovement {
    /// Movement ID.
    pub id: MovementId,
    /// Business (tenant) this movement belongs to.
    pub business_id: BusinessId,
    /// Amount moved, always non-negative.
    pub amount: Decimal,
    /// Whether this is income or expense.
    pub kind: MovementKind,
    /// Category, if the movement was categorized.
    pub category_id: Option<CategoryId>,
    /// External party on the other side, if any.
    pub counterpart: Counterpart,
    /// The date the movement occurred.
    pub occurred_on: NaiveDate,
    /// User who recorded the movement.
    pub recorded_by: UserId,
    /// Free-form description.
    pub description: Option<String>,
}

/// Filter over ledger movements.
///
/// Built by callers and pushed down to the store, so scoped queries never
/// materialize rows the caller may not see.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovementFilter {
    /// Business (tenant) to query, always required.
    pub business_id: BusinessId,
    /// Restrict to a movement kind.
    pub kind: Option<MovementKind>,
    /// Restrict to a category.
    pub category_id: Option<CategoryId>,
    /// Restrict to an exact counterpart.
    pub counterpart: Option<Counterpart>,
    /// Restrict to movements occurring within a window.
    pub window: Option<DateWindow>,
}

impl MovementFilter {
    /// Creates a filter matching every movement of a business.
    #[must_use]
    pub const fn for_business(business_id: BusinessId) -> Self {
        Self {
            business_id,
            kind: None,
            category_id: None,
            counterpart: None,
            window: None,
        }
    }

    /// Restricts the filter to a movement kind.
    #[must_use]
    pub const fn with_kind(mut self, kind: MovementKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Restricts the filter to a category.
    #[must_use]
    pub const fn with_category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Restricts the filter to an exact counterpart.
    #[must_use]
    pub const fn with_counterpart(mut self, counterpart: Counterpart) -> Self {
        self.counterpart = Some(counterpart);
        self
    }

    /// Restricts the filter to movements occurring within the window.
    #[must_use]
    pub const fn within(mut self, window: DateWindow) -> Self {
        self.window = Some(window);
        self
    }

    /// Returns true if the movement satisfies every restriction.
    #[must_use]
    pub fn matches(&self, movement: &MoneyMovement) -> bool {
        self.business_id == movement.business_id
            && self.kind.is_none_or(|kind| kind == movement.kind)
            && self
                .category_id
                .is_none_or(|category| movement.category_id == Some(category))
            && self
                .counterpart
                .is_none_or(|counterpart| counterpart == movement.counterpart)
            && self
                .window
                .is_none_or(|window| window.contains(movement.occurred_on))
    }
}
