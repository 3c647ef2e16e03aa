//! Principal-based access scoping.
//!
//! Maps an authenticated principal to the subset of ledger data it may
//! see. Principals are always explicit arguments; nothing in this crate
//! reads ambient session state. The scope is pushed into the store query
//! (see [`ScopePredicate::filter`]) so aggregation never observes rows the
//! caller may not see, even in summary totals.

use lustre_shared::types::{BusinessId, CustomerId, SupplierId, UserId};
use serde::{Deserialize, Serialize};

use crate::ledger::{Counterpart, MoneyMovement, MovementFilter, MovementKind};
use crate::period::DateWindow;

#[cfg(test)]
mod props;

/// Role of an authenticated caller, carrying its identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "role", content = "id")]
pub enum Role {
    /// Business owner or staff; sees everything within the business.
    Admin(UserId),
    /// A customer; sees only their own purchases.
    Customer(CustomerId),
    /// A supplier; sees only the business's purchases from them.
    Supplier(SupplierId),
}

/// The authenticated caller a report is generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Business (tenant) context of the request.
    pub business_id: BusinessId,
    /// The caller's role and identity.
    pub role: Role,
}

impl Principal {
    /// An admin principal.
    #[must_use]
    pub const fn admin(business_id: BusinessId, user_id: UserId) -> Self {
        Self {
            business_id,
            role: Role::Admin(user_id),
        }
    }

    /// A customer principal.
    #[must_use]
    pub const fn customer(business_id: BusinessId, customer_id: CustomerId) -> Self {
        Self {
            business_id,
            role: Role::Customer(customer_id),
        }
    }

    /// A supplier principal.
    #[must_use]
    pub const fn supplier(business_id: BusinessId, supplier_id: SupplierId) -> Self {
        Self {
            business_id,
            role: Role::Supplier(supplier_id),
        }
    }

    /// Budgets are an owner-only planning artifact.
    #[must_use]
    pub const fn can_view_budgets(&self) -> bool {
        matches!(self.role, Role::Admin(_))
    }
}

/// Which movements a principal may see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Visibility {
    /// Everything within the business.
    All,
    /// Only income movements whose counterpart is this customer.
    CustomerIncome(CustomerId),
    /// Only expense movements whose counterpart is this supplier.
    SupplierExpense(SupplierId),
}

/// The restriction of visible ledger rows for one principal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopePredicate {
    business_id: BusinessId,
    visibility: Visibility,
}

impl ScopePredicate {
    /// Resolves the scope for a principal.
    #[must_use]
    pub const fn for_principal(principal: &Principal) -> Self {
        let visibility = match principal.role {
            Role::Admin(_) => Visibility::All,
            Role::Customer(customer_id) => Visibility::CustomerIncome(customer_id),
            Role::Supplier(supplier_id) => Visibility::SupplierExpense(supplier_id),
        };
        Self {
            business_id: principal.business_id,
            visibility,
        }
    }

    /// Builds the store-level filter for movements within the window.
    ///
    /// The restriction travels with the query, so scoped callers never
    /// materialize other parties' rows in the first place.
    #[must_use]
    pub const fn filter(&self, window: DateWindow) -> MovementFilter {
        let filter = MovementFilter::for_business(self.business_id).within(window);
        match self.visibility {
            Visibility::All => filter,
            Visibility::CustomerIncome(customer_id) => filter
                .with_kind(MovementKind::Income)
                .with_counterpart(Counterpart::Customer(customer_id)),
            Visibility::SupplierExpense(supplier_id) => filter
                .with_kind(MovementKind::Expense)
                .with_counterpart(Counterpart::Supplier(supplier_id)),
        }
    }

    /// Membership form of the same restriction.
    #[must_use]
    pub fn allows(&self, movement: &MoneyMovement) -> bool {
        if movement.business_id != self.business_id {
            return false;
        }
        match self.visibility {
            Visibility::All => true,
            Visibility::CustomerIncome(customer_id) => {
                movement.kind == MovementKind::Income
                    && movement.counterpart.is_customer(customer_id)
            }
            Visibility::SupplierExpense(supplier_id) => {
                movement.kind == MovementKind::Expense
                    && movement.counterpart.is_supplier(supplier_id)
            }
        }
    }
}
