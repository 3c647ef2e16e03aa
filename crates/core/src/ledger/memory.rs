//! In-memory ledger store.
//!
//! Reference implementation of [`LedgerStore`] used by the test suite and
//! by callers that want to evaluate reports over data they already hold.
//! Snapshots borrow the store, so it cannot be mutated while a read is in
//! flight.

use std::collections::HashMap;

use lustre_shared::types::{BusinessId, CategoryId, CustomerId, SupplierId};

use super::store::{CustomerRecord, LedgerStore, ReadSnapshot, StoreError, SupplierRecord};
use super::types::{MoneyMovement, MovementFilter};
use crate::budget::Budget;

/// In-memory ledger store.
#[derive(Debug, Default)]
pub struct MemoryLedger {
    movements: Vec<MoneyMovement>,
    budgets: Vec<Budget>,
    categories: HashMap<CategoryId, String>,
    customers: HashMap<CustomerId, CustomerRecord>,
    suppliers: HashMap<SupplierId, SupplierRecord>,
}

impl MemoryLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a movement.
    #[must_use]
    pub fn with_movement(mut self, movement: MoneyMovement) -> Self {
        self.movements.push(movement);
        self
    }

    /// Adds a budget.
    #[must_use]
    pub fn with_budget(mut self, budget: Budget) -> Self {
        self.budgets.push(budget);
        self
    }

    /// Registers a category display name.
    #[must_use]
    pub fn with_category(mut self, id: CategoryId, name: impl Into<String>) -> Self {
        self.categories.insert(id, name.into());
        self
    }

    /// Registers a customer.
    #[must_use]
    pub fn with_customer(mut self, record: CustomerRecord) -> Self {
        self.customers.insert(record.id, record);
        self
    }

    /// Registers a supplier.
    #[must_use]
    pub fn with_supplier(mut self, record: SupplierRecord) -> Self {
        self.suppliers.insert(record.id, record);
        self
    }
}

/// Snapshot over an in-memory ledger.
#[derive(Debug)]
pub struct MemorySnapshot<'a> {
    ledger: &'a MemoryLedger,
}

impl ReadSnapshot for MemorySnapshot<'_> {
    fn movements(&self, filter: &MovementFilter) -> Result<Vec<MoneyMovement>, StoreError> {
        Ok(self
            .ledger
            .movements
            .iter()
            .filter(|movement| filter.matches(movement))
            .cloned()
            .collect())
    }

    fn budgets(&self, business_id: BusinessId) -> Result<Vec<Budget>, StoreError> {
        Ok(self
            .ledger
            .budgets
            .iter()
            .filter(|budget| budget.business_id == business_id)
            .cloned()
            .collect())
    }

    fn category_name(&self, id: CategoryId) -> Result<Option<String>, StoreError> {
        Ok(self.ledger.categories.get(&id).cloned())
    }

    fn customer(&self, id: CustomerId) -> Result<Option<CustomerRecord>, StoreError> {
        Ok(self.ledger.customers.get(&id).cloned())
    }

    fn supplier(&self, id: SupplierId) -> Result<Option<SupplierRecord>, StoreError> {
        Ok(self.ledger.suppliers.get(&id).cloned())
    }
}

impl LedgerStore for MemoryLedger {
    type Snapshot<'a>
        = MemorySnapshot<'a>
    where
        Self: 'a;

    fn begin_read(&self) -> Result<Self::Snapshot<'_>, StoreError> {
        Ok(MemorySnapshot { ledger: self })
    }
}
