//! Ledger store interface.
//!
//! Persistence is owned by an external layer; this subsystem only reads.
//! A [`LedgerStore`] hands out one [`ReadSnapshot`] per report request so
//! that a report spanning several aggregate queries observes a single point
//! in time.

use lustre_shared::types::{BusinessId, CategoryId, CustomerId, SupplierId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::types::{MoneyMovement, MovementFilter};
use crate::budget::Budget;

/// Errors surfaced by the ledger store.
///
/// These indicate store-layer problems, not reporting-logic problems, and
/// are propagated to callers unchanged.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A read snapshot could not be opened.
    #[error("failed to open read snapshot: {0}")]
    Snapshot(String),

    /// A query against the store failed.
    #[error("ledger query failed: {0}")]
    Query(String),
}

/// A customer record as resolved by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerRecord {
    /// Customer ID.
    pub id: CustomerId,
    /// Business the customer belongs to.
    pub business_id: BusinessId,
    /// Display name.
    pub name: String,
}

/// A supplier record as resolved by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplierRecord {
    /// Supplier ID.
    pub id: SupplierId,
    /// Business the supplier belongs to.
    pub business_id: BusinessId,
    /// Display name.
    pub name: String,
}

/// Read operations available within a single snapshot.
pub trait ReadSnapshot {
    /// Returns the movements matching the filter.
    fn movements(&self, filter: &MovementFilter) -> Result<Vec<MoneyMovement>, StoreError>;

    /// Returns every budget declared for the business.
    fn budgets(&self, business_id: BusinessId) -> Result<Vec<Budget>, StoreError>;

    /// Resolves a category to its display name, if the category exists.
    fn category_name(&self, id: CategoryId) -> Result<Option<String>, StoreError>;

    /// Resolves a customer record, if the customer exists.
    fn customer(&self, id: CustomerId) -> Result<Option<CustomerRecord>, StoreError>;

    /// Resolves a supplier record, if the supplier exists.
    fn supplier(&self, id: SupplierId) -> Result<Option<SupplierRecord>, StoreError>;
}

/// A store that can open consistent read snapshots.
pub trait LedgerStore {
    /// The snapshot type, borrowing from the store.
    type Snapshot<'a>: ReadSnapshot
    where
        Self: 'a;

    /// Opens a read snapshot. Dropped when the report returns.
    fn begin_read(&self) -> Result<Self::Snapshot<'_>, StoreError>;
}
