//! Money movement records and the ledger store interface.
//!
//! This module defines the read-only boundary between the reporting engine
//! and the persistence layer:
//! - Movement domain types and filters
//! - The store traits reports are computed against
//! - An in-memory reference store

pub mod memory;
pub mod store;
pub mod types;

pub use memory::MemoryLedger;
pub use store::{CustomerRecord, LedgerStore, ReadSnapshot, StoreError, SupplierRecord};
pub use types::{Counterpart, MoneyMovement, MovementFilter, MovementKind};
