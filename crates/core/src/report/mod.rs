//! Scoped financial report generation.
//!
//! The facade external callers use:
//! - Budget-vs-actual reports and alerts (owner-only)
//! - Role-scoped ledger summaries

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod service_props;

pub use error::ReportError;
pub use service::ReportService;
pub use types::{CategorySummary, LedgerSummary, UNCATEGORIZED};
