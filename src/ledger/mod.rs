//! Ledger domain models: normalized transactions and the owning collection.

#[allow(clippy::module_inception)]
pub mod ledger;
pub mod transaction;

pub use ledger::{Ledger, LedgerSummary};
pub use transaction::{AmountSign, IngestRecord, Transaction};
