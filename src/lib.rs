#![doc(test(attr(deny(warnings))))]

//! Ledger Insights turns normalized bank transactions into the numeric
//! series behind budgeting reports: sign-filtered projections, per-category
//! monthly averages, within-month cumulative expense totals, and monthly
//! category breakdowns.
//!
//! The crate is a pure aggregation engine. Parsing bank exports into
//! [`ledger::IngestRecord`]s and rendering the resulting series are the
//! responsibility of external adapters.

pub mod calendar;
pub mod errors;
pub mod ledger;
pub mod policy;
pub mod report;
pub mod utils;

pub use calendar::{first_of_month, first_of_next_month, CalendarWindow, MonthKey};
pub use errors::{LedgerError, Result};
pub use ledger::{AmountSign, IngestRecord, Ledger, LedgerSummary, Transaction};
pub use policy::CategoryPolicy;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Ledger Insights tracing initialized.");
    });
}
