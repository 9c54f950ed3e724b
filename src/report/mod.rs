//! Report queries over a ledger snapshot: projections, monthly averages,
//! cumulative expense totals, and category breakdowns.
//!
//! Every query is pure, scopes itself with [`Ledger::between`], and drops
//! transactions from excluded categories before any other computation.

pub mod averages;
pub mod breakdown;
pub mod cumulative;
pub mod projection;

pub use averages::monthly_average;
pub use breakdown::{category_breakdown, CategoryBreakdown, CategoryShare};
pub use cumulative::{cumulative_between, cumulative_monthly, CumulativePoint};
pub use projection::{projection, ProjectionPoint};

use crate::calendar::CalendarWindow;
use crate::ledger::{Ledger, Transaction};
use crate::policy::CategoryPolicy;

/// Window-scoped transactions with excluded categories already removed,
/// ascending by date.
fn admitted<'a>(
    ledger: &'a Ledger,
    window: &CalendarWindow,
    policy: &CategoryPolicy,
) -> Vec<&'a Transaction> {
    ledger
        .between(window)
        .into_iter()
        .filter(|txn| !policy.is_excluded(&txn.category))
        .collect()
}
