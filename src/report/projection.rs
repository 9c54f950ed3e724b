use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::CalendarWindow;
use crate::ledger::{AmountSign, Ledger};
use crate::policy::CategoryPolicy;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
/// One dated signed amount in a projection series.
pub struct ProjectionPoint {
    pub date: NaiveDate,
    pub amount: f64,
}

/// Every windowed transaction with the requested sign, excluded categories
/// removed, ascending by date. The basis for both the expenses and the
/// income series; an empty window yields an empty series, not an error.
pub fn projection(
    ledger: &Ledger,
    window: &CalendarWindow,
    sign: AmountSign,
    policy: &CategoryPolicy,
) -> Vec<ProjectionPoint> {
    tracing::debug!(%window, ?sign, "building projection series");
    super::admitted(ledger, window, policy)
        .into_iter()
        .filter(|txn| sign.matches(txn.amount))
        .map(|txn| ProjectionPoint {
            date: txn.date,
            amount: txn.amount,
        })
        .collect()
}
