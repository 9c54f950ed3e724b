use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::{CalendarWindow, MonthKey};
use crate::ledger::Ledger;
use crate::policy::CategoryPolicy;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
/// One step of a within-month running expense total.
pub struct CumulativePoint {
    pub date: NaiveDate,
    pub running_total: f64,
}

/// Running expense totals over the window, resetting to zero at every month
/// boundary. Only negative-amount, non-excluded transactions participate, so
/// within any one month the series is monotonically non-increasing; callers
/// take the absolute value for display.
pub fn cumulative_between(
    ledger: &Ledger,
    window: &CalendarWindow,
    policy: &CategoryPolicy,
) -> Vec<CumulativePoint> {
    tracing::debug!(%window, "cumulating monthly expenses");
    let mut series = Vec::new();
    let mut current_month: Option<MonthKey> = None;
    let mut running = 0.0;
    for txn in super::admitted(ledger, window, policy) {
        if !txn.is_expense() {
            continue;
        }
        let month = MonthKey::from_date(txn.date);
        if current_month != Some(month) {
            current_month = Some(month);
            running = 0.0;
        }
        running += txn.amount;
        series.push(CumulativePoint {
            date: txn.date,
            running_total: running,
        });
    }
    series
}

/// Running expense totals for the single month containing `month`, over the
/// implicit window `[first_of_month, first_of_next_month)`.
pub fn cumulative_monthly(
    ledger: &Ledger,
    month: NaiveDate,
    policy: &CategoryPolicy,
) -> Vec<CumulativePoint> {
    cumulative_between(ledger, &CalendarWindow::single_month(month), policy)
}
