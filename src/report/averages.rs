use std::collections::{BTreeMap, BTreeSet};

use crate::calendar::{CalendarWindow, MonthKey};
use crate::ledger::Ledger;
use crate::policy::CategoryPolicy;

/// Per-category arithmetic mean of monthly signed sums over the window.
///
/// Months inside the window with no activity for a category contribute an
/// explicit zero to that category's series, so a category active in 2 of 6
/// months is averaged over all 6. Both signs participate; excluded
/// categories never appear. A window with no matching transactions yields an
/// empty map.
pub fn monthly_average(
    ledger: &Ledger,
    window: &CalendarWindow,
    policy: &CategoryPolicy,
) -> BTreeMap<String, f64> {
    tracing::debug!(%window, "computing monthly category averages");
    let mut monthly_sums: BTreeMap<(MonthKey, &str), f64> = BTreeMap::new();
    let mut observed: BTreeSet<&str> = BTreeSet::new();
    let admitted = super::admitted(ledger, window, policy);
    for txn in &admitted {
        let key = (MonthKey::from_date(txn.date), txn.category.as_str());
        *monthly_sums.entry(key).or_insert(0.0) += txn.amount;
        observed.insert(txn.category.as_str());
    }

    let months = window.month_span();
    let mut averages = BTreeMap::new();
    if observed.is_empty() || months.is_empty() {
        return averages;
    }

    for category in observed {
        // Zero-fill: every window month counts toward the denominator,
        // active or not.
        let total: f64 = months
            .iter()
            .map(|month| monthly_sums.get(&(*month, category)).copied().unwrap_or(0.0))
            .sum();
        averages.insert(category.to_string(), total / months.len() as f64);
    }
    averages
}
