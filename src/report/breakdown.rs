use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::{CalendarWindow, MonthKey};
use crate::errors::{LedgerError, Result};
use crate::ledger::Ledger;
use crate::policy::CategoryPolicy;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// One individually-listed category with its absolute monthly expense.
pub struct CategoryShare {
    pub category: String,
    pub amount: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// Expense shares for one month: categories above the contribution threshold
/// ascending by absolute value, everything below folded into `other`.
pub struct CategoryBreakdown {
    pub listed: Vec<CategoryShare>,
    pub other: f64,
    /// Total absolute expense for the month, for display alongside shares.
    pub total: f64,
}

/// Sums expense-sign amounts by category for the single month containing
/// `month`. A category is listed individually when its absolute share of the
/// total reaches `min_contribution_fraction`; smaller categories merge into
/// the "Other" value. Fails with `EmptyMonth` when no qualifying expense
/// exists, which also guards the contribution division.
pub fn category_breakdown(
    ledger: &Ledger,
    month: NaiveDate,
    policy: &CategoryPolicy,
) -> Result<CategoryBreakdown> {
    let window = CalendarWindow::single_month(month);
    tracing::debug!(%window, "building category breakdown");
    let mut sums: BTreeMap<&str, f64> = BTreeMap::new();
    for txn in super::admitted(ledger, &window, policy) {
        if txn.is_expense() {
            *sums.entry(txn.category.as_str()).or_insert(0.0) += txn.amount;
        }
    }

    let total: f64 = sums.values().map(|sum| sum.abs()).sum();
    if sums.is_empty() || total == 0.0 {
        let key = MonthKey::from_date(window.start);
        return Err(LedgerError::EmptyMonth {
            year: key.year,
            month: key.month,
        });
    }

    let mut listed = Vec::new();
    let mut other = 0.0;
    for (category, sum) in sums {
        let contribution = sum.abs();
        if contribution / total >= policy.min_contribution_fraction {
            listed.push(CategoryShare {
                category: category.to_string(),
                amount: contribution,
            });
        } else {
            other += contribution;
        }
    }
    // Smallest individually-listed category first; name breaks exact value
    // ties so the output stays reproducible.
    listed.sort_by(|a, b| {
        a.amount
            .partial_cmp(&b.amount)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.category.cmp(&b.category))
    });

    Ok(CategoryBreakdown {
        listed,
        other,
        total,
    })
}
