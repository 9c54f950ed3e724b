use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::{CalendarWindow, MonthKey};
use crate::errors::{LedgerError, Result};

use super::transaction::{IngestRecord, Transaction};

#[derive(Debug, Clone, Default, Serialize)]
/// In-memory collection of normalized transactions for one account, kept
/// sorted ascending by date. Date ties preserve insertion order.
///
/// Not thread-safe: `merge` is the only mutator and must not run concurrently
/// with any read. The engine holds exactly one ledger per process run, so the
/// type carries no locking.
pub struct Ledger {
    transactions: Vec<Transaction>,
}

// Hand-rolled so a deserialized ledger re-establishes the sorted-ascending
// invariant the query paths rely on.
impl<'de> Deserialize<'de> for Ledger {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct RawLedger {
            #[serde(default)]
            transactions: Vec<Transaction>,
        }

        let mut raw = RawLedger::deserialize(deserializer)?;
        raw.transactions.sort_by_key(|txn| txn.date);
        Ok(Self {
            transactions: raw.transactions,
        })
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Date range and size of a ledger, for display.
pub struct LedgerSummary {
    pub first_date: NaiveDate,
    pub last_date: NaiveDate,
    pub transaction_count: usize,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and appends a batch of ingested records, then re-sorts the
    /// collection by date. Batch-atomic: the first malformed record aborts
    /// the merge and leaves the ledger untouched.
    pub fn merge(&mut self, records: impl IntoIterator<Item = IngestRecord>) -> Result<usize> {
        let incoming = records
            .into_iter()
            .map(Transaction::try_from)
            .collect::<Result<Vec<_>>>()?;
        let merged = incoming.len();
        if merged > 0 {
            self.transactions.extend(incoming);
            self.transactions.sort_by_key(|txn| txn.date);
        }
        tracing::debug!(merged, total = self.transactions.len(), "merged records");
        Ok(merged)
    }

    /// Transactions whose date falls inside the half-open window, ascending.
    pub fn between(&self, window: &CalendarWindow) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|txn| window.contains(txn.date))
            .collect()
    }

    /// Date range and record count, or `EmptyLedger` when nothing has been
    /// merged yet.
    pub fn summary(&self) -> Result<LedgerSummary> {
        let first = self.transactions.first().ok_or(LedgerError::EmptyLedger)?;
        let last = self.transactions.last().ok_or(LedgerError::EmptyLedger)?;
        Ok(LedgerSummary {
            first_date: first.date,
            last_date: last.date,
            transaction_count: self.transactions.len(),
        })
    }

    /// Every category label observed in the ledger, sorted.
    pub fn categories(&self) -> BTreeSet<String> {
        self.transactions
            .iter()
            .map(|txn| txn.category.clone())
            .collect()
    }

    /// Every distinct month with at least one transaction, ascending.
    pub fn months(&self) -> Vec<MonthKey> {
        let keys: BTreeSet<MonthKey> = self
            .transactions
            .iter()
            .map(|txn| MonthKey::from_date(txn.date))
            .collect();
        keys.into_iter().collect()
    }

    /// The full date-ordered series, for raw operation plots.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn record(year: i32, month: u32, day: u32, amount: f64, category: &str) -> IngestRecord {
        IngestRecord::new(date(year, month, day), amount, category)
    }

    #[test]
    fn merge_sorts_by_date() {
        let mut ledger = Ledger::new();
        let merged = ledger
            .merge(vec![
                record(2025, 2, 10, -10.0, "Groceries"),
                record(2025, 1, 5, -20.0, "Groceries"),
                record(2025, 1, 20, 100.0, "Salary"),
            ])
            .unwrap();
        assert_eq!(merged, 3);
        let dates: Vec<NaiveDate> = ledger.transactions().iter().map(|t| t.date).collect();
        assert_eq!(
            dates,
            vec![date(2025, 1, 5), date(2025, 1, 20), date(2025, 2, 10)]
        );
    }

    #[test]
    fn merge_keeps_insertion_order_for_date_ties() {
        let mut ledger = Ledger::new();
        ledger
            .merge(vec![record(2025, 1, 5, -1.0, "First")])
            .unwrap();
        ledger
            .merge(vec![
                record(2025, 1, 5, -2.0, "Second"),
                record(2025, 1, 5, -3.0, "Third"),
            ])
            .unwrap();
        let categories: Vec<&str> = ledger
            .transactions()
            .iter()
            .map(|t| t.category.as_str())
            .collect();
        assert_eq!(categories, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn merge_rejects_malformed_batch_without_partial_merge() {
        let mut ledger = Ledger::new();
        ledger.merge(vec![record(2025, 1, 5, -1.0, "Kept")]).unwrap();

        let bad_batch = vec![
            record(2025, 1, 6, -2.0, "Valid"),
            IngestRecord {
                date: Some(date(2025, 1, 7)),
                ..Default::default()
            },
        ];
        let err = ledger.merge(bad_batch).unwrap_err();
        assert!(matches!(err, LedgerError::Schema(_)));
        assert_eq!(ledger.len(), 1, "malformed batch must not merge partially");
    }

    #[test]
    fn merging_empty_batch_changes_nothing() {
        let mut ledger = Ledger::new();
        ledger
            .merge(vec![record(2025, 1, 5, -20.0, "Groceries")])
            .unwrap();
        let before = ledger.summary().unwrap();

        assert_eq!(ledger.merge(Vec::new()).unwrap(), 0);
        assert_eq!(ledger.summary().unwrap(), before);
        let window = CalendarWindow::single_month(date(2025, 1, 1));
        assert_eq!(ledger.between(&window).len(), 1);
    }

    #[test]
    fn between_respects_half_open_window() {
        let mut ledger = Ledger::new();
        ledger
            .merge(vec![
                record(2024, 12, 31, -1.0, "Before"),
                record(2025, 1, 1, -2.0, "Start"),
                record(2025, 1, 31, -3.0, "Inside"),
                record(2025, 2, 1, -4.0, "Stop"),
            ])
            .unwrap();
        let window = CalendarWindow::single_month(date(2025, 1, 15));
        let picked: Vec<&str> = ledger
            .between(&window)
            .iter()
            .map(|t| t.category.as_str())
            .collect();
        assert_eq!(picked, vec!["Start", "Inside"]);
    }

    #[test]
    fn summary_fails_on_empty_ledger() {
        let ledger = Ledger::new();
        assert_eq!(ledger.summary().unwrap_err(), LedgerError::EmptyLedger);
    }

    #[test]
    fn summary_reports_date_range() {
        let mut ledger = Ledger::new();
        ledger
            .merge(vec![
                record(2025, 3, 10, -1.0, "A"),
                record(2025, 1, 5, -2.0, "B"),
            ])
            .unwrap();
        let summary = ledger.summary().unwrap();
        assert_eq!(summary.first_date, date(2025, 1, 5));
        assert_eq!(summary.last_date, date(2025, 3, 10));
        assert_eq!(summary.transaction_count, 2);
    }

    #[test]
    fn deserialized_ledger_restores_date_order() {
        let json = r#"{"transactions": [
            {"date": "2025-02-10", "amount": -10.0, "category": "Later"},
            {"date": "2025-01-05", "amount": -20.0, "category": "Earlier"}
        ]}"#;
        let ledger: Ledger = serde_json::from_str(json).unwrap();
        let dates: Vec<NaiveDate> = ledger.transactions().iter().map(|t| t.date).collect();
        assert_eq!(dates, vec![date(2025, 1, 5), date(2025, 2, 10)]);

        let window = CalendarWindow::new(date(2025, 1, 1), date(2025, 3, 1)).unwrap();
        let picked: Vec<&str> = ledger
            .between(&window)
            .iter()
            .map(|t| t.category.as_str())
            .collect();
        assert_eq!(picked, vec!["Earlier", "Later"]);
    }

    #[test]
    fn categories_and_months_are_sorted_and_distinct() {
        let mut ledger = Ledger::new();
        ledger
            .merge(vec![
                record(2025, 2, 10, -1.0, "Groceries"),
                record(2025, 1, 5, -2.0, "Transport"),
                record(2025, 1, 20, -3.0, "Groceries"),
            ])
            .unwrap();
        let categories: Vec<String> = ledger.categories().into_iter().collect();
        assert_eq!(categories, vec!["Groceries".to_string(), "Transport".to_string()]);
        assert_eq!(
            ledger.months(),
            vec![MonthKey::new(2025, 1), MonthKey::new(2025, 2)]
        );
    }
}
