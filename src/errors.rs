use chrono::NaiveDate;
use thiserror::Error;

/// Error type that captures the aggregation engine's failure modes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    /// A record handed to `Ledger::merge` is missing a required field or
    /// carries a non-finite amount. The whole batch is rejected.
    #[error("Malformed record: {0}")]
    Schema(String),
    /// A summary or query was requested against a ledger with no records.
    #[error("Ledger contains no transactions")]
    EmptyLedger,
    /// A breakdown was requested for a month with no qualifying expenses.
    #[error("No qualifying expenses in {year}-{month:02}")]
    EmptyMonth { year: i32, month: u32 },
    /// A window was constructed with `start` after `stop`.
    #[error("Invalid window: start {start} is after stop {stop}")]
    InvalidWindow { start: NaiveDate, stop: NaiveDate },
}

pub type Result<T> = std::result::Result<T, LedgerError>;
