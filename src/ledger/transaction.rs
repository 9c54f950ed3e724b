use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::LedgerError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// A normalized bank transaction. Immutable once ingested; duplicates are
/// legal (two identical real-world charges are two records).
pub struct Transaction {
    /// Calendar day of the operation; time of day carries no meaning.
    pub date: NaiveDate,
    /// Signed amount: negative = debit/expense, positive = credit/income.
    pub amount: f64,
    /// Category label from the open set observed in the data.
    pub category: String,
    /// Optional secondary label, unused by aggregation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
}

impl Transaction {
    pub fn new(date: NaiveDate, amount: f64, category: impl Into<String>) -> Self {
        Self {
            date,
            amount,
            category: category.into(),
            subcategory: None,
        }
    }

    pub fn with_subcategory(mut self, subcategory: impl Into<String>) -> Self {
        self.subcategory = Some(subcategory.into());
        self
    }

    /// Returns true if this is an expense (negative amount).
    pub fn is_expense(&self) -> bool {
        self.amount < 0.0
    }

    /// Returns true if this is income (positive amount).
    pub fn is_income(&self) -> bool {
        self.amount > 0.0
    }

    pub fn abs_amount(&self) -> f64 {
        self.amount.abs()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
/// Wire shape delivered by ingestion adapters before validation. Every field
/// is optional so partially-populated rows deserialize and are rejected with
/// a schema error at merge time instead of a parse panic.
pub struct IngestRecord {
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub subcategory: Option<String>,
}

impl IngestRecord {
    pub fn new(date: NaiveDate, amount: f64, category: impl Into<String>) -> Self {
        Self {
            date: Some(date),
            amount: Some(amount),
            category: Some(category.into()),
            subcategory: None,
        }
    }
}

impl TryFrom<IngestRecord> for Transaction {
    type Error = LedgerError;

    fn try_from(record: IngestRecord) -> Result<Self, Self::Error> {
        let date = record
            .date
            .ok_or_else(|| LedgerError::Schema("record is missing a date".into()))?;
        let amount = record
            .amount
            .ok_or_else(|| LedgerError::Schema("record is missing an amount".into()))?;
        if !amount.is_finite() {
            return Err(LedgerError::Schema(format!(
                "amount `{amount}` is not a finite number"
            )));
        }
        let category = match record.category {
            Some(label) if !label.trim().is_empty() => label,
            _ => return Err(LedgerError::Schema("record is missing a category".into())),
        };
        Ok(Self {
            date,
            amount,
            category,
            subcategory: record.subcategory,
        })
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Selects one side of the signed-amount axis for projections.
pub enum AmountSign {
    Expense,
    Income,
}

impl AmountSign {
    /// Strict sign test: zero-amount rows match neither side, keeping them
    /// out of ratio computations.
    pub fn matches(&self, amount: f64) -> bool {
        match self {
            AmountSign::Expense => amount < 0.0,
            AmountSign::Income => amount > 0.0,
        }
    }
}
