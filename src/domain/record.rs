use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::Category;

pub type RecordId = Uuid;

/// A single expense as it was entered on the form.
/// Records are immutable once created; the ledger never edits or removes them.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseRecord {
    pub id: RecordId,
    pub category: Category,
    /// Amount text exactly as typed
    pub amount: String,
    /// Parsed value of `amount`, cached at creation
    pub value: f64,
    /// When the record was added to the ledger
    pub recorded_at: DateTime<Utc>,
}

impl ExpenseRecord {
    /// Build a record from an amount that has already been validated.
    /// Use `ExpenseLedger::add` instead of calling this directly.
    pub(crate) fn new(category: Category, amount: String, value: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            category,
            amount,
            value,
            recorded_at: Utc::now(),
        }
    }
}
