use tracing::debug;

use super::{format_total, parse_amount, Category, ExpenseRecord, ValidationError};

/// Append-only list of the expenses entered during one session.
///
/// The total is never stored; it is recomputed from the entries on every read.
#[derive(Debug, Clone, Default)]
pub struct ExpenseLedger {
    entries: Vec<ExpenseRecord>,
}

impl ExpenseLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate `amount` and append a new record.
    /// On error the ledger is left untouched.
    pub fn add(
        &mut self,
        category: Category,
        amount: impl Into<String>,
    ) -> Result<&ExpenseRecord, ValidationError> {
        let amount = amount.into();
        let value = parse_amount(&amount)?;

        // Each amount is finite on its own; the running sum must stay finite too.
        if !(self.total_value() + value).is_finite() {
            return Err(ValidationError::NotFinite(amount));
        }

        let record = ExpenseRecord::new(category, amount, value);
        debug!(id = %record.id, category = %record.category, amount = %record.amount, "expense added");

        let index = self.entries.len();
        self.entries.push(record);
        Ok(&self.entries[index])
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[ExpenseRecord] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Unrounded sum of every entry's value.
    pub fn total_value(&self) -> f64 {
        self.entries.iter().map(|e| e.value).sum()
    }

    /// Sum of every entry formatted as a whole number. "0" when empty.
    pub fn total(&self) -> String {
        format_total(self.total_value())
    }

    /// Subtotal per category, in picker order. Categories without entries are omitted.
    pub fn totals_by_category(&self) -> Vec<(Category, f64)> {
        Category::ALL
            .iter()
            .filter_map(|category| {
                let mut matching = self
                    .entries
                    .iter()
                    .filter(|e| e.category == *category)
                    .peekable();
                matching.peek()?;
                Some((*category, matching.map(|e| e.value).sum()))
            })
            .collect()
    }
}
