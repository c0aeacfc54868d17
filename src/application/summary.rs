use std::fmt;

use chrono::{DateTime, Utc};

use crate::domain::{format_total, Category, ExpenseLedger};

/// Unit appended to every amount shown to the user.
pub const UNIT: &str = "won";

/// One line of the expense list on the summary screen.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub category: Category,
    pub amount: String,
    pub recorded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: String,
}

/// Snapshot of a ledger as the summary screen shows it.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub total: String,
    pub rows: Vec<SummaryRow>,
    pub by_category: Vec<CategoryTotal>,
}

impl Summary {
    pub fn from_ledger(ledger: &ExpenseLedger) -> Self {
        let rows = ledger
            .entries()
            .iter()
            .map(|e| SummaryRow {
                category: e.category,
                amount: e.amount.clone(),
                recorded_at: e.recorded_at,
            })
            .collect();

        let by_category = ledger
            .totals_by_category()
            .into_iter()
            .map(|(category, value)| CategoryTotal {
                category,
                total: format_total(value),
            })
            .collect();

        Self {
            total: ledger.total(),
            rows,
            by_category,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total spent: {} {}", self.total, UNIT)?;
        if self.rows.is_empty() {
            return writeln!(f, "No expenses yet.");
        }

        writeln!(f, "{}", "-".repeat(36))?;
        for row in &self.rows {
            writeln!(
                f,
                "{:<16} {:>15} {}",
                row.category.label(),
                row.amount,
                UNIT
            )?;
        }

        writeln!(f, "By category:")?;
        for subtotal in &self.by_category {
            writeln!(
                f,
                "  {:<14} {:>15} {}",
                subtotal.category.label(),
                subtotal.total,
                UNIT
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_of_empty_ledger() {
        let summary = Summary::from_ledger(&ExpenseLedger::new());
        assert!(summary.is_empty());
        assert_eq!(summary.total, "0");
        assert_eq!(summary.to_string(), "Total spent: 0 won\nNo expenses yet.\n");
    }

    #[test]
    fn test_summary_rows_keep_entered_text() {
        let mut ledger = ExpenseLedger::new();
        ledger.add(Category::Food, "12000").unwrap();
        ledger.add(Category::Leisure, "3500.75").unwrap();
        ledger.add(Category::Food, "0.25").unwrap();

        let summary = Summary::from_ledger(&ledger);

        assert_eq!(summary.total, "15501");
        let rows: Vec<_> = summary
            .rows
            .iter()
            .map(|r| (r.category, r.amount.as_str()))
            .collect();
        assert_eq!(
            rows,
            vec![
                (Category::Food, "12000"),
                (Category::Leisure, "3500.75"),
                (Category::Food, "0.25"),
            ]
        );
        assert_eq!(summary.rows[0].recorded_at, ledger.entries()[0].recorded_at);
        assert_eq!(
            summary.by_category,
            vec![
                CategoryTotal {
                    category: Category::Leisure,
                    total: "3501".into()
                },
                CategoryTotal {
                    category: Category::Food,
                    total: "12000".into()
                },
            ]
        );
    }

    #[test]
    fn test_summary_display_lists_entries() {
        let mut ledger = ExpenseLedger::new();
        ledger.add(Category::FixedCost, "700").unwrap();

        let text = Summary::from_ledger(&ledger).to_string();

        assert!(text.starts_with("Total spent: 700 won\n"));
        assert!(text.contains("Fixed cost"));
        assert!(text.contains("700 won"));
    }

    #[test]
    fn test_summary_display_lists_category_subtotals() {
        let mut ledger = ExpenseLedger::new();
        ledger.add(Category::Food, "100").unwrap();
        ledger.add(Category::Other, "5").unwrap();
        ledger.add(Category::Food, "50.5").unwrap();

        let text = Summary::from_ledger(&ledger).to_string();
        let (_, subtotals) = text.split_once("By category:\n").unwrap();
        let lines: Vec<Vec<&str>> = subtotals
            .lines()
            .map(|l| l.split_whitespace().collect())
            .collect();

        assert_eq!(
            lines,
            vec![vec!["Food", "151", "won"], vec!["Other", "5", "won"]]
        );
    }
}
