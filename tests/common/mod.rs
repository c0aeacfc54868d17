// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use tally::cli::prompt::run_prompt;
use tally::domain::{Category, ExpenseLedger};

/// Helper to build a ledger from (category, amount) pairs that must all be valid
pub fn ledger_with(entries: &[(Category, &str)]) -> Result<ExpenseLedger> {
    let mut ledger = ExpenseLedger::new();
    for (category, amount) in entries {
        ledger.add(*category, *amount)?;
    }
    Ok(ledger)
}

/// Helper to run a prompt session over a scripted input and capture what it printed
pub fn prompt_session(script: &str) -> Result<(ExpenseLedger, String)> {
    let mut ledger = ExpenseLedger::new();
    let mut output = Vec::new();
    run_prompt(script.as_bytes(), &mut output, &mut ledger)?;
    Ok((ledger, String::from_utf8(output)?))
}
