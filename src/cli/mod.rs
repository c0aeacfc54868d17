pub mod prompt;
pub mod tui;

use std::io;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::application::{AppError, Summary};
use crate::domain::{Category, ExpenseLedger};

/// Tally - Expense Calculator
#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Pick a category, enter what you spent, see the running total")]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (debug logs on stderr; RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive entry form (default)
    Tui,

    /// Enter expenses line by line on stdin
    Prompt,

    /// Add the given expenses and print the total
    Sum {
        /// Expenses as CATEGORY=AMOUNT, e.g. food=12000 leisure=3500.75
        #[arg(value_parser = parse_pair)]
        expenses: Vec<(Category, String)>,
    },

    /// List the available categories
    Categories,
}

/// Install the global tracing subscriber. Logs go to stderr.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "tally=debug" } else { "tally=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

impl Cli {
    pub fn run(self) -> Result<()> {
        // One ledger per session; dropped when the command returns.
        let mut ledger = ExpenseLedger::new();

        match self.command.unwrap_or(Commands::Tui) {
            Commands::Tui => {
                tui::run_tui(&mut ledger).context("Terminal UI failed")?;
                let summary = Summary::from_ledger(&ledger);
                if !summary.is_empty() {
                    print!("{summary}");
                }
            }

            Commands::Prompt => {
                let stdin = io::stdin();
                prompt::run_prompt(stdin.lock(), io::stdout(), &mut ledger)
                    .context("Prompt session failed")?;
            }

            Commands::Sum { expenses } => {
                run_sum_command(&mut ledger, expenses);
            }

            Commands::Categories => {
                println!("{:<4} {:<12} {:<12}", "#", "KEY", "LABEL");
                println!("{}", "-".repeat(30));
                for (i, category) in Category::ALL.iter().enumerate() {
                    println!(
                        "{:<4} {:<12} {:<12}",
                        i + 1,
                        category.as_str(),
                        category.label()
                    );
                }
            }
        }

        Ok(())
    }
}

fn run_sum_command(ledger: &mut ExpenseLedger, expenses: Vec<(Category, String)>) {
    for (category, amount) in expenses {
        if let Err(err) = ledger.add(category, amount.as_str()) {
            warn!(category = %category, amount = %amount, error = %err, "skipping expense");
        }
    }
    info!(entries = ledger.len(), "sum computed");

    print!("{}", Summary::from_ledger(ledger));
}

/// Parse a `CATEGORY=AMOUNT` argument. The amount is validated later, by the ledger.
pub fn parse_pair(input: &str) -> Result<(Category, String), AppError> {
    let (key, amount) = input
        .split_once('=')
        .ok_or_else(|| AppError::MalformedPair(input.to_string()))?;
    let category =
        Category::from_str(key.trim()).ok_or_else(|| AppError::UnknownCategory(key.to_string()))?;
    Ok((category, amount.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pair() {
        let (category, amount) = parse_pair("food=12000").unwrap();
        assert_eq!(category, Category::Food);
        assert_eq!(amount, "12000");

        let (category, amount) = parse_pair("Fixed-Cost=").unwrap();
        assert_eq!(category, Category::FixedCost);
        assert_eq!(amount, "");
    }

    #[test]
    fn test_parse_pair_invalid() {
        assert!(matches!(
            parse_pair("food"),
            Err(AppError::MalformedPair(_))
        ));
        assert!(matches!(
            parse_pair("rent=100"),
            Err(AppError::UnknownCategory(_))
        ));
    }

    #[test]
    fn test_cli_defaults_to_tui() {
        let cli = Cli::try_parse_from(["tally"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_parses_sum_pairs() {
        let cli = Cli::try_parse_from(["tally", "-v", "sum", "food=1", "other=abc"]).unwrap();
        assert!(cli.verbose);
        match cli.command {
            Some(Commands::Sum { expenses }) => {
                assert_eq!(
                    expenses,
                    vec![
                        (Category::Food, "1".to_string()),
                        (Category::Other, "abc".to_string())
                    ]
                );
            }
            _ => panic!("expected sum command"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_category() {
        assert!(Cli::try_parse_from(["tally", "sum", "rent=100"]).is_err());
    }

    #[test]
    fn test_sum_skips_invalid_amounts() {
        let mut ledger = ExpenseLedger::new();
        run_sum_command(
            &mut ledger,
            vec![
                (Category::Food, "12000".into()),
                (Category::Other, "abc".into()),
                (Category::Leisure, "3500.75".into()),
            ],
        );
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.total(), "15501");
    }
}
