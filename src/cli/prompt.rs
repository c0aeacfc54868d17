use std::io::{BufRead, Write};

use tracing::debug;

use crate::application::{AppError, EntryFlow, Screen, Summary};
use crate::domain::{Category, ExpenseLedger};

/// Line-oriented version of the entry and summary screens.
///
/// Works on any reader/writer pair so it can run without a terminal. A refused
/// amount re-prompts without a message, the same way the form ignores it.
/// End of input finishes the session at any point.
pub fn run_prompt<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    ledger: &mut ExpenseLedger,
) -> Result<(), AppError> {
    let mut flow = EntryFlow::new();

    writeln!(output, "Expense calculator")?;
    print_categories(&mut output)?;

    loop {
        match flow.screen() {
            Screen::Editing => {
                write!(output, "Category [{}]: ", flow.category().label())?;
                output.flush()?;
                let Some(line) = read_line(&mut input)? else {
                    break;
                };
                match parse_category_choice(&line) {
                    Some(Some(category)) => flow.select_category(category),
                    Some(None) => {}
                    None => {
                        writeln!(output, "Choose 1-{} or a category name.", Category::ALL.len())?;
                        continue;
                    }
                }

                loop {
                    write!(output, "Amount: ")?;
                    output.flush()?;
                    let Some(line) = read_line(&mut input)? else {
                        return finish(&mut output, ledger);
                    };
                    flow.set_amount_text(line);
                    if flow.submit(ledger).is_ok() {
                        break;
                    }
                }
            }
            Screen::Summary => {
                writeln!(output)?;
                write!(output, "{}", Summary::from_ledger(ledger))?;
                write!(output, "Add more? [y/N]: ")?;
                output.flush()?;
                match read_line(&mut input)? {
                    Some(answer) if is_yes(&answer) => flow.add_more(),
                    _ => {
                        debug!(entries = ledger.len(), "prompt session ended");
                        return Ok(());
                    }
                }
            }
        }
    }

    finish(&mut output, ledger)
}

fn finish<W: Write>(output: &mut W, ledger: &ExpenseLedger) -> Result<(), AppError> {
    writeln!(output)?;
    if !ledger.is_empty() {
        write!(output, "{}", Summary::from_ledger(ledger))?;
    }
    debug!(entries = ledger.len(), "prompt session ended");
    Ok(())
}

fn print_categories<W: Write>(output: &mut W) -> Result<(), AppError> {
    for (i, category) in Category::ALL.iter().enumerate() {
        writeln!(output, "  {}) {}", i + 1, category.label())?;
    }
    Ok(())
}

/// `Some(None)` keeps the current category, `Some(Some(_))` picks one,
/// `None` means the input matched nothing.
fn parse_category_choice(input: &str) -> Option<Option<Category>> {
    let input = input.trim();
    if input.is_empty() {
        return Some(None);
    }
    if let Ok(n) = input.parse::<usize>() {
        return n
            .checked_sub(1)
            .and_then(|i| Category::ALL.get(i).copied())
            .map(Some);
    }
    Category::from_str(input).map(Some)
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Read one line without its terminator. `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>, AppError> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    if buf.ends_with('\n') {
        buf.pop();
        if buf.ends_with('\r') {
            buf.pop();
        }
    }
    Ok(Some(buf))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_category_choice() {
        assert_eq!(parse_category_choice(""), Some(None));
        assert_eq!(parse_category_choice("  "), Some(None));
        assert_eq!(parse_category_choice("1"), Some(Some(Category::Exercise)));
        assert_eq!(parse_category_choice("7"), Some(Some(Category::Other)));
        assert_eq!(parse_category_choice("food"), Some(Some(Category::Food)));
        assert_eq!(parse_category_choice("0"), None);
        assert_eq!(parse_category_choice("8"), None);
        assert_eq!(parse_category_choice("rent"), None);
    }

    #[test]
    fn test_read_line_strips_terminators() {
        let mut input = "12\r\n34\n56".as_bytes();
        assert_eq!(read_line(&mut input).unwrap(), Some("12".to_string()));
        assert_eq!(read_line(&mut input).unwrap(), Some("34".to_string()));
        assert_eq!(read_line(&mut input).unwrap(), Some("56".to_string()));
        assert_eq!(read_line(&mut input).unwrap(), None);
    }

    #[test]
    fn test_is_yes() {
        assert!(is_yes("y"));
        assert!(is_yes(" YES "));
        assert!(!is_yes(""));
        assert!(!is_yes("n"));
    }
}
