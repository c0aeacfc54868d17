use tracing::{debug, info};

use crate::domain::{Category, ExpenseLedger, ValidationError};

/// Which of the two screens is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Screen {
    /// The entry form: category picker and amount field
    #[default]
    Editing,
    /// Read-only total and list of entries
    Summary,
}

/// Form state behind the entry screen and the navigation to the summary.
///
/// The flow does not own a ledger. Callers pass theirs into `submit`, and
/// views read the ledger directly whenever they redraw.
#[derive(Debug, Clone, Default)]
pub struct EntryFlow {
    screen: Screen,
    category: Category,
    amount_text: String,
}

impl EntryFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn amount_text(&self) -> &str {
        &self.amount_text
    }

    pub fn is_editing(&self) -> bool {
        self.screen == Screen::Editing
    }

    pub fn select_category(&mut self, category: Category) {
        if self.is_editing() {
            self.category = category;
        }
    }

    pub fn next_category(&mut self) {
        self.select_category(self.category.next());
    }

    pub fn previous_category(&mut self) {
        self.select_category(self.category.previous());
    }

    pub fn set_amount_text(&mut self, text: impl Into<String>) {
        if self.is_editing() {
            self.amount_text = text.into();
        }
    }

    pub fn push_char(&mut self, c: char) {
        if self.is_editing() {
            self.amount_text.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        if self.is_editing() {
            self.amount_text.pop();
        }
    }

    /// Add the form contents to `ledger` and move to the summary.
    ///
    /// A rejected amount leaves the form, the screen and the ledger exactly as
    /// they were. Submitting from the summary screen does nothing.
    pub fn submit(&mut self, ledger: &mut ExpenseLedger) -> Result<(), ValidationError> {
        if !self.is_editing() {
            return Ok(());
        }

        if let Err(err) = ledger.add(self.category, self.amount_text.as_str()) {
            debug!(amount = %self.amount_text, error = %err, "submit rejected");
            return Err(err);
        }

        self.category = Category::default();
        self.amount_text.clear();
        self.screen = Screen::Summary;
        info!(entries = ledger.len(), total = %ledger.total(), "expense submitted");
        Ok(())
    }

    /// Leave the summary and return to an empty form. The ledger is kept.
    pub fn add_more(&mut self) {
        if self.screen == Screen::Summary {
            self.screen = Screen::Editing;
        }
    }
}
