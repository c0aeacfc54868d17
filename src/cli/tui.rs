use std::io;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame, Terminal,
};
use tracing::debug;

use crate::application::{EntryFlow, Screen, Summary, UNIT};
use crate::domain::{Category, ExpenseLedger};

const TITLE: &str = "Expense Calculator";

/// Terminal front-end state. The ledger lives with the caller and is lent
/// to every key press and redraw.
#[derive(Debug, Default)]
pub struct App {
    pub flow: EntryFlow,
    pub should_quit: bool,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_key(&mut self, key: KeyEvent, ledger: &mut ExpenseLedger) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.flow.screen() {
            Screen::Editing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Enter => {
                    // Refused amounts are ignored; the form stays as typed.
                    if let Err(err) = self.flow.submit(ledger) {
                        debug!(error = %err, "amount ignored");
                    }
                }
                KeyCode::Left | KeyCode::Up | KeyCode::BackTab => self.flow.previous_category(),
                KeyCode::Right | KeyCode::Down | KeyCode::Tab => self.flow.next_category(),
                KeyCode::Backspace => self.flow.pop_char(),
                KeyCode::Char(c) if is_amount_char(c) => self.flow.push_char(c),
                _ => {}
            },
            Screen::Summary => match key.code {
                KeyCode::Char('a') | KeyCode::Enter => self.flow.add_more(),
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                _ => {}
            },
        }
    }
}

fn is_amount_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E')
}

pub fn run_tui(ledger: &mut ExpenseLedger) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();
    let res = run_app(&mut terminal, &mut app, ledger);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res?;
    Ok(())
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    ledger: &mut ExpenseLedger,
) -> io::Result<()> {
    while !app.should_quit {
        terminal.draw(|f| ui(f, &*app, &*ledger))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                app.handle_key(key, ledger);
            }
        }
    }
    Ok(())
}

pub fn ui(f: &mut Frame, app: &App, ledger: &ExpenseLedger) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(0),    // Current screen
            Constraint::Length(3), // Key hints
        ])
        .split(f.size());

    let title = Paragraph::new(Line::from(Span::styled(
        TITLE,
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    match app.flow.screen() {
        Screen::Editing => render_form(f, chunks[1], &app.flow),
        Screen::Summary => render_summary(f, chunks[1], ledger),
    }

    render_status_bar(f, chunks[2], app.flow.screen());
}

fn render_form(f: &mut Frame, area: Rect, flow: &EntryFlow) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Category picker
            Constraint::Length(3), // Amount field
            Constraint::Min(0),
        ])
        .split(area);

    let mut spans = vec![];
    for (i, category) in Category::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" │ "));
        }
        let style = if *category == flow.category() {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(category.label(), style));
    }
    let picker = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Choose a category"),
    );
    f.render_widget(picker, chunks[0]);

    let amount = Paragraph::new(Line::from(vec![
        Span::raw(flow.amount_text().to_string()),
        Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Enter the amount spent"),
    );
    f.render_widget(amount, chunks[1]);
}

fn render_summary(f: &mut Frame, area: Rect, ledger: &ExpenseLedger) {
    let summary = Summary::from_ledger(ledger);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Total
            Constraint::Length(3), // Subtotals
            Constraint::Min(0),    // Entries
        ])
        .split(area);

    let total = Paragraph::new(Line::from(Span::styled(
        format!("{} {}", summary.total, UNIT),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )))
    .block(Block::default().borders(Borders::ALL).title("Total spent"));
    f.render_widget(total, chunks[0]);

    let mut spans = vec![];
    for (i, subtotal) in summary.by_category.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" │ "));
        }
        spans.push(Span::styled(
            subtotal.category.label(),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(format!(" {} {}", subtotal.total, UNIT)));
    }
    let subtotals = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title("By category"));
    f.render_widget(subtotals, chunks[1]);

    let rows: Vec<Row> = summary
        .rows
        .iter()
        .map(|row| {
            Row::new(vec![
                Cell::from(row.category.label()),
                Cell::from(format!("{} {}", row.amount, UNIT)),
                Cell::from(row.recorded_at.format("%H:%M:%S").to_string()),
            ])
        })
        .collect();

    let widths = [
        Constraint::Percentage(40),
        Constraint::Percentage(40),
        Constraint::Percentage(20),
    ];
    let table = Table::new(rows, widths)
        .header(
            Row::new(vec!["Category", "Amount", "Added (UTC)"])
                .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Expenses ({})", ledger.len())),
        );
    f.render_widget(table, chunks[2]);
}

fn render_status_bar(f: &mut Frame, area: Rect, screen: Screen) {
    let hints = match screen {
        Screen::Editing => "←/→ category │ type amount │ Enter calculate │ Esc quit",
        Screen::Summary => "a/Enter add more │ q/Esc quit",
    };
    let status = Paragraph::new(hints)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, area);
}
