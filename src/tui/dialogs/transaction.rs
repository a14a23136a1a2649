//! Add-transaction dialog
//!
//! Form for recording a new transaction. Kind and category are cycled with
//! the arrow keys; amount, description, and date are free-text inputs.

use chrono::{Local, NaiveDate};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::models::{Money, Transaction, TransactionKind};
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

const INCOME_CATEGORIES: [&str; 5] = ["Salary", "Freelance", "Investments", "Sales", "Other"];
const EXPENSE_CATEGORIES: [&str; 9] = [
    "Food",
    "Transport",
    "Housing",
    "Health",
    "Education",
    "Entertainment",
    "Clothing",
    "Technology",
    "Other",
];

/// Which field is focused in the transaction form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransactionField {
    #[default]
    Kind,
    Amount,
    Description,
    Category,
    Date,
}

impl TransactionField {
    pub fn next(self) -> Self {
        match self {
            Self::Kind => Self::Amount,
            Self::Amount => Self::Description,
            Self::Description => Self::Category,
            Self::Category => Self::Date,
            Self::Date => Self::Kind,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Kind => Self::Date,
            Self::Amount => Self::Kind,
            Self::Description => Self::Amount,
            Self::Category => Self::Description,
            Self::Date => Self::Category,
        }
    }
}

/// State for the add-transaction dialog
#[derive(Debug)]
pub struct TransactionFormState {
    pub focused_field: TransactionField,
    pub kind: TransactionKind,
    pub amount: TextInput,
    pub description: TextInput,
    /// Index into the category list for the current kind
    pub category_index: usize,
    pub date: TextInput,
    pub error_message: Option<String>,
}

impl TransactionFormState {
    pub fn new() -> Self {
        let today = Local::now().date_naive().format("%Y-%m-%d").to_string();
        Self {
            focused_field: TransactionField::Kind,
            kind: TransactionKind::Expense,
            amount: TextInput::new().label("Amount").placeholder("0.00"),
            description: TextInput::new()
                .label("Description")
                .placeholder("What was it for?"),
            category_index: 0,
            date: TextInput::new().label("Date").content(today),
            error_message: None,
        }
    }

    /// Category options for the currently selected kind.
    pub fn categories(&self) -> &'static [&'static str] {
        match self.kind {
            TransactionKind::Income => &INCOME_CATEGORIES,
            TransactionKind::Expense => &EXPENSE_CATEGORIES,
        }
    }

    pub fn selected_category(&self) -> &'static str {
        self.categories()[self.category_index]
    }

    pub fn next_field(&mut self) {
        self.set_focus(self.focused_field.next());
    }

    pub fn prev_field(&mut self) {
        self.set_focus(self.focused_field.prev());
    }

    fn set_focus(&mut self, field: TransactionField) {
        self.focused_field = field;
        self.amount.focused = field == TransactionField::Amount;
        self.description.focused = field == TransactionField::Description;
        self.date.focused = field == TransactionField::Date;
    }

    /// Flips the kind and resets the category index, since the option list
    /// differs between kinds.
    pub fn toggle_kind(&mut self) {
        self.kind = match self.kind {
            TransactionKind::Income => TransactionKind::Expense,
            TransactionKind::Expense => TransactionKind::Income,
        };
        self.category_index = 0;
        self.error_message = None;
    }

    pub fn next_category(&mut self) {
        self.category_index = (self.category_index + 1) % self.categories().len();
    }

    pub fn prev_category(&mut self) {
        let len = self.categories().len();
        self.category_index = (self.category_index + len - 1) % len;
    }

    fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            TransactionField::Amount => Some(&mut self.amount),
            TransactionField::Description => Some(&mut self.description),
            TransactionField::Date => Some(&mut self.date),
            _ => None,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        let digits_only = self.focused_field == TransactionField::Amount;
        if let Some(input) = self.focused_input() {
            if digits_only && !(c.is_ascii_digit() || c == '.') {
                return;
            }
            input.insert(c);
            self.error_message = None;
        }
    }

    pub fn backspace(&mut self) {
        if let Some(input) = self.focused_input() {
            input.backspace();
            self.error_message = None;
        }
    }

    pub fn move_left(&mut self) {
        match self.focused_field {
            TransactionField::Kind => self.toggle_kind(),
            TransactionField::Category => self.prev_category(),
            _ => {
                if let Some(input) = self.focused_input() {
                    input.move_left();
                }
            }
        }
    }

    pub fn move_right(&mut self) {
        match self.focused_field {
            TransactionField::Kind => self.toggle_kind(),
            TransactionField::Category => self.next_category(),
            _ => {
                if let Some(input) = self.focused_input() {
                    input.move_right();
                }
            }
        }
    }

    pub fn clear_field(&mut self) {
        if let Some(input) = self.focused_input() {
            input.clear();
        }
        self.error_message = None;
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }

    /// Validates the form and builds a transaction from it.
    pub fn build_transaction(&self) -> Result<Transaction, String> {
        let amount_text = self.amount.value().trim();
        if amount_text.is_empty() {
            return Err("Amount is required".to_string());
        }
        let amount = Money::parse(amount_text).map_err(|_| "Invalid amount format".to_string())?;
        if !amount.is_positive() {
            return Err("Amount must be positive".to_string());
        }

        let description = self.description.value().trim();
        if description.is_empty() {
            return Err("Description is required".to_string());
        }

        let date = NaiveDate::parse_from_str(self.date.value().trim(), "%Y-%m-%d")
            .map_err(|_| "Date must be YYYY-MM-DD".to_string())?;

        Ok(Transaction::new(
            self.kind,
            amount,
            description,
            self.selected_category(),
            date,
        ))
    }
}

impl Default for TransactionFormState {
    fn default() -> Self {
        Self::new()
    }
}

fn selector_line(label: &str, value: &str, focused: bool) -> Line<'static> {
    let label_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let value_span = if focused {
        Span::styled(
            format!("◂ {} ▸", value),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(value.to_string(), Style::default().fg(Color::White))
    };
    Line::from(vec![
        Span::styled(format!("{:<13}", format!("{}:", label)), label_style),
        value_span,
    ])
}

/// Renders the add-transaction dialog as a centered overlay.
pub fn render(frame: &mut Frame, state: &TransactionFormState, area: Rect) {
    let dialog_area = centered_rect_fixed(52, 16, area);
    frame.render_widget(Clear, dialog_area);

    let block = Block::default()
        .title(" Add Transaction ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(dialog_area);
    frame.render_widget(block, dialog_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // kind
            Constraint::Length(1),
            Constraint::Length(2), // amount
            Constraint::Length(1),
            Constraint::Length(2), // description
            Constraint::Length(1),
            Constraint::Length(1), // category
            Constraint::Length(1),
            Constraint::Length(2), // date
            Constraint::Length(1), // error
            Constraint::Length(1), // instructions
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(selector_line(
            "Kind",
            &state.kind.to_string(),
            state.focused_field == TransactionField::Kind,
        )),
        chunks[0],
    );

    frame.render_widget(&state.amount, chunks[2]);
    frame.render_widget(&state.description, chunks[4]);

    frame.render_widget(
        Paragraph::new(selector_line(
            "Category",
            state.selected_category(),
            state.focused_field == TransactionField::Category,
        )),
        chunks[6],
    );

    frame.render_widget(&state.date, chunks[8]);

    if let Some(ref error) = state.error_message {
        frame.render_widget(
            Paragraph::new(Span::styled(
                error.as_str(),
                Style::default().fg(Color::Red),
            )),
            chunks[9],
        );
    }

    let instructions = Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Save  "),
        Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
        Span::raw(" Cancel  "),
        Span::styled("[Tab]", Style::default().fg(Color::Cyan)),
        Span::raw(" Fields  "),
        Span::styled("[←/→]", Style::default().fg(Color::Cyan)),
        Span::raw(" Cycle"),
    ]);
    frame.render_widget(Paragraph::new(instructions), chunks[10]);
}
