//! Transaction register view
//!
//! A scrollable table of transactions, newest first, honoring the sidebar
//! category filter.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::models::{Transaction, TransactionKind};
use crate::tui::app::{App, FocusedPanel};

/// Transactions the register shows, in display order
pub fn visible_transactions(app: &App) -> Vec<&Transaction> {
    app.ledger
        .recent(usize::MAX)
        .into_iter()
        .filter(|t| {
            app.category_filter
                .as_deref()
                .map_or(true, |c| t.category == c)
        })
        .collect()
}

/// Render the register
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let is_focused = app.focused_panel == FocusedPanel::Main;
    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let title = match &app.category_filter {
        Some(category) => format!(" Transactions — {} ", category),
        None => " Transactions ".to_string(),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let transactions = visible_transactions(app);

    if transactions.is_empty() {
        let empty = Paragraph::new("No transactions. Press [a] to add one.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, area);
        return;
    }

    let symbol = &app.settings.currency_symbol;
    let header = Row::new(vec!["Date", "Kind", "Description", "Category", "Amount"])
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .height(1);

    let rows: Vec<Row> = transactions
        .iter()
        .map(|txn| {
            let (sign, color) = match txn.kind {
                TransactionKind::Income => ("+", Color::Green),
                TransactionKind::Expense => ("-", Color::Red),
            };
            Row::new(vec![
                Cell::from(txn.date.format("%Y-%m-%d").to_string()),
                Cell::from(txn.kind.to_string()),
                Cell::from(txn.description.clone()),
                Cell::from(txn.category.clone()),
                Cell::from(Span::styled(
                    format!("{}{}", sign, txn.amount.format_with_symbol(symbol)),
                    Style::default().fg(color),
                )),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(10),
        Constraint::Length(8),
        Constraint::Min(16),
        Constraint::Length(14),
        Constraint::Length(12),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▸ ");

    let mut state = TableState::default();
    state.select(Some(
        app.selected_transaction_index
            .min(transactions.len().saturating_sub(1)),
    ));

    frame.render_stateful_widget(table, area, &mut state);
}
