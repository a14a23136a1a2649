//! Dashboard view
//!
//! Summary cards, the most recent transactions, and a monthly income vs
//! expense bar chart.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::models::{Money, TransactionKind};
use crate::services::monthly_flows;
use crate::tui::app::App;

/// Render the dashboard
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // summary cards
            Constraint::Min(6),     // recent transactions
            Constraint::Length(10), // monthly chart
        ])
        .split(area);

    render_cards(frame, app, chunks[0]);
    render_recent(frame, app, chunks[1]);
    render_monthly_chart(frame, app, chunks[2]);
}

fn render_cards(frame: &mut Frame, app: &App, area: Rect) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let totals = app.ledger.totals();
    let symbol = &app.settings.currency_symbol;

    let balance_color = if totals.balance.is_negative() {
        Color::Red
    } else {
        Color::Green
    };

    render_card(
        frame,
        cards[0],
        "Balance",
        &totals.balance.format_with_symbol(symbol),
        balance_color,
    );
    render_card(
        frame,
        cards[1],
        "Income",
        &totals.income.format_with_symbol(symbol),
        Color::Green,
    );
    render_card(
        frame,
        cards[2],
        "Expenses",
        &totals.expenses.format_with_symbol(symbol),
        Color::Red,
    );
    render_card(
        frame,
        cards[3],
        "Transactions",
        &app.ledger.len().to_string(),
        Color::Cyan,
    );
}

fn render_card(frame: &mut Frame, area: Rect, title: &str, value: &str, color: Color) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let paragraph = Paragraph::new(Span::styled(
        value.to_string(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
    .block(block);
    frame.render_widget(paragraph, area);
}

fn render_recent(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Recent Transactions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let recent = app.ledger.recent(8);
    if recent.is_empty() {
        let empty = Paragraph::new("No transactions yet. Press [a] to add one.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, area);
        return;
    }

    let symbol = &app.settings.currency_symbol;
    let items: Vec<ListItem> = recent
        .iter()
        .map(|txn| {
            let (sign, color) = match txn.kind {
                TransactionKind::Income => ("+", Color::Green),
                TransactionKind::Expense => ("-", Color::Red),
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{}  ", txn.date.format("%Y-%m-%d")),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("{:<24}", txn.description),
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    format!("{:<14}", txn.category),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(
                    format!("{}{}", sign, txn.amount.format_with_symbol(symbol)),
                    Style::default().fg(color),
                ),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

fn render_monthly_chart(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Monthly Flow ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let flows = monthly_flows(&app.ledger);
    if flows.is_empty() {
        let empty = Paragraph::new("Nothing to chart yet.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, area);
        return;
    }

    // Bar heights are in whole currency units
    let groups: Vec<BarGroup> = flows
        .iter()
        .map(|flow| {
            let income_units = units_for_bar(flow.income);
            let expense_units = units_for_bar(flow.expenses);
            BarGroup::default()
                .label(Line::from(flow.label.clone()))
                .bars(&[
                    Bar::default()
                        .value(income_units)
                        .style(Style::default().fg(Color::Green)),
                    Bar::default()
                        .value(expense_units)
                        .style(Style::default().fg(Color::Red)),
                ])
        })
        .collect();

    let mut chart = BarChart::default()
        .block(block)
        .bar_width(6)
        .bar_gap(1)
        .group_gap(3);
    for group in groups {
        chart = chart.data(group);
    }
    frame.render_widget(chart, area);
}

fn units_for_bar(amount: Money) -> u64 {
    (amount.cents().max(0) as u64) / 100
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_units_for_bar_drops_cents() {
        assert_eq!(units_for_bar(Money::from_cents(12_345)), 123);
    }

    #[test]
    fn test_units_for_bar_clamps_negative() {
        assert_eq!(units_for_bar(Money::from_cents(-500)), 0);
    }
}
