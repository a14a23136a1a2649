//! Reports view
//!
//! Spending share per category and a month-by-month flow table.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Cell, Gauge, Paragraph, Row, Table},
    Frame,
};

use crate::services::{expenses_by_category, monthly_flows};
use crate::tui::app::App;

/// Render the reports view
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    render_category_shares(frame, app, chunks[0]);
    render_monthly_table(frame, app, chunks[1]);
}

fn render_category_shares(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Spending by Category ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let shares = expenses_by_category(&app.ledger);
    if shares.is_empty() {
        let empty = Paragraph::new("No expenses recorded.")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, inner);
        return;
    }

    let symbol = &app.settings.currency_symbol;
    // one labeled gauge per category, top spenders first
    let row_count = (inner.height / 2) as usize;
    let constraints: Vec<Constraint> = (0..row_count.min(shares.len()))
        .flat_map(|_| [Constraint::Length(1), Constraint::Length(1)])
        .collect();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (i, share) in shares.iter().take(row_count).enumerate() {
        let label = Paragraph::new(Span::styled(
            format!(
                "{}  {} ({}%)",
                share.category,
                share.amount.format_with_symbol(symbol),
                share.percentage
            ),
            Style::default().fg(Color::White),
        ));
        frame.render_widget(label, rows[i * 2]);

        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(Color::Red).bg(Color::Black))
            .ratio(f64::from(share.percentage.min(100)) / 100.0)
            .label("");
        frame.render_widget(gauge, rows[i * 2 + 1]);
    }
}

fn render_monthly_table(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Monthly Flow ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let flows = monthly_flows(&app.ledger);
    if flows.is_empty() {
        let empty = Paragraph::new("No months to report.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, area);
        return;
    }

    let symbol = &app.settings.currency_symbol;
    let header = Row::new(vec!["Month", "Income", "Expenses", "Net"]).style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = flows
        .iter()
        .map(|flow| {
            let net = flow.income - flow.expenses;
            let net_color = if net.is_negative() {
                Color::Red
            } else {
                Color::Green
            };
            Row::new(vec![
                Cell::from(flow.label.clone()),
                Cell::from(Span::styled(
                    flow.income.format_with_symbol(symbol),
                    Style::default().fg(Color::Green),
                )),
                Cell::from(Span::styled(
                    flow.expenses.format_with_symbol(symbol),
                    Style::default().fg(Color::Red),
                )),
                Cell::from(Span::styled(
                    net.format_with_symbol(symbol),
                    Style::default().fg(net_color),
                )),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(9),
        Constraint::Length(11),
        Constraint::Length(11),
        Constraint::Length(11),
    ];

    frame.render_widget(Table::new(rows, widths).header(header).block(block), area);
}
