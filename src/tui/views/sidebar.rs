//! Sidebar view
//!
//! Shows the view switcher and the category list used to filter the
//! register. Categories display their total expense spend.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::models::{Money, TransactionKind};
use crate::tui::app::{ActiveView, App, FocusedPanel};
use crate::tui::layout::SidebarLayout;

/// Render the sidebar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = SidebarLayout::new(area);

    render_view_switcher(frame, app, layout.view_switcher);
    render_categories(frame, app, layout.categories);
}

/// Render the view switcher
fn render_view_switcher(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" StudyLedger ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let views = [
        (ActiveView::Dashboard, "1"),
        (ActiveView::Transactions, "2"),
        (ActiveView::Reports, "3"),
        (ActiveView::Study, "4"),
    ];

    let items: Vec<ListItem> = views
        .iter()
        .map(|(view, key)| {
            let style = if *view == app.active_view {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!(" {} ", key), Style::default().fg(Color::DarkGray)),
                Span::styled(view.title(), style),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

/// Render the category list with expense totals
fn render_categories(frame: &mut Frame, app: &mut App, area: Rect) {
    let is_focused = app.focused_panel == FocusedPanel::Sidebar;
    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Categories ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let entries = app.sidebar_entries();
    let width = area.width.saturating_sub(2) as usize;

    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| {
            let spend: Money = app
                .ledger
                .transactions()
                .iter()
                .filter(|t| t.kind == TransactionKind::Expense)
                .filter(|t| entry == "All" || t.category == *entry)
                .map(|t| t.amount)
                .sum();

            let name_width = width.saturating_sub(11).max(4);
            let spend_str = spend.format_with_symbol(&app.settings.currency_symbol);
            let line = Line::from(vec![
                Span::styled(
                    format!("{:<width$}", truncate(entry, name_width), width = name_width),
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    format!("{:>10}", spend_str),
                    Style::default().fg(Color::Red),
                ),
            ]);
            ListItem::new(line)
        })
        .collect();

    let mut state = ListState::default();
    state.select(Some(app.selected_category_index.min(entries.len().saturating_sub(1))));

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▸ ");

    frame.render_stateful_widget(list, area, &mut state);
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}
