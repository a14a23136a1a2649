//! TUI Views module
//!
//! Contains the main views (dashboard, register, reports, study hub) plus
//! the sidebar and status bar.

pub mod dashboard;
pub mod register;
pub mod reports;
pub mod sidebar;
pub mod status_bar;
pub mod study;

use ratatui::Frame;

use super::app::{ActiveDialog, ActiveView, App};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    sidebar::render(frame, app, layout.sidebar);

    match app.active_view {
        ActiveView::Dashboard => dashboard::render(frame, app, layout.main),
        ActiveView::Transactions => register::render(frame, app, layout.main),
        ActiveView::Reports => reports::render(frame, app, layout.main),
        ActiveView::Study => study::render(frame, app, layout.main),
    }

    status_bar::render(frame, app, layout.status_bar);

    if app.has_dialog() {
        render_dialog(frame, app);
    }
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &App) {
    let area = frame.area();
    match &app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame, app, area),
        ActiveDialog::Confirm { message, .. } => dialogs::confirm::render(frame, message, area),
        ActiveDialog::AddTransaction(state) => dialogs::transaction::render(frame, state, area),
        ActiveDialog::Timer(state) => dialogs::timer::render(frame, state, area),
        ActiveDialog::Quiz(state) => dialogs::quiz::render(frame, state, area),
        ActiveDialog::Flashcards(state) => dialogs::flashcards::render(frame, state, area),
        ActiveDialog::None => {}
    }
}
