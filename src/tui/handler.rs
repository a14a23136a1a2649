//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the current
//! application state. Dialogs take priority over the views below them.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{ActiveDialog, ActiveView, App, FocusedPanel, PendingAction};
use super::dialogs::flashcards::FlashcardDialogState;
use super::dialogs::quiz::QuizDialogState;
use super::dialogs::timer::TimerDialogState;
use super::dialogs::transaction::TransactionFormState;
use super::event::Event;
use crate::study::TimerMode;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => {
            handle_key_event(app, key);
            Ok(())
        }
        Event::Tick => {
            app.on_tick();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

fn handle_key_event(app: &mut App, key: KeyEvent) {
    if app.has_dialog() {
        handle_dialog_key(app, key);
    } else {
        handle_normal_key(app, key);
    }
}

/// Handle keys in normal mode (no dialog open)
fn handle_normal_key(app: &mut App, key: KeyEvent) {
    app.clear_status();

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),

        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),

        KeyCode::Tab => app.toggle_panel_focus(),

        KeyCode::Char('1') => app.switch_view(ActiveView::Dashboard),
        KeyCode::Char('2') => app.switch_view(ActiveView::Transactions),
        KeyCode::Char('3') => app.switch_view(ActiveView::Reports),
        KeyCode::Char('4') => app.switch_view(ActiveView::Study),

        KeyCode::Char('j') | KeyCode::Down => {
            let max = match app.focused_panel {
                FocusedPanel::Sidebar => app.sidebar_entries().len(),
                FocusedPanel::Main => register_len(app),
            };
            app.move_down(max);
        }
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),

        KeyCode::Enter if app.focused_panel == FocusedPanel::Sidebar => {
            app.apply_sidebar_selection();
            match &app.category_filter {
                Some(category) => app.set_status(format!("Filtered to {}", category)),
                None => app.set_status("Showing all categories"),
            }
        }

        KeyCode::Char('a') => {
            app.open_dialog(ActiveDialog::AddTransaction(TransactionFormState::new()));
        }

        KeyCode::Char('d') if app.active_view == ActiveView::Transactions => {
            request_delete(app);
        }

        KeyCode::Char('t') => {
            app.open_dialog(ActiveDialog::Timer(TimerDialogState::new(&app.settings)));
        }
        KeyCode::Char('x') => {
            app.open_dialog(ActiveDialog::Quiz(QuizDialogState::new()));
        }
        KeyCode::Char('f') => {
            app.open_dialog(ActiveDialog::Flashcards(FlashcardDialogState::new()));
        }

        _ => {}
    }
}

/// Number of rows the register currently shows, honoring the filter.
fn register_len(app: &App) -> usize {
    match &app.category_filter {
        Some(category) => app
            .ledger
            .transactions()
            .iter()
            .filter(|t| t.category == *category)
            .count(),
        None => app.ledger.len(),
    }
}

/// Ask for confirmation before deleting the selected register row.
fn request_delete(app: &mut App) {
    let filter = app.category_filter.clone();
    let selected = app
        .ledger
        .recent(usize::MAX)
        .into_iter()
        .filter(|t| filter.as_deref().map_or(true, |c| t.category == c))
        .nth(app.selected_transaction_index)
        .map(|t| (t.id, t.description.clone()));

    if let Some((id, description)) = selected {
        app.open_dialog(ActiveDialog::Confirm {
            message: format!("Delete \"{}\"?", description),
            action: PendingAction::DeleteTransaction(id),
        });
    } else {
        app.set_status("Nothing to delete");
    }
}

/// Route a key to the active dialog
fn handle_dialog_key(app: &mut App, key: KeyEvent) {
    match &mut app.active_dialog {
        ActiveDialog::None => {}
        ActiveDialog::Help => match key.code {
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => app.close_dialog(),
            _ => {}
        },
        ActiveDialog::Confirm { action, .. } => {
            let action = action.clone();
            match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => {
                    app.close_dialog();
                    execute_action(app, action);
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    app.close_dialog();
                }
                _ => {}
            }
        }
        ActiveDialog::AddTransaction(_) => handle_transaction_form_key(app, key),
        ActiveDialog::Timer(state) => match key.code {
            KeyCode::Char(' ') => state.toggle(),
            KeyCode::Char('r') => state.reset(),
            KeyCode::Char('f') => state.select_mode(TimerMode::Focus),
            KeyCode::Char('b') => state.select_mode(TimerMode::Break),
            KeyCode::Esc | KeyCode::Char('q') => app.close_dialog(),
            _ => {}
        },
        ActiveDialog::Quiz(state) => {
            let engine = &mut state.engine;
            match key.code {
                KeyCode::Char(c @ '1'..='5') if !engine.is_completed() => {
                    let index = c as usize - '1' as usize;
                    if engine.can_select(index) {
                        engine.select_answer(index);
                    }
                }
                KeyCode::Enter | KeyCode::Char('n') if engine.can_advance() => {
                    engine.advance();
                }
                KeyCode::Char('p') if engine.can_retreat() => {
                    engine.retreat();
                }
                KeyCode::Char('r') if engine.is_completed() => {
                    *state = QuizDialogState::new();
                }
                KeyCode::Esc | KeyCode::Char('q') => app.close_dialog(),
                _ => {}
            }
        }
        ActiveDialog::Flashcards(state) => {
            let deck = &mut state.deck;
            match key.code {
                KeyCode::Char(' ') | KeyCode::Enter => deck.flip(),
                KeyCode::Char('l') | KeyCode::Right | KeyCode::Char('n') => deck.next(),
                KeyCode::Char('h') | KeyCode::Left | KeyCode::Char('p') => deck.prev(),
                KeyCode::Esc | KeyCode::Char('q') => app.close_dialog(),
                _ => {}
            }
        }
    }
}

/// Keys for the add-transaction form (editing mode)
fn handle_transaction_form_key(app: &mut App, key: KeyEvent) {
    let ActiveDialog::AddTransaction(form) = &mut app.active_dialog else {
        return;
    };

    match key.code {
        KeyCode::Esc => app.close_dialog(),

        KeyCode::Enter => {
            match form.build_transaction() {
                Ok(transaction) => {
                    let description = transaction.description.clone();
                    match app.ledger.add(transaction) {
                        Ok(_) => {
                            app.close_dialog();
                            app.set_status(format!("Added \"{}\"", description));
                        }
                        Err(e) => {
                            if let ActiveDialog::AddTransaction(form) = &mut app.active_dialog {
                                form.set_error(e.to_string());
                            }
                        }
                    }
                }
                Err(message) => form.set_error(message),
            }
        }

        KeyCode::Tab | KeyCode::Down => form.next_field(),
        KeyCode::BackTab | KeyCode::Up => form.prev_field(),

        KeyCode::Left => form.move_left(),
        KeyCode::Right => form.move_right(),

        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => form.clear_field(),

        KeyCode::Char(c) => form.insert_char(c),
        KeyCode::Backspace => form.backspace(),

        _ => {}
    }
}

fn execute_action(app: &mut App, action: PendingAction) {
    match action {
        PendingAction::DeleteTransaction(id) => match app.ledger.remove(id) {
            Ok(_) => {
                app.set_status("Transaction deleted");
                if app.selected_transaction_index > 0 {
                    app.selected_transaction_index -= 1;
                }
            }
            Err(e) => app.set_status(e.to_string()),
        },
    }
}
