//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! Dialog state lives inside the `ActiveDialog` variant that owns it, so
//! closing a dialog drops its widget state - a closed timer can never
//! receive another tick.

use crate::config::Settings;
use crate::models::TransactionId;
use crate::services::Ledger;
use crate::study::QuizScore;

use super::dialogs::flashcards::FlashcardDialogState;
use super::dialogs::quiz::QuizDialogState;
use super::dialogs::timer::TimerDialogState;
use super::dialogs::transaction::TransactionFormState;

/// Which view is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Dashboard,
    Transactions,
    Reports,
    Study,
}

impl ActiveView {
    /// Title shown in the view header
    pub fn title(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Transactions => "Transactions",
            Self::Reports => "Reports",
            Self::Study => "Study",
        }
    }
}

/// Which panel currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedPanel {
    #[default]
    Sidebar,
    Main,
}

/// Mode of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// An action awaiting confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    DeleteTransaction(TransactionId),
}

/// Currently active dialog (if any), owning its own state
#[derive(Debug, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    AddTransaction(TransactionFormState),
    Confirm {
        message: String,
        action: PendingAction,
    },
    Help,
    Timer(TimerDialogState),
    Quiz(QuizDialogState),
    Flashcards(FlashcardDialogState),
}

/// Main application state
pub struct App {
    /// The in-memory transaction book
    pub ledger: Ledger,

    /// Application settings
    pub settings: Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active view
    pub active_view: ActiveView,

    /// Which panel is focused
    pub focused_panel: FocusedPanel,

    /// Current input mode
    pub input_mode: InputMode,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Selected transaction index in the register
    pub selected_transaction_index: usize,

    /// Selected entry in the sidebar category list (0 = "All")
    pub selected_category_index: usize,

    /// Category the register is filtered to, if any
    pub category_filter: Option<String>,

    /// Status message to display
    pub status_message: Option<String>,

    /// Focus sessions banked from closed timers this run
    pub focus_sessions_total: u32,

    /// Score of the most recently finished quiz this run
    pub last_quiz_score: Option<QuizScore>,
}

impl App {
    /// Create a new App instance
    pub fn new(ledger: Ledger, settings: Settings) -> Self {
        Self {
            ledger,
            settings,
            should_quit: false,
            active_view: ActiveView::default(),
            focused_panel: FocusedPanel::default(),
            input_mode: InputMode::default(),
            active_dialog: ActiveDialog::default(),
            selected_transaction_index: 0,
            selected_category_index: 0,
            category_filter: None,
            status_message: None,
            focus_sessions_total: 0,
            last_quiz_score: None,
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Switch to a different view
    pub fn switch_view(&mut self, view: ActiveView) {
        self.active_view = view;
        if view == ActiveView::Transactions {
            self.selected_transaction_index = 0;
        }
    }

    /// Toggle focus between sidebar and main panel
    pub fn toggle_panel_focus(&mut self) {
        self.focused_panel = match self.focused_panel {
            FocusedPanel::Sidebar => FocusedPanel::Main,
            FocusedPanel::Main => FocusedPanel::Sidebar,
        };
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        if matches!(dialog, ActiveDialog::AddTransaction(_)) {
            self.input_mode = InputMode::Editing;
        }
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    ///
    /// Dropping the dialog state is the widget's teardown: any timer or quiz
    /// it owned ceases to exist. Completed study results are banked on the
    /// app first so the study hub can show them.
    pub fn close_dialog(&mut self) {
        match &self.active_dialog {
            ActiveDialog::Timer(state) => {
                self.focus_sessions_total += state.timer.completed_focus_sessions();
            }
            ActiveDialog::Quiz(state) => {
                if let Some(score) = state.engine.score() {
                    self.last_quiz_score = Some(score);
                }
            }
            _ => {}
        }
        self.active_dialog = ActiveDialog::None;
        self.input_mode = InputMode::Normal;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    /// Sidebar entries: "All" plus every category seen in the ledger
    pub fn sidebar_entries(&self) -> Vec<String> {
        let mut entries = vec!["All".to_string()];
        entries.extend(self.ledger.categories());
        entries
    }

    /// Apply the sidebar selection as the register's category filter
    pub fn apply_sidebar_selection(&mut self) {
        if self.selected_category_index == 0 {
            self.category_filter = None;
        } else {
            let entries = self.sidebar_entries();
            if let Some(category) = entries.get(self.selected_category_index) {
                self.category_filter = Some(category.clone());
            }
        }
        self.selected_transaction_index = 0;
    }

    /// Move selection up in the focused list
    pub fn move_up(&mut self) {
        match self.focused_panel {
            FocusedPanel::Sidebar => {
                if self.selected_category_index > 0 {
                    self.selected_category_index -= 1;
                }
            }
            FocusedPanel::Main => {
                if self.selected_transaction_index > 0 {
                    self.selected_transaction_index -= 1;
                }
            }
        }
    }

    /// Move selection down in the focused list
    pub fn move_down(&mut self, max: usize) {
        match self.focused_panel {
            FocusedPanel::Sidebar => {
                if self.selected_category_index < max.saturating_sub(1) {
                    self.selected_category_index += 1;
                }
            }
            FocusedPanel::Main => {
                if self.selected_transaction_index < max.saturating_sub(1) {
                    self.selected_transaction_index += 1;
                }
            }
        }
    }

    /// Forward elapsed wall-clock seconds to an open, running timer
    ///
    /// Called on every UI tick; the dialog's gate converts the fast UI tick
    /// into 1 Hz engine ticks.
    pub fn on_tick(&mut self) {
        if let ActiveDialog::Timer(state) = &mut self.active_dialog {
            state.on_tick();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(Ledger::sample(), Settings::default())
    }

    #[test]
    fn test_sidebar_entries_include_all() {
        let app = app();
        let entries = app.sidebar_entries();
        assert_eq!(entries[0], "All");
        assert!(entries.contains(&"Housing".to_string()));
    }

    #[test]
    fn test_apply_sidebar_selection() {
        let mut app = app();
        app.selected_category_index = 0;
        app.apply_sidebar_selection();
        assert_eq!(app.category_filter, None);

        app.selected_category_index = 2;
        app.apply_sidebar_selection();
        assert_eq!(app.category_filter, Some("Housing".to_string()));
    }

    #[test]
    fn test_close_dialog_banks_timer_sessions() {
        let mut app = app();
        let mut state = TimerDialogState::new(&app.settings);
        // Simulate a completed 2-second focus interval
        state.timer = crate::study::SessionTimer::with_durations(2, 2);
        state.timer.start();
        state.timer.tick();
        state.timer.tick();
        app.open_dialog(ActiveDialog::Timer(state));
        app.close_dialog();
        assert_eq!(app.focus_sessions_total, 1);
        assert!(!app.has_dialog());
    }

    #[test]
    fn test_close_dialog_banks_quiz_score() {
        let mut app = app();
        let mut state = QuizDialogState::new();
        for _ in 0..state.engine.question_count() {
            state.engine.select_answer(0);
            state.engine.advance();
        }
        app.open_dialog(ActiveDialog::Quiz(state));
        app.close_dialog();
        assert!(app.last_quiz_score.is_some());
    }

    #[test]
    fn test_unfinished_quiz_records_no_score() {
        let mut app = app();
        app.open_dialog(ActiveDialog::Quiz(QuizDialogState::new()));
        app.close_dialog();
        assert!(app.last_quiz_score.is_none());
    }

    #[test]
    fn test_move_bounds() {
        let mut app = app();
        app.focused_panel = FocusedPanel::Sidebar;
        app.move_up();
        assert_eq!(app.selected_category_index, 0);
        let max = app.sidebar_entries().len();
        for _ in 0..20 {
            app.move_down(max);
        }
        assert_eq!(app.selected_category_index, max - 1);
    }
}
