//! Session timer dialog
//!
//! Countdown dialog driven by the terminal tick event. The event loop ticks
//! faster than once per second, so a [`TickGate`] translates wall-clock
//! elapsed time into whole-second timer ticks.

use std::time::Instant;

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Gauge, Paragraph};
use ratatui::Frame;

use crate::config::Settings;
use crate::study::{SessionTimer, TimerMode};
use crate::tui::layout::centered_rect_fixed;

/// Converts frequent UI ticks into 1Hz timer ticks by tracking elapsed
/// wall-clock time since the last whole second was consumed.
#[derive(Debug)]
pub struct TickGate {
    last: Instant,
}

impl TickGate {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Number of whole seconds elapsed since the last poll. The remainder
    /// carries over so no time is lost between calls.
    pub fn poll(&mut self) -> u64 {
        let elapsed = self.last.elapsed();
        let whole = elapsed.as_secs();
        if whole > 0 {
            self.last += std::time::Duration::from_secs(whole);
        }
        whole
    }

    /// Restarts the gate, discarding any partial second accumulated while
    /// the timer was paused.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }
}

impl Default for TickGate {
    fn default() -> Self {
        Self::new()
    }
}

/// State for the session timer dialog.
#[derive(Debug)]
pub struct TimerDialogState {
    pub timer: SessionTimer,
    gate: TickGate,
}

impl TimerDialogState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            timer: SessionTimer::with_durations(
                settings.focus_minutes * 60,
                settings.break_minutes * 60,
            ),
            gate: TickGate::new(),
        }
    }

    /// Called on every terminal tick. Paused timers keep the gate fresh so
    /// resuming does not replay time spent paused.
    pub fn on_tick(&mut self) {
        if !self.timer.is_running() {
            self.gate.reset();
            return;
        }
        for _ in 0..self.gate.poll() {
            self.timer.tick();
        }
    }

    /// Start/pause toggle. Resets the gate when transitioning into the
    /// running state so the first second starts counting from now.
    pub fn toggle(&mut self) {
        let was_running = self.timer.is_running();
        self.timer.toggle();
        if !was_running && self.timer.is_running() {
            self.gate.reset();
        }
    }

    pub fn reset(&mut self) {
        self.timer.reset();
        self.gate.reset();
    }

    pub fn select_mode(&mut self, mode: TimerMode) {
        self.timer.select_mode(mode);
        self.gate.reset();
    }
}

fn mode_style(active: bool) -> Style {
    if active {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Renders the timer dialog as a centered overlay.
pub fn render(frame: &mut Frame, state: &TimerDialogState, area: Rect) {
    let dialog_area = centered_rect_fixed(46, 13, area);
    frame.render_widget(Clear, dialog_area);

    let timer = &state.timer;
    let title = match timer.mode() {
        TimerMode::Focus => " Session Timer — Focus ",
        TimerMode::Break => " Session Timer — Break ",
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(dialog_area);
    frame.render_widget(block, dialog_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // mode tabs
            Constraint::Length(1),
            Constraint::Length(1), // clock
            Constraint::Length(1),
            Constraint::Length(1), // gauge
            Constraint::Length(1),
            Constraint::Length(1), // sessions
            Constraint::Length(1),
            Constraint::Length(1), // hints
        ])
        .split(inner);

    let tabs = Line::from(vec![
        Span::styled(" Focus ", mode_style(timer.mode() == TimerMode::Focus)),
        Span::raw("  "),
        Span::styled(" Break ", mode_style(timer.mode() == TimerMode::Break)),
    ]);
    frame.render_widget(Paragraph::new(tabs).alignment(Alignment::Center), chunks[0]);

    let (min, sec) = timer.remaining_min_sec();
    let clock_style = if timer.is_running() {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    };
    let clock = Paragraph::new(Span::styled(format!("{:02}:{:02}", min, sec), clock_style))
        .alignment(Alignment::Center);
    frame.render_widget(clock, chunks[2]);

    let total = timer.duration_for(timer.mode());
    let elapsed = total.saturating_sub(timer.remaining());
    let ratio = if total > 0 {
        elapsed as f64 / total as f64
    } else {
        0.0
    };
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(ratio.clamp(0.0, 1.0))
        .label("");
    frame.render_widget(gauge, chunks[4]);

    let sessions = Paragraph::new(format!(
        "Completed focus sessions: {}",
        timer.completed_focus_sessions()
    ))
    .alignment(Alignment::Center);
    frame.render_widget(sessions, chunks[6]);

    let action = if timer.is_running() { "pause" } else { "start" };
    let hints = Paragraph::new(Line::from(vec![
        Span::styled("[space]", Style::default().fg(Color::Cyan)),
        Span::raw(format!(" {}  ", action)),
        Span::styled("[r]", Style::default().fg(Color::Cyan)),
        Span::raw(" reset  "),
        Span::styled("[f]", Style::default().fg(Color::Cyan)),
        Span::raw(" focus  "),
        Span::styled("[b]", Style::default().fg(Color::Cyan)),
        Span::raw(" break  "),
        Span::styled("[Esc]", Style::default().fg(Color::Cyan)),
        Span::raw(" close"),
    ]))
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::Gray));
    frame.render_widget(hints, chunks[8]);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> Settings {
        Settings::default()
    }

    #[test]
    fn test_new_uses_configured_durations() {
        let mut s = settings();
        s.focus_minutes = 50;
        s.break_minutes = 10;
        let state = TimerDialogState::new(&s);
        assert_eq!(state.timer.remaining(), 50 * 60);
        assert_eq!(state.timer.duration_for(TimerMode::Break), 10 * 60);
    }

    #[test]
    fn test_on_tick_noop_while_paused() {
        let mut state = TimerDialogState::new(&settings());
        let before = state.timer.remaining();
        state.on_tick();
        assert_eq!(state.timer.remaining(), before);
    }

    #[test]
    fn test_gate_poll_carries_remainder() {
        let mut gate = TickGate::new();
        // immediately after creation no whole second has elapsed
        assert_eq!(gate.poll(), 0);
    }

    #[test]
    fn test_toggle_round_trip() {
        let mut state = TimerDialogState::new(&settings());
        state.toggle();
        assert!(state.timer.is_running());
        state.toggle();
        assert!(!state.timer.is_running());
    }

    #[test]
    fn test_select_mode_switches_clock() {
        let mut state = TimerDialogState::new(&settings());
        state.select_mode(TimerMode::Break);
        assert_eq!(state.timer.mode(), TimerMode::Break);
        assert_eq!(
            state.timer.remaining(),
            state.timer.duration_for(TimerMode::Break)
        );
    }
}
