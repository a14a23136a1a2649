//! Pomodoro-style session timer
//!
//! A countdown clock alternating between focus and break intervals. The timer
//! is driven entirely from the outside: the owning view calls [`SessionTimer::tick`]
//! once per elapsed second while the countdown is running. All operations are
//! total; there are no error conditions.

use std::fmt;

/// Which interval the timer is counting down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimerMode {
    /// A focus (study) interval
    #[default]
    Focus,
    /// A rest interval between focus sessions
    Break,
}

impl fmt::Display for TimerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Focus => write!(f, "Focus"),
            Self::Break => write!(f, "Break"),
        }
    }
}

/// The session timer state machine
///
/// States are {Focus, Break} x {idle, running}. `start`/`pause` move along
/// the running axis; a tick that exhausts the countdown crosses the mode axis
/// and lands idle. The machine is cyclic and has no terminal state.
#[derive(Debug, Clone)]
pub struct SessionTimer {
    /// Seconds left in the current interval
    remaining: u32,
    /// Current interval kind
    mode: TimerMode,
    /// Whether the countdown is actively decrementing
    running: bool,
    /// Focus intervals completed so far. Only the Focus -> Break transition
    /// moves this counter; finishing a break does not.
    completed_focus_sessions: u32,
    /// Canonical focus duration in seconds
    focus_duration: u32,
    /// Canonical break duration in seconds
    break_duration: u32,
}

impl SessionTimer {
    /// Default focus interval: 25 minutes
    pub const DEFAULT_FOCUS_SECS: u32 = 25 * 60;
    /// Default break interval: 5 minutes
    pub const DEFAULT_BREAK_SECS: u32 = 5 * 60;

    /// Create a timer with the standard 25/5 minute intervals, idle in focus
    /// mode
    pub fn new() -> Self {
        Self::with_durations(Self::DEFAULT_FOCUS_SECS, Self::DEFAULT_BREAK_SECS)
    }

    /// Create a timer with custom interval lengths (in seconds)
    ///
    /// Zero-length intervals are clamped to one second so the countdown
    /// always has a 1 -> 0 edge to transition on.
    pub fn with_durations(focus_secs: u32, break_secs: u32) -> Self {
        let focus_duration = focus_secs.max(1);
        let break_duration = break_secs.max(1);
        Self {
            remaining: focus_duration,
            mode: TimerMode::Focus,
            running: false,
            completed_focus_sessions: 0,
            focus_duration,
            break_duration,
        }
    }

    /// Seconds left in the current interval
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Minutes and seconds left, for display
    pub fn remaining_min_sec(&self) -> (u32, u32) {
        (self.remaining / 60, self.remaining % 60)
    }

    /// Current interval kind
    pub fn mode(&self) -> TimerMode {
        self.mode
    }

    /// Whether the countdown is actively decrementing
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Number of completed focus intervals
    pub fn completed_focus_sessions(&self) -> u32 {
        self.completed_focus_sessions
    }

    /// The canonical duration for a given mode
    pub fn duration_for(&self, mode: TimerMode) -> u32 {
        match mode {
            TimerMode::Focus => self.focus_duration,
            TimerMode::Break => self.break_duration,
        }
    }

    /// Start the countdown. No-op if already running or the interval is
    /// already exhausted.
    pub fn start(&mut self) {
        if !self.running && self.remaining > 0 {
            self.running = true;
        }
    }

    /// Pause the countdown. No-op if not running.
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Toggle between running and paused
    pub fn toggle(&mut self) {
        if self.running {
            self.pause();
        } else {
            self.start();
        }
    }

    /// Stop the countdown and restore the canonical duration for the current
    /// mode. Mode and session counter are untouched.
    pub fn reset(&mut self) {
        self.running = false;
        self.remaining = self.duration_for(self.mode);
    }

    /// Explicitly switch to the given mode, restoring that mode's canonical
    /// duration and stopping the countdown
    pub fn select_mode(&mut self, mode: TimerMode) {
        self.mode = mode;
        self.remaining = self.duration_for(mode);
        self.running = false;
    }

    /// Advance the countdown by one second
    ///
    /// Invoked by the owning view once per elapsed second while running.
    /// When the countdown reaches zero the timer transitions to the other
    /// mode in one step: `remaining` is never observable below zero and the
    /// new interval starts idle at its full duration.
    pub fn tick(&mut self) {
        if !self.running || self.remaining == 0 {
            return;
        }

        self.remaining -= 1;
        if self.remaining > 0 {
            return;
        }

        // Interval finished: cross the mode axis and land idle
        self.running = false;
        match self.mode {
            TimerMode::Focus => {
                self.completed_focus_sessions += 1;
                self.mode = TimerMode::Break;
                self.remaining = self.break_duration;
            }
            TimerMode::Break => {
                self.mode = TimerMode::Focus;
                self.remaining = self.focus_duration;
            }
        }
    }
}

impl Default for SessionTimer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Run `n` ticks, restarting the countdown whenever a mode transition
    /// pauses it (models a user who immediately resumes).
    fn tick_running(timer: &mut SessionTimer, n: u32) {
        for _ in 0..n {
            timer.start();
            timer.tick();
        }
    }

    #[test]
    fn test_initial_state() {
        let timer = SessionTimer::new();
        assert_eq!(timer.mode(), TimerMode::Focus);
        assert_eq!(timer.remaining(), 25 * 60);
        assert!(!timer.is_running());
        assert_eq!(timer.completed_focus_sessions(), 0);
    }

    #[test]
    fn test_tick_ignored_while_idle() {
        let mut timer = SessionTimer::new();
        timer.tick();
        assert_eq!(timer.remaining(), 25 * 60);
    }

    #[test]
    fn test_start_and_pause() {
        let mut timer = SessionTimer::new();
        timer.start();
        assert!(timer.is_running());
        timer.tick();
        assert_eq!(timer.remaining(), 25 * 60 - 1);
        timer.pause();
        timer.tick();
        assert_eq!(timer.remaining(), 25 * 60 - 1);
    }

    #[test]
    fn test_full_focus_interval_transitions_to_break() {
        let mut timer = SessionTimer::new();
        timer.start();
        for _ in 0..(25 * 60) {
            timer.tick();
        }
        assert_eq!(timer.mode(), TimerMode::Break);
        assert_eq!(timer.remaining(), 5 * 60);
        assert!(!timer.is_running());
        assert_eq!(timer.completed_focus_sessions(), 1);
    }

    #[test]
    fn test_transition_fires_exactly_on_the_one_to_zero_edge() {
        let mut timer = SessionTimer::with_durations(3, 2);
        timer.start();
        timer.tick();
        timer.tick();
        // 1 second left, still focus
        assert_eq!(timer.remaining(), 1);
        assert_eq!(timer.mode(), TimerMode::Focus);
        timer.tick();
        assert_eq!(timer.mode(), TimerMode::Break);
        assert_eq!(timer.remaining(), 2);
    }

    #[test]
    fn test_remaining_never_negative() {
        let mut timer = SessionTimer::with_durations(2, 2);
        for _ in 0..100 {
            timer.start();
            timer.tick();
            assert!(timer.remaining() <= 2);
        }
    }

    #[test]
    fn test_break_completion_does_not_count_a_session() {
        let mut timer = SessionTimer::with_durations(2, 2);
        // Focus interval
        tick_running(&mut timer, 2);
        assert_eq!(timer.completed_focus_sessions(), 1);
        assert_eq!(timer.mode(), TimerMode::Break);
        // Break interval: counter stays put
        tick_running(&mut timer, 2);
        assert_eq!(timer.completed_focus_sessions(), 1);
        assert_eq!(timer.mode(), TimerMode::Focus);
    }

    #[test]
    fn test_reset_restores_current_mode_duration() {
        let mut timer = SessionTimer::new();
        timer.start();
        for _ in 0..90 {
            timer.tick();
        }
        timer.reset();
        assert_eq!(timer.remaining(), 25 * 60);
        assert_eq!(timer.mode(), TimerMode::Focus);
        assert!(!timer.is_running());
        assert_eq!(timer.completed_focus_sessions(), 0);
    }

    #[test]
    fn test_reset_in_break_mode_uses_break_duration() {
        let mut timer = SessionTimer::new();
        timer.select_mode(TimerMode::Break);
        timer.start();
        timer.tick();
        timer.reset();
        assert_eq!(timer.mode(), TimerMode::Break);
        assert_eq!(timer.remaining(), 5 * 60);
    }

    #[test]
    fn test_select_mode_stops_countdown() {
        let mut timer = SessionTimer::new();
        timer.start();
        timer.tick();
        timer.select_mode(TimerMode::Break);
        assert!(!timer.is_running());
        assert_eq!(timer.remaining(), 5 * 60);
        assert_eq!(timer.mode(), TimerMode::Break);
    }

    #[test]
    fn test_1500_ticks_complete_a_standard_focus_session() {
        let mut timer = SessionTimer::new();
        tick_running(&mut timer, 1500);
        assert_eq!(timer.mode(), TimerMode::Break);
        assert_eq!(timer.remaining(), 5 * 60);
        assert_eq!(timer.completed_focus_sessions(), 1);
    }

    #[test]
    fn test_custom_durations_from_settings() {
        let timer = SessionTimer::with_durations(50 * 60, 10 * 60);
        assert_eq!(timer.remaining(), 50 * 60);
        assert_eq!(timer.duration_for(TimerMode::Break), 10 * 60);
    }

    #[test]
    fn test_remaining_min_sec() {
        let mut timer = SessionTimer::new();
        assert_eq!(timer.remaining_min_sec(), (25, 0));
        timer.start();
        timer.tick();
        assert_eq!(timer.remaining_min_sec(), (24, 59));
    }
}
