// timer.rs - Countdown State Machine
//
// The countdown owns a single integer of remaining seconds. Ticks are
// delivered once per second by the UI runtime while the state is Running;
// stopping the countdown stops the ticks.

use log::{info, warn};
use thiserror::Error;

use crate::constants::timer::{DEFAULT_MINUTES, MAX_MINUTES};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimerError {
    #[error("Please enter a valid number of minutes")]
    NotANumber,
    #[error("Please enter a time between 1 and 1440 minutes (24 hours)")]
    OutOfRange(i64),
}

impl TimerError {
    /// Dialog title for this error
    pub fn title(&self) -> &'static str {
        match self {
            TimerError::NotANumber => "Invalid Input",
            TimerError::OutOfRange(_) => "Invalid Time",
        }
    }
}

/// Parse the text typed into the custom timer dialog
pub fn parse_custom_minutes(input: &str) -> Result<u32, TimerError> {
    let minutes: i64 = input.trim().parse().map_err(|_| TimerError::NotANumber)?;
    if (1..=MAX_MINUTES as i64).contains(&minutes) {
        Ok(minutes as u32)
    } else {
        Err(TimerError::OutOfRange(minutes))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimerState {
    /// Freshly set or reset, not started yet
    #[default]
    Idle,
    Running,
    /// Paused with time remaining
    Stopped,
}

/// Result of a single one-second tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The countdown wasn't running; nothing changed
    Idle,
    /// Seconds left after this tick
    Continue(u32),
    /// The session ran out. The countdown is back at its default length.
    Completed { minutes: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    remaining_secs: u32,
    session_minutes: u32,
    default_minutes: u32,
    state: TimerState,
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new(DEFAULT_MINUTES)
    }
}

impl Countdown {
    /// A countdown whose sessions and resets are `default_minutes` long
    pub fn new(default_minutes: u32) -> Self {
        let default_minutes = default_minutes.clamp(1, MAX_MINUTES);
        Self {
            remaining_secs: default_minutes * 60,
            session_minutes: default_minutes,
            default_minutes,
            state: TimerState::Idle,
        }
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn session_minutes(&self) -> u32 {
        self.session_minutes
    }

    pub fn default_minutes(&self) -> u32 {
        self.default_minutes
    }

    /// Returns false when already running or nothing is left to count
    pub fn start(&mut self) -> bool {
        if self.is_running() {
            warn!("Timer already running");
            return false;
        }
        if self.remaining_secs == 0 {
            return false;
        }
        self.state = TimerState::Running;
        info!("Timer started with {} remaining", self.display());
        true
    }

    pub fn stop(&mut self) {
        if self.is_running() {
            self.state = TimerState::Stopped;
            info!("Timer stopped at {}", self.display());
        }
    }

    /// Start when idle or stopped, stop when running
    pub fn toggle(&mut self) {
        if self.is_running() {
            self.stop();
        } else {
            self.start();
        }
    }

    /// Stop and load a new session length
    pub fn set_minutes(&mut self, minutes: u32) {
        let minutes = minutes.clamp(1, MAX_MINUTES);
        self.state = TimerState::Idle;
        self.session_minutes = minutes;
        self.remaining_secs = minutes * 60;
        info!("Timer set to {} minutes", minutes);
    }

    pub fn reset(&mut self) {
        self.set_minutes(self.default_minutes);
    }

    pub fn tick(&mut self) -> TickOutcome {
        if !self.is_running() {
            return TickOutcome::Idle;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs > 0 {
            return TickOutcome::Continue(self.remaining_secs);
        }

        let minutes = self.session_minutes;
        info!("{}-minute focus session completed", minutes);
        self.reset();
        TickOutcome::Completed { minutes }
    }

    /// `MM:SS`, minutes are not capped at two digits
    pub fn display(&self) -> String {
        format_clock(self.remaining_secs)
    }
}

pub fn format_clock(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_session_is_fifty_minutes() {
        let countdown = Countdown::default();
        assert_eq!(countdown.remaining_secs(), 50 * 60);
        assert_eq!(countdown.display(), "50:00");
        assert_eq!(countdown.state(), TimerState::Idle);
    }

    #[test]
    fn test_start_stop_resume() {
        let mut countdown = Countdown::new(20);
        assert!(countdown.start());
        assert!(!countdown.start());
        assert_eq!(countdown.tick(), TickOutcome::Continue(20 * 60 - 1));

        countdown.stop();
        assert_eq!(countdown.state(), TimerState::Stopped);
        assert_eq!(countdown.tick(), TickOutcome::Idle);
        assert_eq!(countdown.display(), "19:59");

        assert!(countdown.start());
        countdown.tick();
        assert_eq!(countdown.display(), "19:58");
    }

    #[test]
    fn test_stop_when_idle_is_noop() {
        let mut countdown = Countdown::default();
        countdown.stop();
        assert_eq!(countdown.state(), TimerState::Idle);
    }

    #[test]
    fn test_set_minutes_stops_running_timer() {
        let mut countdown = Countdown::default();
        countdown.start();
        countdown.set_minutes(120);
        assert_eq!(countdown.state(), TimerState::Idle);
        assert_eq!(countdown.session_minutes(), 120);
        assert_eq!(countdown.display(), "120:00");
    }

    #[test]
    fn test_completion_reports_session_and_resets_to_default() {
        let mut countdown = Countdown::default();
        countdown.set_minutes(1);
        countdown.start();
        for _ in 0..59 {
            assert!(matches!(countdown.tick(), TickOutcome::Continue(_)));
        }
        assert_eq!(countdown.tick(), TickOutcome::Completed { minutes: 1 });
        assert_eq!(countdown.state(), TimerState::Idle);
        assert_eq!(countdown.session_minutes(), 50);
        assert_eq!(countdown.display(), "50:00");
    }

    #[test]
    fn test_toggle() {
        let mut countdown = Countdown::default();
        countdown.toggle();
        assert!(countdown.is_running());
        countdown.toggle();
        assert_eq!(countdown.state(), TimerState::Stopped);
    }

    #[test]
    fn test_reset_uses_configured_default() {
        let mut countdown = Countdown::new(25);
        countdown.set_minutes(5);
        countdown.reset();
        assert_eq!(countdown.display(), "25:00");
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(61), "01:01");
        assert_eq!(format_clock(1440 * 60), "1440:00");
    }

    #[test]
    fn test_parse_custom_minutes() {
        assert_eq!(parse_custom_minutes(" 45 "), Ok(45));
        assert_eq!(parse_custom_minutes("1440"), Ok(1440));
        assert_eq!(parse_custom_minutes("0"), Err(TimerError::OutOfRange(0)));
        assert_eq!(parse_custom_minutes("1441"), Err(TimerError::OutOfRange(1441)));
        assert_eq!(parse_custom_minutes("-5"), Err(TimerError::OutOfRange(-5)));
        assert_eq!(parse_custom_minutes("abc"), Err(TimerError::NotANumber));
        assert_eq!(parse_custom_minutes(""), Err(TimerError::NotANumber));
        assert_eq!(parse_custom_minutes("2.5"), Err(TimerError::NotANumber));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            TimerError::OutOfRange(0).to_string(),
            "Please enter a time between 1 and 1440 minutes (24 hours)"
        );
        assert_eq!(TimerError::NotANumber.title(), "Invalid Input");
    }
}
