//! Focus/break countdown clock.
//!
//! The clock is a synchronous state machine: it never reads wall-clock time.
//! Whoever owns it is responsible for calling [`Clock::tick`] once per
//! elapsed second while [`Clock::is_running`] is true.

use serde::{Deserialize, Serialize};

/// Length of a focus phase in seconds (25 minutes).
pub const FOCUS_SECONDS: u32 = 25 * 60;

/// Length of a break phase in seconds (5 minutes).
pub const BREAK_SECONDS: u32 = 5 * 60;

/// Which half of the work/break cycle the clock is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Phase {
    /// Work period.
    #[default]
    Focus,
    /// Rest period.
    Break,
}

impl Phase {
    /// Fixed duration of this phase in seconds.
    #[must_use]
    pub const fn duration_secs(self) -> u32 {
        match self {
            Self::Focus => FOCUS_SECONDS,
            Self::Break => BREAK_SECONDS,
        }
    }

    /// The phase that follows this one.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Focus => Self::Break,
            Self::Break => Self::Focus,
        }
    }

    /// Human-readable heading for the phase.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Focus => "Focus Time",
            Self::Break => "Break Time",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Focus => write!(f, "focus"),
            Self::Break => write!(f, "break"),
        }
    }
}

/// Countdown clock state.
///
/// Remaining time is kept as a single second counter so minutes and
/// seconds can never disagree; use [`Clock::minutes`] and
/// [`Clock::seconds`] for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Clock {
    phase: Phase,
    remaining_secs: u32,
    running: bool,
}

impl Clock {
    /// A paused clock at the start of a focus phase.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: Phase::Focus,
            remaining_secs: FOCUS_SECONDS,
            running: false,
        }
    }

    /// Builds a clock in an arbitrary state.
    ///
    /// `remaining_secs` is clamped to the phase duration.
    #[must_use]
    pub fn with_state(phase: Phase, remaining_secs: u32, running: bool) -> Self {
        Self {
            phase,
            remaining_secs: remaining_secs.min(phase.duration_secs()),
            running,
        }
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Seconds left in the current phase.
    #[must_use]
    pub const fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    /// Whether ticks currently advance the clock.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Whole minutes left, for display.
    #[must_use]
    pub const fn minutes(&self) -> u32 {
        self.remaining_secs / 60
    }

    /// Seconds past the whole minute, for display.
    #[must_use]
    pub const fn seconds(&self) -> u32 {
        self.remaining_secs % 60
    }

    /// Remaining time as zero-padded `MM:SS`.
    #[must_use]
    pub fn display(&self) -> String {
        format!("{:02}:{:02}", self.minutes(), self.seconds())
    }

    /// Starts the countdown. No-op when already running.
    pub fn start(&mut self) {
        if !self.running {
            tracing::debug!(phase = %self.phase, remaining = self.remaining_secs, "clock started");
            self.running = true;
        }
    }

    /// Pauses the countdown. No-op when already paused.
    pub fn pause(&mut self) {
        if self.running {
            tracing::debug!(phase = %self.phase, remaining = self.remaining_secs, "clock paused");
            self.running = false;
        }
    }

    /// Returns to a paused focus phase with the full duration, whatever the
    /// current state is.
    pub fn reset(&mut self) {
        tracing::debug!("clock reset");
        *self = Self::new();
    }

    /// Advances the clock by one second. No-op while paused.
    ///
    /// The phase flip happens on the tick *after* the counter reaches zero,
    /// so `00:00` is shown for a full second in the old phase.
    // NOTE: possibly an unintended artifact of lazy zero detection. Tests
    // pin the current behavior; see DESIGN.md before changing it.
    pub fn tick(&mut self) {
        if !self.running {
            return;
        }
        if self.remaining_secs > 0 {
            self.remaining_secs -= 1;
            return;
        }
        let next = self.phase.next();
        tracing::info!(from = %self.phase, to = %next, "phase complete");
        self.phase = next;
        self.remaining_secs = next.duration_secs();
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}
