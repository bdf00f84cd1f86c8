//! Countdown clock.
//!
//! The clock is tick-driven: it has no notion of wall time and no internal
//! thread. Each call to [`Clock::tick`] represents one elapsed second, and the
//! caller (a session, or a test) decides when that happens.
//!
//! ## Usage
//!
//! ```
//! use focusquest_core::timer::{Clock, TickResult};
//!
//! let mut clock = Clock::new(2);
//! clock.start();
//! assert_eq!(clock.tick(), TickResult::Elapsed);
//! assert_eq!(clock.tick(), TickResult::Finished { elapsed: true });
//! assert!(!clock.is_running());
//! ```

use serde::{Deserialize, Serialize};

/// Thirty minutes.
pub const DEFAULT_DURATION_SECS: u64 = 30 * 60;

/// What a single tick did to the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "result")]
pub enum TickResult {
    /// Clock is stopped; nothing changed.
    Idle,
    /// One second elapsed and time is still remaining.
    Elapsed,
    /// The countdown is over and the clock has stopped itself. `elapsed` is
    /// false when the clock was already at zero before the tick.
    Finished { elapsed: bool },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clock {
    remaining_secs: u64,
    running: bool,
}

impl Clock {
    /// A stopped clock with `secs` on it.
    pub fn new(secs: u64) -> Self {
        Self {
            remaining_secs: secs,
            running: false,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Remaining time as `MM:SS`.
    pub fn display(&self) -> String {
        format_mm_ss(self.remaining_secs)
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    pub fn toggle(&mut self) {
        self.running = !self.running;
    }

    /// Rebase the countdown. Does not touch the running flag.
    pub fn set_duration(&mut self, minutes: u32) {
        self.remaining_secs = u64::from(minutes).saturating_mul(60);
    }

    pub fn reset(&mut self, secs: u64) {
        self.remaining_secs = secs;
        self.running = false;
    }

    /// Advance by one second.
    ///
    /// A tick that takes the clock to zero reports [`TickResult::Finished`]
    /// straight away, so a clock started at `N` finishes on its `N`th tick.
    /// Ticking a running clock that is already at zero also finishes it,
    /// without elapsing anything.
    pub fn tick(&mut self) -> TickResult {
        if !self.running {
            return TickResult::Idle;
        }
        if self.remaining_secs == 0 {
            self.running = false;
            return TickResult::Finished { elapsed: false };
        }
        self.remaining_secs -= 1;
        if self.remaining_secs == 0 {
            self.running = false;
            return TickResult::Finished { elapsed: true };
        }
        TickResult::Elapsed
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION_SECS)
    }
}

/// Render seconds as zero-padded `MM:SS`. Minutes are not wrapped at 60.
pub fn format_mm_ss(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
