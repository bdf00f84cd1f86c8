//! Session controller.
//!
//! Owns the clock, the player, the adventure log and the random source, and
//! is the only thing that mutates them. Like the clock it has no thread of its
//! own: a driver calls [`Session::tick`] once per second and
//! [`Session::maybe_generate`] on the slower event cadence, or calls
//! [`Session::advance`] once per second and lets the session apply the cadence
//! itself.
//!
//! ## Usage
//!
//! ```
//! use focusquest_core::{Session, SessionConfig, SessionPhase};
//!
//! let mut session = Session::new(SessionConfig { seed: Some(7), ..Default::default() });
//! session.set_duration(1).unwrap();
//! session.toggle();
//! while !session.advance().is_complete() {}
//! assert_eq!(session.phase(), SessionPhase::Completed);
//! assert_eq!(session.player().focus_points(), 60);
//! ```

mod summary;

pub use summary::{SessionPhase, SessionSnapshot, SessionSummary, TickOutcome};

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::adventure::{EventGenerator, RandomSource, SeededRandom};
use crate::config::SessionConfig;
use crate::error::ValidationError;
use crate::events::Event;
use crate::log::EventLog;
use crate::player::PlayerState;
use crate::timer::{Clock, TickResult};

pub const MIN_DURATION_MINUTES: u32 = 1;
pub const MAX_DURATION_MINUTES: u32 = 120;

/// Reject minutes outside `MIN_DURATION_MINUTES..=MAX_DURATION_MINUTES`.
pub fn validate_duration(minutes: u32) -> Result<(), ValidationError> {
    if (MIN_DURATION_MINUTES..=MAX_DURATION_MINUTES).contains(&minutes) {
        Ok(())
    } else {
        Err(ValidationError::DurationOutOfRange {
            minutes,
            min: MIN_DURATION_MINUTES,
            max: MAX_DURATION_MINUTES,
        })
    }
}

#[derive(Debug, Clone)]
pub struct Session<R = SeededRandom> {
    config: SessionConfig,
    clock: Clock,
    player: PlayerState,
    log: EventLog,
    summary: Option<SessionSummary>,
    generator: EventGenerator,
    rng: R,
    /// Clock ticks taken while active since the last reset.
    active_ticks: u64,
    resets: u64,
}

impl Session<SeededRandom> {
    /// Session with a PCG source, seeded from `config.seed` when set.
    pub fn new(config: SessionConfig) -> Self {
        let rng = SeededRandom::new(config.seed);
        Self::with_rng(config, rng)
    }
}

impl Default for Session<SeededRandom> {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl<R: RandomSource> Session<R> {
    pub fn with_rng(config: SessionConfig, rng: R) -> Self {
        Self {
            clock: Clock::new(config.duration_secs()),
            config,
            player: PlayerState::new(),
            log: EventLog::new(),
            summary: None,
            generator: EventGenerator::new(),
            rng,
            active_ticks: 0,
            resets: 0,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn phase(&self) -> SessionPhase {
        if self.clock.is_running() {
            SessionPhase::Active
        } else if self.summary.is_some() {
            SessionPhase::Completed
        } else {
            SessionPhase::Idle
        }
    }

    pub fn remaining_secs(&self) -> u64 {
        self.clock.remaining_secs()
    }

    /// Remaining time as `MM:SS`.
    pub fn remaining_display(&self) -> String {
        self.clock.display()
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn log(&self) -> &EventLog {
        &self.log
    }

    /// Present only while the session is completed and not yet dismissed.
    pub fn summary(&self) -> Option<&SessionSummary> {
        self.summary.as_ref()
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Number of times [`Session::reset`] has been called.
    pub fn reset_count(&self) -> u64 {
        self.resets
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            phase: self.phase(),
            remaining_secs: self.remaining_secs(),
            remaining_display: self.remaining_display(),
            health: self.player.health(),
            experience: self.player.experience(),
            gold: self.player.gold(),
            focus_points: self.player.focus_points(),
            event_count: self.log.len(),
            latest_event: self.log.latest().cloned(),
            summary: self.summary,
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Start or pause. Ignored while a summary is on display.
    pub fn toggle(&mut self) -> SessionPhase {
        match self.phase() {
            SessionPhase::Completed => {
                debug!("toggle ignored while summary is shown");
            }
            SessionPhase::Idle | SessionPhase::Active => {
                self.clock.toggle();
                debug!(phase = ?self.phase(), remaining_secs = self.remaining_secs(), "session toggled");
            }
        }
        self.phase()
    }

    /// Idle → Active. Returns false if the session was not idle.
    pub fn start(&mut self) -> bool {
        if self.phase() != SessionPhase::Idle {
            return false;
        }
        self.toggle() == SessionPhase::Active
    }

    /// Active → Idle. Returns false if the session was not active.
    pub fn pause(&mut self) -> bool {
        if self.phase() != SessionPhase::Active {
            return false;
        }
        self.toggle() == SessionPhase::Idle
    }

    /// One second of the countdown. Returns the summary on the tick that
    /// completes the session.
    pub fn tick(&mut self) -> Option<SessionSummary> {
        self.tick_clock().1
    }

    /// Generate one adventure event if the session is active with time
    /// remaining.
    pub fn maybe_generate(&mut self) -> Option<&Event> {
        if self.phase() != SessionPhase::Active || self.remaining_secs() == 0 {
            return None;
        }
        let event = self.generator.generate(&mut self.rng, &mut self.player);
        self.log.push(event);
        self.log.latest()
    }

    /// One tick, plus an event whenever the cadence comes due.
    pub fn advance(&mut self) -> TickOutcome {
        let (clock, completed) = self.tick_clock();
        let cadence = u64::from(self.config.event_cadence_ticks.max(1));
        let generated = if clock == TickResult::Elapsed && self.active_ticks % cadence == 0 {
            self.maybe_generate().cloned()
        } else {
            None
        };
        TickOutcome {
            clock,
            generated,
            completed,
        }
    }

    /// Rebase the countdown to `minutes` without pausing.
    ///
    /// Out-of-range input is rejected and leaves the session untouched. When
    /// called on a completed session the summary is dismissed.
    pub fn set_duration(&mut self, minutes: u32) -> Result<(), ValidationError> {
        if let Err(err) = validate_duration(minutes) {
            warn!(minutes, "rejected session duration");
            return Err(err);
        }
        self.clock.set_duration(minutes);
        self.summary = None;
        debug!(minutes, phase = ?self.phase(), "session duration set");
        Ok(())
    }

    /// Completed → Idle, keeping the log and stats.
    pub fn dismiss_summary(&mut self) -> Option<SessionSummary> {
        self.summary.take()
    }

    /// Back to the default session. Idempotent.
    pub fn reset(&mut self) {
        self.clock.reset(self.config.duration_secs());
        self.player = PlayerState::new();
        self.log.clear();
        self.summary = None;
        self.active_ticks = 0;
        self.resets += 1;
        debug!(remaining_secs = self.remaining_secs(), "session reset");
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn tick_clock(&mut self) -> (TickResult, Option<SessionSummary>) {
        let result = self.clock.tick();
        match result {
            TickResult::Idle => (result, None),
            TickResult::Elapsed => {
                self.active_ticks += 1;
                self.player.award_focus_point();
                (result, None)
            }
            TickResult::Finished { elapsed } => {
                if elapsed {
                    self.active_ticks += 1;
                    self.player.award_focus_point();
                }
                (result, Some(self.complete()))
            }
        }
    }

    fn complete(&mut self) -> SessionSummary {
        self.log.push(Event::summary());
        let summary = SessionSummary::capture(&self.player);
        self.summary = Some(summary);
        info!(
            focus_points = summary.focus_points,
            experience = summary.experience,
            gold = summary.gold,
            final_health = summary.final_health,
            "session completed"
        );
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adventure::ScriptedRandom;
    use crate::events::EventKind;
    use crate::player::MAX_HEALTH;

    fn scripted(values: impl IntoIterator<Item = u32>) -> Session<ScriptedRandom> {
        Session::with_rng(SessionConfig::default(), ScriptedRandom::new(values))
    }

    #[test]
    fn new_session_is_idle_with_defaults() {
        let session = Session::default();
        assert_eq!(session.phase(), SessionPhase::Idle);
        assert_eq!(session.remaining_secs(), 1800);
        assert_eq!(session.remaining_display(), "30:00");
        assert!(session.log().is_empty());
        assert!(session.summary().is_none());
        assert_eq!(session.player(), &PlayerState::new());
    }

    #[test]
    fn toggle_starts_and_pauses() {
        let mut session = scripted([]);
        assert_eq!(session.toggle(), SessionPhase::Active);
        assert_eq!(session.toggle(), SessionPhase::Idle);
        assert!(session.start());
        assert!(!session.start());
        assert!(session.pause());
        assert!(!session.pause());
    }

    #[test]
    fn idle_tick_changes_nothing() {
        let mut session = scripted([]);
        assert!(session.tick().is_none());
        assert_eq!(session.remaining_secs(), 1800);
        assert_eq!(session.player().focus_points(), 0);
    }

    #[test]
    fn active_tick_awards_focus_point() {
        let mut session = scripted([]);
        session.toggle();
        session.tick();
        assert_eq!(session.remaining_secs(), 1799);
        assert_eq!(session.player().focus_points(), 1);
    }

    #[test]
    fn maybe_generate_requires_active() {
        let mut session = scripted([50, 10]);
        assert!(session.maybe_generate().is_none());
        assert!(session.log().is_empty());
        session.toggle();
        let event = session.maybe_generate().cloned().unwrap();
        assert_eq!(event.kind, EventKind::Rest { healed: 10 });
        assert_eq!(session.log().len(), 1);
    }

    #[test]
    fn maybe_generate_skips_active_session_at_zero() {
        let mut session = scripted([50, 10]);
        session.set_duration(1).unwrap();
        session.toggle();
        while session.tick().is_none() {}
        session.dismiss_summary();
        assert_eq!(session.toggle(), SessionPhase::Active);
        assert_eq!(session.remaining_secs(), 0);

        assert!(session.maybe_generate().is_none());
        assert_eq!(session.log().len(), 1);
        assert_eq!(session.player().health(), MAX_HEALTH);
        assert_eq!(session.player().focus_points(), 60);
    }

    #[test]
    fn generated_events_are_newest_first() {
        let mut session = scripted([50, 5, 50, 6, 50, 7]);
        session.toggle();
        for _ in 0..3 {
            session.maybe_generate();
        }
        let healed: Vec<_> = session
            .log()
            .iter()
            .map(|e| match e.kind {
                EventKind::Rest { healed } => healed,
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(healed, vec![7, 6, 5]);
    }

    #[test]
    fn completion_adds_summary_marker_and_snapshot() {
        let mut session = scripted([]);
        session.set_duration(1).unwrap();
        session.toggle();
        let mut summary = None;
        for _ in 0..60 {
            summary = session.tick();
        }
        let summary = summary.expect("60th tick completes");
        assert_eq!(session.phase(), SessionPhase::Completed);
        assert_eq!(summary.focus_points, 60);
        assert_eq!(summary.final_health, session.player().health());
        assert!(session.log().latest().unwrap().is_summary());
        assert_eq!(session.summary(), Some(&summary));
    }

    #[test]
    fn toggle_ignored_when_completed() {
        let mut session = scripted([]);
        session.set_duration(1).unwrap();
        session.toggle();
        while session.tick().is_none() {}
        assert_eq!(session.toggle(), SessionPhase::Completed);
        assert_eq!(session.tick(), None);
    }

    #[test]
    fn dismiss_keeps_log_and_goes_idle() {
        let mut session = scripted([]);
        session.set_duration(1).unwrap();
        session.toggle();
        while session.tick().is_none() {}
        let shown = session.dismiss_summary();
        assert!(shown.is_some());
        assert_eq!(session.phase(), SessionPhase::Idle);
        assert_eq!(session.log().len(), 1);
        assert_eq!(session.player().focus_points(), 60);
        assert!(session.dismiss_summary().is_none());
    }

    #[test]
    fn restart_at_zero_completes_without_awarding() {
        let mut session = scripted([]);
        session.set_duration(1).unwrap();
        session.toggle();
        while session.tick().is_none() {}
        session.dismiss_summary();
        session.toggle();
        let summary = session.tick().unwrap();
        assert_eq!(summary.focus_points, 60);
        assert_eq!(session.phase(), SessionPhase::Completed);
        assert_eq!(session.log().len(), 2);
    }

    #[test]
    fn set_duration_rejects_out_of_range() {
        let mut session = scripted([]);
        for minutes in [0, 121, u32::MAX] {
            let err = session.set_duration(minutes).unwrap_err();
            assert!(matches!(err, ValidationError::DurationOutOfRange { .. }));
        }
        assert_eq!(session.remaining_secs(), 1800);
        session.set_duration(120).unwrap();
        assert_eq!(session.remaining_secs(), 7200);
    }

    #[test]
    fn set_duration_while_active_keeps_running() {
        let mut session = scripted([]);
        session.toggle();
        session.tick();
        session.set_duration(5).unwrap();
        assert_eq!(session.phase(), SessionPhase::Active);
        assert_eq!(session.remaining_secs(), 300);
    }

    #[test]
    fn set_duration_dismisses_summary() {
        let mut session = scripted([]);
        session.set_duration(1).unwrap();
        session.toggle();
        while session.tick().is_none() {}
        session.set_duration(2).unwrap();
        assert_eq!(session.phase(), SessionPhase::Idle);
        assert_eq!(session.remaining_secs(), 120);
        assert_eq!(session.log().len(), 1);
    }

    #[test]
    fn advance_generates_every_third_tick() {
        let mut session = scripted([50, 5, 50, 5]);
        session.toggle();
        let generated: Vec<bool> = (0..6).map(|_| session.advance().generated.is_some()).collect();
        assert_eq!(generated, vec![false, false, true, false, false, true]);
        assert_eq!(session.log().len(), 2);
    }

    #[test]
    fn advance_respects_configured_cadence() {
        let config = SessionConfig {
            event_cadence_ticks: 1,
            ..SessionConfig::default()
        };
        let mut session = Session::with_rng(config, ScriptedRandom::new([]));
        session.toggle();
        for _ in 0..4 {
            assert!(session.advance().generated.is_some());
        }
    }

    #[test]
    fn advance_does_not_generate_on_final_tick() {
        let config = SessionConfig {
            event_cadence_ticks: 1,
            ..SessionConfig::default()
        };
        let mut session = Session::with_rng(config, ScriptedRandom::new([]));
        session.set_duration(1).unwrap();
        session.toggle();
        let mut last = None;
        for _ in 0..60 {
            last = Some(session.advance());
        }
        let last = last.unwrap();
        assert!(last.is_complete());
        assert!(last.generated.is_none());
        assert_eq!(session.log().len(), 60);
        assert!(session.log().latest().unwrap().is_summary());
    }

    #[test]
    fn reset_restores_defaults_and_is_idempotent() {
        let mut session = scripted([80, 0, 10, 10, 5]);
        session.toggle();
        session.tick();
        session.maybe_generate();
        assert_eq!(session.player().health(), MAX_HEALTH - 10);

        session.reset();
        let once = session.snapshot();
        session.reset();
        let twice = session.snapshot();

        assert_eq!(session.reset_count(), 2);
        for snap in [once, twice] {
            assert_eq!(snap.phase, SessionPhase::Idle);
            assert_eq!(snap.remaining_secs, 1800);
            assert_eq!(snap.event_count, 0);
            assert_eq!(snap.health, MAX_HEALTH);
            assert_eq!(snap.focus_points, 0);
            assert!(snap.summary.is_none());
        }
    }

    #[test]
    fn reset_uses_configured_duration() {
        let config = SessionConfig {
            duration_minutes: 25,
            ..SessionConfig::default()
        };
        let mut session = Session::with_rng(config, ScriptedRandom::new([]));
        session.set_duration(3).unwrap();
        session.reset();
        assert_eq!(session.remaining_secs(), 25 * 60);
    }
}
