use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::events::Event;
use crate::player::PlayerState;
use crate::timer::TickResult;

/// Observable state of a session.
///
/// ```text
/// Idle ──toggle──▶ Active ──toggle──▶ Idle
///                    │
///                    └─last tick─▶ Completed ──reset / dismiss──▶ Idle
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionPhase {
    Idle,
    Active,
    Completed,
}

/// End-of-session stats, captured the moment the countdown finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub focus_points: u64,
    pub experience: u64,
    pub gold: u64,
    pub final_health: u32,
}

impl SessionSummary {
    pub fn capture(player: &PlayerState) -> Self {
        Self {
            focus_points: player.focus_points(),
            experience: player.experience(),
            gold: player.gold(),
            final_health: player.health(),
        }
    }
}

/// Result of one [`Session::advance`](super::Session::advance) step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickOutcome {
    pub clock: TickResult,
    /// Adventure event generated on this step, if the cadence came due.
    pub generated: Option<Event>,
    /// Set on the step that finished the session.
    pub completed: Option<SessionSummary>,
}

impl TickOutcome {
    pub fn is_complete(&self) -> bool {
        self.completed.is_some()
    }
}

/// Read model handed to presentation layers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub phase: SessionPhase,
    pub remaining_secs: u64,
    pub remaining_display: String,
    pub health: u32,
    pub experience: u64,
    pub gold: u64,
    pub focus_points: u64,
    pub event_count: usize,
    pub latest_event: Option<Event>,
    pub summary: Option<SessionSummary>,
    pub at: DateTime<Utc>,
}
