//! Player stats mutated by the clock and by adventure events.

use serde::{Deserialize, Serialize};

pub const MAX_HEALTH: u32 = 100;

/// Health, experience, gold and focus points for one session.
///
/// Health always stays in `0..=MAX_HEALTH`. The other counters only grow
/// until the session is reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    health: u32,
    experience: u64,
    gold: u64,
    focus_points: u64,
}

impl PlayerState {
    pub fn new() -> Self {
        Self {
            health: MAX_HEALTH,
            experience: 0,
            gold: 0,
            focus_points: 0,
        }
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn experience(&self) -> u64 {
        self.experience
    }

    pub fn gold(&self) -> u64 {
        self.gold
    }

    pub fn focus_points(&self) -> u64 {
        self.focus_points
    }

    /// Returns the health actually lost.
    pub fn take_damage(&mut self, damage: u32) -> u32 {
        let before = self.health;
        self.health = self.health.saturating_sub(damage);
        before - self.health
    }

    /// Returns the health actually restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let before = self.health;
        self.health = self.health.saturating_add(amount).min(MAX_HEALTH);
        self.health - before
    }

    pub fn gain_experience(&mut self, amount: u32) {
        self.experience = self.experience.saturating_add(u64::from(amount));
    }

    pub fn gain_gold(&mut self, amount: u32) {
        self.gold = self.gold.saturating_add(u64::from(amount));
    }

    pub fn award_focus_point(&mut self) {
        self.focus_points = self.focus_points.saturating_add(1);
    }

    #[cfg(test)]
    pub(crate) fn with_health(health: u32) -> Self {
        Self {
            health: health.min(MAX_HEALTH),
            ..Self::new()
        }
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new()
    }
}
