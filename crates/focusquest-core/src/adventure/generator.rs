//! Random adventure events.
//!
//! ## Draw order
//!
//! ```text
//! roll 0..=99 ─┬─ > 70 ─ Enemy:    enemy 0..=3, damage 1..=10, exp 10..=50, gold 5..=30
//!              ├─ > 20 ─ Rest:     healing 5..=20
//!              └─ else ─ Treasure: item 0..=2, gold 20..=100
//! ```
//!
//! The order is fixed so a scripted [`RandomSource`] drives the generator to
//! a known outcome.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::rng::RandomSource;
use super::roster::{Enemy, TreasureItem};
use crate::events::{Event, EventKind};
use crate::player::PlayerState;

pub const CATEGORY_ROLL: RangeInclusive<u32> = 0..=99;
/// Rolls strictly above this meet an enemy.
pub const ENEMY_THRESHOLD: u32 = 70;
/// Rolls strictly above this (and not an enemy) rest; the rest is treasure.
pub const REST_THRESHOLD: u32 = 20;

pub const ENEMY_DAMAGE: RangeInclusive<u32> = 1..=10;
pub const ENEMY_EXPERIENCE: RangeInclusive<u32> = 10..=50;
pub const ENEMY_GOLD: RangeInclusive<u32> = 5..=30;
pub const TREASURE_GOLD: RangeInclusive<u32> = 20..=100;
pub const REST_HEALING: RangeInclusive<u32> = 5..=20;

/// Event category picked by the first draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encounter {
    Enemy,
    Rest,
    Treasure,
}

impl Encounter {
    /// Roughly 30% enemy, 50% rest, 20% treasure. With strict `>` on both
    /// thresholds the exact split over `0..=99` is 29 / 50 / 21.
    pub fn from_roll(roll: u32) -> Self {
        if roll > ENEMY_THRESHOLD {
            Encounter::Enemy
        } else if roll > REST_THRESHOLD {
            Encounter::Rest
        } else {
            Encounter::Treasure
        }
    }
}

fn draw<R: RandomSource + ?Sized>(rng: &mut R, range: RangeInclusive<u32>) -> u32 {
    rng.uniform(*range.start(), *range.end())
}

/// Produces one event per call and applies its effects to the player.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventGenerator;

impl EventGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Draw a category and its amounts, mutate `player`, return the event.
    ///
    /// Total: every call produces exactly one event.
    pub fn generate<R: RandomSource + ?Sized>(&self, rng: &mut R, player: &mut PlayerState) -> Event {
        let roll = draw(rng, CATEGORY_ROLL);
        let kind = match Encounter::from_roll(roll) {
            Encounter::Enemy => {
                let enemy = Enemy::ALL[rng.index(Enemy::ALL.len())];
                let damage = draw(rng, ENEMY_DAMAGE);
                let experience = draw(rng, ENEMY_EXPERIENCE);
                let gold = draw(rng, ENEMY_GOLD);
                player.take_damage(damage);
                player.gain_experience(experience);
                player.gain_gold(gold);
                EventKind::Battle {
                    enemy,
                    damage,
                    experience,
                    gold,
                }
            }
            Encounter::Treasure => {
                let item = TreasureItem::ALL[rng.index(TreasureItem::ALL.len())];
                let gold = draw(rng, TREASURE_GOLD);
                player.gain_gold(gold);
                EventKind::Treasure { item, gold }
            }
            Encounter::Rest => {
                let healed = draw(rng, REST_HEALING);
                player.heal(healed);
                EventKind::Rest { healed }
            }
        };
        debug!(roll, kind = ?kind, health = player.health(), "adventure event");
        Event::new(kind)
    }
}
