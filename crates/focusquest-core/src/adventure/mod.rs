//! Adventure event generation.

mod generator;
mod rng;
mod roster;

pub use generator::{
    Encounter, EventGenerator, CATEGORY_ROLL, ENEMY_DAMAGE, ENEMY_EXPERIENCE, ENEMY_GOLD,
    ENEMY_THRESHOLD, REST_HEALING, REST_THRESHOLD, TREASURE_GOLD,
};
pub use rng::{RandomSource, ScriptedRandom, SeededRandom};
pub use roster::{Enemy, TreasureItem};
