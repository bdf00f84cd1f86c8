use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Enemy {
    Goblin,
    Orc,
    Dragon,
    Skeleton,
}

impl Enemy {
    pub const ALL: [Enemy; 4] = [Enemy::Goblin, Enemy::Orc, Enemy::Dragon, Enemy::Skeleton];

    pub fn name(self) -> &'static str {
        match self {
            Enemy::Goblin => "Goblin",
            Enemy::Orc => "Orc",
            Enemy::Dragon => "Dragon",
            Enemy::Skeleton => "Skeleton",
        }
    }
}

impl fmt::Display for Enemy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TreasureItem {
    Potion,
    Armor,
    Weapon,
}

impl TreasureItem {
    pub const ALL: [TreasureItem; 3] = [TreasureItem::Potion, TreasureItem::Armor, TreasureItem::Weapon];

    pub fn name(self) -> &'static str {
        match self {
            TreasureItem::Potion => "Potion",
            TreasureItem::Armor => "Armor",
            TreasureItem::Weapon => "Weapon",
        }
    }
}

impl fmt::Display for TreasureItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
