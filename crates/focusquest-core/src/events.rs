use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::adventure::{Enemy, TreasureItem};

/// What happened, with the numbers that were drawn for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventKind {
    Battle {
        enemy: Enemy,
        damage: u32,
        experience: u32,
        gold: u32,
    },
    Treasure {
        item: TreasureItem,
        gold: u32,
    },
    Rest {
        healed: u32,
    },
    /// Marker prepended to the log when the countdown finishes.
    Summary,
}

impl EventKind {
    pub fn icon(&self) -> &'static str {
        match self {
            EventKind::Battle { .. } => "⚔️",
            EventKind::Treasure { .. } => "💎",
            EventKind::Rest { .. } => "🏕️",
            EventKind::Summary => "🏁",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            EventKind::Battle { .. } => "Battle",
            EventKind::Treasure { .. } => "Treasure",
            EventKind::Rest { .. } => "Rest",
            EventKind::Summary => "Summary",
        }
    }

    pub fn describe(&self) -> String {
        match self {
            EventKind::Battle {
                enemy,
                damage,
                experience,
                gold,
            } => format!(
                "Encountered a {enemy}! Took {damage} damage. Gained {experience} EXP and {gold} Gold."
            ),
            EventKind::Treasure { item, gold } => {
                format!("Found a {item}! Gained {gold} Gold.")
            }
            EventKind::Rest { healed } => {
                format!("Found a safe spot to rest. Healed {healed} HP.")
            }
            EventKind::Summary => "Adventure completed!".to_string(),
        }
    }
}

/// One entry of the adventure log. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: Uuid,
    pub icon: String,
    pub title: String,
    pub description: String,
    pub kind: EventKind,
    pub at: DateTime<Utc>,
}

impl Event {
    pub fn new(kind: EventKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            icon: kind.icon().to_string(),
            title: kind.title().to_string(),
            description: kind.describe(),
            kind,
            at: Utc::now(),
        }
    }

    pub fn summary() -> Self {
        Self::new(EventKind::Summary)
    }

    pub fn is_summary(&self) -> bool {
        self.kind == EventKind::Summary
    }
}
