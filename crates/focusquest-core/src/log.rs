//! Newest-first adventure log.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::events::Event;

/// Ordered history of events, most recent at the front.
///
/// Display order is part of the contract: the front of the log is what the
/// player sees first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventLog {
    entries: VecDeque<Event>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert at the head of the log.
    pub fn push(&mut self, event: Event) {
        self.entries.push_front(event);
    }

    pub fn latest(&self) -> Option<&Event> {
        self.entries.front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn to_vec(&self) -> Vec<Event> {
        self.entries.iter().cloned().collect()
    }
}

impl<'a> IntoIterator for &'a EventLog {
    type Item = &'a Event;
    type IntoIter = std::collections::vec_deque::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
