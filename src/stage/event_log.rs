//! Short history of membership changes, newest first.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use super::actor::{Actor, ActorId};

/// Whether an actor joined or left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Change {
    /// The actor became a member.
    Added,
    /// The actor stopped being a member.
    Removed,
}

/// One recorded membership change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggedEvent {
    /// World time of the change.
    pub time: f32,
    /// Actor concerned.
    pub actor: ActorId,
    /// Human readable label of the actor, e.g. `Actor "rock" #3`.
    pub label: String,
    /// What happened.
    pub change: Change,
}

/// Bounded log of recent membership changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventLog {
    events: VecDeque<LoggedEvent>,
    capacity: usize,
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new(20)
    }
}

impl EventLog {
    /// Creates a log remembering at most `capacity` events.
    pub fn new(capacity: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Records that `actor` was added or removed at `time`.
    pub fn record(&mut self, time: f32, actor: &Actor, change: Change) {
        if self.capacity == 0 {
            return;
        }
        if self.events.len() == self.capacity {
            self.events.pop_back();
        }
        self.events.push_front(LoggedEvent {
            time,
            actor: actor.id(),
            label: actor.to_string(),
            change,
        });
    }

    /// Recorded events, newest first.
    pub fn events(&self) -> impl Iterator<Item = &LoggedEvent> {
        self.events.iter()
    }

    /// Most recent change, if any.
    pub fn latest(&self) -> Option<&LoggedEvent> {
        self.events.front()
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
