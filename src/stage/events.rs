//! Deferred structural changes to a world.
//!
//! While a tick is running every actor only sees the world read-only, so
//! spawns and despawns requested from [`Behavior::act`] are collected in an
//! [`EventQueue`] and applied once every actor has acted.

use super::actor::{Actor, ActorId};
use super::behavior::Behavior;
use super::world::WorldView;

/// Membership change requested during a tick.
pub enum StageEvent {
    /// Add a new actor driven by `behavior`.
    Spawn {
        /// The actor to add.
        actor: Actor,
        /// Logic driving the new actor.
        behavior: Box<dyn Behavior>,
    },
    /// Remove the member with this id.
    Despawn {
        /// Id of the actor to remove.
        id: ActorId,
    },
}

/// Queue for collecting membership changes during a tick.
#[derive(Default)]
pub struct EventQueue {
    events: Vec<StageEvent>,
}

impl EventQueue {
    /// Creates an empty event queue.
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Adds an event to the queue.
    pub fn push(&mut self, event: StageEvent) {
        self.events.push(event);
    }

    /// Number of queued events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether no events are queued.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Whether a despawn of `id` is already queued.
    pub fn has_despawn(&self, id: ActorId) -> bool {
        self.events
            .iter()
            .any(|event| matches!(event, StageEvent::Despawn { id: queued } if *queued == id))
    }

    /// Drains all events from the queue, oldest first.
    pub fn drain(&mut self) -> std::vec::Drain<'_, StageEvent> {
        self.events.drain(..)
    }
}

/// What an acting actor can reach besides itself.
pub struct TickContext<'a> {
    world: &'a dyn WorldView,
    events: &'a mut EventQueue,
}

impl<'a> TickContext<'a> {
    /// Wraps a world view and the queue that collects this tick's changes.
    pub fn new(world: &'a dyn WorldView, events: &'a mut EventQueue) -> Self {
        Self { world, events }
    }

    /// The active world, as seen by the acting actor.
    ///
    /// The returned reference does not borrow the context, so query results
    /// can be fed straight into [`Self::despawn`].
    pub fn world(&self) -> &'a dyn WorldView {
        self.world
    }

    /// Queues `actor` to join the world after this tick.
    pub fn spawn(&mut self, actor: Actor, behavior: impl Behavior + 'static) -> ActorId {
        let id = actor.id();
        self.events.push(StageEvent::Spawn {
            actor,
            behavior: Box::new(behavior),
        });
        id
    }

    /// Queues the removal of member `id` after this tick.
    pub fn despawn(&mut self, id: ActorId) {
        self.events.push(StageEvent::Despawn { id });
    }

    /// Whether an actor that acted earlier this tick already asked for
    /// `id` to be removed.
    pub fn is_despawning(&self, id: ActorId) -> bool {
        self.events.has_despawn(id)
    }
}
