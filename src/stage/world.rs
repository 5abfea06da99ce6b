//! World container: membership, the tick pass and the draw pass.
//!
//! A world owns its members, each an [`Actor`] paired with the
//! [`Behavior`] that drives it. Actors are told about the world through the
//! read-only [`WorldView`] trait. During a tick the acting actor is borrowed
//! mutably while every other member stays readable, so actors later in the
//! pass see the moves made by actors before them.

use super::actor::{Actor, ActorId};
use super::behavior::Behavior;
use super::event_log::{Change, EventLog};
use super::events::{EventQueue, StageEvent, TickContext};
use super::kind::Kind;
use super::params::WorldParams;
use super::render::Canvas;

/// Read-only view of the active world handed to actors.
pub trait WorldView {
    /// Kind tag of the world itself.
    fn kind(&self) -> Kind;

    /// Width of the coordinate space.
    fn width(&self) -> f32;

    /// Height of the coordinate space.
    fn height(&self) -> f32;

    /// Whether member positions are clamped to `[0, width] x [0, height]`.
    fn is_bounded(&self) -> bool;

    /// All readable members, in insertion order.
    fn actors(&self) -> Box<dyn Iterator<Item = &Actor> + '_>;

    /// Whether `id` is a member.
    fn contains(&self, id: ActorId) -> bool {
        self.actors().any(|actor| actor.id() == id)
    }

    /// Member with the given id, if readable.
    fn actor(&self, id: ActorId) -> Option<&Actor> {
        self.actors().find(|actor| actor.id() == id)
    }

    /// Members tagged `kind` (every member for [`Kind::ANY`]).
    fn actors_of(&self, kind: Kind) -> Box<dyn Iterator<Item = &Actor> + '_> {
        Box::new(self.actors().filter(move |actor| kind.matches(actor.kind())))
    }
}

struct Member {
    actor: Actor,
    behavior: Box<dyn Behavior>,
}

/// Container of actors with a bounded or unbounded coordinate space.
pub struct World {
    kind: Kind,
    params: WorldParams,
    members: Vec<Member>,
    time: f32,
    event_log: EventLog,
}

impl World {
    /// Creates an empty world.
    pub fn new(params: WorldParams) -> Self {
        Self {
            kind: Kind::ANY,
            params,
            members: Vec::new(),
            time: 0.0,
            event_log: EventLog::default(),
        }
    }

    /// Creates an empty world that clamps positions to `width` x `height`.
    pub fn bounded(width: f32, height: f32) -> Self {
        Self::new(WorldParams {
            width,
            height,
            bounded: true,
        })
    }

    /// Creates an empty world that never clamps positions.
    pub fn unbounded(width: f32, height: f32) -> Self {
        Self::new(WorldParams {
            width,
            height,
            bounded: false,
        })
    }

    /// Tags the world.
    #[must_use]
    pub fn with_kind(mut self, kind: Kind) -> Self {
        self.kind = kind;
        self
    }

    /// Parameters the world was created with.
    pub fn params(&self) -> &WorldParams {
        &self.params
    }

    /// Total simulated time in seconds.
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the world has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Recent membership changes.
    pub fn event_log(&self) -> &EventLog {
        &self.event_log
    }

    /// Adds `actor`, driven by `behavior`, and notifies the behavior.
    ///
    /// The position is kept as is, even if outside a bounded world.
    pub fn add(&mut self, actor: Actor, behavior: impl Behavior + 'static) -> ActorId {
        self.insert(actor, Box::new(behavior))
    }

    /// Removes member `id` and notifies its behavior.
    pub fn remove(&mut self, id: ActorId) -> Option<Actor> {
        let index = self.index_of(id)?;
        let Member {
            mut actor,
            mut behavior,
        } = self.members.remove(index);
        behavior.removed_from_world(&mut actor, &*self);

        log::debug!("{} removed at t={:.2}", actor, self.time);
        self.event_log.record(self.time, &actor, Change::Removed);
        Some(actor)
    }

    /// Runs `f` on member `id` with a view of the rest of the world, so that
    /// clamping mutators and queries treat it as a member.
    pub fn update<R>(
        &mut self,
        id: ActorId,
        f: impl FnOnce(&mut Actor, &dyn WorldView) -> R,
    ) -> Option<R> {
        let index = self.index_of(id)?;
        self.with_member(index, |member, view| f(&mut member.actor, view))
    }

    /// Advances the world by one tick.
    ///
    /// Every member acts once, in insertion order. Spawns and despawns
    /// requested while acting are applied afterwards, in request order.
    pub fn tick(&mut self, dt: f32) {
        let mut queue = EventQueue::new();

        for index in 0..self.members.len() {
            self.with_member(index, |member, view| {
                let mut ctx = TickContext::new(view, &mut queue);
                member.behavior.act(&mut member.actor, &mut ctx, dt);
            });
        }

        self.time += dt;
        log::trace!(
            "tick t={:.3}: {} members, {} queued changes",
            self.time,
            self.members.len(),
            queue.len()
        );
        self.apply_events(queue);
    }

    /// Draws every member, lowest `z` first. Members with equal `z` keep
    /// insertion order.
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        let mut order: Vec<&Member> = self.members.iter().collect();
        order.sort_by(|a, b| a.actor.z().total_cmp(&b.actor.z()));
        for member in order {
            member.behavior.draw(&member.actor, canvas);
        }
    }

    fn insert(&mut self, actor: Actor, behavior: Box<dyn Behavior>) -> ActorId {
        let id = actor.id();
        log::debug!("{} added at t={:.2}", actor, self.time);
        self.event_log.record(self.time, &actor, Change::Added);

        self.members.push(Member { actor, behavior });
        let index = self.members.len() - 1;
        self.with_member(index, |member, view| {
            member.behavior.added_to_world(&mut member.actor, view);
        });
        id
    }

    fn apply_events(&mut self, mut queue: EventQueue) {
        for event in queue.drain() {
            match event {
                StageEvent::Spawn { actor, behavior } => {
                    self.insert(actor, behavior);
                }
                StageEvent::Despawn { id } => {
                    if self.remove(id).is_none() {
                        log::debug!("despawn of #{} ignored: not a member", id);
                    }
                }
            }
        }
    }

    fn index_of(&self, id: ActorId) -> Option<usize> {
        self.members.iter().position(|member| member.actor.id() == id)
    }

    /// Splits the member list around `index` and calls `f` with that member
    /// and a view of the world that still counts it as a member.
    fn with_member<R>(
        &mut self,
        index: usize,
        f: impl FnOnce(&mut Member, &dyn WorldView) -> R,
    ) -> Option<R> {
        let (before, rest) = self.members.split_at_mut(index);
        let (member, after) = rest.split_first_mut()?;
        let view = Neighbourhood {
            kind: self.kind,
            params: &self.params,
            current: member.actor.id(),
            before,
            after,
        };
        Some(f(member, &view))
    }
}

impl WorldView for World {
    fn kind(&self) -> Kind {
        self.kind
    }

    fn width(&self) -> f32 {
        self.params.width
    }

    fn height(&self) -> f32 {
        self.params.height
    }

    fn is_bounded(&self) -> bool {
        self.params.bounded
    }

    fn actors(&self) -> Box<dyn Iterator<Item = &Actor> + '_> {
        Box::new(self.members.iter().map(|member| &member.actor))
    }
}

/// The world as seen by the member currently borrowed mutably. That member
/// is a member for [`WorldView::contains`] but is not listed by
/// [`WorldView::actors`].
struct Neighbourhood<'a> {
    kind: Kind,
    params: &'a WorldParams,
    current: ActorId,
    before: &'a [Member],
    after: &'a [Member],
}

impl WorldView for Neighbourhood<'_> {
    fn kind(&self) -> Kind {
        self.kind
    }

    fn width(&self) -> f32 {
        self.params.width
    }

    fn height(&self) -> f32 {
        self.params.height
    }

    fn is_bounded(&self) -> bool {
        self.params.bounded
    }

    fn actors(&self) -> Box<dyn Iterator<Item = &Actor> + '_> {
        Box::new(
            self.before
                .iter()
                .chain(self.after.iter())
                .map(|member| &member.actor),
        )
    }

    fn contains(&self, id: ActorId) -> bool {
        id == self.current || self.actors().any(|actor| actor.id() == id)
    }
}
