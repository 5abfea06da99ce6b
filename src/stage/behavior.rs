//! Per-kind update and draw logic.
//!
//! The [`Behavior`] trait is implemented by every sort of actor in a game.
//! The world owns one boxed behavior next to each [`Actor`] and calls into it
//! once per tick and once per frame.

use super::actor::Actor;
use super::events::TickContext;
use super::render::Canvas;
use super::world::WorldView;

/// Logic driving one actor.
pub trait Behavior {
    /// Advances the actor by one tick.
    ///
    /// # Arguments
    ///
    /// * `actor` - The actor this behavior drives
    /// * `ctx` - Access to the rest of the world and to deferred spawns/despawns
    /// * `dt` - Time elapsed since the previous tick, in seconds
    fn act(&mut self, actor: &mut Actor, ctx: &mut TickContext<'_>, dt: f32);

    /// Paints the actor. Defaults to [`Actor::draw`].
    fn draw(&self, actor: &Actor, canvas: &mut dyn Canvas) {
        actor.draw(canvas);
    }

    /// Called by the world right after the actor became a member.
    fn added_to_world(&mut self, _actor: &mut Actor, _world: &dyn WorldView) {}

    /// Called by the world right after the actor stopped being a member.
    fn removed_from_world(&mut self, _actor: &mut Actor, _world: &dyn WorldView) {}
}

/// Behavior for scenery: never acts.
#[derive(Debug, Clone, Copy, Default)]
pub struct Idle;

impl Behavior for Idle {
    fn act(&mut self, _actor: &mut Actor, _ctx: &mut TickContext<'_>, _dt: f32) {}
}
