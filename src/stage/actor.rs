//! Actor state, transform mutation and world membership.
//!
//! An [`Actor`] is a positioned, rotatable rectangle with an optional image.
//! It holds no reference to a world: every operation that depends on the
//! world (clamping, queries, edge checks) takes the active world as a
//! [`WorldView`] argument and asks it whether this actor is a member.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use super::error::StageError;
use super::geometric_utils;
use super::kind::Kind;
use super::render::{Canvas, DrawParams, Image};
use super::world::WorldView;

static NEXT_ACTOR_ID: AtomicU64 = AtomicU64::new(1);

/// Unique, never reused identifier of an [`Actor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActorId(u64);

impl ActorId {
    fn next() -> Self {
        Self(NEXT_ACTOR_ID.fetch_add(1, Ordering::Relaxed))
    }

}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A positioned, rotatable, drawable entity.
///
/// Position is the centre of the actor's rectangle. Rotation is in degrees,
/// clockwise on screen since Y grows downward, and is never normalised.
#[derive(Debug)]
pub struct Actor {
    id: ActorId,
    kind: Kind,
    x: f32,
    y: f32,
    z: f32,
    rotation: f32,
    width: f32,
    height: f32,
    image: Option<Image>,
    opacity: f32,
}

impl Actor {
    /// Creates an actor with explicit dimensions and no image.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            id: ActorId::next(),
            kind: Kind::ANY,
            x,
            y,
            z: 0.0,
            rotation: 0.0,
            width,
            height,
            image: None,
            opacity: 255.0,
        }
    }

    /// Creates an actor sized to its image.
    pub fn from_image(x: f32, y: f32, image: Image) -> Self {
        let (width, height) = (image.width(), image.height());
        Self::from_image_sized(x, y, image, width, height)
    }

    /// Creates an actor with an image drawn at the given dimensions.
    pub fn from_image_sized(x: f32, y: f32, image: Image, width: f32, height: f32) -> Self {
        let mut actor = Self::new(x, y, width, height);
        actor.image = Some(image);
        actor
    }

    /// Creates an actor sized to its image multiplied by `scale`.
    pub fn from_image_scaled(x: f32, y: f32, image: Image, scale: f32) -> Self {
        let (width, height) = (image.width() * scale, image.height() * scale);
        Self::from_image_sized(x, y, image, width, height)
    }

    /// Tags the actor so typed queries can find it.
    #[must_use]
    pub fn with_kind(mut self, kind: Kind) -> Self {
        self.kind = kind;
        self
    }

    /// Unique identifier. Fixed for the actor's whole lifetime.
    pub fn id(&self) -> ActorId {
        self.id
    }

    /// Kind tag.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// X-axis position.
    pub fn x(&self) -> f32 {
        self.x
    }

    /// Y-axis position.
    pub fn y(&self) -> f32 {
        self.y
    }

    /// Position as an `(x, y)` pair.
    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    /// Z-axis position. Only used to determine render order.
    pub fn z(&self) -> f32 {
        self.z
    }

    /// Rotation in degrees.
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Width before rotation.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Height before rotation.
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Image drawn for this actor, if any.
    pub fn image(&self) -> Option<&Image> {
        self.image.as_ref()
    }

    /// Opacity in the range 0 - 255.
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Returns `world` if this actor is one of its members.
    ///
    /// # Errors
    ///
    /// [`StageError::NotInWorld`] when the actor is not a member.
    pub fn world<'w>(&self, world: &'w dyn WorldView) -> Result<&'w dyn WorldView, StageError> {
        self.world_if_member(world)
            .ok_or(StageError::NotInWorld(self.id))
    }

    /// Returns `world` if this actor is one of its members, `None` otherwise.
    pub fn world_if_member<'w>(&self, world: &'w dyn WorldView) -> Option<&'w dyn WorldView> {
        world.contains(self.id).then_some(world)
    }

    /// Returns `world` if it is tagged `kind`. [`Kind::ANY`] accepts every
    /// world.
    ///
    /// A mismatch is not an error; it simply yields `None`.
    pub fn world_of_kind(world: &dyn WorldView, kind: Kind) -> Option<&dyn WorldView> {
        kind.matches(world.kind()).then_some(world)
    }

    /// Sets the X-axis position, clamped to a bounded world this actor is in.
    pub fn set_x(&mut self, x: f32, world: &dyn WorldView) {
        self.x = match self.clamping_world(world) {
            Some(world) => clamp(x, world.width()),
            None => x,
        };
    }

    /// Sets the Y-axis position, clamped to a bounded world this actor is in.
    pub fn set_y(&mut self, y: f32, world: &dyn WorldView) {
        self.y = match self.clamping_world(world) {
            Some(world) => clamp(y, world.height()),
            None => y,
        };
    }

    /// Sets both coordinates, each clamped independently to a bounded world
    /// this actor is in.
    pub fn set_location(&mut self, x: f32, y: f32, world: &dyn WorldView) {
        if let Some(world) = self.clamping_world(world) {
            self.x = clamp(x, world.width());
            self.y = clamp(y, world.height());
        } else {
            self.x = x;
            self.y = y;
        }
    }

    /// Sets the Z-axis position. Only used to determine render order.
    pub fn set_z(&mut self, z: f32) {
        self.z = z;
    }

    /// Sets the rotation in degrees.
    pub fn set_rotation(&mut self, rotation: f32) {
        self.rotation = rotation;
    }

    /// Sets the width.
    pub fn set_width(&mut self, width: f32) {
        self.width = width;
    }

    /// Sets the height.
    pub fn set_height(&mut self, height: f32) {
        self.height = height;
    }

    /// Sets width and height.
    pub fn set_dimensions(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Replaces (or clears) the image. Dimensions are left unchanged.
    pub fn set_image(&mut self, image: Option<Image>) {
        self.image = image;
    }

    /// Sets the opacity, in the range 0 - 255.
    pub fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity;
    }

    /// Moves `amount` units in the direction the actor is facing.
    pub fn move_forward(&mut self, amount: f32, world: &dyn WorldView) {
        let (sin, cos) = self.rotation.to_radians().sin_cos();
        self.set_location(self.x + cos * amount, self.y + sin * amount, world);
    }

    /// Moves by raw offsets along the world axes.
    pub fn move_global(&mut self, dx: f32, dy: f32, world: &dyn WorldView) {
        self.set_location(self.x + dx, self.y + dy, world);
    }

    /// Rotates by `degrees`. The rotation is allowed to grow past a full turn.
    pub fn turn(&mut self, degrees: f32) {
        self.rotation += degrees;
    }

    /// Faces the point `(x, y)`. Does nothing if that is the actor's own
    /// position.
    #[allow(clippy::float_cmp)]
    pub fn turn_towards(&mut self, x: f32, y: f32) {
        if x == self.x && y == self.y {
            return;
        }
        self.rotation = geometric_utils::angle_toward(self.x, self.y, x, y);
    }

    /// Faces another actor. Does nothing for `self` or an actor at the same
    /// position.
    pub fn turn_towards_actor(&mut self, other: &Actor) {
        if other.id == self.id {
            return;
        }
        self.turn_towards(other.x, other.y);
    }

    /// Whether the actor touches or lies beyond an edge of its world.
    ///
    /// # Errors
    ///
    /// [`StageError::NotInWorld`] when the actor is not a member of `world`.
    pub fn is_at_edge(&self, world: &dyn WorldView) -> Result<bool, StageError> {
        let world = self.world(world)?;
        Ok(self.x <= 0.0 || self.x >= world.width() || self.y <= 0.0 || self.y >= world.height())
    }

    /// Paints the actor's image centred on its position. Does nothing when
    /// the actor has no image.
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        let Some(image) = &self.image else {
            return;
        };
        canvas.draw_image(
            image,
            &DrawParams {
                x: self.x,
                y: self.y,
                rotation: self.rotation.to_radians(),
                width: self.width,
                height: self.height,
                opacity: self.opacity,
            },
        );
    }

    fn clamping_world<'w>(&self, world: &'w dyn WorldView) -> Option<&'w dyn WorldView> {
        self.world_if_member(world).filter(|world| world.is_bounded())
    }
}

// Not `f32::clamp`: that panics when the upper bound is negative. NaN is
// passed through unchanged, as `f32::clamp` would.
fn clamp(value: f32, upper: f32) -> f32 {
    if value.is_nan() {
        return value;
    }
    value.min(upper).max(0.0)
}

impl PartialEq for Actor {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Actor {}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Actor \"{}\" #{}", self.kind, self.id)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let a = Actor::new(0.0, 0.0, 1.0, 1.0);
        let b = Actor::new(0.0, 0.0, 1.0, 1.0);
        assert_ne!(a.id(), b.id());
        assert_ne!(a, b);
    }

    #[test]
    fn clamp_tolerates_negative_bounds() {
        assert_eq!(clamp(5.0, -1.0), 0.0);
        assert_eq!(clamp(-5.0, 10.0), 0.0);
        assert_eq!(clamp(15.0, 10.0), 10.0);
        assert_eq!(clamp(3.0, 10.0), 3.0);
        assert!(clamp(f32::NAN, 10.0).is_nan());
    }
}
