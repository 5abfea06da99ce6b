//! Spatial queries from an actor against the members of its world.
//!
//! Every query is a linear scan over the members of the requested [`Kind`].
//! The querying actor never appears in its own results: a point or range
//! query around its own position would otherwise always report it at
//! distance 0, and while it acts during a tick its world view lists only the
//! other members anyway.

use super::actor::Actor;
use super::error::StageError;
use super::geometric_utils::distance;
use super::kind::Kind;
use super::world::WorldView;

/// Distance within which a member counts as being "at" an offset.
pub const OFFSET_TOLERANCE: f32 = 1.0;

impl Actor {
    /// First member of `kind` whose rectangle crosses this actor's.
    ///
    /// # Errors
    ///
    /// [`StageError::NotInWorld`] when the actor is not a member of `world`.
    pub fn one_intersecting_object<'w>(
        &self,
        kind: Kind,
        world: &'w dyn WorldView,
    ) -> Result<Option<&'w Actor>, StageError> {
        let world = self.world(world)?;
        Ok(world.actors_of(kind).find(|other| other.intersects(self)))
    }

    /// Every member of `kind` whose rectangle crosses this actor's.
    ///
    /// # Errors
    ///
    /// [`StageError::NotInWorld`] when the actor is not a member of `world`.
    pub fn intersecting_objects<'w>(
        &self,
        kind: Kind,
        world: &'w dyn WorldView,
    ) -> Result<Vec<&'w Actor>, StageError> {
        let world = self.world(world)?;
        Ok(world
            .actors_of(kind)
            .filter(|other| other.intersects(self))
            .collect())
    }

    /// Members of `kind` positioned at `(x + offset_x, y + offset_y)`,
    /// within [`OFFSET_TOLERANCE`].
    pub fn objects_at_offset<'w>(
        &self,
        offset_x: f32,
        offset_y: f32,
        kind: Kind,
        world: &'w dyn WorldView,
    ) -> Vec<&'w Actor> {
        self.others_near(self.x() + offset_x, self.y() + offset_y, OFFSET_TOLERANCE, kind, world)
            .collect()
    }

    /// First member found by [`Self::objects_at_offset`].
    pub fn one_object_at_offset<'w>(
        &self,
        offset_x: f32,
        offset_y: f32,
        kind: Kind,
        world: &'w dyn WorldView,
    ) -> Option<&'w Actor> {
        self.others_near(self.x() + offset_x, self.y() + offset_y, OFFSET_TOLERANCE, kind, world)
            .next()
    }

    /// Members of `kind` whose position is within `range` of this actor's.
    pub fn objects_in_range<'w>(
        &self,
        range: f32,
        kind: Kind,
        world: &'w dyn WorldView,
    ) -> Vec<&'w Actor> {
        self.others_near(self.x(), self.y(), range, kind, world)
            .collect()
    }

    /// First member found by [`Self::objects_in_range`].
    pub fn one_object_in_range<'w>(
        &self,
        range: f32,
        kind: Kind,
        world: &'w dyn WorldView,
    ) -> Option<&'w Actor> {
        self.others_near(self.x(), self.y(), range, kind, world)
            .next()
    }

    /// Same as [`Self::objects_in_range`].
    pub fn neighbours<'w>(
        &self,
        range: f32,
        kind: Kind,
        world: &'w dyn WorldView,
    ) -> Vec<&'w Actor> {
        self.objects_in_range(range, kind, world)
    }

    /// Members of `kind`, other than this actor, within `radius` of
    /// `(x, y)`. Empty when this actor is not in `world`.
    fn others_near<'w>(
        &self,
        x: f32,
        y: f32,
        radius: f32,
        kind: Kind,
        world: &'w dyn WorldView,
    ) -> impl Iterator<Item = &'w Actor> {
        let id = self.id();
        self.world_if_member(world)
            .into_iter()
            .flat_map(move |world| world.actors_of(kind))
            .filter(move |other| other.id() != id && distance(x, y, other.x(), other.y()) <= radius)
    }
}
