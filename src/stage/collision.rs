//! Oriented-rectangle intersection between actors.
//!
//! Each actor is a rectangle of its width and height, centred on its
//! position and rotated by its rotation (Y grows downward). Two actors
//! intersect when any edge of one crosses or touches any edge of the other.
//!
//! Only boundary crossings are detected: a rectangle lying entirely inside
//! another, with no edges touching, does not intersect it.

use geo::{Line, Point};

use super::actor::Actor;
use super::geometric_utils::segments_intersect;

impl Actor {
    /// Corners of the actor's rectangle in world space, in the order
    /// top-left, top-right, bottom-right, bottom-left (as seen unrotated on
    /// screen).
    pub fn corners(&self) -> [Point<f32>; 4] {
        let (sin, cos) = self.rotation().to_radians().sin_cos();
        let half_w = self.width() / 2.0;
        let half_h = self.height() / 2.0;
        let corner = |dx: f32, dy: f32| {
            Point::new(
                dx * cos - dy * sin + self.x(),
                dx * sin + dy * cos + self.y(),
            )
        };

        [
            corner(-half_w, -half_h),
            corner(half_w, -half_h),
            corner(half_w, half_h),
            corner(-half_w, half_h),
        ]
    }

    /// The four edges of the actor's rectangle, following [`Self::corners`].
    pub fn edges(&self) -> [Line<f32>; 4] {
        let [top_left, top_right, bottom_right, bottom_left] = self.corners();
        [
            Line::new(top_left, top_right),
            Line::new(top_right, bottom_right),
            Line::new(bottom_right, bottom_left),
            Line::new(bottom_left, top_left),
        ]
    }

    /// Checks whether this actor's rectangle crosses `other`'s.
    ///
    /// Always `false` for the actor itself. Every edge of one rectangle is
    /// tested against every edge of the other. A rectangle nested inside
    /// another without touching its edges is not reported.
    pub fn intersects(&self, other: &Actor) -> bool {
        if self.id() == other.id() {
            return false;
        }

        let ours = self.edges();
        let theirs = other.edges();
        ours.iter().any(|a| {
            theirs.iter().any(|b| {
                segments_intersect(a.start_point(), a.end_point(), b.start_point(), b.end_point())
            })
        })
    }
}
