//! Geometric utility functions for intersection, distance and heading calculations.

use geo::algorithm::Distance;
use geo::{Euclidean, Intersects, Line, Point};

/// Checks whether the segment `p1`-`p2` intersects the segment `p3`-`p4`.
///
/// The test is inclusive: touching endpoints and overlapping colinear
/// segments count as intersecting. Parallel or colinear segments that do not
/// overlap never do. A zero-length segment is tested as a point.
pub fn segments_intersect(p1: Point<f32>, p2: Point<f32>, p3: Point<f32>, p4: Point<f32>) -> bool {
    Line::new(p1, p2).intersects(&Line::new(p3, p4))
}

/// Euclidean distance between `(x1, y1)` and `(x2, y2)`.
pub fn distance(x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    Euclidean.distance(Point::new(x1, y1), Point::new(x2, y2))
}

/// Heading in degrees from `(from_x, from_y)` toward `(to_x, to_y)`.
///
/// Uses the screen convention (Y grows downward), so 90 degrees points down.
/// The result for two equal points is meaningless; callers skip that case.
pub fn angle_toward(from_x: f32, from_y: f32, to_x: f32, to_y: f32) -> f32 {
    (to_y - from_y).atan2(to_x - from_x).to_degrees()
}
