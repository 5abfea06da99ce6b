#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use geo::Intersects;
use green::stage::actor::Actor;

fn square(x: f32, y: f32, side: f32) -> Actor {
    Actor::new(x, y, side, side)
}

fn rotated(mut actor: Actor, degrees: f32) -> Actor {
    actor.set_rotation(degrees);
    actor
}

#[test]
fn test_never_intersects_itself() {
    let actors = [
        square(0.0, 0.0, 10.0),
        rotated(square(3.0, 4.0, 2.0), 33.0),
        Actor::new(0.0, 0.0, 0.0, 0.0),
    ];
    for actor in &actors {
        assert!(!actor.intersects(actor));
    }
}

#[test]
fn test_separated_squares() {
    let a = square(0.0, 0.0, 10.0);
    let b = square(20.0, 0.0, 10.0);
    assert!(!a.intersects(&b));
    assert!(!b.intersects(&a));
}

#[test]
fn test_overlapping_squares() {
    let a = square(0.0, 0.0, 10.0);
    let b = square(5.0, 0.0, 10.0);
    assert!(a.intersects(&b));
    assert!(b.intersects(&a));
}

#[test]
fn test_touching_edges_count() {
    let a = square(0.0, 0.0, 10.0);
    let b = square(10.0, 0.0, 10.0);
    assert!(a.intersects(&b));
}

#[test]
fn test_overlapping_bounding_boxes_with_crossing_edges() {
    let a = Actor::new(0.0, 0.0, 20.0, 10.0);
    let b = Actor::new(8.0, 6.0, 10.0, 10.0);
    assert!(a.intersects(&b));

    // A plus sign: every long edge crosses the other bar
    let horizontal = Actor::new(0.0, 0.0, 20.0, 2.0);
    let vertical = Actor::new(0.0, 0.0, 2.0, 20.0);
    assert!(horizontal.intersects(&vertical));
}

#[test]
fn test_nested_rectangle_is_not_detected() {
    // Containment without edge crossings is not an intersection.
    let outer = square(0.0, 0.0, 20.0);
    let inner = square(0.0, 0.0, 4.0);
    assert!(!outer.intersects(&inner));
    assert!(!inner.intersects(&outer));

    let off_centre = rotated(square(3.0, -2.0, 5.0), 30.0);
    assert!(!outer.intersects(&off_centre));
}

#[test]
fn test_rotation_matters() {
    let a = square(0.0, 0.0, 10.0);
    let b = square(12.0, 0.0, 10.0);
    assert!(!a.intersects(&b));

    // Rotated by 45 degrees the corner reaches x = 5 * sqrt(2) ~ 7.07, past b's left edge at 7
    let a = rotated(a, 45.0);
    assert!(a.intersects(&b));
    assert!(b.intersects(&a));
}

#[test]
fn test_full_turns_do_not_change_the_result() {
    let b = square(12.0, 0.0, 10.0);
    for turns in [-2.0, 1.0, 3.0] {
        let a = rotated(square(0.0, 0.0, 10.0), 45.0 + 360.0 * turns);
        assert!(a.intersects(&b), "rotation {}", a.rotation());
    }
}

#[test]
fn test_intersects_is_symmetric() {
    let base = rotated(Actor::new(0.0, 0.0, 12.0, 6.0), 20.0);
    for dx in [-14.0, -9.0, -3.0, 0.0, 4.0, 8.0, 15.0] {
        for dy in [-10.0, -5.0, 0.0, 3.0, 9.0] {
            for rotation in [0.0, 30.0, 90.0] {
                let other = rotated(Actor::new(dx, dy, 8.0, 4.0), rotation);
                assert_eq!(
                    base.intersects(&other),
                    other.intersects(&base),
                    "offset ({dx}, {dy}) rotation {rotation}"
                );
            }
        }
    }
}

// Known ambiguity: pairing an edge of one rectangle with a segment built from
// corners of both rectangles would make the answer depend on argument order.
// Every tested pair must be a real edge of each rectangle.
#[test]
fn test_uses_every_edge_pair() {
    let a = rotated(Actor::new(0.0, 0.0, 12.0, 6.0), 15.0);
    for (dx, dy) in [(10.0, 0.0), (0.0, 6.0), (-11.0, -4.0), (30.0, 30.0), (1.0, 1.0)] {
        let b = rotated(Actor::new(dx, dy, 5.0, 9.0), 70.0);
        let expected = a
            .edges()
            .iter()
            .any(|ea| b.edges().iter().any(|eb| ea.intersects(eb)));
        assert_eq!(a.intersects(&b), expected, "offset ({dx}, {dy})");
    }
}

#[test]
fn test_corners_unrotated() {
    let actor = Actor::new(10.0, 20.0, 10.0, 4.0);
    let corners: Vec<(f32, f32)> = actor.corners().iter().map(|p| (p.x(), p.y())).collect();
    assert_eq!(
        corners,
        vec![(5.0, 18.0), (15.0, 18.0), (15.0, 22.0), (5.0, 22.0)]
    );
}

#[test]
fn test_corners_rotated_quarter_turn() {
    let actor = rotated(Actor::new(0.0, 0.0, 20.0, 10.0), 90.0);
    let [top_left, top_right, bottom_right, bottom_left] = actor.corners();
    let close =
        |p: geo::Point<f32>, x: f32, y: f32| (p.x() - x).abs() < 1e-4 && (p.y() - y).abs() < 1e-4;

    assert!(close(top_left, 5.0, -10.0));
    assert!(close(top_right, 5.0, 10.0));
    assert!(close(bottom_right, -5.0, 10.0));
    assert!(close(bottom_left, -5.0, -10.0));
}

#[test]
fn test_edges_close_the_rectangle() {
    let actor = rotated(Actor::new(1.0, 2.0, 6.0, 3.0), 37.0);
    let edges = actor.edges();
    for i in 0..4 {
        assert_eq!(edges[i].end, edges[(i + 1) % 4].start);
    }
}
