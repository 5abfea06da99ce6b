#![allow(missing_docs)]

use green::stage::actor::{Actor, ActorId};
use green::stage::behavior::Idle;
use green::stage::error::StageError;
use green::stage::kind::Kind;
use green::stage::queries::OFFSET_TOLERANCE;
use green::stage::world::{World, WorldView};

const ROCK: Kind = Kind::new("rock");
const BUG: Kind = Kind::new("bug");

fn ids(actors: &[&Actor]) -> Vec<ActorId> {
    actors.iter().map(|actor| actor.id()).collect()
}

/// A world with a querying actor at (50, 50) and a few neighbours.
fn create_test_world() -> (World, ActorId, Vec<ActorId>) {
    let mut world = World::bounded(100.0, 100.0);
    let me = world.add(Actor::new(50.0, 50.0, 10.0, 10.0).with_kind(BUG), Idle);
    let others = vec![
        // Overlapping rock
        world.add(Actor::new(55.0, 50.0, 10.0, 10.0).with_kind(ROCK), Idle),
        // Rock exactly 20 away
        world.add(Actor::new(50.0, 70.0, 4.0, 4.0).with_kind(ROCK), Idle),
        // Bug 30 away
        world.add(Actor::new(80.0, 50.0, 4.0, 4.0).with_kind(BUG), Idle),
        // Far away rock
        world.add(Actor::new(5.0, 5.0, 4.0, 4.0).with_kind(ROCK), Idle),
    ];
    (world, me, others)
}

#[test]
fn test_objects_in_range_is_inclusive_and_filtered() {
    let (world, me, others) = create_test_world();
    let actor = world.actor(me).unwrap();

    let rocks = actor.objects_in_range(20.0, ROCK, &world);
    assert_eq!(ids(&rocks), vec![others[0], others[1]]);

    let bugs = actor.objects_in_range(20.0, BUG, &world);
    assert!(bugs.is_empty());

    let everything = actor.objects_in_range(30.0, Kind::ANY, &world);
    assert_eq!(ids(&everything), vec![others[0], others[1], others[2]]);
}

#[test]
fn test_queries_exclude_the_querying_actor() {
    let (world, me, _) = create_test_world();
    let actor = world.actor(me).unwrap();

    let all = actor.objects_in_range(1000.0, Kind::ANY, &world);
    assert_eq!(all.len(), 4);
    assert!(!ids(&all).contains(&me));
    assert!(actor.objects_at_offset(0.0, 0.0, Kind::ANY, &world).is_empty());
}

#[test]
fn test_one_object_in_range() {
    let (world, me, others) = create_test_world();
    let actor = world.actor(me).unwrap();

    assert_eq!(actor.one_object_in_range(25.0, ROCK, &world).map(Actor::id), Some(others[0]));
    assert_eq!(actor.one_object_in_range(30.0, BUG, &world).map(Actor::id), Some(others[2]));
    assert!(actor.one_object_in_range(29.0, BUG, &world).is_none());
}

#[test]
fn test_neighbours_matches_range_query() {
    let (world, me, _) = create_test_world();
    let actor = world.actor(me).unwrap();

    for range in [0.0, 5.0, 20.0, 31.0, 100.0] {
        assert_eq!(
            ids(&actor.neighbours(range, Kind::ANY, &world)),
            ids(&actor.objects_in_range(range, Kind::ANY, &world))
        );
    }
}

#[test]
fn test_objects_at_offset() {
    let (world, me, others) = create_test_world();
    let actor = world.actor(me).unwrap();

    assert_eq!(ids(&actor.objects_at_offset(0.0, 20.0, ROCK, &world)), vec![others[1]]);
    assert_eq!(
        ids(&actor.objects_at_offset(0.0, 20.0 + OFFSET_TOLERANCE, ROCK, &world)),
        vec![others[1]]
    );
    assert!(actor.objects_at_offset(0.0, 21.5, ROCK, &world).is_empty());
    assert!(actor.objects_at_offset(0.0, 20.0, BUG, &world).is_empty());

    assert_eq!(
        actor.one_object_at_offset(30.5, 0.0, BUG, &world).map(Actor::id),
        Some(others[2])
    );
    assert!(actor.one_object_at_offset(30.0, 0.0, ROCK, &world).is_none());
}

#[test]
fn test_intersecting_objects() {
    let (world, me, others) = create_test_world();
    let actor = world.actor(me).unwrap();

    let hit = actor.one_intersecting_object(ROCK, &world).unwrap();
    assert_eq!(hit.map(Actor::id), Some(others[0]));
    assert!(actor.one_intersecting_object(BUG, &world).unwrap().is_none());

    let all = actor.intersecting_objects(Kind::ANY, &world).unwrap();
    assert_eq!(ids(&all), vec![others[0]]);
}

#[test]
fn test_tolerant_queries_are_empty_outside_world() {
    let (world, _, _) = create_test_world();
    // Same place as the member actor, but never added
    let stranger = Actor::new(50.0, 50.0, 10.0, 10.0);

    assert!(stranger.objects_in_range(1000.0, Kind::ANY, &world).is_empty());
    assert!(stranger.one_object_in_range(1000.0, Kind::ANY, &world).is_none());
    assert!(stranger.neighbours(1000.0, Kind::ANY, &world).is_empty());
    assert!(stranger.objects_at_offset(0.0, 20.0, ROCK, &world).is_empty());
    assert!(stranger.one_object_at_offset(0.0, 20.0, ROCK, &world).is_none());
}

#[test]
fn test_strict_queries_fail_outside_world() {
    let (world, _, _) = create_test_world();
    let stranger = Actor::new(50.0, 50.0, 10.0, 10.0);

    assert!(matches!(
        stranger.one_intersecting_object(ROCK, &world),
        Err(StageError::NotInWorld(_))
    ));
    assert!(matches!(
        stranger.intersecting_objects(ROCK, &world),
        Err(StageError::NotInWorld(_))
    ));
}

#[test]
fn test_queries_from_inside_update() {
    let (mut world, me, others) = create_test_world();

    let found = world
        .update(me, |actor, view| {
            actor.set_location(80.0, 52.0, view);
            ids(&actor.objects_in_range(5.0, BUG, view))
        })
        .unwrap();
    assert_eq!(found, vec![others[2]]);
}
