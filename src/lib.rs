//! # Green - actor layer for 2D sprite simulations
//!
//! Actors are positioned, rotatable rectangles with an optional image. They
//! live in a bounded or unbounded world, query it for intersecting or nearby
//! actors, and are advanced once per tick by a user supplied behavior.
//!
//! ## Features
//!
//! - Transform mutators that clamp to bounded worlds
//! - Oriented rectangle intersection by edge crossing
//! - Offset, range and neighbour queries filtered by kind
//! - Sequential tick pass with deferred spawns and despawns
//! - Z-ordered drawing through a pluggable canvas (macroquad by default)
//!
//! ## Core Modules
//!
//! - [`stage::actor`] - Actor state, transforms and world membership
//! - [`stage::collision`] - Oriented rectangle intersection
//! - [`stage::queries`] - Spatial queries against the world
//! - [`stage::world`] - The world container and its tick/draw passes
//! - [`stage::behavior`] - Per-kind update and draw logic

/// Actors, worlds and the helpers they share.
pub mod stage {
    /// Actor state, transform mutation and world membership.
    pub mod actor;
    /// Per-kind update and draw logic.
    pub mod behavior;
    /// Oriented rectangle intersection between actors.
    pub mod collision;
    /// Error type shared by the stage modules.
    pub mod error;
    /// Short history of membership changes.
    pub mod event_log;
    /// Deferred spawns and despawns requested during a tick.
    pub mod events;
    /// Geometric utility functions for intersection, distance and headings.
    pub mod geometric_utils;
    /// Type tags used to filter queries.
    pub mod kind;
    /// World configuration.
    pub mod params;
    /// Spatial queries from an actor against its world.
    ///
    /// The queries are methods on [`actor::Actor`]; this module only adds
    /// constants such as [`queries::OFFSET_TOLERANCE`].
    pub mod queries;
    /// Bridge between actors and the host renderer.
    pub mod render;
    /// World container and the [`world::WorldView`] trait.
    pub mod world;
}
