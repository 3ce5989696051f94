//! # Drift
//!
//! A per-entity randomized relocation scheduler for a tick-driven
//! multiplayer world. Each tracked entity accumulates simulated time;
//! once a randomized threshold is exceeded (or a small per-tick chance
//! fires), the world is searched for a safe nearby destination and the
//! entity is moved there.
//!
//! The hosting engine owns the tick loop, the entity registry, and the
//! terrain; it reaches this crate through [`RelocationScheduler`] and
//! provides its side of the contract via the [`world`] traits.

pub mod relocate;
pub mod world;

#[cfg(test)]
pub(crate) mod testutil;

pub use relocate::{RelocationScheduler, SearchOutcome, find_destination};
pub use world::{DimensionKind, Relocatable, RelocateError, WorldView};
