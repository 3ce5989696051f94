//! Randomized forced relocation.
//!
//! Two cooperating parts: [`RelocationScheduler`] owns the per-entity
//! cooldown state machine, and [`find_destination`] performs the
//! bounded best-effort search for a safe destination, with vertical
//! placement delegated to a per-dimension [`ColumnPlacement`] strategy.

mod finder;
mod placement;
mod scheduler;

pub use finder::{MAX_RELOCATE_ATTEMPTS, MAX_RELOCATE_RADIUS, SearchOutcome, find_destination};
pub use placement::ColumnPlacement;
pub use scheduler::{
    MAX_SECONDS_UNTIL_RELOCATE, MIN_SECONDS_UNTIL_RELOCATE, RANDOM_RELOCATE_CHANCE,
    RelocationScheduler, TICK_SECONDS,
};
