//! Per-entity relocation cooldown scheduling.

use rand::rngs::StdRng;
use rand::{Rng, RngExt, SeedableRng};
use rustc_hash::FxHashMap;
use uuid::Uuid;

use crate::relocate::finder::{SearchOutcome, find_destination};
use crate::world::{Relocatable, WorldView};

/// Seconds of simulated time per tick.
pub const TICK_SECONDS: f64 = 0.05;

/// Accumulated seconds before an entity becomes eligible (30 s).
pub const MIN_SECONDS_UNTIL_RELOCATE: f64 = TICK_SECONDS * 600.0;

/// Accumulated seconds past which relocation is forced every tick (5 min).
pub const MAX_SECONDS_UNTIL_RELOCATE: f64 = TICK_SECONDS * 6000.0;

/// Per-tick chance of a relocation attempt for an eligible entity.
pub const RANDOM_RELOCATE_CHANCE: f32 = 0.003;

/// Schedules randomized forced relocations for the entities of one
/// world.
///
/// Owns the per-entity elapsed-time table; nothing here is static or
/// shared, so independent worlds (or test harnesses) run isolated
/// scheduler instances. The host drives the scheduler by calling
/// [`Self::tick_world`] once per simulation step, from a single thread.
///
/// A freshly observed entity starts at zero and gets a full cycle
/// before it is eligible. A successful relocation is the only thing
/// that resets the accumulator, and it resets it to exactly zero; a
/// failed search just lets the accumulator keep growing, so an entity
/// past the force threshold is re-attempted every tick until a
/// relocation lands.
pub struct RelocationScheduler<R = StdRng> {
    /// Seconds each tracked entity has gone without a relocation.
    elapsed: FxHashMap<Uuid, f64>,
    rng: R,
}

impl RelocationScheduler<StdRng> {
    /// Creates a scheduler with an OS-seeded RNG.
    #[must_use]
    pub fn new() -> Self {
        log::info!("Relocation scheduler initialized");
        Self::with_rng(StdRng::seed_from_u64(rand::random()))
    }
}

impl Default for RelocationScheduler<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RelocationScheduler<R> {
    /// Creates a scheduler with a caller-provided RNG.
    pub fn with_rng(rng: R) -> Self {
        Self {
            elapsed: FxHashMap::default(),
            rng,
        }
    }

    /// Runs one simulation step for every entity currently in `world`.
    ///
    /// This is the per-tick handler the host registers with its tick
    /// event source.
    pub fn tick_world<W: WorldView, E: Relocatable>(&mut self, world: &mut W, entities: &[E]) {
        for entity in entities {
            self.on_tick(world, entity);
        }
    }

    /// Runs one simulation step for a single entity.
    pub fn on_tick<W: WorldView, E: Relocatable>(&mut self, world: &mut W, entity: &E) {
        let id = entity.id();

        // A freshly observed entity gets at least one full cycle
        // before it is eligible: no attempt on its first step.
        let Some(&elapsed) = self.elapsed.get(&id) else {
            self.elapsed.insert(id, 0.0);
            return;
        };

        let candidate = elapsed + TICK_SECONDS;

        if candidate < MIN_SECONDS_UNTIL_RELOCATE {
            self.elapsed.insert(id, candidate);
            return;
        }

        // Forced and probabilistic triggers are evaluated
        // independently; each one that fires runs a full search. The
        // chance is drawn every eligible step, fired or not.
        let forced = candidate > MAX_SECONDS_UNTIL_RELOCATE;
        let chanced = self.rng.random::<f32>() < RANDOM_RELOCATE_CHANCE;

        let mut relocated = false;
        if forced {
            relocated = self.attempt(world, entity, relocated);
        }
        if chanced {
            relocated = self.attempt(world, entity, relocated);
        }

        if relocated {
            self.elapsed.insert(id, 0.0);
        } else {
            self.elapsed.insert(id, candidate);
        }
    }

    /// Runs one destination search and, when it succeeds, the
    /// relocation command. Returns whether the entity has been
    /// relocated this step.
    ///
    /// A relocation is issued at most once per entity per step: a
    /// second successful search in the same step is discarded.
    fn attempt<W: WorldView, E: Relocatable>(
        &mut self,
        world: &mut W,
        entity: &E,
        already_relocated: bool,
    ) -> bool {
        let id = entity.id();

        match find_destination(world, entity.block_pos(), &mut self.rng) {
            SearchOutcome::Found(pos) => {
                if already_relocated {
                    return true;
                }

                let target = pos.top_center();
                match world.request_relocation(id, target) {
                    Ok(()) => {
                        log::info!("Relocated entity {id} to {target}");
                        true
                    }
                    Err(err) => {
                        log::warn!("Relocation of entity {id} to {target} refused: {err}");
                        already_relocated
                    }
                }
            }
            SearchOutcome::NotFound => {
                log::debug!("No safe destination for entity {id}");
                already_relocated
            }
        }
    }

    /// Drops the timer entry for an entity the host no longer tracks.
    ///
    /// Hosts should call this from their entity-removed notification;
    /// otherwise the entry stays until the entity is observed again.
    pub fn forget(&mut self, entity_id: &Uuid) {
        self.elapsed.remove(entity_id);
    }

    /// Number of entities currently tracked.
    #[must_use]
    pub fn tracked(&self) -> usize {
        self.elapsed.len()
    }

    /// Seconds the entity has gone without a relocation, if tracked.
    #[must_use]
    pub fn elapsed_for(&self, entity_id: &Uuid) -> Option<f64> {
        self.elapsed.get(entity_id).copied()
    }
}
