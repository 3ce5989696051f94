//! Bounded best-effort search for a safe relocation destination.

use drift_utils::BlockPos;
use rand::{Rng, RngExt};

use crate::relocate::placement::ColumnPlacement;
use crate::world::WorldView;

/// Horizontal search radius around the origin, in blocks, per axis.
pub const MAX_RELOCATE_RADIUS: i32 = 150;

/// How many candidate columns are sampled before the search gives up.
pub const MAX_RELOCATE_ATTEMPTS: u32 = 20;

/// Result of a destination search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A safe destination was found.
    Found(BlockPos),
    /// No safe destination within the attempt budget. This is a
    /// normal, retriable outcome, not a fault.
    NotFound,
}

/// Searches for a safe destination within [`MAX_RELOCATE_RADIUS`] of
/// `origin`.
///
/// Up to [`MAX_RELOCATE_ATTEMPTS`] columns are sampled. The vertical
/// placement per column comes from the world's dimension kind; the
/// chosen position must then pass the feet/head safety check. The
/// search only reads the world.
pub fn find_destination<W: WorldView>(
    world: &W,
    origin: BlockPos,
    rng: &mut impl Rng,
) -> SearchOutcome {
    let placement = ColumnPlacement::for_dimension(world.dimension_kind());

    for attempt in 0..MAX_RELOCATE_ATTEMPTS {
        // Offsets span [-radius, radius - 2]: 2r - 1 values, one short
        // of symmetric on the positive side.
        let span = MAX_RELOCATE_RADIUS * 2 - 1;
        let dx = rng.random_range(0..span) - MAX_RELOCATE_RADIUS;
        let dz = rng.random_range(0..span) - MAX_RELOCATE_RADIUS;

        let x = origin.0.x + dx;
        let z = origin.0.z + dz;

        let Some(y) = placement.find_y(world, x, z, rng) else {
            continue;
        };

        let pos = BlockPos::new(x, y, z);
        if is_safe(world, &pos) {
            log::trace!("Found destination {pos} on attempt {attempt}");
            return SearchOutcome::Found(pos);
        }
    }

    SearchOutcome::NotFound
}

/// A position is safe when neither the feet block nor the head block
/// obstructs occupancy.
fn is_safe<W: WorldView>(world: &W, pos: &BlockPos) -> bool {
    !world.is_solid(pos) && !world.is_solid(&pos.up())
}
