//! Dimension-specific vertical placement.

use drift_utils::BlockPos;
use rand::{Rng, RngExt};
use smallvec::SmallVec;

use crate::world::{DimensionKind, WorldView};

/// Highest elevation the pocket scan considers, inclusive.
const POCKET_SCAN_TOP: i32 = 120;

/// Lowest elevation the pocket scan considers, exclusive.
const POCKET_SCAN_BOTTOM: i32 = 10;

/// How the destination elevation for a column is chosen.
///
/// A closed set of strategies keyed by [`DimensionKind`]. The retry and
/// safety logic of the search is shared; only the vertical placement
/// differs between dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnPlacement {
    /// Place on the heightmap surface.
    Surface,
    /// Scan the column for standable air pockets and pick one at random.
    PocketScan,
}

impl ColumnPlacement {
    /// Selects the placement strategy for a dimension kind.
    #[must_use]
    pub fn for_dimension(kind: DimensionKind) -> Self {
        match kind {
            DimensionKind::OpenSky => Self::Surface,
            DimensionKind::Cavern => Self::PocketScan,
        }
    }

    /// Finds a vertical placement for the column at `(x, z)`.
    ///
    /// Returns `None` when the column offers no valid placement, which
    /// abandons the current attempt but not the whole search.
    pub fn find_y<W: WorldView>(
        self,
        world: &W,
        x: i32,
        z: i32,
        rng: &mut impl Rng,
    ) -> Option<i32> {
        match self {
            Self::Surface => Some(world.surface_y(x, z)),
            Self::PocketScan => pocket_scan(world, x, z, rng),
        }
    }
}

/// Scans the column downward for elevations where an entity can stand:
/// solid ground below, air at feet and head level. One candidate is
/// chosen uniformly at random.
fn pocket_scan<W: WorldView>(world: &W, x: i32, z: i32, rng: &mut impl Rng) -> Option<i32> {
    let mut candidates: SmallVec<[i32; 4]> = SmallVec::new();

    for y in (POCKET_SCAN_BOTTOM + 1..=POCKET_SCAN_TOP).rev() {
        let pos = BlockPos::new(x, y, z);

        if world.is_solid(&pos.down()) && world.is_air(&pos) && world.is_air(&pos.up()) {
            candidates.push(y);
        }
    }

    if candidates.is_empty() {
        None
    } else {
        Some(candidates[rng.random_range(0..candidates.len())])
    }
}
