//! Contracts between the relocation core and the hosting engine.
//!
//! The core never owns world state. Terrain queries, the relocation
//! command, and entity identity all go through these traits, which the
//! host implements once per world.

use drift_utils::BlockPos;
use drift_utils::math::Vector3;
use thiserror::Error;
use uuid::Uuid;

/// The vertical-placement category of a dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DimensionKind {
    /// Columns are open to the sky; the heightmap gives ground level.
    OpenSky,
    /// Enclosed between bedrock floor and ceiling (nether-like); safe
    /// elevations have to be scanned for inside the column.
    Cavern,
}

/// Error returned by the host when a relocation command cannot be
/// carried out.
#[derive(Debug, Error)]
pub enum RelocateError {
    /// The entity is not (or no longer) known to the world.
    #[error("unknown entity {0}")]
    UnknownEntity(Uuid),
}

/// Read/write capability set over a single world, provided by the host.
///
/// All queries take `&self`; [`WorldView::request_relocation`] is the
/// only mutating call, so a destination search cannot change the world
/// it is inspecting.
pub trait WorldView {
    /// The placement category of this world.
    fn dimension_kind(&self) -> DimensionKind;

    /// The highest motion-blocking, non-leaf surface of the column at
    /// `(x, z)`.
    ///
    /// Heightmap semantics: the returned elevation is the one directly
    /// above the topmost solid block, so the block at the returned
    /// elevation is expected to be open.
    fn surface_y(&self, x: i32, z: i32) -> i32;

    /// Whether the block at `pos` obstructs occupancy.
    fn is_solid(&self, pos: &BlockPos) -> bool;

    /// Whether the block at `pos` is air.
    fn is_air(&self, pos: &BlockPos) -> bool;

    /// Moves an entity to a continuous target position.
    fn request_relocation(
        &mut self,
        entity_id: Uuid,
        target: Vector3<f64>,
    ) -> Result<(), RelocateError>;
}

/// An actor the scheduler may relocate.
pub trait Relocatable {
    /// Stable unique identifier, used as the timer-table key.
    fn id(&self) -> Uuid;

    /// The entity's current block position.
    fn block_pos(&self) -> BlockPos;
}
