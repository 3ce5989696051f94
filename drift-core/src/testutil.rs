//! Scriptable world, entity, and RNG doubles for the relocation tests.

use std::cell::RefCell;
use std::convert::Infallible;
use std::ops::RangeInclusive;

use drift_utils::BlockPos;
use drift_utils::math::Vector3;
use rand::TryRng;
use uuid::Uuid;

use crate::world::{DimensionKind, Relocatable, RelocateError, WorldView};

/// A small in-memory world with recorded queries and relocations.
///
/// Open-sky worlds are solid below a flat surface; "sealed" worlds
/// report the same heightmap but are solid everywhere, which makes
/// every safety check fail. Cavern worlds are solid except inside the
/// given air bands.
pub struct TestWorld {
    kind: DimensionKind,
    surface: i32,
    sealed: bool,
    air_bands: Vec<RangeInclusive<i32>>,
    deny: bool,
    surface_log: RefCell<Vec<(i32, i32)>>,
    solid_log: RefCell<Vec<BlockPos>>,
    relocation_log: RefCell<Vec<(Uuid, Vector3<f64>)>>,
}

impl TestWorld {
    fn base(kind: DimensionKind) -> Self {
        Self {
            kind,
            surface: 0,
            sealed: false,
            air_bands: Vec::new(),
            deny: false,
            surface_log: RefCell::new(Vec::new()),
            solid_log: RefCell::new(Vec::new()),
            relocation_log: RefCell::new(Vec::new()),
        }
    }

    /// Open-sky world with a flat surface at the given elevation.
    pub fn open_sky(surface: i32) -> Self {
        Self {
            surface,
            ..Self::base(DimensionKind::OpenSky)
        }
    }

    /// Open-sky world whose heightmap reports `surface` but where every
    /// block is solid.
    pub fn sealed(surface: i32) -> Self {
        Self {
            surface,
            sealed: true,
            ..Self::base(DimensionKind::OpenSky)
        }
    }

    /// Cavern world that is air inside the given bands and solid
    /// everywhere else.
    pub fn cavern(air_bands: Vec<RangeInclusive<i32>>) -> Self {
        Self {
            air_bands,
            ..Self::base(DimensionKind::Cavern)
        }
    }

    /// Un-seals a sealed world, making positions above the surface safe.
    pub fn open(&mut self) {
        self.sealed = false;
    }

    /// Makes every relocation command fail with [`RelocateError`].
    pub fn deny_relocations(&mut self) {
        self.deny = true;
    }

    /// Every `(x, z)` column the heightmap was queried for, in order.
    pub fn surface_queries(&self) -> Vec<(i32, i32)> {
        self.surface_log.borrow().clone()
    }

    /// Elevations of every solidity query, in order.
    pub fn solid_query_ys(&self) -> Vec<i32> {
        self.solid_log.borrow().iter().map(|pos| pos.0.y).collect()
    }

    /// Every issued relocation, in order.
    pub fn relocations(&self) -> Vec<(Uuid, Vector3<f64>)> {
        self.relocation_log.borrow().clone()
    }

    fn solid_at(&self, pos: &BlockPos) -> bool {
        if self.sealed {
            return true;
        }
        match self.kind {
            DimensionKind::OpenSky => pos.0.y < self.surface,
            DimensionKind::Cavern => !self.air_bands.iter().any(|band| band.contains(&pos.0.y)),
        }
    }
}

impl WorldView for TestWorld {
    fn dimension_kind(&self) -> DimensionKind {
        self.kind
    }

    fn surface_y(&self, x: i32, z: i32) -> i32 {
        self.surface_log.borrow_mut().push((x, z));
        self.surface
    }

    fn is_solid(&self, pos: &BlockPos) -> bool {
        self.solid_log.borrow_mut().push(*pos);
        self.solid_at(pos)
    }

    fn is_air(&self, pos: &BlockPos) -> bool {
        !self.solid_at(pos)
    }

    fn request_relocation(
        &mut self,
        entity_id: Uuid,
        target: Vector3<f64>,
    ) -> Result<(), RelocateError> {
        if self.deny {
            return Err(RelocateError::UnknownEntity(entity_id));
        }
        self.relocation_log.borrow_mut().push((entity_id, target));
        Ok(())
    }
}

/// A stationary entity with a random id.
pub struct TestEntity {
    id: Uuid,
    pos: BlockPos,
}

impl TestEntity {
    /// Creates an entity standing at `pos`.
    pub fn at(pos: BlockPos) -> Self {
        Self {
            id: Uuid::new_v4(),
            pos,
        }
    }
}

impl Relocatable for TestEntity {
    fn id(&self) -> Uuid {
        self.id
    }

    fn block_pos(&self) -> BlockPos {
        self.pos
    }
}

/// Deterministic RNG that pins the per-tick trigger draw.
///
/// Every 32-bit output is squeezed into either the low or the high end
/// of the range, so the `f32` probability draw always lands below or
/// at-or-above the trigger chance, while bounded-range draws inside the
/// search still vary enough to stay uniform-ish and terminate.
pub struct TriggerRng {
    state: u32,
    fire: bool,
}

impl TriggerRng {
    /// The probability draw fires on every step.
    pub fn always() -> Self {
        Self {
            state: 0x9E37_79B9,
            fire: true,
        }
    }

    /// The probability draw never fires.
    pub fn never() -> Self {
        Self {
            state: 0x9E37_79B9,
            fire: false,
        }
    }
}

impl TryRng for TriggerRng {
    type Error = Infallible;

    fn try_next_u32(&mut self) -> Result<u32, Self::Error> {
        self.state = self
            .state
            .wrapping_mul(747_796_405)
            .wrapping_add(2_891_336_453);
        Ok(if self.fire {
            // Top 24 bits stay below 0.003 * 2^24.
            (self.state % 0x00C4_0000) | 1
        } else {
            self.state | 0x8000_0000
        })
    }

    fn try_next_u64(&mut self) -> Result<u64, Self::Error> {
        Ok((u64::from(self.try_next_u32()?) << 32) | u64::from(self.try_next_u32()?))
    }

    fn try_fill_bytes(&mut self, dst: &mut [u8]) -> Result<(), Self::Error> {
        for chunk in dst.chunks_mut(4) {
            let bytes = self.try_next_u32()?.to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
        Ok(())
    }
}
