// Wrapper types making it harder to accidentally use the wrong underlying type.

use std::fmt;

use crate::math::Vector3;

/// A block position on the world grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockPos(pub Vector3<i32>);

impl BlockPos {
    /// Creates a block position from its components.
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self(Vector3::new(x, y, z))
    }

    /// Returns this position offset by the given deltas.
    #[must_use]
    pub const fn offset(&self, dx: i32, dy: i32, dz: i32) -> Self {
        Self::new(self.0.x + dx, self.0.y + dy, self.0.z + dz)
    }

    /// The position directly above.
    #[must_use]
    pub const fn up(&self) -> Self {
        self.offset(0, 1, 0)
    }

    /// The position directly below.
    #[must_use]
    pub const fn down(&self) -> Self {
        self.offset(0, -1, 0)
    }

    /// The continuous center of the block column one block above this
    /// position, where an entity placed at this position stands.
    #[must_use]
    pub fn top_center(&self) -> Vector3<f64> {
        Vector3::new(
            f64::from(self.0.x) + 0.5,
            f64::from(self.0.y) + 1.0,
            f64::from(self.0.z) + 0.5,
        )
    }
}

impl fmt::Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
