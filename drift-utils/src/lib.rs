//! Shared foundation types for the drift workspace.

pub mod math;
pub mod types;

pub use types::BlockPos;
