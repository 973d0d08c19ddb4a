//! State model and slice rotation engine for N×N×N cube puzzles.
//!
//! A [`Puzzle`] owns a flat [`Grid`] of N³ cubies, each carrying a
//! [`FaceVector`] of six colors. Rotating a slice moves every cubie in the
//! slice to its new position and relabels its faces in one commit.
//!
//! # Example
//!
//! ```rust
//! use slicecube_core::prelude::*;
//!
//! let mut puzzle = Puzzle::initialize(3).unwrap();
//! let commit = puzzle.rotate_slice(Axis::Z, 0, Direction::Positive).unwrap();
//! assert_eq!(commit.moves.len(), 9);
//! assert!(!puzzle.is_solved());
//!
//! puzzle.rotate_slice(Axis::Z, 0, Direction::Negative).unwrap();
//! assert!(puzzle.is_solved());
//! ```

mod color;
mod coords;
mod error;
mod face;
mod grid;
mod puzzle;
pub mod render;
mod rotation;
mod shuffle;

pub use prelude::*;

/// Prelude of common imports.
pub mod prelude {
    pub use crate::color::{Color, Palette};
    pub use crate::coords::{Axis, Coord, Cubie, Direction, GridSize, Sign};
    pub use crate::error::{GridError, Result};
    pub use crate::face::{Face, FacePermutation, FaceVector};
    pub use crate::grid::{CubieSlot, Grid, InitialColoring};
    pub use crate::puzzle::{Puzzle, SharedPuzzle};
    pub use crate::render::{HiddenFacePolicy, MaskInterior, RenderCubie, ShowAll};
    pub use crate::rotation::{CommitResult, CubieMove, SliceRotation};
    pub use crate::shuffle::{ShuffleOutput, ShuffleParams, ShuffleType};
}

/// Version string such as `slicecube_core v1.2.3`.
pub const ENGINE_VERSION_STRING: &str =
    concat!(env!("CARGO_PKG_NAME"), " v", env!("CARGO_PKG_VERSION"));

/// Largest supported grid size N.
///
/// Coordinates are stored as `u8`, and N³ must fit in a [`Cubie`] index.
pub const MAX_GRID_SIZE: u8 = u8::MAX;

/// Range of rotation counts for a [`ShuffleType::Random`] shuffle.
///
/// **Changing this will break shuffle reproducibility for existing seeds.**
pub const SHUFFLE_MOVE_RANGE: std::ops::RangeInclusive<u32> = 30..=60;

#[cfg(test)]
mod tests;
