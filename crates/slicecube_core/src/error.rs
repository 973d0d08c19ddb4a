use crate::Axis;

/// Result type with [`GridError`] as the default error.
pub type Result<T, E = GridError> = std::result::Result<T, E>;

/// Error from the cubie grid or the rotation engine.
///
/// Every variant is a bad-input failure. Rotations on valid input never fail.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Coordinate component or linear index outside the grid.
    #[error("{what} {value} is out of range (must be less than {bound})")]
    OutOfRange {
        /// What was out of range, such as `"cubie index"`.
        what: &'static str,
        /// Offending value.
        value: usize,
        /// Exclusive upper bound.
        bound: usize,
    },
    /// Slice index outside `0..N` in a rotation request.
    #[error("no slice {layer} along {axis} on a grid of size {size}")]
    InvalidSlice {
        /// Rotation axis.
        axis: Axis,
        /// Requested slice index.
        layer: usize,
        /// Grid size N.
        size: u8,
    },
    /// Grid size is zero or too large.
    #[error("grid size {0} must be between 1 and {max}", max = crate::MAX_GRID_SIZE)]
    InvalidSize(usize),
    /// Palette repeats a color or uses the hidden color on a face.
    #[error("invalid palette: {0}")]
    InvalidPalette(String),
    /// Serialized grid does not describe a valid arrangement of cubies.
    #[error("invalid grid: {0}")]
    InvalidGrid(String),
    /// String is not a slice rotation such as `X0+`.
    #[error("invalid slice rotation {0:?}; expected axis, slice, and sign such as `X0+`")]
    BadRotation(String),
}
