use std::fmt;

use itertools::iproduct;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::{Face, GridError, Result};

/// Coordinate axis.
#[derive(
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
)]
#[strum(ascii_case_insensitive)]
#[allow(missing_docs)]
pub enum Axis {
    X = 0,
    Y = 1,
    Z = 2,
}
impl Axis {
    /// All three axes, in order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Returns the axis with the given index (0, 1, or 2).
    pub fn from_index(i: usize) -> Option<Self> {
        Self::ALL.get(i).copied()
    }
    /// Returns the index of the axis (0, 1, or 2).
    pub fn index(self) -> usize {
        self as usize
    }
    /// Returns the next axis in the cycle X → Y → Z → X.
    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % 3]
    }
    /// Returns the previous axis in the cycle X → Y → Z → X.
    #[must_use]
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + 2) % 3]
    }
}

/// Positive or negative side of an axis.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Sign {
    Pos,
    Neg,
}
impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sign::Pos => write!(f, "+"),
            Sign::Neg => write!(f, "-"),
        }
    }
}
impl std::ops::Neg for Sign {
    type Output = Sign;

    fn neg(self) -> Self::Output {
        match self {
            Sign::Pos => Sign::Neg,
            Sign::Neg => Sign::Pos,
        }
    }
}

/// Direction of a 90° slice rotation.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum Direction {
    Positive,
    Negative,
}
impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn rev(self) -> Self {
        match self {
            Direction::Positive => Direction::Negative,
            Direction::Negative => Direction::Positive,
        }
    }
    /// Returns the sign used when displaying the direction.
    pub fn sign(self) -> Sign {
        match self {
            Direction::Positive => Sign::Pos,
            Direction::Negative => Sign::Neg,
        }
    }
}

/// Linear index of a cubie position in a [`crate::Grid`].
#[derive(
    Serialize, Deserialize, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Cubie(pub u32);
impl fmt::Debug for Cubie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:?}", self.0)
    }
}
impl fmt::Display for Cubie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
impl Cubie {
    /// Returns the index as a `usize`.
    pub fn to_index(self) -> usize {
        self.0 as usize
    }
}

/// Position of a cubie in the grid. Each component is in `0..N`.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub struct Coord {
    pub x: u8,
    pub y: u8,
    pub z: u8,
}
impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
impl Coord {
    /// Constructs a coordinate.
    pub const fn new(x: u8, y: u8, z: u8) -> Self {
        Self { x, y, z }
    }

    /// Returns the component along `axis`.
    pub fn get(self, axis: Axis) -> u8 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }
    /// Sets the component along `axis`.
    pub fn set(&mut self, axis: Axis, value: u8) {
        match axis {
            Axis::X => self.x = value,
            Axis::Y => self.y = value,
            Axis::Z => self.z = value,
        }
    }
}

/// Edge length N of an N×N×N grid.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(try_from = "usize", into = "usize")]
pub struct GridSize(u8);
impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{0}x{0}x{0}", self.0)
    }
}
impl TryFrom<usize> for GridSize {
    type Error = GridError;

    fn try_from(n: usize) -> Result<Self> {
        Self::new(n)
    }
}
impl From<GridSize> for usize {
    fn from(size: GridSize) -> Self {
        size.get() as usize
    }
}
impl GridSize {
    /// Constructs a grid size, or returns an error if `n` is zero or exceeds
    /// [`crate::MAX_GRID_SIZE`].
    pub fn new(n: usize) -> Result<Self> {
        match u8::try_from(n) {
            Ok(n) if n >= 1 => Ok(Self(n)),
            _ => Err(GridError::InvalidSize(n)),
        }
    }

    /// Returns N.
    pub fn get(self) -> u8 {
        self.0
    }
    /// Returns N³, the number of cubies.
    pub fn cubie_count(self) -> usize {
        self.slice_len() * self.0 as usize
    }
    /// Returns N², the number of cubies in one slice.
    pub fn slice_len(self) -> usize {
        self.0 as usize * self.0 as usize
    }
    /// Returns N-1, the largest coordinate.
    pub fn max_coord(self) -> u8 {
        self.0 - 1
    }

    /// Returns the coordinate of the cubie at `index`.
    pub fn coordinate_of(self, index: Cubie) -> Result<Coord> {
        let i = index.to_index();
        let count = self.cubie_count();
        if i >= count {
            return Err(GridError::OutOfRange {
                what: "cubie index",
                value: i,
                bound: count,
            });
        }
        let n = self.0 as usize;
        // Each component is less than N, so the casts cannot truncate.
        Ok(Coord {
            x: (i % n) as u8,
            y: (i / n % n) as u8,
            z: (i / (n * n)) as u8,
        })
    }

    /// Returns the linear index of the cubie at `coord`.
    pub fn index_of(self, coord: Coord) -> Result<Cubie> {
        for axis in Axis::ALL {
            let value = coord.get(axis);
            if value >= self.0 {
                return Err(GridError::OutOfRange {
                    what: match axis {
                        Axis::X => "x coordinate",
                        Axis::Y => "y coordinate",
                        Axis::Z => "z coordinate",
                    },
                    value: value as usize,
                    bound: self.0 as usize,
                });
            }
        }
        let n = self.0 as u32;
        Ok(Cubie(
            coord.z as u32 * n * n + coord.y as u32 * n + coord.x as u32,
        ))
    }

    /// Returns an iterator over every cubie index, in order.
    pub fn iter_cubies(self) -> impl ExactSizeIterator<Item = Cubie> + Clone {
        (0..self.cubie_count() as u32).map(Cubie)
    }
    /// Returns an iterator over every coordinate, in cubie index order.
    pub fn iter_coords(self) -> impl Iterator<Item = Coord> + Clone {
        let n = self.0;
        iproduct!(0..n, 0..n, 0..n).map(|(z, y, x)| Coord { x, y, z })
    }

    /// Returns an iterator over the N² cubies whose coordinate along `axis`
    /// is `layer`.
    pub fn iter_slice(self, axis: Axis, layer: usize) -> Result<impl Iterator<Item = Cubie>> {
        let layer = self.check_layer(axis, layer)?;
        let n = self.0;
        Ok(iproduct!(0..n, 0..n).map(move |(v, u)| {
            let mut coord = Coord::default();
            coord.set(axis, layer);
            coord.set(axis.next(), u);
            coord.set(axis.prev(), v);
            let n = n as u32;
            Cubie(coord.z as u32 * n * n + coord.y as u32 * n + coord.x as u32)
        }))
    }

    /// Returns `layer` as a coordinate component, or an error if it is not a
    /// valid slice along `axis`.
    pub fn check_layer(self, axis: Axis, layer: usize) -> Result<u8> {
        match u8::try_from(layer) {
            Ok(l) if l < self.0 => Ok(l),
            _ => Err(GridError::InvalidSlice {
                axis,
                layer,
                size: self.0,
            }),
        }
    }

    /// Returns whether `face` of the cubie at `coord` lies on the outer
    /// surface of the grid.
    pub fn is_exterior(self, coord: Coord, face: Face) -> bool {
        let c = coord.get(face.axis());
        match face.sign() {
            Sign::Pos => c == self.max_coord(),
            Sign::Neg => c == 0,
        }
    }
}
