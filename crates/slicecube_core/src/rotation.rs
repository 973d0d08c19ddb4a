use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    Axis, Coord, Cubie, CubieSlot, Direction, Face, FacePermutation, Grid, GridError, GridSize,
    Result, Sign,
};

/// 90° rotation of one slice of the grid.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SliceRotation {
    /// Axis perpendicular to the slice.
    pub axis: Axis,
    /// Coordinate along `axis` shared by every cubie in the slice.
    pub layer: usize,
    /// Direction of rotation.
    pub direction: Direction,
}
impl fmt::Display for SliceRotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.axis, self.layer, self.direction.sign())
    }
}
impl FromStr for SliceRotation {
    type Err = GridError;

    /// Parses a rotation such as `X0+` or `z2-`.
    fn from_str(s: &str) -> Result<Self> {
        let err = || GridError::BadRotation(s.to_owned());
        let s = s.trim();
        let mut chars = s.chars();
        let axis = chars.next().ok_or_else(err)?;
        let direction = match chars.next_back().ok_or_else(err)? {
            '+' => Direction::Positive,
            '-' => Direction::Negative,
            _ => return Err(err()),
        };
        let layer = chars.as_str();
        if layer.is_empty() || !layer.bytes().all(|b| b.is_ascii_digit()) {
            return Err(err());
        }
        Ok(Self {
            axis: axis.to_string().parse().map_err(|_| err())?,
            layer: layer.parse().map_err(|_| err())?,
            direction,
        })
    }
}
impl SliceRotation {
    /// Constructs a slice rotation.
    pub fn new(axis: Axis, layer: usize, direction: Direction) -> Self {
        Self {
            axis,
            layer,
            direction,
        }
    }

    /// Returns the rotation that undoes this one.
    #[must_use]
    pub fn rev(self) -> Self {
        Self {
            direction: self.direction.rev(),
            ..self
        }
    }

    /// Returns the pair of axes spanning the plane of rotation, `(from, to)`.
    /// The rotation moves the positive end of `from` toward the positive end
    /// of `to`.
    ///
    /// For a positive rotation about axis `k`, `from` is axis `k+2` and `to`
    /// is axis `k+1` (mod 3). A negative rotation swaps them.
    pub fn plane(self) -> (Axis, Axis) {
        let (from, to) = (self.axis.prev(), self.axis.next());
        match self.direction {
            Direction::Positive => (from, to),
            Direction::Negative => (to, from),
        }
    }

    /// Returns where the cubie at `coord` ends up after the rotation, assuming
    /// `coord` is in the slice.
    pub fn destination(self, size: GridSize, coord: Coord) -> Coord {
        let (from, to) = self.plane();
        let mut ret = coord;
        ret.set(to, coord.get(from));
        ret.set(from, size.max_coord() - coord.get(to));
        ret
    }

    /// Returns the face that a cubie face pointing toward `face` points toward
    /// after the rotation.
    pub fn rotate_face(self, face: Face) -> Face {
        let (from, to) = self.plane();
        if face.axis() == from {
            Face::new(to, face.sign())
        } else if face.axis() == to {
            Face::new(from, -face.sign())
        } else {
            face
        }
    }

    /// Returns the permutation of face vector slots for every cubie in the
    /// slice. The two faces along the rotation axis are fixed, and the other
    /// four form a single 4-cycle.
    pub fn face_permutation(self) -> FacePermutation {
        let (from, _to) = self.plane();
        let start = Face::new(from, Sign::Pos);
        let cycle: Vec<Face> = std::iter::successors(Some(start), |&f| {
            Some(self.rotate_face(f)).filter(|&next| next != start)
        })
        .collect();
        FacePermutation::from_cycles([&cycle[..]])
    }
}

/// Cubie moved by a slice rotation.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct CubieMove {
    /// Position before the rotation.
    pub from: Cubie,
    /// Position after the rotation.
    pub to: Cubie,
}

/// Outcome of committing a slice rotation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CommitResult {
    /// Rotation that was committed.
    pub rotation: SliceRotation,
    /// Every cubie in the slice, including those that stayed in place (such
    /// as the center of an odd-sized slice).
    pub moves: Vec<CubieMove>,
}
impl CommitResult {
    /// Returns the moves whose source and destination differ.
    pub fn displaced(&self) -> impl Iterator<Item = CubieMove> + '_ {
        self.moves.iter().copied().filter(|m| m.from != m.to)
    }
}

impl Grid {
    /// Rotates one slice of the grid by 90°.
    ///
    /// The whole slice is staged before anything is written, so if the
    /// rotation fails then the grid is unchanged.
    pub fn rotate_slice(&mut self, rotation: SliceRotation) -> Result<CommitResult> {
        let size = self.size();
        let perm = rotation.face_permutation();

        let mut staged: Vec<(CubieMove, CubieSlot)> = Vec::with_capacity(size.slice_len());
        for from in size.iter_slice(rotation.axis, rotation.layer)? {
            let old = self.slot_at(from)?;
            let to = self.index_of(rotation.destination(size, self.coordinate_of(from)?))?;
            log::trace!("{rotation}: {from} -> {to}");
            staged.push((
                CubieMove { from, to },
                CubieSlot {
                    origin: old.origin,
                    faces: old.faces.permuted(&perm),
                },
            ));
        }

        for &(CubieMove { to, .. }, slot) in &staged {
            self.set_origin_at(to, slot.origin)?;
            self.set_face_vector_at(to, slot.faces)?;
        }

        log::debug!("committed {rotation} ({} cubies)", staged.len());
        Ok(CommitResult {
            rotation,
            moves: staged.into_iter().map(|(m, _)| m).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{InitialColoring, Palette};

    fn rot(axis: Axis, layer: usize, direction: Direction) -> SliceRotation {
        SliceRotation::new(axis, layer, direction)
    }

    #[test]
    fn test_positive_face_cycles() {
        use Face::*;

        let expected = [
            (Axis::X, [PosZ, PosY, NegZ, NegY]),
            (Axis::Y, [PosX, PosZ, NegX, NegZ]),
            (Axis::Z, [PosY, PosX, NegY, NegX]),
        ];
        for (axis, cycle) in expected {
            let pos = rot(axis, 0, Direction::Positive).face_permutation();
            assert_eq!(pos, FacePermutation::from_cycles([&cycle[..]]));

            let mut reversed = cycle;
            reversed.reverse();
            let neg = rot(axis, 0, Direction::Negative).face_permutation();
            assert_eq!(neg, FacePermutation::from_cycles([&reversed[..]]));
            assert_eq!(neg, pos.inverse());
        }
    }

    #[test]
    fn test_x_axis_destination_formulas() {
        let size = GridSize::new(4).unwrap();
        let c = Coord::new(2, 1, 3);
        // (y', z') = (z, N-1-y)
        assert_eq!(
            rot(Axis::X, 2, Direction::Positive).destination(size, c),
            Coord::new(2, 3, 2),
        );
        // (y', z') = (N-1-z, y)
        assert_eq!(
            rot(Axis::X, 2, Direction::Negative).destination(size, c),
            Coord::new(2, 0, 1),
        );
    }

    #[test]
    fn test_destination_agrees_with_face_rotation() {
        // A cubie on the exterior face `f` must land on the exterior face
        // `rotate_face(f)`.
        let size = GridSize::new(3).unwrap();
        for axis in Axis::ALL {
            for direction in [Direction::Positive, Direction::Negative] {
                let r = rot(axis, 0, direction);
                for coord in size.iter_coords().filter(|c| c.get(axis) == 0) {
                    let dest = r.destination(size, coord);
                    for face in Face::ALL {
                        assert_eq!(
                            size.is_exterior(coord, face),
                            size.is_exterior(dest, r.rotate_face(face)),
                            "{r} {coord} {face}",
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_parse_and_display() {
        let r: SliceRotation = "X0+".parse().unwrap();
        assert_eq!(r, rot(Axis::X, 0, Direction::Positive));
        assert_eq!(r.to_string(), "X0+");
        assert_eq!(
            "z12-".parse::<SliceRotation>(),
            Ok(rot(Axis::Z, 12, Direction::Negative)),
        );
        for bad in ["", "X", "X+", "W0+", "X0", "X-1+", "X0*"] {
            assert_eq!(
                bad.parse::<SliceRotation>(),
                Err(GridError::BadRotation(bad.to_owned())),
            );
        }
    }

    #[test]
    fn test_invalid_slice_leaves_grid_unchanged() {
        let size = GridSize::new(3).unwrap();
        let mut grid = Grid::new(size, &Palette::default(), InitialColoring::Uniform);
        let before = grid.clone();
        assert_eq!(
            grid.rotate_slice(rot(Axis::Y, 3, Direction::Positive)),
            Err(GridError::InvalidSlice {
                axis: Axis::Y,
                layer: 3,
                size: 3,
            }),
        );
        assert_eq!(grid, before);
    }

    #[test]
    fn test_commit_moves_form_a_permutation() {
        let size = GridSize::new(4).unwrap();
        let mut grid = Grid::new(size, &Palette::default(), InitialColoring::Exterior);
        let result = grid
            .rotate_slice(rot(Axis::Y, 1, Direction::Negative))
            .unwrap();
        let mut from: Vec<Cubie> = result.moves.iter().map(|m| m.from).collect();
        let mut to: Vec<Cubie> = result.moves.iter().map(|m| m.to).collect();
        from.sort();
        to.sort();
        assert_eq!(from.len(), 16);
        assert_eq!(from, to);
        // Even-sized slices have no fixed center.
        assert_eq!(result.displaced().count(), 16);
    }
}
