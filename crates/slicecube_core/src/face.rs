use std::fmt;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::{Axis, Color, Sign};

/// Direction that one face of a cubie points in.
///
/// The discriminant of each face is its slot in a [`FaceVector`].
#[derive(
    Serialize, Deserialize, Display, EnumIter, Debug, Copy, Clone, PartialEq, Eq, Hash,
)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum Face {
    /// Top.
    #[strum(serialize = "+Z")]
    PosZ = 0,
    #[strum(serialize = "+X")]
    PosX = 1,
    /// Bottom.
    #[strum(serialize = "-Z")]
    NegZ = 2,
    #[strum(serialize = "-X")]
    NegX = 3,
    #[strum(serialize = "+Y")]
    PosY = 4,
    #[strum(serialize = "-Y")]
    NegY = 5,
}
impl Face {
    /// All six faces, in slot order.
    pub const ALL: [Face; 6] = [
        Face::PosZ,
        Face::PosX,
        Face::NegZ,
        Face::NegX,
        Face::PosY,
        Face::NegY,
    ];

    /// Returns the face pointing along `axis` with `sign`.
    pub fn new(axis: Axis, sign: Sign) -> Self {
        match (axis, sign) {
            (Axis::X, Sign::Pos) => Face::PosX,
            (Axis::X, Sign::Neg) => Face::NegX,
            (Axis::Y, Sign::Pos) => Face::PosY,
            (Axis::Y, Sign::Neg) => Face::NegY,
            (Axis::Z, Sign::Pos) => Face::PosZ,
            (Axis::Z, Sign::Neg) => Face::NegZ,
        }
    }
    /// Returns the axis that the face is perpendicular to.
    pub fn axis(self) -> Axis {
        match self {
            Face::PosX | Face::NegX => Axis::X,
            Face::PosY | Face::NegY => Axis::Y,
            Face::PosZ | Face::NegZ => Axis::Z,
        }
    }
    /// Returns which side of its axis the face is on.
    pub fn sign(self) -> Sign {
        match self {
            Face::PosX | Face::PosY | Face::PosZ => Sign::Pos,
            Face::NegX | Face::NegY | Face::NegZ => Sign::Neg,
        }
    }
    /// Returns the face on the other side of the same axis.
    #[must_use]
    pub fn opposite(self) -> Self {
        Self::new(self.axis(), -self.sign())
    }
    /// Returns the index of the face in a [`FaceVector`].
    pub fn slot(self) -> usize {
        self as usize
    }
}

/// Colors on the six faces of one cubie, indexed by [`Face`].
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct FaceVector(pub [Color; 6]);
impl fmt::Display for FaceVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, face) in Face::ALL.into_iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{face}: {}", self[face])?;
        }
        write!(f, "]")
    }
}
impl Index<Face> for FaceVector {
    type Output = Color;

    fn index(&self, face: Face) -> &Self::Output {
        &self.0[face.slot()]
    }
}
impl IndexMut<Face> for FaceVector {
    fn index_mut(&mut self, face: Face) -> &mut Self::Output {
        &mut self.0[face.slot()]
    }
}
impl FaceVector {
    /// Returns the colors in slot order.
    pub fn colors(&self) -> [Color; 6] {
        self.0
    }
    /// Returns the colors in sorted order, for comparing face vectors as
    /// multisets.
    pub fn sorted(&self) -> [Color; 6] {
        let mut colors = self.0;
        colors.sort();
        colors
    }
    /// Returns the face vector after moving each color according to `perm`.
    #[must_use]
    pub fn permuted(&self, perm: &FacePermutation) -> Self {
        let mut ret = *self;
        for face in Face::ALL {
            ret[perm.dest(face)] = self[face];
        }
        ret
    }
}

/// Permutation of the six face slots.
///
/// The color on face `f` moves to face `self.dest(f)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct FacePermutation([Face; 6]);
impl Default for FacePermutation {
    fn default() -> Self {
        Self::IDENTITY
    }
}
impl fmt::Display for FacePermutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for cycle in self.cycles() {
            if !first {
                write!(f, " ")?;
            }
            first = false;
            write!(f, "(")?;
            for (i, face) in cycle.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{face}")?;
            }
            write!(f, ")")?;
        }
        if first {
            write!(f, "()")?;
        }
        Ok(())
    }
}
impl FacePermutation {
    /// Permutation that leaves every face in place.
    pub const IDENTITY: Self = Self(Face::ALL);

    /// Constructs a permutation from a list of disjoint cycles. In each cycle,
    /// the color on each face moves to the next face.
    pub fn from_cycles<'a>(cycles: impl IntoIterator<Item = &'a [Face]>) -> Self {
        let mut ret = Self::IDENTITY;
        for cycle in cycles {
            for (i, &face) in cycle.iter().enumerate() {
                ret.0[face.slot()] = cycle[(i + 1) % cycle.len()];
            }
        }
        ret
    }

    /// Returns the face that the color on `face` moves to.
    pub fn dest(self, face: Face) -> Face {
        self.0[face.slot()]
    }
    /// Returns the inverse permutation.
    #[must_use]
    pub fn inverse(self) -> Self {
        let mut ret = Self::IDENTITY;
        for face in Face::ALL {
            ret.0[self.dest(face).slot()] = face;
        }
        ret
    }
    /// Returns the permutation equivalent to applying `self` and then
    /// `other`.
    #[must_use]
    pub fn then(self, other: Self) -> Self {
        Self(Face::ALL.map(|face| other.dest(self.dest(face))))
    }
    /// Returns the nontrivial cycles of the permutation, each starting from
    /// its lowest slot.
    pub fn cycles(self) -> Vec<Vec<Face>> {
        let mut seen = [false; 6];
        let mut ret = vec![];
        for start in Face::ALL {
            if seen[start.slot()] || self.dest(start) == start {
                continue;
            }
            let mut cycle = vec![];
            let mut face = start;
            while !seen[face.slot()] {
                seen[face.slot()] = true;
                cycle.push(face);
                face = self.dest(face);
            }
            ret.push(cycle);
        }
        ret
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_face_slots_match_convention() {
        let faces: Vec<Face> = Face::iter().collect();
        assert_eq!(faces, Face::ALL.to_vec());
        for (i, face) in Face::ALL.into_iter().enumerate() {
            assert_eq!(face.slot(), i);
            assert_eq!(Face::new(face.axis(), face.sign()), face);
            assert_eq!(face.opposite().opposite(), face);
            assert_ne!(face.opposite(), face);
        }
        assert_eq!(Face::PosZ.slot(), 0);
        assert_eq!(Face::NegX.slot(), 3);
        assert_eq!(Face::PosY.to_string(), "+Y");
    }

    #[test]
    fn test_permutation_algebra() {
        let cycle = [Face::PosZ, Face::PosY, Face::NegZ, Face::NegY];
        let perm = FacePermutation::from_cycles([&cycle[..]]);
        assert_eq!(perm.dest(Face::PosZ), Face::PosY);
        assert_eq!(perm.dest(Face::NegY), Face::PosZ);
        assert_eq!(perm.dest(Face::PosX), Face::PosX);
        assert_eq!(perm.then(perm.inverse()), FacePermutation::IDENTITY);
        assert_eq!(
            perm.then(perm).then(perm).then(perm),
            FacePermutation::IDENTITY,
        );
        assert_eq!(perm.cycles(), vec![cycle.to_vec()]);
        assert_eq!(perm.to_string(), "(+Z +Y -Z -Y)");
        assert_eq!(FacePermutation::IDENTITY.to_string(), "()");
    }

    #[test]
    fn test_permuted_face_vector() {
        use Color::*;

        let v = FaceVector([Red, Green, Blue, Yellow, Orange, White]);
        let perm = FacePermutation::from_cycles([&[Face::PosX, Face::NegX][..]]);
        assert_eq!(
            v.permuted(&perm),
            FaceVector([Red, Yellow, Blue, Green, Orange, White]),
        );
        assert_eq!(v.permuted(&perm).sorted(), v.sorted());
    }
}
