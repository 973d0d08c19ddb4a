//! Interface for renderers.
//!
//! Nothing here mutates puzzle state. Interior faces are masked per renderer
//! via [`HiddenFacePolicy`]; the logical face vectors are untouched.

use serde::{Deserialize, Serialize};

use crate::{Color, Coord, Cubie, Face, FaceVector, Grid, GridSize, Sign};

/// Policy that decides what color to draw on each face of a cubie.
pub trait HiddenFacePolicy {
    /// Returns the color to draw on `face` of the cubie at `coord`, given the
    /// logical color on that face.
    fn display_color(&self, size: GridSize, coord: Coord, face: Face, logical: Color) -> Color;
}

/// Draws faces that are not on the outer surface in a single neutral color.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct MaskInterior {
    /// Color for faces that are not on the outer surface.
    pub color: Color,
}
impl Default for MaskInterior {
    fn default() -> Self {
        Self {
            color: Color::Black,
        }
    }
}
impl HiddenFacePolicy for MaskInterior {
    fn display_color(&self, size: GridSize, coord: Coord, face: Face, logical: Color) -> Color {
        if size.is_exterior(coord, face) {
            logical
        } else {
            self.color
        }
    }
}

/// Draws every face in its logical color.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct ShowAll;
impl HiddenFacePolicy for ShowAll {
    fn display_color(&self, _size: GridSize, _coord: Coord, _face: Face, logical: Color) -> Color {
        logical
    }
}

/// Cubie as it should be drawn.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct RenderCubie {
    /// Current position index.
    pub cubie: Cubie,
    /// Position index in the initial state.
    pub origin: Cubie,
    /// Current position.
    pub coord: Coord,
    /// Colors to draw on each face.
    pub faces: FaceVector,
}

/// Returns every cubie in the grid as it should be drawn.
pub fn render_cubies(grid: &Grid, policy: &impl HiddenFacePolicy) -> Vec<RenderCubie> {
    let size = grid.size();
    grid.iter()
        .zip(size.iter_coords())
        .map(|((cubie, slot), coord)| RenderCubie {
            cubie,
            origin: slot.origin,
            coord,
            faces: FaceVector(
                Face::ALL.map(|face| policy.display_color(size, coord, face, slot.faces[face])),
            ),
        })
        .collect()
}

/// Returns the N×N colors showing on one global face.
///
/// The in-plane axes are `u = face.axis().next()` and `v =
/// face.axis().prev()`. Rows run from the largest `v` to the smallest and
/// columns from the smallest `u` to the largest, so the net reads as if the
/// face were viewed with `u` to the right and `v` up.
pub fn exterior_face_colors(grid: &Grid, face: Face) -> Vec<Vec<Color>> {
    let size = grid.size();
    let n = size.get();
    let axis = face.axis();
    let (u_axis, v_axis) = (axis.next(), axis.prev());
    let layer = match face.sign() {
        Sign::Pos => size.max_coord(),
        Sign::Neg => 0,
    };

    (0..n)
        .rev()
        .map(|v| {
            (0..n)
                .map(|u| {
                    let mut coord = Coord::default();
                    coord.set(axis, layer);
                    coord.set(u_axis, u);
                    coord.set(v_axis, v);
                    // Every in-range coordinate has a slot.
                    grid.index_of(coord)
                        .and_then(|cubie| grid.face_vector_at(cubie))
                        .map_or(Color::Black, |faces| faces[face])
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{Axis, Direction, InitialColoring, Palette, Puzzle};

    #[test]
    fn test_mask_interior() {
        let puzzle = Puzzle::initialize(3).unwrap();
        let cubies = render_cubies(puzzle.grid(), &MaskInterior::default());
        assert_eq!(cubies.len(), 27);

        let core = cubies[13];
        assert_eq!(core.coord, Coord::new(1, 1, 1));
        assert_eq!(core.faces, FaceVector([Color::Black; 6]));

        let corner = cubies[0];
        assert_eq!(
            corner.faces,
            FaceVector([
                Color::Black,
                Color::Black,
                Color::Blue,
                Color::Yellow,
                Color::Black,
                Color::White,
            ]),
        );

        // Masking never touches logical state.
        assert_eq!(
            puzzle.face_vector_at(Cubie(13)).unwrap().colors(),
            Palette::default().face_colors(),
        );
    }

    #[test]
    fn test_uniform_and_exterior_colorings_look_the_same() {
        let size = GridSize::new(4).unwrap();
        let mut uniform = Puzzle::new(size, Palette::default(), InitialColoring::Uniform);
        let mut exterior = Puzzle::new(size, Palette::default(), InitialColoring::Exterior);
        for p in [&mut uniform, &mut exterior] {
            p.rotate_slice(Axis::X, 0, Direction::Positive).unwrap();
            p.rotate_slice(Axis::Y, 2, Direction::Negative).unwrap();
            p.rotate_slice(Axis::Z, 3, Direction::Positive).unwrap();
        }
        let policy = MaskInterior::default();
        assert_eq!(
            render_cubies(uniform.grid(), &policy),
            render_cubies(exterior.grid(), &policy),
        );
    }

    #[test]
    fn test_show_all() {
        let puzzle = Puzzle::initialize(2).unwrap();
        for c in render_cubies(puzzle.grid(), &ShowAll) {
            assert_eq!(c.faces.colors(), Palette::default().face_colors());
        }
    }

    #[test]
    fn test_exterior_face_colors() {
        let mut puzzle = Puzzle::initialize(3).unwrap();
        let top = exterior_face_colors(puzzle.grid(), Face::PosZ);
        assert_eq!(top, vec![vec![Color::Red; 3]; 3]);

        // Turning the front layer (y = 0) moves a row of the +X face onto the
        // top face.
        puzzle.rotate_slice(Axis::Y, 0, Direction::Positive).unwrap();
        let top = exterior_face_colors(puzzle.grid(), Face::PosZ);
        // u = x, v = y; the bottom row of the net is y = 0.
        assert_eq!(top[0], vec![Color::Red; 3]);
        assert_eq!(top[1], vec![Color::Red; 3]);
        assert_eq!(top[2], vec![Color::Green; 3]);

        let right = exterior_face_colors(puzzle.grid(), Face::PosX);
        // u = y, v = z; the first column of the net is y = 0.
        for row in &right {
            assert_eq!(row[0], Color::Blue);
            assert_eq!(row[1..].to_vec(), vec![Color::Green; 2]);
        }
    }
}
