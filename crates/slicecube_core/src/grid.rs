use serde::{Deserialize, Serialize};

use crate::{Color, Coord, Cubie, Face, FaceVector, GridError, GridSize, Palette, Result};

/// How to color cubies in the initial solved state.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum InitialColoring {
    /// Every cubie carries the full palette, one color per face. Faces that
    /// are not on the outer surface are masked by the renderer (see
    /// [`crate::MaskInterior`]).
    #[default]
    Uniform,
    /// Only faces on the outer surface carry a palette color; every other
    /// face carries the palette's hidden color.
    Exterior,
}

/// Cubie occupying one position in the grid.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct CubieSlot {
    /// Position that the cubie occupied in the initial state.
    pub origin: Cubie,
    /// Colors currently showing on each of the cubie's faces.
    pub faces: FaceVector,
}

/// N×N×N arrangement of cubies, stored flat by linear index.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(try_from = "GridFields")]
pub struct Grid {
    size: GridSize,
    slots: Vec<CubieSlot>,
}
/// Unchecked grid, validated when deserializing.
#[derive(Deserialize)]
struct GridFields {
    size: GridSize,
    slots: Vec<CubieSlot>,
}
impl TryFrom<GridFields> for Grid {
    type Error = GridError;

    /// Checks that there are exactly N³ slots and that every position's
    /// origin appears exactly once.
    fn try_from(GridFields { size, slots }: GridFields) -> Result<Self> {
        let count = size.cubie_count();
        if slots.len() != count {
            return Err(GridError::InvalidGrid(format!(
                "{size} grid has {} cubies instead of {count}",
                slots.len(),
            )));
        }
        let mut seen = vec![false; count];
        for slot in &slots {
            match seen.get_mut(slot.origin.to_index()) {
                None => {
                    return Err(GridError::InvalidGrid(format!(
                        "origin {} is out of range",
                        slot.origin,
                    )));
                }
                Some(true) => {
                    return Err(GridError::InvalidGrid(format!(
                        "origin {} appears more than once",
                        slot.origin,
                    )));
                }
                Some(flag) => *flag = true,
            }
        }
        Ok(Self { size, slots })
    }
}
impl Grid {
    /// Constructs a solved grid.
    pub fn new(size: GridSize, palette: &Palette, coloring: InitialColoring) -> Self {
        let slots = size
            .iter_cubies()
            .zip(size.iter_coords())
            .map(|(cubie, coord)| CubieSlot {
                origin: cubie,
                faces: initial_face_vector(size, coord, palette, coloring),
            })
            .collect();
        Self { size, slots }
    }

    /// Returns the grid size N.
    pub fn size(&self) -> GridSize {
        self.size
    }
    /// Returns the number of cubies, N³.
    pub fn len(&self) -> usize {
        self.slots.len()
    }
    /// Returns `false`. Grids always contain at least one cubie.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the coordinate of the cubie at `index`.
    pub fn coordinate_of(&self, index: Cubie) -> Result<Coord> {
        self.size.coordinate_of(index)
    }
    /// Returns the linear index of the cubie at `coord`.
    pub fn index_of(&self, coord: Coord) -> Result<Cubie> {
        self.size.index_of(coord)
    }

    /// Returns the cubie at `index`.
    pub fn slot_at(&self, index: Cubie) -> Result<&CubieSlot> {
        self.slots
            .get(index.to_index())
            .ok_or_else(|| self.index_out_of_range(index))
    }
    /// Returns the face vector of the cubie at `index`.
    pub fn face_vector_at(&self, index: Cubie) -> Result<FaceVector> {
        Ok(self.slot_at(index)?.faces)
    }
    /// Returns the initial position of the cubie now at `index`.
    pub fn origin_at(&self, index: Cubie) -> Result<Cubie> {
        Ok(self.slot_at(index)?.origin)
    }

    /// Overwrites the face vector of the cubie at `index`.
    pub(crate) fn set_face_vector_at(&mut self, index: Cubie, faces: FaceVector) -> Result<()> {
        self.slot_at_mut(index)?.faces = faces;
        Ok(())
    }
    /// Overwrites the initial position recorded for the cubie at `index`.
    pub(crate) fn set_origin_at(&mut self, index: Cubie, origin: Cubie) -> Result<()> {
        self.slot_at_mut(index)?.origin = origin;
        Ok(())
    }
    fn slot_at_mut(&mut self, index: Cubie) -> Result<&mut CubieSlot> {
        let err = self.index_out_of_range(index);
        self.slots.get_mut(index.to_index()).ok_or(err)
    }
    fn index_out_of_range(&self, index: Cubie) -> GridError {
        GridError::OutOfRange {
            what: "cubie index",
            value: index.to_index(),
            bound: self.slots.len(),
        }
    }

    /// Returns an iterator over cubie indices and the cubies at them.
    pub fn iter(&self) -> impl Iterator<Item = (Cubie, &CubieSlot)> {
        self.size.iter_cubies().zip(&self.slots)
    }

    /// Returns an iterator over the exterior faces of every cubie and the
    /// colors showing on them.
    pub fn iter_stickers(&self) -> impl Iterator<Item = (Coord, Face, Color)> + '_ {
        let size = self.size;
        size.iter_coords()
            .zip(&self.slots)
            .flat_map(move |(coord, slot)| {
                Face::ALL
                    .into_iter()
                    .filter(move |&face| size.is_exterior(coord, face))
                    .map(move |face| (coord, face, slot.faces[face]))
            })
    }

    /// Returns whether every global face shows a single color.
    ///
    /// This does not depend on the orientation of the whole puzzle; a solved
    /// grid with every slice along one axis rotated the same way is still
    /// solved.
    pub fn is_solved(&self) -> bool {
        let mut face_colors: [Option<Color>; 6] = [None; 6];
        self.iter_stickers()
            .all(|(_coord, face, color)| match &mut face_colors[face.slot()] {
                it @ None => {
                    *it = Some(color);
                    true
                }
                Some(c) => *c == color,
            })
    }
}

fn initial_face_vector(
    size: GridSize,
    coord: Coord,
    palette: &Palette,
    coloring: InitialColoring,
) -> FaceVector {
    FaceVector(Face::ALL.map(|face| match coloring {
        InitialColoring::Uniform => palette.face_color(face),
        InitialColoring::Exterior if size.is_exterior(coord, face) => palette.face_color(face),
        InitialColoring::Exterior => palette.hidden(),
    }))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn grid(n: usize, coloring: InitialColoring) -> Grid {
        Grid::new(GridSize::new(n).unwrap(), &Palette::default(), coloring)
    }

    #[test]
    fn test_uniform_initialization() {
        let g = grid(3, InitialColoring::Uniform);
        assert_eq!(g.len(), 27);
        for (cubie, slot) in g.iter() {
            assert_eq!(slot.origin, cubie);
            assert_eq!(slot.faces.colors(), Palette::default().face_colors());
        }
        assert!(g.is_solved());
    }

    #[test]
    fn test_exterior_initialization() {
        use Color::*;

        let g = grid(3, InitialColoring::Exterior);
        let corner = g.index_of(Coord::new(0, 0, 0)).unwrap();
        assert_eq!(
            g.face_vector_at(corner),
            Ok(FaceVector([Black, Black, Blue, Yellow, Black, White])),
        );
        let core = g.index_of(Coord::new(1, 1, 1)).unwrap();
        assert_eq!(g.face_vector_at(core), Ok(FaceVector([Black; 6])));
        let top_center = g.index_of(Coord::new(1, 1, 2)).unwrap();
        assert_eq!(
            g.face_vector_at(top_center),
            Ok(FaceVector([Red, Black, Black, Black, Black, Black])),
        );
        assert!(g.is_solved());
    }

    #[test]
    fn test_accessors_reject_bad_index() {
        let g = grid(2, InitialColoring::Uniform);
        let err = GridError::OutOfRange {
            what: "cubie index",
            value: 8,
            bound: 8,
        };
        assert_eq!(g.face_vector_at(Cubie(8)), Err(err.clone()));
        assert_eq!(g.origin_at(Cubie(8)), Err(err.clone()));
        assert_eq!(g.coordinate_of(Cubie(8)), Err(err));
    }

    #[test]
    fn test_sticker_count() {
        for n in 1..=4 {
            let g = grid(n, InitialColoring::Uniform);
            assert_eq!(g.iter_stickers().count(), 6 * n * n);
        }
    }

    #[test]
    fn test_deserialize_validates_grid() {
        let mut g = grid(2, InitialColoring::Exterior);
        g.set_origin_at(Cubie(0), Cubie(7)).unwrap();
        g.set_origin_at(Cubie(7), Cubie(0)).unwrap();
        let json = serde_json::to_string(&g).unwrap();
        assert_eq!(serde_json::from_str::<Grid>(&json).unwrap(), g);

        let mut value = serde_json::to_value(&g).unwrap();
        value["slots"].as_array_mut().unwrap().pop();
        let err = serde_json::from_value::<Grid>(value).unwrap_err();
        assert!(err.to_string().contains("has 7 cubies instead of 8"), "{err}");

        g.set_origin_at(Cubie(3), Cubie(4)).unwrap();
        let json = serde_json::to_string(&g).unwrap();
        let err = serde_json::from_str::<Grid>(&json).unwrap_err();
        assert!(err.to_string().contains("origin #4 appears more than once"), "{err}");
    }

    #[test]
    fn test_set_face_vector() {
        let mut g = grid(2, InitialColoring::Uniform);
        let v = FaceVector([Color::Purple; 6]);
        g.set_face_vector_at(Cubie(3), v).unwrap();
        assert_eq!(g.face_vector_at(Cubie(3)), Ok(v));
        assert!(!g.is_solved());
        g.set_face_vector_at(Cubie(8), v).expect_err("out of range");
    }
}
