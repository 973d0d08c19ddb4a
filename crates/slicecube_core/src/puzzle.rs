use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::{
    Axis, CommitResult, Coord, Cubie, Direction, FaceVector, Grid, GridSize, InitialColoring,
    Palette, Result, SliceRotation,
};

/// Instance of a puzzle with a particular state.
///
/// The committed state is published as an immutable [`Grid`] snapshot.
/// Readers that hold a snapshot from [`Puzzle::snapshot()`] keep seeing it
/// unchanged; each commit publishes a new one only after the whole slice has
/// been computed.
#[derive(Clone)]
pub struct Puzzle {
    grid: Arc<Grid>,
    palette: Palette,
    coloring: InitialColoring,
    history: Vec<SliceRotation>,
}
impl fmt::Debug for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Puzzle")
            .field("size", &self.grid.size())
            .field("coloring", &self.coloring)
            .field("history", &self.history)
            .finish_non_exhaustive()
    }
}
impl Puzzle {
    /// Constructs a solved puzzle of size `n` with the default palette and
    /// [`InitialColoring::Uniform`].
    pub fn initialize(n: usize) -> Result<Self> {
        Ok(Self::new(
            GridSize::new(n)?,
            Palette::default(),
            InitialColoring::default(),
        ))
    }
    /// Constructs a solved puzzle.
    pub fn new(size: GridSize, palette: Palette, coloring: InitialColoring) -> Self {
        Self {
            grid: Arc::new(Grid::new(size, &palette, coloring)),
            palette,
            coloring,
            history: vec![],
        }
    }

    /// Returns the grid size N.
    pub fn grid_size(&self) -> GridSize {
        self.grid.size()
    }
    /// Returns the palette used for the initial state.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }
    /// Returns the coloring scheme used for the initial state.
    pub fn coloring(&self) -> InitialColoring {
        self.coloring
    }
    /// Returns the coordinate of the cubie at `index`.
    pub fn coordinate_of(&self, index: Cubie) -> Result<Coord> {
        self.grid.coordinate_of(index)
    }
    /// Returns the face vector of the cubie at `index` in the current state.
    pub fn face_vector_at(&self, index: Cubie) -> Result<FaceVector> {
        self.grid.face_vector_at(index)
    }
    /// Returns the current state.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }
    /// Returns a reference-counted snapshot of the current state.
    pub fn snapshot(&self) -> Arc<Grid> {
        Arc::clone(&self.grid)
    }
    /// Returns every rotation committed since the puzzle was constructed or
    /// reset.
    pub fn history(&self) -> &[SliceRotation] {
        &self.history
    }
    /// Returns whether every global face shows a single color.
    pub fn is_solved(&self) -> bool {
        self.grid.is_solved()
    }

    /// Rotates one slice by 90° and publishes the new state.
    pub fn rotate_slice(
        &mut self,
        axis: Axis,
        layer: usize,
        direction: Direction,
    ) -> Result<CommitResult> {
        self.apply(SliceRotation::new(axis, layer, direction))
    }
    /// Applies a slice rotation and publishes the new state.
    pub fn apply(&mut self, rotation: SliceRotation) -> Result<CommitResult> {
        // `Grid::rotate_slice()` validates before writing anything, so a
        // failed rotation never leaves a half-written state behind. If a
        // reader holds the current snapshot, this writes to a copy.
        let result = Arc::make_mut(&mut self.grid).rotate_slice(rotation)?;
        self.history.push(rotation);
        Ok(result)
    }

    /// Undoes the most recent rotation. Returns `None` if there is nothing to
    /// undo.
    ///
    /// The rotation is removed from the history only if the reverse rotation
    /// succeeds.
    pub fn undo(&mut self) -> Result<Option<CommitResult>> {
        let Some(&rotation) = self.history.last() else {
            return Ok(None);
        };
        let result = Arc::make_mut(&mut self.grid).rotate_slice(rotation.rev())?;
        self.history.pop();
        Ok(Some(result))
    }

    /// Returns the puzzle to its initial solved state and clears the history.
    pub fn reset(&mut self) {
        self.grid = Arc::new(Grid::new(self.grid.size(), &self.palette, self.coloring));
        self.history.clear();
    }
}

/// Puzzle shared between a driver thread that applies rotations and any
/// number of reader threads.
///
/// Readers should take a [`Puzzle::snapshot()`] and release the lock rather
/// than hold the lock while rendering.
#[derive(Debug, Clone)]
pub struct SharedPuzzle(Arc<RwLock<Puzzle>>);
impl From<Puzzle> for SharedPuzzle {
    fn from(puzzle: Puzzle) -> Self {
        Self(Arc::new(RwLock::new(puzzle)))
    }
}
impl SharedPuzzle {
    /// Returns the most recently published state.
    pub fn snapshot(&self) -> Arc<Grid> {
        self.0.read().snapshot()
    }
    /// Applies a slice rotation and publishes the new state.
    pub fn apply(&self, rotation: SliceRotation) -> Result<CommitResult> {
        self.0.write().apply(rotation)
    }
    /// Locks the puzzle for reading.
    pub fn read(&self) -> parking_lot::RwLockReadGuard<'_, Puzzle> {
        self.0.read()
    }
    /// Locks the puzzle for writing.
    pub fn write(&self) -> parking_lot::RwLockWriteGuard<'_, Puzzle> {
        self.0.write()
    }
}
