use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use sha2::Digest;

use crate::{Axis, CommitResult, Direction, GridSize, Puzzle, Result, SliceRotation};

/// Parameters to deterministically generate a sequence of random slice
/// rotations.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ShuffleParams {
    /// Type of shuffle to generate.
    pub ty: ShuffleType,
    /// Random seed. The same seed and type always produce the same rotations.
    pub seed: String,
}
impl ShuffleParams {
    /// Generates new shuffle parameters with a random seed.
    pub fn new(ty: ShuffleType) -> Self {
        let seed = format!("{:016x}", rand::rng().random::<u64>());
        Self { ty, seed }
    }
    /// Returns shuffle parameters with a specific seed.
    pub fn with_seed(ty: ShuffleType, seed: impl Into<String>) -> Self {
        Self {
            ty,
            seed: seed.into(),
        }
    }

    fn rng(&self) -> rand_chacha::ChaCha12Rng {
        let mut sha256 = sha2::Sha256::new();
        sha256.update(self.seed.len().to_le_bytes());
        sha256.update(self.seed.as_bytes());
        let digest = sha256.finalize();

        let mut seed = [0; 32];
        seed.copy_from_slice(&digest);
        rand_chacha::ChaCha12Rng::from_seed(seed)
    }
}

/// Type of shuffle to generate.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ShuffleType {
    /// Random number of rotations in [`crate::SHUFFLE_MOVE_RANGE`].
    Random,
    /// Specific number of rotations.
    Exact(u32),
}

/// Output of shuffling a puzzle.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ShuffleOutput {
    /// Parameters used to generate the shuffle.
    pub params: ShuffleParams,
    /// Rotations applied, in order.
    pub rotations: Vec<SliceRotation>,
    /// Result of each commit, in order.
    pub commits: Vec<CommitResult>,
}

/// Returns an infinite iterator of uniformly random slice rotations.
fn random_rotations(size: GridSize, rng: &mut impl Rng) -> impl Iterator<Item = SliceRotation> {
    std::iter::repeat_with(move || SliceRotation {
        axis: Axis::ALL[rng.random_range(0..3)],
        layer: rng.random_range(0..size.get() as usize),
        direction: if rng.random_bool(0.5) {
            Direction::Positive
        } else {
            Direction::Negative
        },
    })
}

impl Puzzle {
    /// Applies `move_count` random slice rotations with a fresh seed.
    pub fn shuffle(&mut self, move_count: u32) -> Result<ShuffleOutput> {
        self.shuffle_with_params(ShuffleParams::new(ShuffleType::Exact(move_count)))
    }

    /// Applies random slice rotations generated from `params`.
    ///
    /// The shuffle is published as a whole. If any rotation fails, the error
    /// is returned and the puzzle is unchanged.
    pub fn shuffle_with_params(&mut self, params: ShuffleParams) -> Result<ShuffleOutput> {
        let mut rng = params.rng();

        let move_count = match params.ty {
            ShuffleType::Random => rng.random_range(crate::SHUFFLE_MOVE_RANGE),
            ShuffleType::Exact(n) => n,
        };

        // Rotate a copy so that readers never see a partial shuffle.
        let mut staged = self.clone();
        let rotations: Vec<SliceRotation> = random_rotations(self.grid_size(), &mut rng)
            .take(move_count as usize)
            .collect();
        let commits = rotations
            .iter()
            .map(|&rotation| staged.apply(rotation))
            .collect::<Result<Vec<CommitResult>>>()?;
        *self = staged;

        log::info!(
            "shuffled {} with {} rotations (seed {:?})",
            self.grid_size(),
            rotations.len(),
            params.seed,
        );
        Ok(ShuffleOutput {
            params,
            rotations,
            commits,
        })
    }
}
