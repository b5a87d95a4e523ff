//! Candidate grid generation

use crate::grid::{Grid, SIZE};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of candidate grids for one worker.
///
/// Implementations are owned by a single worker and never shared.
pub trait GridGenerator: Send {
    /// Produce the next candidate grid
    fn generate(&mut self) -> Grid;
}

/// Uniform random grids backed by a per-worker ChaCha RNG
pub struct RandomGenerator {
    rng: ChaCha8Rng,
    max_value: u64,
}

impl RandomGenerator {
    /// Create a generator drawing cells from `0..=max_value`.
    ///
    /// With `seed == None` the RNG is seeded from the operating system.
    pub fn new(max_value: u64, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        };
        Self { rng, max_value }
    }
}

impl GridGenerator for RandomGenerator {
    fn generate(&mut self) -> Grid {
        let mut grid = Grid::zeroed();
        for row in 0..SIZE {
            for col in 0..SIZE {
                grid.set(row, col, self.rng.random_range(0..=self.max_value));
            }
        }
        grid
    }
}
