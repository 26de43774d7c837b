// random.rs - Random boards with a fixed live probability

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::config::{DEFAULT_LIVE_PROBABILITY, RandomConfig};
use crate::error::LifeResult;
use crate::grid::{Grid, cell_count};

/// A grid the same size as `grid` where each cell is independently alive
/// with probability 0.3. Draws from the thread-local generator.
pub fn randomize_cell_status(grid: &Grid) -> Grid {
    let mut rng = rand::rng();
    fill(&mut rng, grid.width(), grid.height(), DEFAULT_LIVE_PROBABILITY)
}

/// Reusable source of random boards. Seeded runs are reproducible.
#[derive(Clone, Debug)]
pub struct Randomizer {
    rng: SmallRng,
    live_probability: f64,
}

impl Randomizer {
    pub fn new(config: &RandomConfig) -> LifeResult<Self> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(rand::random);
        debug!(
            live_probability = config.live_probability,
            seeded = config.seed.is_some(),
            "randomizer ready"
        );
        Ok(Self {
            rng: SmallRng::seed_from_u64(seed),
            live_probability: config.live_probability,
        })
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            live_probability: DEFAULT_LIVE_PROBABILITY,
        }
    }

    pub fn live_probability(&self) -> f64 {
        self.live_probability
    }

    /// Fresh random board of the given extents.
    pub fn randomize(&mut self, width: usize, height: usize) -> LifeResult<Grid> {
        cell_count(width, height)?;
        Ok(fill(&mut self.rng, width, height, self.live_probability))
    }

    /// Fresh random board shaped like `grid`. The input is not read otherwise.
    pub fn randomize_like(&mut self, grid: &Grid) -> Grid {
        fill(&mut self.rng, grid.width(), grid.height(), self.live_probability)
    }
}

fn fill<R: Rng + ?Sized>(rng: &mut R, width: usize, height: usize, live_probability: f64) -> Grid {
    // Extents come from a validated grid or from cell_count, so this cannot overflow
    let cells = (0..width * height)
        .map(|_| rng.random_bool(live_probability))
        .collect();
    Grid::from_parts(width, height, cells)
}
