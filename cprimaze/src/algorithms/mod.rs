pub mod best_first;
pub mod prims;

use std::fmt;

use rand::SeedableRng as _;

use crate::{dims::Pos, error::MazeError, grid::Grid};
pub use best_first::BestFirst;
pub use prims::RndPrims;

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

/// Ordered list of cells from start to end, both inclusive.
pub type Path = Vec<Pos>;

pub trait MazeGenerator: fmt::Debug + Sync + Send {
    /// Builds a `rows + 2` by `cols + 2` grid, the extra rows and columns being the outer wall.
    fn generate(&self, rows: usize, cols: usize, rng: &mut Random) -> Grid;
}

pub trait MazeSolver: fmt::Debug + Sync + Send {
    /// Finds a route from `start` to `end`.
    ///
    /// Fails when either endpoint is outside of the grid, returns `Ok(None)` when there's no
    /// route between them.
    fn solve(&self, grid: &Grid, start: Pos, end: Pos) -> Result<Option<Path>, MazeError>;
}

/// Generates a maze with [`RndPrims`], using the given generator.
pub fn generate(rows: usize, cols: usize, rng: &mut Random) -> Grid {
    RndPrims.generate(rows, cols, rng)
}

/// Same as [`generate`], but seeds a fresh generator first.
///
/// Same seed and size always produce the same maze.
pub fn generate_seeded(rows: usize, cols: usize, seed: u64) -> Grid {
    generate(rows, cols, &mut Random::seed_from_u64(seed))
}

/// Solves the maze with [`BestFirst`].
pub fn solve(grid: &Grid, start: Pos, end: Pos) -> Result<Option<Path>, MazeError> {
    BestFirst.solve(grid, start, end)
}
