use crate::{
    algorithms::{self, Path},
    dims::Pos,
    error::MazeError,
    grid::{self, Grid},
};

/// Seed used when none is given.
pub const DEFAULT_SEED: u64 = 63;

/// Maze together with the parameters it was made from and its last solution.
#[derive(Debug, Clone)]
pub struct Maze {
    grid: Grid,
    rows: usize,
    cols: usize,
    seed: u64,
    path: Option<Path>,
}

impl Maze {
    /// Creates a maze with `rows` by `cols` requested cells, not carved yet.
    ///
    /// The grid is the bare lattice, see [`grid::lattice`], until [`Maze::generate`] is called.
    pub fn new(rows: usize, cols: usize, seed: u64) -> Self {
        Maze {
            grid: grid::finalize(grid::lattice(rows, cols)),
            rows,
            cols,
            seed,
            path: None,
        }
    }

    /// Wraps an already finished grid, e.g. one loaded from a file.
    ///
    /// The requested size is the grid size without the border.
    pub fn from_grid(grid: Grid) -> Self {
        let rows = grid.row_count().saturating_sub(2);
        let cols = grid.col_count().saturating_sub(2);

        Maze {
            grid,
            rows,
            cols,
            seed: DEFAULT_SEED,
            path: None,
        }
    }

    /// Carves the maze, replacing the current grid and dropping any previous solution.
    pub fn generate(&mut self) -> &Grid {
        log::debug!(
            "Generating {}x{} maze with seed {}",
            self.rows,
            self.cols,
            self.seed
        );
        self.grid = algorithms::generate_seeded(self.rows, self.cols, self.seed);
        self.path = None;
        &self.grid
    }

    /// Finds the route between `start` and `end` and remembers it.
    ///
    /// The stored path is only replaced when a route is found. When either endpoint is out of
    /// range the error is returned and nothing changes.
    pub fn solve(&mut self, start: Pos, end: Pos) -> Result<Option<&[Pos]>, MazeError> {
        match algorithms::solve(&self.grid, start, end)? {
            Some(path) => {
                log::debug!("Solved {} -> {} in {} steps", start, end, path.len());
                self.path = Some(path);
                Ok(self.path.as_deref())
            }
            None => {
                log::warn!("No route from {} to {}", start, end);
                Ok(None)
            }
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn path(&self) -> Option<&[Pos]> {
        self.path.as_deref()
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Requested size, without the border.
    pub fn size(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Size of the grid, including the border.
    pub fn grid_size(&self) -> Pos {
        self.grid.size()
    }

    /// `true` if the cell at `pos` is part of the stored path.
    pub fn is_on_path(&self, pos: Pos) -> bool {
        self.path.as_ref().is_some_and(|path| path.contains(&pos))
    }
}

impl Default for Maze {
    fn default() -> Self {
        Maze::new(1, 1, DEFAULT_SEED)
    }
}
