use rand::Rng as _;
use smallvec::SmallVec;

use super::{MazeGenerator, Random};
use crate::{
    array::Array2D,
    dims::Pos,
    error::MazeError,
    grid::{self, GenCell, Grid},
};

/// Cell the carving starts from.
pub const START: Pos = Pos(1, 1);

/// Randomized Prim's algorithm.
///
/// Odd/odd cells are the nodes of the maze, cells between two of them are the walls which can be
/// knocked down and even/even cells are pillars that stay forever. A wall is only knocked down
/// when it leads to a cell that wasn't reached yet, so the passages always form a spanning tree.
#[derive(Debug)]
pub struct RndPrims;

impl MazeGenerator for RndPrims {
    fn generate(&self, rows: usize, cols: usize, rng: &mut Random) -> Grid {
        let mut maze = grid::lattice(rows, cols);
        let size = maze.size();

        // no interior cell to start from
        if rows == 0 || cols == 0 {
            log::debug!("Maze {}x{} has no interior, skipping generation", rows, cols);
            return grid::finalize(maze);
        }

        for pos in Pos::iter_fill(Pos(1, 1), size - Pos(1, 1)) {
            if maze[pos] == GenCell::Wall && !pos.is_even_even() {
                maze[pos] = GenCell::Removable;
            }
        }

        let mut walls: Vec<Pos> = Vec::new();
        maze[START] = GenCell::Visited;
        push_walls_around(&maze, START, &mut walls);

        let mut knocked_down = 0usize;
        while !walls.is_empty() {
            let wall = walls.swap_remove(rng.gen_range(0..walls.len()));

            let mut opened = false;
            for cell in maze.window(wall).into_iter().flatten() {
                if maze[cell] == GenCell::Unvisited {
                    maze[cell] = GenCell::Visited;
                    push_walls_around(&maze, cell, &mut walls);
                    opened = true;
                }
            }

            if opened {
                maze[wall] = GenCell::Visited;
                knocked_down += 1;
            }
        }

        log::debug!(
            "Generated {}x{} maze, knocked down {} walls",
            rows,
            cols,
            knocked_down
        );

        grid::finalize(maze)
    }
}

/// Removable walls in the 3x3 window centered at `pos`, clipped to the grid.
pub fn walls_around(
    maze: &Array2D<GenCell>,
    pos: Pos,
) -> Result<SmallVec<[Pos; 8]>, MazeError> {
    let window = maze.window(pos).ok_or(MazeError::OutOfRange {
        pos,
        size: maze.size(),
    })?;

    Ok(window
        .filter(|&cell| maze[cell] == GenCell::Removable)
        .collect())
}

fn push_walls_around(maze: &Array2D<GenCell>, pos: Pos, walls: &mut Vec<Pos>) {
    match walls_around(maze, pos) {
        Ok(around) => walls.extend(around),
        Err(err) => log::warn!("Skipping walls around {}: {}", pos, err),
    }
}
