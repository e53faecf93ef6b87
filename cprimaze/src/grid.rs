use crate::{array::Array2D, dims::Pos};

/// Final state of a maze cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Passage,
    Wall,
}

impl Tile {
    /// `0` for passage, `1` for wall.
    pub fn code(self) -> u8 {
        match self {
            Tile::Passage => 0,
            Tile::Wall => 1,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Tile::Passage),
            1 => Some(Tile::Wall),
            _ => None,
        }
    }

    pub fn is_passage(self) -> bool {
        self == Tile::Passage
    }

    pub fn is_wall(self) -> bool {
        self == Tile::Wall
    }
}

/// Public maze grid, walls and passages only.
pub type Grid = Array2D<Tile>;

/// Cell state used while carving the maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenCell {
    Unvisited,
    Wall,
    Removable,
    Visited,
}

impl GenCell {
    pub fn code(self) -> i8 {
        match self {
            GenCell::Unvisited => 0,
            GenCell::Wall => 1,
            GenCell::Removable => 2,
            GenCell::Visited => -1,
        }
    }

    /// Collapses the carving state into the public one.
    ///
    /// A removable wall that was not knocked down stays a wall.
    pub fn finalize(self) -> Tile {
        match self {
            GenCell::Unvisited | GenCell::Visited => Tile::Passage,
            GenCell::Wall | GenCell::Removable => Tile::Wall,
        }
    }
}

/// Grid of `rows + 2` by `cols + 2` cells with every interior odd/odd cell open and everything
/// else wall.
pub fn lattice(rows: usize, cols: usize) -> Array2D<GenCell> {
    let mut grid = Array2D::new(GenCell::Wall, rows + 2, cols + 2);
    let interior_end = grid.size() - Pos(1, 1);
    for pos in Pos::iter_fill(Pos(1, 1), interior_end) {
        if pos.is_odd_odd() {
            grid[pos] = GenCell::Unvisited;
        }
    }
    grid
}

pub fn finalize(grid: Array2D<GenCell>) -> Grid {
    grid.map(GenCell::finalize)
}

impl Grid {
    pub fn is_passage(&self, pos: Pos) -> bool {
        self.get(pos).is_some_and(|tile| tile.is_passage())
    }

    pub fn passage_count(&self) -> usize {
        self.iter().filter(|tile| tile.is_passage()).count()
    }

    /// Returns the grid as rows of `0`/`1` codes.
    pub fn to_codes(&self) -> Vec<Vec<u8>> {
        self.rows()
            .map(|row| row.iter().map(|tile| tile.code()).collect())
            .collect()
    }
}
