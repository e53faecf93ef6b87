use thiserror::Error;

use crate::dims::Pos;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("Position {pos} is outside of the {}x{} maze", size.0, size.1)]
    OutOfRange { pos: Pos, size: Pos },
    #[error("Unexpected character {found:?} at line {line}, column {column}")]
    Format {
        line: usize,
        column: usize,
        found: char,
    },
    #[error("Line {line} has {found} cells, expected {expected}")]
    Ragged {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("Maze has no cells")]
    Empty,
}
