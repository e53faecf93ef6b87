pub mod algorithms;
pub mod array;
pub mod dims;
pub mod error;
pub mod grid;
pub mod maze;
pub mod ser;

pub use error::MazeError;
pub use maze::Maze;
