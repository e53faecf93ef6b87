pub mod png;
pub mod text;

use std::{io, path::PathBuf};

use cprimaze::MazeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FileError {
    #[error("Failed to access {path:?}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("Invalid maze in {path:?}: {source}")]
    Maze { path: PathBuf, source: MazeError },
    #[error("Image error in {path:?}: {source}")]
    Image {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("Unexpected colour {rgb:?} at pixel ({x}, {y}), only black and white are allowed")]
    Pixel { x: u32, y: u32, rgb: [u8; 3] },
    #[error("Image {width}x{height} is too small for {cell_size} pixel cells")]
    TooSmall {
        width: u32,
        height: u32,
        cell_size: u32,
    },
}

/// Format of a maze file, picked from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Png,
}

impl Format {
    pub fn from_path(path: &std::path::Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("png") => Format::Png,
            _ => Format::Text,
        }
    }
}
