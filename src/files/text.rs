use std::{fs, path::Path};

use cprimaze::{
    grid::Grid,
    ser::{grid_from_text, grid_to_text},
};

use super::FileError;

pub fn export(grid: &Grid, path: &Path) -> Result<(), FileError> {
    fs::write(path, grid_to_text(grid)).map_err(|source| FileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("Saved maze text to {:?}", path);
    Ok(())
}

pub fn import(path: &Path) -> Result<Grid, FileError> {
    let text = fs::read_to_string(path).map_err(|source| FileError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let grid = grid_from_text(&text).map_err(|source| FileError::Maze {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!(
        "Loaded {}x{} maze from {:?}",
        grid.row_count(),
        grid.col_count(),
        path
    );
    Ok(grid)
}
