use std::path::Path;

use cprimaze::{
    dims::Pos,
    grid::{Grid, Tile},
    Maze,
};
use image::{Rgb, RgbImage};

use super::FileError;
use crate::settings::Rgb as PathColor;

const WALL: Rgb<u8> = Rgb([0, 0, 0]);
const PASSAGE: Rgb<u8> = Rgb([255, 255, 255]);

/// Draws every cell as a `cell_size` square, the path (if any) on top of the walls.
pub fn render(maze: &Maze, cell_size: u32, path_color: PathColor) -> RgbImage {
    let grid = maze.grid();
    let width = grid.col_count() as u32 * cell_size;
    let height = grid.row_count() as u32 * cell_size;
    let mut img = RgbImage::from_pixel(width, height, PASSAGE);

    for pos in grid.iter_pos().filter(|&pos| grid[pos] == Tile::Wall) {
        fill_cell(&mut img, pos, cell_size, WALL);
    }

    let PathColor(r, g, b) = path_color;
    for &pos in maze.path().unwrap_or_default() {
        fill_cell(&mut img, pos, cell_size, Rgb([r, g, b]));
    }

    img
}

fn fill_cell(img: &mut RgbImage, pos: Pos, cell_size: u32, color: Rgb<u8>) {
    let (x0, y0) = (pos.1 as u32 * cell_size, pos.0 as u32 * cell_size);
    for y in y0..y0 + cell_size {
        for x in x0..x0 + cell_size {
            img.put_pixel(x, y, color);
        }
    }
}

pub fn export(
    maze: &Maze,
    path: &Path,
    cell_size: u32,
    path_color: PathColor,
) -> Result<(), FileError> {
    render(maze, cell_size, path_color)
        .save(path)
        .map_err(|source| FileError::Image {
            path: path.to_path_buf(),
            source,
        })?;
    log::info!("Saved maze image to {:?}", path);
    Ok(())
}

/// Reads the top-left pixel of every `cell_size` block, black is a wall and white a passage.
pub fn quantize(img: &RgbImage, cell_size: u32) -> Result<Grid, FileError> {
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 || cell_size == 0 {
        return Err(FileError::TooSmall {
            width,
            height,
            cell_size,
        });
    }

    let rows = (0..height)
        .step_by(cell_size as usize)
        .map(|y| {
            (0..width)
                .step_by(cell_size as usize)
                .map(|x| {
                    let pixel = *img.get_pixel(x, y);
                    if pixel == WALL {
                        Ok(Tile::Wall)
                    } else if pixel == PASSAGE {
                        Ok(Tile::Passage)
                    } else {
                        Err(FileError::Pixel { x, y, rgb: pixel.0 })
                    }
                })
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;

    // every row samples the same columns
    Grid::from_rows(rows).ok_or(FileError::TooSmall {
        width,
        height,
        cell_size,
    })
}

pub fn import(path: &Path, cell_size: u32) -> Result<Grid, FileError> {
    let img = image::open(path)
        .map_err(|source| match source {
            image::ImageError::IoError(source) => FileError::Io {
                path: path.to_path_buf(),
                source,
            },
            source => FileError::Image {
                path: path.to_path_buf(),
                source,
            },
        })?
        .to_rgb8();

    let grid = quantize(&img, cell_size)?;
    log::info!(
        "Loaded {}x{} maze from {:?}",
        grid.row_count(),
        grid.col_count(),
        path
    );
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use std::{env, fs, process};

    use super::*;
    use crate::settings::DEFAULT_PATH_COLOR;

    #[test]
    fn render_colors() {
        let mut maze = Maze::new(1, 3, 63);
        maze.generate();
        maze.solve(Pos(1, 1), Pos(1, 3)).unwrap();

        let img = render(&maze, 4, DEFAULT_PATH_COLOR);
        assert_eq!(img.dimensions(), (20, 12));
        assert_eq!(*img.get_pixel(0, 0), WALL);
        assert_eq!(*img.get_pixel(19, 11), WALL);
        assert_eq!(*img.get_pixel(5, 5), Rgb([0, 255, 0]));
        assert_eq!(*img.get_pixel(15, 7), Rgb([0, 255, 0]));
    }

    #[test]
    fn quantize_unsolved() {
        let mut maze = Maze::new(6, 4, 9);
        maze.generate();

        let img = render(&maze, 5, DEFAULT_PATH_COLOR);
        assert_eq!(&quantize(&img, 5).unwrap(), maze.grid());
    }

    #[test]
    fn unknown_color() {
        let mut img = RgbImage::from_pixel(4, 4, PASSAGE);
        img.put_pixel(2, 0, Rgb([10, 20, 30]));

        assert!(matches!(
            quantize(&img, 2),
            Err(FileError::Pixel {
                x: 2,
                y: 0,
                rgb: [10, 20, 30]
            })
        ));
        // only sampled pixels matter
        img.put_pixel(2, 0, PASSAGE);
        img.put_pixel(3, 3, Rgb([10, 20, 30]));
        assert!(quantize(&img, 2).is_ok());
    }

    #[test]
    fn file_round_trip() {
        let path = env::temp_dir().join(format!("primaze-image-{}.png", process::id()));
        let mut maze = Maze::new(5, 5, 63);
        maze.generate();

        export(&maze, &path, 3, DEFAULT_PATH_COLOR).unwrap();
        assert_eq!(&import(&path, 3).unwrap(), maze.grid());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn missing_file() {
        let path = env::temp_dir().join("primaze-definitely-missing.png");
        assert!(matches!(import(&path, 20), Err(FileError::Io { .. })));
    }
}
