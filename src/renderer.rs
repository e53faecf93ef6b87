use colored::Colorize as _;

use cprimaze::{dims::Pos, grid::Tile, Maze};

use crate::settings::Settings;

/// Glyphs used to draw a maze as text, each cell takes one glyph.
#[derive(Debug, Clone)]
pub struct ConsoleStyle {
    pub wall: String,
    pub passage: String,
    pub path: String,
    pub colored: bool,
}

impl ConsoleStyle {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            wall: settings.get_wall_glyph().to_string(),
            passage: settings.get_passage_glyph().to_string(),
            path: settings.get_path_glyph().to_string(),
            colored: settings.get_colored_output(),
        }
    }
}

impl Default for ConsoleStyle {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

/// Draws the maze, one line per row. Path cells are only marked when `with_path` is set.
pub fn render(maze: &Maze, style: &ConsoleStyle, with_path: bool) -> String {
    let path_glyph = if style.colored {
        style.path.green().bold().to_string()
    } else {
        style.path.clone()
    };

    let mut out = String::new();
    for (row, tiles) in maze.grid().rows().enumerate() {
        for (col, tile) in tiles.iter().enumerate() {
            let pos = Pos(row as i32, col as i32);
            let glyph = if with_path && maze.is_on_path(pos) {
                &path_glyph
            } else {
                match tile {
                    Tile::Wall => &style.wall,
                    Tile::Passage => &style.passage,
                }
            };
            out.push_str(glyph);
        }
        out.push('\n');
    }
    out
}

/// Prints the maze and, when it has been solved, the maze with its path below it.
pub fn print(maze: &Maze, style: &ConsoleStyle) {
    println!("{}", render(maze, style, false));
    if maze.path().is_some() {
        print!("{}", render(maze, style, true));
    }
}
