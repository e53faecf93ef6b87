//! Plain text maze format.
//!
//! One line per row, one digit per cell: `0` for a passage and `1` for a wall. Every line,
//! including the last one, ends with a newline.

use crate::{
    error::MazeError,
    grid::{Grid, Tile},
};

pub fn grid_to_text(grid: &Grid) -> String {
    let mut text = String::with_capacity(grid.row_count() * (grid.col_count() + 1));
    for row in grid.rows() {
        text.extend(row.iter().map(|tile| match tile {
            Tile::Passage => '0',
            Tile::Wall => '1',
        }));
        text.push('\n');
    }
    text
}

/// Parses the text format.
///
/// Trailing whitespace (including `\r`) on each line and empty lines at the end are ignored.
/// Anything else that isn't `0` or `1`, rows of different lengths or an empty input are errors.
pub fn grid_from_text(text: &str) -> Result<Grid, MazeError> {
    let lines: Vec<&str> = text.lines().map(str::trim_end).collect();
    let used = lines
        .iter()
        .rposition(|line| !line.is_empty())
        .map_or(0, |last| last + 1);

    let mut rows: Vec<Vec<Tile>> = Vec::with_capacity(used);
    for (i, line) in lines[..used].iter().enumerate() {
        let row = line
            .chars()
            .enumerate()
            .map(|(j, c)| match c {
                '0' => Ok(Tile::Passage),
                '1' => Ok(Tile::Wall),
                found => Err(MazeError::Format {
                    line: i + 1,
                    column: j + 1,
                    found,
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        if let Some(first) = rows.first() {
            if first.len() != row.len() {
                return Err(MazeError::Ragged {
                    line: i + 1,
                    expected: first.len(),
                    found: row.len(),
                });
            }
        }

        rows.push(row);
    }

    if rows.first().map_or(true, Vec::is_empty) {
        return Err(MazeError::Empty);
    }

    Grid::from_rows(rows).ok_or(MazeError::Empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{algorithms::generate_seeded, dims::Pos};

    #[test]
    fn export_format() {
        let grid = generate_seeded(1, 1, 63);
        assert_eq!(grid_to_text(&grid), "111\n101\n111\n");
    }

    #[test]
    fn round_trip() {
        let grid = generate_seeded(17, 9, 3);
        let text = grid_to_text(&grid);

        assert_eq!(text.lines().count(), 19);
        assert!(text.lines().all(|line| line.len() == 11));
        assert_eq!(grid_from_text(&text), Ok(grid));
    }

    #[test]
    fn lenient_line_endings() {
        let grid = grid_from_text("111\r\n101\r\n111\r\n\n\n").unwrap();
        assert_eq!(grid.size(), Pos(3, 3));
        assert!(grid.is_passage(Pos(1, 1)));

        let grid = grid_from_text("11\n11").unwrap();
        assert_eq!(grid.size(), Pos(2, 2));
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(
            grid_from_text("111\n1x1\n111\n"),
            Err(MazeError::Format {
                line: 2,
                column: 2,
                found: 'x'
            })
        );
        assert_eq!(
            grid_from_text("111\n10\n111\n"),
            Err(MazeError::Ragged {
                line: 2,
                expected: 3,
                found: 2
            })
        );
        assert_eq!(grid_from_text(""), Err(MazeError::Empty));
        assert_eq!(grid_from_text("\n\n"), Err(MazeError::Empty));
        assert!(grid_from_text("111\n\n111\n").is_err());
    }
}
