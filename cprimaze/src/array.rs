use std::ops;

use crate::dims::Pos;

/// Rectangular, row-major 2D array.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Array2D<T> {
    buf: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Array2D<T> {
    /// Builds the array from a list of rows.
    ///
    /// Returns `None` if the rows don't all have the same length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Option<Self> {
        let row_count = rows.len();
        let cols = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != cols) {
            return None;
        }

        Some(Self {
            buf: rows.into_iter().flatten().collect(),
            rows: row_count,
            cols,
        })
    }

    pub fn size(&self) -> Pos {
        Pos(self.rows as i32, self.cols as i32)
    }

    pub fn row_count(&self) -> usize {
        self.rows
    }

    pub fn col_count(&self) -> usize {
        self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        self.dim_to_idx(pos).is_some()
    }

    pub fn dim_to_idx(&self, pos: Pos) -> Option<usize> {
        let Pos(row, col) = pos;
        if row < 0 || col < 0 {
            return None;
        }

        let (row, col) = (row as usize, col as usize);
        if row >= self.rows || col >= self.cols {
            return None;
        }

        Some(row * self.cols + col)
    }

    pub fn idx_to_dim(&self, idx: usize) -> Option<Pos> {
        if idx >= self.buf.len() {
            return None;
        }

        Some(Pos((idx / self.cols) as i32, (idx % self.cols) as i32))
    }

    pub fn get(&self, pos: Pos) -> Option<&T> {
        self.dim_to_idx(pos).and_then(|i| self.buf.get(i))
    }

    pub fn get_mut(&mut self, pos: Pos) -> Option<&mut T> {
        self.dim_to_idx(pos).and_then(|i| self.buf.get_mut(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buf.iter()
    }

    pub fn iter_pos(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.buf.len()).filter_map(move |i| self.idx_to_dim(i))
    }

    /// Rows as slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // `chunks` panics on 0, an array with no columns has no rows to show either
        self.buf.chunks(self.cols.max(1))
    }

    /// In-bounds positions of the 3x3 window centered at `pos`, row by row.
    ///
    /// The window is clipped to the array. Returns `None` when `pos` itself is out of bounds.
    pub fn window(&self, pos: Pos) -> Option<impl Iterator<Item = Pos>> {
        if !self.in_bounds(pos) {
            return None;
        }

        let from = Pos((pos.0 - 1).max(0), (pos.1 - 1).max(0));
        let to = Pos(
            (pos.0 + 2).min(self.rows as i32),
            (pos.1 + 2).min(self.cols as i32),
        );
        Some(Pos::iter_fill(from, to))
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Array2D<U> {
        Array2D {
            buf: self.buf.into_iter().map(f).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }
}

impl<T: Clone> Array2D<T> {
    pub fn new(item: T, rows: usize, cols: usize) -> Self {
        Self {
            buf: vec![item; rows * cols],
            rows,
            cols,
        }
    }
}

impl<T> ops::Index<Pos> for Array2D<T> {
    type Output = T;

    fn index(&self, index: Pos) -> &Self::Output {
        self.get(index)
            .unwrap_or_else(|| panic!("Index out of bounds: {}", index))
    }
}

impl<T> ops::IndexMut<Pos> for Array2D<T> {
    fn index_mut(&mut self, index: Pos) -> &mut Self::Output {
        self.get_mut(index)
            .unwrap_or_else(|| panic!("Index out of bounds: {}", index))
    }
}
