use std::{
    fmt,
    ops::{Add, AddAssign, Sub, SubAssign},
};

/// Grid coordinate in `(row, col)` order.
///
/// Components are signed so that positions outside of a grid (including negative ones coming from
/// user input) can be represented and rejected by bounds checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Pos(pub i32, pub i32);

impl Pos {
    pub const ZERO: Pos = Pos(0, 0);

    pub const UP: Pos = Pos(-1, 0);
    pub const DOWN: Pos = Pos(1, 0);
    pub const LEFT: Pos = Pos(0, -1);
    pub const RIGHT: Pos = Pos(0, 1);

    /// Axis-aligned offsets in the order the solver expands them.
    pub const ORTHOGONAL: [Pos; 4] = [Self::UP, Self::DOWN, Self::LEFT, Self::RIGHT];

    /// Iterates over all positions in `from..to`, row by row.
    pub fn iter_fill(from: Pos, to: Pos) -> impl Iterator<Item = Pos> {
        (from.0..to.0).flat_map(move |row| (from.1..to.1).map(move |col| Pos(row, col)))
    }

    pub fn abs_sum(self) -> i32 {
        self.0.abs() + self.1.abs()
    }

    /// `|row - other.row| + |col - other.col|`
    pub fn manhattan(self, other: Pos) -> i32 {
        (self - other).abs_sum()
    }

    /// Both coordinates are odd, the cell is a node of the maze lattice.
    pub fn is_odd_odd(self) -> bool {
        self.0 % 2 != 0 && self.1 % 2 != 0
    }

    /// Both coordinates are even, the cell is a permanent pillar.
    pub fn is_even_even(self) -> bool {
        self.0 % 2 == 0 && self.1 % 2 == 0
    }
}

impl Add for Pos {
    type Output = Pos;

    fn add(self, other: Pos) -> Pos {
        Pos(self.0 + other.0, self.1 + other.1)
    }
}

impl Sub for Pos {
    type Output = Pos;

    fn sub(self, other: Pos) -> Pos {
        Pos(self.0 - other.0, self.1 - other.1)
    }
}

impl AddAssign for Pos {
    fn add_assign(&mut self, other: Pos) {
        self.0 += other.0;
        self.1 += other.1;
    }
}

impl SubAssign for Pos {
    fn sub_assign(&mut self, other: Pos) {
        self.0 -= other.0;
        self.1 -= other.1;
    }
}

impl From<(i32, i32)> for Pos {
    fn from(tuple: (i32, i32)) -> Self {
        Pos(tuple.0, tuple.1)
    }
}

impl From<Pos> for (i32, i32) {
    fn from(val: Pos) -> Self {
        (val.0, val.1)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

#[cfg(test)]
mod tests {
    use super::Pos;

    #[test]
    fn manhattan() {
        assert_eq!(Pos(1, 1).manhattan(Pos(3, 3)), 4);
        assert_eq!(Pos(3, 3).manhattan(Pos(1, 1)), 4);
        assert_eq!(Pos(2, 5).manhattan(Pos(2, 5)), 0);
        assert_eq!(Pos(-1, 0).manhattan(Pos(1, 0)), 2);
    }

    #[test]
    fn lattice_parity() {
        assert!(Pos(1, 3).is_odd_odd());
        assert!(!Pos(1, 2).is_odd_odd());
        assert!(Pos(0, 4).is_even_even());
        assert!(!Pos(1, 4).is_even_even());
    }

    #[test]
    fn iter_fill_is_row_major() {
        let all: Vec<_> = Pos::iter_fill(Pos::ZERO, Pos(2, 3)).collect();
        assert_eq!(
            all,
            vec![Pos(0, 0), Pos(0, 1), Pos(0, 2), Pos(1, 0), Pos(1, 1), Pos(1, 2)]
        );
    }
}
