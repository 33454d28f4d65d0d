//! Board coordinates
//!
//! A [`Square`] is always on the board. Raw coordinates from clicks or the
//! oracle go through [`Square::new`], which is where bounds are enforced.

use std::fmt;

/// Board edge length
pub const BOARD_SIZE: u8 = 8;

/// A (row, column) pair, each in 0..8
///
/// Row 0 is Black's back rank, row 7 is White's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Build a square from raw coordinates, `None` if off the board
    pub fn new(row: i32, col: i32) -> Option<Self> {
        if is_inside_board(row, col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    pub fn row(self) -> u8 {
        self.row
    }

    pub fn col(self) -> u8 {
        self.col
    }

    /// Square reached by stepping `(d_row, d_col)`, `None` if off the board
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        Self::new(
            self.row as i32 + d_row as i32,
            self.col as i32 + d_col as i32,
        )
    }

    /// All 64 squares, row-major
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square { row, col }))
    }
}

/// Both coordinates in 0..8
pub fn is_inside_board(row: i32, col: i32) -> bool {
    (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col)
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
