//! Board state representation
//!
//! A raw, trusted 8x8 store. Each square owns at most one piece; overwriting
//! or clearing a square drops whatever was there. No validation happens at
//! this layer.

use crate::game::components::{Piece, PieceColor, PieceType, Square, BOARD_SIZE};
use std::fmt;

/// Grid of optional pieces, indexed `[row][col]`
pub type BoardSnapshot = [[Option<Piece>; BOARD_SIZE as usize]; BOARD_SIZE as usize];

/// Back rank order, column 0 to 7
const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// Represents the state of the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    squares: BoardSnapshot,
}

impl Default for BoardState {
    fn default() -> Self {
        Self::initial()
    }
}

impl BoardState {
    /// Board with no pieces
    pub fn empty() -> Self {
        Self {
            squares: [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize],
        }
    }

    /// Board in the standard starting layout
    pub fn initial() -> Self {
        let mut board = Self::empty();
        board.reset_to_initial_setup();
        board
    }

    pub fn get(&self, square: Square) -> Option<Piece> {
        self.squares[square.row() as usize][square.col() as usize]
    }

    /// Store `piece` on `square`, returning whatever was there before
    pub fn set(&mut self, square: Square, piece: Option<Piece>) -> Option<Piece> {
        std::mem::replace(
            &mut self.squares[square.row() as usize][square.col() as usize],
            piece,
        )
    }

    pub fn clear(&mut self) {
        self.squares = [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize];
    }

    /// Replace everything with the standard starting layout
    ///
    /// Black occupies rows 0-1, White rows 6-7.
    pub fn reset_to_initial_setup(&mut self) {
        self.clear();
        for color in [PieceColor::White, PieceColor::Black] {
            for (col, &kind) in BACK_RANK.iter().enumerate() {
                self.squares[color.home_row() as usize][col] = Some(Piece::new(kind, color));
                self.squares[color.pawn_start_row() as usize][col] =
                    Some(Piece::new(PieceType::Pawn, color));
            }
        }
    }

    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    pub fn get_piece_color(&self, square: Square) -> Option<PieceColor> {
        self.get(square).map(|piece| piece.color())
    }

    /// Every piece of `color` with its square, row-major
    pub fn pieces(&self, color: PieceColor) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| {
            self.get(square)
                .filter(|piece| piece.color() == color)
                .map(|piece| (square, piece))
        })
    }

    /// Copy of the raw grid for the presentation layer
    pub fn snapshot(&self) -> BoardSnapshot {
        self.squares
    }
}

impl fmt::Display for BoardState {
    /// Text diagram: uppercase White, lowercase Black, `.` for empty
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for col in 0..BOARD_SIZE {
            write!(f, " {col}")?;
        }
        writeln!(f)?;
        for (row, rank) in self.squares.iter().enumerate() {
            write!(f, "{row} ")?;
            for square in rank {
                let symbol = square.map(|piece| piece.symbol()).unwrap_or('.');
                write!(f, " {symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
