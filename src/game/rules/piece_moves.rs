//! Chess piece movement rules
//!
//! Contains the rules for how each chess piece can move.
//! Pure functions with no side effects - easy to test.
//!
//! These are shape rules only: they know nothing about whose turn it is or
//! whether the move exposes the mover's king. See [`super::check`] for that.

use super::board_state::BoardState;
use crate::game::components::{Piece, PieceColor, PieceType, Square};
use crate::game::error::MoveRejection;

pub use crate::game::components::is_inside_board;

/// Check a move against the piece's movement pattern
///
/// Rejects with [`MoveRejection::KingCaptureForbidden`] when the destination
/// holds the opposing king, whatever the shape. Every other failure is
/// [`MoveRejection::IllegalShape`].
pub fn check_move_shape(
    piece: Piece,
    from: Square,
    to: Square,
    board_state: &BoardState,
) -> Result<(), MoveRejection> {
    // Can't move to the same square
    if from == to {
        return Err(MoveRejection::IllegalShape);
    }

    if let Some(target) = board_state.get(to) {
        // Can't capture your own pieces
        if target.color() == piece.color() {
            return Err(MoveRejection::IllegalShape);
        }
        if target.piece_type() == PieceType::King {
            return Err(MoveRejection::KingCaptureForbidden);
        }
    }

    let legal = match piece.piece_type() {
        PieceType::Pawn => is_valid_pawn_move(from, to, piece.color(), board_state),
        PieceType::Knight => is_valid_knight_move(from, to),
        PieceType::Bishop => is_valid_bishop_move(from, to, board_state),
        PieceType::Rook => is_valid_rook_move(from, to, board_state),
        PieceType::Queen => is_valid_queen_move(from, to, board_state),
        PieceType::King => is_valid_king_move(from, to),
    };

    if legal {
        Ok(())
    } else {
        Err(MoveRejection::IllegalShape)
    }
}

/// Check if a move is shape-legal for a given piece
pub fn is_valid_move(piece: Piece, from: Square, to: Square, board_state: &BoardState) -> bool {
    check_move_shape(piece, from, to, board_state).is_ok()
}

/// Get all shape-legal destinations for a piece
pub fn get_possible_moves(piece: Piece, position: Square, board_state: &BoardState) -> Vec<Square> {
    Square::all()
        .filter(|&to| is_valid_move(piece, position, to, board_state))
        .collect()
}

/// Row and column deltas from `from` to `to`
fn deltas(from: Square, to: Square) -> (i8, i8) {
    (
        to.row() as i8 - from.row() as i8,
        to.col() as i8 - from.col() as i8,
    )
}

fn is_valid_pawn_move(from: Square, to: Square, color: PieceColor, board_state: &BoardState) -> bool {
    let direction = color.forward();
    let (d_row, d_col) = deltas(from, to);

    // Forward move
    if d_col == 0 && d_row == direction {
        return board_state.is_empty(to);
    }

    // Double move from starting rank
    if d_col == 0 && d_row == 2 * direction && from.row() == color.pawn_start_row() {
        return match from.offset(direction, 0) {
            Some(intermediate) => board_state.is_empty(intermediate) && board_state.is_empty(to),
            None => false,
        };
    }

    // Capture diagonally
    if d_col.abs() == 1 && d_row == direction {
        return board_state
            .get_piece_color(to)
            .is_some_and(|target| target != color);
    }

    false
}

fn is_valid_knight_move(from: Square, to: Square) -> bool {
    let (d_row, d_col) = deltas(from, to);
    let (d_row, d_col) = (d_row.abs(), d_col.abs());
    (d_row == 2 && d_col == 1) || (d_row == 1 && d_col == 2)
}

fn is_valid_bishop_move(from: Square, to: Square, board_state: &BoardState) -> bool {
    let (d_row, d_col) = deltas(from, to);

    // Must move diagonally
    if d_row.abs() != d_col.abs() {
        return false;
    }

    is_path_clear(from, to, board_state)
}

fn is_valid_rook_move(from: Square, to: Square, board_state: &BoardState) -> bool {
    // Must move horizontally or vertically
    if from.row() != to.row() && from.col() != to.col() {
        return false;
    }

    is_path_clear(from, to, board_state)
}

fn is_valid_queen_move(from: Square, to: Square, board_state: &BoardState) -> bool {
    // Queen moves like rook or bishop
    is_valid_rook_move(from, to, board_state) || is_valid_bishop_move(from, to, board_state)
}

fn is_valid_king_move(from: Square, to: Square) -> bool {
    let (d_row, d_col) = deltas(from, to);
    d_row.abs() <= 1 && d_col.abs() <= 1
}

/// Whether every square strictly between `from` and `to` is empty
///
/// Only straight and diagonal lines are walkable; any other pair returns
/// `false`. Endpoints are not inspected.
pub fn is_path_clear(from: Square, to: Square, board_state: &BoardState) -> bool {
    let (d_row, d_col) = deltas(from, to);
    let aligned = d_row == 0 || d_col == 0 || d_row.abs() == d_col.abs();
    if !aligned || from == to {
        return false;
    }

    let step = (d_row.signum(), d_col.signum());
    let mut current = from;
    loop {
        current = match current.offset(step.0, step.1) {
            Some(next) => next,
            None => return false,
        };
        if current == to {
            return true;
        }
        if !board_state.is_empty(current) {
            return false;
        }
    }
}
