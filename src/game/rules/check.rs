//! Attack detection and check testing
//!
//! Answers "is this square attacked by that color" directly from attack
//! patterns rather than by replaying the movement rules, and simulates moves
//! to see whether they would expose the mover's king.
//!
//! ## Algorithm
//!
//! Attacks are found by looking outward from the target square: the two
//! pawn-attack squares, the eight knight squares, the eight neighbours, then
//! each orthogonal and diagonal ray until the first occupant. Turn order and
//! self-check are ignored.

use super::board_state::BoardState;
use crate::game::components::{PieceColor, PieceType, Square};
use crate::game::error::{GameError, GameResult};
use tracing::debug;

/// Check state of a king after a committed move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckStatus {
    #[default]
    Safe,
    Check,
    /// The king could not be located; see [`GameError::IntegrityFailure`]
    KingMissing,
}

impl CheckStatus {
    pub fn is_check(self) -> bool {
        self == CheckStatus::Check
    }
}

/// Knight movement offsets
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// All 8 adjacent squares
const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

const ORTHOGONAL_RAYS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const DIAGONAL_RAYS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Locate the king of `color`
///
/// Returns the first one found scanning row-major. More than one king per
/// color is not guarded against.
pub fn find_king(board_state: &BoardState, color: PieceColor) -> Option<Square> {
    board_state
        .pieces(color)
        .find(|(_, piece)| piece.piece_type() == PieceType::King)
        .map(|(square, _)| square)
}

/// Check if a square is under attack by pieces of `by_color`
///
/// # Examples
///
/// ```
/// use chess_referee::game::components::{Piece, PieceColor, PieceType, Square};
/// use chess_referee::game::rules::{check::is_square_attacked, BoardState};
///
/// let mut board = BoardState::empty();
/// let rook = Square::new(4, 0).unwrap();
/// board.set(rook, Some(Piece::new(PieceType::Rook, PieceColor::White)));
///
/// assert!(is_square_attacked(&board, Square::new(4, 7).unwrap(), PieceColor::White));
/// assert!(!is_square_attacked(&board, Square::new(3, 7).unwrap(), PieceColor::White));
/// ```
pub fn is_square_attacked(board_state: &BoardState, square: Square, by_color: PieceColor) -> bool {
    let holds = |target: Option<Square>, kinds: &[PieceType]| {
        target
            .and_then(|sq| board_state.get(sq))
            .is_some_and(|piece| piece.color() == by_color && kinds.contains(&piece.piece_type()))
    };

    // A pawn attacks one row ahead of itself, so look one row behind the target
    let pawn_row = -by_color.forward();
    if holds(square.offset(pawn_row, -1), &[PieceType::Pawn])
        || holds(square.offset(pawn_row, 1), &[PieceType::Pawn])
    {
        return true;
    }

    if KNIGHT_OFFSETS
        .iter()
        .any(|&(dr, dc)| holds(square.offset(dr, dc), &[PieceType::Knight]))
    {
        return true;
    }

    if KING_OFFSETS
        .iter()
        .any(|&(dr, dc)| holds(square.offset(dr, dc), &[PieceType::King]))
    {
        return true;
    }

    let slider_on_ray = |(dr, dc): (i8, i8), kinds: &[PieceType]| {
        let mut current = square;
        while let Some(next) = current.offset(dr, dc) {
            if let Some(piece) = board_state.get(next) {
                return piece.color() == by_color && kinds.contains(&piece.piece_type());
            }
            current = next;
        }
        false
    };

    ORTHOGONAL_RAYS
        .iter()
        .any(|&ray| slider_on_ray(ray, &[PieceType::Rook, PieceType::Queen]))
        || DIAGONAL_RAYS
            .iter()
            .any(|&ray| slider_on_ray(ray, &[PieceType::Bishop, PieceType::Queen]))
}

/// Whether the king of `color` is currently attacked
///
/// # Errors
///
/// [`GameError::IntegrityFailure`] if `color` has no king on the board.
pub fn king_in_check(board_state: &BoardState, color: PieceColor) -> GameResult<bool> {
    let king = find_king(board_state, color).ok_or(GameError::IntegrityFailure { color })?;
    Ok(is_square_attacked(board_state, king, color.opposite()))
}

/// Simulate `from -> to` and report whether the mover's king ends up attacked
///
/// The board is mutated for the duration of the call and restored exactly
/// before returning, whatever the outcome. An empty origin returns `false`
/// without touching the board. A mover with no king cannot expose one, so
/// that also returns `false`.
pub fn would_leave_in_check(board_state: &mut BoardState, from: Square, to: Square) -> bool {
    let Some(mover) = board_state.get(from) else {
        return false;
    };
    let color = mover.color();

    let captured = board_state.set(to, Some(mover));
    board_state.set(from, None);

    let exposed = match find_king(board_state, color) {
        Some(king) => is_square_attacked(board_state, king, color.opposite()),
        None => {
            debug!("[RULES] No {color} king on the board; skipping self-check test");
            false
        }
    };

    // Restore in reverse order so from == to round-trips too
    board_state.set(from, Some(mover));
    board_state.set(to, captured);
    exposed
}
