//! Error types for game module
//!
//! Two families live here. [`MoveRejection`] is the ordinary, user-facing
//! reason a click did not produce a move; it is returned as a value and never
//! treated as a failure. [`GameError`] covers conditions that should not occur
//! during valid play.

use crate::game::components::PieceColor;

/// Why a selection or move attempt was rejected
///
/// Every rejection leaves the board and turn untouched and clears the
/// selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveRejection {
    /// Click on an empty square or an opponent piece while expecting a selection
    #[error("Invalid selection: no piece of the side to move on that square")]
    InvalidSelection,

    /// Destination violates the movement pattern, the path is blocked,
    /// or the destination holds a piece of the mover's color
    #[error("Illegal move for this piece")]
    IllegalShape,

    /// Destination holds the opposing king
    #[error("Kings cannot be captured")]
    KingCaptureForbidden,

    /// Move would leave the mover's own king attacked
    #[error("Move would leave your king in check")]
    SelfCheck,
}

/// Errors that can occur in game logic
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// No king of the given color is on the board
    #[error("Integrity failure: no {color:?} king on the board")]
    IntegrityFailure { color: PieceColor },
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;
