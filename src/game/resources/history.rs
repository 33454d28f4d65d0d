//! Move history
//!
//! Chronological record of committed moves, for the presentation layer to
//! show the last move or a move list.

use crate::game::components::{PieceColor, PieceType, Square};
use crate::game::rules::CheckStatus;

/// One committed move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub piece_type: PieceType,
    pub piece_color: PieceColor,
    pub from: Square,
    pub to: Square,
    pub captured: Option<PieceType>,
    pub promoted_to: Option<PieceType>,
    /// Check state of the opponent right after the move
    pub check: CheckStatus,
}

/// All moves since the game started
#[derive(Debug, Default, Clone)]
pub struct MoveHistory {
    pub moves: Vec<MoveRecord>,
}

impl MoveHistory {
    pub fn add_move(&mut self, record: MoveRecord) {
        self.moves.push(record);
    }

    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.moves.last()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn clear(&mut self) {
        self.moves.clear();
    }
}
