//! Captured pieces tracking
//!
//! Tracks pieces captured by each player and calculates material advantage.
//!
//! # Material Values
//!
//! Pawn 1, Knight/Bishop 3, Rook 5, Queen 9, King 0 (cannot be captured).
//! Positive advantage means White is ahead, negative means Black is ahead.

use crate::game::components::{PieceColor, PieceType};

/// Pieces taken by each side
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CapturedPieces {
    /// Pieces captured by white (black pieces taken)
    pub white_captured: Vec<PieceType>,
    /// Pieces captured by black (white pieces taken)
    pub black_captured: Vec<PieceType>,
}

impl CapturedPieces {
    /// Record a capture of a `captured_piece_color` piece
    pub fn add_capture(&mut self, captured_piece_color: PieceColor, piece_type: PieceType) {
        match captured_piece_color {
            // If white piece was captured, black gets credit
            PieceColor::White => self.black_captured.push(piece_type),
            // If black piece was captured, white gets credit
            PieceColor::Black => self.white_captured.push(piece_type),
        }
    }

    /// Material difference in pawn units, White minus Black
    pub fn material_advantage(&self) -> i32 {
        let total = |pieces: &[PieceType]| pieces.iter().map(|p| p.value() as i32).sum::<i32>();
        total(&self.white_captured) - total(&self.black_captured)
    }

    /// Clear all captured pieces (for new game)
    pub fn clear(&mut self) {
        self.white_captured.clear();
        self.black_captured.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captured_pieces_default() {
        //! Verifies that captured pieces starts empty
        let captured = CapturedPieces::default();
        assert!(captured.white_captured.is_empty());
        assert!(captured.black_captured.is_empty());
        assert_eq!(captured.material_advantage(), 0);
    }

    #[test]
    fn test_add_capture_credits_the_capturer() {
        let mut captured = CapturedPieces::default();
        captured.add_capture(PieceColor::Black, PieceType::Queen);
        captured.add_capture(PieceColor::White, PieceType::Rook);

        assert_eq!(captured.white_captured, vec![PieceType::Queen]);
        assert_eq!(captured.black_captured, vec![PieceType::Rook]);
    }

    #[test]
    fn test_material_advantage() {
        let mut captured = CapturedPieces::default();
        captured.add_capture(PieceColor::Black, PieceType::Queen); // White takes Queen (9)
        captured.add_capture(PieceColor::White, PieceType::Pawn); // Black takes Pawn (1)
        assert_eq!(captured.material_advantage(), 8);

        captured.add_capture(PieceColor::White, PieceType::Rook);
        captured.add_capture(PieceColor::White, PieceType::Bishop);
        assert_eq!(captured.material_advantage(), 0);
    }

    #[test]
    fn test_clear() {
        let mut captured = CapturedPieces::default();
        captured.add_capture(PieceColor::Black, PieceType::Knight);
        captured.clear();
        assert_eq!(captured, CapturedPieces::default());
    }
}
