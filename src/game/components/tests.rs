//! Component module unit tests
//!
//! Covers the data model: color helpers, kind values, promotion rules on
//! `Piece`, and the bounds enforced by `Square`.

use super::*;

// ============================================================================
// PieceColor Tests
// ============================================================================

#[test]
fn test_color_opposite() {
    assert_eq!(PieceColor::White.opposite(), PieceColor::Black);
    assert_eq!(PieceColor::Black.opposite(), PieceColor::White);
}

#[test]
fn test_color_pawn_geometry() {
    //! White pawns start on row 6 and walk toward row 0; Black mirrors that.
    assert_eq!(PieceColor::White.forward(), -1);
    assert_eq!(PieceColor::Black.forward(), 1);
    assert_eq!(PieceColor::White.pawn_start_row(), 6);
    assert_eq!(PieceColor::Black.pawn_start_row(), 1);
    assert_eq!(PieceColor::White.promotion_row(), 0);
    assert_eq!(PieceColor::Black.promotion_row(), 7);
}

// ============================================================================
// PieceType Tests
// ============================================================================

#[test]
fn test_piece_values() {
    assert_eq!(PieceType::Pawn.value(), 1);
    assert_eq!(PieceType::Knight.value(), 3);
    assert_eq!(PieceType::Bishop.value(), 3);
    assert_eq!(PieceType::Rook.value(), 5);
    assert_eq!(PieceType::Queen.value(), 9);
    assert_eq!(PieceType::King.value(), 0);
}

#[test]
fn test_promotion_targets() {
    assert!(PieceType::Queen.is_promotion_target());
    assert!(PieceType::Knight.is_promotion_target());
    assert!(!PieceType::Pawn.is_promotion_target());
    assert!(!PieceType::King.is_promotion_target());
}

// ============================================================================
// Piece Tests
// ============================================================================

#[test]
fn test_pawn_promotes_once() {
    //! A promoted piece is no longer a pawn, so a second promotion is refused.
    let mut piece = Piece::new(PieceType::Pawn, PieceColor::White);

    assert!(piece.promote(PieceType::Knight));
    assert_eq!(piece.piece_type(), PieceType::Knight);
    assert_eq!(piece.color(), PieceColor::White);

    assert!(!piece.promote(PieceType::Queen));
    assert_eq!(piece.piece_type(), PieceType::Knight);
}

#[test]
fn test_promotion_to_king_refused() {
    let mut piece = Piece::new(PieceType::Pawn, PieceColor::Black);
    assert!(!piece.promote(PieceType::King));
    assert_eq!(piece.piece_type(), PieceType::Pawn);
}

#[test]
fn test_piece_display_and_symbol() {
    let white_queen = Piece::new(PieceType::Queen, PieceColor::White);
    let black_knight = Piece::new(PieceType::Knight, PieceColor::Black);

    assert_eq!(white_queen.to_string(), "white-queen");
    assert_eq!(black_knight.to_string(), "black-knight");
    assert_eq!(white_queen.symbol(), 'Q');
    assert_eq!(black_knight.symbol(), 'n');
}

// ============================================================================
// Square Tests
// ============================================================================

#[test]
fn test_square_bounds() {
    assert!(Square::new(0, 0).is_some());
    assert!(Square::new(7, 7).is_some());
    assert!(Square::new(-1, 0).is_none());
    assert!(Square::new(0, 8).is_none());
    assert!(Square::new(9, 9).is_none());
}

#[test]
fn test_square_offset_stays_on_board() {
    let corner = Square::new(0, 0).unwrap();
    assert_eq!(corner.offset(1, 1), Square::new(1, 1));
    assert_eq!(corner.offset(-1, 0), None);
    assert_eq!(corner.offset(0, -1), None);
}

#[test]
fn test_square_all_covers_board() {
    let all: Vec<_> = Square::all().collect();
    assert_eq!(all.len(), 64);
    assert_eq!(all[0], Square::new(0, 0).unwrap());
    assert_eq!(all[63], Square::new(7, 7).unwrap());
}
