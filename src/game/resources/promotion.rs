//! Pawn promotion
//!
//! When a pawn lands on the farthest row from its start it must be promoted.
//! The choice of kind is delegated to a [`PromotionChooser`]; a chooser that
//! gives no answer, or an answer that is not a legal promotion target, yields
//! a queen.

use crate::game::components::{PieceColor, PieceType};
use tracing::warn;

/// Collaborator that picks the kind a pawn is promoted to
pub trait PromotionChooser {
    /// `None` means no answer; the controller falls back to a queen
    fn choose_promotion_kind(&mut self, color: PieceColor) -> Option<PieceType>;
}

/// Chooser that always answers Queen
#[derive(Debug, Default, Clone, Copy)]
pub struct AlwaysQueen;

impl PromotionChooser for AlwaysQueen {
    fn choose_promotion_kind(&mut self, _color: PieceColor) -> Option<PieceType> {
        Some(PieceType::Queen)
    }
}

/// Chooser that always answers the same kind
#[derive(Debug, Clone, Copy)]
pub struct FixedPromotion(pub PieceType);

impl PromotionChooser for FixedPromotion {
    fn choose_promotion_kind(&mut self, _color: PieceColor) -> Option<PieceType> {
        Some(self.0)
    }
}

/// Check if a pawn move results in promotion
pub fn is_promotion_move(piece_type: PieceType, color: PieceColor, target_row: u8) -> bool {
    piece_type == PieceType::Pawn && target_row == color.promotion_row()
}

/// Ask `chooser` for a kind, falling back to Queen
pub fn resolve_promotion_kind(chooser: &mut dyn PromotionChooser, color: PieceColor) -> PieceType {
    match chooser.choose_promotion_kind(color) {
        Some(kind) if kind.is_promotion_target() => kind,
        Some(kind) => {
            warn!("[PROMOTION] Chooser answered {kind:?}, which is not a promotion target; using queen");
            PieceType::Queen
        }
        None => PieceType::Queen,
    }
}
