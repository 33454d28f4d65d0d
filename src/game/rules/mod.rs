//! Chess rules module - Pure game logic
//!
//! Implements move validation, check detection and board storage as pure
//! functions over a [`BoardState`], so every rule can be unit tested without
//! a controller.
//!
//! # Module Structure
//!
//! - `board_state` - Raw 8x8 storage with the standard starting layout
//! - `piece_moves` - Movement rules for each piece type (pawn, knight, bishop, rook, queen, king)
//! - `check` - Attack detection, king lookup and self-check simulation
//!
//! Castling and en passant are not part of this rule set.

pub mod board_state;
pub mod check;
pub mod piece_moves;


// Re-export commonly used items
pub use board_state::{BoardSnapshot, BoardState};
pub use check::{find_king, is_square_attacked, king_in_check, would_leave_in_check, CheckStatus};
pub use piece_moves::{check_move_shape, get_possible_moves, is_path_clear, is_valid_move};
