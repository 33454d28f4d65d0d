//! Selection state for tracking the selected piece

use crate::game::components::Square;

/// Currently selected square and its legal destinations
///
/// Only ever holds a square occupied by a piece of the side to move.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Selection {
    pub selected_position: Option<Square>,
    pub possible_moves: Vec<Square>,
}

impl Selection {
    pub fn select(&mut self, square: Square, possible_moves: Vec<Square>) {
        self.selected_position = Some(square);
        self.possible_moves = possible_moves;
    }

    pub fn clear(&mut self) {
        self.selected_position = None;
        self.possible_moves.clear();
    }

    pub fn is_selected(&self) -> bool {
        self.selected_position.is_some()
    }
}
