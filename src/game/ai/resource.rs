//! Game mode selection
//!
//! Decides whether an automated opponent is playing and which color it takes.
//!
//! # Game Modes
//!
//! - **VsHuman**: Two human players (local hot-seat)
//! - **VsAI**: One human player vs the automated opponent

use crate::game::components::PieceColor;

/// Who controls each side
///
/// # Examples
///
/// ```
/// use chess_referee::game::ai::GameMode;
/// use chess_referee::game::components::PieceColor;
///
/// let mode = GameMode::VsAI { ai_color: PieceColor::Black };
/// assert!(mode.is_ai_turn(PieceColor::Black));
/// assert!(!mode.is_ai_turn(PieceColor::White));
/// assert!(!GameMode::VsHuman.is_ai_turn(PieceColor::Black));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Both sides are driven by clicks
    VsHuman,

    /// The specified color is controlled by the automated opponent
    VsAI { ai_color: PieceColor },
}

impl Default for GameMode {
    /// The automated opponent plays Black
    fn default() -> Self {
        GameMode::VsAI {
            ai_color: PieceColor::Black,
        }
    }
}

impl GameMode {
    /// The automated opponent's color, if one is playing
    pub fn ai_color(self) -> Option<PieceColor> {
        match self {
            GameMode::VsHuman => None,
            GameMode::VsAI { ai_color } => Some(ai_color),
        }
    }

    /// Whether `side_to_move` belongs to the automated opponent
    pub fn is_ai_turn(self, side_to_move: PieceColor) -> bool {
        self.ai_color() == Some(side_to_move)
    }
}

impl From<Option<PieceColor>> for GameMode {
    fn from(ai_color: Option<PieceColor>) -> Self {
        match ai_color {
            Some(ai_color) => GameMode::VsAI { ai_color },
            None => GameMode::VsHuman,
        }
    }
}
