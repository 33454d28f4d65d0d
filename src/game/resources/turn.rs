//! Turn tracking and turn flow state
//!
//! Manages whose turn it is, the move counter, and where the controller is
//! within the current click sequence.
//!
//! # Turn Flow
//!
//! ```text
//! Idle --click own piece--> PieceSelected --click target--> Validating
//!   ^                                                          |
//!   +------------------- committed or rejected ----------------+
//! ```
//!
//! The side to move only changes on a committed move.

use crate::game::components::PieceColor;
use tracing::error;

/// Where the controller is within the current turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TurnPhase {
    /// No selection; waiting for a click on an own piece
    ///
    /// Valid transitions: → PieceSelected
    #[default]
    Idle,

    /// A piece of the side to move is selected
    ///
    /// Valid transitions: → Validating, → Idle (cancel)
    PieceSelected,

    /// Shape and self-check tests are running for a target square
    ///
    /// Valid transitions: → Idle (committed or rejected)
    Validating,
}

impl TurnPhase {
    /// Check if this state allows a fresh selection
    pub fn accepts_selection(&self) -> bool {
        matches!(self, TurnPhase::Idle)
    }
}

/// Whose turn it is, what phase of the turn we're in, and the move number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnStateContext {
    /// Whose turn is it?
    pub current_player: PieceColor,

    /// What phase of the turn are we in?
    pub phase: TurnPhase,

    /// Move number (increments after both players move)
    pub move_number: u32,
}

impl Default for TurnStateContext {
    fn default() -> Self {
        Self {
            current_player: PieceColor::White,
            phase: TurnPhase::Idle,
            move_number: 1,
        }
    }
}

impl TurnStateContext {
    /// Start a context with `color` to move
    pub fn starting_with(color: PieceColor) -> Self {
        Self {
            current_player: color,
            ..Self::default()
        }
    }

    /// Transition to the next turn phase
    ///
    /// Invalid transitions indicate a logic error in the controller. They
    /// panic in debug builds and are logged and allowed in release builds.
    pub fn transition_to(&mut self, next_phase: TurnPhase) {
        let valid = matches!(
            (self.phase, next_phase),
            (TurnPhase::Idle, TurnPhase::PieceSelected)
                | (TurnPhase::PieceSelected, TurnPhase::Validating)
                | (TurnPhase::PieceSelected, TurnPhase::Idle)
                | (TurnPhase::Validating, TurnPhase::Idle)
        );

        if !valid {
            error!(
                "[TURN] Invalid turn state transition: {:?} -> {:?}",
                self.phase, next_phase
            );
            #[cfg(debug_assertions)]
            {
                panic!(
                    "Invalid turn state transition: {:?} -> {:?}",
                    self.phase, next_phase
                );
            }
        }

        self.phase = next_phase;
    }

    /// Switch to the next player's turn
    ///
    /// Increments the move number when Black hands back to White.
    pub fn switch_turn(&mut self) {
        self.current_player = match self.current_player {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => {
                self.move_number += 1;
                PieceColor::White
            }
        };
    }
}
