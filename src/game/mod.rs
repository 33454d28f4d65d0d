//! Chess game logic
//!
//! Pure game logic with no rendering or windowing coupling. Everything here is
//! driven synchronously: one click or one automated turn is processed to
//! completion before the next is accepted.
//!
//! # Module Organization
//!
//! - `components` - Data model (Piece, PieceType, PieceColor, Square)
//! - `rules` - Board storage, per-piece movement rules, check detection
//! - `resources` - Session state (turn, selection, promotion, history, captures)
//! - `controller` - The engine object tying board, turn and selection together
//! - `ai` - Automated opponent: legal move enumeration, scoring, oracle consultation
//!
//! # Control Flow
//!
//! 1. A click is reported to [`controller::GameController::select_or_attempt_move`]
//! 2. The first click on an own piece records a selection
//! 3. The second click runs the shape rule, then the self-check simulation
//! 4. A committed move triggers promotion, flips the turn and reports check

pub mod ai;
pub mod components;
pub mod controller;
pub mod error;
pub mod resources;
pub mod rules;

pub use controller::GameController;
pub use error::{GameError, GameResult, MoveRejection};
