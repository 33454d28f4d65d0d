//! Session state owned by the game controller
//!
//! # Categories
//!
//! ## Turn Management
//! - [`TurnStateContext`] - Side to move, move number, and turn phase
//! - [`TurnPhase`] - Idle / PieceSelected / Validating
//!
//! ## Player Interaction
//! - [`Selection`] - Currently selected square and its legal destinations
//! - [`PromotionChooser`] - Collaborator choosing the promotion kind
//!
//! ## Game History
//! - [`MoveHistory`] - Committed moves in order
//! - [`CapturedPieces`] - Material tracking and advantage calculation

pub mod captured;
pub mod history;
pub mod promotion;
pub mod selection;
pub mod turn;


// Re-export all resources for convenience
pub use captured::*;
pub use history::*;
pub use promotion::*;
pub use selection::*;
pub use turn::*;
