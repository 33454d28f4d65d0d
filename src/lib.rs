//! Chess rules engine for click-driven play against a human or an automated opponent.
//!
//! The crate owns board state, move legality, check detection, the turn and
//! promotion state machine, and automated move selection. Rendering and input
//! pumping live outside; the boundary they talk to is
//! [`game::controller::GameController`].

pub mod config;
pub mod game;

pub use config::EngineSettings;
pub use game::controller::{GameController, MoveOutcome, MoveReport};
pub use game::rules::CheckStatus;
