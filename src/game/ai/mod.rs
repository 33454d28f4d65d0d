//! Automated opponent
//!
//! # Architecture
//!
//! - [`GameMode`]: whether an automated side is playing, and which color
//! - [`MoveSelector`]: legal move enumeration, capture scoring, random tie-break
//! - [`MoveOracle`]: optional outside collaborator consulted first
//!
//! The board is the source of truth. Oracle suggestions are never trusted:
//! they must match a move from [`generate_legal_moves`], which runs the same
//! shape rules and self-check simulation as human clicks.

pub mod oracle;
pub mod resource;
pub mod selector;


// Re-export for convenience
pub use oracle::{parse_move_response, serialize_board, MoveOracle, OracleMove, ProcessOracle};
pub use resource::GameMode;
pub use selector::{generate_legal_moves, MoveSelector, MoveSource, ScoredMove, SelectedMove};
