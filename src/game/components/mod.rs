//! Chess data model
//!
//! Pure data structures: pieces, colors, kinds and board coordinates.

pub mod piece;
pub mod square;

#[cfg(test)]
mod tests;

// Re-export all components for convenience
pub use piece::*;
pub use square::*;
