//! Automated move selection
//!
//! Enumerates legal moves with the same shape rules and self-check
//! simulation used for human clicks, scores captures by material, and either
//! accepts a re-validated oracle suggestion or picks uniformly among the
//! best-scoring moves.

use super::oracle::{serialize_board, MoveOracle};
use crate::game::components::{PieceColor, Square};
use crate::game::rules::{is_valid_move, would_leave_in_check, BoardState};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use tracing::{debug, info, warn};

/// A legal move with its capture score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScoredMove {
    pub from: Square,
    pub to: Square,
    /// Value of the captured piece, 0 for quiet moves
    pub score: u32,
}

/// Where a chosen move came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveSource {
    Oracle,
    Heuristic,
}

/// The move the selector settled on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectedMove {
    pub from: Square,
    pub to: Square,
    pub source: MoveSource,
}

/// Every legal move for `color`
///
/// A move is legal when it passes the piece's shape rule and does not leave
/// `color`'s king attacked. The board is borrowed mutably for the self-check
/// simulation and is unchanged on return.
pub fn generate_legal_moves(board_state: &mut BoardState, color: PieceColor) -> Vec<ScoredMove> {
    let own: Vec<_> = board_state.pieces(color).collect();
    let mut moves = Vec::new();

    for (from, piece) in own {
        for to in Square::all() {
            if !is_valid_move(piece, from, to, board_state) {
                continue;
            }
            if would_leave_in_check(board_state, from, to) {
                continue;
            }
            let score = board_state.get(to).map_or(0, |captured| captured.piece_type().value());
            moves.push(ScoredMove { from, to, score });
        }
    }

    moves
}

/// Picks moves for the automated side
pub struct MoveSelector {
    oracle: Option<Box<dyn MoveOracle>>,
    rng: StdRng,
}

impl Default for MoveSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MoveSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MoveSelector")
            .field("has_oracle", &self.oracle.is_some())
            .finish()
    }
}

impl MoveSelector {
    /// Selector without an oracle, seeded from the OS
    pub fn new() -> Self {
        Self {
            oracle: None,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Selector with a fixed seed, for reproducible tie-breaks
    pub fn seeded(seed: u64) -> Self {
        Self {
            oracle: None,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn with_oracle(mut self, oracle: impl MoveOracle + 'static) -> Self {
        self.oracle = Some(Box::new(oracle));
        self
    }

    pub fn set_oracle(&mut self, oracle: Option<Box<dyn MoveOracle>>) {
        self.oracle = oracle;
    }

    pub fn has_oracle(&self) -> bool {
        self.oracle.is_some()
    }

    /// Choose a move for `color`, or `None` if it has no legal move
    ///
    /// An oracle suggestion is used only if it names a move in the legal
    /// list; otherwise the best capture score wins, ties broken at random.
    ///
    /// # Examples
    ///
    /// ```
    /// use chess_referee::game::ai::{MoveSelector, MoveSource};
    /// use chess_referee::game::components::{Piece, PieceColor, PieceType, Square};
    /// use chess_referee::game::rules::BoardState;
    ///
    /// let mut board = BoardState::empty();
    /// let rook = Square::new(4, 0).unwrap();
    /// let queen = Square::new(4, 6).unwrap();
    /// board.set(rook, Some(Piece::new(PieceType::Rook, PieceColor::Black)));
    /// board.set(queen, Some(Piece::new(PieceType::Queen, PieceColor::White)));
    ///
    /// let mut selector = MoveSelector::seeded(7);
    /// let chosen = selector.choose_move(&mut board, PieceColor::Black).unwrap();
    /// assert_eq!((chosen.from, chosen.to), (rook, queen));
    /// assert_eq!(chosen.source, MoveSource::Heuristic);
    /// ```
    pub fn choose_move(&mut self, board_state: &mut BoardState, color: PieceColor) -> Option<SelectedMove> {
        let legal = generate_legal_moves(board_state, color);
        if legal.is_empty() {
            info!("[AI] {color} has no legal move");
            return None;
        }

        if let Some(selected) = self.consult_oracle(board_state, &legal) {
            return Some(selected);
        }

        let best_score = legal.iter().map(|mv| mv.score).max()?;
        let best: Vec<_> = legal.iter().filter(|mv| mv.score == best_score).collect();
        let chosen = best.choose(&mut self.rng)?;
        debug!(
            "[AI] Heuristic picked {} -> {} (score {best_score}, {} tied of {} legal)",
            chosen.from,
            chosen.to,
            best.len(),
            legal.len()
        );
        Some(SelectedMove {
            from: chosen.from,
            to: chosen.to,
            source: MoveSource::Heuristic,
        })
    }

    fn consult_oracle(&mut self, board_state: &BoardState, legal: &[ScoredMove]) -> Option<SelectedMove> {
        let oracle = self.oracle.as_mut()?;
        let suggestion = oracle.request_move(&serialize_board(board_state))?;

        let Some((from, to)) = suggestion.squares() else {
            warn!("[AI] Oracle suggested off-board move {suggestion:?}; falling back");
            return None;
        };
        if !legal.iter().any(|mv| mv.from == from && mv.to == to) {
            warn!("[AI] Oracle suggested illegal move {from} -> {to}; falling back");
            return None;
        }

        info!("[AI] Using oracle move {from} -> {to}");
        Some(SelectedMove {
            from,
            to,
            source: MoveSource::Oracle,
        })
    }
}
