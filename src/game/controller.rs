//! Game controller
//!
//! [`GameController`] is the engine object a presentation layer talks to. It
//! owns the board, the turn context and the current selection, and turns
//! square clicks into selections, rejections or committed moves.
//!
//! # Click Handling
//!
//! 1. With nothing selected, a click on a piece of the side to move selects it
//!    and records its legal destinations. Any other click is
//!    [`MoveRejection::InvalidSelection`].
//! 2. With a piece selected, the next click is a move attempt. It runs the
//!    shape rule, then the self-check simulation, and either commits or
//!    rejects. Both outcomes clear the selection.
//!
//! Automated turns skip the click sequence but share the same commit path.

use crate::game::ai::MoveSelector;
use crate::game::components::{Piece, PieceColor, PieceType, Square};
use crate::game::error::MoveRejection;
use crate::game::resources::{
    is_promotion_move, resolve_promotion_kind, AlwaysQueen, CapturedPieces, MoveHistory,
    MoveRecord, PromotionChooser, Selection, TurnPhase, TurnStateContext,
};
use crate::game::rules::{
    check_move_shape, get_possible_moves, king_in_check, would_leave_in_check, BoardSnapshot,
    BoardState, CheckStatus,
};
use std::fmt;
use tracing::{debug, error, info};

/// Result of reporting one clicked square
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// A piece of the side to move is now selected
    Selected(Square),
    /// Nothing changed on the board; the selection is cleared
    Rejected(MoveRejection),
    /// A move was applied and the turn passed
    Committed(MoveReport),
}

impl MoveOutcome {
    pub fn is_committed(&self) -> bool {
        matches!(self, MoveOutcome::Committed(_))
    }
}

/// What a committed move did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    pub from: Square,
    pub to: Square,
    /// The moved piece as it stands after promotion
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub promoted_to: Option<PieceType>,
    /// Check state of the side now to move
    pub check: CheckStatus,
}

/// Board, turn and selection for one game
pub struct GameController {
    board: BoardState,
    turn: TurnStateContext,
    selection: Selection,
    promotion: Box<dyn PromotionChooser>,
    history: MoveHistory,
    captured: CapturedPieces,
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for GameController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameController")
            .field("turn", &self.turn)
            .field("selection", &self.selection)
            .field("moves", &self.history.len())
            .finish_non_exhaustive()
    }
}

impl GameController {
    /// Standard starting position, White to move, promotions to queen
    pub fn new() -> Self {
        Self::from_board(BoardState::initial(), PieceColor::White)
    }

    /// Start from an arbitrary position
    pub fn from_board(board: BoardState, side_to_move: PieceColor) -> Self {
        Self {
            board,
            turn: TurnStateContext::starting_with(side_to_move),
            selection: Selection::default(),
            promotion: Box::new(AlwaysQueen),
            history: MoveHistory::default(),
            captured: CapturedPieces::default(),
        }
    }

    pub fn with_promotion_chooser(mut self, chooser: impl PromotionChooser + 'static) -> Self {
        self.promotion = Box::new(chooser);
        self
    }

    pub fn set_promotion_chooser(&mut self, chooser: Box<dyn PromotionChooser>) {
        self.promotion = chooser;
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn board_snapshot(&self) -> BoardSnapshot {
        self.board.snapshot()
    }

    pub fn side_to_move(&self) -> PieceColor {
        self.turn.current_player
    }

    pub fn turn(&self) -> &TurnStateContext {
        &self.turn
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    pub fn captured(&self) -> &CapturedPieces {
        &self.captured
    }

    /// Back to the starting position with White to move
    ///
    /// History and captures are cleared; the promotion chooser is kept.
    pub fn reset(&mut self) {
        self.board.reset_to_initial_setup();
        self.turn = TurnStateContext::default();
        self.selection.clear();
        self.history.clear();
        self.captured.clear();
        info!("[TURN] New game");
    }

    /// Drop the current selection, if any
    pub fn cancel_selection(&mut self) {
        if self.turn.phase == TurnPhase::PieceSelected {
            self.turn.transition_to(TurnPhase::Idle);
        }
        self.selection.clear();
    }

    /// Report a clicked square
    ///
    /// Coordinates outside the board are rejected without touching the
    /// board or turn.
    ///
    /// # Arguments
    ///
    /// * `row`, `col` - Clicked square; values outside 0..8 are allowed and rejected
    ///
    /// # Examples
    ///
    /// ```
    /// use chess_referee::game::components::PieceColor;
    /// use chess_referee::game::MoveRejection;
    /// use chess_referee::{GameController, MoveOutcome};
    ///
    /// let mut controller = GameController::new();
    /// assert!(matches!(controller.select_or_attempt_move(6, 4), MoveOutcome::Selected(_)));
    /// assert!(controller.select_or_attempt_move(4, 4).is_committed());
    /// assert_eq!(controller.side_to_move(), PieceColor::Black);
    ///
    /// // White pieces are not Black's to select
    /// assert_eq!(
    ///     controller.select_or_attempt_move(7, 0),
    ///     MoveOutcome::Rejected(MoveRejection::InvalidSelection)
    /// );
    /// ```
    pub fn select_or_attempt_move(&mut self, row: i32, col: i32) -> MoveOutcome {
        match self.selection.selected_position {
            None => self.try_select(row, col),
            Some(from) => self.attempt_move(from, row, col),
        }
    }

    fn try_select(&mut self, row: i32, col: i32) -> MoveOutcome {
        let side = self.turn.current_player;
        let Some(square) = Square::new(row, col) else {
            debug!("[TURN] Click ({row}, {col}) is off the board");
            return MoveOutcome::Rejected(MoveRejection::InvalidSelection);
        };
        let Some(piece) = self.board.get(square).filter(|piece| piece.color() == side) else {
            debug!("[TURN] No {side} piece on {square}");
            return MoveOutcome::Rejected(MoveRejection::InvalidSelection);
        };

        let destinations = self.legal_destinations(piece, square);
        debug!(
            "[TURN] Selected {piece} on {square} ({} legal destinations)",
            destinations.len()
        );
        self.selection.select(square, destinations);
        self.turn.transition_to(TurnPhase::PieceSelected);
        MoveOutcome::Selected(square)
    }

    fn attempt_move(&mut self, from: Square, row: i32, col: i32) -> MoveOutcome {
        let Some(to) = Square::new(row, col) else {
            return self.reject(MoveRejection::IllegalShape);
        };
        let Some(piece) = self.board.get(from) else {
            return self.reject(MoveRejection::InvalidSelection);
        };

        self.turn.transition_to(TurnPhase::Validating);

        if let Err(rejection) = check_move_shape(piece, from, to, &self.board) {
            return self.reject(rejection);
        }
        if would_leave_in_check(&mut self.board, from, to) {
            return self.reject(MoveRejection::SelfCheck);
        }

        let report = self.commit(from, to, piece);
        self.selection.clear();
        self.turn.transition_to(TurnPhase::Idle);
        MoveOutcome::Committed(report)
    }

    fn reject(&mut self, rejection: MoveRejection) -> MoveOutcome {
        debug!("[TURN] Rejected: {rejection}");
        self.selection.clear();
        self.turn.transition_to(TurnPhase::Idle);
        MoveOutcome::Rejected(rejection)
    }

    /// Destinations that pass the shape rule and keep the king safe
    fn legal_destinations(&mut self, piece: Piece, from: Square) -> Vec<Square> {
        get_possible_moves(piece, from, &self.board)
            .into_iter()
            .filter(|&to| !would_leave_in_check(&mut self.board, from, to))
            .collect()
    }

    /// Let `selector` play for the side to move
    ///
    /// Returns `None` without changing anything when that side has no legal
    /// move. A pending selection is discarded first.
    pub fn play_automated_turn(&mut self, selector: &mut MoveSelector) -> Option<MoveReport> {
        self.cancel_selection();
        let side = self.turn.current_player;
        let chosen = selector.choose_move(&mut self.board, side)?;
        let piece = self.board.get(chosen.from)?;
        debug!("[AI] {side} plays {} -> {} ({:?})", chosen.from, chosen.to, chosen.source);
        Some(self.commit(chosen.from, chosen.to, piece))
    }

    /// Apply a validated move: capture, promotion, turn flip, check report
    fn commit(&mut self, from: Square, to: Square, mut piece: Piece) -> MoveReport {
        let color = piece.color();

        self.board.set(from, None);
        let captured = self.board.set(to, Some(piece));
        if let Some(taken) = captured {
            self.captured.add_capture(taken.color(), taken.piece_type());
        }

        let promoted_to = if is_promotion_move(piece.piece_type(), color, to.row()) {
            let kind = resolve_promotion_kind(&mut *self.promotion, color);
            piece.promote(kind);
            self.board.set(to, Some(piece));
            info!("[PROMOTION] {color} pawn on {to} promoted to {}", kind.name());
            Some(kind)
        } else {
            None
        };

        self.turn.switch_turn();
        let next = self.turn.current_player;
        let check = match king_in_check(&self.board, next) {
            Ok(true) => CheckStatus::Check,
            Ok(false) => CheckStatus::Safe,
            Err(err) => {
                error!("[TURN] {err}");
                CheckStatus::KingMissing
            }
        };

        self.history.add_move(MoveRecord {
            piece_type: piece.piece_type(),
            piece_color: color,
            from,
            to,
            captured: captured.map(|taken| taken.piece_type()),
            promoted_to,
            check,
        });

        info!(
            "[TURN] {piece} {from} -> {to}{}{} | {next} to move (move #{})",
            captured.map_or(String::new(), |taken| format!(" takes {taken}")),
            if check.is_check() { ", check" } else { "" },
            self.turn.move_number
        );

        MoveReport {
            from,
            to,
            piece,
            captured,
            promoted_to,
            check,
        }
    }
}
