//! Per-side view over a board
//!
//! A [`Player`] is recomputed from a [`Board`] whenever it is asked for. It gathers the
//! pseudo-legal moves of every piece of its side plus the castling moves, and keeps only
//! those after which its own king is not attacked. Check, checkmate and stalemate follow
//! directly from that set and from whether the king is attacked right now.
//!
//! Moves are applied all-or-nothing: [`Player::make_move`] either returns a transition to a
//! freshly built board or a rejection carrying the unchanged board.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::board::Board;
use crate::history::MoveLog;
use crate::move_gen::{castle_moves, is_square_attacked, pseudo_legal_moves};
use crate::moves::Move;
use crate::transition::{MoveStatus, MoveTransition};
use crate::types::*;

/// Status of a game from the point of view of the side to move
///
/// Recomputed after every accepted move. `Checkmate` and `Stalemate` are terminal; the
/// engine itself does not refuse further moves, callers do.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    InProgress,
    Check,
    Checkmate,
    Stalemate,
}

impl GameState {
    pub fn is_terminal(self) -> bool {
        matches!(self, GameState::Checkmate | GameState::Stalemate)
    }
}

/// One side's legal moves and king status on a board
#[derive(Clone, Debug)]
pub struct Player<'a> {
    board: &'a Board,
    color: Color,
    legal_moves: Vec<Move>,
    in_check: bool,
}

impl<'a> Player<'a> {
    pub(crate) fn new(board: &'a Board, color: Color) -> Self {
        let in_check = is_square_attacked(board, board.king_square(color), color.opposite());
        let legal_moves = candidate_moves_with_castling(board, color)
            .into_iter()
            .filter(|mv| leaves_king_safe(board, mv))
            .collect();
        Player {
            board,
            color,
            legal_moves,
            in_check,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn board(&self) -> &'a Board {
        self.board
    }

    /// The opposing side's view of the same board
    pub fn opponent(&self) -> Player<'a> {
        Player::new(self.board, self.color.opposite())
    }

    pub fn legal_moves(&self) -> &[Move] {
        &self.legal_moves
    }

    /// Legal moves of the piece standing on `square`
    pub fn legal_moves_from(&self, square: Square) -> Vec<Move> {
        self.legal_moves
            .iter()
            .filter(|mv| mv.current_square() == square)
            .copied()
            .collect()
    }

    pub fn active_pieces(&self) -> Vec<Piece> {
        self.board.pieces(self.color).collect()
    }

    pub fn king_square(&self) -> Square {
        self.board.king_square(self.color)
    }

    pub fn is_in_check(&self) -> bool {
        self.in_check
    }

    pub fn is_in_check_mate(&self) -> bool {
        self.in_check && self.legal_moves.is_empty()
    }

    pub fn is_in_stale_mate(&self) -> bool {
        !self.in_check && self.legal_moves.is_empty()
    }

    pub fn is_castled(&self) -> bool {
        self.board.has_castled(self.color)
    }

    pub fn game_state(&self) -> GameState {
        match (self.in_check, self.legal_moves.is_empty()) {
            (true, true) => GameState::Checkmate,
            (false, true) => GameState::Stalemate,
            (true, false) => GameState::Check,
            (false, false) => GameState::InProgress,
        }
    }

    pub fn is_move_legal(&self, mv: &Move) -> bool {
        self.find_legal(mv).is_some()
    }

    /// Apply `mv` if it is one of this side's legal moves
    ///
    /// Returns [`MoveStatus::LeavesPlayerInCheck`] for a pseudo-legal move that would expose
    /// the king, and [`MoveStatus::IllegalMove`] for anything else that is not legal here
    /// (wrong side to move, a piece that is not on the board, a shape no piece can play).
    /// The board is untouched unless the status is [`MoveStatus::Done`].
    pub fn make_move(&self, mv: &Move) -> MoveTransition {
        if self.color != self.board.side_to_move()
            || self.board.piece(mv.current_square()) != Some(mv.moved_piece())
        {
            debug!(%mv, color = %self.color, "rejected move for a piece not in play");
            return MoveTransition::rejected(self.board, *mv, MoveStatus::IllegalMove);
        }

        if self.find_legal(mv).is_none() {
            let status = if candidate_moves_with_castling(self.board, self.color)
                .iter()
                .any(|candidate| candidate.same_transition(mv))
            {
                MoveStatus::LeavesPlayerInCheck
            } else {
                MoveStatus::IllegalMove
            };
            debug!(%mv, color = %self.color, ?status, "rejected move");
            return MoveTransition::rejected(self.board, *mv, status);
        }

        match mv.execute(self.board) {
            Ok(next) => MoveTransition::done(self.board, next, *mv),
            Err(err) => {
                warn!(%mv, error = %err, "legal move failed to execute");
                MoveTransition::rejected(self.board, *mv, MoveStatus::IllegalMove)
            }
        }
    }

    /// Take back `mv`, which must be the last move recorded in `log`
    ///
    /// The previous position is rebuilt by replaying every earlier move of the log from its
    /// starting board rather than by inverting `mv`, so castling rights and the en-passant
    /// target come out exactly as they were. Costs one replay of the history.
    ///
    /// Returns [`MoveStatus::IllegalMove`] when `mv` is not the log's last move or when
    /// this player's board is not where the log ends.
    pub fn unmake_move(&self, mv: &Move, log: &MoveLog) -> MoveTransition {
        if log.last() != Some(mv) {
            debug!(%mv, "undo requested for a move that is not the last one played");
            return MoveTransition::rejected(self.board, *mv, MoveStatus::IllegalMove);
        }
        if !self.is_log_end(mv, log) {
            debug!(%mv, "undo requested on a board the history does not lead to");
            return MoveTransition::rejected(self.board, *mv, MoveStatus::IllegalMove);
        }
        match log.replay(log.len() - 1) {
            Ok(previous) => MoveTransition::done(self.board, previous, *mv),
            Err(err) => {
                warn!(%mv, error = %err, "history replay failed during undo");
                MoveTransition::rejected(self.board, *mv, MoveStatus::IllegalMove)
            }
        }
    }

    /// Side to move matches the log's ply parity and the last mover stands on its
    /// destination
    fn is_log_end(&self, last: &Move, log: &MoveLog) -> bool {
        let start_side = log.start().side_to_move();
        let expected_side = if log.len() % 2 == 0 {
            start_side
        } else {
            start_side.opposite()
        };
        let mover = last.moved_piece().color;
        self.board.side_to_move() == expected_side
            && self.board.piece(last.destination()).map(|p| p.color) == Some(mover)
    }

    fn find_legal(&self, mv: &Move) -> Option<&Move> {
        self.legal_moves.iter().find(|legal| legal.same_transition(mv))
    }
}

fn candidate_moves_with_castling(board: &Board, color: Color) -> Vec<Move> {
    let mut moves = pseudo_legal_moves(board, color);
    moves.extend(castle_moves(board, color));
    moves
}

/// Execute on a scratch board and check the mover's king afterwards
fn leaves_king_safe(board: &Board, mv: &Move) -> bool {
    let color = mv.moved_piece().color;
    match mv.execute(board) {
        Ok(next) => !is_square_attacked(&next, next.king_square(color), color.opposite()),
        Err(err) => {
            trace!(%mv, error = %err, "dropping candidate that breaks the board");
            false
        }
    }
}
