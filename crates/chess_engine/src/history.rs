//! Move history
//!
//! Maintains the chronological record of moves played from a starting board. The log is
//! owned by whoever drives the game (the engine never keeps one of its own) and is the
//! source of truth for undo:
//!
//! - **Undo**: [`crate::Player::unmake_move`] rebuilds the previous position with
//!   [`MoveLog::replay`] instead of inverting the last move
//! - **Review**: any earlier position can be recovered the same way
//!
//! # Integration
//!
//! Push a move after [`crate::Player::make_move`] reports [`crate::MoveStatus::Done`]; pop it
//! after a successful undo.
//!
//! ```
//! use chess_engine::{Board, MoveFactory, MoveLog, board_utils::square_at};
//!
//! let mut log = MoveLog::new();
//! let board = Board::create_standard_board();
//! let mv = MoveFactory::create_move(&board, square_at("e2").unwrap(), square_at("e4").unwrap())
//!     .unwrap();
//! let next = board.current_player().make_move(&mv).into_board();
//! log.push(mv);
//! assert_eq!(log.replay_all().unwrap(), next);
//! ```

use tracing::debug;

use crate::board::Board;
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::moves::{Move, MoveFactory};

/// Ordered record of executed moves and the board they started from
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveLog {
    start: Board,
    moves: Vec<Move>,
}

impl Default for MoveLog {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveLog {
    /// Empty log starting from the standard position
    pub fn new() -> Self {
        Self::starting_from(Board::create_standard_board())
    }

    /// Empty log starting from a custom position
    pub fn starting_from(start: Board) -> Self {
        MoveLog {
            start,
            moves: Vec::new(),
        }
    }

    pub fn start(&self) -> &Board {
        &self.start
    }

    /// Index 0 is the first ply played from [`MoveLog::start`]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    pub fn pop(&mut self) -> Option<Move> {
        self.moves.pop()
    }

    pub fn last(&self) -> Option<&Move> {
        self.moves.last()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn clear(&mut self) {
        self.moves.clear();
    }

    /// Rebuild the position after the first `plies` recorded moves
    ///
    /// Each recorded move is recreated by [`MoveFactory`] from its squares (and promotion
    /// choice) against the replayed board and applied through the side to move, so every
    /// derived field (castling rights, en-passant target) is recomputed rather than copied.
    /// `plies` beyond the log length replays everything.
    ///
    /// # Errors
    ///
    /// [`ChessEngineError::ReplayFailed`] when a recorded move no longer applies, which
    /// means the log was not produced from its own starting board.
    pub fn replay(&self, plies: usize) -> ChessEngineResult<Board> {
        debug!(plies, recorded = self.moves.len(), "replaying move history");
        let mut board = self.start.clone();
        for (ply, recorded) in self.moves.iter().take(plies).enumerate() {
            let from = recorded.current_square();
            let to = recorded.destination();
            let recreated = match recorded.promotion() {
                Some(kind) => MoveFactory::create_promotion_move(&board, from, to, kind),
                None => MoveFactory::create_move(&board, from, to),
            };
            let mv = recreated.ok_or_else(|| ChessEngineError::ReplayFailed {
                ply,
                message: format!("no move matches {recorded}"),
            })?;
            let transition = board.current_player().make_move(&mv);
            if !transition.is_done() {
                return Err(ChessEngineError::ReplayFailed {
                    ply,
                    message: format!("{mv} rejected with {:?}", transition.status()),
                });
            }
            board = transition.into_board();
        }
        Ok(board)
    }

    /// Rebuild the position after every recorded move
    pub fn replay_all(&self) -> ChessEngineResult<Board> {
        self.replay(self.moves.len())
    }
}
