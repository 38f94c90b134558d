//! # Chess Rules Engine
//!
//! Maintains chess positions as immutable [`Board`] values, generates the legal moves of
//! each side, applies moves to produce new boards, and detects check, checkmate and
//! stalemate. There is no search or evaluation here; this crate answers "what may be
//! played" and "what happens when it is".
//!
//! ## Data Flow
//!
//! 1. A [`Board`] owns its pieces ([`Piece`] values, one per occupied square)
//! 2. Each piece generates candidate [`Move`]s against the board ([`move_gen`])
//! 3. A [`Player`] filters candidates down to legal moves (its own king stays safe) and
//!    adds castling
//! 4. [`Player::make_move`] executes a chosen move, producing a new board wrapped in a
//!    [`MoveTransition`]
//!
//! Boards are never mutated, so they can be cached, shared across threads, or thrown away
//! freely. The only mutable state in a game (the active board and its [`MoveLog`]) belongs
//! to the caller.
//!
//! ## Error Model
//!
//! User mistakes are ordinary values: [`MoveFactory::create_move`] returns `None` for a
//! pair of squares that is not a move, and [`MoveStatus`] reports moves that are illegal or
//! would leave the king in check. [`ChessEngineError`] is reserved for structural faults
//! such as assembling a board without a king.
//!
//! ## Coordinates
//!
//! Squares are indices 0..64 with 0 = a8 and 63 = h1 (row 0 is Black's back rank). See
//! [`board_utils::square_at`] and [`board_utils::square_name`] for algebraic names.
//!
//! ```
//! use chess_engine::{Board, MoveFactory, MoveStatus, board_utils::square_at};
//!
//! let board = Board::create_standard_board();
//! let player = board.current_player();
//! assert_eq!(player.legal_moves().len(), 20);
//!
//! let mv = MoveFactory::create_move(&board, square_at("g1").unwrap(), square_at("f3").unwrap())
//!     .expect("knight move");
//! let transition = player.make_move(&mv);
//! assert_eq!(transition.status(), MoveStatus::Done);
//! assert_eq!(transition.to_board().current_player().legal_moves().len(), 20);
//! ```

pub mod api;
pub mod board;
pub mod board_utils;
pub mod constants;
pub mod error;
pub mod history;
pub mod move_gen;
pub mod moves;
pub mod player;
pub mod transition;
pub mod types;

#[cfg(test)]
mod test_support;
#[cfg(test)]
mod tests;

pub use board::{Board, BoardBuilder, CastlingRights};
pub use error::{ChessEngineError, ChessEngineResult};
pub use history::MoveLog;
pub use moves::{CastleSide, Move, MoveFactory, MoveKind};
pub use player::{GameState, Player};
pub use transition::{MoveStatus, MoveTransition};
pub use types::{Color, Piece, PieceType, Square};
