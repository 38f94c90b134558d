//! Error types for the game session
//!
//! Covers what a driver can get wrong while steering a game: malformed coordinates,
//! square pairs that are not moves, moves after the game ended and undo with nothing to
//! take back. Engine faults are wrapped unchanged.

use chess_engine::{ChessEngineError, GameState, MoveStatus};

/// Errors that can occur while driving a game
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Coordinate text that is not `<from><to>[promotion]`
    #[error("Invalid move text: {text:?} (expected e.g. e2e4 or e7e8q)")]
    InvalidCoordinate { text: String },

    /// The squares do not describe a move of the piece on `from`
    #[error("No move from {from} to {to}")]
    NoSuchMove { from: String, to: String },

    /// The engine refused a well-formed move
    #[error("Move {text} rejected: {status:?}")]
    Rejected { text: String, status: MoveStatus },

    /// Checkmate or stalemate already reached
    #[error("Game is over ({state:?})")]
    GameOver { state: GameState },

    /// Undo requested on an empty history
    #[error("Nothing to undo")]
    NothingToUndo,

    /// The engine refused to take back the last move
    #[error("Undo rejected: {status:?}")]
    UndoRejected { status: MoveStatus },

    /// Structural fault reported by the engine
    #[error(transparent)]
    Engine(#[from] ChessEngineError),
}

/// Result type alias for session operations
pub type SessionResult<T> = Result<T, SessionError>;
