//! Error types for chess engine
//!
//! Only structural faults are errors. A misclicked or unsafe move is an expected event and
//! is reported through [`crate::MoveStatus`] or the `None` move sentinel instead.

use thiserror::Error;

use crate::types::{Color, PieceType, Square};

/// Errors that can occur in the chess engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessEngineError {
    /// Invalid square index (out of bounds)
    #[error("Invalid square index: {square} (must be 0-63)")]
    InvalidSquare { square: i32 },

    /// A board was assembled without a king for one side
    #[error("No {color} king on the board")]
    MissingKing { color: Color },

    /// A board was assembled with more than one king for one side
    #[error("More than one {color} king on the board (second at square {square})")]
    DuplicateKing { color: Color, square: Square },

    /// En-passant target that no double step could have produced
    #[error("Invalid en passant target square {square}")]
    InvalidEnPassantTarget { square: Square },

    /// Promotion to a piece a pawn cannot become
    #[error("Pawns cannot promote to {kind:?}")]
    IllegalPromotion { kind: PieceType },

    /// A recorded move could not be re-applied while replaying history
    #[error("Replay failed at ply {ply}: {message}")]
    ReplayFailed { ply: usize, message: String },
}

/// Result type alias for chess engine operations
pub type ChessEngineResult<T> = Result<T, ChessEngineError>;
