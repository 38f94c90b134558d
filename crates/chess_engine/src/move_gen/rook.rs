//! Rook move generation
//!
//! Handles rook-specific move generation. Rooks are sliding pieces that move
//! horizontally and vertically until blocked by another piece or the board edge.
//!
//! ## Rook Movement Rules
//!
//! - Rooks move along ranks or files
//! - Cannot jump over pieces
//! - Cannot move to squares occupied by own pieces
//! - Can capture opponent pieces on destination squares

use super::sliding;
use crate::board::Board;
use crate::constants::ROOK_DIRS;
use crate::moves::Move;
use crate::types::*;

/// Generate rook moves along the four orthogonals
pub fn generate_rook_moves(board: &Board, rook: &Piece, moves: &mut Vec<Move>) {
    sliding::generate_sliding_moves(board, rook, &ROOK_DIRS, moves);
}
