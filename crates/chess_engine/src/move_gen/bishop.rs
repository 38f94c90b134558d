//! Bishop move generation
//!
//! Bishops slide diagonally until blocked by another piece or the board edge.

use super::sliding;
use crate::board::Board;
use crate::constants::BISHOP_DIRS;
use crate::moves::Move;
use crate::types::*;

/// Generate bishop moves along the four diagonals
pub fn generate_bishop_moves(board: &Board, bishop: &Piece, moves: &mut Vec<Move>) {
    sliding::generate_sliding_moves(board, bishop, &BISHOP_DIRS, moves);
}
