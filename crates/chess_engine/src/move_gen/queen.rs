//! Queen move generation
//!
//! Queens combine the movement patterns of bishops and rooks.

use super::sliding;
use crate::board::Board;
use crate::constants::QUEEN_DIRS;
use crate::moves::Move;
use crate::types::*;

pub fn generate_queen_moves(board: &Board, queen: &Piece, moves: &mut Vec<Move>) {
    sliding::generate_sliding_moves(board, queen, &QUEEN_DIRS, moves);
}
