//! King move generation
//!
//! Kings move one square in any direction (8 possible destinations, fewer on the
//! edge).
//!
//! ## Note on Castling
//!
//! Castling is not included here because it depends on:
//! - King and rook not having moved
//! - No pieces between king and rook
//! - King not in check
//! - The squares the king crosses not being under attack
//!
//! Those conditions need attack information, so castling lives in `castle`.

use super::major_move;
use super::tables::MoveTables;
use crate::board::Board;
use crate::moves::Move;
use crate::types::*;

/// Generate king steps from the king's square, castling excluded
pub fn generate_king_moves(board: &Board, king: &Piece, moves: &mut Vec<Move>) {
    for &destination in MoveTables::get().king(king.square) {
        if let Some(mv) = major_move(board, king, destination) {
            moves.push(mv);
        }
    }
}
