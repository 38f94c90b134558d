//! Knight move generation
//!
//! Knights jump in an L-shape: 2 squares in one direction, then 1 square
//! perpendicular. They ignore pieces in between, so only the destination square
//! matters.

use super::major_move;
use super::tables::MoveTables;
use crate::board::Board;
use crate::moves::Move;
use crate::types::*;

/// Generate knight moves from the knight's square
///
/// Filters the precomputed knight table, dropping squares held by own pieces.
pub fn generate_knight_moves(board: &Board, knight: &Piece, moves: &mut Vec<Move>) {
    for &destination in MoveTables::get().knight(knight.square) {
        if let Some(mv) = major_move(board, knight, destination) {
            moves.push(mv);
        }
    }
}
