//! Sliding piece move generation
//!
//! Common functionality for sliding pieces (bishops, rooks, queens).
//!
//! ## Algorithm
//!
//! For each direction the piece can slide in, walk the precomputed ray one square at
//! a time:
//! 1. Empty square: emit a quiet move and keep going
//! 2. Opponent piece: emit a capture, then stop (inclusive)
//! 3. Own piece: stop without emitting (exclusive)
//!
//! The rays already end at the board edge without wrapping, see `tables`.

use super::tables::MoveTables;
use crate::board::Board;
use crate::moves::{Move, MoveKind};
use crate::types::*;

/// Generate moves for a sliding piece along the given directions
pub fn generate_sliding_moves(board: &Board, piece: &Piece, dirs: &[i8], moves: &mut Vec<Move>) {
    let tables = MoveTables::get();
    for &dir in dirs {
        for &destination in tables.ray(piece.square, dir) {
            match board.piece(destination) {
                None => moves.push(Move::new(*piece, destination, MoveKind::Major)),
                Some(occupant) => {
                    if occupant.color != piece.color {
                        moves.push(Move::new(
                            *piece,
                            destination,
                            MoveKind::MajorAttack { captured: occupant },
                        ));
                    }
                    break;
                }
            }
        }
    }
}
