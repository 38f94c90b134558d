//! Castling synthesis
//!
//! Castling is available only when:
//! - neither the king nor the chosen rook has moved (the board's castling rights)
//! - every square between them is empty
//! - the king is not currently in check
//! - the king does not pass through or land on a square attacked by the opponent
//!
//! The square next to the queen-side rook (b1/b8) must be empty but may be attacked,
//! since the king never crosses it.

use super::attack::is_square_attacked;
use crate::board::Board;
use crate::moves::{CastleSide, Move, MoveKind};
use crate::types::*;

/// Castling moves currently available to `color`
pub fn castle_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut moves = Vec::with_capacity(2);
    let rights = board.castling_rights();
    if !rights.king_side(color) && !rights.queen_side(color) {
        return moves;
    }

    let king_square = board.king_square(color);
    let Some(king) = board.piece(king_square) else {
        return moves;
    };
    let enemy = color.opposite();
    if is_square_attacked(board, king_square, enemy) {
        return moves;
    }

    if rights.king_side(color) {
        if let Some(mv) = castle(board, &king, CastleSide::KingSide) {
            moves.push(mv);
        }
    }
    if rights.queen_side(color) {
        if let Some(mv) = castle(board, &king, CastleSide::QueenSide) {
            moves.push(mv);
        }
    }
    moves
}

fn castle(board: &Board, king: &Piece, side: CastleSide) -> Option<Move> {
    let from = king.square;
    // (direction, rook distance)
    let (dir, rook_distance) = match side {
        CastleSide::KingSide => (1, 3),
        CastleSide::QueenSide => (-1, 4),
    };

    let rook = board.piece(from + dir * rook_distance)?;
    if rook.kind != PieceType::Rook || rook.color != king.color || !rook.first_move {
        return None;
    }

    let between_empty = (1..rook_distance).all(|step| !board.is_occupied(from + dir * step));
    if !between_empty {
        return None;
    }

    let enemy = king.color.opposite();
    let path_safe = (1..=2).all(|step| !is_square_attacked(board, from + dir * step, enemy));
    if !path_safe {
        return None;
    }

    Some(Move::new(
        *king,
        from + dir * 2,
        MoveKind::Castle {
            side,
            rook,
            rook_destination: from + dir,
        },
    ))
}
