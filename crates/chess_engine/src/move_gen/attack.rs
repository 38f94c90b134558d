//! Attack detection and square checking
//!
//! Provides the "is this square attacked by that side" query used for check
//! detection and for the castling rule that the king may not cross an attacked
//! square.
//!
//! ## Algorithm
//!
//! Iterate through the attacking side's pieces and ask whether each can reach the
//! target with a capturing move. Pawns only attack diagonally, so a pawn push never
//! counts, even onto an empty square. Sliding pieces walk their precomputed ray until
//! they hit the target or any blocker.

use super::tables::{is_edge_exclusion, MoveTables};
use crate::board::Board;
use crate::constants::*;
use crate::types::*;

/// Check if `square` is attacked by pieces of `by_color`
///
/// The piece standing on `square` (if any) does not matter; this answers whether a
/// piece of `by_color` placed there would be capturable.
///
/// # Examples
///
/// ```
/// use chess_engine::{Board, Color, move_gen::is_square_attacked, board_utils::square_at};
///
/// let board = Board::create_standard_board();
/// // f3 is covered by the g1 knight and the e2/g2 pawns
/// assert!(is_square_attacked(&board, square_at("f3").unwrap(), Color::White));
/// assert!(!is_square_attacked(&board, square_at("e4").unwrap(), Color::White));
/// ```
pub fn is_square_attacked(board: &Board, square: Square, by_color: Color) -> bool {
    board.pieces(by_color).any(|piece| {
        let from = piece.square;
        match piece.kind {
            PieceType::Pawn => can_pawn_attack(from, square, by_color),
            PieceType::Knight => MoveTables::get().knight(from).contains(&square),
            PieceType::King => MoveTables::get().king(from).contains(&square),
            PieceType::Bishop => can_slide_to(board, from, square, &BISHOP_DIRS),
            PieceType::Rook => can_slide_to(board, from, square, &ROOK_DIRS),
            PieceType::Queen => can_slide_to(board, from, square, &QUEEN_DIRS),
        }
    })
}

/// Pawns attack the two squares diagonally forward
fn can_pawn_attack(from: Square, target: Square, color: Color) -> bool {
    let forward = color.forward();
    [forward - 1, forward + 1].into_iter().any(|offset| {
        !is_edge_exclusion(from, offset) && from as i32 + offset as i32 == target as i32
    })
}

/// Walk each ray until the target or the first blocker
fn can_slide_to(board: &Board, from: Square, target: Square, dirs: &[i8]) -> bool {
    let tables = MoveTables::get();
    dirs.iter().any(|&dir| {
        for &square in tables.ray(from, dir) {
            if square == target {
                return true;
            }
            if board.is_occupied(square) {
                return false;
            }
        }
        false
    })
}
