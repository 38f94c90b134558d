//! Pawn move generation
//!
//! Handles pawn-specific move generation including:
//! - Single and double forward pushes
//! - Diagonal captures
//! - En passant
//! - Promotion (payload attached here, applied during move execution)
//!
//! ## Pawn Movement Rules
//!
//! - **Forward push**: one square towards the opponent, only onto an empty square
//! - **Double push**: from the starting row, if both squares ahead are empty and the
//!   pawn has not moved. The resulting [`MoveKind::PawnJump`] sets the en-passant target
//! - **Captures**: one square diagonally forward, only onto an enemy piece
//! - **En passant**: diagonally onto the board's en-passant target, removing the enemy
//!   pawn that just jumped past
//! - **Promotion**: any push or capture onto the farthest row promotes (queen by default)

use super::tables::is_edge_exclusion;
use crate::board::Board;
use crate::board_utils::*;
use crate::moves::{Move, MoveKind};
use crate::types::*;

/// Generate pawn moves from the pawn's square
pub fn generate_pawn_moves(board: &Board, pawn: &Piece, moves: &mut Vec<Move>) {
    let color = pawn.color;
    let forward = color.forward();
    let from = pawn.square;

    let single = from as i32 + forward as i32;
    if is_valid_square(single) && !board.is_occupied(single as Square) {
        let single = single as Square;
        push_pawn_move(pawn, single, MoveKind::PawnMove, moves);

        let double = single as i32 + forward as i32;
        if pawn.first_move
            && is_row(color.pawn_row(), from)
            && is_valid_square(double)
            && !board.is_occupied(double as Square)
        {
            moves.push(Move::new(*pawn, double as Square, MoveKind::PawnJump));
        }
    }

    // Diagonals: forward one row and one file either way
    for offset in [forward - 1, forward + 1] {
        if is_edge_exclusion(from, offset) {
            continue;
        }
        let target = from as i32 + offset as i32;
        if !is_valid_square(target) {
            continue;
        }
        let target = target as Square;
        match board.piece(target) {
            Some(occupant) if occupant.color != color => {
                push_pawn_move(pawn, target, MoveKind::PawnAttack { captured: occupant }, moves);
            }
            Some(_) => {}
            None if board.en_passant_target() == Some(target) => {
                let victim_square = target - forward;
                if let Some(victim) = board.piece(victim_square) {
                    if victim.kind == PieceType::Pawn && victim.color != color {
                        moves.push(Move::new(
                            *pawn,
                            target,
                            MoveKind::EnPassant { captured: victim },
                        ));
                    }
                }
            }
            None => {}
        }
    }
}

/// Attach the promotion payload when the destination is the farthest row
fn push_pawn_move(pawn: &Piece, destination: Square, kind: MoveKind, moves: &mut Vec<Move>) {
    if is_row(pawn.color.promotion_row(), destination) {
        moves.push(Move::promoting(*pawn, destination, kind));
    } else {
        moves.push(Move::new(*pawn, destination, kind));
    }
}
