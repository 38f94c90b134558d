//! Move execution and validation
//!
//! Functions for executing moves and checking move legality.

use crate::board::Board;
use crate::board_utils::is_valid_square;
use crate::moves::{Move, MoveFactory};
use crate::transition::MoveTransition;
use crate::types::*;

/// Attempt the move of the piece on `src` to `dst` for the side to move
///
/// # Returns
///
/// `None` when the squares do not describe a move of the piece on `src` (an empty
/// square, or a destination the piece cannot reach). Otherwise the transition, whose
/// status tells whether the move was applied.
///
/// # Examples
///
/// ```
/// use chess_engine::{api, board_utils::square_at};
///
/// let board = api::new_game();
/// let transition = api::do_move(&board, square_at("e2").unwrap(), square_at("e4").unwrap())
///     .expect("e2-e4 is a pawn move");
/// assert!(transition.is_done());
/// ```
pub fn do_move(board: &Board, src: Square, dst: Square) -> Option<MoveTransition> {
    let mv = MoveFactory::create_move(board, src, dst)?;
    Some(board.current_player().make_move(&mv))
}

/// Like [`do_move`] with an explicit promotion piece
pub fn do_promotion_move(
    board: &Board,
    src: Square,
    dst: Square,
    kind: PieceType,
) -> Option<MoveTransition> {
    let mv = MoveFactory::create_promotion_move(board, src, dst, kind)?;
    Some(board.current_player().make_move(&mv))
}

/// Check if a move is legal for the side to move
///
/// Validates that:
/// - Both squares are on the board
/// - Source square contains a piece of the side to move
/// - The piece can reach the destination
/// - The move doesn't leave the king in check
pub fn is_legal_move(board: &Board, src: Square, dst: Square) -> bool {
    if !is_valid_square(src as i32) || !is_valid_square(dst as i32) {
        return false;
    }
    MoveFactory::create_move(board, src, dst)
        .is_some_and(|mv| board.current_player().is_move_legal(&mv))
}

/// Legal moves of the piece on `square`, empty unless it belongs to the side to move
pub fn legal_moves_from(board: &Board, square: Square) -> Vec<Move> {
    board.current_player().legal_moves_from(square)
}
