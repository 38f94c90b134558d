//! Candidate move generation
//!
//! Every piece kind has its own generator module. Each one is a pure function of the
//! piece and the board: it reads the precomputed tables in [`tables`], filters them
//! against board occupancy and appends [`Move`] values to an output vector.
//!
//! The moves produced here are *pseudo-legal*: they obey piece geometry and occupancy
//! but ignore whether the mover's own king ends up attacked. [`crate::Player`] filters
//! them. Castling is not produced by the king generator because its legality depends on
//! attacked squares; [`castle_moves`] synthesizes it for the player.
//!
//! ## Module Organization
//!
//! - `tables` - occupancy-independent destination tables, built once
//! - `knight`, `king` - fixed-offset pieces
//! - `sliding`, `bishop`, `rook`, `queen` - ray-casting pieces
//! - `pawn` - pushes, jumps, captures, en passant and promotion
//! - `attack` - "is this square attacked by that side" queries
//! - `castle` - castling synthesis

mod attack;
mod bishop;
mod castle;
mod king;
mod knight;
mod pawn;
mod queen;
mod rook;
mod sliding;
pub mod tables;

pub use attack::is_square_attacked;
pub use castle::castle_moves;

use crate::board::Board;
use crate::moves::{Move, MoveKind};
use crate::types::*;

/// Pseudo-legal moves of one piece on `board`
///
/// Friendly-occupied destinations are never produced, enemy-occupied ones become
/// attack moves and empty ones quiet moves.
pub fn candidate_moves(piece: &Piece, board: &Board) -> Vec<Move> {
    let mut moves = Vec::new();
    match piece.kind {
        PieceType::Pawn => pawn::generate_pawn_moves(board, piece, &mut moves),
        PieceType::Knight => knight::generate_knight_moves(board, piece, &mut moves),
        PieceType::Bishop => bishop::generate_bishop_moves(board, piece, &mut moves),
        PieceType::Rook => rook::generate_rook_moves(board, piece, &mut moves),
        PieceType::Queen => queen::generate_queen_moves(board, piece, &mut moves),
        PieceType::King => king::generate_king_moves(board, piece, &mut moves),
    }
    moves
}

/// Pseudo-legal moves of every piece of `color`, castling excluded
pub fn pseudo_legal_moves(board: &Board, color: Color) -> Vec<Move> {
    board
        .pieces(color)
        .flat_map(|piece| candidate_moves(&piece, board))
        .collect()
}

/// Quiet or capturing move of a non-pawn piece onto `destination`
///
/// `None` when a friendly piece stands there.
pub(crate) fn major_move(board: &Board, piece: &Piece, destination: Square) -> Option<Move> {
    match board.piece(destination) {
        None => Some(Move::new(*piece, destination, MoveKind::Major)),
        Some(occupant) if occupant.color != piece.color => Some(Move::new(
            *piece,
            destination,
            MoveKind::MajorAttack { captured: occupant },
        )),
        Some(_) => None,
    }
}
