//! Shared helpers for unit tests

use crate::board::Board;
use crate::board_utils::square_at;
use crate::moves::{Move, MoveFactory};
use crate::types::*;

/// Square index from an algebraic name, panicking on typos
pub fn sq(name: &str) -> Square {
    square_at(name).unwrap_or_else(|| panic!("bad square name {name}"))
}

/// Build a board from (kind, color, square-name) triples; every piece is unmoved
pub fn board_from(pieces: &[(PieceType, Color, &str)], to_move: Color) -> Board {
    let mut builder = Board::builder();
    for &(kind, color, name) in pieces {
        builder.set_piece(Piece::new(kind, color, sq(name)));
    }
    builder.set_side_to_move(to_move);
    builder.build().expect("test board is valid")
}

/// Look up a move by coordinate text such as `e2e4` or `e7e8n`
pub fn find_move(board: &Board, text: &str) -> Move {
    let from = sq(&text[0..2]);
    let to = sq(&text[2..4]);
    let mv = match text.chars().nth(4).and_then(PieceType::from_letter) {
        Some(kind) => MoveFactory::create_promotion_move(board, from, to, kind),
        None => MoveFactory::create_move(board, from, to),
    };
    mv.unwrap_or_else(|| panic!("no move {text} on\n{board}"))
}

/// Play coordinate moves in order, asserting each is accepted
pub fn play(board: &Board, moves: &[&str]) -> (Board, Vec<Move>) {
    let mut current = board.clone();
    let mut played = Vec::with_capacity(moves.len());
    for text in moves {
        let mv = find_move(&current, text);
        let transition = current.current_player().make_move(&mv);
        assert!(transition.is_done(), "{text} rejected: {:?}", transition.status());
        current = transition.into_board();
        played.push(mv);
    }
    (current, played)
}
