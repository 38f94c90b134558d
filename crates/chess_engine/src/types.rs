//! # Core Value Types - Colors, Piece Kinds and Pieces
//!
//! The engine represents every piece as a small `Copy` value. A [`Piece`] knows its
//! kind, its side, the square it stands on and whether it has moved yet. Pieces are
//! never mutated: moving one produces a new value through [`Piece::moved_to`], which is
//! how the first-move flag (needed for pawn jumps and castling) is kept honest.
//!
//! Piece kinds form a closed enum. Move generation dispatches on it exactly once, in
//! [`crate::move_gen::candidate_moves`], so adding a variant is a compile error everywhere
//! it matters.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::*;

/// Board square index, 0 (a8) through 63 (h1)
pub type Square = i8;
pub type Col = i8;
pub type Row = i8;

/// Side of a piece or side to move
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// Returns the opposite color
    pub fn opposite(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Square offset of a single pawn step for this side
    pub fn forward(self) -> i8 {
        match self {
            Color::White => N,
            Color::Black => S,
        }
    }

    pub fn pawn_row(self) -> Row {
        match self {
            Color::White => WHITE_PAWN_ROW,
            Color::Black => BLACK_PAWN_ROW,
        }
    }

    pub fn promotion_row(self) -> Row {
        match self {
            Color::White => WHITE_PROMOTION_ROW,
            Color::Black => BLACK_PROMOTION_ROW,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// Kind of a chess piece
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceType {
    /// Pieces a pawn may promote to
    pub const PROMOTIONS: [PieceType; 4] = [
        PieceType::Queen,
        PieceType::Rook,
        PieceType::Bishop,
        PieceType::Knight,
    ];

    pub fn is_promotion_target(self) -> bool {
        Self::PROMOTIONS.contains(&self)
    }

    /// Upper-case letter used in notation and board diagrams
    pub fn letter(self) -> char {
        match self {
            PieceType::Pawn => 'P',
            PieceType::Knight => 'N',
            PieceType::Bishop => 'B',
            PieceType::Rook => 'R',
            PieceType::Queen => 'Q',
            PieceType::King => 'K',
        }
    }

    /// Parses a promotion letter, either case
    pub fn from_letter(letter: char) -> Option<PieceType> {
        match letter.to_ascii_uppercase() {
            'P' => Some(PieceType::Pawn),
            'N' => Some(PieceType::Knight),
            'B' => Some(PieceType::Bishop),
            'R' => Some(PieceType::Rook),
            'Q' => Some(PieceType::Queen),
            'K' => Some(PieceType::King),
            _ => None,
        }
    }
}

/// A piece standing on a board
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceType,
    pub color: Color,
    pub square: Square,
    pub first_move: bool,
}

impl Piece {
    /// Create a piece that has not moved yet
    pub fn new(kind: PieceType, color: Color, square: Square) -> Self {
        Piece {
            kind,
            color,
            square,
            first_move: true,
        }
    }

    /// Create a piece with an explicit first-move flag
    pub fn with_first_move(kind: PieceType, color: Color, square: Square, first_move: bool) -> Self {
        Piece {
            kind,
            color,
            square,
            first_move,
        }
    }

    /// The value this piece becomes after moving to `destination`
    pub fn moved_to(&self, destination: Square) -> Piece {
        Piece {
            square: destination,
            first_move: false,
            ..*self
        }
    }

    /// The piece a pawn turns into on promotion
    pub fn promoted_to(&self, kind: PieceType, destination: Square) -> Piece {
        Piece {
            kind,
            square: destination,
            first_move: false,
            color: self.color,
        }
    }

    /// Board-diagram letter: upper case for White, lower case for Black
    pub fn symbol(&self) -> char {
        let letter = self.kind.letter();
        match self.color {
            Color::White => letter,
            Color::Black => letter.to_ascii_lowercase(),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
