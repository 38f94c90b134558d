//! Immutable board snapshot
//!
//! A [`Board`] holds the 64 squares, the side to move and the state that only exists
//! between plies (castling rights, en-passant target, who has castled). It is never
//! mutated after construction: every accepted move produces a fresh board through
//! [`BoardBuilder`], which is also the only place the cached king squares and castling
//! rights are derived. That keeps the derived state from drifting away from the pieces.
//!
//! # Examples
//!
//! ```
//! use chess_engine::{Board, board_utils::square_at};
//!
//! let board = Board::create_standard_board();
//! let e2 = square_at("e2").unwrap();
//! assert_eq!(board.piece(e2).map(|p| p.symbol()), Some('P'));
//! assert_eq!(board.current_player().legal_moves().len(), 20);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::board_utils::*;
use crate::constants::*;
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::player::Player;
use crate::types::*;

const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// Castling capability remaining for each side
///
/// Derived from the first-move flags of the king and the corner rooks, so it is
/// revoked as soon as either has moved (or the rook was captured).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CastlingRights {
    pub white_king_side: bool,
    pub white_queen_side: bool,
    pub black_king_side: bool,
    pub black_queen_side: bool,
}

impl CastlingRights {
    pub fn king_side(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_king_side,
            Color::Black => self.black_king_side,
        }
    }

    pub fn queen_side(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_queen_side,
            Color::Black => self.black_queen_side,
        }
    }

    fn derive(squares: &[Option<Piece>; NUM_SQUARES]) -> Self {
        let unmoved = |square: Square, kind: PieceType, color: Color| {
            squares[square as usize]
                .is_some_and(|p| p.kind == kind && p.color == color && p.first_move)
        };
        let white_king = unmoved(WHITE_KING_HOME, PieceType::King, Color::White);
        let black_king = unmoved(BLACK_KING_HOME, PieceType::King, Color::Black);
        CastlingRights {
            white_king_side: white_king
                && unmoved(WHITE_KING_ROOK_HOME, PieceType::Rook, Color::White),
            white_queen_side: white_king
                && unmoved(WHITE_QUEEN_ROOK_HOME, PieceType::Rook, Color::White),
            black_king_side: black_king
                && unmoved(BLACK_KING_ROOK_HOME, PieceType::Rook, Color::Black),
            black_queen_side: black_king
                && unmoved(BLACK_QUEEN_ROOK_HOME, PieceType::Rook, Color::Black),
        }
    }
}

/// Immutable position snapshot
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<Piece>; NUM_SQUARES],
    side_to_move: Color,
    kings: [Square; 2],
    castling: CastlingRights,
    en_passant_target: Option<Square>,
    castled: [bool; 2],
}

impl Board {
    /// Canonical chess starting position, White to move
    pub fn create_standard_board() -> Board {
        let mut builder = BoardBuilder::new();
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            let col = col as Col;
            builder
                .set_piece(Piece::new(kind, Color::Black, square_to_pos(col, FIRST_ROW)))
                .set_piece(Piece::new(PieceType::Pawn, Color::Black, square_to_pos(col, SECOND_ROW)))
                .set_piece(Piece::new(PieceType::Pawn, Color::White, square_to_pos(col, SEVENTH_ROW)))
                .set_piece(Piece::new(kind, Color::White, square_to_pos(col, EIGHTH_ROW)));
        }
        builder.set_side_to_move(Color::White);
        Board::assemble(&builder).unwrap_or_else(|err| unreachable!("standard layout is valid: {err}"))
    }

    /// Start assembling a custom position
    pub fn builder() -> BoardBuilder {
        BoardBuilder::new()
    }

    /// Piece on `square`, `None` for an empty or off-board square
    pub fn piece(&self, square: Square) -> Option<Piece> {
        if is_valid_square(square as i32) {
            self.squares[square as usize]
        } else {
            None
        }
    }

    #[inline]
    pub fn is_occupied(&self, square: Square) -> bool {
        self.piece(square).is_some()
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn king_square(&self, color: Color) -> Square {
        self.kings[color.index()]
    }

    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    /// Square a pawn may capture onto en passant this ply
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    pub fn has_castled(&self, color: Color) -> bool {
        self.castled[color.index()]
    }

    /// Every piece on the board, a8 to h1
    pub fn all_pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.squares.iter().flatten().copied()
    }

    /// Pieces of one side, a8 to h1
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = Piece> + '_ {
        self.all_pieces().filter(move |p| p.color == color)
    }

    /// Per-side view for the side to move
    pub fn current_player(&self) -> Player<'_> {
        Player::new(self, self.side_to_move)
    }

    pub fn player(&self, color: Color) -> Player<'_> {
        Player::new(self, color)
    }

    pub fn white_player(&self) -> Player<'_> {
        self.player(Color::White)
    }

    pub fn black_player(&self) -> Player<'_> {
        self.player(Color::Black)
    }

    /// Validate a builder and derive the cached state
    fn assemble(builder: &BoardBuilder) -> ChessEngineResult<Board> {
        let mut squares = [None; NUM_SQUARES];
        for piece in &builder.pieces {
            if !is_valid_square(piece.square as i32) {
                return Err(ChessEngineError::InvalidSquare {
                    square: piece.square as i32,
                });
            }
            squares[piece.square as usize] = Some(*piece);
        }

        let mut kings: [Option<Square>; 2] = [None, None];
        for piece in squares.iter().flatten() {
            if piece.kind != PieceType::King {
                continue;
            }
            let slot = &mut kings[piece.color.index()];
            if slot.is_some() {
                return Err(ChessEngineError::DuplicateKing {
                    color: piece.color,
                    square: piece.square,
                });
            }
            *slot = Some(piece.square);
        }
        let king = |color: Color| kings[color.index()].ok_or(ChessEngineError::MissingKing { color });
        let kings = [king(Color::White)?, king(Color::Black)?];

        if let Some(target) = builder.en_passant_target {
            validate_en_passant_target(&squares, builder.side_to_move, target)?;
        }

        Ok(Board {
            castling: CastlingRights::derive(&squares),
            squares,
            side_to_move: builder.side_to_move,
            kings,
            en_passant_target: builder.en_passant_target,
            castled: builder.castled,
        })
    }
}

/// The target must be the empty square an enemy pawn just skipped over
fn validate_en_passant_target(
    squares: &[Option<Piece>; NUM_SQUARES],
    side_to_move: Color,
    target: Square,
) -> ChessEngineResult<()> {
    let invalid = || ChessEngineError::InvalidEnPassantTarget { square: target };
    if !is_valid_square(target as i32) || squares[target as usize].is_some() {
        return Err(invalid());
    }
    let expected_row = match side_to_move {
        Color::White => THIRD_ROW,
        Color::Black => SIXTH_ROW,
    };
    if !is_row(expected_row, target) {
        return Err(invalid());
    }
    let victim = target - side_to_move.forward();
    match squares[victim as usize] {
        Some(p) if p.kind == PieceType::Pawn && p.color != side_to_move => Ok(()),
        _ => Err(invalid()),
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..NUM_PER_ROW {
            write!(f, "{} ", NUM_PER_ROW - row)?;
            for col in 0..NUM_PER_ROW {
                let symbol = self
                    .piece(square_to_pos(col, row))
                    .map_or('-', |p| p.symbol());
                write!(f, " {symbol}")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "   a b c d e f g h")
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("side_to_move", &self.side_to_move)
            .field("castling", &self.castling)
            .field("en_passant_target", &self.en_passant_target.map(square_name))
            .field("castled", &self.castled)
            .finish_non_exhaustive()?;
        write!(f, "\n{self}")
    }
}

/// Assembles a [`Board`]
///
/// Placing two pieces on the same square keeps the last one. Validation (one king per
/// side, sane en-passant target) happens in [`BoardBuilder::build`].
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<Piece>,
    side_to_move: Color,
    en_passant_target: Option<Square>,
    castled: [bool; 2],
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Empty board, White to move
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::with_capacity(32),
            side_to_move: Color::White,
            en_passant_target: None,
            castled: [false; 2],
        }
    }

    pub fn set_piece(&mut self, piece: Piece) -> &mut Self {
        self.pieces.push(piece);
        self
    }

    pub fn clear_square(&mut self, square: Square) -> &mut Self {
        self.pieces.retain(|p| p.square != square);
        self
    }

    pub fn set_side_to_move(&mut self, color: Color) -> &mut Self {
        self.side_to_move = color;
        self
    }

    pub fn set_en_passant_target(&mut self, target: Option<Square>) -> &mut Self {
        self.en_passant_target = target;
        self
    }

    pub fn set_castled(&mut self, color: Color, castled: bool) -> &mut Self {
        self.castled[color.index()] = castled;
        self
    }

    /// Validate and produce the board
    ///
    /// # Errors
    ///
    /// - [`ChessEngineError::InvalidSquare`] for a piece placed off the board
    /// - [`ChessEngineError::MissingKing`] / [`ChessEngineError::DuplicateKing`] unless
    ///   each side has exactly one king
    /// - [`ChessEngineError::InvalidEnPassantTarget`] for a target no double step produced
    pub fn build(&self) -> ChessEngineResult<Board> {
        Board::assemble(self)
    }
}
