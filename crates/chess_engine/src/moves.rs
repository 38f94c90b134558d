//! Moves and move execution
//!
//! A [`Move`] is a typed description of a board transition. It records the piece that
//! moves (as it stood before the move), its destination, a [`MoveKind`] carrying the
//! kind-specific payload, and an optional promotion target.
//!
//! Executing a move never touches the source board. [`Move::execute`] copies every
//! piece except the mover into a new [`BoardBuilder`], applies the kind-specific side
//! effects (captured piece removed, castling rook relocated, en-passant target set or
//! cleared) and flips the side to move.
//!
//! [`MoveFactory`] turns a pair of squares (what a user clicks) into the matching move,
//! or `None` when the squares do not describe a move.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::board::{Board, BoardBuilder};
use crate::board_utils::*;
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::move_gen::{candidate_moves, castle_moves};
use crate::types::*;

/// Which rook a castling move uses
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

/// Kind-specific payload of a move
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    /// Non-pawn move to an empty square
    Major,
    /// Non-pawn capture
    MajorAttack { captured: Piece },
    /// Single pawn step
    PawnMove,
    /// Pawn double step from its starting row; sets the en-passant target
    PawnJump,
    /// Diagonal pawn capture
    PawnAttack { captured: Piece },
    /// Pawn capture of a pawn that just jumped past; the victim is not on the destination
    EnPassant { captured: Piece },
    /// King move of two squares with the rook hopping over it
    Castle {
        side: CastleSide,
        rook: Piece,
        rook_destination: Square,
    },
}

/// A board transition
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    piece: Piece,
    destination: Square,
    kind: MoveKind,
    promotion: Option<PieceType>,
}

impl Move {
    pub fn new(piece: Piece, destination: Square, kind: MoveKind) -> Self {
        Move {
            piece,
            destination,
            kind,
            promotion: None,
        }
    }

    /// Pawn move or capture onto the farthest row; promotes to a queen unless overridden
    pub(crate) fn promoting(piece: Piece, destination: Square, kind: MoveKind) -> Self {
        Move {
            promotion: Some(PieceType::Queen),
            ..Move::new(piece, destination, kind)
        }
    }

    /// The same move promoting to `kind` instead
    ///
    /// # Errors
    ///
    /// [`ChessEngineError::IllegalPromotion`] when this move does not promote or `kind` is
    /// not a knight, bishop, rook or queen.
    pub fn with_promotion(&self, kind: PieceType) -> ChessEngineResult<Move> {
        if self.promotion.is_none() || !kind.is_promotion_target() {
            return Err(ChessEngineError::IllegalPromotion { kind });
        }
        Ok(Move {
            promotion: Some(kind),
            ..*self
        })
    }

    /// The piece as it stood before moving
    pub fn moved_piece(&self) -> Piece {
        self.piece
    }

    pub fn current_square(&self) -> Square {
        self.piece.square
    }

    pub fn destination(&self) -> Square {
        self.destination
    }

    pub fn kind(&self) -> MoveKind {
        self.kind
    }

    pub fn promotion(&self) -> Option<PieceType> {
        self.promotion
    }

    pub fn captured_piece(&self) -> Option<Piece> {
        match self.kind {
            MoveKind::MajorAttack { captured }
            | MoveKind::PawnAttack { captured }
            | MoveKind::EnPassant { captured } => Some(captured),
            _ => None,
        }
    }

    pub fn is_castling(&self) -> bool {
        matches!(self.kind, MoveKind::Castle { .. })
    }

    /// Same piece, destination and kind, whatever promotion piece was chosen
    pub fn same_transition(&self, other: &Move) -> bool {
        self.piece == other.piece
            && self.destination == other.destination
            && self.kind == other.kind
            && self.promotion.is_some() == other.promotion.is_some()
    }

    /// Build the board that results from playing this move on `board`
    ///
    /// The moved piece becomes its "moved" variant (new square, first-move cleared), a
    /// promoting pawn becomes the chosen piece, captured pieces disappear (the en-passant
    /// victim sits beside the destination), a castling rook is relocated, the side to move
    /// flips and the en-passant target is set only after a pawn jump.
    ///
    /// # Errors
    ///
    /// Propagates [`BoardBuilder::build`] failures, which only happen when the result would
    /// lose a king; legal moves never do.
    pub fn execute(&self, board: &Board) -> ChessEngineResult<Board> {
        let mover = self.piece.color;
        let mut builder = BoardBuilder::new();

        let captured_square = self.captured_piece().map(|p| p.square);
        let castling_rook = match self.kind {
            MoveKind::Castle { rook, .. } => Some(rook),
            _ => None,
        };

        for piece in board.all_pieces() {
            if piece == self.piece
                || Some(piece.square) == captured_square
                || Some(piece) == castling_rook
            {
                continue;
            }
            builder.set_piece(piece);
        }

        let landed = match self.promotion {
            Some(kind) => self.piece.promoted_to(kind, self.destination),
            None => self.piece.moved_to(self.destination),
        };
        builder.set_piece(landed);

        if let MoveKind::Castle {
            rook,
            rook_destination,
            ..
        } = self.kind
        {
            builder.set_piece(rook.moved_to(rook_destination));
        }

        let en_passant_target = match self.kind {
            MoveKind::PawnJump => Some(self.piece.square + mover.forward()),
            _ => None,
        };

        builder
            .set_side_to_move(mover.opposite())
            .set_en_passant_target(en_passant_target);
        for color in Color::ALL {
            builder.set_castled(color, board.has_castled(color));
        }
        if self.is_castling() {
            builder.set_castled(mover, true);
        }
        builder.build()
    }
}

impl fmt::Display for Move {
    /// Compact algebraic form, e.g. `e4`, `Nf3`, `exd5`, `Qxf7`, `O-O`, `e8=Q`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let to = square_name(self.destination);
        match self.kind {
            MoveKind::Castle {
                side: CastleSide::KingSide,
                ..
            } => return write!(f, "O-O"),
            MoveKind::Castle {
                side: CastleSide::QueenSide,
                ..
            } => return write!(f, "O-O-O"),
            MoveKind::PawnMove | MoveKind::PawnJump => write!(f, "{to}")?,
            MoveKind::PawnAttack { .. } | MoveKind::EnPassant { .. } => {
                let from = square_name(self.piece.square);
                write!(f, "{}x{to}", &from[..1])?
            }
            MoveKind::Major => write!(f, "{}{to}", self.piece.kind.letter())?,
            MoveKind::MajorAttack { .. } => write!(f, "{}x{to}", self.piece.kind.letter())?,
        }
        if let Some(kind) = self.promotion {
            write!(f, "={}", kind.letter())?;
        }
        Ok(())
    }
}

/// Builds moves from square pairs
pub struct MoveFactory;

impl MoveFactory {
    /// The candidate move of the piece on `from` that lands on `to`
    ///
    /// Returns `None` (the null move) when `from` is empty or no candidate of that piece
    /// reaches `to`. Castling is found by the king's two-square destination. Promotions
    /// default to a queen. The returned move is not yet checked for king safety; that is
    /// [`crate::Player::make_move`]'s job.
    pub fn create_move(board: &Board, from: Square, to: Square) -> Option<Move> {
        let piece = board.piece(from)?;
        if !is_valid_square(to as i32) {
            return None;
        }
        let found = candidate_moves(&piece, board)
            .into_iter()
            .find(|mv| mv.destination == to);
        if found.is_some() || piece.kind != PieceType::King {
            return found;
        }
        castle_moves(board, piece.color)
            .into_iter()
            .find(|mv| mv.piece == piece && mv.destination == to)
    }

    /// Like [`MoveFactory::create_move`] with an explicit promotion piece
    ///
    /// Returns `None` when the squares do not describe a promotion or `kind` is not a
    /// valid promotion target.
    pub fn create_promotion_move(
        board: &Board,
        from: Square,
        to: Square,
        kind: PieceType,
    ) -> Option<Move> {
        Self::create_move(board, from, to)?.with_promotion(kind).ok()
    }
}
