//! # Chess Engine Constants - Direction Vectors & Home Squares
//!
//! ## Direction Vectors for Move Generation
//!
//! Movement is encoded as offsets in a one-dimensional array representing the board (0-63),
//! where square 0 is a8 (top-left from White's side) and square 63 is h1:
//! - **North (N)**: -8 (towards Black's back rank)
//! - **South (S)**: +8 (towards White's back rank)
//! - **East (O)**: +1 (one file right)
//! - **West (W)**: -1 (one file left)
//! - **Diagonals**: Combinations (NO, NW, SO, SW)
//!
//! White pawns therefore advance with `N` and Black pawns with `S`.
//!
//! ### Knight Moves: The "L-Shape" Pattern
//!
//! Knights jump rather than slide. Their 8 possible moves are encoded as:
//! - 2 up + 1 right: N+N+O = -8-8+1 = -15
//! - 2 up + 1 left: N+N+W = -8-8-1 = -17
//! - 2 down + 1 right: S+S+O = +8+8+1 = +17
//! - etc.
//!
//! A raw offset can wrap from the h-file to the a-file (or back). [`crate::move_gen::tables`]
//! drops those offsets per column, using the membership tables in [`crate::board_utils`].
//!
//! ## Home Squares
//!
//! Castling depends on the king and rook still standing on their original squares with
//! their first-move flag intact. The constants below name those squares.

use crate::types::Square;

pub const NUM_SQUARES: usize = 64;
pub const NUM_PER_ROW: i8 = 8;

pub const FORWARD: i8 = 8;
pub const SIDEWARD: i8 = 1;
pub const S: i8 = FORWARD;
pub const O: i8 = SIDEWARD;
pub const N: i8 = -S;
pub const W: i8 = -O;
pub const NO: i8 = N + O;
pub const SO: i8 = S + O;
pub const NW: i8 = N + W;
pub const SW: i8 = S + W;

pub const BISHOP_DIRS: [i8; 4] = [NW, NO, SW, SO];
pub const ROOK_DIRS: [i8; 4] = [N, W, O, S];
pub const QUEEN_DIRS: [i8; 8] = [NW, N, NO, W, O, SW, S, SO];
pub const KNIGHT_DIRS: [i8; 8] = [
    N + N + W, N + N + O, W + W + N, O + O + N,
    W + W + S, O + O + S, S + S + W, S + S + O,
];
pub const KING_DIRS: [i8; 8] = [NW, N, NO, W, O, SW, S, SO];

pub const WHITE_KING_HOME: Square = 60;
pub const WHITE_KING_ROOK_HOME: Square = 63;
pub const WHITE_QUEEN_ROOK_HOME: Square = 56;
pub const BLACK_KING_HOME: Square = 4;
pub const BLACK_KING_ROOK_HOME: Square = 7;
pub const BLACK_QUEEN_ROOK_HOME: Square = 0;

/// Row indices the pawns of each side start from
pub const WHITE_PAWN_ROW: i8 = 6;
pub const BLACK_PAWN_ROW: i8 = 1;

/// Row indices where each side's pawns promote
pub const WHITE_PROMOTION_ROW: i8 = 0;
pub const BLACK_PROMOTION_ROW: i8 = 7;
