//! Board geometry utilities
//!
//! Static facts about the 8x8 grid flattened to 64 indices:
//! - Square validation and (col, row) conversion
//! - Row and column membership tables used to exclude wrap-around moves at the edges
//! - Algebraic square names (`a8` is square 0, `h1` is square 63)
//!
//! Membership tables are built once on first use and shared read-only afterwards.

use std::sync::OnceLock;

use crate::constants::*;
use crate::types::*;

/// Precomputed row/column membership for every square
///
/// `columns[c][sq]` is true when `sq` sits on column `c` (0 = a-file),
/// `rows[r][sq]` is true when `sq` sits on row `r` (0 = rank 8).
#[derive(Debug)]
pub struct BoardUtils {
    columns: [[bool; NUM_SQUARES]; 8],
    rows: [[bool; NUM_SQUARES]; 8],
    names: [String; NUM_SQUARES],
}

impl BoardUtils {
    fn build() -> Self {
        let mut columns = [[false; NUM_SQUARES]; 8];
        let mut rows = [[false; NUM_SQUARES]; 8];
        for square in 0..NUM_SQUARES {
            let (col, row) = pos_to_square(square as Square);
            columns[col as usize][square] = true;
            rows[row as usize][square] = true;
        }
        let names = std::array::from_fn(|square| {
            let (col, row) = pos_to_square(square as Square);
            let file = (b'a' + col as u8) as char;
            let rank = (b'8' - row as u8) as char;
            format!("{file}{rank}")
        });
        BoardUtils {
            columns,
            rows,
            names,
        }
    }

    /// Shared instance, built on first access
    pub fn get() -> &'static BoardUtils {
        static UTILS: OnceLock<BoardUtils> = OnceLock::new();
        UTILS.get_or_init(BoardUtils::build)
    }

    #[inline]
    pub fn is_column(&self, col: Col, square: Square) -> bool {
        is_valid_square(square as i32) && self.columns[col as usize][square as usize]
    }

    #[inline]
    pub fn is_row(&self, row: Row, square: Square) -> bool {
        is_valid_square(square as i32) && self.rows[row as usize][square as usize]
    }

    pub fn name(&self, square: Square) -> &str {
        &self.names[square as usize]
    }
}

pub const FIRST_COLUMN: Col = 0;
pub const SECOND_COLUMN: Col = 1;
pub const SEVENTH_COLUMN: Col = 6;
pub const EIGHTH_COLUMN: Col = 7;

pub const FIRST_ROW: Row = 0;
pub const SECOND_ROW: Row = 1;
pub const THIRD_ROW: Row = 2;
pub const SIXTH_ROW: Row = 5;
pub const SEVENTH_ROW: Row = 6;
pub const EIGHTH_ROW: Row = 7;

/// Convert column and row to linear position (0-63)
#[inline]
pub fn square_to_pos(col: Col, row: Row) -> Square {
    row * NUM_PER_ROW + col
}

/// Convert position to (col, row)
#[inline]
pub fn pos_to_square(pos: Square) -> (Col, Row) {
    (pos % NUM_PER_ROW, pos / NUM_PER_ROW)
}

/// Check if position is within board bounds
#[inline]
pub fn is_valid_square(pos: i32) -> bool {
    (0..NUM_SQUARES as i32).contains(&pos)
}

#[inline]
pub fn is_column(col: Col, square: Square) -> bool {
    BoardUtils::get().is_column(col, square)
}

#[inline]
pub fn is_row(row: Row, square: Square) -> bool {
    BoardUtils::get().is_row(row, square)
}

/// Algebraic name of a square, e.g. `e4`
///
/// # Panics
///
/// Panics when `square` is outside 0..64; callers hold squares taken from a board.
pub fn square_name(square: Square) -> &'static str {
    BoardUtils::get().name(square)
}

/// Parse an algebraic square name (`a1`..`h8`)
pub fn square_at(name: &str) -> Option<Square> {
    let mut chars = name.chars();
    let file = chars.next()?;
    let rank = chars.next()?;
    if chars.next().is_some() || !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
        return None;
    }
    let col = (file as u8 - b'a') as Col;
    let row = (b'8' - rank as u8) as Row;
    Some(square_to_pos(col, row))
}
