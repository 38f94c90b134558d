//! Move table initialization
//!
//! Precomputes, for every square, where a knight or king could land and how far each
//! sliding ray runs before leaving the board. These tables ignore occupancy; the
//! per-piece generators filter them against a concrete board.
//!
//! ## Edge Exclusions
//!
//! Squares are a flat 0..64 index, so a raw offset can wrap from one edge file to the
//! other (a knight on h4 plus `+10` lands on the a-file). Each offset is therefore
//! checked against the column the piece stands on:
//!
//! | Column | Excluded knight offsets | Excluded king/ray offsets |
//! |--------|-------------------------|---------------------------|
//! | first  | -17, -10, 6, 15         | -9, -1, 7                 |
//! | second | -10, 6                  |                           |
//! | seventh| -6, 10                  |                           |
//! | eighth | -15, -6, 10, 17         | -7, 1, 9                  |
//!
//! Offsets that survive the column check only need the destination to be in range.
//!
//! Tables are built on first use and shared read-only for the rest of the process.

use std::sync::OnceLock;

use crate::board_utils::*;
use crate::constants::*;
use crate::types::*;

/// Occupancy-independent destinations for every square
#[derive(Debug)]
pub struct MoveTables {
    knight: [Vec<Square>; NUM_SQUARES],
    king: [Vec<Square>; NUM_SQUARES],
    /// `rays[square][i]` runs along `QUEEN_DIRS[i]`, nearest square first
    rays: [[Vec<Square>; 8]; NUM_SQUARES],
}

impl MoveTables {
    /// Shared tables, built on first access
    pub fn get() -> &'static MoveTables {
        static TABLES: OnceLock<MoveTables> = OnceLock::new();
        TABLES.get_or_init(MoveTables::build)
    }

    fn build() -> Self {
        MoveTables {
            knight: std::array::from_fn(|sq| init_knight_moves_from(sq as Square)),
            king: std::array::from_fn(|sq| init_king_moves_from(sq as Square)),
            rays: std::array::from_fn(|sq| {
                std::array::from_fn(|dir| init_ray_from(sq as Square, QUEEN_DIRS[dir]))
            }),
        }
    }

    pub fn knight(&self, from: Square) -> &[Square] {
        &self.knight[from as usize]
    }

    pub fn king(&self, from: Square) -> &[Square] {
        &self.king[from as usize]
    }

    /// Squares along `dir` from `from`, nearest first; empty for an unknown direction
    pub fn ray(&self, from: Square, dir: i8) -> &[Square] {
        match QUEEN_DIRS.iter().position(|&d| d == dir) {
            Some(index) => &self.rays[from as usize][index],
            None => &[],
        }
    }
}

fn is_knight_column_exclusion(from: Square, offset: i8) -> bool {
    (is_column(FIRST_COLUMN, from) && matches!(offset, -17 | -10 | 6 | 15))
        || (is_column(SECOND_COLUMN, from) && matches!(offset, -10 | 6))
        || (is_column(SEVENTH_COLUMN, from) && matches!(offset, -6 | 10))
        || (is_column(EIGHTH_COLUMN, from) && matches!(offset, -15 | -6 | 10 | 17))
}

/// Shared by the king table and every sliding ray: one-file steps that would wrap
pub(crate) fn is_edge_exclusion(from: Square, offset: i8) -> bool {
    (is_column(FIRST_COLUMN, from) && matches!(offset, -9 | -1 | 7))
        || (is_column(EIGHTH_COLUMN, from) && matches!(offset, -7 | 1 | 9))
}

fn init_knight_moves_from(from: Square) -> Vec<Square> {
    KNIGHT_DIRS
        .iter()
        .filter(|&&offset| !is_knight_column_exclusion(from, offset))
        .map(|&offset| from as i32 + offset as i32)
        .filter(|&to| is_valid_square(to))
        .map(|to| to as Square)
        .collect()
}

fn init_king_moves_from(from: Square) -> Vec<Square> {
    KING_DIRS
        .iter()
        .filter(|&&offset| !is_edge_exclusion(from, offset))
        .map(|&offset| from as i32 + offset as i32)
        .filter(|&to| is_valid_square(to))
        .map(|to| to as Square)
        .collect()
}

/// Step along `dir` until the next step would leave the board or wrap
fn init_ray_from(from: Square, dir: i8) -> Vec<Square> {
    let mut ray = Vec::with_capacity(7);
    let mut current = from;
    loop {
        if is_edge_exclusion(current, dir) {
            break;
        }
        let next = current as i32 + dir as i32;
        if !is_valid_square(next) {
            break;
        }
        current = next as Square;
        ray.push(current);
    }
    ray
}
