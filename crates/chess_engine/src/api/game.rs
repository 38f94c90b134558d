//! Game lifecycle management
//!
//! Functions for creating and resetting games.

use crate::board::Board;
use crate::history::MoveLog;

/// Create a new game with initial position
pub fn new_game() -> Board {
    Board::create_standard_board()
}

/// Reset the game to starting position
///
/// Replaces the board wholesale and empties the history, keeping the log's
/// starting position.
pub fn reset_game(board: &mut Board, log: &mut MoveLog) {
    *board = log.start().clone();
    log.clear();
}
