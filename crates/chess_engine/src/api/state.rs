//! Game state queries

use crate::board::Board;
use crate::player::GameState;

/// Get current game state (in progress, check, checkmate, stalemate) for the side to move
pub fn get_game_state(board: &Board) -> GameState {
    board.current_player().game_state()
}
