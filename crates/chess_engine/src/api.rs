//! Public API for the chess engine
//!
//! Free functions covering what a board UI needs from the engine: create a game, list the
//! legal moves of a clicked piece, attempt a move between two squares, ask for the game
//! state. They wrap [`Board`](crate::Board), [`Player`](crate::Player) and
//! [`MoveFactory`](crate::MoveFactory) so a caller never has to combine them by hand.
//!
//! ## Module Organization
//!
//! - `game` - Game lifecycle (new_game, reset_game)
//! - `moves` - Move execution and validation (do_move, is_legal_move, legal_moves_from)
//! - `state` - Game state queries (get_game_state)

mod game;
mod moves;
mod state;

pub use game::{new_game, reset_game};
pub use moves::{do_move, do_promotion_move, is_legal_move, legal_moves_from};
pub use state::get_game_state;
