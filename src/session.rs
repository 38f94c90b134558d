//! Game session
//!
//! [`GameSession`] is the caller-held game: the active [`Board`] and the [`MoveLog`] that
//! produced it. The engine keeps no state of its own, so every accepted move replaces the
//! board wholesale and appends to the log, and undo swaps in the board rebuilt from the
//! log.
//!
//! ```
//! use chess1::GameSession;
//! use chess_engine::{GameState, MoveStatus};
//!
//! let mut session = GameSession::new();
//! assert_eq!(session.play("e2e4").unwrap(), MoveStatus::Done);
//! assert_eq!(session.state(), GameState::InProgress);
//! session.undo().unwrap();
//! assert!(session.history().is_empty());
//! ```

use serde::Serialize;
use tracing::{debug, info};

use chess_engine::board_utils::{is_valid_square, square_at, square_name};
use chess_engine::{
    Board, Color, GameState, Move, MoveFactory, MoveLog, MoveStatus, PieceType, Square,
};

use crate::error::{SessionError, SessionResult};

/// A move written as `<from><to>[promotion]`, e.g. `g1f3` or `a7a8n`
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Coordinate {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceType>,
}

impl Coordinate {
    /// Parse coordinate notation; the promotion letter may be either case
    pub fn parse(text: &str) -> SessionResult<Coordinate> {
        let invalid = || SessionError::InvalidCoordinate {
            text: text.to_string(),
        };
        let text = text.trim();
        if !text.is_ascii() || !(4..=5).contains(&text.len()) {
            return Err(invalid());
        }
        let from = square_at(&text[0..2]).ok_or_else(invalid)?;
        let to = square_at(&text[2..4]).ok_or_else(invalid)?;
        let promotion = match text[4..].chars().next() {
            None => None,
            Some(letter) => Some(
                PieceType::from_letter(letter)
                    .filter(|kind| kind.is_promotion_target())
                    .ok_or_else(invalid)?,
            ),
        };
        Ok(Coordinate {
            from,
            to,
            promotion,
        })
    }
}

/// Snapshot of a session for presentation layers
#[derive(Clone, Debug, Serialize)]
pub struct SessionSummary {
    pub side_to_move: Color,
    pub state: GameState,
    pub in_check: bool,
    pub castled: [bool; 2],
    pub en_passant_target: Option<&'static str>,
    pub legal_moves: usize,
    pub moves: Vec<String>,
    pub board: String,
}

/// Active board plus the history that produced it
#[derive(Clone, Debug)]
pub struct GameSession {
    board: Board,
    history: MoveLog,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// New game from the standard position
    pub fn new() -> Self {
        Self::from_board(Board::create_standard_board())
    }

    /// New game from a custom position; undo and reset return to it
    pub fn from_board(board: Board) -> Self {
        GameSession {
            history: MoveLog::starting_from(board.clone()),
            board,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn history(&self) -> &MoveLog {
        &self.history
    }

    pub fn state(&self) -> GameState {
        self.board.current_player().game_state()
    }

    /// Attempt the move of the piece on `from` to `to`, promoting to a queen if it promotes
    ///
    /// Returns the engine's verdict; only [`MoveStatus::Done`] changes the session.
    ///
    /// # Errors
    ///
    /// - [`SessionError::GameOver`] once checkmate or stalemate is on the board
    /// - [`SessionError::NoSuchMove`] when the squares do not describe a move
    pub fn try_move(&mut self, from: Square, to: Square) -> SessionResult<MoveStatus> {
        self.ensure_in_play()?;
        let mv = MoveFactory::create_move(&self.board, from, to)
            .ok_or_else(|| no_such_move(from, to))?;
        Ok(self.apply(mv))
    }

    /// Like [`GameSession::try_move`] with an explicit promotion piece
    pub fn try_promotion(
        &mut self,
        from: Square,
        to: Square,
        kind: PieceType,
    ) -> SessionResult<MoveStatus> {
        self.ensure_in_play()?;
        let mv = MoveFactory::create_promotion_move(&self.board, from, to, kind)
            .ok_or_else(|| no_such_move(from, to))?;
        Ok(self.apply(mv))
    }

    /// Play a move given in coordinate notation
    pub fn play(&mut self, text: &str) -> SessionResult<MoveStatus> {
        let coordinate = Coordinate::parse(text)?;
        match coordinate.promotion {
            Some(kind) => self.try_promotion(coordinate.from, coordinate.to, kind),
            None => self.try_move(coordinate.from, coordinate.to),
        }
    }

    /// Take back the last move, returning it
    ///
    /// # Errors
    ///
    /// [`SessionError::NothingToUndo`] on an empty history, [`SessionError::UndoRejected`]
    /// if the history no longer replays.
    pub fn undo(&mut self) -> SessionResult<Move> {
        let last = *self.history.last().ok_or(SessionError::NothingToUndo)?;
        let transition = self.board.current_player().unmake_move(&last, &self.history);
        if !transition.is_done() {
            return Err(SessionError::UndoRejected {
                status: transition.status(),
            });
        }
        self.board = transition.into_board();
        self.history.pop();
        info!(mv = %last, remaining = self.history.len(), "move taken back");
        Ok(last)
    }

    /// Back to the starting position with an empty history
    pub fn reset(&mut self) {
        self.board = self.history.start().clone();
        self.history.clear();
        info!("session reset");
    }

    pub fn summary(&self) -> SessionSummary {
        let player = self.board.current_player();
        SessionSummary {
            side_to_move: self.board.side_to_move(),
            state: player.game_state(),
            in_check: player.is_in_check(),
            castled: [
                self.board.has_castled(Color::White),
                self.board.has_castled(Color::Black),
            ],
            en_passant_target: self.board.en_passant_target().map(square_name),
            legal_moves: player.legal_moves().len(),
            moves: self.history.moves().iter().map(ToString::to_string).collect(),
            board: self.board.to_string(),
        }
    }

    fn ensure_in_play(&self) -> SessionResult<()> {
        let state = self.state();
        if state.is_terminal() {
            debug!(?state, "move attempted after the game ended");
            return Err(SessionError::GameOver { state });
        }
        Ok(())
    }

    fn apply(&mut self, mv: Move) -> MoveStatus {
        let transition = self.board.current_player().make_move(&mv);
        let status = transition.status();
        if !status.is_done() {
            debug!(%mv, ?status, "move not applied");
            return status;
        }
        self.board = transition.into_board();
        self.history.push(mv);
        info!(mv = %mv, ply = self.history.len(), state = ?self.state(), "move played");
        status
    }
}

fn no_such_move(from: Square, to: Square) -> SessionError {
    let name = |square: Square| {
        if is_valid_square(square as i32) {
            square_name(square).to_string()
        } else {
            square.to_string()
        }
    };
    SessionError::NoSuchMove {
        from: name(from),
        to: name(to),
    }
}
