//! # chess1
//!
//! Game sessions on top of the `chess_engine` rules crate: a [`GameSession`] owns the
//! active board and its move history, and [`run`] drives one from a [`DriverConfig`].

pub mod config;
pub mod error;
pub mod session;

pub use config::DriverConfig;
pub use error::{SessionError, SessionResult};
pub use session::{Coordinate, GameSession, SessionSummary};

use chess_engine::MoveStatus;

/// Play the configured moves, then take back the configured number of them
///
/// Stops at the first move that is malformed, impossible or rejected by the engine.
pub fn run(config: &DriverConfig) -> SessionResult<GameSession> {
    let mut session = GameSession::new();
    for text in &config.moves {
        let status = session.play(text)?;
        if status != MoveStatus::Done {
            return Err(SessionError::Rejected {
                text: text.clone(),
                status,
            });
        }
    }
    for _ in 0..config.undo {
        session.undo()?;
    }
    Ok(session)
}
