use std::sync::{Arc, Mutex, MutexGuard};

use thiserror::Error;

use crate::errors::GameError;
use crate::game::{Game, GameSnapshot, GameStatus, MoveOutcome};
use crate::player::Player;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("game lock poisoned")]
    Poisoned,
    #[error(transparent)]
    Game(#[from] GameError),
}

/// A game shared between threads. Each request runs start to finish under
/// one lock, so callers never observe a half-applied move.
#[derive(Debug, Clone)]
pub struct SharedGame {
    inner: Arc<Mutex<Game>>,
}

impl SharedGame {
    pub fn new(game: Game) -> Self {
        Self {
            inner: Arc::new(Mutex::new(game)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Game>, SessionError> {
        self.inner.lock().map_err(|_| {
            tracing::error!("game lock poisoned");
            SessionError::Poisoned
        })
    }

    pub fn request_move(
        &self,
        player: &Player,
        origin_x: i32,
        origin_y: i32,
        dest_x: i32,
        dest_y: i32,
    ) -> Result<MoveOutcome, SessionError> {
        let mut game = self.lock()?;
        Ok(game.request_move(player, origin_x, origin_y, dest_x, dest_y)?)
    }

    pub fn resign(&self, player: &Player) -> Result<(), SessionError> {
        Ok(self.lock()?.resign(player)?)
    }

    pub fn forfeit(&self, player: &Player) -> Result<(), SessionError> {
        Ok(self.lock()?.forfeit(player)?)
    }

    pub fn status(&self) -> Result<GameStatus, SessionError> {
        Ok(self.lock()?.status())
    }

    pub fn snapshot(&self) -> Result<GameSnapshot, SessionError> {
        Ok(self.lock()?.snapshot())
    }

    /// Runs `f` against the game while holding the lock.
    pub fn with_game<R>(&self, f: impl FnOnce(&Game) -> R) -> Result<R, SessionError> {
        let game = self.lock()?;
        Ok(f(&game))
    }
}
