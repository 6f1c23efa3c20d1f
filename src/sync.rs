//! Sharing one game between threads.
//!
//! `Game` has no internal locking. A UI that touches the same game from an
//! event thread and a worker wraps it in a `SharedGame`, which serializes
//! every call behind a mutex.

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use crate::board::Game;

/// A cloneable handle to a mutex-protected `Game`.
#[derive(Clone, Debug)]
pub struct SharedGame(Arc<Mutex<Game>>);

impl SharedGame {
    /// Share a new game from the initial position.
    #[must_use]
    pub fn new() -> Self {
        SharedGame::from(Game::new())
    }

    /// Lock the game for a sequence of calls.
    #[inline]
    pub fn lock(&self) -> MutexGuard<'_, Game> {
        self.0.lock()
    }

    /// Run `f` with exclusive access to the game.
    #[inline]
    pub fn with<R>(&self, f: impl FnOnce(&mut Game) -> R) -> R {
        f(&mut self.0.lock())
    }
}

impl Default for SharedGame {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Game> for SharedGame {
    fn from(game: Game) -> Self {
        SharedGame(Arc::new(Mutex::new(game)))
    }
}
