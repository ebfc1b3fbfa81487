//! Per-game serialization of move execution.

use crate::{GameFileStore, GameId, StoreError};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, instrument};
use ultimate_tictactoe::{Game, Move};

/// Routes moves to the store, one at a time per game.
///
/// Each game id maps to its own lock; a move holds that lock from load to
/// save. Moves on different games run in parallel. Cloning shares the lock
/// table. Entries are never removed, so one id always maps to one lock.
#[derive(Debug, Clone)]
pub struct GameDispatcher {
    store: GameFileStore,
    locks: Arc<Mutex<HashMap<GameId, Arc<Mutex<()>>>>>,
}

/// Recovers the guard from a poisoned lock; the guarded data is `()` or
/// the lock table, neither of which a panic can leave half-updated.
fn relock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl GameDispatcher {
    /// Creates a dispatcher over `store`.
    #[instrument(skip(store))]
    pub fn new(store: GameFileStore) -> Self {
        Self {
            store,
            locks: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// The underlying store.
    pub fn store(&self) -> &GameFileStore {
        &self.store
    }

    /// The lock for one game, created on first use.
    fn lock_for(&self, game_id: &str) -> Arc<Mutex<()>> {
        let mut locks = relock(&self.locks);
        locks.entry(game_id.to_string()).or_default().clone()
    }

    /// Runs `f` while holding the game's lock.
    fn exclusive<T>(&self, game_id: &str, f: impl FnOnce(&GameFileStore) -> T) -> T {
        let lock = self.lock_for(game_id);
        let _guard = relock(&lock);
        debug!(game_id, "Acquired game lock");
        f(&self.store)
    }

    /// Creates a new game under the game's lock.
    ///
    /// # Errors
    ///
    /// See [`GameFileStore::start_new_game`].
    #[instrument(skip(self))]
    pub fn start_new_game(&self, game_id: &str) -> Result<Game, StoreError> {
        self.exclusive(game_id, |store| store.start_new_game(game_id))
    }

    /// Applies a move; no other move on the same game runs meanwhile.
    ///
    /// # Errors
    ///
    /// See [`GameFileStore::take_turn`].
    #[instrument(skip(self), fields(player = %mov.player, corner = %mov.corner, cell = %mov.cell))]
    pub fn take_turn(&self, game_id: &str, mov: Move) -> Result<Game, StoreError> {
        self.exclusive(game_id, |store| store.take_turn(game_id, mov))
    }

    /// Reads a game under its lock, so a half-applied move is never seen.
    ///
    /// # Errors
    ///
    /// See [`GameFileStore::load_game`].
    #[instrument(skip(self))]
    pub fn load_game(&self, game_id: &str) -> Result<Option<Game>, StoreError> {
        self.exclusive(game_id, |store| store.load_game(game_id))
    }

    /// Deletes a game.
    ///
    /// The game's lock stays in the table, so a move already waiting on it
    /// and any later use of the same id still share one lock.
    ///
    /// # Errors
    ///
    /// See [`GameFileStore::delete_game`].
    #[instrument(skip(self))]
    pub fn delete_game(&self, game_id: &str) -> Result<(), StoreError> {
        self.exclusive(game_id, |store| store.delete_game(game_id))
    }

    /// Ids of all stored games.
    ///
    /// # Errors
    ///
    /// See [`GameFileStore::list_games`].
    pub fn list_games(&self) -> Result<Vec<GameId>, StoreError> {
        self.store.list_games()
    }
}
