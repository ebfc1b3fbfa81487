//! One JSON file per game.

use crate::{StoreConfig, StoreError, StoreErrorKind};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};
use ultimate_tictactoe::{Engine, Game, Move};

/// Identifier of a stored game; also its file stem.
pub type GameId = String;

/// Stores games as pretty-printed JSON under `<data_dir>/games/<id>.json`.
///
/// The store does no locking. Concurrent moves on the same game must go
/// through [`GameDispatcher`](crate::GameDispatcher).
#[derive(Debug, Clone)]
pub struct GameFileStore {
    games_dir: PathBuf,
}

impl GameFileStore {
    /// Creates a store rooted at the configured data directory.
    ///
    /// The directory is created on first save, not here.
    #[instrument(skip(config), fields(data_dir = %config.data_dir().display()))]
    pub fn new(config: &StoreConfig) -> Self {
        let games_dir = config.games_dir();
        info!(games_dir = %games_dir.display(), "Creating GameFileStore");
        Self { games_dir }
    }

    /// Directory holding the game files.
    pub fn games_dir(&self) -> &Path {
        &self.games_dir
    }

    /// Ids may only use ASCII letters, digits, `-` and `_`.
    fn check_id(game_id: &str) -> Result<(), StoreError> {
        let valid = !game_id.is_empty()
            && game_id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if valid {
            Ok(())
        } else {
            warn!(game_id, "Rejecting unusable game id");
            Err(StoreError::new(
                StoreErrorKind::InvalidId,
                format!("Invalid game id '{}'", game_id),
            ))
        }
    }

    fn path_for(&self, game_id: &str) -> Result<PathBuf, StoreError> {
        Self::check_id(game_id)?;
        Ok(self.games_dir.join(format!("{}.json", game_id)))
    }

    /// Creates and saves a fresh game.
    ///
    /// # Errors
    ///
    /// Fails with [`StoreErrorKind::AlreadyExists`] if the id is taken.
    #[instrument(skip(self))]
    pub fn start_new_game(&self, game_id: &str) -> Result<Game, StoreError> {
        let path = self.path_for(game_id)?;
        if path.exists() {
            warn!(game_id, "Game already exists");
            return Err(StoreError::new(
                StoreErrorKind::AlreadyExists,
                format!("Game '{}' already exists", game_id),
            ));
        }

        let game = Game::new();
        self.save_game(game_id, &game)?;
        info!(game_id, "Started new game");
        Ok(game)
    }

    /// Writes `game` to its file, replacing any previous version.
    ///
    /// The file is written beside the target and renamed over it, so a
    /// reader never sees a half-written game.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on I/O or serialization failure.
    #[instrument(skip(self, game), fields(moves = game.history().len()))]
    pub fn save_game(&self, game_id: &str, game: &Game) -> Result<(), StoreError> {
        let path = self.path_for(game_id)?;
        std::fs::create_dir_all(&self.games_dir)?;

        let json = game.to_json_pretty()?;
        let staging = path.with_extension("json.tmp");
        std::fs::write(&staging, json)?;
        std::fs::rename(&staging, &path)?;

        debug!(path = %path.display(), "Game saved");
        Ok(())
    }

    /// Reads a game back. Returns `None` if no game has that id.
    ///
    /// Loaded games are checked with [`Game::validate`].
    ///
    /// # Errors
    ///
    /// Fails with [`StoreErrorKind::CorruptData`] if the file does not
    /// decode or the decoded game breaks an invariant.
    #[instrument(skip(self))]
    pub fn load_game(&self, game_id: &str) -> Result<Option<Game>, StoreError> {
        let path = self.path_for(game_id)?;
        let json = match std::fs::read_to_string(&path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(game_id, "Game not found");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let game = Game::from_json(&json)?;
        if let Err(violations) = game.validate() {
            warn!(game_id, count = violations.len(), "Stored game failed validation");
            return Err(StoreError::invalid_game(game_id, &violations));
        }

        debug!(game_id, moves = game.history().len(), "Game loaded");
        Ok(Some(game))
    }

    /// Loads a game, applies one move, and saves the result.
    ///
    /// A rejected move leaves the file untouched.
    ///
    /// # Errors
    ///
    /// [`StoreErrorKind::NotFound`] for an unknown id,
    /// [`StoreErrorKind::InvalidMove`] when the engine rejects the move,
    /// or any load/save failure.
    #[instrument(skip(self), fields(player = %mov.player, corner = %mov.corner, cell = %mov.cell))]
    pub fn take_turn(&self, game_id: &str, mov: Move) -> Result<Game, StoreError> {
        let mut game = self
            .load_game(game_id)?
            .ok_or_else(|| StoreError::not_found(game_id))?;

        Engine::take_turn(&mut game, mov)?;
        self.save_game(game_id, &game)?;

        info!(game_id, outcome = %game.outcome(), "Turn stored");
        Ok(game)
    }

    /// Removes a game.
    ///
    /// # Errors
    ///
    /// Fails with [`StoreErrorKind::NotFound`] if no game has that id.
    #[instrument(skip(self))]
    pub fn delete_game(&self, game_id: &str) -> Result<(), StoreError> {
        let path = self.path_for(game_id)?;
        match std::fs::remove_file(&path) {
            Ok(()) => {
                info!(game_id, "Game deleted");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StoreError::not_found(game_id))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Ids of all stored games, sorted.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the games directory exists but cannot be read.
    #[instrument(skip(self))]
    pub fn list_games(&self) -> Result<Vec<GameId>, StoreError> {
        let entries = match std::fs::read_dir(&self.games_dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut ids = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "json")
                && let Some(stem) = path.file_stem().and_then(|s| s.to_str())
                && Self::check_id(stem).is_ok()
            {
                ids.push(stem.to_string());
            }
        }
        ids.sort();

        debug!(count = ids.len(), "Listed games");
        Ok(ids)
    }
}
