//! Store error types.

use derive_more::{Display, Error};
use ultimate_tictactoe::MoveError;
use ultimate_tictactoe::invariants::InvariantViolation;

/// Broad category of a [`StoreError`], for callers that branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum StoreErrorKind {
    /// No game is stored under the requested id.
    #[display("not found")]
    NotFound,
    /// A game is already stored under the requested id.
    #[display("already exists")]
    AlreadyExists,
    /// The engine rejected the move.
    #[display("invalid move")]
    InvalidMove,
    /// The stored file does not decode, or decodes to an impossible game.
    #[display("corrupt data")]
    CorruptData,
    /// The game id is not a usable file name.
    #[display("invalid id")]
    InvalidId,
    /// Filesystem failure.
    #[display("io")]
    Io,
    /// Configuration could not be read or parsed.
    #[display("config")]
    Config,
}

/// Store error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Store error ({}): {} at {}:{}", kind, message, file, line)]
pub struct StoreError {
    /// Category.
    pub kind: StoreErrorKind,
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
    /// The engine's rejection, when `kind` is [`StoreErrorKind::InvalidMove`].
    pub move_error: Option<MoveError>,
}

impl StoreError {
    /// Creates a new store error with caller location tracking.
    #[track_caller]
    pub fn new(kind: StoreErrorKind, message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
            move_error: None,
        }
    }

    /// The error category.
    pub fn kind(&self) -> StoreErrorKind {
        self.kind
    }

    /// The engine's rejection, if this error wraps one.
    pub fn move_error(&self) -> Option<&MoveError> {
        self.move_error.as_ref()
    }

    /// Shorthand for a missing game.
    #[track_caller]
    pub fn not_found(game_id: &str) -> Self {
        Self::new(StoreErrorKind::NotFound, format!("No game '{}'", game_id))
    }

    /// Shorthand for a game that fails validation after loading.
    #[track_caller]
    pub fn invalid_game(game_id: &str, violations: &[InvariantViolation]) -> Self {
        let details = violations
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        Self::new(
            StoreErrorKind::CorruptData,
            format!("Game '{}' failed validation: {}", game_id, details),
        )
    }
}

impl From<std::io::Error> for StoreError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(StoreErrorKind::Io, format!("I/O error: {}", err))
    }
}

impl From<serde_json::Error> for StoreError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(StoreErrorKind::CorruptData, format!("JSON error: {}", err))
    }
}

impl From<MoveError> for StoreError {
    #[track_caller]
    fn from(err: MoveError) -> Self {
        let mut store_err = Self::new(StoreErrorKind::InvalidMove, err.to_string());
        store_err.move_error = Some(err);
        store_err
    }
}
