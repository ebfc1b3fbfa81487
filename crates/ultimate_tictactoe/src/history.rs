//! Append-only log of pre-move snapshots.

use crate::GameState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The state as it stood immediately before a move, stamped with the
/// time that move was made.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct Snapshot {
    #[serde(flatten)]
    state: GameState,
    /// Seconds since the Unix epoch.
    next_turn_timestamp: i64,
}

impl Snapshot {
    /// The state before the move.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// When the move out of this state was made, in seconds since the epoch.
    pub fn next_turn_timestamp(&self) -> i64 {
        self.next_turn_timestamp
    }

    /// The move time as a UTC date, if the timestamp is in range.
    pub fn recorded_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.next_turn_timestamp, 0)
    }
}

/// Ordered snapshots, oldest first.
///
/// Entry `i` is the state before move `i + 1`. Only the engine appends;
/// entries are never edited or reordered.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    entries: Vec<Snapshot>,
}

impl History {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, snapshot: Snapshot) {
        self.entries.push(snapshot);
    }

    /// Number of recorded moves.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True before the first move.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshot before move `index + 1`.
    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.entries.get(index)
    }

    /// The most recent snapshot.
    pub fn last(&self) -> Option<&Snapshot> {
        self.entries.last()
    }

    /// Iterates oldest first.
    pub fn iter(&self) -> std::slice::Iter<'_, Snapshot> {
        self.entries.iter()
    }

    /// All snapshots as a slice.
    pub fn as_slice(&self) -> &[Snapshot] {
        &self.entries
    }

    /// Seconds between each pair of consecutive moves.
    ///
    /// One shorter than the history; empty with fewer than two moves.
    pub fn turn_durations(&self) -> Vec<i64> {
        self.entries
            .windows(2)
            .map(|pair| pair[1].next_turn_timestamp - pair[0].next_turn_timestamp)
            .collect()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Snapshot;
    type IntoIter = std::slice::Iter<'a, Snapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
