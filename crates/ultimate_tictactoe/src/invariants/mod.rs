//! First-class invariants for Ultimate Tic-Tac-Toe.
//!
//! Invariants are logical properties that must hold for every reachable
//! game. The engine checks them after each move in debug builds, and
//! [`Game::validate`](crate::Game::validate) checks them on demand, e.g.
//! after loading a game from storage.

use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description)
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of two to four invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();

                $(
                    if !$inv::holds(state) {
                        warn!(invariant = $inv::description(), "Invariant violated");
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+

                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

pub mod active_corner_open;
pub mod alternating_turn;
pub mod history_consistent;
pub mod status_consistent;

pub use active_corner_open::ActiveCornerOpenInvariant;
pub use alternating_turn::AlternatingTurnInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use status_consistent::StatusConsistentInvariant;

/// All game invariants as a composable set.
pub type GameInvariants = (
    StatusConsistentInvariant,
    ActiveCornerOpenInvariant,
    AlternatingTurnInvariant,
    HistoryConsistentInvariant,
);
