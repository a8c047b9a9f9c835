//! First-class invariants for tic-tac-toe.
//!
//! Invariants are logical properties that hold after every accepted move.
//! They are checked in debug builds and can be tested independently.

use crate::Game;
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

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check_one<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn into_result(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        check_one::<S, I3>(state, &mut violations);
        into_result(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        into_result(violations)
    }
}

pub mod alternating_tokens;
pub mod consistent_outcome;
pub mod occupancy;

pub use alternating_tokens::AlternatingTokensInvariant;
pub use consistent_outcome::ConsistentOutcomeInvariant;
pub use occupancy::OccupancyMatchesTurnsInvariant;

/// All game invariants as a composable set.
pub type GameInvariants = (
    OccupancyMatchesTurnsInvariant,
    AlternatingTokensInvariant,
    ConsistentOutcomeInvariant,
);

/// Logs and debug-asserts every game invariant.
pub(crate) fn assert_invariants(game: &Game) {
    if let Err(violations) = GameInvariants::check_all(game) {
        for violation in &violations {
            warn!(invariant = %violation.description, "Invariant violated");
        }
        debug_assert!(false, "Game invariants violated: {:?}", violations);
    }
}
