//! First-class invariants over the game timeline.
//!
//! Invariants are logical properties that must hold after every
//! transition. They are testable independently and back the play
//! contract's postcondition.

pub mod alternating_turn;
pub mod history_shape;
pub mod single_step;
pub mod terminal;

pub use alternating_turn::AlternatingTurnInvariant;
pub use history_shape::{CursorInvariant, GenesisInvariant};
pub use single_step::SingleStepInvariant;
pub use terminal::NoPlayAfterWinInvariant;

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
/// Implemented for tuples of up to five invariants. Every member is
/// checked; all violations are reported.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>),+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
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
impl_invariant_set!(I1, I2, I3, I4, I5);

/// Every invariant of a [`GameState`](crate::GameState).
pub type TimelineInvariants = (
    GenesisInvariant,
    CursorInvariant,
    SingleStepInvariant,
    AlternatingTurnInvariant,
    NoPlayAfterWinInvariant,
);
