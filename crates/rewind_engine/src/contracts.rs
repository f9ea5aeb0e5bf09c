//! Contract-based validation for plays.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} play {Q}. Preconditions always run; the engine checks
//! postconditions in debug builds.

use crate::invariants::{InvariantSet, TimelineInvariants};
use crate::{GameState, MoveError, Position, rules};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: the displayed board has no winner yet.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails with [`MoveError::GameOver`] once a line is complete.
    #[instrument(skip(game))]
    pub fn check(game: &GameState) -> Result<(), MoveError> {
        match rules::check_winner(game.current_board()) {
            Some(_) => Err(MoveError::GameOver),
            None => Ok(()),
        }
    }
}

/// Precondition: the target square is empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails with [`MoveError::SquareOccupied`] for a taken square.
    #[instrument(skip(game))]
    pub fn check(pos: Position, game: &GameState) -> Result<(), MoveError> {
        if game.current_board().is_empty(pos) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(pos))
        }
    }
}

/// Composite precondition, checked in order: game not over, square empty.
pub struct LegalPlay;

impl LegalPlay {
    /// Validates all preconditions for a play.
    pub fn check(pos: Position, game: &GameState) -> Result<(), MoveError> {
        GameNotOver::check(game)?;
        SquareIsEmpty::check(pos, game)?;
        Ok(())
    }
}

/// Contract for playing a cell.
///
/// Postconditions:
/// - every timeline invariant holds
/// - exactly one snapshot follows the pre-play current move
pub struct PlayContract;

impl Contract<GameState, Position> for PlayContract {
    fn pre(game: &GameState, pos: &Position) -> Result<(), MoveError> {
        LegalPlay::check(*pos, game)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), MoveError> {
        TimelineInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Postcondition failed");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })?;

        let expected_len = before.current_move() + 2;
        if after.history().len() != expected_len || after.current_move() != expected_len - 1 {
            warn!(
                expected_len,
                actual_len = after.history().len(),
                "History not truncated before append"
            );
            return Err(MoveError::InvariantViolation(
                "History not truncated before append".to_string(),
            ));
        }
        Ok(())
    }
}
