//! Shape invariants: how history starts and where the cursor may point.

use super::Invariant;
use crate::{Board, GameState};

/// Invariant: entry 0 is the empty board with no coordinate.
pub struct GenesisInvariant;

impl Invariant<GameState> for GenesisInvariant {
    fn holds(game: &GameState) -> bool {
        match game.history().first() {
            Some(entry) => *entry.board() == Board::new() && entry.coordinate().is_none(),
            None => false,
        }
    }

    fn description() -> &'static str {
        "History starts with the empty board"
    }
}

/// Invariant: the current move indexes a recorded snapshot.
pub struct CursorInvariant;

impl Invariant<GameState> for CursorInvariant {
    fn holds(game: &GameState) -> bool {
        game.current_move() < game.history().len()
    }

    fn description() -> &'static str {
        "Current move points into history"
    }
}
