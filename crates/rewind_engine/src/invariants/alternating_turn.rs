//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::{GameState, Player, Square};

/// Invariant: players alternate turns.
///
/// The mark added to reach snapshot `i` is X for odd `i` and O for even
/// `i`, because the player on move `i - 1` made it.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        game.history()
            .iter()
            .enumerate()
            .skip(1)
            .all(|(index, entry)| {
                let expected = Square::Occupied(Player::for_move(index - 1));
                match entry.coordinate() {
                    Some(coordinate) => {
                        let cell = coordinate.row * 3 + coordinate.col;
                        entry.board().squares().get(cell) == Some(&expected)
                    }
                    None => false,
                }
            })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
