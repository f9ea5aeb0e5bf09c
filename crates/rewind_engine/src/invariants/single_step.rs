//! Single-step invariant: each snapshot adds exactly one mark.

use super::Invariant;
use crate::{GameState, Position, Square};

/// Invariant: consecutive snapshots differ in exactly one cell.
///
/// That cell was empty before, is occupied after, and matches the
/// coordinate recorded with the later snapshot. Marks are never
/// overwritten or removed.
pub struct SingleStepInvariant;

impl Invariant<GameState> for SingleStepInvariant {
    fn holds(game: &GameState) -> bool {
        game.history().windows(2).all(|pair| {
            let (before, after) = (pair[0].board(), pair[1].board());
            let changed: Vec<Position> = Position::ALL
                .into_iter()
                .filter(|pos| before.get(*pos) != after.get(*pos))
                .collect();

            match changed.as_slice() {
                [pos] => {
                    before.get(*pos) == Square::Empty
                        && after.get(*pos) != Square::Empty
                        && *pair[1].coordinate() == Some(pos.coordinate())
                }
                _ => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark to an empty cell"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, HistoryEntry, Player};

    #[test]
    fn test_played_game_holds() {
        let mut game = GameState::new();
        for cell in [4, 0, 8, 2, 6] {
            game.play_cell(cell).unwrap();
        }
        assert!(SingleStepInvariant::holds(&game));
    }

    #[test]
    fn test_overwrite_violates() {
        let mut game = GameState::new();
        game.play_cell(4).unwrap();
        let board = Board::new().with_mark(Position::Center, Player::O);
        game.history
            .push(HistoryEntry::after_move(board, Position::Center.coordinate()));
        assert!(!SingleStepInvariant::holds(&game));
    }

    #[test]
    fn test_wrong_coordinate_violates() {
        let mut game = GameState::new();
        let board = Board::new().with_mark(Position::Center, Player::X);
        game.history
            .push(HistoryEntry::after_move(board, Position::TopLeft.coordinate()));
        assert!(!SingleStepInvariant::holds(&game));
    }

    #[test]
    fn test_unchanged_snapshot_violates() {
        let mut game = GameState::new();
        game.history
            .push(HistoryEntry::after_move(Board::new(), Position::TopLeft.coordinate()));
        assert!(!SingleStepInvariant::holds(&game));
    }
}
