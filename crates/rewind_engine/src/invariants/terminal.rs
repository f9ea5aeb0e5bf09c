//! Terminal invariant: nothing is played on a decided board.

use super::Invariant;
use crate::{GameState, rules};

/// Invariant: no snapshot follows one that already has a winner.
///
/// Only the last snapshot of the timeline may hold a completed line.
pub struct NoPlayAfterWinInvariant;

impl Invariant<GameState> for NoPlayAfterWinInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();
        let decided_before_last = history
            .iter()
            .take(history.len().saturating_sub(1))
            .any(|entry| rules::evaluate(entry.board()).is_some());
        !decided_before_last
    }

    fn description() -> &'static str {
        "No move follows a win"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HistoryEntry, Player, Position};

    #[test]
    fn test_won_game_holds() {
        let mut game = GameState::new();
        for cell in [0, 3, 1, 4, 2] {
            game.play_cell(cell).unwrap();
        }
        assert!(game.winner().is_some());
        assert!(NoPlayAfterWinInvariant::holds(&game));
    }

    #[test]
    fn test_move_after_win_violates() {
        let mut game = GameState::new();
        for cell in [0, 3, 1, 4, 2] {
            game.play_cell(cell).unwrap();
        }
        let board = game.current_board().with_mark(Position::BottomRight, Player::O);
        game.history
            .push(HistoryEntry::after_move(board, Position::BottomRight.coordinate()));
        assert!(!NoPlayAfterWinInvariant::holds(&game));
    }
}
