//! The game engine: history, the current-move pointer and display order.
//!
//! All state lives in [`GameState`]. It changes only through
//! [`GameState::play_cell`], [`GameState::jump_to_move`],
//! [`GameState::toggle_sort_order`] and [`GameState::reset`]; everything the
//! presentation layer shows is derived on read.

use crate::contracts::{Contract, PlayContract};
use crate::history::{HistoryEntry, HistoryItem, SortOrder};
use crate::rules::{self, WinningLine};
use crate::view::{GameView, Status};
use crate::{Board, Coordinate, Intent, MoveError, Player, Position};
use tracing::{debug, instrument};

/// Complete engine state for one game session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Snapshots; entry 0 is the empty board.
    pub(crate) history: Vec<HistoryEntry>,
    /// Index of the displayed snapshot.
    pub(crate) current_move: usize,
    /// Display order of the history listing.
    pub(crate) sort_order: SortOrder,
}

impl GameState {
    /// Creates a new game: one empty snapshot, ascending listing.
    #[instrument]
    pub fn new() -> Self {
        Self::with_sort_order(SortOrder::Ascending)
    }

    /// Creates a new game with the given listing order.
    pub fn with_sort_order(sort_order: SortOrder) -> Self {
        Self {
            history: vec![HistoryEntry::genesis()],
            current_move: 0,
            sort_order,
        }
    }

    // ─────────────────────────────────────────────────────────
    //  Transitions
    // ─────────────────────────────────────────────────────────

    /// Plays cell `index` (0-8) of the displayed board for the current player.
    ///
    /// Any history beyond the displayed move is discarded before the new
    /// snapshot is appended, and the new snapshot becomes current.
    ///
    /// # Errors
    ///
    /// Rejects out-of-range cells, occupied cells and any play once the
    /// displayed board has a winner. A rejected play leaves the state
    /// untouched.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn play_cell(&mut self, index: usize) -> Result<Coordinate, MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        let next = match self.played(pos) {
            Ok(next) => next,
            Err(e) => {
                debug!(error = %e, "Play rejected");
                return Err(e);
            }
        };

        *self = next;
        debug!(
            position = %pos,
            current_move = self.current_move,
            history_len = self.history.len(),
            "Cell played"
        );
        Ok(pos.coordinate())
    }

    /// Returns the state after playing `pos`, without touching `self`.
    ///
    /// # Errors
    ///
    /// Same rejections as [`GameState::play_cell`], plus an invariant
    /// violation if the postcondition fails in debug builds.
    pub fn played(&self, pos: Position) -> Result<Self, MoveError> {
        PlayContract::pre(self, &pos)?;

        let player = self.current_player();
        let board = self.current_board().with_mark(pos, player);

        let mut history = self.history[..=self.current_move].to_vec();
        history.push(HistoryEntry::after_move(board, pos.coordinate()));
        let next = Self {
            current_move: history.len() - 1,
            history,
            sort_order: self.sort_order,
        };

        #[cfg(debug_assertions)]
        PlayContract::post(self, &next)?;

        Ok(next)
    }

    /// Displays history entry `index`. History itself is not modified.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::NoSuchMove`] if `index` is not a recorded entry.
    #[instrument(skip(self), fields(from = self.current_move))]
    pub fn jump_to_move(&mut self, index: usize) -> Result<(), MoveError> {
        if index >= self.history.len() {
            let e = MoveError::NoSuchMove {
                requested: index,
                len: self.history.len(),
            };
            debug!(error = %e, "Jump rejected");
            return Err(e);
        }
        self.current_move = index;
        debug!(current_move = index, "Jumped");
        Ok(())
    }

    /// Flips the history listing order.
    #[instrument(skip(self))]
    pub fn toggle_sort_order(&mut self) {
        self.sort_order = self.sort_order.toggle();
        debug!(sort_order = %self.sort_order, "Sort order toggled");
    }

    /// Starts over from an empty board, keeping the listing order.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::with_sort_order(self.sort_order);
        debug!("Game reset");
    }

    /// Dispatches a presentation-layer intent.
    ///
    /// # Errors
    ///
    /// Propagates the rejection of the underlying operation.
    pub fn apply(&mut self, intent: Intent) -> Result<(), MoveError> {
        match intent {
            Intent::Play(index) => self.play_cell(index).map(|_| ()),
            Intent::Jump(index) => self.jump_to_move(index),
            Intent::ToggleSort => {
                self.toggle_sort_order();
                Ok(())
            }
            Intent::Reset => {
                self.reset();
                Ok(())
            }
        }
    }

    // ─────────────────────────────────────────────────────────
    //  Stored state
    // ─────────────────────────────────────────────────────────

    /// All recorded snapshots.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Index of the displayed snapshot.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Listing order.
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    // ─────────────────────────────────────────────────────────
    //  Derived state
    // ─────────────────────────────────────────────────────────

    /// Player to move on the displayed board.
    pub fn current_player(&self) -> Player {
        Player::for_move(self.current_move)
    }

    /// The displayed board.
    pub fn current_board(&self) -> &Board {
        self.history[self.current_move].board()
    }

    /// Completed line on the displayed board, if any.
    pub fn winner(&self) -> Option<WinningLine> {
        rules::evaluate(self.current_board())
    }

    /// True when the displayed board is full with no winner.
    pub fn is_draw(&self) -> bool {
        rules::is_draw(self.current_board())
    }

    /// Status of the displayed board.
    pub fn status(&self) -> Status {
        match self.winner() {
            Some(line) => Status::Winner(line.player),
            None => Status::NextPlayer(self.current_player()),
        }
    }

    /// History listing in display order.
    pub fn history_items(&self) -> Vec<HistoryItem> {
        let items = self
            .history
            .iter()
            .enumerate()
            .map(|(index, entry)| HistoryItem::describe(index, entry, self.current_move));

        match self.sort_order {
            SortOrder::Ascending => items.collect(),
            SortOrder::Descending => items.rev().collect(),
        }
    }

    /// Everything the presentation layer renders, as one snapshot.
    pub fn view(&self) -> GameView {
        GameView::new(
            *self.current_board(),
            self.status().to_string(),
            self.winner(),
            self.is_draw(),
            self.history_items(),
            self.current_move,
            self.sort_order,
        )
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    fn play_all(game: &mut GameState, cells: &[usize]) {
        for &cell in cells {
            game.play_cell(cell).unwrap();
        }
    }

    #[test]
    fn test_new_game() {
        let game = GameState::new();
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.current_move(), 0);
        assert_eq!(game.current_player(), Player::X);
        assert!(game.sort_order().is_ascending());
        assert_eq!(game.status().to_string(), "Next player: X");
    }

    #[test]
    fn test_play_center() {
        let mut game = GameState::new();
        let coordinate = game.play_cell(4).unwrap();

        assert_eq!(coordinate, Coordinate { row: 1, col: 1 });
        assert_eq!(game.history().len(), 2);
        assert_eq!(game.current_move(), 1);
        assert_eq!(game.status().to_string(), "Next player: O");
        assert_eq!(
            game.current_board().get(Position::Center),
            Square::Occupied(Player::X)
        );
        assert_eq!(*game.history()[1].coordinate(), Some(coordinate));
    }

    #[test]
    fn test_occupied_cell_is_noop() {
        let mut game = GameState::new();
        game.play_cell(4).unwrap();
        let before = game.clone();

        assert_eq!(
            game.play_cell(4),
            Err(MoveError::SquareOccupied(Position::Center))
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_out_of_bounds_is_noop() {
        let mut game = GameState::new();
        assert_eq!(game.play_cell(9), Err(MoveError::OutOfBounds(9)));
        assert_eq!(game, GameState::new());
    }

    #[test]
    fn test_play_after_win_is_noop() {
        let mut game = GameState::new();
        play_all(&mut game, &[0, 3, 1, 4, 2]);
        let line = game.winner().unwrap();
        assert_eq!(line.player, Player::X);
        assert_eq!(line.cells, [Position::TopLeft, Position::TopCenter, Position::TopRight]);

        let before = game.clone();
        for cell in [5, 6, 7, 8] {
            assert_eq!(game.play_cell(cell), Err(MoveError::GameOver));
        }
        assert_eq!(game, before);
        assert_eq!(game.status().to_string(), "Winner: X");
    }

    #[test]
    fn test_jump_keeps_history() {
        let mut game = GameState::new();
        play_all(&mut game, &[0, 1, 2]);
        game.jump_to_move(1).unwrap();

        assert_eq!(game.current_move(), 1);
        assert_eq!(game.history().len(), 4);
        assert_eq!(game.current_player(), Player::O);
        assert_eq!(game.current_board().occupied_count(), 1);

        game.jump_to_move(3).unwrap();
        assert_eq!(game.current_board().occupied_count(), 3);
    }

    #[test]
    fn test_play_after_jump_truncates() {
        let mut game = GameState::new();
        play_all(&mut game, &[0, 1, 2, 3, 4]);
        game.jump_to_move(2).unwrap();
        game.play_cell(8).unwrap();

        assert_eq!(game.history().len(), 4);
        assert_eq!(game.current_move(), 3);
        let board = game.current_board();
        assert_eq!(board.get(Position::BottomRight), Square::Occupied(Player::X));
        assert!(board.is_empty(Position::TopRight));
        assert!(board.is_empty(Position::MiddleLeft));
    }

    #[test]
    fn test_jump_out_of_range_is_rejected() {
        let mut game = GameState::new();
        game.play_cell(0).unwrap();
        let before = game.clone();

        assert_eq!(
            game.jump_to_move(2),
            Err(MoveError::NoSuchMove { requested: 2, len: 2 })
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_jump_back_to_won_position_allows_new_branch() {
        let mut game = GameState::new();
        play_all(&mut game, &[0, 3, 1, 4, 2]);
        game.jump_to_move(4).unwrap();

        assert!(game.winner().is_none());
        game.play_cell(8).unwrap();
        assert_eq!(game.history().len(), 6);
        assert!(game.winner().is_none());
    }

    #[test]
    fn test_toggle_sort_only_changes_order() {
        let mut game = GameState::new();
        play_all(&mut game, &[4, 0]);
        let board = *game.current_board();
        let status = game.status();

        game.toggle_sort_order();

        assert_eq!(game.sort_order(), SortOrder::Descending);
        assert_eq!(*game.current_board(), board);
        assert_eq!(game.status(), status);
        let indices: Vec<usize> = game.history_items().iter().map(|i| *i.index()).collect();
        assert_eq!(indices, vec![2, 1, 0]);
    }

    #[test]
    fn test_history_items_labels_and_current_flag() {
        let mut game = GameState::new();
        play_all(&mut game, &[4, 0, 8]);
        game.jump_to_move(1).unwrap();

        let items = game.history_items();
        let labels: Vec<String> = items.iter().map(|i| i.to_string()).collect();
        assert_eq!(
            labels,
            vec![
                "Go to game start",
                "Go to move #1 (1, 1)",
                "Go to move #2 (0, 0)",
                "Go to move #3 (2, 2)",
            ]
        );
        let current: Vec<usize> = items
            .iter()
            .filter(|i| *i.is_current())
            .map(|i| *i.index())
            .collect();
        assert_eq!(current, vec![1]);
    }

    #[test]
    fn test_reset_keeps_sort_order() {
        let mut game = GameState::new();
        play_all(&mut game, &[4, 0]);
        game.toggle_sort_order();
        game.reset();

        assert_eq!(game.history().len(), 1);
        assert_eq!(game.current_move(), 0);
        assert_eq!(game.sort_order(), SortOrder::Descending);
    }

    #[test]
    fn test_apply_dispatches_intents() {
        let mut game = GameState::new();
        for intent in [Intent::Play(4), Intent::Play(0), Intent::Jump(1), Intent::ToggleSort] {
            game.apply(intent).unwrap();
        }
        assert_eq!(game.current_move(), 1);
        assert_eq!(game.history().len(), 3);
        assert_eq!(game.sort_order(), SortOrder::Descending);

        assert!(game.apply(Intent::Play(4)).is_err());
        game.apply(Intent::Reset).unwrap();
        assert_eq!(game.history().len(), 1);
    }
}
