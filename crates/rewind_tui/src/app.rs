//! Application state and key handling.

use crate::input::{digit_cell, move_cursor};
use crossterm::event::KeyCode;
use rewind_engine::{GameState, GameView, Intent, Position, SortOrder};
use tracing::debug;

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    Board,
    /// Arrow keys move the history selection.
    History,
}

/// Whether the event loop keeps running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep going.
    Continue,
    /// Leave the UI.
    Quit,
}

/// Main application state.
///
/// The game itself lives in the engine; the app only adds what the
/// terminal needs on top of it (cursor, focus, selected history row).
#[derive(Debug, Clone)]
pub struct App {
    game: GameState,
    cursor: Position,
    focus: Focus,
    selected: usize,
}

impl App {
    /// Creates a new application.
    pub fn new(sort_order: SortOrder) -> Self {
        Self {
            game: GameState::with_sort_order(sort_order),
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
        }
    }

    /// The engine state.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Board cell under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Selected row of the history listing, in display order.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Snapshot to render.
    pub fn view(&self) -> GameView {
        self.game.view()
    }

    /// Handles one key press.
    pub fn handle_key(&mut self, key: KeyCode) -> Flow {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return Flow::Quit,
            KeyCode::Tab => self.toggle_focus(),
            KeyCode::Char('s') => self.dispatch(Intent::ToggleSort),
            KeyCode::Char('r') => self.dispatch(Intent::Reset),
            _ => {
                if let Some(cell) = digit_cell(key) {
                    self.cursor = Position::from_index(cell).unwrap_or(self.cursor);
                    self.dispatch(Intent::Play(cell));
                } else {
                    match self.focus {
                        Focus::Board => self.handle_board_key(key),
                        Focus::History => self.handle_history_key(key),
                    }
                }
            }
        }
        Flow::Continue
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.dispatch(Intent::Play(self.cursor.to_index()));
            }
            _ => self.cursor = move_cursor(self.cursor, key),
        }
    }

    fn handle_history_key(&mut self, key: KeyCode) {
        let len = self.game.history().len();
        match key {
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => self.selected = (self.selected + 1).min(len - 1),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(item) = self.game.history_items().get(self.selected) {
                    let index = *item.index();
                    self.dispatch(Intent::Jump(index));
                }
            }
            _ => {}
        }
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Board => Focus::History,
            Focus::History => Focus::Board,
        };
        self.sync_selection();
    }

    /// Sends an intent to the engine; rejected intents change nothing.
    fn dispatch(&mut self, intent: Intent) {
        match self.game.apply(intent) {
            Ok(()) => debug!(%intent, current_move = self.game.current_move(), "Intent applied"),
            Err(e) => debug!(%intent, error = %e, "Intent ignored"),
        }
        self.sync_selection();
    }

    /// Points the history selection at the current entry.
    fn sync_selection(&mut self) {
        self.selected = self
            .game
            .history_items()
            .iter()
            .position(|item| *item.is_current())
            .unwrap_or(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press_all(app: &mut App, keys: &[KeyCode]) {
        for key in keys {
            assert_eq!(app.handle_key(*key), Flow::Continue);
        }
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(SortOrder::Ascending);
        assert_eq!(app.handle_key(KeyCode::Char('q')), Flow::Quit);
        assert_eq!(app.handle_key(KeyCode::Esc), Flow::Quit);
    }

    #[test]
    fn test_digits_play_cells() {
        let mut app = App::new(SortOrder::Ascending);
        press_all(&mut app, &[KeyCode::Char('5'), KeyCode::Char('1')]);

        assert_eq!(app.game().history().len(), 3);
        assert_eq!(app.cursor(), Position::TopLeft);
        assert_eq!(app.view().status(), "Next player: X");
    }

    #[test]
    fn test_cursor_play() {
        let mut app = App::new(SortOrder::Ascending);
        press_all(&mut app, &[KeyCode::Up, KeyCode::Left, KeyCode::Enter]);

        assert_eq!(app.cursor(), Position::TopLeft);
        assert!(!app.game().current_board().is_empty(Position::TopLeft));
    }

    #[test]
    fn test_occupied_cell_is_ignored() {
        let mut app = App::new(SortOrder::Ascending);
        press_all(&mut app, &[KeyCode::Enter, KeyCode::Enter]);
        assert_eq!(app.game().history().len(), 2);
    }

    #[test]
    fn test_history_navigation_jumps() {
        let mut app = App::new(SortOrder::Ascending);
        press_all(&mut app, &[KeyCode::Char('5'), KeyCode::Char('1'), KeyCode::Char('9')]);
        assert_eq!(app.selected(), 3);

        press_all(&mut app, &[KeyCode::Tab, KeyCode::Up, KeyCode::Up, KeyCode::Enter]);
        assert_eq!(app.focus(), Focus::History);
        assert_eq!(app.game().current_move(), 1);
        assert_eq!(app.selected(), 1);

        // Board keys go to the history pane while it has focus.
        press_all(&mut app, &[KeyCode::Down, KeyCode::Down, KeyCode::Down, KeyCode::Down]);
        assert_eq!(app.selected(), 3);
        assert_eq!(app.game().current_move(), 1);
    }

    #[test]
    fn test_descending_selection_follows_display_order() {
        let mut app = App::new(SortOrder::Descending);
        press_all(&mut app, &[KeyCode::Char('5'), KeyCode::Char('1')]);
        // Newest entry is listed first.
        assert_eq!(app.selected(), 0);

        press_all(&mut app, &[KeyCode::Tab, KeyCode::Down, KeyCode::Down, KeyCode::Enter]);
        assert_eq!(app.game().current_move(), 0);
        assert_eq!(app.selected(), 2);
    }

    #[test]
    fn test_sort_and_reset_keys() {
        let mut app = App::new(SortOrder::Ascending);
        press_all(&mut app, &[KeyCode::Char('5'), KeyCode::Char('s')]);
        assert_eq!(app.game().sort_order(), SortOrder::Descending);
        assert_eq!(app.selected(), 0);

        press_all(&mut app, &[KeyCode::Char('r')]);
        assert_eq!(app.game().history().len(), 1);
        assert_eq!(app.game().sort_order(), SortOrder::Descending);
    }
}
