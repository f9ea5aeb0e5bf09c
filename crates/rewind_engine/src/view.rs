//! Read-only view of the game for the presentation layer.

use crate::history::{HistoryItem, SortOrder};
use crate::rules::WinningLine;
use crate::{Board, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Status line of the displayed board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// A line is complete.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// The game goes on (or the board is full without a line).
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

/// Snapshot of everything the presentation layer renders.
///
/// Rebuilt from [`GameState`](crate::GameState) after every transition;
/// never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Getters, derive_new::new, Serialize, Deserialize)]
pub struct GameView {
    /// Displayed board.
    board: Board,
    /// "Winner: X" or "Next player: O".
    status: String,
    /// Cells to highlight.
    winning_line: Option<WinningLine>,
    /// Board full with no line.
    is_draw: bool,
    /// History listing in display order.
    history: Vec<HistoryItem>,
    /// Index of the displayed snapshot.
    current_move: usize,
    /// Listing order.
    sort_order: SortOrder,
}
