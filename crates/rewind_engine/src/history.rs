//! History snapshots and the derived history listing.

use crate::{Board, Coordinate};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One snapshot in the game's history.
///
/// The first entry is always the empty board with no coordinate. Every
/// later entry records the cell played to reach it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Board after the move.
    board: Board,
    /// Cell played to produce `board`.
    coordinate: Option<Coordinate>,
}

impl HistoryEntry {
    /// The pre-game snapshot.
    pub fn genesis() -> Self {
        Self {
            board: Board::new(),
            coordinate: None,
        }
    }

    /// A snapshot produced by playing `coordinate`.
    pub fn after_move(board: Board, coordinate: Coordinate) -> Self {
        Self {
            board,
            coordinate: Some(coordinate),
        }
    }
}

/// Display order of the history listing.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display,
)]
pub enum SortOrder {
    /// Game start first.
    #[default]
    Ascending,
    /// Latest move first.
    Descending,
}

impl SortOrder {
    /// Returns the opposite order.
    pub fn toggle(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    /// True for [`SortOrder::Ascending`].
    pub fn is_ascending(self) -> bool {
        self == SortOrder::Ascending
    }
}

/// One row of the history listing, ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Getters, derive_new::new, Serialize, Deserialize)]
pub struct HistoryItem {
    /// "Go to game start" or "Go to move #N".
    label: String,
    /// History index this row jumps to.
    index: usize,
    /// Cell played to reach this entry.
    coordinate: Option<Coordinate>,
    /// Whether this entry is the one currently displayed.
    is_current: bool,
}

impl HistoryItem {
    /// Builds the row for history index `index`.
    pub fn describe(index: usize, entry: &HistoryEntry, current_move: usize) -> Self {
        let label = if index > 0 {
            format!("Go to move #{}", index)
        } else {
            "Go to game start".to_string()
        };
        Self::new(label, index, entry.coordinate, index == current_move)
    }
}

impl std::fmt::Display for HistoryItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.coordinate {
            Some(coordinate) => write!(f, "{} {}", self.label, coordinate),
            None => write!(f, "{}", self.label),
        }
    }
}
