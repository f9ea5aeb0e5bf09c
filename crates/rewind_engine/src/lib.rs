//! Rewind engine - tic-tac-toe with full move history and time travel.
//!
//! The engine owns a [`GameState`]: every board snapshot since the game
//! started, a pointer to the snapshot on display, and the order in which
//! the history listing is shown. A presentation layer issues intents
//! (play a cell, jump to a move, toggle the sort order) and re-renders
//! from the derived [`GameView`].
//!
//! # Example
//!
//! ```
//! use rewind_engine::GameState;
//!
//! let mut game = GameState::new();
//! game.play_cell(4)?;
//! assert_eq!(game.status().to_string(), "Next player: O");
//!
//! game.jump_to_move(0)?;
//! game.play_cell(0)?;
//! assert_eq!(game.history().len(), 2);
//! # Ok::<(), rewind_engine::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod contracts;
mod game;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod types;
mod view;

pub use action::{Intent, IntentParseError, MoveError};
pub use contracts::{Contract, PlayContract};
pub use game::GameState;
pub use history::{HistoryEntry, HistoryItem, SortOrder};
pub use invariants::{Invariant, InvariantSet, InvariantViolation, TimelineInvariants};
pub use position::{Coordinate, Position};
pub use rules::{WinningLine, evaluate};
pub use types::{Board, Player, Square};
pub use view::{GameView, Status};

/// A cell's content: empty or a player's mark.
pub type Mark = Square;
