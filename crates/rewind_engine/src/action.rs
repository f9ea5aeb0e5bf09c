//! Intents issued by the presentation layer, and why the engine rejects them.
//!
//! Intents are plain values so they can be scripted, logged and replayed
//! independently of whatever produced them.

use crate::Position;
use serde::{Deserialize, Serialize};

/// Something the player asked the engine to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Intent {
    /// Place the current player's mark on cell 0-8 of the displayed board.
    #[display("play {}", _0)]
    Play(usize),
    /// Display history entry N.
    #[display("jump {}", _0)]
    Jump(usize),
    /// Flip the history listing order.
    #[display("toggle sort")]
    ToggleSort,
    /// Start over from an empty board.
    #[display("reset")]
    Reset,
}

/// Error that can occur when applying an intent.
///
/// A rejected intent never changes the game state.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The displayed board already has a winner.
    #[display("Game is already over")]
    GameOver,

    /// Cell index outside 0-8.
    #[display("Cell {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// History index outside the recorded history.
    #[display("No move #{} (history has {} entries)", requested, len)]
    NoSuchMove {
        /// Index that was asked for.
        requested: usize,
        /// Current history length.
        len: usize,
    },

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

/// Error parsing a scripted intent token.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Unrecognized intent '{}' (expected 0-8, j<N>, s or r)", token)]
pub struct IntentParseError {
    /// The offending token.
    pub token: String,
}

impl std::str::FromStr for Intent {
    type Err = IntentParseError;

    /// Parses `4` (play), `j2` / `jump:2` (jump), `s` / `sort`, `r` / `reset`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_lowercase();
        let err = || IntentParseError {
            token: s.trim().to_string(),
        };

        match token.as_str() {
            "s" | "sort" => return Ok(Intent::ToggleSort),
            "r" | "reset" => return Ok(Intent::Reset),
            _ => {}
        }

        if let Some(rest) = token
            .strip_prefix("jump:")
            .or_else(|| token.strip_prefix('j'))
        {
            return rest.parse().map(Intent::Jump).map_err(|_| err());
        }

        token
            .strip_prefix("play:")
            .unwrap_or(&token)
            .parse()
            .map(Intent::Play)
            .map_err(|_| err())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tokens() {
        assert_eq!("4".parse::<Intent>(), Ok(Intent::Play(4)));
        assert_eq!("play:7".parse::<Intent>(), Ok(Intent::Play(7)));
        assert_eq!("j2".parse::<Intent>(), Ok(Intent::Jump(2)));
        assert_eq!("jump:10".parse::<Intent>(), Ok(Intent::Jump(10)));
        assert_eq!("S".parse::<Intent>(), Ok(Intent::ToggleSort));
        assert_eq!("reset".parse::<Intent>(), Ok(Intent::Reset));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = "jx".parse::<Intent>().unwrap_err();
        assert_eq!(err.token, "jx");
        assert!("".parse::<Intent>().is_err());
        assert!("-1".parse::<Intent>().is_err());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            MoveError::SquareOccupied(Position::Center).to_string(),
            "Square Center is already occupied"
        );
        assert_eq!(
            MoveError::NoSuchMove { requested: 5, len: 3 }.to_string(),
            "No move #5 (history has 3 entries)"
        );
    }
}
