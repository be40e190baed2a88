//! Error types for the rules core
//!
//! Faults here are programmer or caller errors that must be surfaced.
//! An unplayable cell is not a fault; it is reported as `None`.

use super::side::Side;

/// A move attempted out of turn or after the game has ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveFault {
    #[error("Wait for your enemy's turn: {side} is not to move")]
    NotYourTurn { side: Side },

    #[error("The game is over")]
    GameOver,
}

/// Rejected configuration values
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigFault {
    #[error("Enter a level between {min} and {max}, got {level}")]
    LevelOutOfRange { level: i64, min: usize, max: usize },
}
