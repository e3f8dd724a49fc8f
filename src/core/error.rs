//! Error types for the engine.

use thiserror::Error;

use super::player::PlayerId;

/// Errors raised by the track model, token state machine, and turn engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LudoError {
    /// A token operation was attempted from a state that does not allow it.
    #[error("Invalid operation '{operation}' on token {token} of {player}: token is {state}")]
    InvalidOperation {
        player: PlayerId,
        token: usize,
        operation: &'static str,
        state: String,
    },

    /// A token's recorded cell is not on its owner's path.
    #[error("Consistency error: cell {cell} is not on the path of {player}")]
    Consistency { player: PlayerId, cell: usize },

    /// A choice provider answered outside the offered menu, or picked an
    /// option that is not legal right now.
    #[error("Invalid choice {answer} for a menu of {options} options")]
    InvalidChoice { answer: usize, options: usize },

    /// A die value outside `1..=faces` reached the engine.
    #[error("Invalid roll {roll}: die has {faces} faces")]
    InvalidRoll { roll: u8, faces: u8 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A turn was requested after someone already won.
    #[error("Game is over: {0} has won")]
    GameOver(PlayerId),

    #[error("Unknown player: {0}")]
    UnknownPlayer(PlayerId),

    #[error("I/O error: {0}")]
    Io(String),
}

pub type LudoResult<T> = Result<T, LudoError>;

impl LudoError {
    pub fn invalid_operation(
        player: PlayerId,
        token: usize,
        operation: &'static str,
        state: impl std::fmt::Display,
    ) -> Self {
        Self::InvalidOperation {
            player,
            token,
            operation,
            state: state.to_string(),
        }
    }

    pub fn invalid_config(details: impl Into<String>) -> Self {
        Self::InvalidConfig(details.into())
    }
}

impl From<std::io::Error> for LudoError {
    fn from(err: std::io::Error) -> Self {
        LudoError::Io(err.to_string())
    }
}
