//! Token state machine.
//!
//! ```text
//! NotEntered --enter--> Active { cell, distance } --advance--> Home
//!                              ^          |
//!                              +----------+ (distance < track size)
//! ```
//!
//! Home is decided by the distance travelled since entry, never by the
//! cell a token happens to stand on. Overshooting the track size still
//! lands the token home.

use serde::{Deserialize, Serialize};

use super::error::{LudoError, LudoResult};
use super::player::PlayerId;
use crate::board::Track;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenState {
    /// Still waiting to enter the track.
    #[default]
    NotEntered,
    /// On the track.
    Active {
        /// Absolute cell on the shared ring.
        cell: usize,
        /// Steps travelled since entry.
        distance: usize,
    },
    /// Completed a full circuit. Terminal.
    Home,
}

impl std::fmt::Display for TokenState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenState::NotEntered => write!(f, "not entered"),
            TokenState::Active { cell, .. } => write!(f, "on cell {cell}"),
            TokenState::Home => write!(f, "home"),
        }
    }
}

/// One token owned by a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    owner: PlayerId,
    index: usize,
    state: TokenState,
}

impl Token {
    #[must_use]
    pub fn new(owner: PlayerId, index: usize) -> Self {
        Self {
            owner,
            index,
            state: TokenState::NotEntered,
        }
    }

    #[must_use]
    pub fn owner(&self) -> PlayerId {
        self.owner
    }

    /// Position of this token within its owner's collection.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn state(&self) -> TokenState {
        self.state
    }

    #[must_use]
    pub fn is_waiting(&self) -> bool {
        self.state == TokenState::NotEntered
    }

    /// On the track and still able to move.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self.state, TokenState::Active { .. })
    }

    #[must_use]
    pub fn is_home(&self) -> bool {
        self.state == TokenState::Home
    }

    /// Absolute cell, or `None` when not on the track.
    #[must_use]
    pub fn cell(&self) -> Option<usize> {
        match self.state {
            TokenState::Active { cell, .. } => Some(cell),
            _ => None,
        }
    }

    /// Steps travelled since entry, or `None` when not on the track.
    #[must_use]
    pub fn distance(&self) -> Option<usize> {
        match self.state {
            TokenState::Active { distance, .. } => Some(distance),
            _ => None,
        }
    }

    /// Put the token on its owner's start cell.
    ///
    /// Only valid from `NotEntered`; any other state is left untouched and
    /// reported as [`LudoError::InvalidOperation`].
    pub fn enter(&mut self, track: &Track) -> LudoResult<usize> {
        if !self.is_waiting() {
            return Err(LudoError::invalid_operation(
                self.owner,
                self.index,
                "enter",
                self.state,
            ));
        }
        let cell = track.start_cell(self.owner)?;
        self.state = TokenState::Active { cell, distance: 0 };
        Ok(cell)
    }

    /// Move the token `steps` forward and return its new state.
    ///
    /// Only valid from `Active`. Reaching or passing the track size sends
    /// the token home. A cell that is not on the owner's path is reported as
    /// [`LudoError::Consistency`] and leaves the token unchanged, whether or
    /// not the move would have reached home.
    pub fn advance(&mut self, steps: usize, track: &Track) -> LudoResult<TokenState> {
        let TokenState::Active { cell, distance } = self.state else {
            return Err(LudoError::invalid_operation(
                self.owner,
                self.index,
                "move",
                self.state,
            ));
        };

        // The current cell must be on the owner's path even when the move
        // ends at home.
        let next = track.step(self.owner, cell, steps)?;
        let distance = distance + steps;
        self.state = if distance >= track.size() {
            TokenState::Home
        } else {
            TokenState::Active { cell: next, distance }
        };
        Ok(self.state)
    }
}
