//! What a single die roll did.
//!
//! Every roll a player makes resolves to exactly one [`TurnAction`]. The
//! game keeps them as [`ActionRecord`]s so a finished game can be replayed
//! or inspected.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use super::token::TokenState;

/// The resolution of one die roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnAction {
    /// A waiting token was put on its start cell.
    Enter { token: usize, cell: usize },
    /// An active token moved forward.
    Move {
        token: usize,
        steps: usize,
        to: TokenState,
    },
    /// Nothing could use the roll.
    Wasted,
}

impl TurnAction {
    /// Token touched by this action, if any.
    #[must_use]
    pub fn token(&self) -> Option<usize> {
        match self {
            TurnAction::Enter { token, .. } | TurnAction::Move { token, .. } => Some(*token),
            TurnAction::Wasted => None,
        }
    }

    /// Whether this action sent a token home.
    #[must_use]
    pub fn reached_home(&self) -> bool {
        matches!(self, TurnAction::Move { to: TokenState::Home, .. })
    }
}

impl std::fmt::Display for TurnAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TurnAction::Enter { token, cell } => {
                write!(f, "token {} enters at cell {cell}", token + 1)
            }
            TurnAction::Move { token, steps, to } => {
                write!(f, "token {} moves {steps} and is {to}", token + 1)
            }
            TurnAction::Wasted => write!(f, "no token can move"),
        }
    }
}

/// A recorded roll with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who rolled.
    pub player: PlayerId,

    /// The die value.
    pub roll: u8,

    /// What the roll did.
    pub action: TurnAction,

    /// Round number when the roll happened (starts at 1).
    pub turn: u32,

    /// Roll number within the player's turn (starts at 0).
    pub sequence: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(player: PlayerId, roll: u8, action: TurnAction, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            roll,
            action,
            turn,
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_token() {
        assert_eq!(TurnAction::Enter { token: 2, cell: 13 }.token(), Some(2));
        assert_eq!(
            TurnAction::Move { token: 1, steps: 4, to: TokenState::Home }.token(),
            Some(1)
        );
        assert_eq!(TurnAction::Wasted.token(), None);
    }

    #[test]
    fn test_reached_home() {
        let home = TurnAction::Move { token: 0, steps: 6, to: TokenState::Home };
        let moved = TurnAction::Move {
            token: 0,
            steps: 6,
            to: TokenState::Active { cell: 6, distance: 6 },
        };

        assert!(home.reached_home());
        assert!(!moved.reached_home());
        assert!(!TurnAction::Wasted.reached_home());
    }

    #[test]
    fn test_action_display() {
        assert_eq!(
            TurnAction::Enter { token: 0, cell: 13 }.to_string(),
            "token 1 enters at cell 13"
        );
        assert_eq!(
            TurnAction::Move { token: 3, steps: 5, to: TokenState::Active { cell: 18, distance: 5 } }
                .to_string(),
            "token 4 moves 5 and is on cell 18"
        );
    }

    #[test]
    fn test_action_record_serialization() {
        let record = ActionRecord::new(
            PlayerId::new(1),
            6,
            TurnAction::Enter { token: 0, cell: 13 },
            2,
            0,
        );

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ActionRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
