//! Core model: players, tokens, configuration, errors, dice, and state.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;
pub mod token;

pub use action::{ActionRecord, TurnAction};
pub use config::GameConfig;
pub use error::{LudoError, LudoResult};
pub use player::{PlayerId, PlayerMap};
pub use rng::{DiceSource, GameRng, ScriptedDice};
pub use state::{BoardSnapshot, GameState, Player, PlayerSnapshot, TokenIndices};
pub use token::{Token, TokenState};
