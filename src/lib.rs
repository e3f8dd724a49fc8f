//! # ludo-engine
//!
//! A turn-driven Ludo-style race game for 2-4 players sharing one terminal.
//!
//! ## Design Principles
//!
//! 1. **No hidden globals**: track size, seat offsets, token count and the
//!    chances budget all come from `GameConfig`.
//!
//! 2. **Distance, not position, decides home**: a token is home once it has
//!    travelled one full circuit from its entry cell, whatever cell that
//!    leaves it on.
//!
//! 3. **I/O at the edges**: dice and player decisions are traits
//!    (`DiceSource`, `ChoiceProvider`). The rules never touch a terminal.
//!
//! ## Modules
//!
//! - `core`: players, tokens, configuration, errors, dice, state
//! - `board`: the circular track and per-player paths
//! - `rules`: turn resolution, player choices, start-player roll-off
//! - `games`: the playable Ludo game driver
//! - `console`: line-oriented prompts and board rendering

pub mod board;
pub mod console;
pub mod core;
pub mod games;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    ActionRecord, BoardSnapshot, DiceSource, GameConfig, GameRng, GameState, LudoError,
    LudoResult, Player, PlayerId, PlayerMap, ScriptedDice, Token, TokenState, TurnAction,
};

pub use crate::board::Track;

pub use crate::rules::{
    ChoiceProvider, FirstOption, Menu, ScriptedChoices, StartingRoll, TurnEngine, TurnReport,
};

pub use crate::games::ludo::{LudoGame, LudoGameBuilder};
