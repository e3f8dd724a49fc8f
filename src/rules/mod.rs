//! Turn rules.
//!
//! - `choice`: menus offered to players and the validated re-prompt loop
//! - `engine`: single-roll resolution and the per-turn chances budget
//! - `start`: the opening roll-off that decides who plays first

pub mod choice;
pub mod engine;
pub mod start;

pub use choice::{ask, ChoiceProvider, FirstOption, Menu, ScriptedChoices, TokenChoice};
pub use engine::{Roll, RollOutcome, TurnEngine, TurnReport};
pub use start::{pick_starting_player, roll_for_start, StartingRoll};
