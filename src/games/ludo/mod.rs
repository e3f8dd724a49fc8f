//! Ludo: race every token once around the track.
//!
//! - 2-4 players, each with a fixed number of tokens (4 by default)
//! - A token enters on the top face of the die and goes home after one
//!   full circuit
//! - Rolling the top face grants another roll, up to the chances budget
//! - First player with every token home wins

mod game;

pub use game::{LudoGame, LudoGameBuilder};
