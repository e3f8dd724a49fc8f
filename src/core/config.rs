//! Game configuration.
//!
//! Board size, seat offsets, token count and how many sixes chain in one
//! turn all live here and are handed to the
//! [`Track`](crate::board::Track) and [`TurnEngine`](crate::rules::TurnEngine)
//! at construction.

use serde::{Deserialize, Serialize};

use super::error::{LudoError, LudoResult};

/// Smallest supported table.
pub const MIN_PLAYERS: usize = 2;

/// Largest supported table.
pub const MAX_PLAYERS: usize = 4;

/// Seats are numbered by a `u8` [`PlayerId`](super::PlayerId).
const MAX_SEATS: usize = u8::MAX as usize;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of players taking part (2-4, and no more than `seats`).
    pub player_count: usize,

    /// Tokens owned by each player. Fixed for the whole game.
    pub tokens_per_player: usize,

    /// Number of cells on the circular track. Also the distance a token
    /// must travel from entry to reach home.
    pub track_size: usize,

    /// Number of seats around the track. Entry offsets are spaced
    /// `track_size / seats` apart.
    pub seats: usize,

    /// Faces on the die. Rolling the top face grants the special rules.
    pub die_faces: u8,

    /// Rolls a player may chain in one turn by rolling the top face.
    pub max_chances: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: 4,
            tokens_per_player: 4,
            track_size: 52,
            seats: 4,
            die_faces: 6,
            max_chances: 3,
        }
    }
}

impl GameConfig {
    /// Create a default configuration for `player_count` players.
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_players(mut self, player_count: usize) -> Self {
        self.player_count = player_count;
        self
    }

    #[must_use]
    pub fn with_tokens(mut self, tokens_per_player: usize) -> Self {
        self.tokens_per_player = tokens_per_player;
        self
    }

    #[must_use]
    pub fn with_track_size(mut self, track_size: usize) -> Self {
        self.track_size = track_size;
        self
    }

    #[must_use]
    pub fn with_seats(mut self, seats: usize) -> Self {
        self.seats = seats;
        self
    }

    /// Set the chances budget (rolls per turn while rolling the top face).
    #[must_use]
    pub fn with_max_chances(mut self, max_chances: u8) -> Self {
        self.max_chances = max_chances;
        self
    }

    /// The die value that triggers entry and extra rolls.
    #[must_use]
    pub fn max_roll(&self) -> u8 {
        self.die_faces
    }

    /// Entry cell for every seat, evenly spaced around the track.
    #[must_use]
    pub fn start_offsets(&self) -> Vec<usize> {
        let spacing = self.track_size / self.seats.max(1);
        (0..self.seats).map(|seat| seat * spacing).collect()
    }

    /// Check that the configuration describes a playable game.
    pub fn validate(&self) -> LudoResult<()> {
        if self.seats < MIN_PLAYERS {
            return Err(LudoError::invalid_config(format!(
                "at least {MIN_PLAYERS} seats required, got {}",
                self.seats
            )));
        }
        if self.seats > MAX_SEATS {
            return Err(LudoError::invalid_config(format!(
                "at most {MAX_SEATS} seats supported, got {}",
                self.seats
            )));
        }
        let max_players = self.seats.min(MAX_PLAYERS);
        if !(MIN_PLAYERS..=max_players).contains(&self.player_count) {
            return Err(LudoError::invalid_config(format!(
                "player count must be {MIN_PLAYERS}-{max_players}, got {}",
                self.player_count
            )));
        }
        if self.tokens_per_player == 0 {
            return Err(LudoError::invalid_config("each player needs at least one token"));
        }
        if self.track_size < self.seats {
            return Err(LudoError::invalid_config(format!(
                "track of {} cells cannot seat {} players",
                self.track_size, self.seats
            )));
        }
        if self.track_size % self.seats != 0 {
            return Err(LudoError::invalid_config(format!(
                "track size {} is not divisible into {} seats",
                self.track_size, self.seats
            )));
        }
        if self.die_faces < 2 {
            return Err(LudoError::invalid_config("die needs at least two faces"));
        }
        if self.max_chances == 0 {
            return Err(LudoError::invalid_config("chances budget must be at least 1"));
        }
        Ok(())
    }
}
