//! The circular track.
//!
//! All players share one ring of `size` cells numbered `0..size`. Each
//! player enters the ring at their own start offset and walks it in the
//! same direction, so a player's path is the ring rotated to begin at that
//! offset:
//!
//! ```
//! use ludo_engine::board::Track;
//! use ludo_engine::core::PlayerId;
//!
//! let track = Track::new(8, 2).unwrap();
//! assert_eq!(track.path_for(PlayerId::new(1)).unwrap(), vec![4, 5, 6, 7, 0, 1, 2, 3]);
//! ```
//!
//! The track is immutable once built and owns no token state.

use crate::core::{GameConfig, LudoError, LudoResult, PlayerId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Track {
    size: usize,
    offsets: Vec<usize>,
}

impl Track {
    /// Build a track of `size` cells with `seats` evenly spaced entries.
    pub fn new(size: usize, seats: usize) -> LudoResult<Self> {
        if seats == 0 || size < seats {
            return Err(LudoError::invalid_config(format!(
                "track of {size} cells cannot seat {seats} players"
            )));
        }
        let spacing = size / seats;
        Self::with_offsets(size, (0..seats).map(|seat| seat * spacing).collect())
    }

    /// Build a track from a validated game configuration.
    pub fn from_config(config: &GameConfig) -> LudoResult<Self> {
        config.validate()?;
        Self::with_offsets(config.track_size, config.start_offsets())
    }

    /// Build a track with an explicit start-offset table, one entry per seat.
    pub fn with_offsets(size: usize, offsets: Vec<usize>) -> LudoResult<Self> {
        if size == 0 {
            return Err(LudoError::invalid_config("track must have at least one cell"));
        }
        if offsets.is_empty() {
            return Err(LudoError::invalid_config("track needs at least one seat"));
        }
        if let Some(bad) = offsets.iter().find(|&&offset| offset >= size) {
            return Err(LudoError::invalid_config(format!(
                "start offset {bad} is off a track of {size} cells"
            )));
        }
        Ok(Self { size, offsets })
    }

    /// Number of cells on the ring. A token is home after travelling this far.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of seats the offset table covers.
    #[must_use]
    pub fn seats(&self) -> usize {
        self.offsets.len()
    }

    /// Cell where `player`'s tokens enter the ring.
    pub fn start_cell(&self, player: PlayerId) -> LudoResult<usize> {
        self.offsets
            .get(player.index())
            .copied()
            .ok_or(LudoError::UnknownPlayer(player))
    }

    /// Ordered cells visited by `player`'s tokens, starting at their entry.
    ///
    /// Element `k` is `(start + k) % size`; the result is a permutation of
    /// every cell on the track.
    pub fn path_for(&self, player: PlayerId) -> LudoResult<Vec<usize>> {
        let start = self.start_cell(player)?;
        Ok((0..self.size).map(|k| (start + k) % self.size).collect())
    }

    /// Absolute cell reached after travelling `distance` steps from entry.
    pub fn cell_at(&self, player: PlayerId, distance: usize) -> LudoResult<usize> {
        let start = self.start_cell(player)?;
        Ok((start + distance) % self.size)
    }

    /// Absolute cell reached by moving `steps` forward from `cell` along
    /// `player`'s path.
    ///
    /// Fails with [`LudoError::Consistency`] if `cell` is not on the path.
    pub fn step(&self, player: PlayerId, cell: usize, steps: usize) -> LudoResult<usize> {
        let path = self.path_for(player)?;
        let index = path
            .iter()
            .position(|&c| c == cell)
            .ok_or(LudoError::Consistency { player, cell })?;
        Ok(path[(index + steps) % self.size])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn standard() -> Track {
        Track::new(52, 4).unwrap()
    }

    #[test]
    fn test_standard_offsets() {
        let track = standard();
        assert_eq!(track.size(), 52);
        assert_eq!(track.seats(), 4);
        assert_eq!(track.start_cell(PlayerId::new(0)).unwrap(), 0);
        assert_eq!(track.start_cell(PlayerId::new(1)).unwrap(), 13);
        assert_eq!(track.start_cell(PlayerId::new(3)).unwrap(), 39);
    }

    #[test]
    fn test_path_wraps_around() {
        let track = standard();
        let path = track.path_for(PlayerId::new(3)).unwrap();

        assert_eq!(path.len(), 52);
        assert_eq!(path[0], 39);
        assert_eq!(path[12], 51);
        assert_eq!(path[13], 0);
        assert_eq!(path[51], 38);
    }

    #[test]
    fn test_path_is_pure() {
        let track = standard();
        let player = PlayerId::new(2);
        assert_eq!(track.path_for(player).unwrap(), track.path_for(player).unwrap());
    }

    #[test]
    fn test_step_from_entry() {
        let track = standard();
        assert_eq!(track.step(PlayerId::new(0), 0, 6).unwrap(), 6);
        assert_eq!(track.step(PlayerId::new(1), 13, 6).unwrap(), 19);
    }

    #[test]
    fn test_step_wraps_modulo_size() {
        let track = standard();
        assert_eq!(track.step(PlayerId::new(2), 50, 5).unwrap(), 3);
        assert_eq!(track.step(PlayerId::new(0), 0, 52).unwrap(), 0);
    }

    #[test]
    fn test_step_off_track_is_consistency_error() {
        let track = standard();
        let err = track.step(PlayerId::new(0), 99, 1).unwrap_err();
        assert_eq!(
            err,
            LudoError::Consistency {
                player: PlayerId::new(0),
                cell: 99
            }
        );
    }

    #[test]
    fn test_unknown_player() {
        let track = standard();
        assert_eq!(
            track.path_for(PlayerId::new(4)).unwrap_err(),
            LudoError::UnknownPlayer(PlayerId::new(4))
        );
    }

    #[test]
    fn test_cell_at_matches_step() {
        let track = standard();
        let player = PlayerId::new(1);
        let start = track.start_cell(player).unwrap();
        for distance in 0..52 {
            assert_eq!(
                track.cell_at(player, distance).unwrap(),
                track.step(player, start, distance).unwrap()
            );
        }
    }

    #[test]
    fn test_explicit_offsets() {
        let track = Track::with_offsets(10, vec![0, 7]).unwrap();
        assert_eq!(track.path_for(PlayerId::new(1)).unwrap()[..4], [7, 8, 9, 0]);
        assert!(Track::with_offsets(10, vec![0, 10]).is_err());
        assert!(Track::with_offsets(0, vec![0]).is_err());
        assert!(Track::with_offsets(10, vec![]).is_err());
    }

    #[test]
    fn test_from_config_validates() {
        let config = GameConfig::default();
        assert_eq!(Track::from_config(&config).unwrap(), standard());
        assert!(Track::from_config(&config.with_players(9)).is_err());
    }

    proptest! {
        #[test]
        fn prop_path_is_permutation(size in 4usize..120, seats in 1usize..5, seat in 0usize..5) {
            prop_assume!(seats <= size && seat < seats);
            let track = Track::new(size, seats).unwrap();
            let mut path = track.path_for(PlayerId::new(seat as u8)).unwrap();

            prop_assert_eq!(path.len(), size);
            path.sort_unstable();
            prop_assert_eq!(path, (0..size).collect::<Vec<_>>());
        }

        #[test]
        fn prop_step_is_modular(seat in 0u8..4, distance in 0usize..52, steps in 0usize..200) {
            let track = Track::new(52, 4).unwrap();
            let player = PlayerId::new(seat);
            let cell = track.cell_at(player, distance).unwrap();
            prop_assert_eq!(
                track.step(player, cell, steps).unwrap(),
                track.cell_at(player, distance + steps).unwrap()
            );
        }
    }
}
