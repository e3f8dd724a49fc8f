//! Deciding who plays first.
//!
//! Players roll once each in seat order. The first to roll the top face
//! starts immediately; otherwise the highest roll starts, with ties going
//! to the lowest seat. There is no re-roll.

use crate::core::{DiceSource, PlayerId};

/// Outcome of the opening roll-off.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StartingRoll {
    pub first: PlayerId,
    /// Rolls made, in seat order. Stops early on a top-face roll.
    pub rolls: Vec<(PlayerId, u8)>,
}

/// Pick the starting player from rolls given in seat order.
///
/// Returns `None` for an empty slice.
///
/// ```
/// use ludo_engine::core::PlayerId;
/// use ludo_engine::rules::pick_starting_player;
///
/// assert_eq!(pick_starting_player(&[3, 5, 5, 1], 6), Some(PlayerId::new(1)));
/// assert_eq!(pick_starting_player(&[3, 6, 6, 1], 6), Some(PlayerId::new(1)));
/// ```
#[must_use]
pub fn pick_starting_player(rolls: &[u8], max_roll: u8) -> Option<PlayerId> {
    if let Some(seat) = rolls.iter().position(|&r| r == max_roll) {
        return Some(PlayerId::new(seat as u8));
    }
    // max_by_key keeps the last maximum; reverse so the lowest seat wins ties.
    rolls
        .iter()
        .enumerate()
        .rev()
        .max_by_key(|&(_, &r)| r)
        .map(|(seat, _)| PlayerId::new(seat as u8))
}

/// Roll for every seat in order and decide who starts.
pub fn roll_for_start(
    player_count: usize,
    max_roll: u8,
    dice: &mut dyn DiceSource,
) -> StartingRoll {
    let mut rolls = Vec::with_capacity(player_count);

    for player in PlayerId::all(player_count) {
        let value = dice.roll(max_roll);
        log::debug!("{player} rolled {value} for the start");
        rolls.push((player, value));
        if value == max_roll {
            break;
        }
    }

    let values: Vec<u8> = rolls.iter().map(|&(_, value)| value).collect();
    let first = pick_starting_player(&values, max_roll).unwrap_or(PlayerId::new(0));
    log::info!("{first} starts");

    StartingRoll { first, rolls }
}
