//! Turn resolution.
//!
//! [`TurnEngine::resolve_roll`] applies one die value to one player's
//! tokens. [`TurnEngine::play_turn`] keeps rolling while the player rolls
//! the top face and still has chances left this turn.
//!
//! Top-face roll:
//! - nothing on the track: enter the first waiting token, no prompt
//! - waiting and active tokens: the player picks enter or move
//! - nothing waiting: move an active token (auto when only one)
//!
//! Any other roll moves an active token (auto when only one) or is
//! wasted, and ends the turn.

use crate::board::Track;
use crate::core::{DiceSource, GameConfig, LudoError, LudoResult, Player, PlayerId, TurnAction};

use super::choice::{ask, ChoiceProvider, Menu, TokenChoice};

/// Result of resolving a single roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RollOutcome {
    pub action: TurnAction,
    /// Another roll is allowed within the same turn.
    pub roll_again: bool,
}

/// One roll made during a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Roll {
    pub value: u8,
    pub action: TurnAction,
}

/// Everything that happened during one player's turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnReport {
    pub player: PlayerId,
    pub rolls: Vec<Roll>,
    /// The player has every token home after this turn.
    pub won: bool,
}

/// Applies the turn rules for a fixed track and die.
#[derive(Clone, Debug)]
pub struct TurnEngine {
    track: Track,
    max_roll: u8,
    max_chances: u8,
}

impl TurnEngine {
    pub fn new(track: Track, max_roll: u8, max_chances: u8) -> LudoResult<Self> {
        if max_roll < 2 {
            return Err(LudoError::invalid_config("die needs at least two faces"));
        }
        if max_chances == 0 {
            return Err(LudoError::invalid_config("chances budget must be at least 1"));
        }
        Ok(Self {
            track,
            max_roll,
            max_chances,
        })
    }

    pub fn from_config(config: &GameConfig) -> LudoResult<Self> {
        Self::new(Track::from_config(config)?, config.max_roll(), config.max_chances)
    }

    #[must_use]
    pub fn track(&self) -> &Track {
        &self.track
    }

    #[must_use]
    pub fn max_roll(&self) -> u8 {
        self.max_roll
    }

    #[must_use]
    pub fn max_chances(&self) -> u8 {
        self.max_chances
    }

    /// Apply `roll` to `player`.
    ///
    /// `chances_used` counts top-face rolls already made earlier in this
    /// turn. A top-face roll grants another roll while the budget lasts.
    pub fn resolve_roll(
        &self,
        player: &mut Player,
        roll: u8,
        chances_used: u8,
        chooser: &mut dyn ChoiceProvider,
    ) -> LudoResult<RollOutcome> {
        if !(1..=self.max_roll).contains(&roll) {
            return Err(LudoError::InvalidRoll {
                roll,
                faces: self.max_roll,
            });
        }

        let steps = usize::from(roll);
        let top_face = roll == self.max_roll;

        let action = if top_face {
            match (player.first_waiting(), player.has_movable()) {
                (Some(waiting), false) => player.enter(waiting, &self.track)?,
                (Some(waiting), true) => {
                    let menu = Menu::EnterOrMove { steps };
                    if ask(chooser, player, &menu)? == Menu::ENTER {
                        player.enter(waiting, &self.track)?
                    } else {
                        self.move_one(player, steps, chooser)?
                    }
                }
                (None, true) => self.move_one(player, steps, chooser)?,
                (None, false) => TurnAction::Wasted,
            }
        } else if player.has_movable() {
            self.move_one(player, steps, chooser)?
        } else {
            TurnAction::Wasted
        };

        let roll_again =
            top_face && chances_used.saturating_add(1) < self.max_chances && !player.has_won();
        log::debug!(
            "{} rolled {}: {} (roll again: {})",
            player.id(),
            roll,
            action,
            roll_again
        );

        Ok(RollOutcome { action, roll_again })
    }

    /// Roll and resolve until the turn ends.
    pub fn play_turn(
        &self,
        player: &mut Player,
        dice: &mut dyn DiceSource,
        chooser: &mut dyn ChoiceProvider,
    ) -> LudoResult<TurnReport> {
        let mut rolls = Vec::new();
        let mut chances_used = 0;

        loop {
            chooser.before_roll(player, rolls.len())?;
            let value = dice.roll(self.max_roll);
            let outcome = self.resolve_roll(player, value, chances_used, chooser)?;
            rolls.push(Roll {
                value,
                action: outcome.action,
            });
            if value == self.max_roll {
                chances_used += 1;
            }
            if !outcome.roll_again {
                break;
            }
        }

        Ok(TurnReport {
            player: player.id(),
            rolls,
            won: player.has_won(),
        })
    }

    /// Move one active token by `steps`, asking only when there is a choice.
    fn move_one(
        &self,
        player: &mut Player,
        steps: usize,
        chooser: &mut dyn ChoiceProvider,
    ) -> LudoResult<TurnAction> {
        let movable = player.movable_tokens();
        let Some(&first) = movable.first() else {
            return Ok(TurnAction::Wasted);
        };
        let token = if player.has_single_movable() {
            first
        } else {
            let candidates: Vec<TokenChoice> = movable
                .iter()
                .filter_map(|&token| {
                    player
                        .token(token)
                        .and_then(|t| t.cell())
                        .map(|cell| TokenChoice { token, cell })
                })
                .collect();
            let menu = Menu::PickToken {
                steps,
                candidates: candidates.clone(),
            };
            candidates[ask(chooser, player, &menu)?].token
        };
        player.advance(token, steps, &self.track)
    }
}
