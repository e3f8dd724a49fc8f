//! Ludo game driver.

use crate::core::{
    ActionRecord, BoardSnapshot, DiceSource, GameConfig, GameState, LudoError, LudoResult,
    PlayerId,
};
use crate::rules::{roll_for_start, ChoiceProvider, StartingRoll, TurnEngine, TurnReport};

/// A game in progress: configuration, rules, and state.
#[derive(Clone, Debug)]
pub struct LudoGame {
    config: GameConfig,
    engine: TurnEngine,
    state: GameState,
}

/// Builder for creating a LudoGame.
#[derive(Clone, Debug, Default)]
pub struct LudoGameBuilder {
    config: GameConfig,
}

impl LudoGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn from_config(config: GameConfig) -> Self {
        Self { config }
    }

    pub fn player_count(mut self, count: usize) -> Self {
        self.config.player_count = count;
        self
    }

    pub fn tokens_per_player(mut self, count: usize) -> Self {
        self.config.tokens_per_player = count;
        self
    }

    pub fn track_size(mut self, size: usize) -> Self {
        self.config.track_size = size;
        self
    }

    pub fn max_chances(mut self, chances: u8) -> Self {
        self.config.max_chances = chances;
        self
    }

    /// Build the game with `first` to play.
    pub fn build(self, first: PlayerId) -> LudoResult<LudoGame> {
        let engine = TurnEngine::from_config(&self.config)?;
        let state = GameState::new(&self.config, first)?;
        log::info!(
            "New game: {} players, {} tokens each, {} cells",
            self.config.player_count,
            self.config.tokens_per_player,
            self.config.track_size
        );
        Ok(LudoGame {
            config: self.config,
            engine,
            state,
        })
    }

    /// Decide the first player with a roll-off, then build.
    pub fn build_with_roll_off(
        self,
        dice: &mut dyn DiceSource,
    ) -> LudoResult<(LudoGame, StartingRoll)> {
        self.config.validate()?;
        let start = roll_for_start(self.config.player_count, self.config.max_roll(), dice);
        let game = self.build(start.first)?;
        Ok((game, start))
    }
}

impl LudoGame {
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn engine(&self) -> &TurnEngine {
        &self.engine
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.state.current_player
    }

    #[must_use]
    pub fn history(&self) -> &[ActionRecord] {
        &self.state.history
    }

    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        self.state.snapshot()
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.state.winner()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner().is_some()
    }

    /// Play the current player's turn, then pass play to the next seat
    /// unless the turn won the game.
    pub fn play_turn(
        &mut self,
        dice: &mut dyn DiceSource,
        chooser: &mut dyn ChoiceProvider,
    ) -> LudoResult<TurnReport> {
        if let Some(winner) = self.winner() {
            return Err(LudoError::GameOver(winner));
        }

        let id = self.state.current_player;
        let player = self.state.player_mut(id)?;
        let report = self.engine.play_turn(player, dice, chooser)?;

        let turn = self.state.turn_number;
        self.state.history.extend(
            report
                .rolls
                .iter()
                .enumerate()
                .map(|(sequence, roll)| {
                    ActionRecord::new(id, roll.value, roll.action, turn, sequence as u32)
                }),
        );

        if report.won {
            log::info!("{id} wins in round {turn}");
        } else {
            self.state.advance_turn();
        }
        Ok(report)
    }

    /// Play turns until someone wins or `max_turns` turns have been played.
    pub fn play_to_end(
        &mut self,
        dice: &mut dyn DiceSource,
        chooser: &mut dyn ChoiceProvider,
        max_turns: usize,
    ) -> LudoResult<Option<PlayerId>> {
        for _ in 0..max_turns {
            if self.is_over() {
                break;
            }
            self.play_turn(dice, chooser)?;
        }
        Ok(self.winner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameRng, ScriptedDice, TokenState, TurnAction};
    use crate::rules::FirstOption;

    #[test]
    fn test_builder_defaults() {
        let game = LudoGameBuilder::new().build(PlayerId::new(0)).unwrap();
        assert_eq!(game.config(), &GameConfig::default());
        assert_eq!(game.state().player_count(), 4);
        assert_eq!(game.current_player(), PlayerId::new(0));
        assert!(!game.is_over());
    }

    #[test]
    fn test_builder_rejects_bad_config() {
        assert!(LudoGameBuilder::new().player_count(1).build(PlayerId::new(0)).is_err());
        assert!(LudoGameBuilder::new().tokens_per_player(0).build(PlayerId::new(0)).is_err());
    }

    #[test]
    fn test_turn_passes_to_next_player() {
        let mut game = LudoGameBuilder::new()
            .player_count(2)
            .build(PlayerId::new(1))
            .unwrap();
        let mut dice = ScriptedDice::new(vec![3, 4]);

        let report = game.play_turn(&mut dice, &mut FirstOption).unwrap();
        assert_eq!(report.player, PlayerId::new(1));
        assert_eq!(report.rolls[0].action, TurnAction::Wasted);
        assert_eq!(game.current_player(), PlayerId::new(0));
        assert_eq!(game.state().turn_number, 2);

        game.play_turn(&mut dice, &mut FirstOption).unwrap();
        assert_eq!(game.current_player(), PlayerId::new(1));
    }

    #[test]
    fn test_history_records_each_roll() {
        let mut game = LudoGameBuilder::new()
            .player_count(2)
            .build(PlayerId::new(0))
            .unwrap();
        let mut dice = ScriptedDice::new(vec![6, 2]);

        game.play_turn(&mut dice, &mut FirstOption).unwrap();

        let history = game.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].roll, 6);
        assert_eq!(history[0].sequence, 0);
        assert_eq!(history[1].sequence, 1);
        assert_eq!(history[1].turn, 1);
        assert_eq!(
            history[1].action,
            TurnAction::Move {
                token: 0,
                steps: 2,
                to: TokenState::Active { cell: 2, distance: 2 }
            }
        );
    }

    #[test]
    fn test_game_over_rejects_more_turns() {
        let mut game = LudoGameBuilder::new()
            .player_count(2)
            .tokens_per_player(1)
            .track_size(8)
            .build(PlayerId::new(0))
            .unwrap();
        // Enter, then 6 + 2 = 8 steps.
        let mut dice = ScriptedDice::new(vec![6, 6, 2]);

        let report = game.play_turn(&mut dice, &mut FirstOption).unwrap();
        assert!(report.won);
        assert_eq!(game.winner(), Some(PlayerId::new(0)));
        assert_eq!(game.current_player(), PlayerId::new(0));

        assert_eq!(
            game.play_turn(&mut dice, &mut FirstOption).unwrap_err(),
            LudoError::GameOver(PlayerId::new(0))
        );
    }

    #[test]
    fn test_roll_off_picks_first_player() {
        let mut dice = ScriptedDice::new(vec![2, 5, 1]);
        let (game, start) = LudoGameBuilder::new()
            .player_count(3)
            .build_with_roll_off(&mut dice)
            .unwrap();

        assert_eq!(start.first, PlayerId::new(1));
        assert_eq!(game.current_player(), PlayerId::new(1));
    }

    #[test]
    fn test_play_to_end_with_seeded_dice() {
        let mut game = LudoGameBuilder::new()
            .player_count(2)
            .tokens_per_player(2)
            .track_size(20)
            .build(PlayerId::new(0))
            .unwrap();
        let mut dice = GameRng::new(42);

        let winner = game.play_to_end(&mut dice, &mut FirstOption, 10_000).unwrap();

        let winner = winner.expect("game should finish");
        assert!(game.state().player(winner).unwrap().has_won());
        assert!(game.snapshot().players[winner.index()].has_won);
    }
}
