//! Game state: players, their tokens, turn order, and history.
//!
//! ## Player
//!
//! Owns a fixed number of tokens and answers the questions the turn rules
//! ask: who can move, who is waiting, has everyone reached home.
//!
//! ## GameState
//!
//! All players plus whose turn it is, the round counter, and the roll
//! history.
//!
//! ## BoardSnapshot
//!
//! Read-only, serializable view for rendering after each turn.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::action::{ActionRecord, TurnAction};
use super::config::GameConfig;
use super::error::{LudoError, LudoResult};
use super::player::{PlayerId, PlayerMap};
use super::token::{Token, TokenState};
use crate::board::Track;

/// Token indices. Four fit inline, which covers the standard game.
pub type TokenIndices = SmallVec<[usize; 4]>;

/// One player and the tokens they own.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    tokens: SmallVec<[Token; 4]>,
}

impl Player {
    /// Create a player with `token_count` tokens, none entered.
    #[must_use]
    pub fn new(id: PlayerId, token_count: usize) -> Self {
        Self {
            id,
            tokens: (0..token_count).map(|index| Token::new(id, index)).collect(),
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    #[must_use]
    pub fn token(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Indices of tokens on the track and not yet home.
    #[must_use]
    pub fn movable_tokens(&self) -> TokenIndices {
        self.tokens
            .iter()
            .filter(|t| t.is_active())
            .map(Token::index)
            .collect()
    }

    #[must_use]
    pub fn first_waiting(&self) -> Option<usize> {
        self.tokens.iter().position(Token::is_waiting)
    }

    #[must_use]
    pub fn has_movable(&self) -> bool {
        self.tokens.iter().any(Token::is_active)
    }

    #[must_use]
    pub fn has_single_movable(&self) -> bool {
        self.tokens.iter().filter(|t| t.is_active()).count() == 1
    }

    #[must_use]
    pub fn has_waiting(&self) -> bool {
        self.tokens.iter().any(Token::is_waiting)
    }

    /// Win condition: every token is home.
    #[must_use]
    pub fn has_won(&self) -> bool {
        self.tokens.iter().all(Token::is_home)
    }

    /// Enter the token at `index`.
    pub fn enter(&mut self, index: usize, track: &Track) -> LudoResult<TurnAction> {
        let token = self.token_mut(index, "enter")?;
        let cell = token.enter(track)?;
        log::info!("{} enters token {} at cell {}", self.id, index + 1, cell);
        Ok(TurnAction::Enter { token: index, cell })
    }

    /// Move the token at `index` forward by `steps`.
    pub fn advance(&mut self, index: usize, steps: usize, track: &Track) -> LudoResult<TurnAction> {
        let token = self.token_mut(index, "move")?;
        let to = token.advance(steps, track)?;
        if to == TokenState::Home {
            log::info!("{} brings token {} home", self.id, index + 1);
        }
        Ok(TurnAction::Move { token: index, steps, to })
    }

    fn token_mut(&mut self, index: usize, operation: &'static str) -> LudoResult<&mut Token> {
        let id = self.id;
        self.tokens
            .get_mut(index)
            .ok_or_else(|| LudoError::invalid_operation(id, index, operation, "missing"))
    }
}

/// Complete game state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    /// Every player's tokens, by seat.
    pub players: PlayerMap<Player>,

    /// Player whose turn it is.
    pub current_player: PlayerId,

    /// Round number (starts at 1, increments when play wraps to seat 0).
    pub turn_number: u32,

    /// Every roll made so far, in order.
    pub history: Vec<ActionRecord>,
}

impl GameState {
    /// Fresh state for a validated configuration. `first` starts.
    pub fn new(config: &GameConfig, first: PlayerId) -> LudoResult<Self> {
        config.validate()?;
        if first.index() >= config.player_count {
            return Err(LudoError::UnknownPlayer(first));
        }
        Ok(Self {
            players: PlayerMap::new(config.player_count, |id| {
                Player::new(id, config.tokens_per_player)
            }),
            current_player: first,
            turn_number: 1,
            history: Vec::new(),
        })
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    pub fn player(&self, id: PlayerId) -> LudoResult<&Player> {
        self.players.get(id).ok_or(LudoError::UnknownPlayer(id))
    }

    pub fn player_mut(&mut self, id: PlayerId) -> LudoResult<&mut Player> {
        self.players.get_mut(id).ok_or(LudoError::UnknownPlayer(id))
    }

    /// Hand the turn to the next seat.
    pub fn advance_turn(&mut self) {
        let next = self.current_player.next(self.player_count());
        if next.index() == 0 {
            self.turn_number += 1;
        }
        self.current_player = next;
    }

    /// First player (by seat) whose tokens are all home.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.players
            .iter()
            .find(|(_, player)| player.has_won())
            .map(|(id, _)| id)
    }

    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            turn_number: self.turn_number,
            current_player: self.current_player,
            players: self
                .players
                .values()
                .map(|player| PlayerSnapshot {
                    player: player.id(),
                    tokens: player.tokens().iter().map(Token::state).collect(),
                    has_won: player.has_won(),
                })
                .collect(),
        }
    }
}

/// Read-only view of one player's tokens.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub player: PlayerId,
    pub tokens: Vec<TokenState>,
    pub has_won: bool,
}

/// Read-only view of the whole board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub turn_number: u32,
    pub current_player: PlayerId,
    pub players: Vec<PlayerSnapshot>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track() -> Track {
        Track::new(52, 4).unwrap()
    }

    #[test]
    fn test_new_player() {
        let player = Player::new(PlayerId::new(2), 4);
        assert_eq!(player.tokens().len(), 4);
        assert!(player.has_waiting());
        assert!(!player.has_movable());
        assert!(!player.has_won());
        assert_eq!(player.first_waiting(), Some(0));
        assert!(player.movable_tokens().is_empty());
    }

    #[test]
    fn test_movable_queries() {
        let track = track();
        let mut player = Player::new(PlayerId::new(0), 4);

        player.enter(1, &track).unwrap();
        assert!(player.has_single_movable());
        assert_eq!(player.movable_tokens().as_slice(), &[1]);
        assert_eq!(player.first_waiting(), Some(0));

        player.enter(3, &track).unwrap();
        assert!(!player.has_single_movable());
        assert_eq!(player.movable_tokens().as_slice(), &[1, 3]);
        assert_eq!(player.first_waiting(), Some(0));
    }

    #[test]
    fn test_home_token_is_not_movable() {
        let track = track();
        let mut player = Player::new(PlayerId::new(0), 2);
        player.enter(0, &track).unwrap();
        let action = player.advance(0, 52, &track).unwrap();

        assert!(action.reached_home());
        assert!(!player.has_movable());
        assert!(player.movable_tokens().is_empty());
        assert!(!player.has_won());
    }

    #[test]
    fn test_win_requires_every_token_home() {
        let track = track();
        let mut player = Player::new(PlayerId::new(1), 4);

        for index in 0..4 {
            assert!(!player.has_won());
            player.enter(index, &track).unwrap();
            player.advance(index, 52, &track).unwrap();
        }
        assert!(player.has_won());
    }

    #[test]
    fn test_missing_token_is_invalid_operation() {
        let mut player = Player::new(PlayerId::new(0), 1);
        let err = player.enter(5, &track()).unwrap_err();
        assert!(matches!(err, LudoError::InvalidOperation { token: 5, .. }));
    }

    #[test]
    fn test_game_state_turn_rotation() {
        let config = GameConfig::new(3);
        let mut state = GameState::new(&config, PlayerId::new(1)).unwrap();

        assert_eq!(state.player_count(), 3);
        assert_eq!(state.turn_number, 1);

        state.advance_turn();
        assert_eq!(state.current_player, PlayerId::new(2));
        assert_eq!(state.turn_number, 1);

        state.advance_turn();
        assert_eq!(state.current_player, PlayerId::new(0));
        assert_eq!(state.turn_number, 2);
    }

    #[test]
    fn test_game_state_rejects_unknown_first_player() {
        let config = GameConfig::new(2);
        assert_eq!(
            GameState::new(&config, PlayerId::new(3)).unwrap_err(),
            LudoError::UnknownPlayer(PlayerId::new(3))
        );
    }

    #[test]
    fn test_snapshot() {
        let track = track();
        let config = GameConfig::new(2).with_tokens(2);
        let mut state = GameState::new(&config, PlayerId::new(0)).unwrap();

        let player = state.player_mut(PlayerId::new(1)).unwrap();
        player.enter(0, &track).unwrap();
        player.advance(0, 3, &track).unwrap();

        let snapshot = state.snapshot();
        assert_eq!(snapshot.players.len(), 2);
        assert_eq!(snapshot.players[0].tokens, vec![TokenState::NotEntered; 2]);
        assert_eq!(
            snapshot.players[1].tokens,
            vec![TokenState::Active { cell: 16, distance: 3 }, TokenState::NotEntered]
        );
        assert!(!snapshot.players[1].has_won);

        let json = serde_json::to_string(&snapshot).unwrap();
        let restored: BoardSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, snapshot);
    }

    #[test]
    fn test_winner() {
        let track = track();
        let config = GameConfig::new(2).with_tokens(1);
        let mut state = GameState::new(&config, PlayerId::new(0)).unwrap();
        assert_eq!(state.winner(), None);

        let player = state.player_mut(PlayerId::new(1)).unwrap();
        player.enter(0, &track).unwrap();
        player.advance(0, 60, &track).unwrap();

        assert_eq!(state.winner(), Some(PlayerId::new(1)));
    }
}
