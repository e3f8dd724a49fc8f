//! Player decisions.
//!
//! When a roll leaves more than one legal option, the engine builds a
//! [`Menu`] and hands it to a [`ChoiceProvider`]. The provider answers with
//! a 0-based option index. Answers are never trusted: [`ask`] re-queries
//! until the answer is in range and legal for the player's current tokens.

use crate::core::{LudoError, LudoResult, Player, PlayerId};

/// An active token offered as a move candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenChoice {
    pub token: usize,
    pub cell: usize,
}

/// A decision the engine needs from a player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Menu {
    /// Option 0 enters a new token, option 1 moves an active one.
    EnterOrMove { steps: usize },
    /// Option `i` moves `candidates[i]` forward by `steps`.
    PickToken {
        steps: usize,
        candidates: Vec<TokenChoice>,
    },
}

impl Menu {
    pub const ENTER: usize = 0;
    pub const MOVE: usize = 1;

    /// Number of options offered.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Menu::EnterOrMove { .. } => 2,
            Menu::PickToken { candidates, .. } => candidates.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Human-readable label for every option, in order.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        match self {
            Menu::EnterOrMove { steps } => vec![
                "Enter a new token".to_string(),
                format!("Move a token {steps} spaces"),
            ],
            Menu::PickToken { candidates, .. } => candidates
                .iter()
                .map(|c| format!("Token {} on cell {}", c.token + 1, c.cell))
                .collect(),
        }
    }

    /// Question shown above the options.
    #[must_use]
    pub fn prompt(&self) -> String {
        match self {
            Menu::EnterOrMove { steps } => {
                format!("Rolled {steps}: enter a new token or move one?")
            }
            Menu::PickToken { steps, .. } => format!("Which token moves {steps} spaces?"),
        }
    }

    /// Whether `answer` names an option that `player` can take right now.
    #[must_use]
    pub fn is_legal(&self, answer: usize, player: &Player) -> bool {
        match self {
            Menu::EnterOrMove { .. } => match answer {
                Self::ENTER => player.has_waiting(),
                Self::MOVE => player.has_movable(),
                _ => false,
            },
            Menu::PickToken { candidates, .. } => candidates
                .get(answer)
                .and_then(|c| player.token(c.token))
                .is_some_and(|t| t.is_active()),
        }
    }
}

/// Source of player decisions.
pub trait ChoiceProvider {
    /// Pick one option of `menu` for `player`, as a 0-based index.
    ///
    /// Out-of-range answers are allowed; the engine asks again. Errors are
    /// reserved for the provider itself failing (closed input and so on).
    fn choose(&mut self, player: &Player, menu: &Menu) -> LudoResult<usize>;

    /// Called before every die roll of `player`'s turn, chained rolls
    /// included. `rolls_made` counts the rolls already made this turn.
    fn before_roll(&mut self, _player: &Player, _rolls_made: usize) -> LudoResult<()> {
        Ok(())
    }
}

/// Ask `provider` until it returns a legal option.
pub fn ask(provider: &mut dyn ChoiceProvider, player: &Player, menu: &Menu) -> LudoResult<usize> {
    loop {
        let answer = provider.choose(player, menu)?;
        if menu.is_legal(answer, player) {
            return Ok(answer);
        }
        let rejected = LudoError::InvalidChoice {
            answer,
            options: menu.len(),
        };
        log::warn!("{}: {rejected}, asking again", player.id());
    }
}

/// Always takes the first option. Drives automatic play.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstOption;

impl ChoiceProvider for FirstOption {
    fn choose(&mut self, _player: &Player, _menu: &Menu) -> LudoResult<usize> {
        Ok(0)
    }
}

/// Replays a fixed list of answers and records every menu it was shown.
///
/// # Panics
///
/// [`ChoiceProvider::choose`] panics once every scripted answer has been
/// used. Meant for tests and replays where the prompts are known up front.
#[derive(Clone, Debug, Default)]
pub struct ScriptedChoices {
    answers: Vec<usize>,
    next: usize,
    seen: Vec<(PlayerId, Menu)>,
}

impl ScriptedChoices {
    pub fn new(answers: impl IntoIterator<Item = usize>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            next: 0,
            seen: Vec::new(),
        }
    }

    /// Every menu shown so far, with the player it was shown to.
    #[must_use]
    pub fn seen(&self) -> &[(PlayerId, Menu)] {
        &self.seen
    }

    /// How many times the provider was asked.
    #[must_use]
    pub fn asked(&self) -> usize {
        self.seen.len()
    }
}

impl ChoiceProvider for ScriptedChoices {
    fn choose(&mut self, player: &Player, menu: &Menu) -> LudoResult<usize> {
        self.seen.push((player.id(), menu.clone()));
        let answer = *self
            .answers
            .get(self.next)
            .unwrap_or_else(|| panic!("scripted choices exhausted after {} answers", self.next));
        self.next += 1;
        Ok(answer)
    }
}
