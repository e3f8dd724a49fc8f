//! Die rolling.
//!
//! [`DiceSource`] is the only way the engine obtains randomness. The
//! default implementation, [`GameRng`], is a seeded ChaCha8 stream so a game
//! can be replayed from its seed. [`ScriptedDice`] replays a fixed list and
//! is what the tests use.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of die rolls.
pub trait DiceSource {
    /// Roll one die with `faces` faces, returning a value in `1..=faces`.
    fn roll(&mut self, faces: u8) -> u8;
}

/// Deterministic die source backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from OS entropy. The chosen seed is available
    /// through [`GameRng::seed`] to reproduce the game.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl DiceSource for GameRng {
    fn roll(&mut self, faces: u8) -> u8 {
        self.inner.gen_range(1..=faces)
    }
}

/// Replays a fixed sequence of rolls.
///
/// # Panics
///
/// [`DiceSource::roll`] panics when the sequence is exhausted, or when the
/// next scripted value is outside `1..=faces`.
///
/// ```
/// use ludo_engine::core::{DiceSource, ScriptedDice};
///
/// let mut dice = ScriptedDice::new([6, 2]);
/// assert_eq!(dice.roll(6), 6);
/// assert_eq!(dice.roll(6), 2);
/// assert!(dice.is_exhausted());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedDice {
    rolls: Vec<u8>,
    next: usize,
}

impl ScriptedDice {
    pub fn new(rolls: impl IntoIterator<Item = u8>) -> Self {
        Self {
            rolls: rolls.into_iter().collect(),
            next: 0,
        }
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.next >= self.rolls.len()
    }

    /// Number of rolls handed out so far.
    #[must_use]
    pub fn consumed(&self) -> usize {
        self.next
    }
}

impl DiceSource for ScriptedDice {
    fn roll(&mut self, faces: u8) -> u8 {
        let value = *self
            .rolls
            .get(self.next)
            .unwrap_or_else(|| panic!("scripted dice exhausted after {} rolls", self.next));
        assert!(
            (1..=faces).contains(&value),
            "scripted roll {value} outside 1..={faces}"
        );
        self.next += 1;
        value
    }
}
