//! Line-oriented console play.
//!
//! [`Console`] reads answers from any `BufRead` and writes prompts to any
//! `Write`, so the same code drives stdin/stdout in the binary and
//! in-memory buffers in tests.

use std::io::{BufRead, Write};

use crate::core::{BoardSnapshot, LudoError, LudoResult, Player, PlayerId, TokenState};
use crate::rules::{ChoiceProvider, Menu, StartingRoll, TurnReport};

/// Format the board, one line per player.
///
/// ```text
/// Round 3, Player 2 to play
///   Player 1: [cell 7] [home] [--] [--]
///   Player 2: [--] [--] [--] [--]
/// ```
#[must_use]
pub fn render_board(snapshot: &BoardSnapshot) -> String {
    let mut out = format!(
        "Round {}, {} to play\n",
        snapshot.turn_number, snapshot.current_player
    );
    for player in &snapshot.players {
        let tokens: Vec<String> = player.tokens.iter().map(render_token).collect();
        out.push_str(&format!("  {}: {}", player.player, tokens.join(" ")));
        if player.has_won {
            out.push_str("  (winner)");
        }
        out.push('\n');
    }
    out
}

fn render_token(state: &TokenState) -> String {
    match state {
        TokenState::NotEntered => "[--]".to_string(),
        TokenState::Active { cell, .. } => format!("[cell {cell}]"),
        TokenState::Home => "[home]".to_string(),
    }
}

/// Interactive console over a reader/writer pair.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the console and return the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print a line.
    pub fn say(&mut self, text: &str) -> LudoResult<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Block until the player presses Enter.
    pub fn wait_for_roll(&mut self, player: PlayerId) -> LudoResult<()> {
        write!(self.output, "{player}, press Enter to roll the dice...")?;
        self.output.flush()?;
        self.read_line()?;
        Ok(())
    }

    pub fn show_board(&mut self, snapshot: &BoardSnapshot) -> LudoResult<()> {
        write!(self.output, "{}", render_board(snapshot))?;
        Ok(())
    }

    pub fn show_start(&mut self, start: &StartingRoll) -> LudoResult<()> {
        for (player, value) in &start.rolls {
            writeln!(self.output, "{player} rolled: {value}")?;
        }
        writeln!(self.output, "{} goes first", start.first)?;
        Ok(())
    }

    pub fn show_turn(&mut self, report: &TurnReport) -> LudoResult<()> {
        for roll in &report.rolls {
            writeln!(
                self.output,
                "{} rolled: {} ({})",
                report.player, roll.value, roll.action
            )?;
        }
        Ok(())
    }

    fn read_line(&mut self) -> LudoResult<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(LudoError::Io("input closed".to_string()));
        }
        Ok(line)
    }
}

impl<R: BufRead, W: Write> ChoiceProvider for Console<R, W> {
    /// Options are shown 1-based. Anything that does not parse as a number
    /// maps to an out-of-range answer so the engine asks again.
    fn choose(&mut self, player: &Player, menu: &Menu) -> LudoResult<usize> {
        writeln!(self.output, "{}: {}", player.id(), menu.prompt())?;
        for (i, label) in menu.labels().iter().enumerate() {
            writeln!(self.output, "  {}. {label}", i + 1)?;
        }
        write!(self.output, "> ")?;
        self.output.flush()?;

        let line = self.read_line()?;
        Ok(match line.trim().parse::<usize>() {
            Ok(n) if n >= 1 => n - 1,
            _ => menu.len(),
        })
    }

    /// Pause before every roll, including the extra rolls a six earns.
    fn before_roll(&mut self, player: &Player, _rolls_made: usize) -> LudoResult<()> {
        self.wait_for_roll(player.id())
    }
}
