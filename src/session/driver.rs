//! The read-roll-print loop.
//!
//! Works over any `BufRead`/`Write` pair so the binary can hand it stdin and
//! stdout while tests hand it byte buffers.

use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use super::command::Command;
use super::commentary::{final_remark, roll_remark};
use super::config::SessionConfig;
use crate::core::{BowlingError, Game, Roll};

/// How a session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The game was played to the end.
    Finished {
        /// Final score.
        score: u32,
    },
    /// The user asked to quit.
    Quit,
    /// Input ran out before the game finished.
    EndOfInput,
}

/// An interactive game between a reader and a writer.
pub struct Session<R, W> {
    input: R,
    output: W,
    config: SessionConfig,
    game: Game,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session around a fresh game.
    pub fn new(input: R, output: W, config: SessionConfig) -> Self {
        Self {
            input,
            output,
            config,
            game: Game::new(),
        }
    }

    /// The game being played.
    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Consume the session, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Play until the game finishes, the user quits, or input runs out.
    pub fn run(&mut self) -> io::Result<SessionOutcome> {
        writeln!(
            self.output,
            "Ready to bowl?! Good luck! Type \"exit\" to quit at any time, \"reset\" to start over."
        )?;

        let mut line = String::new();
        loop {
            self.print_status()?;
            write!(self.output, "Roll? ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                debug!("input closed");
                return Ok(SessionOutcome::EndOfInput);
            }

            match Command::parse(&line) {
                Command::Quit => {
                    writeln!(self.output, "Quitting game")?;
                    return Ok(SessionOutcome::Quit);
                }
                Command::Reset => {
                    writeln!(self.output, "Restarting game")?;
                    self.game.reset();
                }
                Command::Unreadable => {
                    writeln!(self.output, "Error reading input. Please try again.")?;
                }
                Command::Roll(pins) => {
                    if let Some(outcome) = self.attempt_roll(pins)? {
                        return Ok(outcome);
                    }
                }
            }
        }
    }

    fn attempt_roll(&mut self, pins: i64) -> io::Result<Option<SessionOutcome>> {
        let pins_before = self.game.pins_up().unwrap_or(0);
        let added = Roll::try_from(pins).and_then(|roll| self.game.add_roll(roll).map(|()| roll));

        let roll = match added {
            Ok(roll) => roll,
            Err(BowlingError::InvalidRoll { .. }) => {
                writeln!(self.output, "Invalid roll. Please try again.")?;
                return Ok(None);
            }
            Err(BowlingError::GameFinished) => {
                writeln!(self.output, "The game is over. Type \"reset\" to play again.")?;
                return Ok(None);
            }
        };

        write!(self.output, "You knocked down {} pins!", roll.pins())?;
        if let Some(remark) = roll_remark(roll.pins(), pins_before) {
            write!(self.output, " {remark}")?;
        }
        writeln!(self.output)?;

        if !self.game.is_finished() {
            return Ok(None);
        }

        let score = self.game.total_score();
        info!(score, "game finished");
        writeln!(self.output)?;
        write!(self.output, "You finished!")?;
        if let Some(remark) = final_remark(score) {
            write!(self.output, " {remark}")?;
        }
        writeln!(self.output)?;
        writeln!(self.output)?;
        writeln!(self.output, "{}", self.game)?;
        Ok(Some(SessionOutcome::Finished { score }))
    }

    fn print_status(&mut self) -> io::Result<()> {
        writeln!(self.output)?;

        if self.config.show_score {
            writeln!(self.output, "{}", self.game)?;
        }
        if self.config.show_pins_left {
            let pins_left = self.game.pins_up().unwrap_or(0);
            writeln!(self.output, "{pins_left} pins left.")?;
        }
        if self.config.show_score || self.config.show_pins_left {
            writeln!(self.output)?;
        }
        if self.config.show_possible_rolls {
            let rolls: Vec<String> = self
                .game
                .possible_rolls()
                .iter()
                .map(ToString::to_string)
                .collect();
            writeln!(self.output, "(Possible rolls: {})", rolls.join(", "))?;
        }
        Ok(())
    }
}
