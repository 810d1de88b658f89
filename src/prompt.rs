//! The interactive command protocol shared by every curation stage.
//!
//! The stage controller only sees the [`CommandSource`] trait, so the
//! blocking stdin reader can be swapped for a scripted sequence in tests.

use anyhow::{anyhow, Context, Result};
use std::io::{BufRead, Write};

pub const COMMANDS_MESSAGE: &str = "Please enter a command [skip, exit, ] when ready: ";

/// The closed set of operator decisions accepted at a stage boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Empty input: commit the stage's artifacts and advance.
    Continue,
    /// Abandon the current entry, keep processing the rest.
    Skip,
    /// Abort the whole session.
    Exit,
}

impl Command {
    /// Parse one trimmed input line; anything outside the closed set is None.
    pub fn parse(input: &str) -> Option<Command> {
        match input {
            "" => Some(Command::Continue),
            "skip" => Some(Command::Skip),
            "exit" => Some(Command::Exit),
            _ => None,
        }
    }
}

/// Blocking source of operator commands.
pub trait CommandSource {
    /// Prompt until a valid command arrives. Invalid input re-prompts and has
    /// no other effect.
    fn next_command(&mut self) -> Result<Command>;
}

/// Production command source: line-oriented stdin with re-prompting.
pub struct InteractiveSource;

impl CommandSource for InteractiveSource {
    fn next_command(&mut self) -> Result<Command> {
        let stdin = std::io::stdin();
        let mut stdout = std::io::stdout();
        loop {
            write!(stdout, "{COMMANDS_MESSAGE}").context("write command prompt")?;
            stdout.flush().context("flush command prompt")?;
            let mut line = String::new();
            let read = stdin
                .lock()
                .read_line(&mut line)
                .context("read operator command")?;
            if read == 0 {
                return Err(anyhow!("stdin closed while waiting for a command"));
            }
            if let Some(command) = Command::parse(line.trim()) {
                return Ok(command);
            }
        }
    }
}

/// Pre-supplied command script for tests; panics when over-consumed so a
/// test that prompts more often than expected fails loudly.
#[cfg(test)]
pub struct ScriptedSource {
    inputs: std::collections::VecDeque<String>,
}

#[cfg(test)]
impl ScriptedSource {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
impl CommandSource for ScriptedSource {
    fn next_command(&mut self) -> Result<Command> {
        loop {
            let input = self
                .inputs
                .pop_front()
                .expect("scripted command source exhausted");
            if let Some(command) = Command::parse(input.trim()) {
                return Ok(command);
            }
        }
    }
}
