use std::str::FromStr;

use sweeper_core::{Button, Coord, Coord2};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command {0:?}, try `h`")]
    Unknown(String),
    #[error("Expected `ROW COL` after the command")]
    MissingCoords,
    #[error("Not a grid coordinate: {0:?}")]
    BadCoord(String),
    #[error("Unexpected trailing input: {0:?}")]
    Trailing(String),
}

/// One line of player input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Click(Coord2, Button),
    Reset,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Err(CommandError::Empty);
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "o" | "open" => Command::Click(parse_coords(&mut words)?, Button::Primary),
            "f" | "flag" => Command::Click(parse_coords(&mut words)?, Button::Secondary),
            "r" | "reset" => Command::Reset,
            "h" | "help" | "?" => Command::Help,
            "q" | "quit" | "exit" => Command::Quit,
            _ => return Err(CommandError::Unknown(verb.to_string())),
        };

        match words.next() {
            Some(extra) => Err(CommandError::Trailing(extra.to_string())),
            None => Ok(command),
        }
    }
}

fn parse_coords<'a>(words: &mut impl Iterator<Item = &'a str>) -> Result<Coord2, CommandError> {
    let mut next = || -> Result<Coord, CommandError> {
        let word = words.next().ok_or(CommandError::MissingCoords)?;
        word.parse()
            .map_err(|_| CommandError::BadCoord(word.to_string()))
    };
    let row = next()?;
    let col = next()?;
    Ok((row, col))
}

pub const HELP: &str = "\
commands:
  o ROW COL   open a cell
  f ROW COL   toggle a flag
  r           start over
  h           show this help
  q           quit
once the game is over any click (or an empty line) starts a new one";
