//! Shell command parsing

use anyhow::{bail, Context, Result};
use std::str::FromStr;

/// A parsed shell line. Coordinates are kept 1-based as typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    New,
    Move { row: i64, col: i64 },
    Level(i64),
    Switch,
    Print,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = anyhow::Error;

    /// The first letter of the first token picks the command, in any case;
    /// the number of tokens must match the command.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split_whitespace().collect();

        let Some(letter) = parts.first().and_then(|word| word.chars().next()) else {
            bail!("Invalid command");
        };

        match (letter.to_ascii_uppercase(), parts.len()) {
            ('M', 3) => {
                let row = parts[1].parse().context("You have to enter two integers")?;
                let col = parts[2].parse().context("You have to enter two integers")?;
                Ok(Command::Move { row, col })
            }
            ('L', 2) => {
                let level = parts[1].parse().context("You have to enter an integer")?;
                Ok(Command::Level(level))
            }
            ('N', 1) => Ok(Command::New),
            ('S', 1) => Ok(Command::Switch),
            ('P', 1) => Ok(Command::Print),
            ('H', 1) => Ok(Command::Help),
            ('Q', 1) => Ok(Command::Quit),
            _ => bail!("Invalid command"),
        }
    }
}

/// Parse a shell line; blank lines yield `None`
pub fn parse_command(input: &str) -> Option<Result<Command>> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    Some(input.parse())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("NEW", Command::New)]
    #[test_case("n", Command::New)]
    #[test_case("move 3 4", Command::Move { row: 3, col: 4 })]
    #[test_case("M -1 9", Command::Move { row: -1, col: 9 })]
    #[test_case("Level 5", Command::Level(5))]
    #[test_case("switch", Command::Switch)]
    #[test_case("print", Command::Print)]
    #[test_case("HELP", Command::Help)]
    #[test_case("  quit  ", Command::Quit)]
    fn test_parse(input: &str, expected: Command) {
        assert_eq!(parse_command(input).unwrap().unwrap(), expected);
    }

    #[test]
    fn test_blank_line() {
        assert!(parse_command("").is_none());
        assert!(parse_command("   \t").is_none());
    }

    #[test_case("move 3", "Invalid command")]
    #[test_case("new game", "Invalid command")]
    #[test_case("xyz", "Invalid command")]
    #[test_case("print 1 2", "Invalid command")]
    #[test_case("move a 4", "You have to enter two integers")]
    #[test_case("level high", "You have to enter an integer")]
    fn test_parse_errors(input: &str, message: &str) {
        let err = parse_command(input).unwrap().unwrap_err();
        assert_eq!(err.to_string(), message);
    }
}
