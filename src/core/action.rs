//! Player actions and the textual command vocabulary.
//!
//! The engine accepts commands as text (`"UP"`, `"shoot left"`, ...) and
//! parses them into a typed [`Action`]. The canonical upper-case form of an
//! accepted action is what lands in the move history, so a history can be
//! replayed through the same parser.

use serde::{Deserialize, Serialize};

use super::direction::Direction;

/// A single turn action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Step one cell in a direction.
    Move(Direction),
    /// Fire the carried bullet along a direction.
    Shoot(Direction),
}

/// Why a command string did not parse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandError {
    /// Not a recognised verb.
    Unknown,
    /// `SHOOT` followed by something that is not a direction.
    InvalidDirection,
}

impl Action {
    /// Parse a command, ignoring case and surrounding whitespace.
    ///
    /// ```
    /// use treasure_maze::core::{Action, CommandError, Direction};
    ///
    /// assert_eq!(Action::parse("up"), Ok(Action::Move(Direction::Up)));
    /// assert_eq!(Action::parse("Shoot Left"), Ok(Action::Shoot(Direction::Left)));
    /// assert_eq!(Action::parse("SHOOT sideways"), Err(CommandError::InvalidDirection));
    /// assert_eq!(Action::parse("dance"), Err(CommandError::Unknown));
    /// ```
    pub fn parse(command: &str) -> Result<Self, CommandError> {
        let command = command.trim().to_ascii_uppercase();

        if let Some(rest) = command.strip_prefix("SHOOT ") {
            return Direction::parse(rest)
                .map(Action::Shoot)
                .ok_or(CommandError::InvalidDirection);
        }

        Direction::parse(&command)
            .map(Action::Move)
            .ok_or(CommandError::Unknown)
    }

    /// Canonical command text, as stored in the move history.
    #[must_use]
    pub fn command(&self) -> String {
        match self {
            Action::Move(dir) => dir.to_string(),
            Action::Shoot(dir) => format!("SHOOT {dir}"),
        }
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        match *self {
            Action::Move(dir) | Action::Shoot(dir) => dir,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.command())
    }
}
