//! Player entities.
//!
//! Players are identified by a display id (`"P1"`, `"alice"`, ...) and
//! addressed by their index in the game's turn order.

use serde::{Deserialize, Serialize};

use super::direction::Position;

/// A player on the board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    /// Stable identifier shown to users.
    pub id: String,

    /// Current cell. Always inside the maze.
    pub pos: Position,

    /// Burned by a dragon or shot. Hurt players cannot carry the treasure
    /// or escape through the exit.
    pub hurt: bool,

    pub has_treasure: bool,

    /// At most one bullet is carried at a time.
    pub bullet: bool,
}

impl Player {
    /// A fresh, healthy player with one bullet.
    pub fn new(id: impl Into<String>, pos: Position) -> Self {
        Self {
            id: id.into(),
            pos,
            hurt: false,
            has_treasure: false,
            bullet: true,
        }
    }

    /// Default id for the player at `index` in turn order (`P1`, `P2`, ...).
    #[must_use]
    pub fn default_id(index: usize) -> String {
        format!("P{}", index + 1)
    }

    /// Resolve requested names into ids, replacing blank or whitespace-only
    /// entries with the default id for their slot.
    ///
    /// ```
    /// use treasure_maze::core::Player;
    ///
    /// let ids = Player::resolve_ids(&["alice", "  ", ""]);
    /// assert_eq!(ids, vec!["alice", "P2", "P3"]);
    /// ```
    pub fn resolve_ids<S: AsRef<str>>(names: &[S]) -> Vec<String> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let trimmed = name.as_ref().trim();
                if trimmed.is_empty() {
                    Self::default_id(i)
                } else {
                    trimmed.to_string()
                }
            })
            .collect()
    }

    /// Ids for `count` unnamed players.
    #[must_use]
    pub fn default_ids(count: usize) -> Vec<String> {
        (0..count).map(Self::default_id).collect()
    }
}
