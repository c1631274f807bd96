//! Maze generation configuration.
//!
//! `MazeConfig` enumerates everything the generator needs: grid size,
//! feature counts, river shape, loop density, and the treasure placement
//! constraint. Defaults match the classic 7×7 board.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a configuration can never produce a maze.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("maze size must be at least 2, got {0}")]
    TooSmall(usize),

    #[error("{needed} fixed cells requested but the {size}x{size} grid only has {available}")]
    TooCrowded {
        size: usize,
        needed: usize,
        available: usize,
    },

    #[error(
        "{requested} extra openings requested but only {available} walls remain after carving"
    )]
    TooManyOpenings { requested: usize, available: usize },

    #[error("a game needs at least one player")]
    NoPlayers,
}

/// Maze generation parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeConfig {
    /// Grid is `size` × `size`.
    pub size: usize,

    pub num_holes: usize,
    pub num_armories: usize,
    pub num_hospitals: usize,
    pub num_dragons: usize,

    /// Minimum number of cells in the river path (0 = no river).
    pub river_length: usize,

    /// Extra walls knocked down after carving, adding loops.
    pub extra_openings: usize,

    /// Minimum Manhattan distance between treasure and exit.
    /// Falls back to any empty cell when it cannot be met.
    pub min_treasure_exit_distance: u32,

    /// Cells a river pushes a player per encounter. Used by the solvability
    /// gate so that "reachable" matches play with this setting.
    pub river_push: usize,

    /// Cap on rejected candidates before giving up (`None` = retry forever).
    pub max_attempts: Option<u32>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self::for_size(7)
    }
}

impl MazeConfig {
    /// Default feature set scaled to a grid size.
    #[must_use]
    pub fn for_size(size: usize) -> Self {
        Self {
            size,
            num_holes: 2,
            num_armories: 1,
            num_hospitals: 1,
            num_dragons: 1,
            river_length: size + 2,
            extra_openings: 0,
            min_treasure_exit_distance: size.saturating_sub(2) as u32,
            river_push: 2,
            max_attempts: None,
        }
    }

    pub fn with_holes(mut self, count: usize) -> Self {
        self.num_holes = count;
        self
    }

    pub fn with_armories(mut self, count: usize) -> Self {
        self.num_armories = count;
        self
    }

    pub fn with_hospitals(mut self, count: usize) -> Self {
        self.num_hospitals = count;
        self
    }

    pub fn with_dragons(mut self, count: usize) -> Self {
        self.num_dragons = count;
        self
    }

    pub fn with_river_length(mut self, length: usize) -> Self {
        self.river_length = length;
        self
    }

    pub fn with_river_push(mut self, push: usize) -> Self {
        self.river_push = push;
        self
    }

    pub fn with_extra_openings(mut self, count: usize) -> Self {
        self.extra_openings = count;
        self
    }

    pub fn with_min_treasure_exit_distance(mut self, distance: u32) -> Self {
        self.min_treasure_exit_distance = distance;
        self
    }

    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = Some(attempts);
        self
    }

    /// Interior walls still standing after a spanning-tree carve.
    #[must_use]
    pub fn walls_after_carving(&self) -> usize {
        let n = self.size;
        if n < 2 {
            return 0;
        }
        let interior_edges = 2 * n * (n - 1);
        interior_edges - (n * n - 1)
    }

    /// Cells that must hold a distinct feature: exit, treasure, and the
    /// counted features. Players are checked separately at placement.
    #[must_use]
    pub fn fixed_cells(&self) -> usize {
        2 + self.num_holes + self.num_armories + self.num_hospitals + self.num_dragons
    }

    /// Reject configurations that can never yield a maze.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.check_room(0)
    }

    /// Like [`MazeConfig::validate`], also reserving cells for players.
    /// A game needs at least one.
    pub fn validate_with_players(&self, players: usize) -> Result<(), ConfigError> {
        if players == 0 {
            return Err(ConfigError::NoPlayers);
        }
        self.check_room(players)
    }

    fn check_room(&self, players: usize) -> Result<(), ConfigError> {
        if self.size < 2 {
            return Err(ConfigError::TooSmall(self.size));
        }

        let available = self.size * self.size;
        let needed = self.fixed_cells() + players;
        if needed > available {
            return Err(ConfigError::TooCrowded {
                size: self.size,
                needed,
                available,
            });
        }

        let walls = self.walls_after_carving();
        if self.extra_openings > walls {
            return Err(ConfigError::TooManyOpenings {
                requested: self.extra_openings,
                available: walls,
            });
        }

        Ok(())
    }
}
