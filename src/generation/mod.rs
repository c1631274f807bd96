//! Procedural maze generation.
//!
//! A candidate is built in five steps:
//!
//! 1. carve a spanning tree with a randomized depth-first search
//! 2. knock down extra walls to add loops
//! 3. place the exit and the counted features on empty cells
//! 4. place the treasure, preferring cells far from the exit
//! 5. lay the river
//!
//! Players are placed afterwards and the whole board is run through the
//! solvability gate. Rejected candidates are thrown away and rebuilt from a
//! fresh fork of the generator's RNG.

pub mod carve;
pub mod features;
pub mod gate;
pub mod generator;
pub mod river;

use thiserror::Error;

use crate::core::ConfigError;

pub use gate::{check_solvable, Unsolvable};
pub use generator::{generate_maze, MazeGenerator};

/// Errors from maze generation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("invalid maze configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("no solvable maze found after {attempts} attempts")]
    Exhausted { attempts: u32 },
}
