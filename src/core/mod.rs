//! Core types: grid primitives, players, actions, RNG, configuration.
//!
//! These are the leaf building blocks shared by the maze, the generator,
//! the solver and the rules engine.

pub mod action;
pub mod config;
pub mod direction;
pub mod player;
pub mod rng;

pub use action::{Action, CommandError};
pub use config::{ConfigError, MazeConfig};
pub use direction::{Direction, Position};
pub use player::Player;
pub use rng::GameRng;
