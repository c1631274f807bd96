//! # treasure-maze
//!
//! Procedurally generated, always-solvable treasure mazes and a turn-based
//! multiplayer rules engine to play them.
//!
//! ## Design Principles
//!
//! 1. **Solvable by construction**: every generated maze is checked by
//!    simulating play, not by a graph walk, and regenerated until it passes.
//!
//! 2. **Deterministic**: all randomness flows from a seeded [`GameRng`], so
//!    a `(config, seed)` pair always yields the same maze.
//!
//! 3. **Typed outcomes**: the engine reports what happened as enums; the
//!    narrative text is for display only.
//!
//! ## Modules
//!
//! - `core`: directions, positions, players, actions, RNG, configuration
//! - `maze`: cells, walls, and the treasure overlay
//! - `generation`: carving, feature placement, rivers, the solvability gate
//! - `solver`: reachability under the engine's move rules
//! - `rules`: the game engine, outcomes, line of sight, replay
//! - `persistence`: saving and loading games
//!
//! ## Example
//!
//! ```
//! use treasure_maze::{ActionOutcome, GameBuilder};
//!
//! let mut game = GameBuilder::new().size(6).player_count(2).build(3).unwrap();
//!
//! let result = game.perform_action("up");
//! assert!(matches!(result.outcome, ActionOutcome::Move(_)));
//! assert!(result.turn_consumed);
//! assert_eq!(result.next_player, "P2");
//! ```

pub mod core;
pub mod generation;
pub mod maze;
pub mod persistence;
pub mod rules;
pub mod solver;

pub use crate::core::{
    Action, CommandError, ConfigError, Direction, GameRng, MazeConfig, Player, Position,
};

pub use crate::maze::{Cell, CellType, Maze, Walls};

pub use crate::generation::{generate_maze, GenerationError, MazeGenerator, Unsolvable};

pub use crate::solver::Reachability;

pub use crate::rules::{
    ActionOutcome, ActionResult, Game, GameBuilder, MoveOutcome, RayEnd, Rejection, Replay,
    ShotOutcome,
};

pub use crate::persistence::{SaveError, SaveStore};
