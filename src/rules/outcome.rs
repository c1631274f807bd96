//! Typed results of resolving an action.
//!
//! The engine reports what happened as data first and narrative second:
//! solvers and front ends branch on the outcome enums, and the message is
//! only ever shown to people.

use serde::{Deserialize, Serialize};

/// How a move resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// A wall stopped the player where they stood.
    Blocked,
    /// The way was open but led off the grid. Border walls make this
    /// unreachable in generated mazes.
    OutOfBounds,
    /// The player changed cell, possibly carried on by a river.
    Moved,
    /// A hole sent the player to the next hole in the ring.
    Teleported,
    /// The player reached the exit carrying the treasure, unhurt.
    Won,
    /// The player walked into a dragon.
    Hazard,
}

impl MoveOutcome {
    /// Whether the player may have ended up somewhere new.
    #[must_use]
    pub fn changed_position(self) -> bool {
        !matches!(self, MoveOutcome::Blocked | MoveOutcome::OutOfBounds)
    }
}

/// How a shot resolved. Every variant spends the bullet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShotOutcome {
    HitWall,
    OutOfBounds,
    /// `victim` is an index into the game's players.
    HitPlayer { victim: usize, dropped_treasure: bool },
}

/// Why an action was refused. Refusals never consume a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rejection {
    UnknownCommand,
    InvalidDirection,
    NoBullets,
    /// Someone has already won.
    GameOver,
}

impl Rejection {
    /// The fixed text reported for this refusal.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Rejection::UnknownCommand => "Unknown command.",
            Rejection::InvalidDirection => "Invalid shooting direction.",
            Rejection::NoBullets => "You have no bullets to shoot.",
            Rejection::GameOver => "The game is over.",
        }
    }
}

/// What an action did, by kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionOutcome {
    Move(MoveOutcome),
    /// `teleported` is set when the shooter stood on a hole and fell through
    /// after firing.
    Shot { outcome: ShotOutcome, teleported: bool },
    Rejected(Rejection),
}

/// Everything a caller needs after [`Game::perform_action`](super::Game::perform_action).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResult {
    pub outcome: ActionOutcome,
    /// Human-readable narrative.
    pub message: String,
    /// Whether play passed to the next player.
    pub turn_consumed: bool,
    /// Id of the player whose turn it is now.
    pub next_player: String,
}

impl ActionResult {
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.outcome == ActionOutcome::Move(MoveOutcome::Won)
    }

    #[must_use]
    pub fn rejection(&self) -> Option<Rejection> {
        match self.outcome {
            ActionOutcome::Rejected(reason) => Some(reason),
            _ => None,
        }
    }
}
