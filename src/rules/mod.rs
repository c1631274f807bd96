//! The game engine: turn order, move and shot resolution, visibility.
//!
//! Front ends drive a [`Game`] with textual commands or typed
//! [`Action`](crate::core::Action)s and branch on the typed
//! [`ActionOutcome`] in the returned [`ActionResult`]. The message is for
//! display only.
//!
//! The reachability solver reuses the same move resolution, so "reachable"
//! always means reachable under these rules.

pub mod builder;
pub mod engine;
pub mod outcome;
pub mod replay;
pub mod sight;

pub use builder::GameBuilder;
pub use engine::Game;
pub use outcome::{ActionOutcome, ActionResult, MoveOutcome, Rejection, ShotOutcome};
pub use replay::Replay;
pub use sight::RayEnd;
