//! Maze structure: the cell grid, wall symmetry, and the treasure overlay.
//!
//! ## Invariants
//!
//! - Walls are a symmetric relation between neighbors; the border is always
//!   walled.
//! - A generated maze has exactly one `Exit`.
//! - River cells form one simple directed path ending in a single `Estuary`.
//! - With two or more holes, holes form a teleport ring in row-major order.
//!
//! The treasure is not a cell type. It floats above whatever cell holds it
//! and remembers its spawn point so it can be sent back there.

mod cell;
mod grid;

pub use cell::{Cell, CellType, Walls};
pub use grid::{HoleRing, Maze};
