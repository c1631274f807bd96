//! Cells and their walls.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::core::Direction;

/// What occupies a cell. The treasure is not a cell type; it is an overlay
/// tracked by the maze.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellType {
    #[default]
    Empty,
    /// Teleports to the next hole in row-major order.
    Hole,
    /// Pushes players along `river_dir`.
    River,
    /// Where the river ends.
    Estuary,
    Exit,
    /// Heals hurt players.
    Hospital,
    /// Refills the bullet.
    Armory,
    /// Hurts players and makes them drop the treasure.
    Dragon,
}

/// Per-direction wall flags, indexed by [`Direction`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Walls([bool; 4]);

impl Walls {
    /// Walls on every side.
    #[must_use]
    pub const fn all() -> Self {
        Self([true; 4])
    }

    /// No walls at all.
    #[must_use]
    pub const fn none() -> Self {
        Self([false; 4])
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.0.iter().filter(|&&w| w).count()
    }
}

impl Index<Direction> for Walls {
    type Output = bool;

    fn index(&self, dir: Direction) -> &Self::Output {
        &self.0[dir.index()]
    }
}

impl IndexMut<Direction> for Walls {
    fn index_mut(&mut self, dir: Direction) -> &mut Self::Output {
        &mut self.0[dir.index()]
    }
}

/// A single grid cell.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub kind: CellType,
    pub walls: Walls,
    /// For `River`: the direction the current flows into.
    /// For `Estuary`: the direction the flow arrived from.
    /// `None` for every other kind.
    pub river_dir: Option<Direction>,
}

impl Cell {
    /// A fully walled empty cell.
    #[must_use]
    pub fn walled() -> Self {
        Self {
            kind: CellType::Empty,
            walls: Walls::all(),
            river_dir: None,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kind == CellType::Empty
    }

    /// Turn this cell into a river segment flowing towards `dir`.
    pub fn make_river(&mut self, dir: Direction) {
        self.kind = CellType::River;
        self.river_dir = Some(dir);
    }

    /// Turn this cell into the estuary, recording the incoming flow.
    pub fn make_estuary(&mut self, incoming: Direction) {
        self.kind = CellType::Estuary;
        self.river_dir = Some(incoming);
    }
}
