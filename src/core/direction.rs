//! Grid primitives: directions, positions, and the adjacency algebra.
//!
//! Everything here is pure. Neighbors of border cells are allowed to fall
//! outside the grid; callers bounds-check with `Maze::in_bounds`.
//!
//! ```
//! use treasure_maze::core::{Direction, Position};
//!
//! let p = Position::new(2, 3);
//! assert_eq!(p.neighbor(Direction::Up), Position::new(1, 3));
//! assert_eq!(Direction::Left.opposite(), Direction::Right);
//! assert_eq!(Direction::from_delta(0, 1), Some(Direction::Right));
//! ```

use serde::{Deserialize, Serialize};

/// One of the four orthogonal directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// All directions in declaration order.
    pub const ALL: [Direction; 4] =
        [Direction::Up, Direction::Right, Direction::Down, Direction::Left];

    /// Stable 0-based index, usable for per-direction arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Right => 1,
            Direction::Down => 2,
            Direction::Left => 3,
        }
    }

    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }

    /// Row/column step for this direction.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
        }
    }

    /// Inverse of [`Direction::delta`]. Returns `None` for anything that is
    /// not a unit orthogonal step.
    #[must_use]
    pub const fn from_delta(dr: i32, dc: i32) -> Option<Self> {
        match (dr, dc) {
            (-1, 0) => Some(Direction::Up),
            (0, 1) => Some(Direction::Right),
            (1, 0) => Some(Direction::Down),
            (0, -1) => Some(Direction::Left),
            _ => None,
        }
    }

    /// Parse `UP`, `DOWN`, `LEFT` or `RIGHT`, ignoring case.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_uppercase().as_str() {
            "UP" => Some(Direction::Up),
            "RIGHT" => Some(Direction::Right),
            "DOWN" => Some(Direction::Down),
            "LEFT" => Some(Direction::Left),
            _ => None,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let word = match self {
            Direction::Up => "UP",
            Direction::Right => "RIGHT",
            Direction::Down => "DOWN",
            Direction::Left => "LEFT",
        };
        f.write_str(word)
    }
}

/// A grid coordinate. Signed so out-of-grid neighbors are representable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The adjacent position in `dir`, which may lie outside the grid.
    #[must_use]
    pub const fn neighbor(self, dir: Direction) -> Self {
        let (dr, dc) = dir.delta();
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    #[must_use]
    pub const fn manhattan(self, other: Position) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Direction of a single orthogonal step from `self` to `next`.
    #[must_use]
    pub const fn direction_to(self, next: Position) -> Option<Direction> {
        Direction::from_delta(next.row - self.row, next.col - self.col)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
