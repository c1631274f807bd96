//! Line of sight along the grid axes.
//!
//! One ray primitive serves dragons spotting players, players spotting the
//! treasure, and bullets.

use smallvec::SmallVec;

use crate::core::{Direction, Position};
use crate::maze::{CellType, Maze};

/// Order rays are cast in when looking around.
pub const RAY_ORDER: [Direction; 4] =
    [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

pub const DRAGON_SEES_YOU: &str = "The dragon sees you!";
pub const TREASURE_IN_SIGHT: &str = "You see the treasure!";

/// Where a ray stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RayEnd<T = Position> {
    /// What the probe returned for the first cell it accepted.
    Hit(T),
    /// Last cell before a wall.
    Wall(Position),
    /// Last cell before the grid edge.
    Edge(Position),
}

/// Walk from `from` (exclusive) towards `dir` until `probe` returns
/// something for a cell or a wall stops the ray. The border is walled in
/// any generated maze, so `Edge` only shows up on hand-built grids with a
/// hole in the border.
pub fn cast<T>(
    maze: &Maze,
    from: Position,
    dir: Direction,
    probe: impl Fn(Position) -> Option<T>,
) -> RayEnd<T> {
    let mut cursor = from;
    loop {
        if maze.get(cursor).map_or(false, |cell| cell.walls[dir]) {
            return RayEnd::Wall(cursor);
        }
        let next = cursor.neighbor(dir);
        if !maze.in_bounds(next) {
            return RayEnd::Edge(cursor);
        }
        if let Some(found) = probe(next) {
            return RayEnd::Hit(found);
        }
        cursor = next;
    }
}

/// Whether an unobstructed ray from `from` reaches a cell accepted by `hit`.
pub fn sees(maze: &Maze, from: Position, dir: Direction, hit: impl Fn(Position) -> bool) -> bool {
    matches!(cast(maze, from, dir, |pos| hit(pos).then_some(())), RayEnd::Hit(()))
}

/// Lines seen from `from`: one per dragon ray, then, when `show_treasure`
/// is set and the treasure is on the map, one per ray that reaches it.
pub fn visibility(
    maze: &Maze,
    from: Position,
    show_treasure: bool,
) -> SmallVec<[&'static str; 4]> {
    let mut lines = SmallVec::new();

    for dir in RAY_ORDER {
        if sees(maze, from, dir, |pos| maze.kind(pos) == Some(CellType::Dragon)) {
            lines.push(DRAGON_SEES_YOU);
        }
    }

    if show_treasure && maze.treasure_on_map {
        for dir in RAY_ORDER {
            if sees(maze, from, dir, |pos| pos == maze.treasure) {
                lines.push(TREASURE_IN_SIGHT);
            }
        }
    }

    lines
}
