//! River placement by constrained random walk.

use rustc_hash::FxHashSet;

use crate::core::{GameRng, Position};
use crate::maze::Maze;

/// Random walks tried before giving up on a river.
pub const RIVER_ATTEMPTS: u32 = 100_000;

/// Chance per step that the walk picks a new direction.
const TURN_PROBABILITY: f64 = 0.5;

/// Lay a river of at least `length` cells (and at least two, so the estuary
/// has an incoming direction).
///
/// Each attempt starts on a random empty cell with a random heading and
/// walks while the next cell is in bounds, empty, unused, and not walled
/// off, stopping at the first rejected step or after `length + 1` cells.
/// Short walks are discarded. Returns the path from source to estuary, or
/// `None` (leaving the maze untouched) when no attempt succeeds.
pub fn place_river(maze: &mut Maze, rng: &mut GameRng, length: usize) -> Option<Vec<Position>> {
    let size = maze.size();
    if length == 0 || size == 0 {
        return None;
    }
    let min_cells = length.max(2);

    for _ in 0..RIVER_ATTEMPTS {
        let start = Position::new(rng.gen_index(size) as i32, rng.gen_index(size) as i32);
        if !maze.is_empty_cell(start) {
            continue;
        }

        let mut path = vec![start];
        let mut used = FxHashSet::default();
        used.insert(start);

        let mut heading = rng.gen_direction();
        let mut cursor = start;

        while path.len() < length + 1 {
            if rng.gen_bool(TURN_PROBABILITY) {
                heading = rng.gen_direction();
            }

            let next = cursor.neighbor(heading);
            if !maze.is_empty_cell(next)
                || used.contains(&next)
                || maze.has_wall(cursor, heading)
                || maze.has_wall(next, heading.opposite())
            {
                break;
            }

            path.push(next);
            used.insert(next);
            cursor = next;
        }

        if path.len() < min_cells {
            continue;
        }

        lay_river(maze, &path);
        return Some(path);
    }

    None
}

/// Mark `path` as river cells flowing to the next cell, ending in an
/// estuary that records the incoming direction.
fn lay_river(maze: &mut Maze, path: &[Position]) {
    for (i, pair) in path.windows(2).enumerate() {
        let Some(dir) = pair[0].direction_to(pair[1]) else {
            continue;
        };
        if let Some(cell) = maze.get_mut(pair[0]) {
            cell.make_river(dir);
        }
        if i + 2 == path.len() {
            if let Some(cell) = maze.get_mut(pair[1]) {
                cell.make_estuary(dir);
            }
        }
    }
}
