//! Rejection-sampled placement of features, treasure, and players.

use crate::core::{GameRng, Player, Position};
use crate::maze::{CellType, Maze};

/// Attempts at placing the treasure far enough from the exit before the
/// distance constraint is dropped.
pub const TREASURE_ATTEMPTS: usize = 1000;

/// Rejection-sample a uniformly random cell satisfying `accept`.
///
/// After a bounded number of misses the qualifying cells are enumerated and
/// one is picked directly, so sparse boards cannot stall generation.
/// Returns `None` only when no cell qualifies.
pub fn sample_cell(
    maze: &Maze,
    rng: &mut GameRng,
    accept: impl Fn(Position) -> bool,
) -> Option<Position> {
    let size = maze.size();
    if size == 0 {
        return None;
    }

    for _ in 0..size * size * 8 {
        let pos = Position::new(rng.gen_index(size) as i32, rng.gen_index(size) as i32);
        if accept(pos) {
            return Some(pos);
        }
    }

    let candidates: Vec<Position> = maze.positions().filter(|&pos| accept(pos)).collect();
    rng.choose(&candidates).copied()
}

/// Turn a random empty cell into `kind`.
pub fn place_feature(maze: &mut Maze, rng: &mut GameRng, kind: CellType) -> Option<Position> {
    let pos = sample_cell(maze, rng, |pos| maze.is_empty_cell(pos))?;
    maze.set_kind(pos, kind);
    Some(pos)
}

/// Place the treasure on an empty cell at least `min_distance` (Manhattan)
/// from the exit, falling back to any empty cell after
/// [`TREASURE_ATTEMPTS`] misses. Sets both the live overlay and the respawn
/// anchor.
pub fn place_treasure(maze: &mut Maze, rng: &mut GameRng, min_distance: u32) -> Option<Position> {
    let size = maze.size();
    if size == 0 {
        return None;
    }

    let mut chosen = None;
    if let Some(exit) = maze.find_exit() {
        for _ in 0..TREASURE_ATTEMPTS {
            let pos = Position::new(rng.gen_index(size) as i32, rng.gen_index(size) as i32);
            if maze.is_empty_cell(pos) && pos.manhattan(exit) >= min_distance {
                chosen = Some(pos);
                break;
            }
        }
    }

    let pos = match chosen {
        Some(pos) => pos,
        None => sample_cell(maze, rng, |pos| maze.is_empty_cell(pos))?,
    };
    maze.place_treasure(pos);
    Some(pos)
}

/// Place one player per id on distinct empty cells, never on the treasure.
///
/// Returns `None` if the board runs out of room.
pub fn place_players(maze: &Maze, rng: &mut GameRng, ids: &[String]) -> Option<Vec<Player>> {
    let mut players: Vec<Player> = Vec::with_capacity(ids.len());

    for id in ids {
        let pos = sample_cell(maze, rng, |pos| {
            maze.is_empty_cell(pos)
                && !maze.treasure_at(pos)
                && players.iter().all(|p| p.pos != pos)
        })?;
        players.push(Player::new(id.clone(), pos));
    }

    Some(players)
}
