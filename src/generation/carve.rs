//! Spanning-tree carving and loop injection.

use crate::core::{Direction, GameRng, Position};
use crate::maze::Maze;

/// One cell on the carving stack: its shuffled directions and how many of
/// them have been tried.
struct Frame {
    pos: Position,
    dirs: [Direction; 4],
    next: usize,
}

/// Randomized depth-first carve from `(0, 0)`.
///
/// Each cell tries its four directions in a shuffled order and only carves
/// into unvisited cells, so the result is a spanning tree: every cell is
/// connected and there are exactly `size * size - 1` open edges.
///
/// Uses an explicit stack, so large grids cannot overflow the call stack.
pub fn carve_spanning_tree(maze: &mut Maze, rng: &mut GameRng) {
    let size = maze.size();
    if size == 0 {
        return;
    }

    let offset = |pos: Position| pos.row as usize * size + pos.col as usize;
    let mut visited = vec![false; size * size];

    let start = Position::new(0, 0);
    visited[offset(start)] = true;
    let mut stack = vec![Frame {
        pos: start,
        dirs: rng.shuffled_directions(),
        next: 0,
    }];

    while let Some(frame) = stack.last_mut() {
        if frame.next == frame.dirs.len() {
            stack.pop();
            continue;
        }

        let pos = frame.pos;
        let dir = frame.dirs[frame.next];
        frame.next += 1;

        let next = pos.neighbor(dir);
        if maze.in_bounds(next) && !visited[offset(next)] {
            maze.remove_wall_between(pos, dir);
            visited[offset(next)] = true;
            stack.push(Frame {
                pos: next,
                dirs: rng.shuffled_directions(),
                next: 0,
            });
        }
    }
}

/// Interior walls still standing.
fn standing_interior_walls(maze: &Maze) -> usize {
    let n = maze.size();
    if n < 2 {
        return 0;
    }
    2 * n * (n - 1) - maze.open_edge_count()
}

/// Knock down `extra_openings` more interior walls, adding loops.
///
/// Each round picks a random cell and removes the first standing interior
/// wall in a shuffled direction order; rounds that find nothing to remove
/// are retried. The quota is capped at the number of walls left, so this
/// always terminates. Returns the number of walls removed.
pub fn open_up(maze: &mut Maze, extra_openings: usize, rng: &mut GameRng) -> usize {
    let quota = extra_openings.min(standing_interior_walls(maze));
    let size = maze.size();
    let mut removed = 0;

    while removed < quota {
        let pos = Position::new(rng.gen_index(size) as i32, rng.gen_index(size) as i32);

        for dir in rng.shuffled_directions() {
            if !maze.in_bounds(pos.neighbor(dir)) {
                continue;
            }
            if maze.remove_wall_between(pos, dir) {
                removed += 1;
                break;
            }
        }
    }

    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    fn reachable_count(maze: &Maze) -> usize {
        let mut seen = vec![Position::new(0, 0)];
        let mut queue = VecDeque::from([Position::new(0, 0)]);

        while let Some(pos) = queue.pop_front() {
            for dir in Direction::ALL {
                let next = pos.neighbor(dir);
                if !maze.has_wall(pos, dir) && !seen.contains(&next) {
                    seen.push(next);
                    queue.push_back(next);
                }
            }
        }

        seen.len()
    }

    #[test]
    fn test_carve_produces_spanning_tree() {
        for seed in 0..20 {
            for size in [2, 3, 5, 8] {
                let mut maze = Maze::new(size);
                let mut rng = GameRng::new(seed);
                carve_spanning_tree(&mut maze, &mut rng);

                assert_eq!(maze.open_edge_count(), size * size - 1, "seed {seed} size {size}");
                assert_eq!(reachable_count(&maze), size * size, "seed {seed} size {size}");
                assert!(maze.walls_are_symmetric());
            }
        }
    }

    #[test]
    fn test_carve_is_deterministic() {
        let mut a = Maze::new(6);
        let mut b = Maze::new(6);
        carve_spanning_tree(&mut a, &mut GameRng::new(99));
        carve_spanning_tree(&mut b, &mut GameRng::new(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_large_grid_does_not_overflow() {
        let mut maze = Maze::new(200);
        carve_spanning_tree(&mut maze, &mut GameRng::new(1));
        assert_eq!(maze.open_edge_count(), 200 * 200 - 1);
    }

    #[test]
    fn test_open_up_removes_exact_quota() {
        let mut maze = Maze::new(6);
        let mut rng = GameRng::new(5);
        carve_spanning_tree(&mut maze, &mut rng);

        let removed = open_up(&mut maze, 10, &mut rng);

        assert_eq!(removed, 10);
        assert_eq!(maze.open_edge_count(), 35 + 10);
        assert!(maze.walls_are_symmetric());
    }

    #[test]
    fn test_open_up_caps_at_remaining_walls() {
        let mut maze = Maze::new(3);
        let mut rng = GameRng::new(5);
        carve_spanning_tree(&mut maze, &mut rng);

        let removed = open_up(&mut maze, 100, &mut rng);

        assert_eq!(removed, 4);
        assert_eq!(maze.open_edge_count(), 12);
        // Border survives even a fully opened interior.
        assert!(maze.walls_are_symmetric());
    }
}
