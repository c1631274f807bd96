//! Reachability under the engine's own rules.
//!
//! A plain graph walk over open walls would miss one-way rivers and hole
//! teleports. Instead the solver puts a scout on a private copy of the maze
//! and tries every move through the engine's move resolution.
//!
//! Search is depth-first over an explicit stack. Stack entries hold only
//! what a move can change (the scout and the treasure overlay) and are
//! written back into the scratch game before each probe.

use rustc_hash::FxHashSet;

use crate::core::{Direction, Player, Position};
use crate::maze::{CellType, Maze};
use crate::rules::Game;

/// Moves tried from each cell, in order.
const PROBE_ORDER: [Direction; 4] =
    [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

const SCOUT_ID: &str = "scout";

/// The slice of game state a move can change.
#[derive(Clone, Debug)]
struct Snapshot {
    scout: Player,
    treasure: Position,
    treasure_on_map: bool,
}

/// "Can a player get from A to B" oracle for one maze.
///
/// ```
/// use treasure_maze::core::{Direction, Position};
/// use treasure_maze::maze::Maze;
/// use treasure_maze::solver::Reachability;
///
/// let mut maze = Maze::new(3);
/// maze.remove_wall_between(Position::new(0, 0), Direction::Right);
///
/// let mut solver = Reachability::new(&maze, 2);
/// assert!(solver.can_reach(Position::new(0, 0), Position::new(0, 1)));
/// assert!(!solver.can_reach(Position::new(0, 0), Position::new(2, 2)));
/// ```
#[derive(Clone, Debug)]
pub struct Reachability {
    game: Game,
    initial_treasure: (Position, bool),
}

impl Reachability {
    /// A solver over a copy of `maze`, with rivers pushing `river_push`
    /// cells.
    #[must_use]
    pub fn new(maze: &Maze, river_push: usize) -> Self {
        let scout = Player::new(SCOUT_ID, Position::new(0, 0));
        let mut game = Game::from_parts(maze.clone(), vec![scout], river_push);
        game.show_visibility_messages = false;

        Self {
            initial_treasure: (maze.treasure, maze.treasure_on_map),
            game,
        }
    }

    /// Whether a fresh player standing on `start` can walk to `target`
    /// without stepping on a dragon.
    pub fn can_reach(&mut self, start: Position, target: Position) -> bool {
        let (treasure, treasure_on_map) = self.initial_treasure;
        let mut stack = vec![Snapshot {
            scout: Player::new(SCOUT_ID, start),
            treasure,
            treasure_on_map,
        }];
        let mut visited = FxHashSet::default();

        while let Some(snapshot) = stack.pop() {
            let pos = snapshot.scout.pos;
            if pos == target {
                return true;
            }
            if !visited.insert(pos) {
                continue;
            }

            for dir in PROBE_ORDER {
                self.restore(&snapshot);
                let resolution = self.game.resolve_move(0, dir);
                if !resolution.outcome.changed_position() {
                    continue;
                }
                if self.game.maze.kind(self.game.players[0].pos) == Some(CellType::Dragon) {
                    continue;
                }
                stack.push(self.snapshot());
            }
        }

        false
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            scout: self.game.players[0].clone(),
            treasure: self.game.maze.treasure,
            treasure_on_map: self.game.maze.treasure_on_map,
        }
    }

    fn restore(&mut self, snapshot: &Snapshot) {
        self.game.players[0].clone_from(&snapshot.scout);
        self.game.maze.treasure = snapshot.treasure;
        self.game.maze.treasure_on_map = snapshot.treasure_on_map;
    }
}
