//! Replaying a recorded history on a copy of the starting position.

use super::{ActionResult, Game};

/// A starting snapshot that recorded commands can be replayed against.
///
/// The snapshot is private; previews never touch a live game.
#[derive(Clone, Debug)]
pub struct Replay {
    start: Game,
}

impl Replay {
    #[must_use]
    pub fn new(start: &Game) -> Self {
        Self { start: start.copy() }
    }

    #[must_use]
    pub fn start(&self) -> &Game {
        &self.start
    }

    /// The game as it stood after the first `moves` commands of `history`.
    pub fn preview<I, S>(&self, history: I, moves: usize) -> Game
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut game = self.start.copy();
        for command in history.into_iter().take(moves) {
            game.perform_action(command.as_ref());
        }
        game
    }

    /// Replay all of `history`, keeping every result.
    pub fn results<I, S>(&self, history: I) -> Vec<ActionResult>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut game = self.start.copy();
        history
            .into_iter()
            .map(|command| game.perform_action(command.as_ref()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Direction, Player, Position};
    use crate::maze::Maze;

    fn open_game() -> Game {
        let mut maze = Maze::new(4);
        let positions: Vec<_> = maze.positions().collect();
        for pos in positions {
            maze.remove_wall_between(pos, Direction::Right);
            maze.remove_wall_between(pos, Direction::Down);
        }
        maze.place_treasure(Position::new(3, 3));
        let players = vec![
            Player::new("P1", Position::new(0, 0)),
            Player::new("P2", Position::new(3, 0)),
        ];
        Game::from_parts(maze, players, 2)
    }

    #[test]
    fn test_preview_matches_live_game() {
        let mut live = open_game();
        let replay = Replay::new(&live);
        for command in ["RIGHT", "UP", "DOWN", "RIGHT", "SHOOT DOWN"] {
            live.perform_action(command);
        }

        let preview = replay.preview(live.move_history().iter(), live.move_history().len());

        assert_eq!(preview.players(), live.players());
        assert_eq!(preview.maze(), live.maze());
        assert_eq!(preview.current_index(), live.current_index());
    }

    #[test]
    fn test_partial_preview_leaves_start_untouched() {
        let mut live = open_game();
        let replay = Replay::new(&live);
        live.perform_action("RIGHT");
        live.perform_action("RIGHT");

        let first = replay.preview(live.move_history().iter(), 1);

        assert_eq!(first.players()[0].pos, Position::new(0, 1));
        assert_eq!(first.players()[1].pos, Position::new(3, 0));
        assert_eq!(replay.start().players()[0].pos, Position::new(0, 0));
    }

    #[test]
    fn test_results_keep_every_step() {
        let replay = Replay::new(&open_game());

        let results = replay.results(["RIGHT", "dance", "RIGHT"]);

        assert_eq!(results.len(), 3);
        assert!(results[0].turn_consumed);
        assert!(!results[1].turn_consumed);
        assert_eq!(results[2].next_player, "P1");
    }
}
