//! The turn-based game engine.
//!
//! A [`Game`] owns the maze and the players and waits for the current
//! player's action. Each action either consumes the turn (play passes on
//! and the command is appended to the history) or is rejected with the
//! turn kept.
//!
//! ## Move resolution
//!
//! - Walled in `dir`: a hole teleports the player to the next hole, a river
//!   pushes them along its current, anything else is a wall bump.
//! - Open: the player steps into the neighbor and the cell acts on them
//!   (exit, hole, dragon, hospital, armory, river, estuary). If the treasure
//!   lies in the cell they stepped into, an unhurt player picks it up, even
//!   when a hole or the river has since carried them elsewhere.
//! - Afterwards the player looks down all four axes for dragons and, when
//!   visibility messages are on, for the treasure.

use im::Vector;
use log::trace;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::outcome::{ActionOutcome, ActionResult, MoveOutcome, Rejection, ShotOutcome};
use super::sight::{self, RayEnd};
use super::GameBuilder;
use crate::core::{Action, CommandError, Direction, MazeConfig, Player, Position};
use crate::generation::GenerationError;
use crate::maze::{CellType, Maze};

const HURT_AT_EXIT: &str =
    "You reached the exit but you're hurt and can't escape. Go to a hospital first.";

/// Narrative fragments for one resolution, joined with spaces at the end.
type Lines = SmallVec<[String; 4]>;

/// A move's typed outcome plus the narrative shown to the player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Resolution {
    pub outcome: MoveOutcome,
    pub message: String,
}

/// How far a river carried a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RiverPush {
    /// Ended on the estuary.
    Arrived,
    /// Ran out of push or hit a wall after this many cells.
    Stopped(usize),
}

/// Game state: one maze, the players in turn order, and the history of
/// accepted commands.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub(crate) maze: Maze,
    pub(crate) players: Vec<Player>,
    current: usize,

    /// Report "You see the treasure!" lines. Dragon sightings are always
    /// reported.
    pub show_visibility_messages: bool,

    /// Cells a river carries a player per encounter.
    pub river_move_length: usize,

    move_history: Vector<String>,
    winner: Option<usize>,
}

impl Game {
    /// Wrap an existing maze and players. Player 0 moves first.
    ///
    /// # Panics
    ///
    /// Panics if `players` is empty.
    #[must_use]
    pub fn from_parts(maze: Maze, players: Vec<Player>, river_move_length: usize) -> Self {
        assert!(!players.is_empty(), "a game needs at least one player");
        Self {
            maze,
            players,
            current: 0,
            show_visibility_messages: true,
            river_move_length,
            move_history: Vector::new(),
            winner: None,
        }
    }

    /// Generate a solvable game with one armory, hospital, and dragon, and
    /// a few extra openings. Blank names become `P<n>`.
    ///
    /// ```
    /// use treasure_maze::Game;
    ///
    /// let game = Game::new_with_config(6, 2, 4, 2, &["ann", ""], 7).unwrap();
    ///
    /// assert_eq!(game.players().len(), 2);
    /// assert_eq!(game.players()[1].id, "P2");
    /// assert_eq!(game.current_player().id, "ann");
    /// ```
    pub fn new_with_config<S: AsRef<str>>(
        size: usize,
        holes: usize,
        river_length: usize,
        river_push: usize,
        names: &[S],
        seed: u64,
    ) -> Result<Self, GenerationError> {
        let walls = MazeConfig::for_size(size).walls_after_carving();
        GameBuilder::new()
            .size(size)
            .holes(holes)
            .river_length(river_length)
            .river_push(river_push)
            .extra_openings(walls.min(15))
            .player_names(names)
            .build(seed)
    }

    // === Accessors ===

    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn player(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    /// Accepted commands in canonical form, oldest first.
    #[must_use]
    pub fn move_history(&self) -> &Vector<String> {
        &self.move_history
    }

    /// Index of the player who won, if anyone has.
    #[must_use]
    pub fn winner(&self) -> Option<usize> {
        self.winner
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// An independent snapshot; nothing done to it shows up here.
    #[must_use]
    pub fn copy(&self) -> Self {
        self.clone()
    }

    // === Actions ===

    /// Parse and apply a textual command (`"up"`, `"SHOOT left"`, ...).
    pub fn perform_action(&mut self, command: &str) -> ActionResult {
        match Action::parse(command) {
            Ok(action) => self.apply(action),
            Err(CommandError::Unknown) => self.reject(Rejection::UnknownCommand),
            Err(CommandError::InvalidDirection) => self.reject(Rejection::InvalidDirection),
        }
    }

    /// Apply a typed action for the current player.
    pub fn apply(&mut self, action: Action) -> ActionResult {
        if self.is_over() {
            return self.reject(Rejection::GameOver);
        }

        let actor = self.current;
        let (outcome, message) = match action {
            Action::Move(dir) => {
                let resolution = self.resolve_move(actor, dir);
                if resolution.outcome == MoveOutcome::Won {
                    self.winner = Some(actor);
                }
                (ActionOutcome::Move(resolution.outcome), resolution.message)
            }
            Action::Shoot(dir) => match self.shoot(actor, dir) {
                Ok(result) => result,
                Err(reason) => return self.reject(reason),
            },
        };

        trace!("{} {} -> {:?}", self.players[actor].id, action, outcome);

        self.move_history.push_back(action.command());
        self.advance_turn();

        ActionResult {
            outcome,
            message,
            turn_consumed: true,
            next_player: self.current_player().id.clone(),
        }
    }

    fn reject(&self, reason: Rejection) -> ActionResult {
        trace!("{} rejected: {:?}", self.current_player().id, reason);
        ActionResult {
            outcome: ActionOutcome::Rejected(reason),
            message: reason.message().to_string(),
            turn_consumed: false,
            next_player: self.current_player().id.clone(),
        }
    }

    fn advance_turn(&mut self) {
        self.current = (self.current + 1) % self.players.len();
    }

    // === Move resolution ===

    /// Move player `idx` one step towards `dir` and resolve what happens.
    ///
    /// Does not touch the turn order or history, so the solver can probe
    /// moves directly.
    pub(crate) fn resolve_move(&mut self, idx: usize, dir: Direction) -> Resolution {
        let pos = self.players[idx].pos;
        let mut lines = Lines::new();

        let outcome = if self.maze.has_wall(pos, dir) {
            match self.maze.kind(pos) {
                Some(CellType::Hole) if self.teleport_from_hole(idx) => {
                    lines.push("You hit a wall and got teleported through the hole!".into());
                    MoveOutcome::Teleported
                }
                Some(CellType::River) => {
                    lines.push("You hit a wall but the river pushes you!".into());
                    match self.push_along_river(idx) {
                        RiverPush::Arrived => {
                            lines.push("You arrived at the estuary.".into());
                            MoveOutcome::Moved
                        }
                        RiverPush::Stopped(0) => MoveOutcome::Blocked,
                        RiverPush::Stopped(_) => MoveOutcome::Moved,
                    }
                }
                _ => {
                    lines.push("You hit a wall.".into());
                    MoveOutcome::Blocked
                }
            }
        } else {
            let next = pos.neighbor(dir);
            if !self.maze.in_bounds(next) {
                lines.push("Out of bounds.".into());
                MoveOutcome::OutOfBounds
            } else {
                self.players[idx].pos = next;
                let outcome = self.enter_cell(idx, &mut lines);
                let pickup = self.try_pick_up_treasure(idx, next);
                self.push_visibility(idx, &mut lines);
                lines.extend(pickup);
                return self.finish(idx, outcome, lines);
            }
        };

        self.push_visibility(idx, &mut lines);
        self.finish(idx, outcome, lines)
    }

    fn finish(&self, idx: usize, outcome: MoveOutcome, lines: Lines) -> Resolution {
        Resolution {
            outcome,
            message: format!("{}: {}", self.players[idx].id, lines.join(" ")),
        }
    }

    /// Effects of the cell player `idx` just stepped into.
    fn enter_cell(&mut self, idx: usize, lines: &mut Lines) -> MoveOutcome {
        let pos = self.players[idx].pos;
        let Some(kind) = self.maze.kind(pos) else {
            return MoveOutcome::OutOfBounds;
        };

        match kind {
            CellType::Exit => {
                let player = &self.players[idx];
                if player.has_treasure && !player.hurt {
                    lines.push("You reached the exit with the treasure. You win!".into());
                    return MoveOutcome::Won;
                }
                if player.hurt {
                    lines.push(HURT_AT_EXIT.into());
                } else {
                    lines.push("You reached the exit but don't have the treasure.".into());
                }
                MoveOutcome::Moved
            }
            CellType::Hole => {
                if self.teleport_from_hole(idx) {
                    lines.push("You fell into a hole and got teleported!".into());
                    MoveOutcome::Teleported
                } else {
                    lines.push("You stepped on a hole, but it leads nowhere.".into());
                    MoveOutcome::Moved
                }
            }
            CellType::Dragon => {
                let player = &mut self.players[idx];
                let mut line = if player.hurt {
                    String::from("The dragon burned you. You're still hurt.")
                } else {
                    player.hurt = true;
                    String::from("The dragon burned you. You're hurt now.")
                };
                if player.has_treasure {
                    player.has_treasure = false;
                    self.maze.respawn_treasure();
                    line.push_str(
                        " You lost the treasure and it was returned to its starting position.",
                    );
                }
                lines.push(line);
                MoveOutcome::Hazard
            }
            CellType::Hospital => {
                let player = &mut self.players[idx];
                if player.hurt {
                    player.hurt = false;
                    lines.push("You reached the hospital and are healed!".into());
                } else {
                    lines.push("You visited the hospital, but you're already fine.".into());
                }
                MoveOutcome::Moved
            }
            CellType::Armory => {
                let player = &mut self.players[idx];
                if player.bullet {
                    lines.push("You found an armory but already had a bullet!".into());
                } else {
                    player.bullet = true;
                    lines.push("You found an armory and received a bullet!".into());
                }
                MoveOutcome::Moved
            }
            CellType::River => {
                lines.push("You stepped into a river.".into());
                if self.push_along_river(idx) == RiverPush::Arrived {
                    lines.push("You arrived at the estuary.".into());
                }
                MoveOutcome::Moved
            }
            CellType::Estuary => {
                lines.push("You stepped directly on the estuary.".into());
                MoveOutcome::Moved
            }
            CellType::Empty => {
                lines.push("You moved successfully.".into());
                MoveOutcome::Moved
            }
        }
    }

    /// Pick up the treasure for player `idx` if it lies on `entered`.
    /// Returns the line to report, if any.
    fn try_pick_up_treasure(&mut self, idx: usize, entered: Position) -> Option<String> {
        if !self.maze.treasure_at(entered) {
            return None;
        }
        let player = &mut self.players[idx];
        if player.hurt {
            return Some("You found the treasure but can't pick it up because you are hurt!".into());
        }
        player.has_treasure = true;
        self.maze.pick_up_treasure();
        Some("You found the treasure!".into())
    }

    fn push_visibility(&self, idx: usize, lines: &mut Lines) {
        let pos = self.players[idx].pos;
        let seen = sight::visibility(&self.maze, pos, self.show_visibility_messages);
        lines.extend(seen.iter().map(|line| line.to_string()));
    }

    /// Send player `idx` from their hole to the next one in the ring.
    /// Returns false (leaving them put) when there is nowhere to go.
    fn teleport_from_hole(&mut self, idx: usize) -> bool {
        match self.maze.next_hole(self.players[idx].pos) {
            Some(target) => {
                self.players[idx].pos = target;
                true
            }
            None => false,
        }
    }

    /// Carry player `idx` along the current for up to `river_move_length`
    /// cells, stopping early at the estuary, a wall, or the edge.
    fn push_along_river(&mut self, idx: usize) -> RiverPush {
        let mut moved = 0;
        for _ in 0..self.river_move_length {
            let pos = self.players[idx].pos;
            let Some(cell) = self.maze.get(pos) else {
                break;
            };
            if cell.kind == CellType::Estuary {
                return RiverPush::Arrived;
            }
            let Some(dir) = cell.river_dir else {
                break;
            };
            if cell.walls[dir] {
                break;
            }
            let next = pos.neighbor(dir);
            if !self.maze.in_bounds(next) {
                break;
            }
            self.players[idx].pos = next;
            moved += 1;
            if self.maze.kind(next) == Some(CellType::Estuary) {
                return RiverPush::Arrived;
            }
        }
        RiverPush::Stopped(moved)
    }

    // === Shooting ===

    fn shoot(&mut self, idx: usize, dir: Direction) -> Result<(ActionOutcome, String), Rejection> {
        if !self.players[idx].bullet {
            return Err(Rejection::NoBullets);
        }

        let from = self.players[idx].pos;
        let players = &self.players;
        // The first player in turn order standing on the cell takes it.
        let end = sight::cast(&self.maze, from, dir, |pos| {
            players.iter().position(|p| p.pos == pos)
        });
        self.players[idx].bullet = false;

        let (outcome, mut message) = match end {
            RayEnd::Wall(_) => (
                ShotOutcome::HitWall,
                String::from("Your bullet hit a wall and stopped."),
            ),
            RayEnd::Edge(_) => (
                ShotOutcome::OutOfBounds,
                String::from("Your bullet flew out of bounds."),
            ),
            RayEnd::Hit(victim) => self.wound(victim),
        };

        let teleported =
            self.maze.kind(from) == Some(CellType::Hole) && self.teleport_from_hole(idx);
        if teleported {
            message.push_str(" You shot and got teleported through the hole!");
        }

        Ok((ActionOutcome::Shot { outcome, teleported }, message))
    }

    /// Hurt player `victim`, dropping the treasure where they stand.
    fn wound(&mut self, victim: usize) -> (ShotOutcome, String) {
        let target = &mut self.players[victim];
        target.hurt = true;

        let dropped_treasure = target.has_treasure;
        let message = if dropped_treasure {
            target.has_treasure = false;
            self.maze.drop_treasure_at(target.pos);
            format!("You shot player {}! They are now hurt and dropped the treasure.", target.id)
        } else {
            format!("You shot player {}! They are now hurt.", target.id)
        };

        (ShotOutcome::HitPlayer { victim, dropped_treasure }, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 5x5 board with the whole top row open and nothing else carved.
    fn row_game(players: Vec<Player>) -> Game {
        let mut maze = Maze::new(5);
        for col in 0..4 {
            maze.remove_wall_between(Position::new(0, col), Direction::Right);
        }
        maze.place_treasure(Position::new(4, 4));
        let mut game = Game::from_parts(maze, players, 2);
        game.show_visibility_messages = false;
        game
    }

    fn one_player(col: i32) -> Game {
        row_game(vec![Player::new("P1", Position::new(0, col))])
    }

    #[test]
    fn test_plain_move() {
        let mut game = one_player(0);

        let result = game.perform_action("right");

        assert_eq!(result.outcome, ActionOutcome::Move(MoveOutcome::Moved));
        assert_eq!(result.message, "P1: You moved successfully.");
        assert!(result.turn_consumed);
        assert_eq!(game.players()[0].pos, Position::new(0, 1));
        assert_eq!(game.move_history().len(), 1);
    }

    #[test]
    fn test_wall_bump_still_consumes_turn() {
        let mut game = row_game(vec![
            Player::new("P1", Position::new(0, 0)),
            Player::new("P2", Position::new(0, 4)),
        ]);

        let result = game.perform_action("DOWN");

        assert_eq!(result.outcome, ActionOutcome::Move(MoveOutcome::Blocked));
        assert_eq!(result.message, "P1: You hit a wall.");
        assert!(result.turn_consumed);
        assert_eq!(result.next_player, "P2");
        assert_eq!(game.players()[0].pos, Position::new(0, 0));
    }

    #[test]
    fn test_dragon_hurts_and_respawns_treasure() {
        let mut game = one_player(0);
        game.maze.set_kind(Position::new(0, 1), CellType::Dragon);
        game.maze.pick_up_treasure();
        game.players[0].has_treasure = true;

        let result = game.perform_action("RIGHT");

        assert_eq!(result.outcome, ActionOutcome::Move(MoveOutcome::Hazard));
        assert!(result.message.contains("You're hurt now."));
        assert!(result.message.contains("returned to its starting position"));
        let player = &game.players()[0];
        assert!(player.hurt);
        assert!(!player.has_treasure);
        assert!(game.maze().treasure_at(Position::new(4, 4)));
    }

    #[test]
    fn test_dragon_burns_hurt_player_again() {
        let mut game = one_player(0);
        game.maze.set_kind(Position::new(0, 1), CellType::Dragon);
        game.players[0].hurt = true;

        let result = game.perform_action("RIGHT");

        assert!(result.message.contains("You're still hurt."));
    }

    #[test]
    fn test_hospital_and_armory() {
        let mut game = one_player(0);
        game.maze.set_kind(Position::new(0, 1), CellType::Hospital);
        game.maze.set_kind(Position::new(0, 2), CellType::Armory);
        game.players[0].hurt = true;
        game.players[0].bullet = false;

        let healed = game.perform_action("RIGHT");
        assert!(healed.message.contains("healed"));
        assert!(!game.players()[0].hurt);

        let armed = game.perform_action("RIGHT");
        assert!(armed.message.contains("received a bullet"));
        assert!(game.players()[0].bullet);

        let again = game.perform_action("LEFT");
        assert!(again.message.contains("already fine"));
    }

    #[test]
    fn test_treasure_pickup_and_hurt_refusal() {
        let mut game = one_player(0);
        game.maze.place_treasure(Position::new(0, 1));

        let result = game.perform_action("RIGHT");
        assert!(result.message.ends_with("You found the treasure!"));
        assert!(game.players()[0].has_treasure);
        assert!(!game.maze().treasure_on_map);

        let mut hurt = one_player(0);
        hurt.maze.place_treasure(Position::new(0, 1));
        hurt.players[0].hurt = true;

        let result = hurt.perform_action("RIGHT");
        assert!(result.message.contains("can't pick it up"));
        assert!(!hurt.players()[0].has_treasure);
        assert!(hurt.maze().treasure_on_map);
    }

    #[test]
    fn test_visibility_lines_follow_cell_message() {
        let mut game = one_player(0);
        game.maze.set_kind(Position::new(0, 4), CellType::Dragon);
        game.maze.place_treasure(Position::new(0, 3));
        game.show_visibility_messages = true;

        let result = game.perform_action("RIGHT");

        assert_eq!(
            result.message,
            "P1: You moved successfully. The dragon sees you! You see the treasure!"
        );
    }

    #[test]
    fn test_river_push_stops_at_estuary() {
        let mut game = one_player(0);
        game.river_move_length = 5;
        game.maze.get_mut(Position::new(0, 1)).unwrap().make_river(Direction::Right);
        game.maze.get_mut(Position::new(0, 2)).unwrap().make_estuary(Direction::Right);

        let result = game.perform_action("RIGHT");

        assert_eq!(game.players()[0].pos, Position::new(0, 2));
        assert_eq!(
            result.message,
            "P1: You stepped into a river. You arrived at the estuary."
        );
    }

    #[test]
    fn test_treasure_on_river_is_picked_up_before_the_push() {
        let mut game = one_player(0);
        game.maze.get_mut(Position::new(0, 1)).unwrap().make_river(Direction::Right);
        game.maze.get_mut(Position::new(0, 2)).unwrap().make_river(Direction::Right);
        game.maze.get_mut(Position::new(0, 3)).unwrap().make_estuary(Direction::Right);
        game.maze.place_treasure(Position::new(0, 1));

        let result = game.perform_action("RIGHT");

        assert_eq!(game.players()[0].pos, Position::new(0, 3));
        assert!(game.players()[0].has_treasure);
        assert!(!game.maze().treasure_on_map);
        assert_eq!(
            result.message,
            "P1: You stepped into a river. You arrived at the estuary. You found the treasure!"
        );
    }

    #[test]
    fn test_treasure_where_the_river_drops_you_stays_put() {
        let mut game = one_player(0);
        game.maze.get_mut(Position::new(0, 1)).unwrap().make_river(Direction::Right);
        game.maze.get_mut(Position::new(0, 2)).unwrap().make_river(Direction::Right);
        game.maze.place_treasure(Position::new(0, 3));

        game.perform_action("RIGHT");

        assert_eq!(game.players()[0].pos, Position::new(0, 3));
        assert!(!game.players()[0].has_treasure);
        assert!(game.maze().treasure_at(Position::new(0, 3)));
    }

    #[test]
    fn test_river_bump_against_walled_current_is_blocked() {
        let mut game = one_player(1);
        game.maze.get_mut(Position::new(0, 1)).unwrap().make_river(Direction::Right);
        game.maze.add_wall(Position::new(0, 1), Direction::Right);

        let result = game.perform_action("UP");

        assert_eq!(result.outcome, ActionOutcome::Move(MoveOutcome::Blocked));
        assert_eq!(result.message, "P1: You hit a wall but the river pushes you!");
        assert!(result.turn_consumed);
        assert_eq!(game.players()[0].pos, Position::new(0, 1));
    }

    #[test]
    fn test_move_through_gap_in_border_is_out_of_bounds() {
        let mut game = one_player(0);
        game.maze.get_mut(Position::new(0, 0)).unwrap().walls[Direction::Up] = false;

        let result = game.perform_action("UP");

        assert_eq!(result.outcome, ActionOutcome::Move(MoveOutcome::OutOfBounds));
        assert_eq!(result.message, "P1: Out of bounds.");
        assert!(result.turn_consumed);
        assert_eq!(game.players()[0].pos, Position::new(0, 0));
    }

    #[test]
    fn test_bullet_through_gap_in_border_flies_out() {
        let mut game = one_player(0);
        game.maze.get_mut(Position::new(0, 4)).unwrap().walls[Direction::Right] = false;

        let result = game.perform_action("SHOOT RIGHT");

        assert_eq!(
            result.outcome,
            ActionOutcome::Shot { outcome: ShotOutcome::OutOfBounds, teleported: false }
        );
        assert_eq!(result.message, "Your bullet flew out of bounds.");
        assert!(!game.players()[0].bullet);
    }

    #[test]
    fn test_river_pushes_even_when_walled_forward() {
        let mut game = one_player(1);
        game.maze.get_mut(Position::new(0, 1)).unwrap().make_river(Direction::Right);
        game.maze.get_mut(Position::new(0, 2)).unwrap().make_river(Direction::Right);

        let result = game.perform_action("UP");

        assert_eq!(result.outcome, ActionOutcome::Move(MoveOutcome::Moved));
        assert!(result.message.contains("the river pushes you"));
        assert_eq!(game.players()[0].pos, Position::new(0, 3));
    }

    #[test]
    fn test_shot_without_target_hits_wall() {
        let mut game = one_player(0);

        let result = game.perform_action("SHOOT RIGHT");

        assert_eq!(
            result.outcome,
            ActionOutcome::Shot { outcome: ShotOutcome::HitWall, teleported: false }
        );
        assert_eq!(result.message, "Your bullet hit a wall and stopped.");
        assert!(!game.players()[0].bullet);
    }

    #[test]
    fn test_invalid_shot_direction_keeps_turn() {
        let mut game = row_game(vec![
            Player::new("P1", Position::new(0, 0)),
            Player::new("P2", Position::new(0, 4)),
        ]);

        let result = game.perform_action("shoot sideways");

        assert_eq!(result.rejection(), Some(Rejection::InvalidDirection));
        assert!(!result.turn_consumed);
        assert_eq!(game.current_player().id, "P1");
        assert!(game.players()[0].bullet);
        assert!(game.move_history().is_empty());
    }

    #[test]
    fn test_shooting_from_a_hole_teleports() {
        let mut game = one_player(0);
        game.maze.set_kind(Position::new(0, 0), CellType::Hole);
        game.maze.set_kind(Position::new(2, 2), CellType::Hole);

        let result = game.perform_action("SHOOT RIGHT");

        assert_eq!(
            result.outcome,
            ActionOutcome::Shot { outcome: ShotOutcome::HitWall, teleported: true }
        );
        assert!(result.message.ends_with("You shot and got teleported through the hole!"));
        assert_eq!(game.players()[0].pos, Position::new(2, 2));
    }

    #[test]
    fn test_lone_hole_goes_nowhere() {
        let mut game = one_player(0);
        game.maze.set_kind(Position::new(0, 1), CellType::Hole);

        let result = game.perform_action("RIGHT");

        assert_eq!(result.outcome, ActionOutcome::Move(MoveOutcome::Moved));
        assert_eq!(game.players()[0].pos, Position::new(0, 1));

        let bump = game.perform_action("DOWN");
        assert_eq!(bump.outcome, ActionOutcome::Move(MoveOutcome::Blocked));
    }

    #[test]
    fn test_resolve_move_leaves_turn_alone() {
        let mut game = one_player(0);

        let resolution = game.resolve_move(0, Direction::Right);

        assert_eq!(resolution.outcome, MoveOutcome::Moved);
        assert!(game.move_history().is_empty());
        assert_eq!(game.current_index(), 0);
    }

    #[test]
    #[should_panic(expected = "at least one player")]
    fn test_from_parts_requires_players() {
        let _ = Game::from_parts(Maze::new(3), Vec::new(), 2);
    }
}
