//! Builder for generated games.

use super::Game;
use crate::core::{MazeConfig, Player};
use crate::generation::{GenerationError, MazeGenerator};

/// Builder for creating a [`Game`] on a freshly generated maze.
///
/// Unset feature counts follow [`MazeConfig::for_size`] for the chosen
/// size, so `size` can be set in any order relative to the rest.
///
/// ```
/// use treasure_maze::GameBuilder;
///
/// let game = GameBuilder::new()
///     .size(6)
///     .holes(3)
///     .player_names(&["ann", "bo"])
///     .build(11)
///     .unwrap();
///
/// assert_eq!(game.maze().size(), 6);
/// assert_eq!(game.current_player().id, "ann");
/// ```
#[derive(Clone, Debug)]
pub struct GameBuilder {
    size: usize,
    holes: Option<usize>,
    armories: Option<usize>,
    hospitals: Option<usize>,
    dragons: Option<usize>,
    river_length: Option<usize>,
    river_push: Option<usize>,
    extra_openings: Option<usize>,
    min_treasure_exit_distance: Option<u32>,
    max_attempts: Option<u32>,
    names: Vec<String>,
    show_visibility_messages: bool,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            size: 7,
            holes: None,
            armories: None,
            hospitals: None,
            dragons: None,
            river_length: None,
            river_push: None,
            extra_openings: None,
            min_treasure_exit_distance: None,
            max_attempts: None,
            names: Player::default_ids(2),
            show_visibility_messages: true,
        }
    }
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    pub fn holes(mut self, count: usize) -> Self {
        self.holes = Some(count);
        self
    }

    pub fn armories(mut self, count: usize) -> Self {
        self.armories = Some(count);
        self
    }

    pub fn hospitals(mut self, count: usize) -> Self {
        self.hospitals = Some(count);
        self
    }

    pub fn dragons(mut self, count: usize) -> Self {
        self.dragons = Some(count);
        self
    }

    pub fn river_length(mut self, length: usize) -> Self {
        self.river_length = Some(length);
        self
    }

    pub fn river_push(mut self, push: usize) -> Self {
        self.river_push = Some(push);
        self
    }

    pub fn extra_openings(mut self, count: usize) -> Self {
        self.extra_openings = Some(count);
        self
    }

    pub fn min_treasure_exit_distance(mut self, distance: u32) -> Self {
        self.min_treasure_exit_distance = Some(distance);
        self
    }

    pub fn max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = Some(attempts);
        self
    }

    /// Player names in turn order. Blank entries become `P<n>`. An empty
    /// list makes [`GameBuilder::build`] fail.
    pub fn player_names<S: AsRef<str>>(mut self, names: &[S]) -> Self {
        self.names = Player::resolve_ids(names);
        self
    }

    /// `count` players with default names.
    pub fn player_count(mut self, count: usize) -> Self {
        assert!(count >= 1, "a game needs at least one player");
        self.names = Player::default_ids(count);
        self
    }

    pub fn show_visibility_messages(mut self, show: bool) -> Self {
        self.show_visibility_messages = show;
        self
    }

    /// The maze configuration this builder will generate with.
    #[must_use]
    pub fn config(&self) -> MazeConfig {
        let mut config = MazeConfig::for_size(self.size);
        if let Some(count) = self.holes {
            config.num_holes = count;
        }
        if let Some(count) = self.armories {
            config.num_armories = count;
        }
        if let Some(count) = self.hospitals {
            config.num_hospitals = count;
        }
        if let Some(count) = self.dragons {
            config.num_dragons = count;
        }
        if let Some(length) = self.river_length {
            config.river_length = length;
        }
        if let Some(push) = self.river_push {
            config.river_push = push;
        }
        if let Some(count) = self.extra_openings {
            config.extra_openings = count;
        }
        if let Some(distance) = self.min_treasure_exit_distance {
            config.min_treasure_exit_distance = distance;
        }
        config.max_attempts = self.max_attempts;
        config
    }

    /// Generate the maze and place the players.
    pub fn build(self, seed: u64) -> Result<Game, GenerationError> {
        let config = self.config();
        let river_push = config.river_push;

        let mut generator = MazeGenerator::new(config, seed);
        let (maze, players) = generator.generate_with_players(&self.names)?;

        let mut game = Game::from_parts(maze, players, river_push);
        game.show_visibility_messages = self.show_visibility_messages;
        Ok(game)
    }
}
