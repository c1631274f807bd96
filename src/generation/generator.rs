//! The generate-validate-retry loop.

use log::{debug, info, warn};

use super::carve::{carve_spanning_tree, open_up};
use super::features::{place_feature, place_players, place_treasure};
use super::gate::check_solvable;
use super::river::place_river;
use super::GenerationError;
use crate::core::{GameRng, MazeConfig, Player};
use crate::maze::{CellType, Maze};

/// Builds solvable mazes from a [`MazeConfig`] and a seed.
///
/// Every candidate is drawn from its own fork of the generator's RNG, so
/// the same `(config, seed)` pair always yields the same maze, and calling
/// `generate` again on the same generator yields a fresh one.
///
/// ```
/// use treasure_maze::core::MazeConfig;
/// use treasure_maze::generation::MazeGenerator;
///
/// let mut generator = MazeGenerator::new(MazeConfig::for_size(6), 42);
/// let (maze, players) = generator.generate_with_players(&["alice", "bob"]).unwrap();
///
/// assert_eq!(maze.size(), 6);
/// assert_eq!(players[1].id, "bob");
/// ```
#[derive(Clone, Debug)]
pub struct MazeGenerator {
    config: MazeConfig,
    rng: GameRng,
}

impl MazeGenerator {
    pub fn new(config: MazeConfig, seed: u64) -> Self {
        Self {
            config,
            rng: GameRng::new(seed),
        }
    }

    pub fn config(&self) -> &MazeConfig {
        &self.config
    }

    /// A maze that passes every player-independent gate check.
    pub fn generate(&mut self) -> Result<Maze, GenerationError> {
        self.config.validate()?;
        self.search(&[]).map(|(maze, _)| maze)
    }

    /// A maze plus placed players, accepted only once every player can
    /// reach the treasure and the board passes the gate.
    ///
    /// Blank names fall back to `P<n>`. An empty list is rejected with
    /// [`ConfigError::NoPlayers`](crate::core::ConfigError::NoPlayers).
    pub fn generate_with_players<S: AsRef<str>>(
        &mut self,
        names: &[S],
    ) -> Result<(Maze, Vec<Player>), GenerationError> {
        self.config.validate_with_players(names.len())?;
        let ids = Player::resolve_ids(names);
        self.search(&ids)
    }

    /// Draw candidates until one passes the gate or the attempt cap runs out.
    fn search(&mut self, ids: &[String]) -> Result<(Maze, Vec<Player>), GenerationError> {
        let mut attempts = 0u32;
        loop {
            if let Some(max) = self.config.max_attempts {
                if attempts >= max {
                    warn!("gave up after {attempts} rejected candidates");
                    return Err(GenerationError::Exhausted { attempts });
                }
            }
            attempts += 1;

            let mut rng = self.rng.fork();

            let Some(maze) = build_candidate(&self.config, &mut rng) else {
                debug!("candidate {attempts}: ran out of room for features");
                continue;
            };
            let Some(players) = place_players(&maze, &mut rng, ids) else {
                debug!("candidate {attempts}: ran out of room for players");
                continue;
            };

            match check_solvable(&maze, &players, self.config.river_push) {
                Ok(()) => {
                    info!(
                        "accepted {size}x{size} maze after {attempts} candidate(s)",
                        size = self.config.size
                    );
                    return Ok((maze, players));
                }
                Err(reason) => debug!("candidate {attempts} rejected: {reason}"),
            }
        }
    }
}

/// Generate one solvable maze for `config`.
pub fn generate_maze(config: &MazeConfig, seed: u64) -> Result<Maze, GenerationError> {
    MazeGenerator::new(config.clone(), seed).generate()
}

/// Steps 1–5 of generation: carve, open up, place features, treasure, river.
fn build_candidate(config: &MazeConfig, rng: &mut GameRng) -> Option<Maze> {
    let mut maze = Maze::new(config.size);

    carve_spanning_tree(&mut maze, rng);
    open_up(&mut maze, config.extra_openings, rng);

    place_feature(&mut maze, rng, CellType::Exit)?;
    let features = [
        (CellType::Hole, config.num_holes),
        (CellType::Hospital, config.num_hospitals),
        (CellType::Armory, config.num_armories),
        (CellType::Dragon, config.num_dragons),
    ];
    for (kind, count) in features {
        for _ in 0..count {
            place_feature(&mut maze, rng, kind)?;
        }
    }

    place_treasure(&mut maze, rng, config.min_treasure_exit_distance)?;

    if config.river_length > 0 && place_river(&mut maze, rng, config.river_length).is_none() {
        warn!("no room for a river of length {}", config.river_length);
    }

    Some(maze)
}
