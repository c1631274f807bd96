//! Solvability gate: the accept/reject check every candidate must pass.

use thiserror::Error;

use crate::core::Player;
use crate::maze::{CellType, Maze};
use crate::solver::Reachability;

/// Why a candidate maze was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Unsolvable {
    #[error("maze has no exit")]
    MissingExit,

    #[error("treasure is not on the map")]
    MissingTreasure,

    #[error("player {0} cannot reach the treasure")]
    TreasureUnreachableFromSpawn(String),

    #[error("treasure cannot be reached from the estuary")]
    TreasureUnreachableFromEstuary,

    #[error("exit cannot be reached from the treasure")]
    ExitUnreachableFromTreasure,

    #[error("hospital cannot be reached from the exit")]
    HospitalUnreachableFromExit,

    #[error("exit cannot be reached from the hospital")]
    ExitUnreachableFromHospital,
}

/// Check that a candidate can be won under the engine's own move rules.
///
/// - every player can reach the treasure from its spawn
/// - the treasure can be reached from the estuary, if there is a river
/// - the exit can be reached from the treasure
/// - the hospital and the exit can reach each other, if there is a hospital
pub fn check_solvable(
    maze: &Maze,
    players: &[Player],
    river_push: usize,
) -> Result<(), Unsolvable> {
    let exit = maze.find_exit().ok_or(Unsolvable::MissingExit)?;
    if !maze.treasure_on_map {
        return Err(Unsolvable::MissingTreasure);
    }
    let treasure = maze.treasure;

    let mut solver = Reachability::new(maze, river_push);

    for player in players {
        if !solver.can_reach(player.pos, treasure) {
            return Err(Unsolvable::TreasureUnreachableFromSpawn(player.id.clone()));
        }
    }

    if let Some(estuary) = maze.find_first(CellType::Estuary) {
        if !solver.can_reach(estuary, treasure) {
            return Err(Unsolvable::TreasureUnreachableFromEstuary);
        }
    }

    if !solver.can_reach(treasure, exit) {
        return Err(Unsolvable::ExitUnreachableFromTreasure);
    }

    if let Some(hospital) = maze.find_first(CellType::Hospital) {
        if !solver.can_reach(exit, hospital) {
            return Err(Unsolvable::HospitalUnreachableFromExit);
        }
        if !solver.can_reach(hospital, exit) {
            return Err(Unsolvable::ExitUnreachableFromHospital);
        }
    }

    Ok(())
}
