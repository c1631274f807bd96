//! Saving and loading games.
//!
//! A save is the whole [`Game`] (maze, players, turn index, history)
//! encoded with bincode into a named file inside a save directory. There is
//! no format version: saves from an older build of the crate may fail to
//! decode. A save that decodes but describes an unplayable game is refused
//! with [`SaveError::Invalid`].

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;

use crate::rules::Game;

/// Directory used by [`Game::save_to_file`] and [`Game::load_from_file`].
pub const DEFAULT_SAVE_DIR: &str = "saved";

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to encode game: {0}")]
    Encode(bincode::Error),

    #[error("failed to decode save: {0}")]
    Decode(bincode::Error),

    #[error("no save named {0:?}")]
    NotFound(String),

    #[error("invalid save name {0:?}")]
    InvalidName(String),

    #[error("save holds an unplayable game: {0}")]
    Invalid(String),
}

/// A directory of named saves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SaveStore {
    dir: PathBuf,
}

impl Default for SaveStore {
    fn default() -> Self {
        Self::new(DEFAULT_SAVE_DIR)
    }
}

impl SaveStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the save called `name`. Names are plain file names: no
    /// separators, not empty, not `.` or `..`.
    pub fn path_for(&self, name: &str) -> Result<PathBuf, SaveError> {
        let valid = !name.is_empty()
            && name != "."
            && name != ".."
            && !name.contains(|c: char| c == '/' || c == '\\');
        if !valid {
            return Err(SaveError::InvalidName(name.to_string()));
        }
        Ok(self.dir.join(name))
    }

    /// Write `game` under `name`, creating the directory if needed and
    /// replacing any earlier save with that name.
    pub fn save(&self, game: &Game, name: &str) -> Result<PathBuf, SaveError> {
        let path = self.path_for(name)?;
        fs::create_dir_all(&self.dir)?;

        let mut writer = BufWriter::new(File::create(&path)?);
        bincode::serialize_into(&mut writer, game).map_err(SaveError::Encode)?;
        writer.flush()?;

        debug!("saved game to {}", path.display());
        Ok(path)
    }

    pub fn load(&self, name: &str) -> Result<Game, SaveError> {
        let path = self.path_for(name)?;
        let file = match File::open(&path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(SaveError::NotFound(name.to_string()));
            }
            Err(err) => return Err(err.into()),
        };

        let game: Game =
            bincode::deserialize_from(BufReader::new(file)).map_err(SaveError::Decode)?;
        check_playable(&game)?;
        debug!("loaded game from {}", path.display());
        Ok(game)
    }

    /// Names of all saves, sorted. A missing directory has no saves.
    pub fn list(&self) -> Result<Vec<String>, SaveError> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    pub fn delete(&self, name: &str) -> Result<(), SaveError> {
        let path = self.path_for(name)?;
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                Err(SaveError::NotFound(name.to_string()))
            }
            Err(err) => Err(err.into()),
        }
    }

    #[must_use]
    pub fn exists(&self, name: &str) -> bool {
        self.path_for(name).map_or(false, |path| path.is_file())
    }
}

/// Reject decoded games the engine would index out of range on.
fn check_playable(game: &Game) -> Result<(), SaveError> {
    let maze = game.maze();
    let players = game.players();

    if !maze.has_full_grid() {
        return Err(SaveError::Invalid(format!(
            "a {}x{} maze needs {} cells",
            maze.size(),
            maze.size(),
            maze.size() * maze.size()
        )));
    }
    if players.is_empty() {
        return Err(SaveError::Invalid("no players".to_string()));
    }
    if game.current_index() >= players.len() {
        return Err(SaveError::Invalid(format!(
            "turn index {} with {} players",
            game.current_index(),
            players.len()
        )));
    }
    if let Some(winner) = game.winner().filter(|&w| w >= players.len()) {
        return Err(SaveError::Invalid(format!("winner index {winner} out of range")));
    }
    if let Some(stray) = players.iter().find(|p| !maze.in_bounds(p.pos)) {
        return Err(SaveError::Invalid(format!(
            "player {} at {} is off the grid",
            stray.id, stray.pos
        )));
    }
    Ok(())
}

impl Game {
    /// Save into the `saved/` directory under the working directory.
    pub fn save_to_file(&self, name: &str) -> Result<(), SaveError> {
        SaveStore::default().save(self, name).map(|_| ())
    }

    /// Load a game saved with [`Game::save_to_file`].
    pub fn load_from_file(name: &str) -> Result<Game, SaveError> {
        SaveStore::default().load(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_path_like_names() {
        let store = SaveStore::new("somewhere");

        for name in ["", ".", "..", "a/b", "..\\up"] {
            assert!(
                matches!(store.path_for(name), Err(SaveError::InvalidName(_))),
                "{name:?} should be rejected"
            );
        }
        assert_eq!(store.path_for("slot1").unwrap(), Path::new("somewhere").join("slot1"));
    }

    #[test]
    fn test_missing_directory_lists_nothing() {
        let store = SaveStore::new("this/directory/does/not/exist");
        assert!(store.list().unwrap().is_empty());
        assert!(matches!(store.load("x"), Err(SaveError::NotFound(_))));
    }

    #[test]
    fn test_playable_game_passes_check() {
        let game = crate::GameBuilder::new().size(5).build(3).unwrap();
        assert!(check_playable(&game).is_ok());
    }

    #[test]
    fn test_stray_player_fails_check() {
        let mut game = crate::GameBuilder::new().size(5).build(3).unwrap();
        game.players[0].pos = crate::core::Position::new(9, 9);

        assert!(matches!(check_playable(&game), Err(SaveError::Invalid(_))));
    }

    #[test]
    fn test_default_store_dir() {
        assert_eq!(SaveStore::default().dir(), Path::new(DEFAULT_SAVE_DIR));
    }
}
