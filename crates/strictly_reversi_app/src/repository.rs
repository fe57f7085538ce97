//! File persistence for a single game.

use derive_more::{Display, Error};
use std::fs;
use std::path::{Path, PathBuf};
use strictly_reversi::Game;
use tracing::{debug, info, instrument, warn};

/// Which side of a file round trip failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum FileOperation {
    /// Loading a saved game.
    #[display("read")]
    Read,
    /// Saving a game.
    #[display("write")]
    Write,
}

/// Saving or loading failed. Carries the path and the underlying cause, if any.
#[derive(Debug, Clone, Display, Error)]
#[display("Failed to {} game file {}{}", operation, path.display(), cause_suffix(cause))]
pub struct FileIoError {
    /// Read or write.
    pub operation: FileOperation,
    /// File involved.
    pub path: PathBuf,
    /// Underlying cause, when there is one.
    pub cause: Option<String>,
}

fn cause_suffix(cause: &Option<String>) -> String {
    cause
        .as_ref()
        .map(|cause| format!(": {}", cause))
        .unwrap_or_default()
}

impl FileIoError {
    fn read(path: &Path, cause: impl ToString) -> Self {
        Self {
            operation: FileOperation::Read,
            path: path.to_path_buf(),
            cause: Some(cause.to_string()),
        }
    }

    fn write(path: &Path, cause: impl ToString) -> Self {
        Self {
            operation: FileOperation::Write,
            path: path.to_path_buf(),
            cause: Some(cause.to_string()),
        }
    }
}

/// Stores one game in its text symbol form at a fixed path.
#[derive(Debug, Clone)]
pub struct GameRepository {
    path: PathBuf,
}

impl GameRepository {
    /// Creates a repository backed by `path`.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn new(path: impl AsRef<Path>) -> Self {
        info!("Creating GameRepository");
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes `game`, replacing any previous save.
    ///
    /// The symbol is written to a sibling temp file and renamed into
    /// place, so a failed save never leaves a truncated file behind.
    ///
    /// # Errors
    ///
    /// Returns a [`FileOperation::Write`] error if either step fails.
    #[instrument(skip(self, game), fields(path = %self.path.display(), phase = %game.phase()))]
    pub fn save_game(&self, game: &Game) -> Result<(), FileIoError> {
        let mut temp = self.path.clone().into_os_string();
        temp.push(".tmp");
        let temp = PathBuf::from(temp);

        fs::write(&temp, game.to_string()).map_err(|e| FileIoError::write(&self.path, e))?;
        fs::rename(&temp, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp);
            FileIoError::write(&self.path, e)
        })?;

        debug!("Game saved");
        Ok(())
    }

    /// Reads and decodes the saved game.
    ///
    /// # Errors
    ///
    /// Returns a [`FileOperation::Read`] error if the file is missing,
    /// unreadable or not a valid game symbol.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load_game(&self) -> Result<Game, FileIoError> {
        let input = fs::read_to_string(&self.path).map_err(|e| FileIoError::read(&self.path, e))?;
        let game = input.parse::<Game>().map_err(|e| {
            warn!(error = %e, "Saved game is malformed");
            FileIoError::read(&self.path, e)
        })?;

        debug!(phase = %game.phase(), "Game loaded");
        Ok(game)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_includes_path_and_cause() {
        let err = FileIoError::read(Path::new("/tmp/game"), "Missing board");
        assert_eq!(err.to_string(), "Failed to read game file /tmp/game: Missing board");

        let err = FileIoError {
            operation: FileOperation::Write,
            path: PathBuf::from("save"),
            cause: None,
        };
        assert_eq!(err.to_string(), "Failed to write game file save");
    }
}
