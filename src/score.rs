use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

const APP_DIR_NAME: &str = "snake-arcade";
const SCORE_FILE_NAME: &str = "scores.json";

/// On-disk layout: `{"snakeHighScore": <n>}`, plus any entries other tools
/// stored alongside it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ScoreFile {
    #[serde(rename = "snakeHighScore", default)]
    high_score: u32,
    #[serde(flatten)]
    other: Map<String, Value>,
}

/// Failure to write the high score.
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("failed to write score file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to encode score file: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Durable storage for the single high-score value.
pub trait HighScoreStore {
    /// Returns the stored high score, or 0 when none is stored or the
    /// storage cannot be read.
    fn load(&self) -> u32;

    /// Replaces the stored high score.
    fn save(&mut self, score: u32) -> Result<(), ScoreError>;
}

/// Persists `score` when it beats the stored high score.
///
/// Returns whether a new value was written.
pub fn record_final_score<S: HighScoreStore + ?Sized>(
    store: &mut S,
    score: u32,
) -> Result<bool, ScoreError> {
    if score <= store.load() {
        return Ok(false);
    }

    store.save(score)?;
    Ok(true)
}

/// Returns the platform-correct score file path.
#[must_use]
pub fn scores_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(SCORE_FILE_NAME);
    base
}

/// High score kept as one entry of a JSON object on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the default per-user data location.
    #[must_use]
    pub fn at_default_location() -> Self {
        Self::new(scores_path())
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_file(&self) -> io::Result<ScoreFile> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(ScoreFile::default()),
            Err(e) => return Err(e),
        };

        serde_json::from_str(&raw).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

impl HighScoreStore for JsonFileStore {
    fn load(&self) -> u32 {
        match self.read_file() {
            Ok(file) => file.high_score,
            Err(error) => {
                warn!(
                    "ignoring unreadable score file {}: {error}",
                    self.path.display()
                );
                0
            }
        }
    }

    fn save(&mut self, score: u32) -> Result<(), ScoreError> {
        let io_error = |source| ScoreError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_error)?;
        }

        // Unrelated entries survive; an unparseable file is replaced.
        let mut file = self.read_file().unwrap_or_default();
        file.high_score = score;
        let json = serde_json::to_string_pretty(&file)?;

        fs::write(&self.path, json).map_err(io_error)?;
        debug!("wrote high score {score} to {}", self.path.display());
        Ok(())
    }
}

/// In-process store; nothing survives the process.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryStore {
    high_score: Option<u32>,
}

impl MemoryStore {
    #[must_use]
    pub fn with_score(score: u32) -> Self {
        Self {
            high_score: Some(score),
        }
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&self) -> u32 {
        self.high_score.unwrap_or(0)
    }

    fn save(&mut self, score: u32) -> Result<(), ScoreError> {
        self.high_score = Some(score);
        Ok(())
    }
}
