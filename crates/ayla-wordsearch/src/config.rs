use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::puzzle::generator::{
    Generator, PlacementOrder, DEFAULT_GRID_SIZE, MAX_PLACEMENT_ATTEMPTS, MIN_WORD_LEN,
};

/// Errors raised while reading configuration from the UI layer.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("grid size {0} is too small; boards need at least 3 cells per side")]
    GridTooSmall(usize),
    #[error("max_attempts must be at least 1")]
    NoAttempts,
}

/// Puzzle configuration, provided by the host page as JSON.
/// Every field is optional; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PuzzleConfig {
    /// Cells per board side.
    pub grid_size: usize,
    /// Placement tries per word.
    pub max_attempts: u32,
    pub placement_order: PlacementOrder,
    /// Fixed RNG seed. `None` lets the host pick one per page load.
    pub seed: Option<u64>,
    /// World width in pointer units.
    pub world_width: f32,
    /// World height in pointer units.
    pub world_height: f32,
    /// Maximum number of game events per frame.
    pub max_events: usize,
    /// Maximum number of sound events per frame.
    pub max_sounds: usize,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            max_attempts: MAX_PLACEMENT_ATTEMPTS,
            placement_order: PlacementOrder::Input,
            seed: None,
            world_width: 800.0,
            world_height: 600.0,
            max_events: 32,
            max_sounds: 32,
        }
    }
}

impl PuzzleConfig {
    /// Parse and validate a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: PuzzleConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size < MIN_WORD_LEN {
            return Err(ConfigError::GridTooSmall(self.grid_size));
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::NoAttempts);
        }
        Ok(())
    }

    pub fn generator(&self) -> Generator {
        Generator::new(self.grid_size)
            .with_max_attempts(self.max_attempts)
            .with_order(self.placement_order)
    }
}

/// Word lists arrive either as a bare array or wrapped in the content
/// service's response object.
#[derive(Deserialize)]
#[serde(untagged)]
enum WordListPayload {
    Bare(Vec<String>),
    Wrapped {
        #[serde(alias = "wordSearchWords")]
        words: Vec<String>,
    },
}

/// Parse a candidate word list from JSON.
pub fn parse_word_list(json: &str) -> Result<Vec<String>, serde_json::Error> {
    let payload: WordListPayload = serde_json::from_str(json)?;
    Ok(match payload {
        WordListPayload::Bare(words) | WordListPayload::Wrapped { words } => words,
    })
}
