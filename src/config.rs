use std::path::Path;

use crate::error::ConfigError;
use crate::game::{DEFAULT_HEIGHT, DEFAULT_WIDTH, DISC_COLORS};

/// Search depth used when the caller does not specify one.
pub const DEFAULT_SEARCH_DEPTH: u32 = 4;

/// Grid dimensions.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub width: usize,
    pub height: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

/// AI opponent binding.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// Whether one roster entry is AI-controlled.
    pub enabled: bool,
    /// Roster id of the AI-controlled player.
    pub player: u8,
    /// Default number of plies the AI looks ahead.
    pub search_depth: u32,
}

impl Default for AiConfig {
    fn default() -> Self {
        AiConfig {
            enabled: true,
            player: 1,
            search_depth: DEFAULT_SEARCH_DEPTH,
        }
    }
}

/// Top-level game configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub victory_condition: usize,
    pub players: Vec<String>,
    pub grid: GridConfig,
    pub ai: AiConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            victory_condition: 4,
            players: vec!["Player One".to_string(), "Player Two".to_string()],
            grid: GridConfig::default(),
            ai: AiConfig::default(),
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!(
                "Warning: config file '{}' not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Validate configuration values. Invariant violations here are the
    /// only unrecoverable errors in the crate, and they surface before any
    /// game exists.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid.width == 0 {
            return Err(ConfigError::Validation("grid.width must be > 0".into()));
        }
        if self.grid.height == 0 {
            return Err(ConfigError::Validation("grid.height must be > 0".into()));
        }
        if self.players.len() < 2 {
            return Err(ConfigError::Validation(
                "game cannot be set up without at least two players".into(),
            ));
        }
        if self.players.len() > DISC_COLORS.len() {
            return Err(ConfigError::Validation(format!(
                "game cannot be set up with more than {} players",
                DISC_COLORS.len()
            )));
        }
        if self.victory_condition < 2 {
            return Err(ConfigError::Validation(
                "victory_condition must be >= 2".into(),
            ));
        }
        if self.victory_condition > self.grid.width.max(self.grid.height) {
            return Err(ConfigError::Validation(
                "victory_condition must fit on the grid".into(),
            ));
        }
        if self.ai.enabled {
            if (self.ai.player as usize) >= self.players.len() {
                return Err(ConfigError::Validation(
                    "ai.player must be the id of a roster player".into(),
                ));
            }
            if self.ai.search_depth == 0 {
                return Err(ConfigError::Validation(
                    "ai.search_depth must be >= 1".into(),
                ));
            }
        }
        Ok(())
    }
}
