//! Rule parameters for a set, loadable from TOML

use serde::{Deserialize, Serialize};
use crate::error::MatchError;

/// Games needed to take the set (and the tally at which the tie-break starts).
pub const GAMES_PER_SET: u32 = 6;
/// Points needed to take a tie-break game.
pub const TIEBREAK_POINTS: u32 = 7;
/// Largest accepted `games_per_set`.
pub const MAX_GAMES_PER_SET: u32 = 99;
/// Largest accepted `tiebreak_points`.
pub const MAX_TIEBREAK_POINTS: u32 = 99;
/// Env var naming the config file read by [`ScoringConfig::load`].
pub const CONFIG_ENV_VAR: &str = "MATCH_SCORE_CONFIG";
/// Path read when [`CONFIG_ENV_VAR`] is unset.
pub const DEFAULT_CONFIG_PATH: &str = "config/scoring.toml";

/// Configurable set rules. Defaults are standard tennis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub games_per_set: u32,
    pub tiebreak_points: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            games_per_set: GAMES_PER_SET,
            tiebreak_points: TIEBREAK_POINTS,
        }
    }
}

impl ScoringConfig {
    /// Check the parameters describe a playable set
    pub fn validate(&self) -> Result<(), MatchError> {
        if self.games_per_set == 0 {
            return Err(MatchError::Config { message: "games_per_set must be at least 1".to_string() });
        }
        if self.games_per_set > MAX_GAMES_PER_SET {
            return Err(MatchError::Config {
                message: format!("games_per_set must be at most {}", MAX_GAMES_PER_SET),
            });
        }
        if self.tiebreak_points == 0 {
            return Err(MatchError::Config { message: "tiebreak_points must be at least 1".to_string() });
        }
        if self.tiebreak_points > MAX_TIEBREAK_POINTS {
            return Err(MatchError::Config {
                message: format!("tiebreak_points must be at most {}", MAX_TIEBREAK_POINTS),
            });
        }
        Ok(())
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, MatchError> {
        let cfg: ScoringConfig = toml::from_str(content)
            .map_err(|e| MatchError::Config { message: e.to_string() })?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load config from a TOML file. Falls back to defaults if the file is missing,
    /// unparseable or invalid.
    pub fn load() -> Self {
        let path = std::env::var(CONFIG_ENV_VAR)
            .unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(&path)
    }

    /// Same as [`ScoringConfig::load`] for an explicit path
    pub fn load_from(path: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_toml_str(&content) {
                Ok(cfg) => cfg,
                Err(e) => {
                    tracing::warn!("Failed to load {path}: {e}, using defaults");
                    ScoringConfig::default()
                }
            },
            Err(_) => ScoringConfig::default(),
        }
    }
}
