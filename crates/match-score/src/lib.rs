//! Match Score
//!
//! Scoring state machine for a single set of tennis: points, games,
//! deuce/advantage and the 6-6 tie-break, rendered in standard notation.
//! This crate is compiled to:
//! - Native (for match hosts and persistence layers)
//! - WASM (for a browser scoreboard)

mod config;
mod error;
mod format;
mod player;
mod rules;
mod scorer;

#[cfg(feature = "wasm")]
mod wasm;

pub use config::{ScoringConfig, CONFIG_ENV_VAR, DEFAULT_CONFIG_PATH, MAX_GAMES_PER_SET, MAX_TIEBREAK_POINTS};
pub use error::MatchError;
pub use format::{format_current_game, format_games, format_score, point_label, POINT_LABELS};
pub use player::{PerPlayer, Player};
pub use rules::{regular_game_consistent, regular_point, scoring_mode, set_decided, tiebreak_point, GameOutcome, ScoringMode};
pub use scorer::{MatchScorer, ScoreSnapshot};
