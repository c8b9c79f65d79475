//! Point and game rules
//!
//! Regular games count 0, 15, 30, 40 as 0..=3 with 4 meaning advantage.
//! Tie-break games count raw points.

use serde::{Deserialize, Serialize};
use crate::config::ScoringConfig;
use crate::player::{PerPlayer, Player};

const FORTY: u32 = 3;
const ADVANTAGE: u32 = 4;

/// How points in the current game are counted
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ScoringMode {
    #[default]
    Regular,
    Tiebreak,
}

impl core::fmt::Display for ScoringMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ScoringMode::Regular => write!(f, "REGULAR"),
            ScoringMode::Tiebreak => write!(f, "TIEBREAK"),
        }
    }
}

/// Whether a point closed out the current game
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    Won,
}

/// Tie-break iff both players sit on exactly `games_per_set` games
pub fn scoring_mode(games: &PerPlayer<u32>, config: &ScoringConfig) -> ScoringMode {
    if games.one == config.games_per_set && games.two == config.games_per_set {
        ScoringMode::Tiebreak
    } else {
        ScoringMode::Regular
    }
}

/// Score one point of a regular game for `scorer`
///
/// Only ever moves the opponent backwards (advantage lost to deuce).
pub fn regular_point(points: &mut PerPlayer<u32>, scorer: Player) -> GameOutcome {
    let opponent = scorer.opponent();
    let (s, o) = (points[scorer], points[opponent]);

    if s >= FORTY && o >= FORTY {
        match (s, o) {
            (ADVANTAGE, FORTY) => {
                points[scorer] += 1;
                GameOutcome::Won
            }
            (FORTY, FORTY) => {
                points[scorer] = ADVANTAGE;
                GameOutcome::InProgress
            }
            (FORTY, ADVANTAGE) => {
                points[opponent] = FORTY;
                GameOutcome::InProgress
            }
            // unreachable from a consistent game
            _ => GameOutcome::InProgress,
        }
    } else if s == FORTY {
        GameOutcome::Won
    } else {
        points[scorer] += 1;
        GameOutcome::InProgress
    }
}

/// Whether a regular game score is reachable by playing points
///
/// Counts stay within 0..=4, and advantage only ever faces 40.
pub fn regular_game_consistent(points: &PerPlayer<u32>) -> bool {
    match (points.one, points.two) {
        (ADVANTAGE, o) => o == FORTY,
        (s, ADVANTAGE) => s == FORTY,
        (s, o) => s <= FORTY && o <= FORTY,
    }
}

/// Score one point of a tie-break for `scorer`
///
/// First to `tiebreak_points`, clear by two, no upper bound.
pub fn tiebreak_point(points: &mut PerPlayer<u32>, scorer: Player, config: &ScoringConfig) -> GameOutcome {
    points[scorer] += 1;

    if points.max() >= config.tiebreak_points && points.abs_diff() >= 2 {
        GameOutcome::Won
    } else {
        GameOutcome::InProgress
    }
}

/// Whether the game just recorded in `games` ends the set
///
/// `mode` is the mode the deciding game was played under.
pub fn set_decided(games: &PerPlayer<u32>, mode: ScoringMode, config: &ScoringConfig) -> bool {
    let leader = games.max();
    if leader == config.games_per_set && mode != ScoringMode::Tiebreak {
        games.abs_diff() >= 2
    } else {
        leader == config.games_per_set.saturating_add(1)
    }
}
