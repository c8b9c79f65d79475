//! Match scoring engine

use serde::{Deserialize, Serialize};
use crate::config::ScoringConfig;
use crate::error::MatchError;
use crate::format::format_score;
use crate::player::{PerPlayer, Player};
use crate::rules::{regular_game_consistent, regular_point, scoring_mode, set_decided, tiebreak_point, GameOutcome, ScoringMode};

/// Persistable score of a set in progress
///
/// Read it with [`MatchScorer::snapshot`] and hand it back to
/// [`MatchScorer::resume`] to pick the set up again later.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreSnapshot {
    pub games_won: PerPlayer<u32>,
    pub current_game: PerPlayer<u32>,
}

/// Scoring state of a single set between two players
#[derive(Clone, Debug)]
pub struct MatchScorer {
    players: PerPlayer<String>,
    games_won: PerPlayer<u32>,
    current_game: PerPlayer<u32>,
    scoring_mode: ScoringMode,
    match_won: bool,
    config: ScoringConfig,
}

impl MatchScorer {
    /// Start a fresh set at `0-0 0-0`
    pub fn new(player_one: impl Into<String>, player_two: impl Into<String>) -> Result<Self, MatchError> {
        Self::resume(player_one, player_two, ScoreSnapshot::default())
    }

    /// Pick up a set from a previously saved score
    ///
    /// The scoring mode is derived from the saved games right away, so a set
    /// resumed at 6-6 reports tie-break counts before the next point.
    ///
    /// # Errors
    /// * [`MatchError::InvalidMatch`] if either label is empty
    /// * [`MatchError::InvalidSnapshot`] if a regular game score is unreachable
    pub fn resume(
        player_one: impl Into<String>,
        player_two: impl Into<String>,
        snapshot: ScoreSnapshot,
    ) -> Result<Self, MatchError> {
        Self::with_config(player_one, player_two, snapshot, ScoringConfig::default())
    }

    /// Build a scorer under non-standard set rules
    ///
    /// # Errors
    /// * [`MatchError::InvalidMatch`] if either label is empty
    /// * [`MatchError::Config`] if `config` fails validation
    /// * [`MatchError::InvalidSnapshot`] if a regular game score is unreachable
    pub fn with_config(
        player_one: impl Into<String>,
        player_two: impl Into<String>,
        snapshot: ScoreSnapshot,
        config: ScoringConfig,
    ) -> Result<Self, MatchError> {
        let players = PerPlayer::new(player_one.into(), player_two.into());
        for player in Player::ALL {
            if players[player].is_empty() {
                return Err(MatchError::InvalidMatch { missing: player });
            }
        }
        config.validate()?;

        let mode = scoring_mode(&snapshot.games_won, &config);
        if mode == ScoringMode::Regular && !regular_game_consistent(&snapshot.current_game) {
            return Err(MatchError::InvalidSnapshot { current_game: snapshot.current_game });
        }

        Ok(Self {
            players,
            games_won: snapshot.games_won,
            current_game: snapshot.current_game,
            scoring_mode: mode,
            match_won: false,
            config,
        })
    }

    /// Resolve a caller label to a side of the net
    ///
    /// Player one wins if both labels are identical.
    pub fn player_for(&self, label: &str) -> Result<Player, MatchError> {
        Player::ALL
            .into_iter()
            .find(|&p| self.players[p] == label)
            .ok_or_else(|| MatchError::UnknownPlayer { label: label.to_string() })
    }

    /// Record a point for the player carrying `label`
    pub fn point_won_by(&mut self, label: &str) -> Result<(), MatchError> {
        let player = self.player_for(label)?;
        self.award_point(player);
        Ok(())
    }

    /// Record a point for `scorer`
    pub fn award_point(&mut self, scorer: Player) {
        if self.match_won {
            tracing::warn!(%scorer, score = %self.score(), "Point recorded after set was decided");
        }

        self.scoring_mode = scoring_mode(&self.games_won, &self.config);

        let outcome = match self.scoring_mode {
            ScoringMode::Regular => regular_point(&mut self.current_game, scorer),
            ScoringMode::Tiebreak => tiebreak_point(&mut self.current_game, scorer, &self.config),
        };

        if outcome == GameOutcome::Won {
            self.games_won[scorer] += 1;
            tracing::debug!(
                %scorer,
                mode = %self.scoring_mode,
                games_one = self.games_won.one,
                games_two = self.games_won.two,
                "Game won"
            );

            if !self.match_won && set_decided(&self.games_won, self.scoring_mode, &self.config) {
                self.match_won = true;
                tracing::info!(
                    winner = %self.players[scorer],
                    games_one = self.games_won.one,
                    games_two = self.games_won.two,
                    "Set decided"
                );
            }

            self.current_game.clear();
        }
    }

    /// Current score, e.g. `6-5 Advantage player two`
    pub fn score(&self) -> String {
        format_score(&self.games_won, &self.current_game, self.scoring_mode)
    }

    /// Save the tallies for a later [`MatchScorer::resume`]
    pub fn snapshot(&self) -> ScoreSnapshot {
        ScoreSnapshot {
            games_won: self.games_won,
            current_game: self.current_game,
        }
    }

    pub fn players(&self) -> &PerPlayer<String> {
        &self.players
    }

    pub fn label(&self, player: Player) -> &str {
        &self.players[player]
    }

    pub fn games_won(&self) -> PerPlayer<u32> {
        self.games_won
    }

    pub fn current_game(&self) -> PerPlayer<u32> {
        self.current_game
    }

    /// Mode the last point was played under
    pub fn scoring_mode(&self) -> ScoringMode {
        self.scoring_mode
    }

    pub fn match_won(&self) -> bool {
        self.match_won
    }

    /// The player ahead in games, once the set is decided
    pub fn winner(&self) -> Option<Player> {
        if !self.match_won {
            return None;
        }
        if self.games_won.one > self.games_won.two {
            Some(Player::One)
        } else if self.games_won.two > self.games_won.one {
            Some(Player::Two)
        } else {
            None
        }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }
}

impl core::fmt::Display for MatchScorer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.score())
    }
}
