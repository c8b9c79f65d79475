//! Errors surfaced by match construction and point entry

use crate::player::{PerPlayer, Player};

/// Errors that can occur while setting up or scoring a match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatchError {
    /// A player label was empty at construction.
    InvalidMatch { missing: Player },
    /// A resumed regular game holds a score no sequence of points can reach.
    InvalidSnapshot { current_game: PerPlayer<u32> },
    /// A point was attributed to a label neither player carries.
    UnknownPlayer { label: String },
    /// Rules configuration could not be parsed or is out of range.
    Config { message: String },
}

impl core::fmt::Display for MatchError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MatchError::InvalidMatch { missing } =>
                write!(f, "a tennis match needs two players ({} is missing)", missing),
            MatchError::InvalidSnapshot { current_game } =>
                write!(f, "inconsistent game score {}-{}", current_game.one, current_game.two),
            MatchError::UnknownPlayer { label } =>
                write!(f, "unknown player {:?}", label),
            MatchError::Config { message } =>
                write!(f, "invalid scoring config: {}", message),
        }
    }
}

impl std::error::Error for MatchError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let e = MatchError::InvalidMatch { missing: Player::Two };
        assert_eq!(e.to_string(), "a tennis match needs two players (player two is missing)");

        let e = MatchError::UnknownPlayer { label: "Rafa".to_string() };
        assert_eq!(e.to_string(), "unknown player \"Rafa\"");

        let e = MatchError::InvalidSnapshot { current_game: PerPlayer::new(4, 4) };
        assert_eq!(e.to_string(), "inconsistent game score 4-4");
    }
}
