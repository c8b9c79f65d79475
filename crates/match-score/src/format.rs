//! Score rendering in standard tennis notation

use crate::player::PerPlayer;
use crate::rules::ScoringMode;

/// Display token for each regular-game point count
pub const POINT_LABELS: [&str; 6] = ["0", "15", "30", "40", "Advantage", "Game"];

/// Label for a regular-game point count
///
/// Counts past the table render as the raw number.
pub fn point_label(points: u32) -> String {
    match POINT_LABELS.get(points as usize) {
        Some(label) => (*label).to_string(),
        None => points.to_string(),
    }
}

/// Games component, e.g. `6-4`
pub fn format_games(games: &PerPlayer<u32>) -> String {
    format!("{}-{}", games.one, games.two)
}

/// Current-game component
pub fn format_current_game(points: &PerPlayer<u32>, mode: ScoringMode) -> String {
    match mode {
        ScoringMode::Tiebreak => format!("{}-{}", points.one, points.two),
        ScoringMode::Regular => {
            let raw = format!("{}-{}", point_label(points.one), point_label(points.two));
            match raw.as_str() {
                "40-40" => "Deuce".to_string(),
                "Advantage-40" => "Advantage player one".to_string(),
                "40-Advantage" => "Advantage player two".to_string(),
                _ => raw,
            }
        }
    }
}

/// Full score line: games, a space, then the current game
pub fn format_score(games: &PerPlayer<u32>, points: &PerPlayer<u32>, mode: ScoringMode) -> String {
    format!("{} {}", format_games(games), format_current_game(points, mode))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(one: u32, two: u32) -> PerPlayer<u32> {
        PerPlayer::new(one, two)
    }

    #[test]
    fn test_point_labels() {
        assert_eq!(point_label(0), "0");
        assert_eq!(point_label(1), "15");
        assert_eq!(point_label(2), "30");
        assert_eq!(point_label(3), "40");
        assert_eq!(point_label(4), "Advantage");
        assert_eq!(point_label(9), "9");
    }

    #[test]
    fn test_regular_game() {
        assert_eq!(format_current_game(&pts(0, 0), ScoringMode::Regular), "0-0");
        assert_eq!(format_current_game(&pts(2, 1), ScoringMode::Regular), "30-15");
        assert_eq!(format_current_game(&pts(0, 3), ScoringMode::Regular), "0-40");
    }

    #[test]
    fn test_deuce_and_advantage_text() {
        assert_eq!(format_current_game(&pts(3, 3), ScoringMode::Regular), "Deuce");
        assert_eq!(format_current_game(&pts(4, 3), ScoringMode::Regular), "Advantage player one");
        assert_eq!(format_current_game(&pts(3, 4), ScoringMode::Regular), "Advantage player two");
    }

    #[test]
    fn test_tiebreak_raw_counts() {
        assert_eq!(format_current_game(&pts(3, 3), ScoringMode::Tiebreak), "3-3");
        assert_eq!(format_current_game(&pts(11, 9), ScoringMode::Tiebreak), "11-9");
    }

    #[test]
    fn test_full_score() {
        assert_eq!(format_score(&pts(6, 5), &pts(0, 3), ScoringMode::Regular), "6-5 0-40");
        assert_eq!(format_score(&pts(6, 6), &pts(1, 2), ScoringMode::Tiebreak), "6-6 1-2");
    }
}
