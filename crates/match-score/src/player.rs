//! The two sides of a match and per-side storage

use core::ops::{Index, IndexMut};
use serde::{Deserialize, Serialize};

/// One of the two sides of the net
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Both players, in display order
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    /// The player on the other side
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

impl core::fmt::Display for Player {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Player::One => write!(f, "player one"),
            Player::Two => write!(f, "player two"),
        }
    }
}

/// A value held for each player
///
/// Exactly two slots, so every tally is keyed by both players and only
/// both players.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerPlayer<T> {
    pub one: T,
    pub two: T,
}

impl<T> PerPlayer<T> {
    pub fn new(one: T, two: T) -> Self {
        Self { one, two }
    }

    /// Apply `f` to both slots
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> PerPlayer<U> {
        PerPlayer {
            one: f(self.one),
            two: f(self.two),
        }
    }
}

impl<T: Clone> PerPlayer<T> {
    /// Same value in both slots
    pub fn splat(value: T) -> Self {
        Self {
            one: value.clone(),
            two: value,
        }
    }
}

impl PerPlayer<u32> {
    /// Larger of the two values
    pub fn max(&self) -> u32 {
        self.one.max(self.two)
    }

    /// Distance between the two values
    pub fn abs_diff(&self) -> u32 {
        self.one.abs_diff(self.two)
    }

    /// Reset both slots to zero
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl<T> Index<Player> for PerPlayer<T> {
    type Output = T;

    fn index(&self, player: Player) -> &T {
        match player {
            Player::One => &self.one,
            Player::Two => &self.two,
        }
    }
}

impl<T> IndexMut<Player> for PerPlayer<T> {
    fn index_mut(&mut self, player: Player) -> &mut T {
        match player {
            Player::One => &mut self.one,
            Player::Two => &mut self.two,
        }
    }
}
