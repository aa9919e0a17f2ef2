//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Every game here is strictly two-player. Player 0 is the minimizing side
//! and player 1 the maximizing side: heuristic scores are signed so that a
//! positive value favours player 1.
//!
//! ## PlayerMap
//!
//! Fixed two-entry storage indexed by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Number of players in every supported game.
pub const PLAYER_COUNT: usize = 2;

/// Player identifier, either 0 or 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// The side that wants the score to go down. Moves first.
    pub const MINIMIZING: PlayerId = PlayerId(0);

    /// The side that wants the score to go up.
    pub const MAXIMIZING: PlayerId = PlayerId(1);

    /// Create a new player ID.
    ///
    /// Panics if `id` is not 0 or 1.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        assert!(id < PLAYER_COUNT as u8, "Player id must be 0 or 1");
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(1 - self.0)
    }

    #[must_use]
    pub const fn is_maximizing(self) -> bool {
        self.0 == Self::MAXIMIZING.0
    }

    /// True if `candidate` is strictly better than `incumbent` for this
    /// player. Ties keep the incumbent.
    #[must_use]
    pub fn prefers(self, candidate: i32, incumbent: i32) -> bool {
        if self.is_maximizing() {
            candidate > incumbent
        } else {
            candidate < incumbent
        }
    }

    /// Iterate over both player IDs.
    ///
    /// ```
    /// use rust_tpg::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all().collect();
    /// assert_eq!(players, vec![PlayerId::MINIMIZING, PlayerId::MAXIMIZING]);
    /// ```
    pub fn all() -> impl Iterator<Item = PlayerId> {
        (0..PLAYER_COUNT as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use rust_tpg::core::{PlayerId, PlayerMap};
///
/// let mut rights: PlayerMap<bool> = PlayerMap::with_value(true);
/// rights[PlayerId::MAXIMIZING] = false;
///
/// assert!(rights[PlayerId::MINIMIZING]);
/// assert!(!rights[PlayerId::MAXIMIZING]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; PLAYER_COUNT],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId(0)), factory(PlayerId(1))],
        }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a new PlayerMap with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
