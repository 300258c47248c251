use std::collections::VecDeque;

use super::keepers::KeeperAssignments;

/// Players still available to be drafted, in draft-board order.
///
/// Players only ever leave the pool.
#[derive(Debug, Clone, Default)]
pub struct AvailablePool {
    players: VecDeque<String>,
}

impl AvailablePool {
    /// Build the pool from the full player list, dropping every kept player.
    pub fn new<I>(players: I, keepers: &KeeperAssignments) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut pool = Self {
            players: players.into_iter().collect(),
        };
        for keeper in keepers.players() {
            pool.exclude(keeper);
        }
        pool
    }

    /// Remove `player` from the pool.
    ///
    /// Returns false when the player was not in the pool; excluding the
    /// same player twice is harmless.
    pub fn exclude(&mut self, player: &str) -> bool {
        let before = self.players.len();
        self.players.retain(|p| p != player);
        self.players.len() != before
    }

    /// Take the first available player
    pub fn take_first(&mut self) -> Option<String> {
        self.players.pop_front()
    }

    pub fn contains(&self, player: &str) -> bool {
        self.players.iter().any(|p| p == player)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.players.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}
