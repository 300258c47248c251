use std::collections::BTreeMap;

use crate::config::KeeperConfig;

/// A keeper claimed by a team in a given round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keeper {
    /// 0-based team index
    pub team: usize,
    pub player: String,
}

/// Keepers grouped by 1-based round number.
///
/// Uniqueness (one keeper per team per round, one round per player) is
/// checked by config validation before assignments are built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeeperAssignments {
    by_round: BTreeMap<usize, Vec<Keeper>>,
}

impl KeeperAssignments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from config entries, converting 1-based team numbers to indices.
    pub fn from_config(entries: &[KeeperConfig]) -> Self {
        let mut keepers = Self::new();
        for entry in entries {
            keepers.insert(entry.round, entry.team.saturating_sub(1), entry.player.trim());
        }
        keepers
    }

    /// Assign `player` to 0-based `team` in 1-based `round`.
    pub fn insert(&mut self, round: usize, team: usize, player: &str) {
        self.by_round.entry(round).or_default().push(Keeper {
            team,
            player: player.to_string(),
        });
    }

    /// The keeper held by 0-based `team` in 1-based `round`, if any
    pub fn keeper_for(&self, round: usize, team: usize) -> Option<&str> {
        self.by_round
            .get(&round)?
            .iter()
            .find(|k| k.team == team)
            .map(|k| k.player.as_str())
    }

    /// Every kept player name, in round order
    pub fn players(&self) -> impl Iterator<Item = &str> {
        self.by_round
            .values()
            .flatten()
            .map(|k| k.player.as_str())
    }

    /// Whether `player` is kept by any team
    pub fn contains_player(&self, player: &str) -> bool {
        self.players().any(|p| p == player)
    }

    pub fn len(&self) -> usize {
        self.by_round.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
