use serde::{Deserialize, Serialize};

/// How team order evolves from one round to the next.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftOrderKind {
    /// Order reverses every round (1..N, N..1, 1..N, ...)
    #[default]
    Snake,
    /// Every round uses the same ascending order
    Linear,
}

/// Team indices (0-based) in pick order for every round of the draft.
///
/// Computed once from the league size and never modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftOrder {
    rounds: Vec<Vec<usize>>,
}

impl DraftOrder {
    /// Build the order for `rounds` rounds of `team_count` teams.
    ///
    /// For a snake draft, round index `r` (0-based) is ascending when `r` is
    /// even and descending when odd.
    pub fn build(team_count: usize, rounds: usize, kind: DraftOrderKind) -> Self {
        let rounds = (0..rounds)
            .map(|round| match kind {
                DraftOrderKind::Snake if round % 2 == 1 => (0..team_count).rev().collect(),
                _ => (0..team_count).collect(),
            })
            .collect();
        Self { rounds }
    }

    pub fn rounds(&self) -> &[Vec<usize>] {
        &self.rounds
    }

    /// Team order for a 0-based round index
    pub fn round(&self, round: usize) -> Option<&[usize]> {
        self.rounds.get(round).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }
}
