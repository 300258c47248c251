use super::keepers::KeeperAssignments;
use super::observer::{DraftEvent, DraftObserver};
use super::order::{DraftOrder, DraftOrderKind};
use super::pool::AvailablePool;
use super::team_name;

/// League shape the engine drafts against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DraftSettings {
    pub team_count: usize,
    pub rounds: usize,
    /// My draft slot (1-based)
    pub draft_position: usize,
    pub order: DraftOrderKind,
}

impl DraftSettings {
    /// 0-based index of my team
    pub fn my_team(&self) -> usize {
        self.draft_position.saturating_sub(1)
    }
}

/// A player landing on a team.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pick {
    /// Pre-assigned keeper for this team and round
    Keeper(String),
    /// First available player from the pool
    Selected(String),
}

impl Pick {
    pub fn player(&self) -> &str {
        match self {
            Pick::Keeper(p) | Pick::Selected(p) => p,
        }
    }

    pub fn into_player(self) -> String {
        match self {
            Pick::Keeper(p) | Pick::Selected(p) => p,
        }
    }

    pub fn is_keeper(&self) -> bool {
        matches!(self, Pick::Keeper(_))
    }
}

/// Runs a first-available mock draft honoring keepers.
#[derive(Debug, Clone)]
pub struct DraftEngine {
    settings: DraftSettings,
    order: DraftOrder,
    keepers: KeeperAssignments,
    pool: AvailablePool,
}

impl DraftEngine {
    /// Kept players are removed from `players` here, once, before any pick.
    pub fn new<I>(settings: DraftSettings, keepers: KeeperAssignments, players: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let order = DraftOrder::build(settings.team_count, settings.rounds, settings.order);
        let pool = AvailablePool::new(players, &keepers);
        Self {
            settings,
            order,
            keepers,
            pool,
        }
    }

    pub fn settings(&self) -> &DraftSettings {
        &self.settings
    }

    pub fn draft_order(&self) -> &DraftOrder {
        &self.order
    }

    pub fn pool(&self) -> &AvailablePool {
        &self.pool
    }

    /// Resolve the pick for 0-based `team` in 0-based `round`.
    ///
    /// A keeper for this slot is returned without touching the pool.
    /// Otherwise the first available player is taken. Returns `None` once the
    /// pool is exhausted.
    pub fn resolve_pick(&mut self, team: usize, round: usize) -> Option<Pick> {
        if let Some(keeper) = self.keepers.keeper_for(round + 1, team) {
            return Some(Pick::Keeper(keeper.to_string()));
        }
        self.pool.take_first().map(Pick::Selected)
    }

    /// Run every round of the draft and return the final rosters.
    pub fn simulate(mut self, observer: &mut dyn DraftObserver) -> DraftResults {
        let my_team = self.settings.my_team();
        let mut rosters = vec![Vec::new(); self.settings.team_count];
        let mut my_picks = Vec::new();

        let order = self.order.clone();
        for (round, teams) in order.rounds().iter().enumerate() {
            observer.on_event(&DraftEvent::RoundStarted { round: round + 1 });

            for &team in teams {
                let Some(pick) = self.resolve_pick(team, round) else {
                    observer.on_event(&DraftEvent::PoolExhausted {
                        round: round + 1,
                        team,
                    });
                    continue;
                };

                let event = if pick.is_keeper() {
                    DraftEvent::KeeperAssigned {
                        round: round + 1,
                        team,
                        player: pick.player(),
                    }
                } else {
                    DraftEvent::Selected {
                        round: round + 1,
                        team,
                        player: pick.player(),
                    }
                };
                observer.on_event(&event);

                let player = pick.into_player();
                if team == my_team {
                    my_picks.push(player.clone());
                }
                rosters[team].push(player);
            }
        }

        DraftResults {
            rosters,
            my_team,
            my_picks,
        }
    }
}

/// Final rosters from a simulated draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftResults {
    rosters: Vec<Vec<String>>,
    my_team: usize,
    my_picks: Vec<String>,
}

impl DraftResults {
    /// Rosters indexed by 0-based team, picks in draft order
    pub fn rosters(&self) -> &[Vec<String>] {
        &self.rosters
    }

    pub fn roster(&self, team: usize) -> Option<&[String]> {
        self.rosters.get(team).map(Vec::as_slice)
    }

    pub fn my_team(&self) -> usize {
        self.my_team
    }

    pub fn my_picks(&self) -> &[String] {
        &self.my_picks
    }

    /// Length of the longest roster
    pub fn max_picks(&self) -> usize {
        self.rosters.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// One row per team: the team name followed by every pick slot, with
    /// `None` padding rosters shorter than the longest one.
    pub fn board(&self) -> Vec<(String, Vec<Option<&str>>)> {
        let width = self.max_picks();
        self.rosters
            .iter()
            .enumerate()
            .map(|(team, picks)| {
                let mut row: Vec<Option<&str>> = picks.iter().map(|p| Some(p.as_str())).collect();
                row.resize(width, None);
                (team_name(team), row)
            })
            .collect()
    }
}
