use tracing::info;

use super::team_name;

/// Progress notifications emitted while a draft runs.
///
/// Rounds are 1-based; teams are 0-based indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftEvent<'a> {
    RoundStarted { round: usize },
    KeeperAssigned { round: usize, team: usize, player: &'a str },
    Selected { round: usize, team: usize, player: &'a str },
    PoolExhausted { round: usize, team: usize },
}

/// Receives [`DraftEvent`]s from [`super::DraftEngine::simulate`].
pub trait DraftObserver {
    fn on_event(&mut self, event: &DraftEvent<'_>);
}

impl<F> DraftObserver for F
where
    F: FnMut(&DraftEvent<'_>),
{
    fn on_event(&mut self, event: &DraftEvent<'_>) {
        self(event)
    }
}

/// Logs every draft event through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl DraftObserver for TracingObserver {
    fn on_event(&mut self, event: &DraftEvent<'_>) {
        match *event {
            DraftEvent::RoundStarted { round } => info!("Round {}", round),
            DraftEvent::KeeperAssigned { round, team, player } => info!(
                "Keeper: {} is automatically assigned to {} in Round {}",
                player,
                team_name(team),
                round
            ),
            DraftEvent::Selected { round, team, player } => {
                info!("Round: {} | {} picks {}", round, team_name(team), player)
            }
            DraftEvent::PoolExhausted { round, team } => info!(
                "No more players available for {} in Round {}",
                team_name(team),
                round
            ),
        }
    }
}
