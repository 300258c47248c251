use tracing::debug;

use super::record::Week;

/// Notifications emitted while the tier list is graded.
#[derive(Debug, Clone, PartialEq)]
pub enum TierEvent<'a> {
    Standout { manager: &'a str, week: Week },
    Graded { manager: &'a str, score: f64 },
}

/// Receives [`TierEvent`]s from [`super::calculate_grade`].
pub trait TierObserver {
    fn on_event(&mut self, event: &TierEvent<'_>);
}

impl<F> TierObserver for F
where
    F: FnMut(&TierEvent<'_>),
{
    fn on_event(&mut self, event: &TierEvent<'_>) {
        self(event)
    }
}

/// Logs grading detail through `tracing` at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingTierObserver;

impl TierObserver for TracingTierObserver {
    fn on_event(&mut self, event: &TierEvent<'_>) {
        match *event {
            TierEvent::Standout { manager, week } => {
                debug!("standout manager: {} ({})", manager, week.column())
            }
            TierEvent::Graded { manager, score } => debug!("{} graded {:.2}", manager, score),
        }
    }
}
