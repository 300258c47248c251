//! Mock draft simulation: snake order, keepers, first-available picks.

pub mod engine;
pub mod io;
pub mod keepers;
pub mod observer;
pub mod order;
pub mod pool;

pub use engine::{DraftEngine, DraftResults, DraftSettings, Pick};
pub use io::{load_player_list, write_draft_results};
pub use keepers::{Keeper, KeeperAssignments};
pub use observer::{DraftEvent, DraftObserver, TracingObserver};
pub use order::{DraftOrder, DraftOrderKind};
pub use pool::AvailablePool;

/// Display name for a 0-based team index ("Team_1" for index 0).
pub fn team_name(team: usize) -> String {
    format!("Team_{}", team + 1)
}
