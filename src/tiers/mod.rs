//! Quarterly manager tier list: grade four weeks of results and rank them.

pub mod engine;
pub mod io;
pub mod observer;
pub mod record;

pub use engine::{build_tier_list, calculate_grade, is_standout, rank, round2};
pub use io::{load_managers, read_tier_list, write_tier_list, TIER_COLUMNS};
pub use observer::{TierEvent, TierObserver, TracingTierObserver};
pub use record::{ManagerGrade, ManagerRecord, Week};
