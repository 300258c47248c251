pub mod config;
pub mod csvfile;
pub mod draft;
pub mod error;
pub mod logging;
pub mod output;
pub mod tiers;

pub use error::{LeagueError, Result};
