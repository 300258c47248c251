use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::draft::DraftOrderKind;

/// Top-level league configuration.
///
/// Example YAML:
/// ```yaml
/// draft:
///   team_count: 12
///   rounds: 15
///   draft_position: 6
///   order: snake
///   keepers:
///     - { round: 1, team: 3, player: "Tyreek Hill" }
/// tiers:
///   input: quarterly_manager_data.csv
///   output: quarterly_manager_tiers.csv
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub draft: DraftConfig,

    #[serde(default)]
    pub tiers: TierConfig,
}

/// Mock draft settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DraftConfig {
    /// Number of teams in the league
    #[serde(default = "default_team_count")]
    pub team_count: usize,

    /// Total rounds in the draft
    #[serde(default = "default_rounds")]
    pub rounds: usize,

    /// My draft slot (1-based)
    #[serde(default = "default_draft_position")]
    pub draft_position: usize,

    #[serde(default)]
    pub order: DraftOrderKind,

    /// CSV with one row per draftable player
    #[serde(default = "default_player_list")]
    pub player_list: PathBuf,

    /// Header of the player name column in `player_list`
    #[serde(default = "default_player_column")]
    pub player_column: String,

    /// Where the draft board is written
    #[serde(default = "default_draft_output")]
    pub output: PathBuf,

    #[serde(default)]
    pub keepers: Vec<KeeperConfig>,
}

/// A player kept by a team, consuming that team's pick in `round`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct KeeperConfig {
    /// Round the keeper occupies (1-based)
    pub round: usize,
    /// Team holding the keeper (1-based, same numbering as `Team_N`)
    pub team: usize,
    pub player: String,
}

/// Quarterly tier list file locations.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TierConfig {
    #[serde(default = "default_tier_input")]
    pub input: PathBuf,

    #[serde(default = "default_tier_output")]
    pub output: PathBuf,
}

fn default_team_count() -> usize {
    12
}

fn default_rounds() -> usize {
    15
}

fn default_draft_position() -> usize {
    6
}

fn default_player_list() -> PathBuf {
    PathBuf::from("player_list.csv")
}

fn default_player_column() -> String {
    "PLAYER NAME".to_string()
}

fn default_draft_output() -> PathBuf {
    PathBuf::from("draft_results.csv")
}

fn default_tier_input() -> PathBuf {
    PathBuf::from("quarterly_manager_data.csv")
}

fn default_tier_output() -> PathBuf {
    PathBuf::from("quarterly_manager_tiers.csv")
}

fn keeper(round: usize, team: usize, player: &str) -> KeeperConfig {
    KeeperConfig {
        round,
        team,
        player: player.to_string(),
    }
}

impl Default for DraftConfig {
    /// League of Goons 2023 settings and keepers.
    fn default() -> Self {
        Self {
            team_count: default_team_count(),
            rounds: default_rounds(),
            draft_position: default_draft_position(),
            order: DraftOrderKind::Snake,
            player_list: default_player_list(),
            player_column: default_player_column(),
            output: default_draft_output(),
            keepers: vec![
                keeper(1, 3, "Tyreek Hill"),
                keeper(1, 5, "CeeDee Lamb"),
                keeper(1, 7, "Amon-Ra St. Brown"),
                keeper(1, 8, "Ja'Marr Chase"),
                keeper(1, 9, "Christian McCaffrey"),
                keeper(2, 1, "Nico Collins"),
                keeper(2, 2, "Saquon Barkley"),
                keeper(2, 10, "Kyren Williams"),
                keeper(3, 4, "Patrick Mahomes II"),
                keeper(3, 6, "Isiah Pacheco"),
                keeper(5, 11, "Stefon Diggs"),
                keeper(5, 12, "Michael Pittman Jr."),
            ],
        }
    }
}

impl Default for TierConfig {
    fn default() -> Self {
        Self {
            input: default_tier_input(),
            output: default_tier_output(),
        }
    }
}

impl DraftConfig {
    /// The engine-facing subset of these settings
    pub fn settings(&self) -> crate::draft::DraftSettings {
        crate::draft::DraftSettings {
            team_count: self.team_count,
            rounds: self.rounds,
            draft_position: self.draft_position,
            order: self.order,
        }
    }
}
