use std::collections::{HashMap, HashSet};

use super::schema::{Config, DraftConfig};

/// Validate league configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();
    validate_draft(&config.draft, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_draft(draft: &DraftConfig, errors: &mut Vec<String>) {
    if draft.team_count == 0 {
        errors.push("draft.team_count: must be at least 1".to_string());
    }

    if draft.rounds == 0 {
        errors.push("draft.rounds: must be at least 1".to_string());
    }

    if draft.draft_position == 0 || draft.draft_position > draft.team_count {
        errors.push(format!(
            "draft.draft_position: {} is outside 1-{}",
            draft.draft_position, draft.team_count
        ));
    }

    if draft.player_column.trim().is_empty() {
        errors.push("draft.player_column: must not be empty".to_string());
    }

    let mut slots: HashSet<(usize, usize)> = HashSet::new();
    let mut kept_in: HashMap<&str, usize> = HashMap::new();

    for (i, keeper) in draft.keepers.iter().enumerate() {
        if keeper.round == 0 || keeper.round > draft.rounds {
            errors.push(format!(
                "draft.keepers[{}].round: {} is outside 1-{}",
                i, keeper.round, draft.rounds
            ));
        }
        if keeper.team == 0 || keeper.team > draft.team_count {
            errors.push(format!(
                "draft.keepers[{}].team: {} is outside 1-{}",
                i, keeper.team, draft.team_count
            ));
        }

        let player = keeper.player.trim();
        if player.is_empty() {
            errors.push(format!("draft.keepers[{}].player: must not be empty", i));
            continue;
        }

        if !slots.insert((keeper.round, keeper.team)) {
            errors.push(format!(
                "draft.keepers[{}]: Team_{} already has a keeper in round {}",
                i, keeper.team, keeper.round
            ));
        }
        if let Some(first) = kept_in.insert(player, i) {
            errors.push(format!(
                "draft.keepers[{}].player: '{}' is already kept by draft.keepers[{}]",
                i, player, first
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::KeeperConfig;

    fn keeper(round: usize, team: usize, player: &str) -> KeeperConfig {
        KeeperConfig {
            round,
            team,
            player: player.to_string(),
        }
    }

    fn draft_with(keepers: Vec<KeeperConfig>) -> Config {
        Config {
            draft: DraftConfig {
                keepers,
                ..DraftConfig::default()
            },
            ..Config::default()
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_zero_teams_and_rounds() {
        let mut config = draft_with(vec![]);
        config.draft.team_count = 0;
        config.draft.rounds = 0;

        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(|e| e.contains("draft.team_count")));
        assert!(errors.iter().any(|e| e.contains("draft.rounds")));
        assert!(errors.iter().any(|e| e.contains("draft.draft_position")));
    }

    #[test]
    fn test_draft_position_out_of_range() {
        let mut config = draft_with(vec![]);
        config.draft.draft_position = 13;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("13 is outside 1-12"));
    }

    #[test]
    fn test_keeper_out_of_range() {
        let config = draft_with(vec![keeper(16, 13, "Tyreek Hill")]);

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("draft.keepers[0].round"));
        assert!(errors[1].contains("draft.keepers[0].team"));
    }

    #[test]
    fn test_two_keepers_same_slot() {
        let config = draft_with(vec![
            keeper(1, 3, "Tyreek Hill"),
            keeper(1, 3, "CeeDee Lamb"),
        ]);

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("Team_3 already has a keeper in round 1"));
    }

    #[test]
    fn test_player_kept_twice() {
        let config = draft_with(vec![
            keeper(1, 3, "Tyreek Hill"),
            keeper(2, 4, "Tyreek Hill"),
        ]);

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("already kept by draft.keepers[0]"));
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = draft_with(vec![keeper(1, 1, " "), keeper(0, 2, "Nico Collins")]);
        config.draft.rounds = 0;

        let errors = validate_config(&config).unwrap_err();
        // rounds, keeper[0] round (1 > 0 rounds), keeper[0] player, keeper[1] round
        assert_eq!(errors.len(), 4);
    }
}
