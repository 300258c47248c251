use std::path::Path;

use tracing::{debug, warn};

use super::engine::DraftResults;
use crate::csvfile::{column_index, open_reader, write_atomic};
use crate::error::{LeagueError, Result};

/// Read draftable player names, in board order, from the `column` column.
///
/// Blank names are skipped.
pub fn load_player_list(path: &Path, column: &str) -> Result<Vec<String>> {
    let (mut reader, headers) = open_reader(path)?;
    let idx = column_index(&headers, column, path)?;

    let mut players = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| LeagueError::csv(path, e))?;
        match record.get(idx) {
            Some(name) if !name.is_empty() => players.push(name.to_string()),
            _ => debug!("skipping row without a player name: {:?}", record),
        }
    }

    if players.is_empty() {
        warn!("{} lists no players; only keepers will be drafted", path.display());
    }
    Ok(players)
}

/// Write the draft board: one row per team, one `Pick_N` column per slot.
pub fn write_draft_results(path: &Path, results: &DraftResults) -> Result<()> {
    let header: Vec<String> = std::iter::once("Team".to_string())
        .chain((1..=results.max_picks()).map(|i| format!("Pick_{}", i)))
        .collect();

    write_atomic(path, |writer| {
        writer.write_record(&header)?;
        for (team, picks) in results.board() {
            let row = std::iter::once(team.as_str()).chain(picks.iter().map(|p| p.unwrap_or("")));
            writer.write_record(row)?;
        }
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::{DraftEngine, DraftOrderKind, DraftSettings, KeeperAssignments};

    #[test]
    fn test_load_player_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("player_list.csv");
        std::fs::write(
            &path,
            "RK,PLAYER NAME,POS\n1,Justin Jefferson,WR1\n2,,RB1\n3, Bijan Robinson ,RB2\n",
        )
        .unwrap();

        let players = load_player_list(&path, "PLAYER NAME").unwrap();
        assert_eq!(players, vec!["Justin Jefferson", "Bijan Robinson"]);
    }

    #[test]
    fn test_load_player_list_missing_column() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("player_list.csv");
        std::fs::write(&path, "RK,NAME\n1,Justin Jefferson\n").unwrap();

        let err = load_player_list(&path, "PLAYER NAME").unwrap_err();
        assert!(matches!(err, LeagueError::MissingColumn { ref column, .. } if column == "PLAYER NAME"));
    }

    #[test]
    fn test_load_player_list_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("player_list.csv");
        std::fs::write(&path, "PLAYER NAME\n").unwrap();

        assert!(load_player_list(&path, "PLAYER NAME").unwrap().is_empty());
    }

    #[test]
    fn test_load_player_list_ragged_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("player_list.csv");
        std::fs::write(&path, "PLAYER NAME,POS\nA,WR\nB\n").unwrap();

        let err = load_player_list(&path, "PLAYER NAME").unwrap_err();
        assert!(matches!(err, LeagueError::Csv { .. }));
    }

    #[test]
    fn test_write_draft_results_pads_short_rosters() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("draft_results.csv");

        let settings = DraftSettings {
            team_count: 2,
            rounds: 2,
            draft_position: 1,
            order: DraftOrderKind::Snake,
        };
        let players = vec!["A".to_string(), "B".to_string(), "C".to_string()];
        let results = DraftEngine::new(settings, KeeperAssignments::new(), players)
            .simulate(&mut |_: &crate::draft::DraftEvent<'_>| {});

        write_draft_results(&path, &results).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "Team,Pick_1,Pick_2\nTeam_1,A,\nTeam_2,B,C\n");
    }
}
