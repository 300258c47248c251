use std::path::Path;
use std::str::FromStr;

use csv::StringRecord;
use tracing::info;

use super::record::{ManagerGrade, ManagerRecord, Week};
use crate::csvfile::{column_index, open_reader, write_atomic};
use crate::error::{LeagueError, Result};

/// Header of the tier list file, in column order
pub const TIER_COLUMNS: [&str; 7] = [
    "manager",
    "score",
    "base_scoring",
    "boost_scoring",
    "win_loss_scoring",
    "standout_scoring",
    "standout_tally",
];

/// Column positions of the required manager data fields.
struct ManagerColumns {
    manager: usize,
    weeks: [usize; 4],
    wins: usize,
    losses: usize,
    score: usize,
}

impl ManagerColumns {
    fn resolve(headers: &StringRecord, path: &Path) -> Result<Self> {
        let mut weeks = [0; 4];
        for (slot, week) in weeks.iter_mut().zip(Week::ALL) {
            *slot = column_index(headers, week.column(), path)?;
        }
        Ok(Self {
            manager: column_index(headers, "manager", path)?,
            weeks,
            wins: column_index(headers, "wins", path)?,
            losses: column_index(headers, "losses", path)?,
            score: column_index(headers, "score", path)?,
        })
    }
}

/// A single cell of a manager row, parsed strictly.
struct Cell<'a> {
    record: &'a StringRecord,
    path: &'a Path,
    line: u64,
}

impl Cell<'_> {
    fn text(&self, idx: usize) -> &str {
        self.record.get(idx).unwrap_or("")
    }

    fn parse<T: FromStr>(&self, idx: usize, column: &str) -> Result<T> {
        let value = self.text(idx);
        value.parse().map_err(|_| self.non_numeric(column, value))
    }

    fn float(&self, idx: usize, column: &str) -> Result<f64> {
        let value: f64 = self.parse(idx, column)?;
        if value.is_finite() {
            Ok(value)
        } else {
            Err(self.non_numeric(column, self.text(idx)))
        }
    }

    fn non_numeric(&self, column: &str, value: &str) -> LeagueError {
        LeagueError::NonNumericField {
            path: self.path.to_path_buf(),
            line: self.line,
            column: column.to_string(),
            value: value.to_string(),
        }
    }
}

fn parse_manager(cell: &Cell<'_>, columns: &ManagerColumns) -> Result<ManagerRecord> {
    let mut weeks = [0.0; 4];
    for ((slot, &idx), week) in weeks.iter_mut().zip(&columns.weeks).zip(Week::ALL) {
        *slot = cell.float(idx, week.column())?;
    }

    Ok(ManagerRecord {
        manager: cell.text(columns.manager).to_string(),
        weeks,
        wins: cell.parse(columns.wins, "wins")?,
        losses: cell.parse(columns.losses, "losses")?,
        score: cell.float(columns.score, "score")?,
    })
}

/// Load the quarterly manager data file.
///
/// Every required column must be present before any row is read, and every
/// numeric cell must parse; a single bad cell fails the whole load.
pub fn load_managers(path: &Path) -> Result<Vec<ManagerRecord>> {
    info!("reading {}...", path.display());
    let (mut reader, headers) = open_reader(path)?;
    let columns = ManagerColumns::resolve(&headers, path)?;

    let mut managers = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record.map_err(|e| LeagueError::csv(path, e))?;
        let cell = Cell {
            record: &record,
            path,
            line: record.position().map_or(i as u64 + 2, |p| p.line()),
        };
        managers.push(parse_manager(&cell, &columns)?);
    }

    if managers.is_empty() {
        return Err(LeagueError::EmptyInput {
            path: path.to_path_buf(),
        });
    }
    Ok(managers)
}

/// Write the ranked tier list.
pub fn write_tier_list(path: &Path, grades: &[ManagerGrade]) -> Result<()> {
    info!("Building {}...", path.display());
    write_atomic(path, |writer| {
        if grades.is_empty() {
            return writer.write_record(TIER_COLUMNS);
        }
        for grade in grades {
            writer.serialize(grade)?;
        }
        Ok(())
    })
}

/// Read a tier list previously written by [`write_tier_list`].
pub fn read_tier_list(path: &Path) -> Result<Vec<ManagerGrade>> {
    let (mut reader, headers) = open_reader(path)?;
    for column in TIER_COLUMNS {
        column_index(&headers, column, path)?;
    }

    reader
        .deserialize()
        .collect::<std::result::Result<Vec<ManagerGrade>, _>>()
        .map_err(|e| LeagueError::csv(path, e))
}
