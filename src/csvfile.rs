//! Shared CSV plumbing for the draft and tier list files.

use std::fs::File;
use std::io::{ErrorKind, Write};
use std::path::Path;

use atomic_write_file::AtomicWriteFile;
use csv::{Reader, StringRecord, Writer};

use crate::error::{LeagueError, Result};

/// Open a CSV file with headers and return the reader plus its header row.
///
/// A missing file maps to [`LeagueError::MissingInputFile`] and a file with
/// no header row at all maps to [`LeagueError::EmptyInput`].
pub fn open_reader(path: &Path) -> Result<(Reader<File>, StringRecord)> {
    let file = File::open(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => LeagueError::MissingInputFile {
            path: path.to_path_buf(),
        },
        _ => LeagueError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(file);
    let headers = reader
        .headers()
        .map_err(|e| LeagueError::csv(path, e))?
        .clone();

    if headers.iter().all(|h| h.is_empty()) {
        return Err(LeagueError::EmptyInput {
            path: path.to_path_buf(),
        });
    }

    Ok((reader, headers))
}

/// Find the index of `column` in `headers`, failing with
/// [`LeagueError::MissingColumn`] when absent.
pub fn column_index(headers: &StringRecord, column: &str, path: &Path) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| LeagueError::MissingColumn {
            path: path.to_path_buf(),
            column: column.to_string(),
        })
}

/// Write a CSV file atomically.
///
/// The closure receives a writer over a temporary file; the destination is
/// only replaced once every row has been written and flushed.
pub fn write_atomic<F>(path: &Path, write_rows: F) -> Result<()>
where
    F: FnOnce(&mut Writer<&mut AtomicWriteFile>) -> csv::Result<()>,
{
    let write_err = |source: std::io::Error| LeagueError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut file = AtomicWriteFile::open(path).map_err(write_err)?;
    {
        let mut writer = csv::Writer::from_writer(&mut file);
        write_rows(&mut writer).map_err(|e| LeagueError::csv(path, e))?;
        writer.flush().map_err(write_err)?;
    }
    file.flush().map_err(write_err)?;
    file.commit().map_err(write_err)?;

    Ok(())
}
