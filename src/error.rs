use std::path::PathBuf;

/// Errors raised while loading or writing league data files.
///
/// Running out of players during a draft is not an error; see
/// [`crate::draft::DraftEngine::resolve_pick`].
#[derive(Debug, thiserror::Error)]
pub enum LeagueError {
    #[error("input file not found: {}", .path.display())]
    MissingInputFile { path: PathBuf },

    #[error("{} is empty", .path.display())]
    EmptyInput { path: PathBuf },

    #[error("failed to parse {}: {source}", .path.display())]
    Csv { path: PathBuf, source: csv::Error },

    #[error("{} must contain a '{column}' column", .path.display())]
    MissingColumn { path: PathBuf, column: String },

    #[error("{}: line {line}, column '{column}': '{value}' is not a valid number", .path.display())]
    NonNumericField {
        path: PathBuf,
        line: u64,
        column: String,
        value: String,
    },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl LeagueError {
    pub(crate) fn csv(path: &std::path::Path, source: csv::Error) -> Self {
        LeagueError::Csv {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, LeagueError>;
