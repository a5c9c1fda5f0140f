use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Malformed record: {0}")]
    Malformed(String),
    #[error("Input is unavailable: {0}")]
    Unavailable(#[from] io::Error)
}

impl SourceError {
    pub fn is_fatal(&self) -> bool {
        matches!(self, SourceError::Unavailable(_))
    }
}

impl From<csv::Error> for SourceError {
    fn from(error: csv::Error) -> Self {
        if error.is_io_error() {
            match error.into_kind() {
                csv::ErrorKind::Io(error) => SourceError::Unavailable(error),
                other => SourceError::Malformed(format!("{other:?}"))
            }
        } else {
            SourceError::Malformed(error.to_string())
        }
    }
}

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("Unable to create or access {} after {attempts} attempts", path.display())]
    Exhausted {
        path: PathBuf,
        attempts: usize
    },
    #[error("Unable to create or access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: io::Error
    }
}
