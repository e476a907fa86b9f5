use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{label} not found: {}", .path.display())]
    MissingFile { label: &'static str, path: PathBuf },
    #[error("{0}")]
    InvalidInput(String),
    #[error("invalid JSON: {0}")]
    JsonParse(#[from] serde_json::Error),
    #[error("{0}")]
    Io(#[from] io::Error),
    #[error("invalid number: {0:?}")]
    InvalidNumberFormat(String),
    #[error("missing argument: {0}")]
    MissingArgument(&'static str),
    #[error("unknown command")]
    UnknownCommand,
}

impl From<tempfile::PersistError> for Error {
    fn from(err: tempfile::PersistError) -> Self {
        Error::Io(err.error)
    }
}

/// Fails with `MissingFile` unless `path` names a regular file.
pub fn require_file(label: &'static str, path: &std::path::Path) -> Result<(), Error> {
    if path.is_file() {
        Ok(())
    } else {
        Err(Error::MissingFile {
            label,
            path: path.to_path_buf(),
        })
    }
}
