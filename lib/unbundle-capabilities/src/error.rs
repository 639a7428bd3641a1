//! Error taxonomy shared by every stage of an extraction run.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("input table not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("malformed table {}: {reason}", path.display())]
    DataFormat { path: PathBuf, reason: String },

    #[error("failed to {op} {}: {source}", path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("refusing to write outside the root: {filepath}")]
    UnsafePath { filepath: String },

    #[error("invalid config {}: {reason}", path.display())]
    Config { path: PathBuf, reason: String },
}

pub type Result<T> = std::result::Result<T, ExtractError>;

impl ExtractError {
    pub(crate) fn io(op: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        ExtractError::Io {
            op,
            path: path.into(),
            source,
        }
    }

    pub(crate) fn data_format(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        ExtractError::DataFormat {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
