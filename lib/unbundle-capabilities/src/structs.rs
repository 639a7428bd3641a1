use serde::Deserialize;
use std::path::PathBuf;

/// One row of the input table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Record {
    pub filepath: String,
    #[serde(default)]
    pub content: String,
}

impl Record {
    pub fn new(filepath: impl Into<String>, content: impl Into<String>) -> Self {
        Record {
            filepath: filepath.into(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathPolicy {
    /// Record paths must stay inside the root directory.
    #[default]
    Confined,
    /// Any path is written as given, absolute or not.
    Unrestricted,
}

/// Destinations written by a run, in write order.
#[derive(Debug, Default)]
pub struct ExtractReport {
    pub written: Vec<PathBuf>,
}

impl ExtractReport {
    pub fn len(&self) -> usize {
        self.written.len()
    }

    pub fn is_empty(&self) -> bool {
        self.written.is_empty()
    }
}
