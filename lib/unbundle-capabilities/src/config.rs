use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ExtractError, Result};
use crate::structs::PathPolicy;

pub const DEFAULT_INPUT: &str = "job_finder_app_files.csv";
pub const DEFAULT_CONFIG_FILE: &str = "unbundle.toml";
pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_MARKER_FILE: &str = ".gitkeep";
pub const DEFAULT_MARKER_TEXT: &str = "# Resume texts storage\n";
pub const DEFAULT_COMMIT_MESSAGE: &str = "Initial commit: Complete job-finder application";
pub const DEFAULT_BRANCH: &str = "main";

/// Everything a run needs to know, after defaults, config file and
/// environment have been merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub root: PathBuf,
    pub input: PathBuf,
    pub data_dir: PathBuf,
    pub marker_file: String,
    pub marker_text: String,
    pub commit_message: String,
    pub branch: String,
    pub path_policy: PathPolicy,
}

/// Shape of `unbundle.toml`. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub input: Option<PathBuf>,
    pub data_dir: Option<PathBuf>,
    pub marker_file: Option<String>,
    pub marker_text: Option<String>,
    pub commit_message: Option<String>,
    pub branch: Option<String>,
    pub allow_escape: Option<bool>,
}

impl ConfigFile {
    pub fn from_file(path: &Path) -> Result<Self> {
        let toml_str = fs::read_to_string(path).map_err(|e| ExtractError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        toml::from_str(&toml_str).map_err(|e| ExtractError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}

impl Settings {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Settings {
            root: root.into(),
            input: PathBuf::from(DEFAULT_INPUT),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            marker_file: DEFAULT_MARKER_FILE.to_string(),
            marker_text: DEFAULT_MARKER_TEXT.to_string(),
            commit_message: DEFAULT_COMMIT_MESSAGE.to_string(),
            branch: DEFAULT_BRANCH.to_string(),
            path_policy: PathPolicy::Confined,
        }
    }

    /// Defaults, then the config file, then `UNBUNDLE_*` variables from the
    /// process environment or `<root>/.env`.
    ///
    /// Without an explicit `config`, `unbundle.toml` in the root is read if
    /// it exists. An explicit path that does not exist is an error.
    pub fn load(root: impl Into<PathBuf>, config: Option<&Path>) -> Result<Self> {
        let mut settings = Settings::new(root);

        let config_path = match config {
            Some(path) => Some(path.to_path_buf()),
            None => {
                let candidate = settings.root.join(DEFAULT_CONFIG_FILE);
                candidate.is_file().then_some(candidate)
            }
        };
        if let Some(path) = config_path {
            debug!(path = %path.display(), "reading config");
            settings.apply_file(ConfigFile::from_file(&path)?);
        }

        let dotenv = read_env_file(&settings.root);
        settings.apply_env(|key| retrieve_from_env(key, &dotenv));
        Ok(settings)
    }

    pub fn apply_file(&mut self, file: ConfigFile) {
        if let Some(input) = file.input {
            self.input = input;
        }
        if let Some(data_dir) = file.data_dir {
            self.data_dir = data_dir;
        }
        if let Some(marker_file) = file.marker_file {
            self.marker_file = marker_file;
        }
        if let Some(marker_text) = file.marker_text {
            self.marker_text = marker_text;
        }
        if let Some(commit_message) = file.commit_message {
            self.commit_message = commit_message;
        }
        if let Some(branch) = file.branch {
            self.branch = branch;
        }
        if let Some(allow) = file.allow_escape {
            self.path_policy = if allow {
                PathPolicy::Unrestricted
            } else {
                PathPolicy::Confined
            };
        }
    }

    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(input) = lookup("UNBUNDLE_INPUT") {
            self.input = PathBuf::from(input);
        }
        if let Some(data_dir) = lookup("UNBUNDLE_DATA_DIR") {
            self.data_dir = PathBuf::from(data_dir);
        }
        if let Some(branch) = lookup("UNBUNDLE_BRANCH") {
            self.branch = branch;
        }
    }

    /// Input table path, relative inputs taken from the root.
    pub fn input_path(&self) -> PathBuf {
        self.root.join(&self.input)
    }

    pub fn data_path(&self) -> PathBuf {
        self.root.join(&self.data_dir)
    }

    pub fn marker_path(&self) -> PathBuf {
        self.data_path().join(&self.marker_file)
    }
}

/// Variables from `<root>/.env`. A missing or unreadable file yields none.
pub fn read_env_file(root: &Path) -> HashMap<String, String> {
    match dotenvy::from_path_iter(root.join(".env")) {
        Ok(iter) => iter.filter_map(|item| item.ok()).collect(),
        Err(_) => HashMap::new(),
    }
}

/// Read an optional variable. The process environment wins over `.env`.
pub fn retrieve_from_env(key: &str, dotenv: &HashMap<String, String>) -> Option<String> {
    env::var(key)
        .ok()
        .or_else(|| dotenv.get(key).cloned())
        .filter(|v| !v.is_empty())
}
