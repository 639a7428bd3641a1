use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;
use unbundle_capabilities::{extract, Instructions, PathPolicy, Settings};

use crate::output;

pub fn run(
    root: &Path,
    config: Option<&Path>,
    input: Option<PathBuf>,
    allow_escape: bool,
) -> Result<()> {
    let mut settings = Settings::load(root, config).context("Failed to load settings")?;
    if let Some(input) = input {
        settings.input = input;
    }
    if allow_escape {
        settings.path_policy = PathPolicy::Unrestricted;
    }
    debug!(?settings, "resolved settings");

    output::action("📦 Extracting files...");
    extract(&settings, |record, _| output::written(&record.filepath))
        .with_context(|| format!("Failed to extract {}", settings.input_path().display()))?;

    output::instructions(&Instructions::from_settings(&settings));
    Ok(())
}
