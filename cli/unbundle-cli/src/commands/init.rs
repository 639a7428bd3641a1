use std::path::Path;

use anyhow::{Context, Result};
use unbundle_capabilities::{init_workspace, Settings};

use crate::output;

pub fn run(root: &Path, config: Option<&Path>) -> Result<()> {
    let settings = Settings::load(root, config).context("Failed to load settings")?;

    let marker = init_workspace(&settings)
        .with_context(|| format!("Failed to initialize {}", settings.data_path().display()))?;
    output::written(&marker.display().to_string());

    Ok(())
}
