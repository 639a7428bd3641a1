use std::path::PathBuf;

use tracing::info;

use crate::config::Settings;
use crate::error::Result;
use crate::os::{create_directory, write_file};

/// Make sure the data directory exists and holds its marker file. The
/// marker is rewritten on every call.
pub fn init_workspace(settings: &Settings) -> Result<PathBuf> {
    let data_dir = settings.data_path();
    create_directory(&data_dir)?;

    let marker = settings.marker_path();
    write_file(&marker, &settings.marker_text)?;
    info!(path = %marker.display(), "workspace ready");

    Ok(marker)
}
