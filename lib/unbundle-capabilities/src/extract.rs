use std::path::Path;

use tracing::info;

use crate::config::Settings;
use crate::error::Result;
use crate::materialize::materialize_all;
use crate::paths::check_destination;
use crate::read_table::read_table;
use crate::structs::{ExtractReport, Record};
use crate::workspace::init_workspace;

/// Run the whole pipeline: load the table, vet every path, write every
/// record, then prepare the data directory.
///
/// Nothing is written unless the table loads and every path passes the
/// configured policy. `on_written` is called after each file lands.
pub fn extract<F>(settings: &Settings, on_written: F) -> Result<ExtractReport>
where
    F: FnMut(&Record, &Path),
{
    let records = read_table(&settings.input_path())?;
    for record in &records {
        check_destination(&record.filepath, settings.path_policy)?;
    }

    let report = materialize_all(&settings.root, &records, on_written)?;
    init_workspace(settings)?;

    info!(files = report.len(), "extraction finished");
    Ok(report)
}
