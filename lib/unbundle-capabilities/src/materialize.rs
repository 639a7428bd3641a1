use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;
use crate::os::{ensure_parent_dir, write_file};
use crate::paths::resolve;
use crate::structs::{ExtractReport, Record};

/// Write one record under `root`, creating parent directories as needed.
/// Returns the path that was written.
pub fn materialize(root: &Path, record: &Record) -> Result<PathBuf> {
    let target = resolve(root, &record.filepath);
    ensure_parent_dir(&target)?;
    write_file(&target, &record.content)?;
    debug!(path = %target.display(), bytes = record.content.len(), "wrote file");
    Ok(target)
}

/// Write every record in order, stopping at the first failure. Files
/// written before the failure are left in place.
pub fn materialize_all<F>(root: &Path, records: &[Record], mut on_written: F) -> Result<ExtractReport>
where
    F: FnMut(&Record, &Path),
{
    let mut report = ExtractReport::default();
    for record in records {
        let target = materialize(root, record)?;
        on_written(record, &target);
        report.written.push(target);
    }
    Ok(report)
}
