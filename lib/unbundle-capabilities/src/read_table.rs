use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use tracing::{debug, info};

use crate::error::{ExtractError, Result};
use crate::structs::Record;

/// Columns every input table must carry. Anything else is ignored.
pub const REQUIRED_COLUMNS: [&str; 2] = ["filepath", "content"];

/// Load every record of the CSV table at `path`, in file order.
pub fn read_table(path: &Path) -> Result<Vec<Record>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(ExtractError::NotFound {
                path: path.to_path_buf(),
            });
        }
        Err(e) => return Err(ExtractError::io("open", path, e)),
    };

    let records = parse_table(file, path)?;
    info!(path = %path.display(), records = records.len(), "loaded table");
    Ok(records)
}

/// Parse CSV text from `reader`. `source` only names the table in errors.
pub fn parse_table<R: Read>(reader: R, source: &Path) -> Result<Vec<Record>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|e| table_error(source, "header", e))?
        .clone();
    debug!(?headers, "table header");

    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(ExtractError::data_format(
                source,
                format!("missing required column `{column}`"),
            ));
        }
    }

    let mut records = Vec::new();
    for (index, row) in rdr.deserialize::<Record>().enumerate() {
        let number = index + 1;
        let record = row.map_err(|e| table_error(source, &format!("record {number}"), e))?;
        if record.filepath.trim().is_empty() {
            return Err(ExtractError::data_format(
                source,
                format!("record {number}: empty filepath"),
            ));
        }
        records.push(record);
    }

    Ok(records)
}

fn table_error(source: &Path, context: &str, err: csv::Error) -> ExtractError {
    let reason = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(e) => ExtractError::io("read", source, e),
        _ => ExtractError::data_format(source, format!("{context}: {reason}")),
    }
}
