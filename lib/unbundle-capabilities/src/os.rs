use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::error::{ExtractError, Result};

/// Create `path` and any missing ancestors. Existing directories are fine.
pub fn create_directory(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| ExtractError::io("create directory", path, e))
}

/// Ensure a file's parent directory exists.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => create_directory(parent),
        _ => Ok(()),
    }
}

/// Write `content` to `path`, truncating whatever was there. The data is
/// synced to disk before this returns.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    let mut file = File::create(path).map_err(|e| ExtractError::io("create", path, e))?;
    file.write_all(content.as_bytes())
        .map_err(|e| ExtractError::io("write", path, e))?;
    file.sync_all().map_err(|e| ExtractError::io("sync", path, e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn create_directory_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a/b/c");
        create_directory(&nested).unwrap();
        create_directory(&nested).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn ensure_parent_dir_ignores_bare_file_names() {
        ensure_parent_dir(Path::new("file.txt")).unwrap();
    }

    #[test]
    fn write_file_truncates() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("f.txt");
        write_file(&path, "a much longer first version").unwrap();
        write_file(&path, "short").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "short");
    }

    #[test]
    fn write_into_missing_directory_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = write_file(&dir.path().join("missing/f.txt"), "x").unwrap_err();
        assert!(matches!(err, ExtractError::Io { op: "create", .. }));
    }
}
