//! Resolution of record paths against the run root.

use std::path::{Component, Path, PathBuf};

use tracing::warn;

use crate::error::{ExtractError, Result};
use crate::structs::PathPolicy;

/// Check that `filepath` may be written under `policy`.
///
/// Under [`PathPolicy::Confined`] absolute paths and `..` components that
/// climb above the root are rejected. `a/../b` is fine, `a/../../b` is not.
pub fn check_destination(filepath: &str, policy: PathPolicy) -> Result<()> {
    if escapes_root(Path::new(filepath)) {
        match policy {
            PathPolicy::Confined => {
                return Err(ExtractError::UnsafePath {
                    filepath: filepath.to_string(),
                });
            }
            PathPolicy::Unrestricted => warn!(filepath, "writing outside the root"),
        }
    }
    Ok(())
}

/// Where `filepath` lands when resolved against `root`.
pub fn resolve(root: &Path, filepath: &str) -> PathBuf {
    root.join(filepath)
}

fn escapes_root(path: &Path) -> bool {
    let mut depth: usize = 0;
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => return true,
            Component::CurDir => {}
            Component::ParentDir => match depth.checked_sub(1) {
                Some(d) => depth = d,
                None => return true,
            },
            Component::Normal(_) => depth += 1,
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_paths_are_confined() {
        for ok in ["a.txt", "a/b/c/file.txt", "./x", "a/../b", ".github/workflows/ci.yml"] {
            check_destination(ok, PathPolicy::Confined).unwrap();
        }
    }

    #[test]
    fn escaping_paths_are_rejected() {
        for bad in ["../x", "a/../../x", "../../etc/passwd", "/etc/passwd"] {
            let err = check_destination(bad, PathPolicy::Confined).unwrap_err();
            assert!(matches!(err, ExtractError::UnsafePath { .. }), "{bad}");
        }
    }

    #[test]
    fn unrestricted_lets_everything_through() {
        check_destination("../x", PathPolicy::Unrestricted).unwrap();
        check_destination("/tmp/x", PathPolicy::Unrestricted).unwrap();
    }

    #[test]
    fn resolve_joins_under_root() {
        assert_eq!(
            resolve(Path::new("/work"), "src/main.rs"),
            PathBuf::from("/work/src/main.rs")
        );
    }
}
