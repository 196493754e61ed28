//! Scaffold generator engine.
//!
//! Materializes the fixed manifest onto the filesystem in three ordered
//! phases: ensure the project root, create the subdirectories, write the
//! placeholder files. Execution is strictly sequential and fail-fast;
//! whatever was written before a failing operation stays on disk.

use crate::error::{Error, Result};
use crate::manifest::{DIRS, FILES, PROJECT_ROOT};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Ensure the project root exists under `parent`.
///
/// Non-recursive: the root itself is created with a plain `create_dir`
/// when absent. An existing directory is reused as-is; an existing
/// non-directory is an error rather than something to replace.
/// Returns the root path and whether it already existed.
pub fn ensure_root(parent: &Path) -> Result<(PathBuf, bool)> {
    let root = parent.join(PROJECT_ROOT);

    if root.exists() {
        if !root.is_dir() {
            return Err(Error::RootObstructed(root));
        }
        debug!(root = %root.display(), "project root already present");
        return Ok((root, true));
    }

    fs::create_dir(&root).map_err(|source| Error::DirCreate {
        path: root.clone(),
        source,
    })?;
    debug!(root = %root.display(), "created project root");

    Ok((root, false))
}

/// Create every directory of the manifest under `root`.
///
/// Recursive and idempotent: parents are created as needed and existing
/// directories are left untouched. Returns the number of entries ensured.
pub fn create_dirs(root: &Path) -> Result<usize> {
    for dir in DIRS {
        let path = root.join(dir);
        fs::create_dir_all(&path).map_err(|source| Error::DirCreate {
            path: path.clone(),
            source,
        })?;
        debug!(dir = %path.display(), "ensured directory");
    }

    Ok(DIRS.len())
}

/// Write every file of the manifest under `root`.
///
/// Pre-existing files are overwritten without warning or backup; the
/// manifest literals are the only contents this tree is supposed to hold
/// right after scaffolding. Returns the number of files written.
pub fn write_files(root: &Path) -> Result<usize> {
    for spec in FILES {
        let path = root.join(spec.path);
        fs::write(&path, spec.contents).map_err(|source| Error::FileWrite {
            path: path.clone(),
            source,
        })?;
        debug!(file = %path.display(), bytes = spec.contents.len(), "wrote file");
    }

    Ok(FILES.len())
}
