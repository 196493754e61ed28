//! Scaffold verification.
//!
//! Walks an existing scaffold and compares it against the manifest:
//! every manifest directory must be present, every manifest file must
//! match its literal byte-for-byte. Files the manifest does not name are
//! reported as extras but are not drift, since a scaffold is a starting
//! point for hand-written code.

use crate::error::{Error, Result};
use crate::manifest::{DIRS, FILES, PROJECT_ROOT};
use serde::Serialize;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

/// How a manifest entry diverged from the scaffold on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DriftKind {
    /// Entry is absent
    Missing,
    /// File is present but its contents differ from the manifest literal
    Modified,
}

/// A single manifest entry that diverged
#[derive(Debug, Clone, Serialize)]
pub struct Drift {
    /// Path relative to the project root; directories carry a trailing `/`
    pub path: String,
    pub kind: DriftKind,
}

/// Result of verifying a scaffold against the manifest
#[derive(Debug, Serialize)]
pub struct VerifyReport {
    /// Manifest entries present and byte-identical
    pub matched: usize,
    /// Manifest entries missing or modified
    pub drift: Vec<Drift>,
    /// Files on disk the manifest does not name (informational)
    pub extra: Vec<String>,
}

impl VerifyReport {
    /// True when every manifest entry is present and intact.
    pub fn is_clean(&self) -> bool {
        self.drift.is_empty()
    }

    /// Number of missing manifest entries.
    pub fn missing(&self) -> usize {
        self.drift
            .iter()
            .filter(|d| d.kind == DriftKind::Missing)
            .count()
    }

    /// Number of modified manifest files.
    pub fn modified(&self) -> usize {
        self.drift
            .iter()
            .filter(|d| d.kind == DriftKind::Modified)
            .count()
    }

    /// The drift error for a non-clean report, for CI-style callers
    /// that want a nonzero exit.
    pub fn drift_error(&self) -> Option<Error> {
        if self.is_clean() {
            None
        } else {
            Some(Error::Drift {
                missing: self.missing(),
                modified: self.modified(),
            })
        }
    }
}

/// Verify the scaffold under `parent` against the manifest.
///
/// Fails with `RootMissing` when there is nothing to verify. Read errors
/// on individual files abort the check; a half-readable tree is not
/// something a drift report can be trusted about.
pub fn verify(parent: &Path) -> Result<VerifyReport> {
    let root = parent.join(PROJECT_ROOT);

    if !root.is_dir() {
        return Err(Error::RootMissing(root));
    }

    let mut matched = 0usize;
    let mut drift = Vec::new();

    for dir in DIRS {
        let path = root.join(dir);
        if path.is_dir() {
            matched += 1;
        } else {
            drift.push(Drift {
                path: format!("{}/", dir),
                kind: DriftKind::Missing,
            });
        }
    }

    for spec in FILES {
        let path = root.join(spec.path);

        if !path.exists() {
            drift.push(Drift {
                path: spec.path.to_string(),
                kind: DriftKind::Missing,
            });
            continue;
        }

        let on_disk = fs::read(&path).map_err(|source| Error::FileRead {
            path: path.clone(),
            source,
        })?;

        if on_disk == spec.contents.as_bytes() {
            matched += 1;
        } else {
            debug!(file = %path.display(), "contents differ from manifest");
            drift.push(Drift {
                path: spec.path.to_string(),
                kind: DriftKind::Modified,
            });
        }
    }

    let extra = find_extra_files(&root)?;

    Ok(VerifyReport {
        matched,
        drift,
        extra,
    })
}

/// Collect files under `root` that the manifest does not name.
fn find_extra_files(root: &Path) -> Result<Vec<String>> {
    let mut extra = Vec::new();

    for entry in WalkDir::new(root).follow_links(false) {
        let entry = entry.map_err(|err| {
            let path = err
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| root.to_path_buf());
            let source = err
                .into_io_error()
                .unwrap_or_else(|| io::Error::new(io::ErrorKind::Other, "walk failed"));
            Error::FileRead { path, source }
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let rel_path = match entry.path().strip_prefix(root) {
            Ok(p) => p.to_string_lossy().replace('\\', "/"),
            Err(_) => continue,
        };

        if !FILES.iter().any(|spec| spec.path == rel_path) {
            extra.push(rel_path);
        }
    }

    extra.sort();
    Ok(extra)
}
