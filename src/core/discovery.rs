//! Candidate discovery under the scan root

use anyhow::{bail, Result};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::git::RepositoryEntry;

/// Lists the immediate subdirectories of `root`, sorted by name
///
/// Symlinks pointing at directories are included; files and dangling links
/// are not. Nothing here checks for a `.git` entry.
pub fn list_candidates(root: impl AsRef<Path>) -> Result<Vec<RepositoryEntry>> {
    let root = root.as_ref();
    if !root.is_dir() {
        bail!("{} is not a valid directory", root.display());
    }

    let walker = WalkBuilder::new(root)
        .max_depth(Some(1))
        .standard_filters(false) // Hidden and ignored directories are still checkouts
        .follow_links(false) // Keep the link itself so it can be displayed
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    let mut candidates = Vec::new();
    for result in walker {
        let entry = match result {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "skipping unreadable entry");
                continue;
            }
        };

        if entry.depth() == 0 {
            continue;
        }

        // Path::is_dir follows symlinks
        if !entry.path().is_dir() {
            continue;
        }

        candidates.push(RepositoryEntry::from_path(entry.path()));
    }

    Ok(candidates)
}

/// Canonicalizes the user-supplied target and checks that it is a directory
pub fn resolve_target(path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = path.as_ref();
    let resolved = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    if !resolved.is_dir() {
        bail!("{} is not a valid directory", resolved.display());
    }
    Ok(resolved)
}
