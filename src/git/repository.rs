//! Repository entries and the local queries run against them

use std::path::{Path, PathBuf};

use super::runner::{query_or, CommandRunner};
use crate::core::config::{GIT_METADATA_ENTRY, NOT_AVAILABLE, UNKNOWN_BRANCH};

// Git command arguments
const GIT_REV_PARSE_BRANCH_ARGS: &[&str] = &["rev-parse", "--abbrev-ref", "HEAD"];
const GIT_REFRESH_INDEX_ARGS: &[&str] = &["update-index", "-q", "--refresh"];
const GIT_DIFF_INDEX_ARGS: &[&str] = &["diff-index", "--quiet", "HEAD", "--"];
const GIT_STATUS_SHORT_ARGS: &[&str] = &["status", "--short"];
const GIT_LOG_DATE_ARGS: &[&str] = &["log", "-1", "--format=%ci"];
const GIT_LOG_SUBJECT_ARGS: &[&str] = &["log", "-1", "--format=%s"];
const GIT_LOG_AUTHOR_ARGS: &[&str] = &["log", "-1", "--format=%an"];
const GIT_LOG_HASH_ARGS: &[&str] = &["log", "-1", "--format=%h"];

/// One directory found under the scan root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryEntry {
    /// Directory base name, used for display and in summary items
    pub name: String,
    /// The path as listed under the scan root
    pub path: PathBuf,
    /// Where git commands run; the resolved target for symlinks
    pub working_dir: PathBuf,
    /// Set only when `path` is a symlink
    pub symlink_target: Option<PathBuf>,
}

impl RepositoryEntry {
    /// Builds an entry, following `path` if it is a symlink
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        let is_symlink = path
            .symlink_metadata()
            .map(|meta| meta.file_type().is_symlink())
            .unwrap_or(false);

        let symlink_target = if is_symlink {
            // A dangling link keeps its own path; it will fail validation
            Some(std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf()))
        } else {
            None
        };

        let working_dir = symlink_target
            .clone()
            .unwrap_or_else(|| path.to_path_buf());

        Self {
            name,
            path: path.to_path_buf(),
            working_dir,
            symlink_target,
        }
    }
}

/// Snapshot of the most recent commit
///
/// Fields hold `"N/A"` when their query failed, independently of each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitInfo {
    pub short_hash: String,
    pub author: String,
    pub summary: String,
    /// Calendar date only (YYYY-MM-DD)
    pub date: String,
}

impl Default for CommitInfo {
    fn default() -> Self {
        Self {
            short_hash: NOT_AVAILABLE.to_string(),
            author: NOT_AVAILABLE.to_string(),
            summary: NOT_AVAILABLE.to_string(),
            date: NOT_AVAILABLE.to_string(),
        }
    }
}

/// A repository entry bound to the runner used to query it
pub struct RepositoryHandle<'r, R: CommandRunner + ?Sized> {
    entry: RepositoryEntry,
    runner: &'r R,
}

impl<'r, R: CommandRunner + ?Sized> RepositoryHandle<'r, R> {
    pub fn new(entry: RepositoryEntry, runner: &'r R) -> Self {
        Self { entry, runner }
    }

    pub fn entry(&self) -> &RepositoryEntry {
        &self.entry
    }

    pub fn working_dir(&self) -> &Path {
        &self.entry.working_dir
    }

    /// Runs a git command in this repository's working directory
    pub async fn git(&self, args: &[&str]) -> (bool, String) {
        self.runner.run(self.working_dir(), args).await
    }

    /// Runs a git query, substituting `default` on failure or empty output
    pub async fn query_or(&self, args: &[&str], default: &str) -> String {
        query_or(self.runner, self.working_dir(), args, default).await
    }

    /// True if the working directory carries a `.git` directory or gitdir file
    pub fn is_valid_repository(&self) -> bool {
        self.working_dir().join(GIT_METADATA_ENTRY).exists()
    }

    /// Name of the checked-out branch, or "unknown" if HEAD can't be resolved
    pub async fn current_branch(&self) -> String {
        match self.git(GIT_REV_PARSE_BRANCH_ARGS).await {
            (true, branch) => branch,
            (false, _) => UNKNOWN_BRANCH.to_string(),
        }
    }

    /// Returns (dirty, changed_entry_count)
    ///
    /// A diff-index that fails to run at all also reports dirty; the two
    /// cases are not told apart here.
    pub async fn is_dirty(&self) -> (bool, usize) {
        // Refresh the index so stale stat info doesn't read as a change
        let _ = self.git(GIT_REFRESH_INDEX_ARGS).await;

        let (clean, _) = self.git(GIT_DIFF_INDEX_ARGS).await;
        if clean {
            return (false, 0);
        }

        let (_, listing) = self.git(GIT_STATUS_SHORT_ARGS).await;
        let count = listing.lines().filter(|line| !line.trim().is_empty()).count();
        (true, count)
    }

    /// Collects the last commit's date, subject, author and short hash
    pub async fn last_commit(&self) -> CommitInfo {
        let date = self.query_or(GIT_LOG_DATE_ARGS, NOT_AVAILABLE).await;
        let summary = self.query_or(GIT_LOG_SUBJECT_ARGS, NOT_AVAILABLE).await;
        let author = self.query_or(GIT_LOG_AUTHOR_ARGS, NOT_AVAILABLE).await;
        let short_hash = self.query_or(GIT_LOG_HASH_ARGS, NOT_AVAILABLE).await;

        CommitInfo {
            short_hash,
            author,
            summary,
            // "%ci" is "2024-05-01 12:34:56 +0200"; keep the date part
            date: date
                .split_whitespace()
                .next()
                .unwrap_or(NOT_AVAILABLE)
                .to_string(),
        }
    }
}
