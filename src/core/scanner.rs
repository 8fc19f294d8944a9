//! Sequential review of every checkout under a directory
//!
//! Repositories are processed one at a time in name order. A repository that
//! errors or panics is recorded and the scan moves on to the next one.

use anyhow::{ensure, Result};
use futures::FutureExt;
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::path::Path;
use tracing::{debug, info, warn};

use super::config::ReviewConfig;
use super::discovery::list_candidates;
use super::stats::ScanReport;
use crate::git::{
    CommandRunner, CommitInfo, GitRunner, Reconciliation, RemoteReconciler, RepositoryEntry,
    RepositoryHandle,
};

/// Local and remote facts gathered for one repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoReport {
    pub entry: RepositoryEntry,
    pub branch: String,
    pub dirty: bool,
    /// Lines in the short status listing; 0 when clean
    pub changes: usize,
    pub last_commit: CommitInfo,
    pub reconciliation: Reconciliation,
}

/// What happened to one valid repository during a scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoOutcome {
    Reviewed(RepoReport),
    /// Processing stopped early; `message` is shown in the error list
    Failed {
        entry: RepositoryEntry,
        message: String,
    },
}

impl RepoOutcome {
    pub fn entry(&self) -> &RepositoryEntry {
        match self {
            RepoOutcome::Reviewed(report) => &report.entry,
            RepoOutcome::Failed { entry, .. } => entry,
        }
    }
}

/// Walks a directory of checkouts and reviews each one
pub struct FleetScanner<R: CommandRunner> {
    runner: R,
    reconciler: RemoteReconciler,
}

impl FleetScanner<GitRunner> {
    /// Scanner backed by the real `git` binary
    pub fn from_config(config: &ReviewConfig) -> Self {
        Self::new(
            GitRunner::new(config.command_timeout),
            RemoteReconciler::new(config.remote.clone()),
        )
    }
}

impl<R: CommandRunner> FleetScanner<R> {
    pub fn new(runner: R, reconciler: RemoteReconciler) -> Self {
        Self { runner, reconciler }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub async fn scan(&self, root: impl AsRef<Path>) -> Result<ScanReport> {
        self.scan_with(root, |_| {}).await
    }

    /// Scans `root`, handing each outcome to `observer` as soon as it is known
    ///
    /// Fails only if `root` itself cannot be listed.
    pub async fn scan_with<F>(&self, root: impl AsRef<Path>, mut observer: F) -> Result<ScanReport>
    where
        F: FnMut(&RepoOutcome),
    {
        let root = root.as_ref();
        let candidates = list_candidates(root)?;
        info!(root = %root.display(), candidates = candidates.len(), "starting review");

        let mut report = ScanReport::new();
        for entry in candidates {
            let handle = RepositoryHandle::new(entry, &self.runner);
            if !handle.is_valid_repository() {
                debug!(dir = %handle.entry().path.display(), "not a repository, skipping");
                continue;
            }

            let outcome = match AssertUnwindSafe(self.review(&handle)).catch_unwind().await {
                Ok(Ok(repo_report)) => RepoOutcome::Reviewed(repo_report),
                Ok(Err(e)) => Self::failed(&handle, format!("{e:#}")),
                Err(payload) => Self::failed(&handle, panic_message(payload.as_ref())),
            };

            observer(&outcome);
            report.record(outcome);
        }

        info!(
            total = report.statistics.total,
            updated = report.statistics.updated,
            errors = report.statistics.errors,
            "review finished"
        );
        Ok(report)
    }

    /// Gathers branch, dirty state, last commit and remote status
    pub async fn review(&self, handle: &RepositoryHandle<'_, R>) -> Result<RepoReport> {
        ensure!(
            handle.working_dir().is_dir(),
            "working directory {} disappeared",
            handle.working_dir().display()
        );

        let branch = handle.current_branch().await;
        let (dirty, changes) = handle.is_dirty().await;
        let last_commit = handle.last_commit().await;
        let reconciliation = self.reconciler.reconcile(handle, &branch).await;

        Ok(RepoReport {
            entry: handle.entry().clone(),
            branch,
            dirty,
            changes,
            last_commit,
            reconciliation,
        })
    }

    fn failed(handle: &RepositoryHandle<'_, R>, message: String) -> RepoOutcome {
        warn!(repo = %handle.entry().name, error = %message, "repository failed");
        RepoOutcome::Failed {
            entry: handle.entry().clone(),
            message,
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unexpected failure".to_string()
    }
}
