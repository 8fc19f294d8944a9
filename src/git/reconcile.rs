//! Fetch, compare and fast-forward against the remote branch
//!
//! Each step short-circuits: a failed fetch never reaches the hash or count
//! queries, and only a purely-behind checkout is pulled.

use tracing::debug;

use super::repository::RepositoryHandle;
use super::runner::CommandRunner;
use super::status::{PullOutcome, Reconciliation, SyncStatus};
use crate::core::config::REMOTE_NAME;

/// Classifies a checkout against one remote and pulls when safe
#[derive(Debug, Clone)]
pub struct RemoteReconciler {
    remote: String,
}

impl Default for RemoteReconciler {
    fn default() -> Self {
        Self::new(REMOTE_NAME)
    }
}

impl RemoteReconciler {
    pub fn new(remote: impl Into<String>) -> Self {
        Self {
            remote: remote.into(),
        }
    }

    pub async fn reconcile<R: CommandRunner + ?Sized>(
        &self,
        handle: &RepositoryHandle<'_, R>,
        branch: &str,
    ) -> Reconciliation {
        let name = &handle.entry().name;

        let (fetched, _) = handle.git(&["fetch", &self.remote, branch]).await;
        if !fetched {
            debug!(repo = %name, branch, "fetch failed");
            return Reconciliation::report_only(SyncStatus::FetchFailed);
        }

        let remote_ref = format!("{}/{}", self.remote, branch);

        // A failed local lookup leaves an empty hash that never matches
        let (_, local_hash) = handle.git(&["rev-parse", "HEAD"]).await;
        let (remote_found, remote_hash) = handle.git(&["rev-parse", &remote_ref]).await;
        if !remote_found {
            return Reconciliation::report_only(SyncStatus::NoRemoteTracking);
        }

        if local_hash == remote_hash {
            return Reconciliation::report_only(SyncStatus::UpToDate);
        }

        let ahead = self
            .count(handle, &format!("{remote_ref}..HEAD"))
            .await;
        let behind = self
            .count(handle, &format!("HEAD..{remote_ref}"))
            .await;
        debug!(repo = %name, branch, ahead, behind, "compared with remote");

        let status = classify(ahead, behind);
        if !status.wants_pull() {
            return Reconciliation::report_only(status);
        }

        let (pulled, _) = handle
            .git(&["pull", "--ff-only", &self.remote, branch])
            .await;
        debug!(repo = %name, branch, pulled, "pull attempted");

        Reconciliation {
            status,
            pull: PullOutcome::from_success(pulled),
        }
    }

    /// Commit count for a revision range; anything non-numeric counts as zero
    async fn count<R: CommandRunner + ?Sized>(
        &self,
        handle: &RepositoryHandle<'_, R>,
        range: &str,
    ) -> u32 {
        let output = handle.query_or(&["rev-list", "--count", range], "0").await;
        output.trim().parse().unwrap_or(0)
    }
}

/// Maps ahead/behind counts onto a status
///
/// Equal hashes are handled before counting, so (0, 0) only shows up when
/// both count queries failed; it is reported as up to date.
pub fn classify(ahead: u32, behind: u32) -> SyncStatus {
    match (ahead, behind) {
        (0, 0) => SyncStatus::UpToDate,
        (a, 0) => SyncStatus::Ahead(a),
        (0, b) => SyncStatus::Behind(b),
        (a, b) => SyncStatus::Diverged {
            ahead: a,
            behind: b,
        },
    }
}
