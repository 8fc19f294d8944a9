//! Public API for git operations.
//!
//! This module provides the stable public API for git-related functionality:
//! - Running git with a timeout through a swappable runner
//! - Local repository queries (branch, dirty state, last commit)
//! - Remote reconciliation and fast-forward pulls
//!
//! ## Example: Reconciling one checkout
//!
//! ```rust,no_run
//! use repos_review::git::{GitRunner, RemoteReconciler, RepositoryEntry, RepositoryHandle};
//!
//! async fn check(path: &std::path::Path) {
//!     let runner = GitRunner::default();
//!     let handle = RepositoryHandle::new(RepositoryEntry::from_path(path), &runner);
//!     let branch = handle.current_branch().await;
//!     let result = RemoteReconciler::default().reconcile(&handle, &branch).await;
//!     println!("{}", result.status.text());
//! }
//! ```

// Command execution
pub use super::runner::{query_or, CommandRunner, GitRunner};

// Repository queries
pub use super::repository::{CommitInfo, RepositoryEntry, RepositoryHandle};

// Reconciliation
pub use super::reconcile::{classify, RemoteReconciler};
pub use super::status::{PullOutcome, Reconciliation, SyncStatus};
