//! Remote synchronization status and pull outcome

/// How a checkout relates to its remote branch after a fetch
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyncStatus {
    /// The fetch itself failed (network, auth, missing remote)
    FetchFailed,
    /// The remote has no branch matching the local one
    NoRemoteTracking,
    /// Local HEAD and the remote branch are the same commit
    UpToDate,
    /// Local has commits the remote lacks
    Ahead(u32),
    /// Remote has commits the local checkout lacks
    Behind(u32),
    /// Both sides have commits the other lacks
    Diverged { ahead: u32, behind: u32 },
}

impl SyncStatus {
    /// Returns the symbol shown in front of the remote line
    pub fn symbol(&self) -> &str {
        match self {
            SyncStatus::UpToDate => "✓",
            SyncStatus::FetchFailed | SyncStatus::Diverged { .. } => "⚠",
            SyncStatus::NoRemoteTracking => "",
            SyncStatus::Ahead(_) => "↑",
            SyncStatus::Behind(_) => "↓",
        }
    }

    /// Returns the text representation of this status
    pub fn text(&self) -> String {
        match self {
            SyncStatus::FetchFailed => "Fetch failed".to_string(),
            SyncStatus::NoRemoteTracking => "No remote tracking".to_string(),
            SyncStatus::UpToDate => "Up-to-date".to_string(),
            SyncStatus::Ahead(n) => format!("Ahead {n} commits"),
            SyncStatus::Behind(n) => format!("Behind {n} commits"),
            SyncStatus::Diverged { ahead, behind } => {
                format!("Diverged (ahead {ahead}, behind {behind})")
            }
        }
    }

    /// Whether a fast-forward pull is warranted
    pub fn wants_pull(&self) -> bool {
        matches!(self, SyncStatus::Behind(_))
    }
}

/// Result of the single pull attempted for a behind checkout
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PullOutcome {
    #[default]
    NotAttempted,
    Succeeded,
    Failed,
}

impl PullOutcome {
    pub fn from_success(success: bool) -> Self {
        if success {
            PullOutcome::Succeeded
        } else {
            PullOutcome::Failed
        }
    }
}

/// Status plus pull outcome for one reconciliation call
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reconciliation {
    pub status: SyncStatus,
    pub pull: PullOutcome,
}

impl Reconciliation {
    /// A result where no pull was attempted
    pub fn report_only(status: SyncStatus) -> Self {
        Self {
            status,
            pull: PullOutcome::NotAttempted,
        }
    }

    /// Number of commits brought in by a successful pull
    pub fn pulled_commits(&self) -> Option<u32> {
        match (self.status, self.pull) {
            (SyncStatus::Behind(n), PullOutcome::Succeeded) => Some(n),
            _ => None,
        }
    }
}
