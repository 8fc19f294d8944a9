//! Statistics tracking for a review pass

use crate::core::scanner::RepoOutcome;
use crate::git::PullOutcome;
use crate::git::SyncStatus;

/// Counters for one scan
///
/// Each repository lands in at most one of `updated`, `up_to_date` and
/// `errors`; `with_changes` is counted independently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStatistics {
    pub total: u64,
    pub updated: u64,
    pub up_to_date: u64,
    pub with_changes: u64,
    pub errors: u64,
}

/// Everything a scan produced, in scan order
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    pub outcomes: Vec<RepoOutcome>,
    pub statistics: ScanStatistics,
    /// Dirty checkouts and successful pulls
    pub attention: Vec<String>,
    /// Failed pulls and repositories that could not be processed
    pub errors: Vec<String>,
}

impl ScanReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one repository's outcome into the counters and item lists
    pub fn record(&mut self, outcome: RepoOutcome) {
        self.statistics.total += 1;

        match &outcome {
            RepoOutcome::Reviewed(report) => {
                let name = &report.entry.name;

                if report.dirty {
                    self.statistics.with_changes += 1;
                    self.attention
                        .push(format!("{}: {} uncommitted changes", name, report.changes));
                }

                // A failed fetch is shown on the remote line only
                let reconciliation = report.reconciliation;
                if let Some(n) = reconciliation.pulled_commits() {
                    self.statistics.updated += 1;
                    self.attention.push(format!("{name}: pulled {n} commits"));
                } else if reconciliation.pull == PullOutcome::Failed {
                    self.statistics.errors += 1;
                    self.errors.push(format!("{name}: pull failed"));
                } else if reconciliation.status == SyncStatus::UpToDate {
                    self.statistics.up_to_date += 1;
                }
            }
            RepoOutcome::Failed { entry, message } => {
                self.statistics.errors += 1;
                self.errors.push(format!("{}: {}", entry.name, message));
            }
        }

        self.outcomes.push(outcome);
    }

    /// True when no repository needs a second look
    pub fn is_clean(&self) -> bool {
        self.attention.is_empty() && self.errors.is_empty()
    }
}
