//! Plain-text rendering of scan results

use std::fmt::Write;
use std::path::Path;

use super::config::{REPORT_TITLE, SEPARATOR_CHAR, SEPARATOR_WIDTH};
use super::scanner::{RepoOutcome, RepoReport};
use super::stats::ScanReport;
use crate::git::{PullOutcome, RepositoryEntry, SyncStatus};
use crate::utils::{Color, Palette};

/// Turns scan results into report text
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    palette: Palette,
}

impl Renderer {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    fn separator() -> String {
        SEPARATOR_CHAR.repeat(SEPARATOR_WIDTH)
    }

    /// Title, timestamp and target, followed by a rule
    pub fn header(&self, target: &Path, timestamp: &str) -> String {
        format!(
            "{REPORT_TITLE}\nDate: {timestamp}\nTarget: {}\n\n{}\n\n",
            target.display(),
            Self::separator()
        )
    }

    pub fn outcome(&self, outcome: &RepoOutcome) -> String {
        match outcome {
            RepoOutcome::Reviewed(report) => self.repo_block(report),
            RepoOutcome::Failed { entry, message } => {
                let mut out = self.title_line(entry);
                out.push_str(&format!(
                    "  {}\n\n",
                    self.palette.paint(Color::Red, format!("✗ Error: {message}"))
                ));
                out
            }
        }
    }

    fn title_line(&self, entry: &RepositoryEntry) -> String {
        let link = entry
            .symlink_target
            .as_ref()
            .map(|target| format!(" → {}", target.display()))
            .unwrap_or_default();
        format!(
            "{}{}\n",
            self.palette.paint(Color::Blue, format!("[{}]", entry.name)),
            link
        )
    }

    /// One repository: branch, local state, last commit, remote and pull lines
    pub fn repo_block(&self, report: &RepoReport) -> String {
        let p = &self.palette;
        let mut out = self.title_line(&report.entry);

        let _ = writeln!(out, "  Branch: {}", p.paint(Color::Blue, &report.branch));

        let status = if report.dirty {
            p.paint(
                Color::Yellow,
                format!("⚠ Dirty ({} files modified)", report.changes),
            )
        } else {
            p.paint(Color::Green, "✓ Clean")
        };
        let _ = writeln!(out, "  Status: {status}");

        let commit = &report.last_commit;
        let _ = writeln!(out, "  Last Commit: {} ({})", commit.date, commit.short_hash);
        let _ = writeln!(out, "    \"{}\" - {}", commit.summary, commit.author);

        let _ = writeln!(out, "  Remote: {}", self.remote_line(report.reconciliation.status));

        match report.reconciliation.pull {
            PullOutcome::NotAttempted => {}
            PullOutcome::Succeeded => {
                let _ = writeln!(out, "  Pull: {}", p.paint(Color::Green, "✓ Success"));
            }
            PullOutcome::Failed => {
                let _ = writeln!(out, "  Pull: {}", p.paint(Color::Red, "✗ Failed"));
            }
        }

        out.push('\n');
        out
    }

    fn remote_line(&self, status: SyncStatus) -> String {
        let text = match status.symbol() {
            "" => status.text(),
            symbol => format!("{symbol} {}", status.text()),
        };
        let color = match status {
            SyncStatus::UpToDate => Color::Green,
            SyncStatus::FetchFailed
            | SyncStatus::NoRemoteTracking
            | SyncStatus::Ahead(_)
            | SyncStatus::Behind(_)
            | SyncStatus::Diverged { .. } => Color::Yellow,
        };
        self.palette.paint(color, text)
    }

    /// Totals, then attention and error lists when they have entries
    pub fn summary(&self, report: &ScanReport) -> String {
        let p = &self.palette;
        let stats = &report.statistics;
        let mut out = format!("{}\n\n=== Summary ===\n", Self::separator());

        let _ = writeln!(out, "Total repositories: {}", stats.total);
        let _ = writeln!(out, "{}", p.paint(Color::Green, format!("✓ Updated: {}", stats.updated)));
        let _ = writeln!(
            out,
            "{}",
            p.paint(Color::Blue, format!("→ Already up-to-date: {}", stats.up_to_date))
        );
        let _ = writeln!(
            out,
            "{}",
            p.paint(
                Color::Yellow,
                format!("⚠ With uncommitted changes: {}", stats.with_changes)
            )
        );
        let _ = writeln!(out, "{}", p.paint(Color::Red, format!("✗ Errors: {}", stats.errors)));
        out.push('\n');

        if !report.attention.is_empty() {
            out.push_str("=== Attention Required ===\n");
            for item in &report.attention {
                let _ = writeln!(out, "{} {}", p.paint(Color::Yellow, "⚠"), item);
            }
            out.push('\n');
        }

        if !report.errors.is_empty() {
            out.push_str("=== Errors ===\n");
            for item in &report.errors {
                let _ = writeln!(out, "{} {}", p.paint(Color::Red, "✗"), item);
            }
            out.push('\n');
        }

        out
    }
}
