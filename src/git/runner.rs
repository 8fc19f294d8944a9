//! Git command execution with a per-command timeout

use async_trait::async_trait;
use std::path::Path;
use std::time::Duration;
use tokio::process::Command;
use tracing::debug;

use crate::core::config::{GIT_COMMAND_TIMEOUT_SECS, TIMEOUT_MESSAGE};

/// Executes version-control commands scoped to one working directory
///
/// Implementations never fail: timeouts, non-zero exits and launch errors all
/// come back as `(false, output)` so callers can fold them into a result value.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Runs the command in `working_dir`
    /// Returns (success, trimmed stdout)
    async fn run(&self, working_dir: &Path, args: &[&str]) -> (bool, String);
}

/// Runs the `git` binary found on PATH
#[derive(Debug, Clone)]
pub struct GitRunner {
    timeout: Duration,
}

impl Default for GitRunner {
    fn default() -> Self {
        Self::new(Duration::from_secs(GIT_COMMAND_TIMEOUT_SECS))
    }
}

impl GitRunner {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl CommandRunner for GitRunner {
    async fn run(&self, working_dir: &Path, args: &[&str]) -> (bool, String) {
        debug!(dir = %working_dir.display(), args = ?args, "running git");

        let result = tokio::time::timeout(
            self.timeout,
            Command::new("git")
                .args(args)
                .current_dir(working_dir)
                // Never block on a credential prompt
                .env("GIT_TERMINAL_PROMPT", "0")
                .kill_on_drop(true)
                .output(),
        )
        .await;

        match result {
            Ok(Ok(output)) => {
                let success = output.status.success();
                let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
                if !success {
                    debug!(
                        dir = %working_dir.display(),
                        args = ?args,
                        stderr = %String::from_utf8_lossy(&output.stderr).trim(),
                        "git exited with failure"
                    );
                }
                (success, stdout)
            }
            Ok(Err(e)) => {
                debug!(dir = %working_dir.display(), error = %e, "failed to launch git");
                (false, e.to_string())
            }
            Err(_) => {
                debug!(
                    dir = %working_dir.display(),
                    args = ?args,
                    timeout_secs = self.timeout.as_secs(),
                    "git command timed out"
                );
                (false, TIMEOUT_MESSAGE.to_string())
            }
        }
    }
}

/// Runs a query and returns its output, or `default` when the command fails
/// or prints nothing
///
/// Every sentinel value in the crate goes through here.
pub async fn query_or<R: CommandRunner + ?Sized>(
    runner: &R,
    working_dir: &Path,
    args: &[&str],
    default: &str,
) -> String {
    match runner.run(working_dir, args).await {
        (true, output) if !output.is_empty() => output,
        _ => default.to_string(),
    }
}
