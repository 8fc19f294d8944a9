//! Configuration constants and settings

use std::time::Duration;

// Git command configuration
pub const GIT_COMMAND_TIMEOUT_SECS: u64 = 30; // Per git invocation, fetch and pull included
pub const REMOTE_NAME: &str = "origin";

// Sentinel values for queries that fail or come back empty
pub const NOT_AVAILABLE: &str = "N/A";
pub const UNKNOWN_BRANCH: &str = "unknown";
pub const TIMEOUT_MESSAGE: &str = "Command timeout";

// Repository metadata directory (or gitdir file for worktrees)
pub const GIT_METADATA_ENTRY: &str = ".git";

// Report formatting
pub const REPORT_TITLE: &str = "=== Git Repository Review & Pull ===";
pub const SEPARATOR_CHAR: &str = "━";
pub const SEPARATOR_WIDTH: usize = 60;
pub const HEADER_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S %Z";

/// Environment variable that disables colour when set to a non-empty value
pub const NO_COLOR_ENV: &str = "NO_COLOR";

/// Runtime settings for a review pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewConfig {
    /// Upper bound on every single git invocation
    pub command_timeout: Duration,
    /// The one remote that is fetched from and pulled from
    pub remote: String,
    /// Whether the rendered report carries ANSI colour codes
    pub color: bool,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            command_timeout: Duration::from_secs(GIT_COMMAND_TIMEOUT_SECS),
            remote: REMOTE_NAME.to_string(),
            color: true,
        }
    }
}

impl ReviewConfig {
    /// Builds the configuration from CLI flags and the environment
    ///
    /// Priority order for colour:
    /// 1. --no-color flag → off
    /// 2. NO_COLOR env var set and non-empty → off
    /// 3. Default → on
    pub fn from_cli(timeout_secs: u64, no_color: bool) -> Self {
        let env_disables_color = std::env::var(NO_COLOR_ENV)
            .map(|value| !value.is_empty())
            .unwrap_or(false);

        Self {
            command_timeout: Duration::from_secs(timeout_secs.max(1)), // Ensure at least 1
            remote: REMOTE_NAME.to_string(),
            color: !(no_color || env_disables_color),
        }
    }
}
