//! # repos-review
//!
//! `repos-review` audits a directory of Git checkouts. For every checkout it
//! reports the branch, uncommitted changes, the last commit and how the branch
//! relates to `origin`, and it fast-forwards checkouts that are purely behind.
//! It powers the `repos-review` CLI tool.
//!
//! ## Core Features
//!
//! - **Remote Reconciliation**: Fetch, compare and classify as up-to-date,
//!   ahead, behind, diverged, untracked or unreachable.
//! - **Safe Auto-Pull**: Only purely-behind checkouts are pulled, once.
//! - **Failure Isolation**: A broken repository is reported and the scan moves on.
//! - **Pluggable Runner**: Git runs behind the `CommandRunner` trait.
//!
//! ## Example
//!
//! ```rust,no_run
//! use repos_review::core::{FleetScanner, ReviewConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let scanner = FleetScanner::from_config(&ReviewConfig::default());
//!     let report = scanner.scan("/home/me/src").await?;
//!     println!("{} repositories, {} updated", report.statistics.total, report.statistics.updated);
//!     Ok(())
//! }
//! ```

pub mod commands;
pub mod core;
pub mod git;
pub mod utils;
