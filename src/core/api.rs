//! Public API for the core module.
//!
//! This module provides the stable public API for core functionality including:
//! - Candidate discovery under a scan root
//! - The sequential fleet scanner and its per-repository outcomes
//! - Statistics and attention/error accounting
//! - Report rendering and configuration
//!
//! Internal implementation details are not exposed through this API.

// Scanning
pub use super::discovery::{list_candidates, resolve_target};
pub use super::scanner::{FleetScanner, RepoOutcome, RepoReport};

// Statistics
pub use super::stats::{ScanReport, ScanStatistics};

// Rendering
pub use super::render::Renderer;

// Configuration
pub use super::config::ReviewConfig;
pub use super::config::{GIT_COMMAND_TIMEOUT_SECS, HEADER_DATE_FORMAT, NOT_AVAILABLE, REMOTE_NAME};
