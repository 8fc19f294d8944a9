//! Review command implementation
//!
//! Prints the report header, streams one block per repository as the scan
//! reaches it, then prints the summary.

use anyhow::Result;
use std::io::Write;
use std::path::Path;

use crate::core::{FleetScanner, Renderer, ReviewConfig, ScanReport, HEADER_DATE_FORMAT};
use crate::utils::Palette;

/// Handles the review command for an already-validated target directory
///
/// Per-repository failures end up in the returned report; only a target
/// that can no longer be listed is an error.
pub async fn handle_review_command(target: &Path, config: &ReviewConfig) -> Result<ScanReport> {
    let renderer = Renderer::new(Palette::new(config.color));
    let scanner = FleetScanner::from_config(config);

    let timestamp = chrono::Local::now().format(HEADER_DATE_FORMAT).to_string();
    print!("{}", renderer.header(target, &timestamp));

    let report = scanner
        .scan_with(target, |outcome| {
            print!("{}", renderer.outcome(outcome));
            // Flush stdout - ignore errors as this is non-critical
            let _ = std::io::stdout().flush();
        })
        .await?;

    print!("{}", renderer.summary(&report));
    Ok(report)
}
