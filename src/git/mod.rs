pub mod reconcile;
pub mod repository;
pub mod runner;
pub mod status;

#[cfg(test)]
pub(crate) mod testing;

// Public API - curated exports only
pub mod api;

// Re-export key items at module level for convenience
pub use api::*;
