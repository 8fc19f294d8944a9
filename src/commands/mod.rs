//! Command handlers invoked from the CLI

pub mod review;

pub use review::handle_review_command;
