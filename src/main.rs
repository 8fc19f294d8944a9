//! repos-review: review a directory of git checkouts and pull the ones that are behind

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use repos_review::commands::handle_review_command;
use repos_review::core::{resolve_target, ReviewConfig, GIT_COMMAND_TIMEOUT_SECS};
use repos_review::utils::{Color, Palette};

#[derive(Parser)]
#[command(name = "repos-review")]
#[command(about = "Review git checkouts under a directory and fast-forward the ones that are behind")]
#[command(version)]
struct Cli {
    /// Directory whose immediate subdirectories are checked
    directory: PathBuf,

    #[arg(long, help = "Disable coloured output (also honours NO_COLOR)")]
    no_color: bool,

    #[arg(
        long,
        value_name = "SECS",
        default_value_t = GIT_COMMAND_TIMEOUT_SECS,
        help = "Timeout for each git command"
    )]
    timeout: u64,

    #[arg(short, long, help = "Log every git command to stderr")]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = ReviewConfig::from_cli(cli.timeout, cli.no_color);
    let palette = Palette::new(config.color);

    let target = match resolve_target(&cli.directory) {
        Ok(target) => target,
        Err(e) => {
            eprintln!("{}", palette.paint(Color::Red, e.to_string()));
            std::process::exit(1);
        }
    };

    // Per-repository failures are part of the report, not the exit status
    handle_review_command(&target, &config).await?;

    Ok(())
}
