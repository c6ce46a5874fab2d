mod cli;

use crate::cli::app::{App, Cli};
use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok(), cli.verbose))
        .with_writer(std::io::stderr)
        .init();

    let mut app = App::from_cli(cli)?;
    app.run()
}

/// `RUST_LOG` directives when given and valid, else `error` (`debug` with `--verbose`).
fn log_filter(directives: Option<String>, verbose: bool) -> EnvFilter {
    let fallback = if verbose { "debug" } else { "error" };
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(fallback))
}
