use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use git_tools::config;
use git_tools::git::Git2Repository;
use git_tools::ui;

mod cli;

use cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            ui::display_error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr; stdout carries command output only.
///
/// `--verbose` forces DEBUG, otherwise `RUST_LOG` decides with `warn` as the default.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();

    if verbose {
        tracing::debug!("verbose mode enabled");
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let repo = Git2Repository::open(&cli.repo)
        .with_context(|| format!("cannot open repository at {}", cli.repo.display()))?;

    let config = config::load_config(cli.config.as_deref(), repo.workdir())
        .context("cannot load configuration")?;

    cli::commands::execute(cli.command, &repo, &config)
}
