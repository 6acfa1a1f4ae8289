//! aliasctl - manage email alias records
//!
//! Each invocation opens the database, runs one command and closes it again.

mod cli;
mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::process::ExitCode;

use aliasctl_core::{AliasStore, Config};
use cli::{Cli, Command};

fn main() -> ExitCode {
    // Argument errors exit here with usage text, before any store access
    let cli = Cli::parse();

    let config = Config::default()
        .with_database_path(cli.db)
        .with_log_level(cli.log_level);
    aliasctl_core::init_logging(&config.log_level);

    match run(&config, cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config, command: Command) -> Result<()> {
    let path = config.database_path();
    let store = AliasStore::open(path)
        .with_context(|| format!("failed to open alias database at {}", path.display()))?;

    tracing::debug!(path = %path.display(), command = ?command, "Running command");

    let outcome = {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        commands::execute(&store, command, &mut out)
    };

    // Close on both paths; the command's own error takes precedence
    let closed = store.close().context("failed to close alias database");
    outcome?;
    closed
}
