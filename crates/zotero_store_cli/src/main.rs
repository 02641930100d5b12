//! `store-zotero`: list, open and cite items from a local Zotero library.
//!
//! # Responsibility
//! - Parse arguments, initialize logging and dispatch to commands.
//! - Report any failure with its context chain and exit non-zero.

mod args;
mod commands;
mod launcher;

use anyhow::{anyhow, Context, Result};
use args::Cli;
use clap::Parser;
use zotero_store_core::{default_log_level, init_logging, LogTarget};

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let target = match &cli.log_dir {
        Some(dir) => LogTarget::directory(dir)
            .map_err(|err| anyhow!(err))
            .context("configuring log directory")?,
        None => LogTarget::Stderr,
    };
    let level = cli
        .log_level
        .as_deref()
        .unwrap_or_else(|| default_log_level(&target));
    init_logging(level, target)
        .map_err(|err| anyhow!(err))
        .context("initializing logging")?;

    commands::dispatch(cli)
}
