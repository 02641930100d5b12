//! Command dispatch: opens the library and routes to command handlers.

mod list;
mod open;
mod reference;

use crate::args::{Cli, Command};
use anyhow::{Context, Result};
use zotero_store_core::db::open_library;
use zotero_store_core::{Config, LibraryService, SqliteItemRepository};

/// Resolves configuration, opens the library and runs the selected command.
pub fn dispatch(cli: &Cli) -> Result<()> {
    let config = Config::resolve(&cli.config_overrides()).context("resolving configuration")?;
    let conn = open_library(&config.db_path)
        .with_context(|| format!("opening database {}", config.db_path.display()))?;
    let repo = SqliteItemRepository::try_new(&conn).context("preparing item repository")?;
    let service = LibraryService::new(repo, config);

    match &cli.command {
        None => list::run(&service, &cli.list),
        Some(Command::Open { id }) => open::run(&service, id),
        Some(Command::Reference { id }) => reference::run(&service, id),
    }
}
