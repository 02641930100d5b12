//! Default command: list items, optionally filtered.

use crate::args::ListArgs;
use anyhow::{Context, Result};
use std::io::Write;
use zotero_store_core::render::list_lines;
use zotero_store_core::{ItemListQuery, ItemRepository, LibraryService};

pub fn run<R: ItemRepository>(service: &LibraryService<R>, args: &ListArgs) -> Result<()> {
    let query = ItemListQuery::new(args.title.clone(), args.tag.clone());
    let items = service.list(&query).context("listing items")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if args.json {
        serde_json::to_writer_pretty(&mut out, &items).context("writing JSON output")?;
        writeln!(out)?;
        return Ok(());
    }

    let storage_root = &service.config().storage_path;
    for item in &items {
        for line in list_lines(item, storage_root, args.verbose) {
            writeln!(out, "{line}")?;
        }
    }

    Ok(())
}
