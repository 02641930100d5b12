//! `reference <id>`: print a markdown link citing the item's attachment.

use anyhow::{Context, Result};
use zotero_store_core::{ItemKey, ItemRepository, LibraryService};

pub fn run<R: ItemRepository>(service: &LibraryService<R>, key: &ItemKey) -> Result<()> {
    let reference = service
        .reference(key)
        .with_context(|| format!("generating reference for {key}"))?;
    println!("{reference}");
    Ok(())
}
