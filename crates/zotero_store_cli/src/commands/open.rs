//! `open <id>`: hand the item's first attachment to the system opener.

use crate::launcher::open_path;
use anyhow::{Context, Result};
use log::info;
use zotero_store_core::{ItemKey, ItemRepository, LibraryService};

pub fn run<R: ItemRepository>(service: &LibraryService<R>, key: &ItemKey) -> Result<()> {
    let path = service
        .open_target(key)
        .with_context(|| format!("getting item {key}"))?;

    open_path(&path).with_context(|| format!("opening file {}", path.display()))?;
    info!("event=item_open module=cli status=ok key={key}");
    Ok(())
}
